use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::model::Favorite;
use crate::domain::shared::value_objects::UserId;

pub struct AddFavoriteParams {
    pub user_id: UserId,
    pub recipe_id: String,
    pub title: String,
    pub image: String,
}

/// Saves a favorite pointer. Favoriting the same recipe twice returns the
/// existing record instead of duplicating it.
#[async_trait]
pub trait AddFavoriteUseCase: Send + Sync {
    async fn execute(&self, params: AddFavoriteParams) -> Result<Favorite, FavoriteError>;
}
