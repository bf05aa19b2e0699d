use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::reconcile::CookbookEntry;
use crate::domain::shared::value_objects::UserId;

pub struct GetCookbookParams {
    pub user_id: UserId,
}

/// Produces the reconciled cookbook listing: authored recipes merged with
/// favorite pointers, duplicate-free.
#[async_trait]
pub trait GetCookbookUseCase: Send + Sync {
    async fn execute(&self, params: GetCookbookParams) -> Result<Vec<CookbookEntry>, FavoriteError>;
}
