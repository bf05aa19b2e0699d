use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::Favorite;

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    async fn get_by_user(&self, user_id: &UserId) -> Result<Vec<Favorite>, RepositoryError>;
    async fn find_by_recipe(
        &self,
        user_id: &UserId,
        recipe_id: &str,
    ) -> Result<Option<Favorite>, RepositoryError>;
    async fn save(&self, favorite: &Favorite) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// Removes every favorite pointing at the given recipe, across users.
    /// Returns the number of rows removed.
    async fn delete_by_recipe(&self, recipe_id: &str) -> Result<u64, RepositoryError>;
}
