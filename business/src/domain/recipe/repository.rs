use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::Recipe;

/// Port over the locally-owned recipe store.
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    async fn get_by_id(&self, id: &str) -> Result<Recipe, RepositoryError>;
    /// Lists local recipes, optionally filtered by owner.
    async fn get_all(&self, owner: Option<&UserId>) -> Result<Vec<Recipe>, RepositoryError>;
    async fn save(&self, recipe: &Recipe) -> Result<(), RepositoryError>;
    /// Returns the number of rows removed. Zero is not an error: deleting an
    /// already-absent recipe must succeed.
    async fn delete(&self, id: &str) -> Result<u64, RepositoryError>;
}
