use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;

pub struct GetRecipeByIdParams {
    pub id: String,
}

/// Resolves a recipe by id: local repository first, remote catalog on miss.
#[async_trait]
pub trait GetRecipeByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetRecipeByIdParams) -> Result<Recipe, RecipeError>;
}
