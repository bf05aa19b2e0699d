use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;

pub struct DeleteRecipeParams {
    pub id: String,
}

/// Deletes an authored recipe, cascading over its favorite pointers and its
/// shopping-list state. Deleting an absent recipe succeeds.
#[async_trait]
pub trait DeleteRecipeUseCase: Send + Sync {
    async fn execute(&self, params: DeleteRecipeParams) -> Result<(), RecipeError>;
}
