use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::{Recipe, RecipeDraft};

pub struct UpdateRecipeParams {
    pub id: String,
    pub draft: RecipeDraft,
}

/// Replaces an authored recipe with a validated draft. Only the write schema
/// is persisted; anything else a caller copied into an edit form is dropped.
#[async_trait]
pub trait UpdateRecipeUseCase: Send + Sync {
    async fn execute(&self, params: UpdateRecipeParams) -> Result<Recipe, RecipeError>;
}
