use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::{Recipe, RecipeDraft};
use crate::domain::shared::value_objects::UserId;

pub struct CreateRecipeParams {
    pub draft: RecipeDraft,
    pub owner: UserId,
}

#[async_trait]
pub trait CreateRecipeUseCase: Send + Sync {
    async fn execute(&self, params: CreateRecipeParams) -> Result<Recipe, RecipeError>;
}
