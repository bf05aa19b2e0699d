use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;
use crate::domain::shared::value_objects::UserId;

pub struct GetLocalRecipesParams {
    pub owner: Option<UserId>,
}

#[async_trait]
pub trait GetLocalRecipesUseCase: Send + Sync {
    async fn execute(&self, params: GetLocalRecipesParams) -> Result<Vec<Recipe>, RecipeError>;
}
