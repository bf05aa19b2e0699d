use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;

pub struct GetTrendingRecipesParams {
    pub number: u32,
}

/// Random catalog sampling backing the trending feed.
#[async_trait]
pub trait GetTrendingRecipesUseCase: Send + Sync {
    async fn execute(&self, params: GetTrendingRecipesParams) -> Result<Vec<Recipe>, RecipeError>;
}
