use async_trait::async_trait;

use crate::domain::recipe::catalog::SearchFilters;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;

pub struct SearchRecipesParams {
    pub query: String,
    pub filters: SearchFilters,
}

/// Keyword search against the remote catalog. Catalog failures surface as an
/// empty result, never as an error.
#[async_trait]
pub trait SearchRecipesUseCase: Send + Sync {
    async fn execute(&self, params: SearchRecipesParams) -> Result<Vec<Recipe>, RecipeError>;
}
