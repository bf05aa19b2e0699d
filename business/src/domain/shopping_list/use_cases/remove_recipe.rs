use async_trait::async_trait;

use crate::domain::shopping_list::errors::ShoppingListError;

pub struct RemoveRecipeFromListParams {
    pub recipe_id: String,
}

/// Stops tracking a recipe and clears all of its check state.
#[async_trait]
pub trait RemoveRecipeFromListUseCase: Send + Sync {
    async fn execute(&self, params: RemoveRecipeFromListParams) -> Result<(), ShoppingListError>;
}
