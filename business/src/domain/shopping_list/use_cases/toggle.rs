use async_trait::async_trait;

use crate::domain::shopping_list::errors::ShoppingListError;

pub struct ToggleIngredientParams {
    pub recipe_id: String,
    pub position: u32,
}

/// Flips one ingredient flag. Returns the new checked state.
#[async_trait]
pub trait ToggleIngredientUseCase: Send + Sync {
    async fn execute(&self, params: ToggleIngredientParams) -> Result<bool, ShoppingListError>;
}
