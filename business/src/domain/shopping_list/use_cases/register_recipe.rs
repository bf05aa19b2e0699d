use async_trait::async_trait;

use crate::domain::recipe::model::Recipe;
use crate::domain::shopping_list::errors::ShoppingListError;

pub struct RegisterRecipeParams {
    pub recipe: Recipe,
}

/// Starts tracking a recipe's ingredients on the shopping list. Called when a
/// recipe's ingredients first become known (typically on first view); never
/// overwrites existing check state.
#[async_trait]
pub trait RegisterRecipeUseCase: Send + Sync {
    async fn execute(&self, params: RegisterRecipeParams) -> Result<(), ShoppingListError>;
}
