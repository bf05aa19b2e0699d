use async_trait::async_trait;

use crate::domain::shopping_list::errors::ShoppingListError;

/// Drops every checked ingredient from the list and prunes recipes left
/// without ingredients.
#[async_trait]
pub trait ClearCheckedItemsUseCase: Send + Sync {
    async fn execute(&self) -> Result<(), ShoppingListError>;
}
