use async_trait::async_trait;

use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingListView;

/// Outstanding projection: only unchecked ingredients, only recipes that
/// still have at least one.
#[async_trait]
pub trait ViewOutstandingItemsUseCase: Send + Sync {
    async fn execute(&self) -> Result<ShoppingListView, ShoppingListError>;
}
