use async_trait::async_trait;

use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingListView;

/// Full projection: every tracked ingredient with its current check state.
#[async_trait]
pub trait ViewFullShoppingListUseCase: Send + Sync {
    async fn execute(&self) -> Result<ShoppingListView, ShoppingListError>;
}
