use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::aggregator::ShoppingListAggregator;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingListView;
use crate::domain::shopping_list::use_cases::view_outstanding::ViewOutstandingItemsUseCase;

pub struct ViewOutstandingItemsUseCaseImpl {
    pub aggregator: Arc<ShoppingListAggregator>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ViewOutstandingItemsUseCase for ViewOutstandingItemsUseCaseImpl {
    async fn execute(&self) -> Result<ShoppingListView, ShoppingListError> {
        match self.aggregator.view_outstanding().await {
            Ok(view) => Ok(view),
            Err(ShoppingListError::StateCorrupted) => {
                self.logger
                    .error("Shopping list registry is corrupted, serving empty list");
                Ok(ShoppingListView::new())
            }
            Err(err) => Err(err),
        }
    }
}
