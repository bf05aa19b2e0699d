use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::aggregator::ShoppingListAggregator;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingListView;
use crate::domain::shopping_list::use_cases::view_full::ViewFullShoppingListUseCase;

pub struct ViewFullShoppingListUseCaseImpl {
    pub aggregator: Arc<ShoppingListAggregator>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ViewFullShoppingListUseCase for ViewFullShoppingListUseCaseImpl {
    async fn execute(&self) -> Result<ShoppingListView, ShoppingListError> {
        match self.aggregator.view_full().await {
            Ok(view) => Ok(view),
            // A corrupted registry renders as an empty list rather than a
            // broken page; the log keeps the evidence.
            Err(ShoppingListError::StateCorrupted) => {
                self.logger
                    .error("Shopping list registry is corrupted, serving empty list");
                Ok(ShoppingListView::new())
            }
            Err(err) => Err(err),
        }
    }
}
