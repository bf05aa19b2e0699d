use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::aggregator::ShoppingListAggregator;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::use_cases::clear_checked::ClearCheckedItemsUseCase;

pub struct ClearCheckedItemsUseCaseImpl {
    pub aggregator: Arc<ShoppingListAggregator>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearCheckedItemsUseCase for ClearCheckedItemsUseCaseImpl {
    async fn execute(&self) -> Result<(), ShoppingListError> {
        self.logger.info("Clearing checked shopping list items");
        self.aggregator.clear_checked().await
    }
}
