use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::aggregator::ShoppingListAggregator;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::use_cases::remove_recipe::{
    RemoveRecipeFromListParams, RemoveRecipeFromListUseCase,
};

pub struct RemoveRecipeFromListUseCaseImpl {
    pub aggregator: Arc<ShoppingListAggregator>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveRecipeFromListUseCase for RemoveRecipeFromListUseCaseImpl {
    async fn execute(&self, params: RemoveRecipeFromListParams) -> Result<(), ShoppingListError> {
        self.logger.info(&format!(
            "Removing recipe {} from shopping list",
            params.recipe_id
        ));
        self.aggregator.remove_recipe(&params.recipe_id).await
    }
}
