use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::aggregator::ShoppingListAggregator;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::use_cases::register_recipe::{
    RegisterRecipeParams, RegisterRecipeUseCase,
};

pub struct RegisterRecipeUseCaseImpl {
    pub aggregator: Arc<ShoppingListAggregator>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterRecipeUseCase for RegisterRecipeUseCaseImpl {
    async fn execute(&self, params: RegisterRecipeParams) -> Result<(), ShoppingListError> {
        self.logger.debug(&format!(
            "Tracking recipe {} on shopping list",
            params.recipe.id
        ));
        self.aggregator.register_recipe(&params.recipe).await
    }
}
