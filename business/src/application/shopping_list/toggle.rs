use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::aggregator::ShoppingListAggregator;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::use_cases::toggle::{
    ToggleIngredientParams, ToggleIngredientUseCase,
};

pub struct ToggleIngredientUseCaseImpl {
    pub aggregator: Arc<ShoppingListAggregator>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ToggleIngredientUseCase for ToggleIngredientUseCaseImpl {
    async fn execute(&self, params: ToggleIngredientParams) -> Result<bool, ShoppingListError> {
        let checked = self
            .aggregator
            .toggle(&params.recipe_id, params.position)
            .await?;
        self.logger.debug(&format!(
            "Ingredient {}/{} now {}",
            params.recipe_id,
            params.position,
            if checked { "checked" } else { "unchecked" }
        ));
        Ok(checked)
    }
}
