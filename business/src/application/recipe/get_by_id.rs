use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::recipe::catalog::RemoteCatalogService;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::get_by_id::{GetRecipeByIdParams, GetRecipeByIdUseCase};

pub struct GetRecipeByIdUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub catalog: Arc<dyn RemoteCatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetRecipeByIdUseCase for GetRecipeByIdUseCaseImpl {
    async fn execute(&self, params: GetRecipeByIdParams) -> Result<Recipe, RecipeError> {
        self.logger
            .debug(&format!("Resolving recipe {}", params.id));

        match self.repository.get_by_id(&params.id).await {
            // Local data is authoritative; a hit must never reach the paid,
            // rate-limited catalog.
            Ok(recipe) => return Ok(recipe),
            Err(RepositoryError::NotFound) => {}
            Err(err) => {
                self.logger.error(&format!(
                    "Local lookup failed for recipe {}: {}",
                    params.id, err
                ));
            }
        }

        match self.catalog.fetch_by_id(&params.id).await {
            Ok(Some(recipe)) => Ok(recipe),
            Ok(None) => Err(RecipeError::NotFound),
            Err(err) => {
                self.logger.warn(&format!(
                    "Catalog fetch failed for recipe {}: {}",
                    params.id, err
                ));
                Err(RecipeError::NotFound)
            }
        }
    }
}
