use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::catalog::RemoteCatalogService;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;
use crate::domain::recipe::use_cases::trending::{
    GetTrendingRecipesParams, GetTrendingRecipesUseCase,
};

pub struct GetTrendingRecipesUseCaseImpl {
    pub catalog: Arc<dyn RemoteCatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetTrendingRecipesUseCase for GetTrendingRecipesUseCaseImpl {
    async fn execute(&self, params: GetTrendingRecipesParams) -> Result<Vec<Recipe>, RecipeError> {
        match self.catalog.random(params.number).await {
            Ok(recipes) => Ok(recipes),
            Err(err) => {
                self.logger
                    .warn(&format!("Trending feed unavailable: {}", err));
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::catalog::{CatalogError, SearchFilters};
    use crate::domain::recipe::model::RecipeOrigin;
    use mockall::mock;

    mock! {
        pub Catalog {}

        #[async_trait]
        impl RemoteCatalogService for Catalog {
            async fn search(&self, query: &str, filters: &SearchFilters) -> Result<Vec<Recipe>, CatalogError>;
            async fn fetch_by_id(&self, id: &str) -> Result<Option<Recipe>, CatalogError>;
            async fn random(&self, number: u32) -> Result<Vec<Recipe>, CatalogError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn remote_recipe(id: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: "Random Dish".to_string(),
            image: String::new(),
            ready_in_minutes: 25,
            servings: 2,
            summary: "s".to_string(),
            ingredients: vec![],
            steps: vec![],
            origin: RecipeOrigin::Remote,
        }
    }

    #[tokio::test]
    async fn should_sample_requested_number_of_recipes() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_random()
            .withf(|number| *number == 10)
            .returning(|_| Ok(vec![remote_recipe("1")]));

        let use_case = GetTrendingRecipesUseCaseImpl {
            catalog: Arc::new(catalog),
            logger: mock_logger(),
        };

        let recipes = use_case
            .execute(GetTrendingRecipesParams { number: 10 })
            .await
            .unwrap();

        assert_eq!(recipes.len(), 1);
    }

    #[tokio::test]
    async fn should_absorb_catalog_failure_into_empty_feed() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_random()
            .returning(|_| Err(CatalogError::Unavailable));

        let use_case = GetTrendingRecipesUseCaseImpl {
            catalog: Arc::new(catalog),
            logger: mock_logger(),
        };

        let recipes = use_case
            .execute(GetTrendingRecipesParams { number: 10 })
            .await
            .unwrap();

        assert!(recipes.is_empty());
    }
}
