use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::catalog::RemoteCatalogService;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;
use crate::domain::recipe::use_cases::search::{SearchRecipesParams, SearchRecipesUseCase};

pub struct SearchRecipesUseCaseImpl {
    pub catalog: Arc<dyn RemoteCatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchRecipesUseCase for SearchRecipesUseCaseImpl {
    async fn execute(&self, params: SearchRecipesParams) -> Result<Vec<Recipe>, RecipeError> {
        self.logger
            .info(&format!("Searching catalog for '{}'", params.query));

        match self.catalog.search(&params.query, &params.filters).await {
            Ok(recipes) => Ok(recipes),
            Err(err) => {
                // Degrade to "no results"; only the log tells a failed call
                // apart from a genuinely empty one.
                self.logger
                    .warn(&format!("Catalog search failed: {}", err));
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
            title: "Catalog Pasta".to_string(),
            image: String::new(),
            ready_in_minutes: 20,
            servings: 4,
            summary: "s".to_string(),
            ingredients: vec![],
            steps: vec![],
            origin: RecipeOrigin::Remote,
        }
    }

    #[tokio::test]
    async fn should_return_catalog_results() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_search()
            .returning(|_, _| Ok(vec![remote_recipe("1"), remote_recipe("2")]));

        let use_case = SearchRecipesUseCaseImpl {
            catalog: Arc::new(catalog),
            logger: mock_logger(),
        };

        let recipes = use_case
            .execute(SearchRecipesParams {
                query: "pasta".to_string(),
                filters: SearchFilters::default(),
            })
            .await
            .unwrap();

        assert_eq!(recipes.len(), 2);
    }

    #[tokio::test]
    async fn should_absorb_catalog_failure_into_empty_result() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_search()
            .returning(|_, _| Err(CatalogError::Unavailable));

        let use_case = SearchRecipesUseCaseImpl {
            catalog: Arc::new(catalog),
            logger: mock_logger(),
        };

        let recipes = use_case
            .execute(SearchRecipesParams {
                query: "pasta".to_string(),
                filters: SearchFilters::default(),
            })
            .await
            .unwrap();

        assert!(recipes.is_empty());
    }
}
