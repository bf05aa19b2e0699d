use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::get_local::{GetLocalRecipesParams, GetLocalRecipesUseCase};

pub struct GetLocalRecipesUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetLocalRecipesUseCase for GetLocalRecipesUseCaseImpl {
    async fn execute(&self, params: GetLocalRecipesParams) -> Result<Vec<Recipe>, RecipeError> {
        match self.repository.get_all(params.owner.as_ref()).await {
            Ok(recipes) => Ok(recipes),
            Err(err) => {
                self.logger
                    .error(&format!("Local recipe listing failed: {}", err));
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::recipe::model::RecipeOrigin;
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;

    mock! {
        pub RecipeRepo {}

        #[async_trait]
        impl RecipeRepository for RecipeRepo {
            async fn get_by_id(&self, id: &str) -> Result<Recipe, RepositoryError>;
            async fn get_all<'a, 'b>(&'a self, owner: Option<&'b UserId>) -> Result<Vec<Recipe>, RepositoryError>;
            async fn save(&self, recipe: &Recipe) -> Result<(), RepositoryError>;
            async fn delete(&self, id: &str) -> Result<u64, RepositoryError>;
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

    fn local_recipe(id: &str, owner: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: "Mine".to_string(),
            image: String::new(),
            ready_in_minutes: 15,
            servings: 1,
            summary: "s".to_string(),
            ingredients: vec![],
            steps: vec![],
            origin: RecipeOrigin::Local {
                owner: UserId::new(owner),
            },
        }
    }

    #[tokio::test]
    async fn should_list_recipes_for_owner() {
        let mut repo = MockRecipeRepo::new();
        repo.expect_get_all()
            .returning(|_| Ok(vec![local_recipe("1", "u1")]));

        let use_case = GetLocalRecipesUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let recipes = use_case
            .execute(GetLocalRecipesParams {
                owner: Some(UserId::new("u1")),
            })
            .await
            .unwrap();

        assert_eq!(recipes.len(), 1);
    }

    #[tokio::test]
    async fn should_absorb_repository_failure_into_empty_listing() {
        let mut repo = MockRecipeRepo::new();
        repo.expect_get_all()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GetLocalRecipesUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let recipes = use_case
            .execute(GetLocalRecipesParams { owner: None })
            .await
            .unwrap();

        assert!(recipes.is_empty());
    }
}
