use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::create::{CreateRecipeParams, CreateRecipeUseCase};

pub struct CreateRecipeUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateRecipeUseCase for CreateRecipeUseCaseImpl {
    async fn execute(&self, params: CreateRecipeParams) -> Result<Recipe, RecipeError> {
        self.logger
            .info(&format!("Creating recipe '{}'", params.draft.title));

        // Millisecond timestamps keep local ids disjoint from the numeric
        // catalog id space in practice and sort by creation time.
        let id = Utc::now().timestamp_millis().to_string();
        let recipe = params.draft.into_recipe(id, params.owner)?;
        self.repository.save(&recipe).await?;

        self.logger.info(&format!("Recipe created: {}", recipe.id));
        Ok(recipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::recipe::model::RecipeDraft;
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

    fn draft() -> RecipeDraft {
        RecipeDraft {
            title: "Paella".to_string(),
            image: String::new(),
            ready_in_minutes: 45,
            servings: 4,
            ingredients: vec!["rice".to_string(), "saffron".to_string()],
            steps: vec!["Cook".to_string()],
        }
    }

    #[tokio::test]
    async fn should_persist_valid_draft_with_generated_id() {
        let mut repo = MockRecipeRepo::new();
        repo.expect_save().returning(|_| Ok(()));

        let use_case = CreateRecipeUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let recipe = use_case
            .execute(CreateRecipeParams {
                draft: draft(),
                owner: UserId::new("u1"),
            })
            .await
            .unwrap();

        assert!(!recipe.id.is_empty());
        assert!(recipe.id.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.owner(), Some(&UserId::new("u1")));
    }

    #[tokio::test]
    async fn should_reject_draft_with_empty_title() {
        let repo = MockRecipeRepo::new();

        let use_case = CreateRecipeUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let mut invalid = draft();
        invalid.title = " ".to_string();
        let result = use_case
            .execute(CreateRecipeParams {
                draft: invalid,
                owner: UserId::new("u1"),
            })
            .await;

        assert!(matches!(result, Err(RecipeError::TitleEmpty)));
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut repo = MockRecipeRepo::new();
        repo.expect_save()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = CreateRecipeUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateRecipeParams {
                draft: draft(),
                owner: UserId::new("u1"),
            })
            .await;

        assert!(matches!(result, Err(RecipeError::Repository(_))));
    }
}
