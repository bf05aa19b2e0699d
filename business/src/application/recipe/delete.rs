use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::delete::{DeleteRecipeParams, DeleteRecipeUseCase};
use crate::domain::shopping_list::aggregator::ShoppingListAggregator;

pub struct DeleteRecipeUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub favorite_repository: Arc<dyn FavoriteRepository>,
    pub shopping_list: Arc<ShoppingListAggregator>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteRecipeUseCase for DeleteRecipeUseCaseImpl {
    async fn execute(&self, params: DeleteRecipeParams) -> Result<(), RecipeError> {
        self.logger
            .info(&format!("Deleting recipe {}", params.id));

        // Favorites and shopping-list state are best-effort cleanup: a
        // failure here is logged but never blocks the recipe deletion.
        match self.favorite_repository.delete_by_recipe(&params.id).await {
            Ok(count) if count > 0 => {
                self.logger
                    .info(&format!("Removed {} favorite(s) for recipe {}", count, params.id));
            }
            Ok(_) => {}
            Err(err) => {
                self.logger.error(&format!(
                    "Favorite cleanup failed for recipe {}: {}",
                    params.id, err
                ));
            }
        }

        if let Err(err) = self.shopping_list.remove_recipe(&params.id).await {
            self.logger.error(&format!(
                "Shopping list cleanup failed for recipe {}: {}",
                params.id, err
            ));
        }

        let removed = self.repository.delete(&params.id).await?;
        if removed == 0 {
            // Concurrent double-delete: already gone counts as done.
            self.logger
                .info(&format!("Recipe {} was already absent", params.id));
        } else {
            self.logger.info(&format!("Recipe deleted: {}", params.id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::favorite::model::Favorite;
    use crate::domain::recipe::model::Recipe;
    use crate::domain::shared::value_objects::UserId;
    use crate::domain::shopping_list::kv::InMemoryKeyValueStore;
    use mockall::mock;
    use uuid::Uuid;

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
        pub FavoriteRepo {}

        #[async_trait]
        impl FavoriteRepository for FavoriteRepo {
            async fn get_by_user(&self, user_id: &UserId) -> Result<Vec<Favorite>, RepositoryError>;
            async fn find_by_recipe(&self, user_id: &UserId, recipe_id: &str) -> Result<Option<Favorite>, RepositoryError>;
            async fn save(&self, favorite: &Favorite) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
            async fn delete_by_recipe(&self, recipe_id: &str) -> Result<u64, RepositoryError>;
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

    fn shopping_list() -> Arc<ShoppingListAggregator> {
        Arc::new(ShoppingListAggregator::new(Arc::new(
            InMemoryKeyValueStore::new(),
        )))
    }

    #[tokio::test]
    async fn should_cascade_favorites_then_delete_recipe() {
        let mut repo = MockRecipeRepo::new();
        repo.expect_delete().returning(|_| Ok(1));
        let mut favorites = MockFavoriteRepo::new();
        favorites
            .expect_delete_by_recipe()
            .withf(|id| id == "42")
            .returning(|_| Ok(2));

        let use_case = DeleteRecipeUseCaseImpl {
            repository: Arc::new(repo),
            favorite_repository: Arc::new(favorites),
            shopping_list: shopping_list(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteRecipeParams {
                id: "42".to_string(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_proceed_when_favorite_cleanup_fails() {
        let mut repo = MockRecipeRepo::new();
        repo.expect_delete().returning(|_| Ok(1));
        let mut favorites = MockFavoriteRepo::new();
        favorites
            .expect_delete_by_recipe()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = DeleteRecipeUseCaseImpl {
            repository: Arc::new(repo),
            favorite_repository: Arc::new(favorites),
            shopping_list: shopping_list(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteRecipeParams {
                id: "42".to_string(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_report_success_for_already_absent_recipe() {
        let mut repo = MockRecipeRepo::new();
        repo.expect_delete().times(2).returning(|_| Ok(0));
        let mut favorites = MockFavoriteRepo::new();
        favorites
            .expect_delete_by_recipe()
            .times(2)
            .returning(|_| Ok(0));

        let use_case = DeleteRecipeUseCaseImpl {
            repository: Arc::new(repo),
            favorite_repository: Arc::new(favorites),
            shopping_list: shopping_list(),
            logger: mock_logger(),
        };

        // Double delete: both calls succeed.
        for _ in 0..2 {
            let result = use_case
                .execute(DeleteRecipeParams {
                    id: "42".to_string(),
                })
                .await;
            assert!(result.is_ok());
        }
    }

    #[tokio::test]
    async fn should_propagate_recipe_store_failure() {
        let mut repo = MockRecipeRepo::new();
        repo.expect_delete()
            .returning(|_| Err(RepositoryError::DatabaseError));
        let mut favorites = MockFavoriteRepo::new();
        favorites.expect_delete_by_recipe().returning(|_| Ok(0));

        let use_case = DeleteRecipeUseCaseImpl {
            repository: Arc::new(repo),
            favorite_repository: Arc::new(favorites),
            shopping_list: shopping_list(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteRecipeParams {
                id: "42".to_string(),
            })
            .await;

        assert!(matches!(result, Err(RecipeError::Repository(_))));
    }
}
