use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::model::Favorite;
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::favorite::use_cases::add::{AddFavoriteParams, AddFavoriteUseCase};
use crate::domain::logger::Logger;

pub struct AddFavoriteUseCaseImpl {
    pub repository: Arc<dyn FavoriteRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddFavoriteUseCase for AddFavoriteUseCaseImpl {
    async fn execute(&self, params: AddFavoriteParams) -> Result<Favorite, FavoriteError> {
        self.logger.info(&format!(
            "Adding favorite for recipe {} (user {})",
            params.recipe_id, params.user_id
        ));

        // Favoriting twice returns the existing pointer instead of a duplicate.
        if let Some(existing) = self
            .repository
            .find_by_recipe(&params.user_id, &params.recipe_id)
            .await?
        {
            self.logger.info(&format!(
                "Recipe {} already favorited, returning existing pointer",
                params.recipe_id
            ));
            return Ok(existing);
        }

        let favorite = Favorite::new(
            params.user_id,
            params.recipe_id,
            params.title,
            params.image,
        )?;
        self.repository.save(&favorite).await?;

        self.logger
            .info(&format!("Favorite created: {}", favorite.id));
        Ok(favorite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;
    use uuid::Uuid;

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

    fn params() -> AddFavoriteParams {
        AddFavoriteParams {
            user_id: UserId::new("u1"),
            recipe_id: "715538".to_string(),
            title: "Pasta".to_string(),
            image: String::new(),
        }
    }

    #[tokio::test]
    async fn should_save_new_favorite() {
        let mut repo = MockFavoriteRepo::new();
        repo.expect_find_by_recipe().returning(|_, _| Ok(None));
        repo.expect_save().returning(|_| Ok(()));

        let use_case = AddFavoriteUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let favorite = use_case.execute(params()).await.unwrap();
        assert_eq!(favorite.recipe_id, "715538");
    }

    #[tokio::test]
    async fn should_return_existing_favorite_without_duplicating() {
        let existing = Favorite::from_repository(
            Uuid::new_v4(),
            UserId::new("u1"),
            "715538".to_string(),
            "Pasta".to_string(),
            String::new(),
        );
        let existing_id = existing.id;

        let mut repo = MockFavoriteRepo::new();
        repo.expect_find_by_recipe()
            .returning(move |_, _| Ok(Some(existing.clone())));

        let use_case = AddFavoriteUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let favorite = use_case.execute(params()).await.unwrap();
        assert_eq!(favorite.id, existing_id);
    }

    #[tokio::test]
    async fn should_reject_empty_recipe_id() {
        let mut repo = MockFavoriteRepo::new();
        repo.expect_find_by_recipe().returning(|_, _| Ok(None));

        let use_case = AddFavoriteUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let mut invalid = params();
        invalid.recipe_id = "  ".to_string();
        let result = use_case.execute(invalid).await;

        assert!(matches!(result, Err(FavoriteError::RecipeIdEmpty)));
    }
}
