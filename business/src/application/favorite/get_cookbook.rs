use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::reconcile::{CookbookEntry, reconcile};
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::favorite::use_cases::get_cookbook::{GetCookbookParams, GetCookbookUseCase};
use crate::domain::logger::Logger;
use crate::domain::recipe::repository::RecipeRepository;

pub struct GetCookbookUseCaseImpl {
    pub recipe_repository: Arc<dyn RecipeRepository>,
    pub favorite_repository: Arc<dyn FavoriteRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCookbookUseCase for GetCookbookUseCaseImpl {
    async fn execute(&self, params: GetCookbookParams) -> Result<Vec<CookbookEntry>, FavoriteError> {
        // Independent reads, issued concurrently; reconciliation needs both.
        let (recipes, favorites) = tokio::join!(
            self.recipe_repository.get_all(Some(&params.user_id)),
            self.favorite_repository.get_by_user(&params.user_id),
        );

        let recipes = recipes.unwrap_or_else(|err| {
            self.logger
                .error(&format!("Cookbook recipe fetch failed: {}", err));
            Vec::new()
        });
        let favorites = favorites.unwrap_or_else(|err| {
            self.logger
                .error(&format!("Cookbook favorite fetch failed: {}", err));
            Vec::new()
        });

        Ok(reconcile(recipes, favorites))
    }
}
