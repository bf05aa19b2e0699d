use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::{Recipe, RecipeOrigin};
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::update::{UpdateRecipeParams, UpdateRecipeUseCase};

pub struct UpdateRecipeUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateRecipeUseCase for UpdateRecipeUseCaseImpl {
    async fn execute(&self, params: UpdateRecipeParams) -> Result<Recipe, RecipeError> {
        self.logger
            .info(&format!("Updating recipe {}", params.id));

        let existing = self
            .repository
            .get_by_id(&params.id)
            .await
            .map_err(|err| match err {
                RepositoryError::NotFound => RecipeError::NotFound,
                other => RecipeError::Repository(other),
            })?;

        let owner = match existing.origin {
            RecipeOrigin::Local { owner } => owner,
            // The local repository only holds authored recipes.
            RecipeOrigin::Remote => return Err(RecipeError::NotFound),
        };

        // The draft is the write schema; rebuilding the recipe from it is
        // what strips stale derived fields out of edit submissions.
        let recipe = params.draft.into_recipe(params.id, owner)?;
        self.repository.save(&recipe).await?;

        self.logger.info(&format!("Recipe updated: {}", recipe.id));
        Ok(recipe)
    }
}
