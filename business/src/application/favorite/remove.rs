use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::favorite::use_cases::remove::{RemoveFavoriteParams, RemoveFavoriteUseCase};
use crate::domain::logger::Logger;

pub struct RemoveFavoriteUseCaseImpl {
    pub repository: Arc<dyn FavoriteRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveFavoriteUseCase for RemoveFavoriteUseCaseImpl {
    async fn execute(&self, params: RemoveFavoriteParams) -> Result<(), FavoriteError> {
        self.logger
            .info(&format!("Removing favorite {}", params.id));
        self.repository.delete(params.id).await?;
        Ok(())
    }
}
