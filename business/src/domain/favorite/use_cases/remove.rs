use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::favorite::errors::FavoriteError;

pub struct RemoveFavoriteParams {
    pub id: Uuid,
}

#[async_trait]
pub trait RemoveFavoriteUseCase: Send + Sync {
    async fn execute(&self, params: RemoveFavoriteParams) -> Result<(), FavoriteError>;
}
