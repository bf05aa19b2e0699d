use async_trait::async_trait;

use super::model::Recipe;

/// Failures from the remote catalog. Callers at the adapter boundary absorb
/// these into empty results; only logs distinguish them from true misses.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.unavailable")]
    Unavailable,
    #[error("catalog.malformed_response")]
    MalformedResponse,
}

/// Search refinements supported by the remote catalog.
#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    pub cuisine: Option<String>,
    pub diet: Option<String>,
    pub max_ready_time: Option<u32>,
}

/// Port over the external, read-only, rate-limited recipe catalog.
#[async_trait]
pub trait RemoteCatalogService: Send + Sync {
    async fn search(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<Vec<Recipe>, CatalogError>;
    async fn fetch_by_id(&self, id: &str) -> Result<Option<Recipe>, CatalogError>;
    /// Random sampling used for the trending feed.
    async fn random(&self, number: u32) -> Result<Vec<Recipe>, CatalogError>;
}
