/// Configuration for the remote recipe catalog API.
pub struct CatalogConfig {
    pub api_key: String,
    pub base_url: Option<String>,
}

impl CatalogConfig {
    /// Environment variables:
    /// - CATALOG_API_KEY: Catalog API key (required)
    /// - CATALOG_BASE_URL: Override for the catalog base URL (optional)
    pub fn from_env() -> Self {
        let api_key = std::env::var("CATALOG_API_KEY")
            .expect("CATALOG_API_KEY environment variable must be set");
        let base_url = std::env::var("CATALOG_BASE_URL").ok();
        Self { api_key, base_url }
    }
}
