use reqwest::Client;

const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com/recipes";

/// Shared HTTP client configuration for the remote recipe catalog.
pub struct CatalogClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
}

impl CatalogClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Overrides the catalog base URL, mainly for tests and proxies.
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn search_url(&self) -> String {
        format!("{}/complexSearch", self.base_url)
    }

    pub fn information_url(&self, id: &str) -> String {
        format!("{}/{}/information", self.base_url, id)
    }

    pub fn random_url(&self) -> String {
        format!("{}/random", self.base_url)
    }
}
