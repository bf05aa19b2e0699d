use async_trait::async_trait;
use reqwest::StatusCode;

use business::domain::recipe::catalog::{CatalogError, RemoteCatalogService, SearchFilters};
use business::domain::recipe::model::Recipe;

use crate::client::CatalogClient;
use crate::dto::{CatalogRecipeDto, RandomResponseDto, SearchResponseDto};

const SEARCH_PAGE_SIZE: &str = "20";

/// Catalog adapter over the Spoonacular HTTP API. The API key travels as a
/// query parameter on every request.
pub struct RemoteCatalogHttp {
    client: CatalogClient,
}

impl RemoteCatalogHttp {
    pub fn new(client: CatalogClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RemoteCatalogService for RemoteCatalogHttp {
    async fn search(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<Vec<Recipe>, CatalogError> {
        let mut params: Vec<(&str, String)> = vec![
            ("apiKey", self.client.api_key.clone()),
            ("query", query.to_string()),
            ("number", SEARCH_PAGE_SIZE.to_string()),
            ("addRecipeInformation", "true".to_string()),
            ("fillIngredients", "true".to_string()),
        ];
        if let Some(cuisine) = &filters.cuisine {
            params.push(("cuisine", cuisine.clone()));
        }
        if let Some(diet) = &filters.diet {
            params.push(("diet", diet.clone()));
        }
        if let Some(max_ready_time) = filters.max_ready_time {
            params.push(("maxReadyTime", max_ready_time.to_string()));
        }

        let response = self
            .client
            .client
            .get(self.client.search_url())
            .query(&params)
            .send()
            .await
            .map_err(|_| CatalogError::Unavailable)?;

        if !response.status().is_success() {
            return Err(CatalogError::Unavailable);
        }

        let data: SearchResponseDto = response
            .json()
            .await
            .map_err(|_| CatalogError::MalformedResponse)?;

        Ok(data.results.into_iter().map(|r| r.into_domain()).collect())
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<Recipe>, CatalogError> {
        let response = self
            .client
            .client
            .get(self.client.information_url(id))
            .query(&[("apiKey", self.client.api_key.as_str())])
            .send()
            .await
            .map_err(|_| CatalogError::Unavailable)?;

        // Unknown ids come back as 404, which is a miss, not a failure.
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(CatalogError::Unavailable);
        }

        let dto: CatalogRecipeDto = response
            .json()
            .await
            .map_err(|_| CatalogError::MalformedResponse)?;

        Ok(Some(dto.into_domain()))
    }

    async fn random(&self, number: u32) -> Result<Vec<Recipe>, CatalogError> {
        let response = self
            .client
            .client
            .get(self.client.random_url())
            .query(&[
                ("apiKey", self.client.api_key.as_str()),
                ("number", &number.to_string()),
            ])
            .send()
            .await
            .map_err(|_| CatalogError::Unavailable)?;

        if !response.status().is_success() {
            return Err(CatalogError::Unavailable);
        }

        let data: RandomResponseDto = response
            .json()
            .await
            .map_err(|_| CatalogError::MalformedResponse)?;

        Ok(data.recipes.into_iter().map(|r| r.into_domain()).collect())
    }
}
