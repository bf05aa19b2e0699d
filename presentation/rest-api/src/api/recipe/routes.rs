use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, param::Query, payload::Json};

use business::domain::recipe::catalog::SearchFilters;
use business::domain::recipe::use_cases::create::{CreateRecipeParams, CreateRecipeUseCase};
use business::domain::recipe::use_cases::delete::{DeleteRecipeParams, DeleteRecipeUseCase};
use business::domain::recipe::use_cases::get_by_id::{GetRecipeByIdParams, GetRecipeByIdUseCase};
use business::domain::recipe::use_cases::get_local::{GetLocalRecipesParams, GetLocalRecipesUseCase};
use business::domain::recipe::use_cases::search::{SearchRecipesParams, SearchRecipesUseCase};
use business::domain::recipe::use_cases::trending::{
    GetTrendingRecipesParams, GetTrendingRecipesUseCase,
};
use business::domain::recipe::use_cases::update::{UpdateRecipeParams, UpdateRecipeUseCase};
use business::domain::shared::value_objects::UserId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::recipe::dto::{
    CreateRecipeRequest, RecipeResponse, UpdateRecipeRequest, build_draft,
};
use crate::api::tags::ApiTags;

const DEFAULT_TRENDING_COUNT: u32 = 8;

pub struct RecipeApi {
    search_use_case: Arc<dyn SearchRecipesUseCase>,
    trending_use_case: Arc<dyn GetTrendingRecipesUseCase>,
    get_local_use_case: Arc<dyn GetLocalRecipesUseCase>,
    get_by_id_use_case: Arc<dyn GetRecipeByIdUseCase>,
    create_use_case: Arc<dyn CreateRecipeUseCase>,
    update_use_case: Arc<dyn UpdateRecipeUseCase>,
    delete_use_case: Arc<dyn DeleteRecipeUseCase>,
}

impl RecipeApi {
    pub fn new(
        search_use_case: Arc<dyn SearchRecipesUseCase>,
        trending_use_case: Arc<dyn GetTrendingRecipesUseCase>,
        get_local_use_case: Arc<dyn GetLocalRecipesUseCase>,
        get_by_id_use_case: Arc<dyn GetRecipeByIdUseCase>,
        create_use_case: Arc<dyn CreateRecipeUseCase>,
        update_use_case: Arc<dyn UpdateRecipeUseCase>,
        delete_use_case: Arc<dyn DeleteRecipeUseCase>,
    ) -> Self {
        Self {
            search_use_case,
            trending_use_case,
            get_local_use_case,
            get_by_id_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Recipe browsing and authoring API
///
/// Search and trending read from the remote catalog; the remaining endpoints
/// work against locally authored recipes.
#[OpenApi]
impl RecipeApi {
    /// Search recipes
    ///
    /// Keyword search against the remote catalog with optional cuisine, diet
    /// and maximum preparation time refinements. Catalog outages surface as
    /// an empty result list.
    #[oai(path = "/recipes/search", method = "get", tag = "ApiTags::Recipes")]
    async fn search(
        &self,
        query: Query<Option<String>>,
        cuisine: Query<Option<String>>,
        diet: Query<Option<String>>,
        #[oai(name = "maxReadyTime")] max_ready_time: Query<Option<u32>>,
    ) -> SearchRecipesResponse {
        let params = SearchRecipesParams {
            query: query.0.unwrap_or_default(),
            filters: SearchFilters {
                cuisine: cuisine.0,
                diet: diet.0,
                max_ready_time: max_ready_time.0,
            },
        };

        match self.search_use_case.execute(params).await {
            Ok(recipes) => SearchRecipesResponse::Ok(Json(
                recipes.into_iter().map(|r| r.into()).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                SearchRecipesResponse::InternalError(json)
            }
        }
    }

    /// Trending recipes
    ///
    /// Returns a random catalog sample for the discovery feed.
    #[oai(path = "/recipes/trending", method = "get", tag = "ApiTags::Recipes")]
    async fn trending(&self, number: Query<Option<u32>>) -> TrendingRecipesResponse {
        let params = GetTrendingRecipesParams {
            number: number.0.unwrap_or(DEFAULT_TRENDING_COUNT),
        };

        match self.trending_use_case.execute(params).await {
            Ok(recipes) => TrendingRecipesResponse::Ok(Json(
                recipes.into_iter().map(|r| r.into()).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                TrendingRecipesResponse::InternalError(json)
            }
        }
    }

    /// List local recipes
    ///
    /// Returns authored recipes, optionally filtered to one owner.
    #[oai(path = "/recipes/local", method = "get", tag = "ApiTags::Recipes")]
    async fn get_local(
        &self,
        #[oai(name = "userId")] user_id: Query<Option<String>>,
    ) -> GetLocalRecipesResponse {
        let params = GetLocalRecipesParams {
            owner: user_id.0.map(UserId::new),
        };

        match self.get_local_use_case.execute(params).await {
            Ok(recipes) => GetLocalRecipesResponse::Ok(Json(
                recipes.into_iter().map(|r| r.into()).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetLocalRecipesResponse::InternalError(json)
            }
        }
    }

    /// Get a recipe by id
    ///
    /// Resolves the local collection first and falls back to the remote
    /// catalog, so both authored and catalog ids work here.
    #[oai(path = "/recipes/:id", method = "get", tag = "ApiTags::Recipes")]
    async fn get_by_id(&self, id: Path<String>) -> GetRecipeResponse {
        let params = GetRecipeByIdParams { id: id.0 };

        match self.get_by_id_use_case.execute(params).await {
            Ok(recipe) => GetRecipeResponse::Ok(Json(recipe.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetRecipeResponse::NotFound(json),
                    _ => GetRecipeResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a recipe
    ///
    /// Persists a new authored recipe from the submitted draft.
    #[oai(path = "/recipes", method = "post", tag = "ApiTags::Recipes")]
    async fn create(&self, body: Json<CreateRecipeRequest>) -> CreateRecipeResponse {
        let CreateRecipeRequest {
            user_id,
            title,
            image,
            ready_in_minutes,
            servings,
            ingredients,
            steps,
        } = body.0;

        let draft = match build_draft(title, image, ready_in_minutes, servings, ingredients, steps)
        {
            Ok(draft) => draft,
            Err(message) => {
                return CreateRecipeResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: message.to_string(),
                }));
            }
        };

        let params = CreateRecipeParams {
            draft,
            owner: UserId::new(user_id),
        };

        match self.create_use_case.execute(params).await {
            Ok(recipe) => CreateRecipeResponse::Created(Json(recipe.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateRecipeResponse::BadRequest(json),
                    _ => CreateRecipeResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a recipe
    ///
    /// Replaces an authored recipe with the submitted draft. Only draft
    /// fields are persisted; anything else sent along is dropped.
    #[oai(path = "/recipes/:id", method = "put", tag = "ApiTags::Recipes")]
    async fn update(&self, id: Path<String>, body: Json<UpdateRecipeRequest>) -> UpdateRecipeResponse {
        let UpdateRecipeRequest {
            title,
            image,
            ready_in_minutes,
            servings,
            ingredients,
            steps,
        } = body.0;

        let draft = match build_draft(title, image, ready_in_minutes, servings, ingredients, steps)
        {
            Ok(draft) => draft,
            Err(message) => {
                return UpdateRecipeResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: message.to_string(),
                }));
            }
        };

        let params = UpdateRecipeParams { id: id.0, draft };

        match self.update_use_case.execute(params).await {
            Ok(recipe) => UpdateRecipeResponse::Ok(Json(recipe.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateRecipeResponse::BadRequest(json),
                    404 => UpdateRecipeResponse::NotFound(json),
                    _ => UpdateRecipeResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a recipe
    ///
    /// Removes an authored recipe along with its favorite pointers and its
    /// shopping-list state. Deleting an absent recipe succeeds.
    #[oai(path = "/recipes/:id", method = "delete", tag = "ApiTags::Recipes")]
    async fn delete(&self, id: Path<String>) -> DeleteRecipeResponse {
        match self
            .delete_use_case
            .execute(DeleteRecipeParams { id: id.0 })
            .await
        {
            Ok(()) => DeleteRecipeResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                DeleteRecipeResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SearchRecipesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<RecipeResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum TrendingRecipesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<RecipeResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetLocalRecipesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<RecipeResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetRecipeResponse {
    #[oai(status = 200)]
    Ok(Json<RecipeResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateRecipeResponse {
    #[oai(status = 201)]
    Created(Json<RecipeResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateRecipeResponse {
    #[oai(status = 200)]
    Ok(Json<RecipeResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteRecipeResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
