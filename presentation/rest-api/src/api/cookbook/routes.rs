use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, param::Query, payload::Json};
use uuid::Uuid;

use business::domain::favorite::use_cases::add::{AddFavoriteParams, AddFavoriteUseCase};
use business::domain::favorite::use_cases::get_cookbook::{GetCookbookParams, GetCookbookUseCase};
use business::domain::favorite::use_cases::remove::{RemoveFavoriteParams, RemoveFavoriteUseCase};
use business::domain::shared::value_objects::UserId;

use crate::api::cookbook::dto::{AddFavoriteRequest, CookbookEntryResponse, FavoriteResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CookbookApi {
    get_cookbook_use_case: Arc<dyn GetCookbookUseCase>,
    add_favorite_use_case: Arc<dyn AddFavoriteUseCase>,
    remove_favorite_use_case: Arc<dyn RemoveFavoriteUseCase>,
}

impl CookbookApi {
    pub fn new(
        get_cookbook_use_case: Arc<dyn GetCookbookUseCase>,
        add_favorite_use_case: Arc<dyn AddFavoriteUseCase>,
        remove_favorite_use_case: Arc<dyn RemoveFavoriteUseCase>,
    ) -> Self {
        Self {
            get_cookbook_use_case,
            add_favorite_use_case,
            remove_favorite_use_case,
        }
    }
}

/// Cookbook and favorites API
///
/// The cookbook is the merged shelf of a user's authored recipes and saved
/// favorites; favorites are lightweight pointers managed separately.
#[OpenApi]
impl CookbookApi {
    /// Get the cookbook shelf
    ///
    /// Returns the user's authored recipes merged with their favorites,
    /// duplicate-free, authored entries first.
    #[oai(path = "/cookbook", method = "get", tag = "ApiTags::Cookbook")]
    async fn get_cookbook(
        &self,
        #[oai(name = "userId")] user_id: Query<String>,
    ) -> GetCookbookResponse {
        let params = GetCookbookParams {
            user_id: UserId::new(user_id.0),
        };

        match self.get_cookbook_use_case.execute(params).await {
            Ok(entries) => GetCookbookResponse::Ok(Json(
                entries.into_iter().map(|e| e.into()).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCookbookResponse::InternalError(json)
            }
        }
    }

    /// Add a favorite
    ///
    /// Saves a favorite pointer. Favoriting the same recipe twice returns
    /// the existing pointer instead of duplicating it.
    #[oai(path = "/favorites", method = "post", tag = "ApiTags::Cookbook")]
    async fn add_favorite(&self, body: Json<AddFavoriteRequest>) -> AddFavoriteResponse {
        let params = AddFavoriteParams {
            user_id: UserId::new(body.0.user_id),
            recipe_id: body.0.recipe_id,
            title: body.0.title,
            image: body.0.image.unwrap_or_default(),
        };

        match self.add_favorite_use_case.execute(params).await {
            Ok(favorite) => AddFavoriteResponse::Created(Json(favorite.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddFavoriteResponse::BadRequest(json),
                    _ => AddFavoriteResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a favorite
    ///
    /// Deletes a favorite pointer by its id.
    #[oai(path = "/favorites/:id", method = "delete", tag = "ApiTags::Cookbook")]
    async fn remove_favorite(&self, id: Path<String>) -> RemoveFavoriteResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return RemoveFavoriteResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "favorite.invalid_id".to_string(),
                }));
            }
        };

        match self
            .remove_favorite_use_case
            .execute(RemoveFavoriteParams { id: uuid })
            .await
        {
            Ok(()) => RemoveFavoriteResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RemoveFavoriteResponse::NotFound(json),
                    _ => RemoveFavoriteResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCookbookResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CookbookEntryResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddFavoriteResponse {
    #[oai(status = 201)]
    Created(Json<FavoriteResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveFavoriteResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
