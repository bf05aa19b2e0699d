use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::favorite::errors::FavoriteError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for FavoriteError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            FavoriteError::RecipeIdEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "favorite.recipe_id_empty",
            ),
            FavoriteError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "favorite.not_found"),
            FavoriteError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
