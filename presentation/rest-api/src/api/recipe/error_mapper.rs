use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::recipe::errors::RecipeError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for RecipeError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            RecipeError::TitleEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "recipe.title_empty",
            ),
            RecipeError::InvalidImageUrl => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "recipe.invalid_image_url",
            ),
            RecipeError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "recipe.not_found"),
            RecipeError::Repository(_) => (
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
