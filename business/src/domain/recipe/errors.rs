#[derive(Debug, thiserror::Error)]
pub enum RecipeError {
    #[error("recipe.title_empty")]
    TitleEmpty,
    #[error("recipe.invalid_image_url")]
    InvalidImageUrl,
    #[error("recipe.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
