#[derive(Debug, thiserror::Error)]
pub enum FavoriteError {
    #[error("favorite.recipe_id_empty")]
    RecipeIdEmpty,
    #[error("favorite.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
