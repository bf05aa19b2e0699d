#[derive(Debug, thiserror::Error)]
pub enum ShoppingListError {
    /// The persisted registry document failed to decode.
    #[error("shopping_list.state_corrupted")]
    StateCorrupted,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
