use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

/// Durable key-value persistence port backing the check-state store and the
/// shopping-list registry. Keys and values are plain strings so the adapter
/// can be anything from a database table to browser-style local storage.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError>;
    async fn remove(&self, key: &str) -> Result<(), RepositoryError>;
}

/// In-memory implementation. This is the store to inject in tests; it also
/// serves single-process setups that do not want durable list state.
#[derive(Default)]
pub struct InMemoryKeyValueStore {
    entries: std::sync::Mutex<std::collections::HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| RepositoryError::Persistence)?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| RepositoryError::Persistence)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| RepositoryError::Persistence)?;
        entries.remove(key);
        Ok(())
    }
}
