use std::sync::Arc;

use crate::domain::errors::RepositoryError;

use super::kv::KeyValueStore;

/// Durable per-(recipe, ingredient-position) "already have it" flag. Ground
/// truth for the shopping list: everything else is derived from these keys.
///
/// Contract: a missing key means unchecked. That default is deliberate, not a
/// falsy coercion — `get` documents it, and `set(false)` removes the key so
/// the store only ever holds positive marks.
pub struct CheckStateStore {
    store: Arc<dyn KeyValueStore>,
}

const CHECKED: &str = "true";

/// Deterministic storage key for one ingredient flag. Stable across process
/// restarts; versioning the scheme would orphan every existing mark.
fn check_key(recipe_id: &str, position: u32) -> String {
    format!("recipe-{recipe_id}-ingredient-{position}")
}

impl CheckStateStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Pure read. Returns `false` when no entry exists.
    pub async fn get(&self, recipe_id: &str, position: u32) -> Result<bool, RepositoryError> {
        let value = self.store.get(&check_key(recipe_id, position)).await?;
        Ok(value.as_deref() == Some(CHECKED))
    }

    /// Idempotent write: checking writes the mark, unchecking removes the key.
    pub async fn set(
        &self,
        recipe_id: &str,
        position: u32,
        checked: bool,
    ) -> Result<(), RepositoryError> {
        let key = check_key(recipe_id, position);
        if checked {
            self.store.set(&key, CHECKED).await
        } else {
            self.store.remove(&key).await
        }
    }

    /// Reverts every listed position of a recipe to the default state.
    pub async fn clear_recipe(
        &self,
        recipe_id: &str,
        positions: &[u32],
    ) -> Result<(), RepositoryError> {
        for &position in positions {
            self.store.remove(&check_key(recipe_id, position)).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shopping_list::kv::InMemoryKeyValueStore;

    fn store() -> CheckStateStore {
        CheckStateStore::new(Arc::new(InMemoryKeyValueStore::new()))
    }

    #[test]
    fn should_derive_stable_keys() {
        assert_eq!(check_key("42", 3), "recipe-42-ingredient-3");
    }

    #[tokio::test]
    async fn should_default_to_unchecked() {
        let store = store();
        assert!(!store.get("42", 0).await.unwrap());
    }

    #[tokio::test]
    async fn should_persist_checked_state_per_position() {
        let store = store();
        store.set("42", 0, true).await.unwrap();

        assert!(store.get("42", 0).await.unwrap());
        assert!(!store.get("42", 1).await.unwrap());
        assert!(!store.get("43", 0).await.unwrap());
    }

    #[tokio::test]
    async fn should_be_idempotent_on_repeated_set() {
        let store = store();
        store.set("42", 0, true).await.unwrap();
        store.set("42", 0, true).await.unwrap();
        assert!(store.get("42", 0).await.unwrap());

        store.set("42", 0, false).await.unwrap();
        store.set("42", 0, false).await.unwrap();
        assert!(!store.get("42", 0).await.unwrap());
    }

    #[tokio::test]
    async fn should_clear_all_positions_for_recipe() {
        let store = store();
        store.set("42", 0, true).await.unwrap();
        store.set("42", 2, true).await.unwrap();
        store.set("99", 0, true).await.unwrap();

        store.clear_recipe("42", &[0, 1, 2]).await.unwrap();

        assert!(!store.get("42", 0).await.unwrap());
        assert!(!store.get("42", 2).await.unwrap());
        assert!(store.get("99", 0).await.unwrap());
    }
}
