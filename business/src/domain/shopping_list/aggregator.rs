use std::sync::Arc;

use super::check_state::CheckStateStore;
use super::errors::ShoppingListError;
use super::kv::KeyValueStore;
use super::model::{
    ChecklistItem, RecipeChecklist, ShoppingListRegistry, ShoppingListView, TrackedIngredient,
    TrackedRecipe,
};
use crate::domain::recipe::model::Recipe;

/// Storage key of the registry document listing every tracked recipe.
const REGISTRY_KEY: &str = "shopping-list";

/// Builds shopping list views over the check-state store.
///
/// The registry remembers which recipes the user has opened (title plus
/// ingredient texts); the per-ingredient flags live only in the check-state
/// store. Views are recomputed on every read instead of cached, because flags
/// also change from the in-recipe ingredient panel and the list must never
/// show stale state. The cost is linear in tracked ingredients, bounded by
/// recipes ever opened.
pub struct ShoppingListAggregator {
    store: Arc<dyn KeyValueStore>,
    check_state: CheckStateStore,
}

impl ShoppingListAggregator {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let check_state = CheckStateStore::new(store.clone());
        Self { store, check_state }
    }

    pub fn check_state(&self) -> &CheckStateStore {
        &self.check_state
    }

    async fn load_registry(&self) -> Result<ShoppingListRegistry, ShoppingListError> {
        match self.store.get(REGISTRY_KEY).await? {
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|_| ShoppingListError::StateCorrupted)
            }
            None => Ok(ShoppingListRegistry::new()),
        }
    }

    async fn save_registry(&self, registry: &ShoppingListRegistry) -> Result<(), ShoppingListError> {
        let raw =
            serde_json::to_string(registry).map_err(|_| ShoppingListError::StateCorrupted)?;
        self.store.set(REGISTRY_KEY, &raw).await?;
        Ok(())
    }

    /// Starts tracking a recipe's ingredients. Upserts the registry entry
    /// only; existing check flags are untouched, so re-opening a recipe never
    /// resets what the user already marked.
    pub async fn register_recipe(&self, recipe: &Recipe) -> Result<(), ShoppingListError> {
        let mut registry = self.load_registry().await?;
        registry.insert(
            recipe.id.clone(),
            TrackedRecipe {
                title: recipe.title.clone(),
                ingredients: recipe
                    .ingredients
                    .iter()
                    .map(|ing| TrackedIngredient {
                        position: ing.position,
                        text: ing.text.clone(),
                    })
                    .collect(),
            },
        );
        self.save_registry(&registry).await
    }

    /// All tracked ingredients of all tracked recipes, checked ones included.
    pub async fn view_full(&self) -> Result<ShoppingListView, ShoppingListError> {
        let registry = self.load_registry().await?;
        let mut view = ShoppingListView::new();

        for (recipe_id, tracked) in registry {
            let mut ingredients = Vec::with_capacity(tracked.ingredients.len());
            for ing in tracked.ingredients {
                let checked = self.check_state.get(&recipe_id, ing.position).await?;
                ingredients.push(ChecklistItem {
                    position: ing.position,
                    text: ing.text,
                    checked,
                });
            }
            if !ingredients.is_empty() {
                view.insert(
                    recipe_id,
                    RecipeChecklist {
                        title: tracked.title,
                        ingredients,
                    },
                );
            }
        }

        Ok(view)
    }

    /// Only still-needed ingredients. Recipes with every ingredient checked
    /// drop out of this projection while remaining in the full view.
    pub async fn view_outstanding(&self) -> Result<ShoppingListView, ShoppingListError> {
        let mut view = self.view_full().await?;
        for checklist in view.values_mut() {
            checklist.ingredients.retain(|item| !item.checked);
        }
        view.retain(|_, checklist| !checklist.ingredients.is_empty());
        Ok(view)
    }

    /// Flips one flag and returns the new state.
    pub async fn toggle(&self, recipe_id: &str, position: u32) -> Result<bool, ShoppingListError> {
        let checked = self.check_state.get(recipe_id, position).await?;
        self.check_state.set(recipe_id, position, !checked).await?;
        Ok(!checked)
    }

    /// Discards every checked entry: the flags are removed and the checked
    /// ingredients leave the registry. Recipes left without ingredients are
    /// pruned from the backing store entirely.
    pub async fn clear_checked(&self) -> Result<(), ShoppingListError> {
        let mut registry = self.load_registry().await?;

        for (recipe_id, tracked) in registry.iter_mut() {
            let mut remaining = Vec::with_capacity(tracked.ingredients.len());
            for ing in tracked.ingredients.drain(..) {
                if self.check_state.get(recipe_id, ing.position).await? {
                    self.check_state.set(recipe_id, ing.position, false).await?;
                } else {
                    remaining.push(ing);
                }
            }
            tracked.ingredients = remaining;
        }

        registry.retain(|_, tracked| !tracked.ingredients.is_empty());
        self.save_registry(&registry).await
    }

    /// Stops tracking a recipe and reverts all of its flags. Used when the
    /// user drops a recipe from the list and when a recipe is deleted.
    pub async fn remove_recipe(&self, recipe_id: &str) -> Result<(), ShoppingListError> {
        let mut registry = self.load_registry().await?;
        if let Some(tracked) = registry.remove(recipe_id) {
            let positions: Vec<u32> = tracked.ingredients.iter().map(|i| i.position).collect();
            self.check_state.clear_recipe(recipe_id, &positions).await?;
        }
        self.save_registry(&registry).await
    }
}
