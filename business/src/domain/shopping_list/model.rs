use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An ingredient the registry tracks for one recipe. `position` is the
/// recipe's stable 0-based ingredient index; after a partial clear the
/// remaining positions keep their original values, so the set may be sparse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedIngredient {
    pub position: u32,
    pub text: String,
}

/// Registry entry for one recipe whose ingredients the user has opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedRecipe {
    pub title: String,
    pub ingredients: Vec<TrackedIngredient>,
}

/// The persisted recipe-identity index, keyed by recipe id. BTreeMap keeps
/// the serialized document and the derived views deterministically ordered.
pub type ShoppingListRegistry = BTreeMap<String, TrackedRecipe>;

/// One ingredient row in a derived shopping list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub position: u32,
    pub text: String,
    pub checked: bool,
}

/// Per-recipe slice of a derived view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeChecklist {
    pub title: String,
    pub ingredients: Vec<ChecklistItem>,
}

/// Derived shopping list, recipe id to checklist. Never persisted: it is
/// recomputed from the registry and the check-state store on every read so it
/// can never go stale against toggles made from other views.
pub type ShoppingListView = BTreeMap<String, RecipeChecklist>;
