use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::domain::recipe::model::Recipe;

use super::model::Favorite;

/// One cookbook shelf entry after merging authored recipes with favorites.
#[derive(Debug, Clone)]
pub enum CookbookEntry {
    /// An authored recipe. When the user also favorited it, the pointer id is
    /// kept so the UI can still offer "remove favorite".
    Authored {
        recipe: Recipe,
        favorite_id: Option<Uuid>,
    },
    /// A favorite that references no authored recipe (usually a catalog
    /// recipe). The favorite's `recipe_id` is the primary identifier.
    Saved { favorite: Favorite },
}

impl CookbookEntry {
    /// The primary identifier used for navigation and dedup.
    pub fn recipe_id(&self) -> &str {
        match self {
            CookbookEntry::Authored { recipe, .. } => &recipe.id,
            CookbookEntry::Saved { favorite } => &favorite.recipe_id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            CookbookEntry::Authored { recipe, .. } => &recipe.title,
            CookbookEntry::Saved { favorite } => &favorite.title,
        }
    }

    pub fn image(&self) -> &str {
        match self {
            CookbookEntry::Authored { recipe, .. } => &recipe.image,
            CookbookEntry::Saved { favorite } => &favorite.image,
        }
    }

    pub fn favorite_id(&self) -> Option<Uuid> {
        match self {
            CookbookEntry::Authored { favorite_id, .. } => *favorite_id,
            CookbookEntry::Saved { favorite } => Some(favorite.id),
        }
    }
}

/// Merges a user's authored recipes with their favorite pointers into one
/// duplicate-free listing. When a favorite references an authored recipe the
/// authored copy wins and the favorite survives only as `favorite_id`.
/// Authored recipes come first, remaining favorites after.
///
/// Identifiers arrive as strings from both sides already; the recipe ids are
/// source-scoped strings so comparison needs no numeric coercion.
pub fn reconcile(local_recipes: Vec<Recipe>, favorites: Vec<Favorite>) -> Vec<CookbookEntry> {
    let local_ids: HashSet<String> = local_recipes.iter().map(|r| r.id.clone()).collect();

    let mut favorite_for_local: HashMap<String, Uuid> = HashMap::new();
    let mut saved: Vec<Favorite> = Vec::new();
    let mut seen_saved: HashSet<String> = HashSet::new();

    for favorite in favorites {
        if local_ids.contains(&favorite.recipe_id) {
            favorite_for_local
                .entry(favorite.recipe_id.clone())
                .or_insert(favorite.id);
        } else if seen_saved.insert(favorite.recipe_id.clone()) {
            saved.push(favorite);
        }
    }

    let mut entries: Vec<CookbookEntry> = local_recipes
        .into_iter()
        .map(|recipe| {
            let favorite_id = favorite_for_local.get(&recipe.id).copied();
            CookbookEntry::Authored {
                recipe,
                favorite_id,
            }
        })
        .collect();

    entries.extend(
        saved
            .into_iter()
            .map(|favorite| CookbookEntry::Saved { favorite }),
    );

    entries
}
