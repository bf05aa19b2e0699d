use poem_openapi::Object;

use business::domain::favorite::model::Favorite;
use business::domain::favorite::reconcile::CookbookEntry;

#[derive(Debug, Clone, Object)]
pub struct CookbookEntryResponse {
    /// Primary identifier used for navigation
    #[oai(rename = "recipeId")]
    pub recipe_id: String,
    pub title: String,
    pub image: String,
    /// Favorite pointer id, when one exists for this entry
    #[oai(rename = "favoriteId", skip_serializing_if_is_none)]
    pub favorite_id: Option<String>,
    /// True when the entry is an authored recipe rather than a saved pointer
    pub authored: bool,
}

impl From<CookbookEntry> for CookbookEntryResponse {
    fn from(entry: CookbookEntry) -> Self {
        let favorite_id = entry.favorite_id().map(|id| id.to_string());
        let authored = matches!(entry, CookbookEntry::Authored { .. });
        Self {
            recipe_id: entry.recipe_id().to_string(),
            title: entry.title().to_string(),
            image: entry.image().to_string(),
            favorite_id,
            authored,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct AddFavoriteRequest {
    #[oai(rename = "userId")]
    pub user_id: String,
    #[oai(rename = "recipeId")]
    pub recipe_id: String,
    pub title: String,
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct FavoriteResponse {
    pub id: String,
    #[oai(rename = "userId")]
    pub user_id: String,
    #[oai(rename = "recipeId")]
    pub recipe_id: String,
    pub title: String,
    pub image: String,
}

impl From<Favorite> for FavoriteResponse {
    fn from(favorite: Favorite) -> Self {
        Self {
            id: favorite.id.to_string(),
            user_id: favorite.user_id.as_str().to_string(),
            recipe_id: favorite.recipe_id,
            title: favorite.title,
            image: favorite.image,
        }
    }
}
