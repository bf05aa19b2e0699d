use uuid::Uuid;

use super::errors::FavoriteError;
use crate::domain::shared::value_objects::UserId;

/// A user's pointer to a recipe they want in their cookbook. Lightweight by
/// design: only enough to render a shelf entry, never a copy of the recipe.
/// `recipe_id` may reference either a local or a remote recipe.
#[derive(Debug, Clone)]
pub struct Favorite {
    pub id: Uuid,
    pub user_id: UserId,
    pub recipe_id: String,
    pub title: String,
    pub image: String,
}

impl Favorite {
    pub fn new(
        user_id: UserId,
        recipe_id: String,
        title: String,
        image: String,
    ) -> Result<Self, FavoriteError> {
        if recipe_id.trim().is_empty() {
            return Err(FavoriteError::RecipeIdEmpty);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            recipe_id,
            title,
            image,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        recipe_id: String,
        title: String,
        image: String,
    ) -> Self {
        Self {
            id,
            user_id,
            recipe_id,
            title,
            image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_favorite_pointer() {
        let fav = Favorite::new(
            UserId::new("u1"),
            "715538".to_string(),
            "Pasta".to_string(),
            "https://img.example.com/pasta.jpg".to_string(),
        )
        .unwrap();

        assert_eq!(fav.recipe_id, "715538");
        assert_eq!(fav.title, "Pasta");
    }

    #[test]
    fn should_reject_empty_recipe_id() {
        let result = Favorite::new(
            UserId::new("u1"),
            "  ".to_string(),
            "Pasta".to_string(),
            String::new(),
        );

        assert!(matches!(result, Err(FavoriteError::RecipeIdEmpty)));
    }
}
