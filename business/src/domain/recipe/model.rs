use url::Url;

use super::errors::RecipeError;
use crate::domain::shared::value_objects::UserId;

/// Summary used when a source provides none. Local drafts have no summary
/// field, so every authored recipe carries this text.
pub const SUMMARY_PLACEHOLDER: &str = "A delicious homemade recipe.";

/// Where a recipe record came from. `Local` recipes are owned and mutable,
/// `Remote` recipes are read-only catalog entries. No component outside the
/// adapter and the delete cascade should branch on this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeOrigin {
    Local { owner: UserId },
    Remote,
}

/// An ingredient line. `position` is the stable 0-based index within the
/// recipe and is the durable key for check state, so reordering ingredients
/// deliberately invalidates prior check state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub position: u32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub number: u32,
    pub text: String,
}

/// Normalized recipe shape shared by both sources. Identifiers are
/// source-scoped opaque strings: local ids are timestamps, remote ids are
/// catalog numbers, and comparisons always happen in string form.
#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub image: String,
    pub ready_in_minutes: u32,
    pub servings: u32,
    pub summary: String,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<Step>,
    pub origin: RecipeOrigin,
}

impl Recipe {
    pub fn owner(&self) -> Option<&UserId> {
        match &self.origin {
            RecipeOrigin::Local { owner } => Some(owner),
            RecipeOrigin::Remote => None,
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self.origin, RecipeOrigin::Local { .. })
    }
}

/// Write schema for create/update. Closed struct: denormalized fields from a
/// prior fetch (normalized ingredient shapes, summaries) cannot ride along
/// into persistence.
#[derive(Debug, Clone)]
pub struct RecipeDraft {
    pub title: String,
    pub image: String,
    pub ready_in_minutes: u32,
    pub servings: u32,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

impl RecipeDraft {
    pub fn validate(&self) -> Result<(), RecipeError> {
        if self.title.trim().is_empty() {
            return Err(RecipeError::TitleEmpty);
        }
        if !self.image.is_empty() && Url::parse(&self.image).is_err() {
            return Err(RecipeError::InvalidImageUrl);
        }
        Ok(())
    }

    /// Builds the normalized recipe this draft describes. Ingredient
    /// positions and step numbers are assigned here and nowhere else.
    pub fn into_recipe(self, id: String, owner: UserId) -> Result<Recipe, RecipeError> {
        self.validate()?;
        Ok(Recipe {
            id,
            title: self.title,
            image: self.image,
            ready_in_minutes: self.ready_in_minutes,
            servings: self.servings,
            summary: SUMMARY_PLACEHOLDER.to_string(),
            ingredients: self
                .ingredients
                .into_iter()
                .enumerate()
                .map(|(i, text)| Ingredient {
                    position: i as u32,
                    text,
                })
                .collect(),
            steps: self
                .steps
                .into_iter()
                .enumerate()
                .map(|(i, text)| Step {
                    number: i as u32 + 1,
                    text,
                })
                .collect(),
            origin: RecipeOrigin::Local { owner },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> RecipeDraft {
        RecipeDraft {
            title: "Tomato Soup".to_string(),
            image: "https://img.example.com/soup.jpg".to_string(),
            ready_in_minutes: 30,
            servings: 2,
            ingredients: vec!["2 tomatoes".to_string(), "1 onion".to_string()],
            steps: vec!["Chop".to_string(), "Simmer".to_string()],
        }
    }

    #[test]
    fn should_build_local_recipe_from_draft() {
        let recipe = draft()
            .into_recipe("1700000000000".to_string(), UserId::new("u1"))
            .unwrap();

        assert_eq!(recipe.id, "1700000000000");
        assert_eq!(recipe.title, "Tomato Soup");
        assert_eq!(recipe.summary, SUMMARY_PLACEHOLDER);
        assert!(recipe.is_local());
        assert_eq!(recipe.owner(), Some(&UserId::new("u1")));
    }

    #[test]
    fn should_assign_zero_based_positions_and_one_based_step_numbers() {
        let recipe = draft()
            .into_recipe("1".to_string(), UserId::new("u1"))
            .unwrap();

        assert_eq!(recipe.ingredients[0].position, 0);
        assert_eq!(recipe.ingredients[1].position, 1);
        assert_eq!(recipe.steps[0].number, 1);
        assert_eq!(recipe.steps[1].number, 2);
    }

    #[test]
    fn should_reject_empty_title() {
        let mut d = draft();
        d.title = "   ".to_string();
        assert!(matches!(d.validate(), Err(RecipeError::TitleEmpty)));
    }

    #[test]
    fn should_reject_malformed_image_url() {
        let mut d = draft();
        d.image = "not a url".to_string();
        assert!(matches!(d.validate(), Err(RecipeError::InvalidImageUrl)));
    }

    #[test]
    fn should_accept_empty_image() {
        let mut d = draft();
        d.image = String::new();
        assert!(d.validate().is_ok());
    }

    #[test]
    fn should_report_no_owner_for_remote_recipes() {
        let recipe = Recipe {
            id: "715538".to_string(),
            title: "Pasta".to_string(),
            image: String::new(),
            ready_in_minutes: 20,
            servings: 4,
            summary: "Rich text".to_string(),
            ingredients: vec![],
            steps: vec![],
            origin: RecipeOrigin::Remote,
        };
        assert!(recipe.owner().is_none());
        assert!(!recipe.is_local());
    }
}
