use chrono::{DateTime, Utc};
use sqlx::FromRow;
use sqlx::types::Json;

use business::domain::recipe::model::{
    Ingredient, Recipe, RecipeOrigin, SUMMARY_PLACEHOLDER, Step,
};
use business::domain::shared::value_objects::UserId;

/// Raw local row shape. Ingredients and steps are stored as bare text lists;
/// normalization to the positioned domain shape happens in `into_domain`.
#[derive(Debug, FromRow)]
pub struct RecipeEntity {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub image: String,
    pub ready_in_minutes: i32,
    pub servings: i32,
    pub summary: Option<String>,
    pub ingredients: Json<Vec<String>>,
    pub steps: Json<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RecipeEntity {
    pub fn into_domain(self) -> Recipe {
        Recipe {
            id: self.id,
            title: self.title,
            image: self.image,
            ready_in_minutes: self.ready_in_minutes.max(0) as u32,
            servings: self.servings.max(0) as u32,
            summary: self
                .summary
                .unwrap_or_else(|| SUMMARY_PLACEHOLDER.to_string()),
            ingredients: self
                .ingredients
                .0
                .into_iter()
                .enumerate()
                .map(|(i, text)| Ingredient {
                    position: i as u32,
                    text,
                })
                .collect(),
            steps: self
                .steps
                .0
                .into_iter()
                .enumerate()
                .map(|(i, text)| Step {
                    number: i as u32 + 1,
                    text,
                })
                .collect(),
            origin: RecipeOrigin::Local {
                owner: UserId::new(self.user_id),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_normalize_row_into_local_recipe() {
        let now = Utc::now();
        let entity = RecipeEntity {
            id: "1700000000000".to_string(),
            user_id: "u1".to_string(),
            title: "Stew".to_string(),
            image: String::new(),
            ready_in_minutes: 40,
            servings: 3,
            summary: None,
            ingredients: Json(vec!["beef".to_string(), "carrot".to_string()]),
            steps: Json(vec!["Brown the beef".to_string()]),
            created_at: now,
            updated_at: now,
        };

        let recipe = entity.into_domain();

        assert!(recipe.is_local());
        assert_eq!(recipe.summary, SUMMARY_PLACEHOLDER);
        assert_eq!(recipe.ingredients[1].position, 1);
        assert_eq!(recipe.steps[0].number, 1);
    }
}
