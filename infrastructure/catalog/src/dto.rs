use serde::Deserialize;

use business::domain::recipe::model::{
    Ingredient, Recipe, RecipeOrigin, SUMMARY_PLACEHOLDER, Step,
};

/// Wire shape of a single catalog recipe. Only the fields the domain
/// consumes are modeled; everything else in the payload is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecipeDto {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub ready_in_minutes: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub extended_ingredients: Vec<CatalogIngredientDto>,
    #[serde(default)]
    pub analyzed_instructions: Vec<CatalogInstructionsDto>,
}

#[derive(Debug, Deserialize)]
pub struct CatalogIngredientDto {
    #[serde(default)]
    pub original: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CatalogInstructionsDto {
    #[serde(default)]
    pub steps: Vec<CatalogStepDto>,
}

#[derive(Debug, Deserialize)]
pub struct CatalogStepDto {
    pub number: u32,
    pub step: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponseDto {
    #[serde(default)]
    pub results: Vec<CatalogRecipeDto>,
}

#[derive(Debug, Deserialize)]
pub struct RandomResponseDto {
    #[serde(default)]
    pub recipes: Vec<CatalogRecipeDto>,
}

impl CatalogRecipeDto {
    /// Normalizes the wire shape into the domain model. Ingredient positions
    /// are assigned from payload order, matching how authored recipes number
    /// theirs.
    pub fn into_domain(self) -> Recipe {
        let ingredients = self
            .extended_ingredients
            .into_iter()
            .enumerate()
            .filter_map(|(i, ing)| {
                ing.original.map(|text| Ingredient {
                    position: i as u32,
                    text,
                })
            })
            .collect();

        let steps = self
            .analyzed_instructions
            .into_iter()
            .next()
            .map(|block| {
                block
                    .steps
                    .into_iter()
                    .map(|s| Step {
                        number: s.number,
                        text: s.step,
                    })
                    .collect()
            })
            .unwrap_or_default();

        Recipe {
            id: self.id.to_string(),
            title: self.title,
            image: self.image.unwrap_or_default(),
            ready_in_minutes: self.ready_in_minutes.unwrap_or(0),
            servings: self.servings.unwrap_or(0),
            summary: self
                .summary
                .unwrap_or_else(|| SUMMARY_PLACEHOLDER.to_string()),
            ingredients,
            steps,
            origin: RecipeOrigin::Remote,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_normalize_full_payload() {
        let json = r#"{
            "id": 715538,
            "title": "Bruschetta Style Pork & Pasta",
            "image": "https://img.spoonacular.com/recipes/715538-556x370.jpg",
            "readyInMinutes": 35,
            "servings": 5,
            "summary": "Rich <b>html</b> text",
            "extendedIngredients": [
                {"original": "2 cups pasta"},
                {"original": "1 lb pork tenderloin"}
            ],
            "analyzedInstructions": [
                {"steps": [
                    {"number": 1, "step": "Cook the pasta."},
                    {"number": 2, "step": "Sear the pork."}
                ]}
            ]
        }"#;

        let dto: CatalogRecipeDto = serde_json::from_str(json).unwrap();
        let recipe = dto.into_domain();

        assert_eq!(recipe.id, "715538");
        assert_eq!(recipe.ready_in_minutes, 35);
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.ingredients[0].position, 0);
        assert_eq!(recipe.ingredients[1].position, 1);
        assert_eq!(recipe.steps[1].number, 2);
        assert_eq!(recipe.origin, RecipeOrigin::Remote);
    }

    #[test]
    fn should_default_missing_optional_fields() {
        let json = r#"{"id": 42, "title": "Mystery Dish"}"#;

        let dto: CatalogRecipeDto = serde_json::from_str(json).unwrap();
        let recipe = dto.into_domain();

        assert_eq!(recipe.id, "42");
        assert_eq!(recipe.image, "");
        assert_eq!(recipe.ready_in_minutes, 0);
        assert_eq!(recipe.servings, 0);
        assert_eq!(recipe.summary, SUMMARY_PLACEHOLDER);
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.steps.is_empty());
    }

    #[test]
    fn should_take_only_first_instruction_block() {
        let json = r#"{
            "id": 7,
            "title": "Two Blocks",
            "analyzedInstructions": [
                {"steps": [{"number": 1, "step": "First block."}]},
                {"steps": [{"number": 1, "step": "Second block."}]}
            ]
        }"#;

        let dto: CatalogRecipeDto = serde_json::from_str(json).unwrap();
        let recipe = dto.into_domain();

        assert_eq!(recipe.steps.len(), 1);
        assert_eq!(recipe.steps[0].text, "First block.");
    }

    #[test]
    fn should_skip_ingredients_without_text() {
        let json = r#"{
            "id": 9,
            "title": "Sparse",
            "extendedIngredients": [{"original": "1 egg"}, {}]
        }"#;

        let dto: CatalogRecipeDto = serde_json::from_str(json).unwrap();
        let recipe = dto.into_domain();

        assert_eq!(recipe.ingredients.len(), 1);
        assert_eq!(recipe.ingredients[0].text, "1 egg");
    }
}
