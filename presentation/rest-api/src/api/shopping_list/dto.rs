use poem_openapi::Object;

use business::domain::shopping_list::model::ShoppingListView;

#[derive(Debug, Clone, Object)]
pub struct ChecklistItemResponse {
    /// Stable 0-based ingredient index within the recipe
    pub position: u32,
    pub text: String,
    pub checked: bool,
}

#[derive(Debug, Clone, Object)]
pub struct RecipeChecklistResponse {
    #[oai(rename = "recipeId")]
    pub recipe_id: String,
    pub title: String,
    pub ingredients: Vec<ChecklistItemResponse>,
}

/// Flattens the derived view into an ordered list of per-recipe checklists.
pub fn view_to_response(view: ShoppingListView) -> Vec<RecipeChecklistResponse> {
    view.into_iter()
        .map(|(recipe_id, checklist)| RecipeChecklistResponse {
            recipe_id,
            title: checklist.title,
            ingredients: checklist
                .ingredients
                .into_iter()
                .map(|item| ChecklistItemResponse {
                    position: item.position,
                    text: item.text,
                    checked: item.checked,
                })
                .collect(),
        })
        .collect()
}

#[derive(Debug, Clone, Object)]
pub struct TrackRecipeRequest {
    /// Recipe to start tracking, local or catalog id
    #[oai(rename = "recipeId")]
    pub recipe_id: String,
}

#[derive(Debug, Clone, Object)]
pub struct ToggleIngredientResponse {
    /// Check state after the flip
    pub checked: bool,
}
