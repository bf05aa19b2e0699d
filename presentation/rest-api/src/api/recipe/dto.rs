use poem_openapi::Object;

use business::domain::recipe::model::{Recipe, RecipeDraft};

#[derive(Debug, Clone, Object)]
pub struct IngredientResponse {
    /// Stable 0-based index within the recipe
    pub position: u32,
    /// Original ingredient line, e.g. "2 cups flour"
    pub text: String,
}

#[derive(Debug, Clone, Object)]
pub struct StepResponse {
    /// 1-based step number
    pub number: u32,
    pub text: String,
}

#[derive(Debug, Clone, Object)]
pub struct RecipeResponse {
    /// Source-scoped recipe identifier
    pub id: String,
    pub title: String,
    pub image: String,
    #[oai(rename = "readyInMinutes")]
    pub ready_in_minutes: u32,
    pub servings: u32,
    /// May contain HTML markup for catalog recipes
    pub summary: String,
    pub ingredients: Vec<IngredientResponse>,
    pub steps: Vec<StepResponse>,
    /// True for recipes authored in this service
    pub local: bool,
    /// Owner identifier, present only for local recipes
    #[oai(rename = "userId", skip_serializing_if_is_none)]
    pub user_id: Option<String>,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        let local = recipe.is_local();
        let user_id = recipe.owner().map(|o| o.as_str().to_string());
        Self {
            id: recipe.id,
            title: recipe.title,
            image: recipe.image,
            ready_in_minutes: recipe.ready_in_minutes,
            servings: recipe.servings,
            summary: recipe.summary,
            ingredients: recipe
                .ingredients
                .into_iter()
                .map(|i| IngredientResponse {
                    position: i.position,
                    text: i.text,
                })
                .collect(),
            steps: recipe
                .steps
                .into_iter()
                .map(|s| StepResponse {
                    number: s.number,
                    text: s.text,
                })
                .collect(),
            local,
            user_id,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateRecipeRequest {
    /// Owner of the new recipe
    #[oai(rename = "userId")]
    pub user_id: String,
    pub title: String,
    /// Image URL, empty or absent for none
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    #[oai(rename = "readyInMinutes")]
    pub ready_in_minutes: i64,
    pub servings: i64,
    /// Free-text ingredient lines, in order
    #[oai(default)]
    pub ingredients: Vec<String>,
    /// Instruction steps, in order
    #[oai(default)]
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateRecipeRequest {
    pub title: String,
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    #[oai(rename = "readyInMinutes")]
    pub ready_in_minutes: i64,
    pub servings: i64,
    #[oai(default)]
    pub ingredients: Vec<String>,
    #[oai(default)]
    pub steps: Vec<String>,
}

/// Bounds-checks the numeric fields before they become unsigned domain
/// values. Negative input is a client error, not a wraparound.
pub fn build_draft(
    title: String,
    image: Option<String>,
    ready_in_minutes: i64,
    servings: i64,
    ingredients: Vec<String>,
    steps: Vec<String>,
) -> Result<RecipeDraft, &'static str> {
    let ready_in_minutes =
        u32::try_from(ready_in_minutes).map_err(|_| "recipe.invalid_ready_in_minutes")?;
    let servings = u32::try_from(servings).map_err(|_| "recipe.invalid_servings")?;

    Ok(RecipeDraft {
        title,
        image: image.unwrap_or_default(),
        ready_in_minutes,
        servings,
        ingredients,
        steps,
    })
}
