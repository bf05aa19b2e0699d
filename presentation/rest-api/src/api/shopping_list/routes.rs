use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::recipe::use_cases::get_by_id::{GetRecipeByIdParams, GetRecipeByIdUseCase};
use business::domain::shopping_list::use_cases::clear_checked::ClearCheckedItemsUseCase;
use business::domain::shopping_list::use_cases::register_recipe::{
    RegisterRecipeParams, RegisterRecipeUseCase,
};
use business::domain::shopping_list::use_cases::remove_recipe::{
    RemoveRecipeFromListParams, RemoveRecipeFromListUseCase,
};
use business::domain::shopping_list::use_cases::toggle::{
    ToggleIngredientParams, ToggleIngredientUseCase,
};
use business::domain::shopping_list::use_cases::view_full::ViewFullShoppingListUseCase;
use business::domain::shopping_list::use_cases::view_outstanding::ViewOutstandingItemsUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::shopping_list::dto::{
    RecipeChecklistResponse, ToggleIngredientResponse, TrackRecipeRequest, view_to_response,
};
use crate::api::tags::ApiTags;

pub struct ShoppingListApi {
    view_full_use_case: Arc<dyn ViewFullShoppingListUseCase>,
    view_outstanding_use_case: Arc<dyn ViewOutstandingItemsUseCase>,
    register_use_case: Arc<dyn RegisterRecipeUseCase>,
    toggle_use_case: Arc<dyn ToggleIngredientUseCase>,
    clear_checked_use_case: Arc<dyn ClearCheckedItemsUseCase>,
    remove_recipe_use_case: Arc<dyn RemoveRecipeFromListUseCase>,
    get_recipe_use_case: Arc<dyn GetRecipeByIdUseCase>,
}

impl ShoppingListApi {
    pub fn new(
        view_full_use_case: Arc<dyn ViewFullShoppingListUseCase>,
        view_outstanding_use_case: Arc<dyn ViewOutstandingItemsUseCase>,
        register_use_case: Arc<dyn RegisterRecipeUseCase>,
        toggle_use_case: Arc<dyn ToggleIngredientUseCase>,
        clear_checked_use_case: Arc<dyn ClearCheckedItemsUseCase>,
        remove_recipe_use_case: Arc<dyn RemoveRecipeFromListUseCase>,
        get_recipe_use_case: Arc<dyn GetRecipeByIdUseCase>,
    ) -> Self {
        Self {
            view_full_use_case,
            view_outstanding_use_case,
            register_use_case,
            toggle_use_case,
            clear_checked_use_case,
            remove_recipe_use_case,
            get_recipe_use_case,
        }
    }
}

/// Shopping list API
///
/// The list is derived on every read from the tracked-recipe registry and
/// the per-ingredient check state; it is never stored as a document.
#[OpenApi]
impl ShoppingListApi {
    /// Full shopping list
    ///
    /// Every tracked ingredient with its current check state.
    #[oai(path = "/shopping-list", method = "get", tag = "ApiTags::ShoppingList")]
    async fn view_full(&self) -> ShoppingListResponse {
        match self.view_full_use_case.execute().await {
            Ok(view) => ShoppingListResponse::Ok(Json(view_to_response(view))),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ShoppingListResponse::InternalError(json)
            }
        }
    }

    /// Outstanding items
    ///
    /// Only unchecked ingredients, only recipes that still have at least one.
    #[oai(
        path = "/shopping-list/outstanding",
        method = "get",
        tag = "ApiTags::ShoppingList"
    )]
    async fn view_outstanding(&self) -> ShoppingListResponse {
        match self.view_outstanding_use_case.execute().await {
            Ok(view) => ShoppingListResponse::Ok(Json(view_to_response(view))),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ShoppingListResponse::InternalError(json)
            }
        }
    }

    /// Track a recipe
    ///
    /// Resolves the recipe and registers its ingredients on the list.
    /// Tracking an already-tracked recipe refreshes its title and
    /// ingredient text but never touches existing check state.
    #[oai(
        path = "/shopping-list/recipes",
        method = "post",
        tag = "ApiTags::ShoppingList"
    )]
    async fn track_recipe(&self, body: Json<TrackRecipeRequest>) -> TrackRecipeResponse {
        let recipe = match self
            .get_recipe_use_case
            .execute(GetRecipeByIdParams {
                id: body.0.recipe_id,
            })
            .await
        {
            Ok(recipe) => recipe,
            Err(err) => {
                let (status, json) = err.into_error_response();
                return match status.as_u16() {
                    404 => TrackRecipeResponse::NotFound(json),
                    _ => TrackRecipeResponse::InternalError(json),
                };
            }
        };

        match self
            .register_use_case
            .execute(RegisterRecipeParams { recipe })
            .await
        {
            Ok(()) => TrackRecipeResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                TrackRecipeResponse::InternalError(json)
            }
        }
    }

    /// Toggle an ingredient
    ///
    /// Flips one ingredient's check state and returns the new state.
    #[oai(
        path = "/shopping-list/recipes/:id/ingredients/:position/toggle",
        method = "post",
        tag = "ApiTags::ShoppingList"
    )]
    async fn toggle(&self, id: Path<String>, position: Path<u32>) -> ToggleResponse {
        let params = ToggleIngredientParams {
            recipe_id: id.0,
            position: position.0,
        };

        match self.toggle_use_case.execute(params).await {
            Ok(checked) => ToggleResponse::Ok(Json(ToggleIngredientResponse { checked })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ToggleResponse::InternalError(json)
            }
        }
    }

    /// Clear checked items
    ///
    /// Drops every checked ingredient and prunes recipes left without
    /// ingredients.
    #[oai(
        path = "/shopping-list/checked",
        method = "delete",
        tag = "ApiTags::ShoppingList"
    )]
    async fn clear_checked(&self) -> ClearCheckedResponse {
        match self.clear_checked_use_case.execute().await {
            Ok(()) => ClearCheckedResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ClearCheckedResponse::InternalError(json)
            }
        }
    }

    /// Stop tracking a recipe
    ///
    /// Removes the recipe from the list and clears all of its check state.
    #[oai(
        path = "/shopping-list/recipes/:id",
        method = "delete",
        tag = "ApiTags::ShoppingList"
    )]
    async fn remove_recipe(&self, id: Path<String>) -> RemoveTrackedRecipeResponse {
        match self
            .remove_recipe_use_case
            .execute(RemoveRecipeFromListParams { recipe_id: id.0 })
            .await
        {
            Ok(()) => RemoveTrackedRecipeResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                RemoveTrackedRecipeResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ShoppingListResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<RecipeChecklistResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum TrackRecipeResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ToggleResponse {
    #[oai(status = 200)]
    Ok(Json<ToggleIngredientResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearCheckedResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveTrackedRecipeResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
