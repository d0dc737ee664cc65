//! Recipe handlers
//!
//! CRUD endpoints for the recipe collection.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::app::RecipeDraft;
use crate::domain::entities::{Recipe, RecipeId};
use crate::error::AppError;
use crate::AppState;

/// Request body for creating or replacing a recipe.
///
/// Fields are optional here so a missing field surfaces as a validation error
/// naming it, instead of a generic deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct RecipePayload {
    /// Must match the path id when present on PUT; ignored on POST.
    /// Kept untyped so an odd id never blocks a create.
    pub id: Option<Value>,
    pub name: Option<String>,
    pub ingredients: Option<Vec<String>>,
}

impl From<RecipePayload> for RecipeDraft {
    fn from(payload: RecipePayload) -> Self {
        RecipeDraft {
            id: payload.id.map(|id| match id {
                Value::String(s) => s,
                other => other.to_string(),
            }),
            name: payload.name,
            ingredients: payload.ingredients,
        }
    }
}

/// Recipe as returned to clients
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct RecipeResponse {
    pub id: String,
    pub name: String,
    pub ingredients: Vec<String>,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        RecipeResponse {
            id: recipe.id.to_string(),
            name: recipe.name,
            ingredients: recipe.ingredients,
        }
    }
}

/// GET /recipes
///
/// List all recipes in insertion order.
pub async fn list_recipes(
    State(state): State<AppState>,
) -> Result<Json<Vec<RecipeResponse>>, AppError> {
    let recipes = state.recipe_service.list().await?;
    Ok(Json(recipes.into_iter().map(RecipeResponse::from).collect()))
}

/// POST /recipes
///
/// Create a recipe. Responds 201 with the stored recipe, including its new id.
pub async fn create_recipe(
    State(state): State<AppState>,
    payload: Result<Json<RecipePayload>, JsonRejection>,
) -> Result<(StatusCode, Json<RecipeResponse>), AppError> {
    let Json(payload) = payload?;
    let recipe = state.recipe_service.create(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(recipe.into())))
}

/// PUT /recipes/:id
///
/// Replace a recipe's name and ingredients. Responds 204 with no body.
pub async fn replace_recipe(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<RecipePayload>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    state
        .recipe_service
        .replace(&RecipeId(id), payload.into())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /recipes/:id
///
/// Delete a recipe. Responds 204 whether or not the id existed; an id that is
/// not a UUID names no recipe and is a no-op as well.
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    match Uuid::parse_str(&id) {
        Ok(id) => state.recipe_service.delete(&RecipeId(id)).await?,
        Err(_) => tracing::debug!(recipe_id = %id, "Delete of non-UUID id ignored"),
    }
    Ok(StatusCode::NO_CONTENT)
}
