//! Recipe service
//!
//! Validates client payloads and drives the recipe store.
//! All four operations are single repository calls, so they inherit the
//! repository's atomicity.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::{NewRecipe, Recipe, RecipeId};
use crate::domain::ports::RecipeRepository;
use crate::error::DomainError;

/// Recipes the store starts with
pub const EXAMPLE_RECIPES: &[(&str, &[&str])] = &[
    (
        "boiled white rice",
        &["1 cup white rice", "2 cups water", "pinch of salt"],
    ),
    (
        "milkshake",
        &["2 tbsp cocoa", "2 cups vanilla ice cream", "1 cup milk"],
    ),
];

/// Unvalidated recipe fields as received from a client
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeDraft {
    /// Client-supplied id as sent. Ignored on create; on replace it must name
    /// the target id.
    pub id: Option<String>,
    pub name: Option<String>,
    pub ingredients: Option<Vec<String>>,
}

impl RecipeDraft {
    /// Check required fields, reporting the first one missing
    pub fn validate(self) -> Result<NewRecipe, DomainError> {
        let name = self.name.ok_or_else(|| missing("name"))?;
        let ingredients = self.ingredients.ok_or_else(|| missing("ingredients"))?;
        Ok(NewRecipe { name, ingredients })
    }
}

fn missing(field: &str) -> DomainError {
    DomainError::Validation(format!("Missing `{}` in request body", field))
}

/// Service for managing recipes
pub struct RecipeService<RR>
where
    RR: RecipeRepository,
{
    recipes: Arc<RR>,
}

impl<RR> RecipeService<RR>
where
    RR: RecipeRepository,
{
    pub fn new(recipes: Arc<RR>) -> Self {
        Self { recipes }
    }

    /// Append the example recipes, returning how many were added
    pub async fn seed_examples(&self) -> Result<usize, DomainError> {
        for (name, ingredients) in EXAMPLE_RECIPES {
            self.recipes
                .create(NewRecipe::new(*name, ingredients))
                .await?;
        }
        tracing::info!(count = EXAMPLE_RECIPES.len(), "Seeded example recipes");
        Ok(EXAMPLE_RECIPES.len())
    }

    /// All recipes in insertion order
    pub async fn list(&self) -> Result<Vec<Recipe>, DomainError> {
        let recipes = self.recipes.list().await?;
        tracing::debug!(count = recipes.len(), "Listed recipes");
        Ok(recipes)
    }

    /// Create a recipe from a client draft. Any id in the draft is ignored.
    pub async fn create(&self, draft: RecipeDraft) -> Result<Recipe, DomainError> {
        let new_recipe = draft.validate()?;
        let recipe = self.recipes.create(new_recipe).await?;
        tracing::info!(recipe_id = %recipe.id, name = %recipe.name, "Created recipe");
        Ok(recipe)
    }

    /// Replace name and ingredients of an existing recipe.
    ///
    /// Payload problems are reported before existence, so a bad draft against an
    /// unknown id is a validation error.
    pub async fn replace(&self, id: &RecipeId, draft: RecipeDraft) -> Result<(), DomainError> {
        if let Some(body_id) = &draft.id {
            if body_id.trim().parse::<Uuid>().ok() != Some(id.0) {
                return Err(DomainError::Validation(format!(
                    "Request path id ({}) and request body id ({}) must match",
                    id, body_id
                )));
            }
        }
        let update = draft.validate()?;
        let recipe = self.recipes.replace(id, update).await?;
        tracing::info!(
            recipe_id = %recipe.id,
            name = %recipe.name,
            ingredients = recipe.ingredients.len(),
            "Updated recipe"
        );
        Ok(())
    }

    /// Remove a recipe. Deleting an unknown id succeeds without effect.
    pub async fn delete(&self, id: &RecipeId) -> Result<(), DomainError> {
        if self.recipes.delete(id).await? {
            tracing::info!(recipe_id = %id, "Deleted recipe");
        } else {
            tracing::debug!(recipe_id = %id, "Delete of unknown recipe ignored");
        }
        Ok(())
    }
}
