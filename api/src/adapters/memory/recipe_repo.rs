//! In-memory adapter for RecipeRepository

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{NewRecipe, Recipe, RecipeId, RecipeUpdate};
use crate::domain::ports::RecipeRepository;
use crate::error::DomainError;

/// Attempts at drawing an unused id before giving up
const MAX_ID_ATTEMPTS: usize = 8;

/// Ordered, lock-guarded recipe collection
///
/// A single `RwLock` covers the whole `Vec`, so every write (including the id
/// uniqueness check on create) happens under one guard.
#[derive(Default)]
pub struct InMemoryRecipeRepository {
    recipes: RwLock<Vec<Recipe>>,
}

impl InMemoryRecipeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with recipes, keeping their ids
    #[cfg(test)]
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: RwLock::new(recipes),
        }
    }
}

fn fresh_id(recipes: &[Recipe]) -> Result<RecipeId, DomainError> {
    for _ in 0..MAX_ID_ATTEMPTS {
        let id = RecipeId::new();
        if !recipes.iter().any(|r| r.id == id) {
            return Ok(id);
        }
    }
    Err(DomainError::Internal(
        "could not allocate a unique recipe id".to_string(),
    ))
}

#[async_trait]
impl RecipeRepository for InMemoryRecipeRepository {
    async fn list(&self) -> Result<Vec<Recipe>, DomainError> {
        Ok(self.recipes.read().await.clone())
    }

    async fn create(&self, recipe: NewRecipe) -> Result<Recipe, DomainError> {
        let mut recipes = self.recipes.write().await;
        let recipe = recipe.into_recipe(fresh_id(&recipes)?);
        recipes.push(recipe.clone());
        Ok(recipe)
    }

    async fn replace(&self, id: &RecipeId, update: RecipeUpdate) -> Result<Recipe, DomainError> {
        let mut recipes = self.recipes.write().await;
        let recipe = recipes
            .iter_mut()
            .find(|r| r.id == *id)
            .ok_or_else(|| DomainError::NotFound(format!("Recipe {} not found", id)))?;
        recipe.apply(update);
        Ok(recipe.clone())
    }

    async fn delete(&self, id: &RecipeId) -> Result<bool, DomainError> {
        let mut recipes = self.recipes.write().await;
        let before = recipes.len();
        recipes.retain(|r| r.id != *id);
        Ok(recipes.len() < before)
    }
}
