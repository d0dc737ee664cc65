//! Repository port traits
//!
//! These traits define the interface for recipe storage.
//! Implementations are provided by adapters (e.g., the in-memory store).

use async_trait::async_trait;

use crate::domain::entities::{NewRecipe, Recipe, RecipeId, RecipeUpdate};
use crate::error::DomainError;

/// Repository for Recipe entities
///
/// Each method is atomic with respect to every other call on the same repository.
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// List every recipe in insertion order
    async fn list(&self) -> Result<Vec<Recipe>, DomainError>;

    /// Store a new recipe under a freshly generated id
    async fn create(&self, recipe: NewRecipe) -> Result<Recipe, DomainError>;

    /// Replace name and ingredients of an existing recipe.
    /// Fails with `DomainError::NotFound` if the id is unknown.
    async fn replace(&self, id: &RecipeId, update: RecipeUpdate) -> Result<Recipe, DomainError>;

    /// Remove a recipe. Returns whether a recipe was actually removed;
    /// an unknown id is not an error.
    async fn delete(&self, id: &RecipeId) -> Result<bool, DomainError>;
}
