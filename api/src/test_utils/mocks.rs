//! Mock implementations of port traits
//!
//! In-memory repositories that record or fail on demand so tests can verify
//! how the service drives its store.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::adapters::InMemoryRecipeRepository;
use crate::domain::entities::{NewRecipe, Recipe, RecipeId, RecipeUpdate};
use crate::domain::ports::RecipeRepository;
use crate::error::DomainError;

// ============================================================================
// Recording Recipe Repository
// ============================================================================

/// Delegates to the real in-memory store and records which methods were hit
#[derive(Default)]
pub struct RecordingRecipeRepository {
    inner: InMemoryRecipeRepository,
    calls: Mutex<Vec<&'static str>>,
}

impl RecordingRecipeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a recipe, keeping its id. Not recorded as a call.
    pub fn with_recipe(recipe: Recipe) -> Self {
        Self {
            inner: InMemoryRecipeRepository::with_recipes(vec![recipe]),
            calls: Mutex::default(),
        }
    }

    /// Repository methods called so far, in order
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl RecipeRepository for RecordingRecipeRepository {
    async fn list(&self) -> Result<Vec<Recipe>, DomainError> {
        self.record("list");
        self.inner.list().await
    }

    async fn create(&self, recipe: NewRecipe) -> Result<Recipe, DomainError> {
        self.record("create");
        self.inner.create(recipe).await
    }

    async fn replace(&self, id: &RecipeId, update: RecipeUpdate) -> Result<Recipe, DomainError> {
        self.record("replace");
        self.inner.replace(id, update).await
    }

    async fn delete(&self, id: &RecipeId) -> Result<bool, DomainError> {
        self.record("delete");
        self.inner.delete(id).await
    }
}

// ============================================================================
// Failing Recipe Repository
// ============================================================================

/// Every call fails with an internal error
pub struct FailingRecipeRepository;

fn unavailable() -> DomainError {
    DomainError::Internal("recipe store unavailable".to_string())
}

#[async_trait]
impl RecipeRepository for FailingRecipeRepository {
    async fn list(&self) -> Result<Vec<Recipe>, DomainError> {
        Err(unavailable())
    }

    async fn create(&self, _recipe: NewRecipe) -> Result<Recipe, DomainError> {
        Err(unavailable())
    }

    async fn replace(&self, _id: &RecipeId, _update: RecipeUpdate) -> Result<Recipe, DomainError> {
        Err(unavailable())
    }

    async fn delete(&self, _id: &RecipeId) -> Result<bool, DomainError> {
        Err(unavailable())
    }
}
