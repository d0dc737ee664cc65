//! Recipe domain entity
//!
//! A named list of ingredients held by the recipe store.

use uuid::Uuid;

/// Unique identifier for a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecipeId(pub Uuid);

impl RecipeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecipeId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for RecipeId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored recipe. The wire shape lives in `handlers::recipes::RecipeResponse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub ingredients: Vec<String>,
}

impl Recipe {
    /// Overwrite name and ingredients, keeping the id
    pub fn apply(&mut self, update: RecipeUpdate) {
        self.name = update.name;
        self.ingredients = update.ingredients;
    }
}

/// Data needed to create a new recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    pub name: String,
    pub ingredients: Vec<String>,
}

impl NewRecipe {
    pub fn new(name: impl Into<String>, ingredients: &[&str]) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        }
    }

    /// Materialise into a stored recipe under the given id
    pub fn into_recipe(self, id: RecipeId) -> Recipe {
        Recipe {
            id,
            name: self.name,
            ingredients: self.ingredients,
        }
    }
}

/// Full replacement of a recipe's mutable fields
pub type RecipeUpdate = NewRecipe;
