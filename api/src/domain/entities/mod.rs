//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod recipe;

pub use recipe::{NewRecipe, Recipe, RecipeId, RecipeUpdate};
