//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod recipe_service;

pub use recipe_service::{RecipeDraft, RecipeService};
