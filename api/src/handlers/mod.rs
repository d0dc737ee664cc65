//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod recipes;

pub use recipes::{create_recipe, delete_recipe, list_recipes, replace_recipe};
