//! In-memory adapters
//!
//! Process-local implementations of repository traits. Nothing here survives a restart.

pub mod recipe_repo;

pub use recipe_repo::InMemoryRecipeRepository;
