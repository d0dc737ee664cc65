//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use uuid::Uuid;

use crate::app::RecipeDraft;
use crate::domain::entities::{Recipe, RecipeId};

/// Stable id so separate calls to `test_recipe` agree
pub const TEST_RECIPE_ID: Uuid = Uuid::from_u128(0x5eed_0000_0000_4000_8000_0000_0000_0001);

/// Create a test recipe with a fixed id
pub fn test_recipe() -> Recipe {
    Recipe {
        id: RecipeId(TEST_RECIPE_ID),
        name: "boiled white rice".to_string(),
        ingredients: vec![
            "1 cup white rice".to_string(),
            "2 cups water".to_string(),
            "pinch of salt".to_string(),
        ],
    }
}

/// Draft for a complete "tea" recipe
pub fn tea_draft() -> RecipeDraft {
    RecipeDraft {
        id: None,
        name: Some("tea".to_string()),
        ingredients: Some(vec!["tea bag".to_string(), "water".to_string()]),
    }
}

/// Draft for a complete "cake" recipe
pub fn cake_draft() -> RecipeDraft {
    RecipeDraft {
        id: None,
        name: Some("cake".to_string()),
        ingredients: Some(vec!["flour".to_string(), "sugar".to_string()]),
    }
}
