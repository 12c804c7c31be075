//! Recipe generation requests.
//!
//! The three supported input shapes are one tagged union so the prompt
//! renderer and pipeline handle them uniformly.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error for malformed requests, raised before any backend call.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}

/// Ingredients-only request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientsRequest {
    /// Comma-separated list of ingredients the user has on hand.
    pub ingredients: String,
    /// Optional dietary preference (e.g., vegan, gluten-free, keto).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary_preference: Option<String>,
}

/// Ingredients request with additional preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesRequest {
    /// Comma-separated list of ingredients.
    pub ingredients: String,
    /// Desired cuisine type (e.g., Italian, Mexican).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    /// Desired meal type (e.g., Breakfast, Dinner).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<String>,
    /// Dietary restrictions (e.g., vegan, gluten-free).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary_restrictions: Option<String>,
    /// Maximum cooking time in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<String>,
    /// Desired number of servings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<String>,
    /// Desired difficulty level (e.g., Easy, Medium, Hard).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    /// Whether to include nutrition information.
    #[serde(default)]
    pub include_nutrition: bool,
}

/// Request for a recipe by dish name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishNameRequest {
    /// The name of the dish (e.g., "Chicken Biryani", "Pasta Carbonara").
    pub dish_name: String,
    /// The number of servings the recipe should yield (e.g., "2", "6").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<String>,
    /// Optional dietary preference (e.g., vegan, gluten-free, keto).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary_preference: Option<String>,
}

/// A recipe generation request. Exactly one mode is active per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RecipeRequest {
    Ingredients(IngredientsRequest),
    IngredientsWithPreferences(PreferencesRequest),
    DishName(DishNameRequest),
}

impl RecipeRequest {
    /// Mode identifier for logging.
    pub fn mode(&self) -> &'static str {
        match self {
            RecipeRequest::Ingredients(_) => "ingredients",
            RecipeRequest::IngredientsWithPreferences(_) => "ingredients_with_preferences",
            RecipeRequest::DishName(_) => "dish_name",
        }
    }

    /// Check that required fields are non-empty.
    ///
    /// Failures here never reach the backend.
    pub fn validate(&self) -> Result<(), RequestError> {
        match self {
            RecipeRequest::Ingredients(req) => {
                require_non_blank(&req.ingredients, "ingredients")
            }
            RecipeRequest::IngredientsWithPreferences(req) => {
                require_non_blank(&req.ingredients, "ingredients")
            }
            RecipeRequest::DishName(req) => require_non_blank(&req.dish_name, "dish name"),
        }
    }
}

fn require_non_blank(value: &str, field: &'static str) -> Result<(), RequestError> {
    if value.trim().is_empty() {
        Err(RequestError::EmptyField(field))
    } else {
        Ok(())
    }
}
