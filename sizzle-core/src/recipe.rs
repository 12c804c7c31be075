//! Generated recipe output types and validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Model-estimated nutritional information. Values are free-text strings
/// (e.g., "250 kcal"), not computed quantities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}

/// A recipe produced by the generation backend.
///
/// Immutable output of one pipeline invocation. Persistence, identifiers,
/// and display are caller concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedRecipe {
    /// The title of the generated recipe.
    pub title: String,
    /// Ingredients with measurements, in the order they are used.
    pub ingredients: Vec<String>,
    /// Preparation steps in execution order.
    pub steps: Vec<String>,
    /// Total cooking time as free text (e.g., "30 minutes").
    pub cooking_time: String,
    /// Number of servings the recipe yields, as free text.
    pub servings: String,
    /// Difficulty level, present only for the preferences output variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    /// Nutrition estimate, present only when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
}

/// Error for semantically empty output that the declared schema alone
/// cannot rule out.
#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("required field '{0}' is empty")]
    EmptyField(&'static str),
}

impl GeneratedRecipe {
    /// Check the non-emptiness contract of the output schema.
    ///
    /// Structurally valid but empty output (blank title, no steps) is a
    /// schema violation, never a warning. No defaults are substituted.
    pub fn validate(&self) -> Result<(), RecipeError> {
        if self.title.trim().is_empty() {
            return Err(RecipeError::EmptyField("title"));
        }
        if self.ingredients.is_empty() {
            return Err(RecipeError::EmptyField("ingredients"));
        }
        if self.steps.is_empty() {
            return Err(RecipeError::EmptyField("steps"));
        }
        if self.cooking_time.trim().is_empty() {
            return Err(RecipeError::EmptyField("cookingTime"));
        }
        if self.servings.trim().is_empty() {
            return Err(RecipeError::EmptyField("servings"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recipe() -> GeneratedRecipe {
        GeneratedRecipe {
            title: "Chicken Karahi".to_string(),
            ingredients: vec!["1 kg chicken".to_string(), "4 tomatoes".to_string()],
            steps: vec!["Heat oil".to_string(), "Add chicken".to_string()],
            cooking_time: "45 minutes".to_string(),
            servings: "4".to_string(),
            difficulty: None,
            nutrition: None,
        }
    }

    #[test]
    fn test_valid_recipe_passes() {
        assert!(sample_recipe().validate().is_ok());
    }

    #[test]
    fn test_empty_steps_rejected() {
        let mut recipe = sample_recipe();
        recipe.steps.clear();
        let err = recipe.validate().unwrap_err();
        assert!(err.to_string().contains("steps"));
    }

    #[test]
    fn test_empty_ingredients_rejected() {
        let mut recipe = sample_recipe();
        recipe.ingredients.clear();
        assert!(recipe.validate().is_err());
    }

    #[test]
    fn test_blank_title_rejected() {
        let mut recipe = sample_recipe();
        recipe.title = "  ".to_string();
        assert!(recipe.validate().is_err());
    }

    #[test]
    fn test_missing_required_field_fails_to_parse() {
        // No `steps` field at all: deserialization must fail rather than
        // substitute a default.
        let json = r#"{
            "title": "Omelette",
            "ingredients": ["2 eggs"],
            "cookingTime": "5 minutes",
            "servings": "1"
        }"#;
        assert!(serde_json::from_str::<GeneratedRecipe>(json).is_err());
    }

    #[test]
    fn test_wire_format_uses_camel_case() {
        let json = serde_json::to_string(&sample_recipe()).unwrap();
        assert!(json.contains("cookingTime"));
        assert!(!json.contains("cooking_time"));
    }

    #[test]
    fn test_optional_fields_parse_when_present() {
        let json = r#"{
            "title": "Dal",
            "ingredients": ["1 cup lentils"],
            "steps": ["Boil lentils"],
            "cookingTime": "30 minutes",
            "servings": "2",
            "difficulty": "Easy",
            "nutrition": {"calories": "220", "protein": "12g", "carbs": "35g", "fat": "2g"}
        }"#;
        let recipe: GeneratedRecipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.difficulty.as_deref(), Some("Easy"));
        assert_eq!(recipe.nutrition.unwrap().protein, "12g");
    }
}
