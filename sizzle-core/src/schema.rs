//! Declared output schemas for schema-constrained generation.
//!
//! The schema is declared once per output variant and sent to the backend so
//! it is constrained to emit conforming JSON. Validation of the returned
//! value is deterministic and independent of which backend performed the
//! generation (serde parse plus `GeneratedRecipe::validate`).

use serde_json::json;

use crate::ai::ResponseSchema;
use crate::request::RecipeRequest;

/// Schema name sent to the backend.
pub const RECIPE_SCHEMA_NAME: &str = "generated_recipe";

/// Build the declared output schema for the given request.
///
/// All variants require title, ingredients, steps, cookingTime, and
/// servings. Only the preferences variant declares the optional difficulty
/// and nutrition fields.
pub fn response_schema(request: &RecipeRequest) -> ResponseSchema {
    let mut properties = json!({
        "title": {
            "type": "string",
            "description": "The title of the generated recipe."
        },
        "ingredients": {
            "type": "array",
            "items": {"type": "string"},
            "description": "A list of ingredients with measurements, in order of use."
        },
        "steps": {
            "type": "array",
            "items": {"type": "string"},
            "description": "Step-by-step instructions in execution order."
        },
        "cookingTime": {
            "type": "string",
            "description": "The total cooking time, e.g. \"30 minutes\"."
        },
        "servings": {
            "type": "string",
            "description": "The number of servings the recipe yields."
        }
    });

    if matches!(request, RecipeRequest::IngredientsWithPreferences(_)) {
        properties["difficulty"] = json!({
            "type": "string",
            "description": "The difficulty level of the recipe."
        });
        properties["nutrition"] = json!({
            "type": "object",
            "properties": {
                "calories": {"type": "string"},
                "protein": {"type": "string"},
                "carbs": {"type": "string"},
                "fat": {"type": "string"}
            },
            "required": ["calories", "protein", "carbs", "fat"],
            "description": "Estimated nutritional information per serving."
        });
    }

    ResponseSchema {
        name: RECIPE_SCHEMA_NAME.to_string(),
        schema: json!({
            "type": "object",
            "properties": properties,
            "required": ["title", "ingredients", "steps", "cookingTime", "servings"],
            "additionalProperties": false
        }),
    }
}
