//! Recipe generation prompt, shared across all request variants.
//!
//! The renderer is pure: identical requests produce byte-identical prompts.
//! Optional fields that are absent contribute no text at all - no placeholder
//! or "N/A" clauses.

use crate::request::RecipeRequest;

/// Prompt name for logging.
pub const GENERATE_RECIPE_PROMPT_NAME: &str = "generate_recipe";

/// Requirements appended to every variant.
const REQUIREMENTS: &str = "\
Requirements:
- If the dish is Pakistani or Indian, use authentic spices and cooking methods
- If the dish is from another cuisine, maintain authenticity to that cuisine
- Provide accurate ingredient measurements scaled for the number of servings
- Include detailed step-by-step cooking instructions
- Use common ingredients that are easily available
- Keep the recipe authentic and traditional
";

/// Output formatting instructions appended to every variant.
const FORMAT_INSTRUCTIONS: &str = "\
The recipe should include a title, a complete list of ingredients with measurements, detailed step-by-step instructions, the total cooking time, and the number of servings.
Ensure the cookingTime is a string (e.g., \"30 minutes\").
";

const DEFAULT_SERVINGS_CLAUSE: &str =
    "The recipe should serve 4 people (standard serving size).\n";

fn scaled_servings_clause(servings: &str) -> String {
    format!(
        "The recipe should be scaled to serve exactly {servings} people. Adjust all ingredient quantities accordingly.\n"
    )
}

/// Render the generation prompt for the given request.
///
/// Callers must validate the request first; the renderer interpolates field
/// values as-is.
pub fn render_recipe_prompt(request: &RecipeRequest) -> String {
    let mut prompt = String::new();

    match request {
        RecipeRequest::Ingredients(req) => {
            prompt.push_str(
                "You are a world-class chef specializing in creating delicious recipes based on the ingredients a user has on hand.\n\n",
            );
            prompt.push_str(&format!(
                "Create a recipe based on the following ingredients: {}.\n",
                req.ingredients
            ));
            if let Some(preference) = &req.dietary_preference {
                prompt.push_str(&format!(
                    "The recipe should adhere to the following dietary preference: {preference}.\n"
                ));
            }
            prompt.push_str(DEFAULT_SERVINGS_CLAUSE);
        }

        RecipeRequest::IngredientsWithPreferences(req) => {
            prompt.push_str(
                "You are a world-class chef. Generate a recipe based on the following criteria.\n\n",
            );
            prompt.push_str(&format!("Ingredients: {}\n", req.ingredients));
            if let Some(cuisine) = &req.cuisine {
                prompt.push_str(&format!("Cuisine: {cuisine}\n"));
            }
            if let Some(meal_type) = &req.meal_type {
                prompt.push_str(&format!("Meal type: {meal_type}\n"));
            }
            if let Some(restrictions) = &req.dietary_restrictions {
                prompt.push_str(&format!("Dietary restrictions: {restrictions}\n"));
            }
            if let Some(cook_time) = &req.cook_time {
                prompt.push_str(&format!("Maximum cook time: {cook_time} minutes\n"));
            }
            if let Some(servings) = &req.servings {
                prompt.push_str(&format!("Servings: {}", scaled_servings_clause(servings)));
            }
            if let Some(difficulty) = &req.difficulty {
                prompt.push_str(&format!("Difficulty: {difficulty}\n"));
            }
            if req.include_nutrition {
                prompt.push_str(
                    "Include estimated nutritional information (calories, protein, carbs, fat).\n",
                );
            }
        }

        RecipeRequest::DishName(req) => {
            prompt.push_str(
                "You are a world-class chef with expertise in international cuisines, including Pakistani, Indian, Italian, Mexican, Chinese, and many more.\n\n",
            );
            prompt.push_str(&format!(
                "Create a detailed and authentic recipe for: {}.\n",
                req.dish_name
            ));
            match &req.servings {
                Some(servings) => prompt.push_str(&scaled_servings_clause(servings)),
                None => prompt.push_str(DEFAULT_SERVINGS_CLAUSE),
            }
            if let Some(preference) = &req.dietary_preference {
                prompt.push_str(&format!(
                    "The recipe should adhere to the following dietary preference: {preference}.\n"
                ));
            }
        }
    }

    prompt.push('\n');
    prompt.push_str(REQUIREMENTS);
    prompt.push('\n');
    prompt.push_str(FORMAT_INSTRUCTIONS);
    prompt
}
