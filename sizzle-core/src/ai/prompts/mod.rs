//! AI prompt templates.

pub mod generate_recipe;

pub use generate_recipe::{render_recipe_prompt, GENERATE_RECIPE_PROMPT_NAME};
