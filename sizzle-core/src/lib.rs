//! Recipe generation core.
//!
//! Takes a typed recipe request (ingredients on hand, ingredients with
//! preferences, or a dish name), renders an instruction prompt, invokes a
//! generation backend constrained to a declared output schema, and returns a
//! validated [`GeneratedRecipe`] or a typed failure.
//!
//! The core is stateless: every invocation is independent, owns no storage,
//! and issues at most one backend call. Persistence, identifiers, retry
//! policy, and display belong to callers.

pub mod ai;
pub mod pipeline;
pub mod recipe;
pub mod request;
pub mod schema;

pub use pipeline::{generate, GenerateError, Stage};
pub use recipe::{GeneratedRecipe, Nutrition, RecipeError};
pub use request::{
    DishNameRequest, IngredientsRequest, PreferencesRequest, RecipeRequest, RequestError,
};
