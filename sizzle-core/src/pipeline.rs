//! Recipe generation pipeline.
//!
//! One invocation walks a linear stage machine:
//! Received -> Validated -> PromptBuilt -> BackendInvoked -> OutputValidated
//! -> Completed. Any stage failure maps to a `GenerateError`; no partial
//! output is ever returned. Each invocation is stateless and issues at most
//! one backend call; retry and timeout policy belong to the caller.

use thiserror::Error;

use crate::ai::prompts::{render_recipe_prompt, GENERATE_RECIPE_PROMPT_NAME};
use crate::ai::{AiClient, AiError, ChatMessage, ChatRequest};
use crate::recipe::GeneratedRecipe;
use crate::request::{RecipeRequest, RequestError};
use crate::schema;

const MAX_TOKENS: u32 = 4096;
const TEMPERATURE: f32 = 0.7;

/// Error type for recipe generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A required field was missing or empty; no backend call was made.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] RequestError),

    /// The backend could not be reached or refused the call.
    #[error("generation backend unavailable: {0}")]
    BackendUnavailable(AiError),

    /// The backend responded, but the output does not satisfy the declared
    /// recipe schema.
    #[error("generated output violates the recipe schema: {0}")]
    SchemaViolation(String),
}

/// Stages of a generation run, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Received,
    Validated,
    PromptBuilt,
    BackendInvoked,
    OutputValidated,
    Completed,
}

impl Stage {
    /// All stages in execution order.
    pub const ALL: &'static [Stage] = &[
        Stage::Received,
        Stage::Validated,
        Stage::PromptBuilt,
        Stage::BackendInvoked,
        Stage::OutputValidated,
        Stage::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Received => "received",
            Stage::Validated => "validated",
            Stage::PromptBuilt => "prompt_built",
            Stage::BackendInvoked => "backend_invoked",
            Stage::OutputValidated => "output_validated",
            Stage::Completed => "completed",
        }
    }
}

/// Generate a recipe for the given request.
///
/// Validates the request, renders the prompt, invokes the backend with the
/// declared output schema, and validates the structured response. The
/// returned recipe is owned entirely by the caller.
pub async fn generate(
    client: &dyn AiClient,
    request: &RecipeRequest,
) -> Result<GeneratedRecipe, GenerateError> {
    tracing::debug!(
        mode = request.mode(),
        stage = Stage::Received.as_str(),
        "Starting recipe generation"
    );

    request.validate()?;
    tracing::debug!(
        mode = request.mode(),
        stage = Stage::Validated.as_str(),
        "Request validated"
    );

    let prompt = render_recipe_prompt(request);
    let response_schema = schema::response_schema(request);
    tracing::debug!(
        mode = request.mode(),
        stage = Stage::PromptBuilt.as_str(),
        prompt_len = prompt.len(),
        "Prompt rendered"
    );

    let chat_request = ChatRequest {
        messages: vec![ChatMessage::user(prompt)],
        max_tokens: Some(MAX_TOKENS),
        temperature: Some(TEMPERATURE),
        response_schema: Some(response_schema),
    };

    let response = client
        .complete(GENERATE_RECIPE_PROMPT_NAME, chat_request)
        .await
        .map_err(|e| match e {
            // A response that arrived but carried no usable content is an
            // output problem, not a transport problem.
            AiError::Parse(message) => GenerateError::SchemaViolation(message),
            other => GenerateError::BackendUnavailable(other),
        })?;
    tracing::debug!(
        mode = request.mode(),
        stage = Stage::BackendInvoked.as_str(),
        total_tokens = response.usage.total_tokens,
        "Backend responded"
    );

    let recipe: GeneratedRecipe = serde_json::from_str(&response.content).map_err(|e| {
        GenerateError::SchemaViolation(format!("failed to parse backend response: {}", e))
    })?;
    recipe
        .validate()
        .map_err(|e| GenerateError::SchemaViolation(e.to_string()))?;
    tracing::debug!(
        mode = request.mode(),
        stage = Stage::OutputValidated.as_str(),
        "Output validated against the recipe schema"
    );

    tracing::debug!(
        mode = request.mode(),
        stage = Stage::Completed.as_str(),
        title = %recipe.title,
        "Recipe generated"
    );

    Ok(recipe)
}
