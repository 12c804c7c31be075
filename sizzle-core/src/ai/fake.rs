//! Fake AI client for testing.
//!
//! Returns deterministic responses based on prompt matching, allowing tests
//! to run without network access or API costs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use super::client::{AiClient, AiError};
use super::types::{ChatRequest, ChatResponse, Usage};

/// A fake AI client for testing.
///
/// Responses are matched by checking if any message in the request contains
/// a registered substring. If no match is found, returns a default response
/// or an API error.
#[derive(Debug, Default)]
pub struct FakeClient {
    /// Map of prompt substring -> response content
    responses: RwLock<HashMap<String, String>>,
    /// Default response if no match found
    default_response: Option<String>,
    /// Number of completions issued so far
    calls: AtomicUsize,
}

impl FakeClient {
    /// Create a new FakeClient with no registered responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a FakeClient that returns a specific response for prompts
    /// containing a substring.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let mut client = Self::new();
        client.add_response(prompt_contains, response);
        client
    }

    /// Add a response for prompts containing a specific substring.
    pub fn add_response(&mut self, prompt_contains: &str, response: &str) {
        self.responses
            .write()
            .unwrap()
            .insert(prompt_contains.to_string(), response.to_string());
    }

    /// Set the default response when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// Number of completions this client has been asked for.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AiClient for FakeClient {
    async fn complete(
        &self,
        _prompt_name: &str,
        request: ChatRequest,
    ) -> Result<ChatResponse, AiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let prompt: String = request
            .messages
            .iter()
            .map(|m| m.content.to_lowercase())
            .collect::<Vec<_>>()
            .join("\n");

        let responses = self.responses.read().unwrap();

        // Find first matching pattern (case-insensitive)
        for (pattern, response) in responses.iter() {
            if prompt.contains(&pattern.to_lowercase()) {
                return Ok(ChatResponse {
                    content: response.clone(),
                    usage: Usage::default(),
                });
            }
        }

        match &self.default_response {
            Some(response) => Ok(ChatResponse {
                content: response.clone(),
                usage: Usage::default(),
            }),
            None => Err(AiError::Api(format!(
                "FakeClient: No response configured for prompt (first 100 chars): {}",
                &prompt[..prompt.len().min(100)]
            ))),
        }
    }
}
