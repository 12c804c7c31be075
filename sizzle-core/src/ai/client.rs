//! AI client implementation using OpenRouter (OpenAI-compatible API).

use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs, ResponseFormat,
        ResponseFormatJsonSchema,
    },
    Client,
};
use async_trait::async_trait;
use thiserror::Error;

use super::config::AiConfig;
use super::types::{ChatMessage, ChatRequest, ChatResponse, Role, Usage};

#[derive(Error, Debug)]
pub enum AiError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Rate limited by the backend")]
    RateLimited,

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(#[from] super::config::ConfigError),
}

/// Trait for AI clients.
///
/// Implementations should be stateless and thread-safe. The `prompt_name`
/// identifies the calling flow for logging.
#[async_trait]
pub trait AiClient: Send + Sync {
    /// Complete a chat request.
    async fn complete(
        &self,
        prompt_name: &str,
        request: ChatRequest,
    ) -> Result<ChatResponse, AiError>;
}

/// AI client backed by OpenRouter.
pub struct OpenRouterClient {
    client: Client<OpenAIConfig>,
    config: AiConfig,
}

impl OpenRouterClient {
    /// Create a new client from environment configuration.
    pub fn from_env() -> Result<Self, AiError> {
        let config = AiConfig::from_env()?;
        Ok(Self::new(config))
    }

    /// Create a new client with the given configuration.
    pub fn new(config: AiConfig) -> Self {
        // Configure async-openai to use OpenRouter
        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.api_key)
            .with_api_base(&config.base_url);

        let client = Client::with_config(openai_config);

        Self { client, config }
    }

    /// Convert our ChatMessage to async-openai's format.
    fn to_openai_message(msg: &ChatMessage) -> Result<ChatCompletionRequestMessage, AiError> {
        match msg.role {
            Role::System => ChatCompletionRequestSystemMessageArgs::default()
                .content(msg.content.clone())
                .build()
                .map(Into::into)
                .map_err(|e| AiError::Api(format!("Failed to build system message: {}", e))),
            Role::User => ChatCompletionRequestUserMessageArgs::default()
                .content(msg.content.clone())
                .build()
                .map(Into::into)
                .map_err(|e| AiError::Api(format!("Failed to build user message: {}", e))),
            Role::Assistant => {
                use async_openai::types::ChatCompletionRequestAssistantMessageArgs;
                ChatCompletionRequestAssistantMessageArgs::default()
                    .content(msg.content.clone())
                    .build()
                    .map(Into::into)
                    .map_err(|e| AiError::Api(format!("Failed to build assistant message: {}", e)))
            }
        }
    }

    fn map_api_error(err: async_openai::error::OpenAIError) -> AiError {
        let message = err.to_string();
        if message.contains("rate limit") || message.contains("rate_limit") {
            AiError::RateLimited
        } else {
            AiError::Api(message)
        }
    }
}

#[async_trait]
impl AiClient for OpenRouterClient {
    async fn complete(
        &self,
        prompt_name: &str,
        request: ChatRequest,
    ) -> Result<ChatResponse, AiError> {
        // Build the request
        let messages: Vec<ChatCompletionRequestMessage> = request
            .messages
            .iter()
            .map(Self::to_openai_message)
            .collect::<Result<Vec<_>, _>>()?;

        let mut req_builder = CreateChatCompletionRequestArgs::default();
        req_builder.model(&self.config.model).messages(messages);

        if let Some(max_tokens) = request.max_tokens {
            req_builder.max_completion_tokens(max_tokens);
        }

        if let Some(temperature) = request.temperature {
            req_builder.temperature(temperature);
        }

        if let Some(response_schema) = request.response_schema {
            req_builder.response_format(ResponseFormat::JsonSchema {
                json_schema: ResponseFormatJsonSchema {
                    name: response_schema.name,
                    description: None,
                    schema: Some(response_schema.schema),
                    strict: None,
                },
            });
        }

        let openai_request = req_builder
            .build()
            .map_err(|e| AiError::Api(e.to_string()))?;

        tracing::debug!(
            prompt_name = prompt_name,
            model = &self.config.model,
            "Calling AI API"
        );

        // Make the API call
        let response = self
            .client
            .chat()
            .create(openai_request)
            .await
            .map_err(Self::map_api_error)?;

        // Extract the response content. An empty envelope is a malformed
        // generation, not a transport failure.
        let content = response
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .ok_or_else(|| AiError::Parse("No text content in response".to_string()))?;

        let usage = response
            .usage
            .map(|u| Usage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            })
            .unwrap_or_default();

        Ok(ChatResponse { content, usage })
    }
}
