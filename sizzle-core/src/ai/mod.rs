//! AI client module for LLM integration via OpenRouter.
//!
//! This module provides:
//! - `AiClient` trait for abstracting AI backends
//! - `OpenRouterClient` implementation with schema-constrained output
//! - `FakeClient` for tests
//! - Configuration via environment variables
//! - Prompt templates for recipe generation
//!
//! # Configuration
//!
//! Set these environment variables:
//!
//! - `OPENROUTER_API_KEY` (required): Your OpenRouter API key
//! - `SIZZLE_AI_MODEL` (optional): Model name, e.g., "openai/gpt-4o-mini"
//! - `SIZZLE_AI_BASE_URL` (optional): API base URL

mod client;
mod config;
mod fake;
pub mod prompts;
mod types;

pub use client::{AiClient, AiError, OpenRouterClient};
pub use config::{AiConfig, ConfigError};
pub use fake::FakeClient;
pub use types::{ChatMessage, ChatRequest, ChatResponse, ResponseSchema, Role, Usage};
