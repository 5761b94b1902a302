//! Chat-completion client used for recipe generation.
//!
//! This module provides:
//! - `AiClient` trait for abstracting completion providers
//! - `OpenAiClient` for any OpenAI-compatible API
//! - `FakeAiClient` with canned responses for tests and unconfigured deployments
//! - Configuration via environment variables
//!
//! # Configuration
//!
//! - `KITCHEN_AI_PROVIDER` (optional): "openai" (default) or "fake"
//! - `OPENAI_API_KEY` (required for "openai"): API key
//! - `KITCHEN_AI_MODEL` (optional): Model name, e.g. "gpt-4o-mini"
//! - `KITCHEN_AI_BASE_URL` (optional): API base URL
//!
//! # Example
//!
//! ```ignore
//! use kitchen_core::ai::{create_client, AiConfig, ChatMessage, ChatRequest};
//!
//! let client = create_client(&AiConfig::from_env()?)?;
//!
//! let request = ChatRequest {
//!     messages: vec![ChatMessage::user("Hello!")],
//!     ..Default::default()
//! };
//!
//! let response = client.complete("test", request).await?;
//! ```

mod chat;
mod client;
mod config;
mod fake;
pub mod prompts;

pub use chat::{ChatMessage, ChatRequest, ChatResponse, Role};
pub use client::{create_client, AiClient, AiError, OpenAiClient};
pub use config::{AiConfig, ConfigError, Provider};
pub use fake::FakeAiClient;
