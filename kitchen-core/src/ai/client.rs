//! AI client implementation for OpenAI-compatible chat completion APIs.

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs, ResponseFormat,
    },
    Client,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use super::chat::{ChatMessage, ChatRequest, ChatResponse, Role};
use super::config::{AiConfig, ConfigError, Provider};
use super::fake::FakeAiClient;

#[derive(Error, Debug)]
pub enum AiError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Failed to build request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Trait for chat-completion clients.
///
/// Implementations must be thread-safe; one client is shared by every request.
#[async_trait]
pub trait AiClient: Send + Sync {
    /// Complete a chat request.
    ///
    /// `prompt_name` identifies the calling prompt in logs.
    async fn complete(
        &self,
        prompt_name: &str,
        request: ChatRequest,
    ) -> Result<ChatResponse, AiError>;

    /// Model name used for completions.
    fn model_name(&self) -> &str;
}

/// Build the client selected by `config`.
pub fn create_client(config: &AiConfig) -> Result<Arc<dyn AiClient>, AiError> {
    match config.provider {
        Provider::OpenAi => Ok(Arc::new(OpenAiClient::new(config)?)),
        Provider::Fake => Ok(Arc::new(FakeAiClient::default())),
    }
}

/// Client for OpenAI or any API speaking the same protocol.
pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiClient {
    pub fn new(config: &AiConfig) -> Result<Self, AiError> {
        let api_key = config
            .api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("OPENAI_API_KEY".to_string()))?;

        let openai_config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(&config.base_url);

        Ok(Self {
            client: Client::with_config(openai_config),
            model: config.model.clone(),
        })
    }

    /// Convert our ChatMessage to async-openai's format.
    fn to_openai_message(msg: &ChatMessage) -> Result<ChatCompletionRequestMessage, AiError> {
        match msg.role {
            Role::System => ChatCompletionRequestSystemMessageArgs::default()
                .content(msg.content.clone())
                .build()
                .map(Into::into)
                .map_err(|e| AiError::InvalidRequest(format!("system message: {}", e))),
            Role::User => ChatCompletionRequestUserMessageArgs::default()
                .content(msg.content.clone())
                .build()
                .map(Into::into)
                .map_err(|e| AiError::InvalidRequest(format!("user message: {}", e))),
        }
    }
}

#[async_trait]
impl AiClient for OpenAiClient {
    async fn complete(
        &self,
        prompt_name: &str,
        request: ChatRequest,
    ) -> Result<ChatResponse, AiError> {
        let messages: Vec<ChatCompletionRequestMessage> = request
            .messages
            .iter()
            .map(Self::to_openai_message)
            .collect::<Result<Vec<_>, _>>()?;

        let mut req_builder = CreateChatCompletionRequestArgs::default();
        req_builder.model(&self.model).messages(messages);

        if let Some(max_tokens) = request.max_tokens {
            req_builder.max_completion_tokens(max_tokens);
        }

        if let Some(temperature) = request.temperature {
            req_builder.temperature(temperature);
        }

        if request.json_response {
            req_builder.response_format(ResponseFormat::JsonObject);
        }

        let openai_request = req_builder
            .build()
            .map_err(|e| AiError::InvalidRequest(e.to_string()))?;

        tracing::debug!(prompt_name, model = %self.model, "Calling AI API");

        let response = self
            .client
            .chat()
            .create(openai_request)
            .await
            .map_err(|e| AiError::Api(e.to_string()))?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content);

        Ok(ChatResponse {
            content,
            model: response.model,
        })
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openai_client_requires_key() {
        let config = AiConfig {
            provider: Provider::OpenAi,
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            base_url: "http://localhost:1".to_string(),
        };
        assert!(matches!(
            OpenAiClient::new(&config),
            Err(AiError::Config(ConfigError::MissingEnvVar(_)))
        ));
    }

    #[test]
    fn test_create_fake_client() {
        let config = AiConfig {
            provider: Provider::Fake,
            api_key: None,
            model: "ignored".to_string(),
            base_url: "http://localhost:1".to_string(),
        };
        let client = create_client(&config).unwrap();
        assert_eq!(client.model_name(), "fake-model");
    }
}
