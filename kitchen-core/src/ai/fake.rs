//! Fake AI client for testing.
//!
//! Returns deterministic responses based on the user message, so tests and
//! deployments without an API key never touch the network.

use async_trait::async_trait;

use super::chat::{ChatRequest, ChatResponse};
use super::client::{AiClient, AiError};

#[derive(Debug, Clone)]
enum Fallback {
    Content(String),
    NoContent,
    Fail(String),
}

/// A fake AI client.
///
/// Responses are matched by checking if the last user message contains a
/// registered substring (case-insensitive). Patterns are tried in the order
/// they were added.
#[derive(Debug)]
pub struct FakeAiClient {
    responses: Vec<(String, String)>,
    fallback: Fallback,
}

impl Default for FakeAiClient {
    /// Answers every prompt with an empty JSON object.
    fn default() -> Self {
        Self {
            responses: Vec::new(),
            fallback: Fallback::Content("{}".to_string()),
        }
    }
}

impl FakeAiClient {
    /// Create a client that answers prompts containing `prompt_contains` with `response`.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        Self::default().add_response(prompt_contains, response)
    }

    pub fn add_response(mut self, prompt_contains: &str, response: &str) -> Self {
        self.responses
            .push((prompt_contains.to_lowercase(), response.to_string()));
        self
    }

    /// Return a response without any message content when nothing matches.
    pub fn without_content(mut self) -> Self {
        self.fallback = Fallback::NoContent;
        self
    }

    /// Fail with an API error when nothing matches.
    pub fn failing(message: &str) -> Self {
        Self {
            responses: Vec::new(),
            fallback: Fallback::Fail(message.to_string()),
        }
    }

    /// A client preloaded with a well-formed recipe for prompts mentioning chili.
    pub fn with_recipe_responses() -> Self {
        Self::with_response(
            "chili",
            r#"{
                "title": "Vegetarian Chili",
                "description": "A hearty bean chili.",
                "ingredients": ["2 cans kidney beans", "1 onion", "1 can crushed tomatoes", "2 tbsp chili powder"],
                "directions": ["Saute the onion", "Add beans, tomatoes and spices", "Simmer for 30 minutes"]
            }"#,
        )
    }
}

#[async_trait]
impl AiClient for FakeAiClient {
    async fn complete(
        &self,
        _prompt_name: &str,
        request: ChatRequest,
    ) -> Result<ChatResponse, AiError> {
        let prompt = request
            .last_user_message()
            .unwrap_or_default()
            .to_lowercase();

        let matched = self
            .responses
            .iter()
            .find(|(pattern, _)| prompt.contains(pattern.as_str()))
            .map(|(_, response)| response.clone());

        let content = match (matched, &self.fallback) {
            (Some(response), _) => Some(response),
            (None, Fallback::Content(response)) => Some(response.clone()),
            (None, Fallback::NoContent) => None,
            (None, Fallback::Fail(message)) => return Err(AiError::Api(message.clone())),
        };

        Ok(ChatResponse {
            content,
            model: self.model_name().to_string(),
        })
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}
