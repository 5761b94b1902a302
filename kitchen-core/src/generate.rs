//! Recipe generation from a free-text prompt.

use std::sync::Arc;

use crate::ai::prompts::{render_generate_recipe_system_prompt, GENERATE_RECIPE_PROMPT_NAME};
use crate::ai::{AiClient, AiError, ChatMessage, ChatRequest};
use crate::types::NewRecipe;
use crate::validate::validate_new_recipe;

/// Turns prompts like "vegetarian chili" into a `NewRecipe`.
#[derive(Clone)]
pub struct RecipeGenerator {
    client: Arc<dyn AiClient>,
}

impl RecipeGenerator {
    pub fn new(client: Arc<dyn AiClient>) -> Self {
        Self { client }
    }

    pub fn model_name(&self) -> &str {
        self.client.model_name()
    }

    /// Ask the AI client for a recipe.
    ///
    /// Returns `Ok(None)` when the model produced nothing usable: no content,
    /// content that is not JSON, or JSON that fails new-recipe validation.
    /// Transport and API failures are returned as errors.
    pub async fn from_prompt(&self, prompt_text: &str) -> Result<Option<NewRecipe>, AiError> {
        let request = ChatRequest {
            messages: vec![
                ChatMessage::system(render_generate_recipe_system_prompt()),
                ChatMessage::user(prompt_text),
            ],
            json_response: true,
            max_tokens: Some(2048),
            temperature: Some(0.7),
        };

        let response = self
            .client
            .complete(GENERATE_RECIPE_PROMPT_NAME, request)
            .await?;

        let Some(content) = response.content else {
            tracing::warn!(model = %response.model, "AI response had no content");
            return Ok(None);
        };

        let value: serde_json::Value = match serde_json::from_str(content.trim()) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(model = %response.model, error = %e, "AI response is not JSON");
                return Ok(None);
            }
        };

        match validate_new_recipe(&value) {
            Ok(recipe) => Ok(Some(recipe)),
            Err(e) => {
                tracing::warn!(model = %response.model, error = %e, "AI response is not a valid recipe");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::FakeAiClient;

    fn generator(client: FakeAiClient) -> RecipeGenerator {
        RecipeGenerator::new(Arc::new(client))
    }

    #[tokio::test]
    async fn test_generates_valid_recipe() {
        let generator = generator(FakeAiClient::with_recipe_responses());

        let recipe = generator
            .from_prompt("vegetarian chili")
            .await
            .unwrap()
            .expect("recipe");

        assert_eq!(recipe.title, "Vegetarian Chili");
        assert_eq!(recipe.ingredients.len(), 4);
        assert_eq!(recipe.directions[0], "Saute the onion");
        assert!(!recipe.is_public);
    }

    #[tokio::test]
    async fn test_empty_object_is_not_a_recipe() {
        let generator = generator(FakeAiClient::default());
        assert_eq!(generator.from_prompt("vegetarian chili").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_missing_content_is_not_a_recipe() {
        let generator = generator(FakeAiClient::default().without_content());
        assert_eq!(generator.from_prompt("anything").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_non_json_is_not_a_recipe() {
        let generator = generator(FakeAiClient::with_response("soup", "Here is a soup recipe!"));
        assert_eq!(generator.from_prompt("tomato soup").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_generated_id_is_rejected() {
        let generator = generator(FakeAiClient::with_response(
            "pancakes",
            r#"{"id": "1", "title": "Pancakes", "description": "Fluffy",
                "ingredients": ["Flour"], "directions": ["Mix", "Fry"]}"#,
        ));
        assert_eq!(generator.from_prompt("pancakes").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let generator = generator(FakeAiClient::failing("upstream unavailable"));
        let err = generator.from_prompt("vegetarian chili").await.unwrap_err();
        assert!(matches!(err, AiError::Api(_)));
    }
}
