//! Prompt for generating a complete recipe from a short free-text request.

/// Prompt name used in logs.
pub const GENERATE_RECIPE_PROMPT_NAME: &str = "generate_recipe";

/// Render the system prompt. The user's request is sent as its own message.
pub fn render_generate_recipe_system_prompt() -> String {
    r#"Generate a recipe based on the prompt provided. The recipe should have a title, a brief description, a list of ingredients required, and a list of directions to follow.

IMPORTANT RULES:
- Return ONLY a valid JSON object matching the schema below. No other text.
- Each ingredient is a single string including its quantity.
- Each direction is a single step, in the order it should be performed.

JSON Schema:
{
  "title": "string",
  "description": "string",
  "ingredients": ["string"],
  "directions": ["string"]
}"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_system_prompt() {
        let prompt = render_generate_recipe_system_prompt();
        assert!(prompt.contains("Generate a recipe"));
        assert!(prompt.contains("JSON Schema"));
        assert!(prompt.contains("\"directions\": [\"string\"]"));
    }
}
