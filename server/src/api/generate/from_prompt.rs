use crate::api::{ApiError, ErrorResponse};
use crate::app::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use kitchen_core::{validate_prompt, NewRecipe};
use serde_json::Value;
use utoipa::ToSchema;

/// Documented request body. Parsed by `validate_prompt`, which also accepts `prompt`.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct GenerateFromPromptRequest {
    #[schema(rename = "promptText")]
    pub prompt_text: String,
}

#[utoipa::path(
    post,
    path = "/api/generate/from-prompt",
    tag = "generate",
    request_body = GenerateFromPromptRequest,
    responses(
        (status = 200, description = "Generated recipe, not yet saved", body = NewRecipe),
        (status = 400, description = "Invalid prompt or nothing could be generated", body = ErrorResponse)
    )
)]
pub async fn generate_from_prompt(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<NewRecipe>, ApiError> {
    let Json(body) = body?;
    let prompt = validate_prompt(&body)?;

    tracing::info!(model = %state.generator.model_name(), "Generating recipe from prompt");

    match state.generator.from_prompt(&prompt).await? {
        Some(recipe) => Ok(Json(recipe)),
        None => Err(ApiError::GenerationFailed),
    }
}
