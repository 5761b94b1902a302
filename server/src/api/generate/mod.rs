pub mod from_prompt;

use crate::app::AppState;
use axum::routing::post;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/generate endpoints (mounted at /api/generate)
pub fn router() -> Router<AppState> {
    Router::new().route("/from-prompt", post(from_prompt::generate_from_prompt))
}

#[derive(OpenApi)]
#[openapi(
    paths(from_prompt::generate_from_prompt),
    components(schemas(from_prompt::GenerateFromPromptRequest))
)]
pub struct ApiDoc;
