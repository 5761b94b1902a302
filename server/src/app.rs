use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use kitchen_core::RecipeGenerator;

use crate::api;
use crate::store::RecipeRepository;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub recipes: Arc<dyn RecipeRepository>,
    pub generator: RecipeGenerator,
}

/// All API routes, without transport layers (tracing, CORS, docs).
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health::health))
        .nest("/api/recipes", api::recipes::router())
        .nest("/api/generate", api::generate::router())
        .with_state(state)
}
