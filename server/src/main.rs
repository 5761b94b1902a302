mod api;
mod app;
mod auth;
mod config;
mod db;
mod images;
mod models;
mod schema;
mod store;
mod telemetry;

use anyhow::Context;
use axum::extract::MatchedPath;
use axum::http::{HeaderValue, Request};
use kitchen_core::ai::{create_client, AiClient, AiConfig, AiError, FakeAiClient};
use kitchen_core::RecipeGenerator;
use std::env;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::Span;
use utoipa_swagger_ui::SwaggerUi;

use crate::app::AppState;
use crate::config::{ServerConfig, StorageBackend};
use crate::store::{InMemoryRecipeRepository, PgRecipeRepository, RecipeRepository};

async fn build_repository(config: &ServerConfig) -> anyhow::Result<Arc<dyn RecipeRepository>> {
    let repo: Arc<dyn RecipeRepository> = match &config.storage {
        StorageBackend::Postgres { database_url } => {
            let pool = db::create_pool(database_url)?;
            Arc::new(PgRecipeRepository::new(pool))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, recipes will be lost on restart");
            Arc::new(InMemoryRecipeRepository::new())
        }
    };

    if config.seed_sample_recipes {
        let seeded = store::seed_sample_recipes(repo.as_ref())
            .await
            .context("Failed to seed sample recipes")?;
        tracing::info!(count = seeded, "Seeded sample recipes");
    }

    Ok(repo)
}

fn build_ai_client() -> Arc<dyn AiClient> {
    let client = AiConfig::from_env()
        .map_err(AiError::from)
        .and_then(|config| create_client(&config));

    match client {
        Ok(client) => {
            tracing::info!(model = %client.model_name(), "AI client configured");
            client
        }
        Err(e) => {
            tracing::warn!(error = %e, "AI client not configured, falling back to fake client");
            Arc::new(FakeAiClient::default())
        }
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|origin| origin == "*") {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Check for --openapi flag to dump the API document and exit
    if env::args().any(|arg| arg == "--openapi") {
        println!("{}", api::openapi().to_pretty_json()?);
        return Ok(());
    }

    telemetry::init_telemetry();

    let config = ServerConfig::from_env().context("Invalid server configuration")?;

    let state = AppState {
        recipes: build_repository(&config).await?,
        generator: RecipeGenerator::new(build_ai_client()),
    };

    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api::openapi());

    let app = app::router(state)
        .merge(swagger_ui)
        .layer(cors_layer(&config.cors_origins))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let matched_path = request
                        .extensions()
                        .get::<MatchedPath>()
                        .map(MatchedPath::as_str)
                        .unwrap_or(request.uri().path());

                    // Health checks are polled constantly
                    if matched_path == "/health" {
                        tracing::trace_span!("http_request")
                    } else {
                        tracing::info_span!(
                            "http_request",
                            method = %request.method(),
                            path = %matched_path,
                        )
                    }
                })
                .on_request(|_request: &Request<_>, _span: &Span| {})
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        if span.metadata().map(|m| m.level()) == Some(&tracing::Level::TRACE) {
                            return;
                        }
                        let status = response.status().as_u16();
                        if status >= 500 {
                            tracing::error!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request failed with server error"
                            );
                        } else {
                            tracing::info!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request completed"
                            );
                        }
                    },
                )
                .on_failure(
                    |error: tower_http::classify::ServerErrorsFailureClass,
                     latency: std::time::Duration,
                     _span: &Span| {
                        tracing::error!(
                            error = %error,
                            latency_ms = %latency.as_millis(),
                            "request failed"
                        );
                    },
                ),
        );

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.port))?;

    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);
    tracing::info!("Swagger UI available at http://localhost:{}/swagger-ui/", addr.port());

    axum::serve(listener, app).await?;
    Ok(())
}
