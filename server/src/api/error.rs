//! Translation of handler failures into HTTP responses.
//!
//! Every handler returns `Result<_, ApiError>`; this is the only place that
//! decides status codes and error bodies.

use axum::{
    extract::{multipart::MultipartError, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use kitchen_core::ai::AiError;
use kitchen_core::validate::BODY_PATH;
use kitchen_core::{Issue, ValidationError};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::store::RepoError;

pub const MALFORMATTED_ID_MESSAGE: &str = "Malformatted id";
pub const GENERATION_FAILED_MESSAGE: &str = "Could not generate recipe from this prompt";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
pub const PAYLOAD_TOO_LARGE_MESSAGE: &str = "Request body too large";

/// Error body with a single message.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error body listing every field problem in a payload.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub error: Vec<Issue>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("malformatted id: {0}")]
    MalformattedId(String),

    #[error("recipe not found: {0}")]
    NotFound(String),

    #[error("could not generate recipe from prompt")]
    GenerationFailed,

    #[error("{0}")]
    BadRequest(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("request body too large")]
    PayloadTooLarge,

    #[error("storage error: {0}")]
    Storage(String),

    #[error("AI error: {0}")]
    Ai(#[from] AiError),
}

impl From<RepoError> for ApiError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound(id) => ApiError::NotFound(id),
            RepoError::MalformattedId(id) => ApiError::MalformattedId(id),
            RepoError::Storage(message) => ApiError::Storage(message),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return ApiError::PayloadTooLarge;
        }
        ApiError::Validation(ValidationError::single(BODY_PATH, rejection.body_text()))
    }
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return ApiError::PayloadTooLarge;
        }
        ApiError::BadRequest(format!("Failed to read multipart data: {}", e.body_text()))
    }
}

fn message(status: StatusCode, error: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(e) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorResponse { error: e.issues }),
            )
                .into_response(),
            ApiError::MalformattedId(_) => {
                message(StatusCode::BAD_REQUEST, MALFORMATTED_ID_MESSAGE)
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
            ApiError::GenerationFailed => message(StatusCode::BAD_REQUEST, GENERATION_FAILED_MESSAGE),
            ApiError::BadRequest(error) => message(StatusCode::BAD_REQUEST, &error),
            ApiError::Unauthorized(error) => message(StatusCode::UNAUTHORIZED, &error),
            ApiError::PayloadTooLarge => {
                message(StatusCode::PAYLOAD_TOO_LARGE, PAYLOAD_TOO_LARGE_MESSAGE)
            }
            ApiError::Storage(_) | ApiError::Ai(_) => {
                tracing::error!(error = %self, "Request failed");
                message(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_lists_issues() {
        let response =
            ApiError::from(ValidationError::single("title", "is required")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": [{"path": "title", "message": "is required"}]})
        );
    }

    #[tokio::test]
    async fn test_not_found_has_empty_body() {
        let response = ApiError::from(RepoError::NotFound("x".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_malformatted_id() {
        let response = ApiError::from(RepoError::MalformattedId("42".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], MALFORMATTED_ID_MESSAGE);
    }

    #[tokio::test]
    async fn test_payload_too_large() {
        let response = ApiError::PayloadTooLarge.into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body_json(response).await["error"], PAYLOAD_TOO_LARGE_MESSAGE);
    }

    #[tokio::test]
    async fn test_unauthorized() {
        let response = ApiError::Unauthorized("Authentication required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["error"], "Authentication required");
    }

    #[tokio::test]
    async fn test_internal_details_are_hidden() {
        let response =
            ApiError::from(RepoError::Storage("password authentication failed".to_string()))
                .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], INTERNAL_ERROR_MESSAGE);

        let response = ApiError::from(AiError::Api("timeout".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
