//! Caller identity.
//!
//! Authentication happens in front of this service. The auth gateway
//! forwards the authenticated user's id in `X-User-Id`; requests without
//! it are anonymous.

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::request::Parts;
use uuid::Uuid;

use crate::api::ApiError;

pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated caller. Rejects anonymous requests with 401.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser(pub Uuid);

fn user_from_parts(parts: &Parts) -> Result<Option<CurrentUser>, ApiError> {
    let Some(value) = parts.headers.get(USER_ID_HEADER) else {
        return Ok(None);
    };

    value
        .to_str()
        .ok()
        .and_then(|raw| Uuid::parse_str(raw.trim()).ok())
        .map(|id| Some(CurrentUser(id)))
        .ok_or_else(|| ApiError::Unauthorized("Invalid user identity".to_string()))
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        user_from_parts(parts)?
            .ok_or_else(|| ApiError::Unauthorized("Authentication required".to_string()))
    }
}

impl<S> OptionalFromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        user_from_parts(parts)
    }
}
