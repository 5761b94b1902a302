use crate::api::ApiError;
use crate::app::AppState;
use crate::store::RepoError;
use axum::{
    extract::{Path, State},
    http::StatusCode,
};

#[utoipa::path(
    delete,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID")
    ),
    responses(
        (status = 204, description = "Recipe deleted, or there was nothing to delete")
    )
)]
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    match state.recipes.delete_by_id(&id).await {
        // Nothing can be stored under a malformatted id, so it is already gone
        Ok(()) | Err(RepoError::MalformattedId(_)) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(e.into()),
    }
}
