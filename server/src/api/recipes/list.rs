use crate::api::{ApiError, ErrorResponse};
use crate::app::AppState;
use crate::auth::CurrentUser;
use axum::{extract::State, Json};
use kitchen_core::Recipe;

#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "recipes",
    responses(
        (status = 200, description = "All recipes, oldest first", body = Vec<Recipe>)
    )
)]
pub async fn list_recipes(State(state): State<AppState>) -> Result<Json<Vec<Recipe>>, ApiError> {
    Ok(Json(state.recipes.get_all().await?))
}

#[utoipa::path(
    get,
    path = "/api/recipes/public",
    tag = "recipes",
    responses(
        (status = 200, description = "Public recipes, oldest first", body = Vec<Recipe>)
    )
)]
pub async fn list_public_recipes(
    State(state): State<AppState>,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    Ok(Json(state.recipes.get_public().await?))
}

#[utoipa::path(
    get,
    path = "/api/recipes/mine",
    tag = "recipes",
    params(
        ("X-User-Id" = String, Header, description = "Authenticated user id, set by the auth gateway")
    ),
    responses(
        (status = 200, description = "Recipes owned by the caller, oldest first", body = Vec<Recipe>),
        (status = 401, description = "No authenticated user", body = ErrorResponse)
    )
)]
pub async fn list_my_recipes(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    Ok(Json(state.recipes.get_by_owner(user_id).await?))
}
