use crate::api::{ApiError, ErrorResponse, ValidationErrorResponse};
use crate::app::AppState;
use crate::auth::CurrentUser;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use kitchen_core::{validate_new_recipe, NewRecipe, Recipe};
use serde_json::Value;

#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = "recipes",
    request_body = NewRecipe,
    responses(
        (status = 201, description = "Recipe created successfully", body = Recipe),
        (status = 400, description = "Invalid request", body = ValidationErrorResponse),
        (status = 413, description = "Request body too large", body = ErrorResponse)
    )
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    user: Option<CurrentUser>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Recipe>), ApiError> {
    let Json(body) = body?;
    let new_recipe = validate_new_recipe(&body)?;

    let owner_id = user.map(|CurrentUser(id)| id);
    let recipe = state.recipes.add(new_recipe, owner_id).await?;
    tracing::info!(recipe_id = %recipe.id, "Created recipe");

    Ok((StatusCode::CREATED, Json(recipe)))
}
