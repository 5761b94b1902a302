use crate::api::ApiError;
use crate::app::AppState;
use crate::store::RepoError;
use axum::{
    extract::{Path, State},
    Json,
};
use kitchen_core::Recipe;

#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe details", body = Recipe),
        (status = 404, description = "Recipe not found (empty body)")
    )
)]
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Recipe>, ApiError> {
    match state.recipes.find_by_id(&id).await {
        Ok(Some(recipe)) => Ok(Json(recipe)),
        // An id that cannot address the store cannot name a stored recipe either
        Ok(None) | Err(RepoError::MalformattedId(_)) => Err(ApiError::NotFound(id)),
        Err(e) => Err(e.into()),
    }
}
