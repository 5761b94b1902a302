use crate::api::{ApiError, ValidationErrorResponse};
use crate::app::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use kitchen_core::{validate_recipe, Recipe, RecipeUpdate, ValidationError};
use serde_json::Value;
use uuid::Uuid;

/// Ids match if they are the same string or the same UUID in different spellings.
fn same_id(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    matches!(
        (Uuid::parse_str(a.trim()), Uuid::parse_str(b.trim())),
        (Ok(x), Ok(y)) if x == y
    )
}

#[utoipa::path(
    put,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID")
    ),
    request_body = RecipeUpdate,
    responses(
        (status = 200, description = "Recipe updated successfully", body = Recipe),
        (status = 400, description = "Invalid request or malformatted id", body = ValidationErrorResponse),
        (status = 404, description = "Recipe not found (empty body)")
    )
)]
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Recipe>, ApiError> {
    let Json(body) = body?;
    let update = validate_recipe(&body)?;

    if !same_id(&update.id, &id) {
        return Err(
            ValidationError::single("id", "does not match the recipe id in the path").into(),
        );
    }

    let recipe = state.recipes.update(&id, update).await?;
    tracing::info!(recipe_id = %recipe.id, "Updated recipe");

    Ok(Json(recipe))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_id() {
        let id = Uuid::new_v4();
        assert!(same_id("abc", "abc"));
        assert!(same_id(&id.to_string(), &id.to_string().to_uppercase()));
        assert!(!same_id(&id.to_string(), &Uuid::new_v4().to_string()));
        assert!(!same_id("abc", "abd"));
    }
}
