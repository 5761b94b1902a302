use crate::api::{ApiError, ErrorResponse};
use crate::app::AppState;
use crate::images::{compress_recipe_image, jpeg_data_url};
use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use kitchen_core::{Recipe, RecipeUpdate};
use utoipa::ToSchema;

/// Multipart form field carrying the image.
pub const IMAGE_FIELD: &str = "image";

#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadImageRequest {
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
}

#[utoipa::path(
    post,
    path = "/api/recipes/{id}/image",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID")
    ),
    request_body(content_type = "multipart/form-data", content = UploadImageRequest),
    responses(
        (status = 200, description = "Image stored on the recipe as an inline JPEG", body = Recipe),
        (status = 400, description = "Not an image, or malformatted id", body = ErrorResponse),
        (status = 404, description = "Recipe not found (empty body)"),
        (status = 413, description = "Image too large", body = ErrorResponse)
    )
)]
pub async fn upload_recipe_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<Recipe>, ApiError> {
    let data = loop {
        let Some(field) = multipart.next_field().await? else {
            return Err(ApiError::BadRequest("No image provided".to_string()));
        };
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let is_image = field
            .content_type()
            .is_some_and(|content_type| content_type.starts_with("image/"));
        if !is_image {
            return Err(ApiError::BadRequest("File must be an image".to_string()));
        }
        break field.bytes().await?;
    };

    let existing = state
        .recipes
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(id.clone()))?;

    let jpeg = tokio::task::spawn_blocking(move || compress_recipe_image(&data))
        .await
        .map_err(|e| ApiError::Storage(format!("Image task failed: {}", e)))?
        .map_err(ApiError::BadRequest)?;

    let update = RecipeUpdate {
        id: existing.id,
        title: existing.title,
        description: existing.description,
        ingredients: existing.ingredients,
        directions: existing.directions,
        image: Some(jpeg_data_url(&jpeg)),
        is_public: existing.is_public,
    };

    let recipe = state.recipes.update(&id, update).await?;
    tracing::info!(recipe_id = %recipe.id, bytes = jpeg.len(), "Stored recipe image");

    Ok(Json(recipe))
}
