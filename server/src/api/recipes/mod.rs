pub mod create;
pub mod delete;
pub mod get;
pub mod image;
pub mod list;
pub mod update;

use crate::app::AppState;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Request body cap for recipe routes. `image` may carry an inline photo.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Returns the router for /api/recipes endpoints (mounted at /api/recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_recipes).post(create::create_recipe))
        .route("/public", get(list::list_public_recipes))
        .route("/mine", get(list::list_my_recipes))
        .route(
            "/{id}",
            get(get::get_recipe)
                .put(update::update_recipe)
                .delete(delete::delete_recipe),
        )
        .route("/{id}/image", post(image::upload_recipe_image))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_recipe,
        list::list_recipes,
        list::list_public_recipes,
        list::list_my_recipes,
        get::get_recipe,
        update::update_recipe,
        delete::delete_recipe,
        image::upload_recipe_image,
    ),
    components(schemas(image::UploadImageRequest))
)]
pub struct ApiDoc;
