pub mod error;
pub mod generate;
pub mod health;
pub mod recipes;

pub use error::{ApiError, ErrorResponse, ValidationErrorResponse};

use kitchen_core::{Issue, NewRecipe, Recipe, RecipeUpdate};
use utoipa::OpenApi;

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    // Base spec with shared components
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Kitchen API", description = "API for sharing and generating recipes"),
        components(schemas(
            ErrorResponse,
            ValidationErrorResponse,
            Issue,
            Recipe,
            NewRecipe,
            RecipeUpdate
        ))
    )]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    let modules: Vec<utoipa::openapi::OpenApi> = vec![
        health::ApiDoc::openapi(),
        recipes::ApiDoc::openapi(),
        generate::ApiDoc::openapi(),
    ];

    for module_spec in modules {
        spec.paths.paths.extend(module_spec.paths.paths);

        if let Some(module_components) = module_spec.components {
            if let Some(spec_components) = spec.components.as_mut() {
                spec_components.schemas.extend(module_components.schemas);
            }
        }
    }

    spec
}
