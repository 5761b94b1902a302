pub mod ai;
pub mod generate;
pub mod types;
pub mod validate;

pub use generate::RecipeGenerator;
pub use types::{NewRecipe, Recipe, RecipeUpdate};
pub use validate::{
    validate_new_recipe, validate_prompt, validate_recipe, Issue, ValidationError,
    DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS,
};
