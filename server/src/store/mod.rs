//! Recipe persistence.
//!
//! Handlers only see the `RecipeRepository` trait, so the same routes run
//! against PostgreSQL in production and the in-memory store in tests.

mod memory;
mod postgres;
mod seed;

pub use memory::InMemoryRecipeRepository;
pub use postgres::PgRecipeRepository;
pub use seed::seed_sample_recipes;

use async_trait::async_trait;
use kitchen_core::{NewRecipe, Recipe, RecipeUpdate};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("recipe not found: {0}")]
    NotFound(String),

    #[error("malformatted recipe id: {0}")]
    MalformattedId(String),

    #[error("storage error: {0}")]
    Storage(String),
}

/// CRUD access to persisted recipes.
///
/// Callers validate payloads before calling any mutating method.
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// All recipes, oldest first.
    async fn get_all(&self) -> Result<Vec<Recipe>, RepoError>;

    /// Recipes with `is_public` set, oldest first.
    async fn get_public(&self) -> Result<Vec<Recipe>, RepoError>;

    /// Recipes created by `owner_id`, oldest first.
    async fn get_by_owner(&self, owner_id: Uuid) -> Result<Vec<Recipe>, RepoError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Recipe>, RepoError>;

    /// Persist a new recipe under a freshly generated id.
    async fn add(&self, recipe: NewRecipe, owner_id: Option<Uuid>) -> Result<Recipe, RepoError>;

    /// Replace the mutable fields of an existing recipe.
    /// Fails with `RepoError::NotFound` if nothing is stored under `id`.
    async fn update(&self, id: &str, recipe: RecipeUpdate) -> Result<Recipe, RepoError>;

    /// Remove a recipe. Removing a missing recipe is not an error.
    async fn delete_by_id(&self, id: &str) -> Result<(), RepoError>;
}

/// Parse a client-supplied id into a storage key.
pub fn parse_id(id: &str) -> Result<Uuid, RepoError> {
    Uuid::parse_str(id.trim()).map_err(|_| RepoError::MalformattedId(id.to_string()))
}
