use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use kitchen_core::{NewRecipe, Recipe, RecipeUpdate};
use uuid::Uuid;

use super::{parse_id, RecipeRepository, RepoError};
use crate::db::DbPool;
use crate::models::{NewRecipeRow, RecipeChangeset, RecipeRow};
use crate::schema::recipes;

impl From<diesel::result::Error> for RepoError {
    fn from(e: diesel::result::Error) -> Self {
        RepoError::Storage(e.to_string())
    }
}

/// Recipes stored in PostgreSQL. Ids come from the column default
/// `gen_random_uuid()`.
#[derive(Clone)]
pub struct PgRecipeRepository {
    pool: DbPool,
}

impl PgRecipeRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Run a diesel query on the blocking pool so it never stalls the runtime.
    async fn run<T, F>(&self, query: F) -> Result<T, RepoError>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> Result<T, RepoError> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool
                .get()
                .map_err(|e| RepoError::Storage(format!("Database connection failed: {}", e)))?;
            query(&mut conn)
        })
        .await
        .map_err(|e| RepoError::Storage(format!("Database task failed: {}", e)))?
    }
}

#[async_trait]
impl RecipeRepository for PgRecipeRepository {
    async fn get_all(&self) -> Result<Vec<Recipe>, RepoError> {
        self.run(|conn| {
            let rows = recipes::table
                .order(recipes::created_at.asc())
                .select(RecipeRow::as_select())
                .load(conn)?;
            Ok(rows.into_iter().map(Recipe::from).collect())
        })
        .await
    }

    async fn get_public(&self) -> Result<Vec<Recipe>, RepoError> {
        self.run(|conn| {
            let rows = recipes::table
                .filter(recipes::is_public.eq(true))
                .order(recipes::created_at.asc())
                .select(RecipeRow::as_select())
                .load(conn)?;
            Ok(rows.into_iter().map(Recipe::from).collect())
        })
        .await
    }

    async fn get_by_owner(&self, owner_id: Uuid) -> Result<Vec<Recipe>, RepoError> {
        self.run(move |conn| {
            let rows = recipes::table
                .filter(recipes::owner_id.eq(owner_id))
                .order(recipes::created_at.asc())
                .select(RecipeRow::as_select())
                .load(conn)?;
            Ok(rows.into_iter().map(Recipe::from).collect())
        })
        .await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Recipe>, RepoError> {
        let key = parse_id(id)?;
        self.run(move |conn| {
            let row = recipes::table
                .find(key)
                .select(RecipeRow::as_select())
                .first(conn)
                .optional()?;
            Ok(row.map(Recipe::from))
        })
        .await
    }

    async fn add(&self, recipe: NewRecipe, owner_id: Option<Uuid>) -> Result<Recipe, RepoError> {
        self.run(move |conn| {
            let row = diesel::insert_into(recipes::table)
                .values(NewRecipeRow::new(&recipe, owner_id))
                .returning(RecipeRow::as_returning())
                .get_result(conn)?;
            Ok(Recipe::from(row))
        })
        .await
    }

    async fn update(&self, id: &str, update: RecipeUpdate) -> Result<Recipe, RepoError> {
        let key = parse_id(id)?;
        let id = id.to_string();
        self.run(move |conn| {
            let row = diesel::update(recipes::table.find(key))
                .set(RecipeChangeset::new(&update, Utc::now()))
                .returning(RecipeRow::as_returning())
                .get_result(conn)
                .optional()?;
            row.map(Recipe::from).ok_or(RepoError::NotFound(id))
        })
        .await
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), RepoError> {
        let key = parse_id(id)?;
        self.run(move |conn| {
            let deleted = diesel::delete(recipes::table.find(key)).execute(conn)?;
            tracing::debug!(recipe_id = %key, deleted, "Deleted recipe");
            Ok(())
        })
        .await
    }
}
