use chrono::{DateTime, Utc};
use diesel::prelude::*;
use kitchen_core::{NewRecipe, Recipe, RecipeUpdate};
use uuid::Uuid;

/// Columns exposed to clients. Timestamps are only used for ordering.
#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RecipeRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub directions: Vec<String>,
    pub image: Option<String>,
    pub is_public: bool,
    pub owner_id: Option<Uuid>,
}

impl From<RecipeRow> for Recipe {
    fn from(row: RecipeRow) -> Self {
        Recipe {
            id: row.id.to_string(),
            title: row.title,
            description: row.description,
            ingredients: row.ingredients,
            directions: row.directions,
            image: row.image,
            is_public: row.is_public,
            owner_id: row.owner_id.map(|id| id.to_string()),
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipes)]
pub struct NewRecipeRow<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub ingredients: &'a [String],
    pub directions: &'a [String],
    pub image: Option<&'a str>,
    pub is_public: bool,
    pub owner_id: Option<Uuid>,
}

impl<'a> NewRecipeRow<'a> {
    pub fn new(recipe: &'a NewRecipe, owner_id: Option<Uuid>) -> Self {
        NewRecipeRow {
            title: &recipe.title,
            description: &recipe.description,
            ingredients: &recipe.ingredients,
            directions: &recipe.directions,
            image: recipe.image.as_deref(),
            is_public: recipe.is_public,
            owner_id,
        }
    }
}

/// Full replacement of the mutable columns. A missing image clears the column.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(treat_none_as_null = true)]
pub struct RecipeChangeset<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub ingredients: &'a [String],
    pub directions: &'a [String],
    pub image: Option<&'a str>,
    pub is_public: bool,
    pub updated_at: DateTime<Utc>,
}

impl<'a> RecipeChangeset<'a> {
    pub fn new(update: &'a RecipeUpdate, updated_at: DateTime<Utc>) -> Self {
        RecipeChangeset {
            title: &update.title,
            description: &update.description,
            ingredients: &update.ingredients,
            directions: &update.directions,
            image: update.image.as_deref(),
            is_public: update.is_public,
            updated_at,
        }
    }
}
