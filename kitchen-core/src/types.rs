//! Recipe shapes shared by the validator, the generator and the server.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored recipe as exposed to clients.
///
/// Only the normalized `id` is ever serialized; storage internals such as
/// timestamps stay in the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    /// Step sequence; order is meaningful.
    pub directions: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
}

/// Recipe payload accepted on creation. Identity and owner are assigned
/// server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewRecipe {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub directions: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_public: bool,
}

/// Full-replacement payload for an existing recipe.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct RecipeUpdate {
    pub id: String,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub directions: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_public: bool,
}

impl NewRecipe {
    pub fn into_recipe(self, id: String) -> Recipe {
        Recipe {
            id,
            title: self.title,
            description: self.description,
            ingredients: self.ingredients,
            directions: self.directions,
            image: self.image,
            is_public: self.is_public,
            owner_id: None,
        }
    }
}

impl Recipe {
    /// Replace every mutable field. `id` and `owner_id` are left untouched.
    pub fn apply(&mut self, update: RecipeUpdate) {
        self.title = update.title;
        self.description = update.description;
        self.ingredients = update.ingredients;
        self.directions = update.directions;
        self.image = update.image;
        self.is_public = update.is_public;
    }
}
