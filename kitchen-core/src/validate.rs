//! Shape validation for incoming recipe payloads.
//!
//! Every check is pure and synchronous. All problems in a payload are
//! collected so a client can fix them in one round trip.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use utoipa::ToSchema;

use crate::types::{NewRecipe, RecipeUpdate};

pub const TITLE_MAX_CHARS: usize = 200;
pub const DESCRIPTION_MAX_CHARS: usize = 2000;

/// Path used for problems with the body as a whole.
pub const BODY_PATH: &str = "body";

/// Stored text columns cannot hold NUL bytes.
const NUL_MESSAGE: &str = "must not contain NUL characters";

/// A single problem with one field of a payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Issue {
    /// Field path, e.g. `title` or `ingredients[2]`.
    pub path: String,
    pub message: String,
}

impl Issue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid payload: {}", describe(.issues))]
pub struct ValidationError {
    pub issues: Vec<Issue>,
}

impl ValidationError {
    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            issues: vec![Issue::new(path, message)],
        }
    }

    /// Whether any issue refers to `path`.
    pub fn has_issue_for(&self, path: &str) -> bool {
        self.issues.iter().any(|issue| issue.path == path)
    }
}

fn describe(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{}: {}", issue.path, issue.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validate a creation payload. `id` and `owner_id` must not be supplied.
pub fn validate_new_recipe(value: &Value) -> Result<NewRecipe, ValidationError> {
    let mut fields = Fields::new(value)?;

    fields.forbid("id");
    fields.forbid("owner_id");
    let recipe = NewRecipe {
        title: fields.required_text("title", TITLE_MAX_CHARS),
        description: fields.required_text("description", DESCRIPTION_MAX_CHARS),
        ingredients: fields.text_list("ingredients"),
        directions: fields.text_list("directions"),
        image: fields.image(),
        is_public: fields.flag("is_public"),
    };

    fields.finish(recipe)
}

/// Validate a full-recipe payload as sent to the update route.
pub fn validate_recipe(value: &Value) -> Result<RecipeUpdate, ValidationError> {
    let mut fields = Fields::new(value)?;

    let recipe = RecipeUpdate {
        id: fields.required_id("id"),
        title: fields.required_text("title", TITLE_MAX_CHARS),
        description: fields.required_text("description", DESCRIPTION_MAX_CHARS),
        ingredients: fields.text_list("ingredients"),
        directions: fields.text_list("directions"),
        image: fields.image(),
        is_public: fields.flag("is_public"),
    };

    fields.finish(recipe)
}

/// Validate a generation request body and return the prompt text.
///
/// Accepts `promptText`, or `prompt` as sent by older clients.
pub fn validate_prompt(value: &Value) -> Result<String, ValidationError> {
    let object = as_object(value)?;

    let prompt = match object.get("promptText").or_else(|| object.get("prompt")) {
        None => return Err(ValidationError::single("promptText", "is required")),
        Some(Value::String(text)) => text,
        Some(_) => return Err(ValidationError::single("promptText", "must be a string")),
    };

    if prompt.trim().is_empty() {
        return Err(ValidationError::single("promptText", "must not be empty"));
    }

    Ok(prompt.clone())
}

fn as_object(value: &Value) -> Result<&Map<String, Value>, ValidationError> {
    value
        .as_object()
        .ok_or_else(|| ValidationError::single(BODY_PATH, "expected a JSON object"))
}

/// Field reader that records issues instead of stopping at the first one.
struct Fields<'a> {
    object: &'a Map<String, Value>,
    issues: Vec<Issue>,
}

impl<'a> Fields<'a> {
    fn new(value: &'a Value) -> Result<Self, ValidationError> {
        Ok(Self {
            object: as_object(value)?,
            issues: Vec::new(),
        })
    }

    fn issue(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.issues.push(Issue::new(path, message));
    }

    fn forbid(&mut self, field: &str) {
        if self.object.contains_key(field) {
            self.issue(field, "is assigned by the server and must not be supplied");
        }
    }

    fn required_id(&mut self, field: &str) -> String {
        match self.object.get(field) {
            None | Some(Value::Null) => {
                self.issue(field, "is required");
                String::new()
            }
            Some(Value::String(id)) if id.trim().is_empty() => {
                self.issue(field, "must not be empty");
                String::new()
            }
            Some(Value::String(id)) => id.clone(),
            Some(_) => {
                self.issue(field, "must be a string");
                String::new()
            }
        }
    }

    fn required_text(&mut self, field: &str, max_chars: usize) -> String {
        let text = match self.object.get(field) {
            None | Some(Value::Null) => {
                self.issue(field, "is required");
                return String::new();
            }
            Some(Value::String(text)) => text,
            Some(_) => {
                self.issue(field, "must be a string");
                return String::new();
            }
        };

        if text.trim().is_empty() {
            self.issue(field, "must not be empty");
        } else if text.contains('\0') {
            self.issue(field, NUL_MESSAGE);
        } else if text.chars().count() > max_chars {
            self.issue(field, format!("must be at most {} characters", max_chars));
        }

        text.clone()
    }

    fn text_list(&mut self, field: &str) -> Vec<String> {
        let items = match self.object.get(field) {
            None | Some(Value::Null) => {
                self.issue(field, "is required");
                return Vec::new();
            }
            Some(Value::Array(items)) => items,
            Some(_) => {
                self.issue(field, "must be an array of strings");
                return Vec::new();
            }
        };

        let mut entries = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match item {
                Value::String(entry) if entry.contains('\0') => {
                    self.issue(format!("{}[{}]", field, index), NUL_MESSAGE)
                }
                Value::String(entry) => entries.push(entry.clone()),
                _ => self.issue(format!("{}[{}]", field, index), "must be a string"),
            }
        }
        entries
    }

    /// `image` wins over its `image_url` alias when both are present.
    fn image(&mut self) -> Option<String> {
        let (field, value) = match (self.object.get("image"), self.object.get("image_url")) {
            (Some(value), _) => ("image", value),
            (None, Some(value)) => ("image_url", value),
            (None, None) => return None,
        };

        match value {
            Value::Null => None,
            Value::String(image) if image.contains('\0') => {
                self.issue(field, NUL_MESSAGE);
                None
            }
            Value::String(image) => Some(image.clone()),
            _ => {
                self.issue(field, "must be a string or null");
                None
            }
        }
    }

    fn flag(&mut self, field: &str) -> bool {
        match self.object.get(field) {
            None | Some(Value::Null) => false,
            Some(Value::Bool(flag)) => *flag,
            Some(_) => {
                self.issue(field, "must be a boolean");
                false
            }
        }
    }

    fn finish<T>(self, value: T) -> Result<T, ValidationError> {
        if self.issues.is_empty() {
            Ok(value)
        } else {
            Err(ValidationError {
                issues: self.issues,
            })
        }
    }
}
