//! Server configuration from environment variables.

use std::env;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5173";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

/// Where recipes are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres { database_url: String },
    /// Process-local storage, lost on restart.
    Memory,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub storage: StorageBackend,
    pub cors_origins: Vec<String>,
    /// Insert the sample recipes at startup when the store is empty.
    pub seed_sample_recipes: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// - `PORT`: listen port (default: 3000)
    /// - `KITCHEN_STORAGE`: "postgres" or "memory" (default: "postgres")
    /// - `DATABASE_URL`: required for postgres storage
    /// - `CORS_ORIGINS`: comma-separated allowed origins (default: "http://localhost:5173")
    /// - `KITCHEN_SEED_SAMPLE_RECIPES`: "true" or "1" to seed sample recipes
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT".to_string(),
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let storage = match lookup("KITCHEN_STORAGE").as_deref().map(str::trim) {
            None | Some("postgres") => StorageBackend::Postgres {
                database_url: lookup("DATABASE_URL")
                    .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            },
            Some("memory") => StorageBackend::Memory,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    name: "KITCHEN_STORAGE".to_string(),
                    value: other.to_string(),
                })
            }
        };

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        let seed_sample_recipes = lookup("KITCHEN_SEED_SAMPLE_RECIPES")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        Ok(Self {
            port,
            storage,
            cors_origins,
            seed_sample_recipes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_postgres_requires_database_url() {
        let err = ServerConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(err, ConfigError::MissingEnvVar("DATABASE_URL".to_string()));
    }

    #[test]
    fn test_defaults() {
        let config =
            ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/kitchen")]))
                .unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(
            config.storage,
            StorageBackend::Postgres {
                database_url: "postgres://localhost/kitchen".to_string()
            }
        );
        assert_eq!(config.cors_origins, vec!["http://localhost:5173"]);
        assert!(!config.seed_sample_recipes);
    }

    #[test]
    fn test_memory_storage_and_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("KITCHEN_STORAGE", "memory"),
            ("PORT", "8080"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,"),
            ("KITCHEN_SEED_SAMPLE_RECIPES", "1"),
        ]))
        .unwrap();
        assert_eq!(config.storage, StorageBackend::Memory);
        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
        assert!(config.seed_sample_recipes);
    }

    #[test]
    fn test_invalid_values() {
        let err = ServerConfig::from_lookup(lookup_from(&[
            ("KITCHEN_STORAGE", "memory"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref name, .. } if name == "PORT"));

        let err = ServerConfig::from_lookup(lookup_from(&[("KITCHEN_STORAGE", "mongo")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref name, .. } if name == "KITCHEN_STORAGE"));
    }
}
