//! AI configuration from environment variables.

use std::env;
use std::str::FromStr;
use thiserror::Error;

/// Default OpenAI base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model to use.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Unknown AI provider: {0}")]
    UnknownProvider(String),
}

/// Which completion backend to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    OpenAi,
    Fake,
}

impl FromStr for Provider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(Provider::OpenAi),
            "fake" => Ok(Provider::Fake),
            other => Err(ConfigError::UnknownProvider(other.to_string())),
        }
    }
}

/// AI client configuration.
#[derive(Debug, Clone)]
pub struct AiConfig {
    pub provider: Provider,
    /// API key; required for `Provider::OpenAi`.
    pub api_key: Option<String>,
    /// Model name (e.g., "gpt-4o-mini").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
}

impl AiConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `KITCHEN_AI_PROVIDER`: "openai" or "fake" (default: "openai")
    /// - `OPENAI_API_KEY`: API key, required when the provider is "openai"
    /// - `KITCHEN_AI_MODEL`: Model name (default: "gpt-4o-mini")
    /// - `KITCHEN_AI_BASE_URL`: API base URL (default: "https://api.openai.com/v1")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let provider = match lookup("KITCHEN_AI_PROVIDER") {
            Some(value) => value.parse()?,
            None => Provider::OpenAi,
        };

        let api_key = lookup("OPENAI_API_KEY").filter(|key| !key.is_empty());
        if provider == Provider::OpenAi && api_key.is_none() {
            return Err(ConfigError::MissingEnvVar("OPENAI_API_KEY".to_string()));
        }

        let model = lookup("KITCHEN_AI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url =
            lookup("KITCHEN_AI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            provider,
            api_key,
            model,
            base_url,
        })
    }
}
