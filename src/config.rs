//! App Configuration
//!
//! The API base path is fixed at build time through `TODO_API_BASE`.

use thiserror::Error;
use url::Url;

pub const DEFAULT_API_BASE: &str = "http://localhost:3000/todos";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid API base `{value}`: {source}")]
    InvalidApiBase {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("API base `{0}` cannot carry a path")]
    NotHierarchical(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Absolute URL, no trailing slash
    pub api_base: Url,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::with_api_base(option_env!("TODO_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    pub fn with_api_base(value: &str) -> Result<Self, ConfigError> {
        let trimmed = value.trim().trim_end_matches('/');
        let api_base = Url::parse(trimmed).map_err(|source| ConfigError::InvalidApiBase {
            value: value.to_string(),
            source,
        })?;
        if api_base.cannot_be_a_base() {
            return Err(ConfigError::NotHierarchical(value.to_string()));
        }
        Ok(Self { api_base })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_api_base(DEFAULT_API_BASE).expect("default API base should be a valid URL")
    }
}
