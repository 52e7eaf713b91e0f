//! Run configuration loaded from JSON.
//!
//! ```
//! use lodestar_harness::config::RunConfig;
//!
//! let config = RunConfig::from_json_str(r#"{"policy": {"max_expansions": 500}}"#).unwrap();
//! assert_eq!(config.policy.max_expansions, Some(500));
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use lodestar_search::policy::SearchPolicy;

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Configuration for one harness run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Engine policy applied to every search in the run.
    pub policy: SearchPolicy,
}

impl RunConfig {
    #[must_use]
    pub fn new(policy: SearchPolicy) -> Self {
        Self { policy }
    }

    /// Loads configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns error if the file can't be read, isn't valid JSON, or holds
    /// an invalid policy.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_json_file(path)
    }

    /// Loads configuration from a JSON file, falling back to defaults when
    /// the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Same as [`RunConfig::load`], except a missing file is not an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match Self::from_json_file(path) {
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Loads configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// See [`RunConfig::load`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Parses and validates configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] on malformed input or unknown fields and
    /// [`ConfigError::Invalid`] if the policy fails validation.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the embedded policy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] with the policy error message.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.policy
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}
