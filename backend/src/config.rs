//! Configuration loading
//!
//! Every config struct in this crate derives `Deserialize` with
//! `#[serde(default)]`, so a JSON document only needs the fields it overrides.

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors raised while loading or checking configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Parse a JSON document into a config type, filling gaps from `Default`
pub fn from_json_str<T: DeserializeOwned>(json: &str) -> Result<T, ConfigError> {
    Ok(serde_json::from_str(json)?)
}
