//! Error types

use thiserror::Error;

/// Errors raised while building or loading a [`DbConfig`](crate::DbConfig)
#[derive(Debug, Error)]
pub enum Error {
    /// A field holds a value outside its allowed domain
    #[error("invalid {field}: {reason}")]
    InvalidField {
        /// Field name as it appears in the serialized form
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// A required value was never supplied
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A required environment variable is unset
    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),

    /// Malformed connection string or plugin name
    #[error("config error: {0}")]
    Config(String),

    /// Config file could not be read
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not a valid config document
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
