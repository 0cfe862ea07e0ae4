//! Error types for the typeahead index.
//!
//! Indexing and searching never fail: duplicates, empty labels and queries with
//! no overlap are ordinary outcomes. The only fallible surface is loading
//! configuration, which is described here using `thiserror`.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
