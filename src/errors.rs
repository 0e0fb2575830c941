//! Error types for score validation and configuration loading.
//!
//! Score math and the widget state machine are total: every path that
//! produces a score routes through clamping, so nothing in those modules
//! returns an error. Errors only appear at the boundaries:
//!
//! - `ScoreError`: a stored/submitted value that is not a valid score
//! - `ConfigError`: a `.starscore.toml` that cannot be read or is invalid
//!
//! # Example
//!
//! ```rust
//! use starscore::errors::ScoreError;
//! use starscore::ReviewScore;
//!
//! let err = ReviewScore::new(401).unwrap_err();
//! assert_eq!(err, ScoreError::OutOfRange { value: 401 });
//! assert_eq!(err.to_string(), "The review score must be between 0 and 400.");
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Validation failure for a score crossing the storage boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Value is an integer but outside [0, 400].
    #[error("The review score must be between 0 and 400.")]
    OutOfRange { value: i64 },

    /// Value could not be read as an integer at all.
    #[error("'{input}' is not a valid review score")]
    NotANumber { input: String },
}

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("Refusing to overwrite existing config at {0} (use --force)")]
    AlreadyExists(PathBuf),
}

impl ConfigError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
