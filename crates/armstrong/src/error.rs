//! Error types for the Armstrong library.

use std::path::PathBuf;
use thiserror::Error;

use crate::schema::AttributeSet;

/// Main error type for Armstrong operations.
#[derive(Debug, Error)]
pub enum ArmstrongError {
    /// A dependency has an empty left-hand side or references attributes
    /// outside the relation's universe.
    #[error("Malformed dependency #{index} ({dependency}): {reason}")]
    MalformedDependency {
        index: usize,
        dependency: String,
        reason: String,
    },

    /// An attribute set passed for projection or decomposition is not a
    /// subset of the relation's universe.
    #[error("Invalid subset {subset}: attributes {outside} are not in the universe")]
    InvalidSubset {
        subset: AttributeSet,
        outside: AttributeSet,
    },

    /// The universe is too wide for subset enumeration.
    #[error("Universe has {size} attributes, the limit is {max}")]
    UniverseTooLarge { size: usize, max: usize },

    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for Armstrong operations.
pub type Result<T> = std::result::Result<T, ArmstrongError>;
