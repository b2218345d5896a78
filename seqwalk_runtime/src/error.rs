//! Error types for the seqwalk runtime.

use std::path::PathBuf;

use seqwalk::EquivalenceError;
use thiserror::Error;

/// Runtime error types.
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Reading a file or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A config or fixture file was not valid JSON for its schema
    #[error("JSON parse error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The run configuration failed validation
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A traversal contract did not hold, including two runs that disagreed
    #[error(transparent)]
    Equivalence(#[from] EquivalenceError),
}

/// Result type alias for runtime operations.
pub type Result<T> = std::result::Result<T, RuntimeError>;
