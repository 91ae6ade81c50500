//! Preference store errors.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a preference store cannot be read or written.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read or written
    #[error("failed to access preference store {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The backing file exists but is not a JSON object of strings
    #[error("preference store {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The store contents could not be encoded
    #[error("failed to encode preferences: {0}")]
    Serialize(#[source] serde_json::Error),
}
