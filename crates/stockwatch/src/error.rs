//! Error types for the stockwatch library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for stockwatch operations.
///
/// Malformed cell values are never an error: the normalizer substitutes
/// safe defaults (see [`crate::normalize`]). These variants cover the input
/// boundary only — reading files, decoding payloads, fetching sheets, and
/// rejecting invalid dataset configuration.
#[derive(Debug, Error)]
pub enum StockwatchError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Upstream fetch failure, passed through without classification.
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// Payload did not contain a recognizable sheet table.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// Empty file or payload with nothing to process.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Invalid dataset configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for stockwatch operations.
pub type Result<T> = std::result::Result<T, StockwatchError>;
