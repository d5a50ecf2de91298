//! Error types for property store operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while opening or persisting a property store.
///
/// Reads and writes against an open store never fail; only loading a
/// backing file and flushing to it can.
#[derive(Debug, Error)]
pub enum PropertyError {
    /// I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file exists but could not be parsed.
    #[error("Corrupt property store at {path}: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    /// Serialization of the store contents failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
