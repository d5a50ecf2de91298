//! Error types for Playbill.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Playbill operations.
#[derive(Debug, Error)]
pub enum PlaybillError {
    /// Descriptor-related errors.
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    /// Property store errors.
    #[error(transparent)]
    Property(#[from] playbill_properties::PropertyError),

    /// IO errors.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors.
    #[error("{0}")]
    Other(String),
}

impl PlaybillError {
    /// Create a new "other" error with a message.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }
}

/// Errors raised while locating or parsing an application descriptor.
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// No descriptor file was found.
    #[error("No application descriptor found under {0}")]
    NotFound(PathBuf),

    /// The descriptor file extension maps to no supported format.
    #[error("Unsupported descriptor format: {0}")]
    UnsupportedFormat(String),

    /// TOML parsing error.
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO error reading the descriptor.
    #[error("IO error reading descriptor: {0}")]
    Io(#[from] std::io::Error),
}
