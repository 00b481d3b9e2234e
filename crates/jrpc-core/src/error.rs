// Rust guideline compliant 2026-10-19

//! Error types for the jrpc core library.

use thiserror::Error;

/// Result type alias for jrpc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for jrpc operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Raw text is not valid JSON.
    #[error("Malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// Raw text is valid JSON but not a JSON object.
    #[error("Malformed payload: expected a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// Invalid configuration value or file.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true when the error means the raw payload could not be read
    /// as a JSON object.
    #[must_use]
    pub fn is_malformed_payload(&self) -> bool {
        matches!(self, Error::MalformedPayload(_) | Error::NotAnObject(_))
    }
}
