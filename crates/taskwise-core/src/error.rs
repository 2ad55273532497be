//! Error types for taskwise.

use thiserror::Error;

/// Result type alias using taskwise's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for taskwise operations.
///
/// Assistance operations surface only `InvalidInput` to callers; the
/// remote-side variants are caught at the engine boundary and converted
/// into heuristic fallback results.
#[derive(Error, Debug)]
pub enum Error {
    /// Embedding generation failed
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// Inference/generation failed
    #[error("Inference error: {0}")]
    Inference(String),

    /// Model output contained no usable structured payload
    #[error("Malformed model output: {0}")]
    MalformedOutput(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid caller input (fails the request, never degraded)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP/network request failed
    #[error("Request error: {0}")]
    Request(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Whether this error class may be absorbed by a heuristic fallback.
    ///
    /// `InvalidInput` is the one class that must propagate to the caller.
    pub fn is_degradable(&self) -> bool {
        !matches!(self, Error::InvalidInput(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}
