//! Error types for the crop advisor service.

use thiserror::Error;

/// Main error type for the crop advisor service.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Classifier artifact missing or incompatible (fatal at startup)
    #[error("Artifact error: {0}")]
    Artifact(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Inference contract violation (should not occur in correct usage)
    #[error("Inference error: {0}")]
    Inference(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Specialized Result type for crop advisor operations.
pub type Result<T> = std::result::Result<T, Error>;
