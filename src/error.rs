//! Error types for element computations

use thiserror::Error;

/// Main error type for element operations
#[derive(Error, Debug)]
pub enum FEAError {
    #[error("Element type mismatch: {0}")]
    TypeMismatch(String),

    #[error("Value out of range: {0}")]
    OutOfRange(String),

    #[error("Unsupported: {0}")]
    Unsupported(String),

    #[error("Not implemented: {0}")]
    Unimplemented(String),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for element operations
pub type FEAResult<T> = Result<T, FEAError>;
