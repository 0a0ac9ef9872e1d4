//! Error types for Decal.

use thiserror::Error;

/// Main error type for Decal operations.
#[derive(Error, Debug)]
pub enum DecalError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Encode error: {0}")]
    Encode(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Decal operations.
pub type Result<T> = std::result::Result<T, DecalError>;
