//! Error type shared by the transforms and the drivers.

use thiserror::Error;

/// Errors returned by the Burrows-Wheeler and Move-To-Front front end.
#[derive(Debug, Error)]
pub enum BwtError {
    /// An argument was outside the range the operation accepts.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A serialized stream ended before its header or payload was complete.
    #[error("Truncated input: {0}")]
    Truncated(&'static str),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for front end operations.
pub type Result<T> = std::result::Result<T, BwtError>;
