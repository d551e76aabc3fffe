//! Structured error types for the methdiff toolkit.

use thiserror::Error;

/// Unified error type for all methdiff operations.
#[derive(Debug, Error)]
pub enum MethdiffError {
    /// I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error (malformed input data)
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid input (bad arguments, out-of-range values)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Request for a mode a routine does not implement
    #[error("unsupported mode: {0}")]
    Unsupported(String),

    /// Computation outside the numerically reliable range
    #[error("numeric error: {0}")]
    Numeric(String),
}

/// Convenience alias used throughout the methdiff crates.
pub type Result<T> = std::result::Result<T, MethdiffError>;
