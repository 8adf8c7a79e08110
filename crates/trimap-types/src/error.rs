//! Error types for trimap.
//!
//! All crates return `TrimapResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for trimap.
#[derive(Debug, Error)]
pub enum TrimapError {
    /// Cell or point arrays are malformed (vertex count != 3, ragged shapes,
    /// out-of-range indices). No partial mesh is produced.
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// An array's length does not match the triangulation it is paired with.
    #[error("Shape mismatch: {what} has length {actual}, expected {expected}")]
    ShapeMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },

    /// An operation was invoked on a triangulation in the wrong state.
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A grid or field data source failed to supply data.
    #[error("Data source error: {0}")]
    Source(String),
}

impl TrimapError {
    /// Shorthand for a [`TrimapError::ShapeMismatch`].
    pub fn shape_mismatch(what: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            what: what.into(),
            expected,
            actual,
        }
    }
}

/// Convenience alias for `Result<T, TrimapError>`.
pub type TrimapResult<T> = Result<T, TrimapError>;
