//! Error types for sqlclause

use thiserror::Error;

/// Result type alias for clause operations
pub type ClauseResult<T> = Result<T, ClauseError>;

/// Contract violations surfaced by clause builders.
///
/// Absent filter values are never errors: predicate helpers silently skip them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClauseError {
    /// An argument broke the builder contract (e.g. a parameter without a name)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Positional access beyond the end of a collection
    #[error("Index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },
}

impl ClauseError {
    /// Create an invalid-argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an out-of-range error
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }

    /// Check if this is an invalid-argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Check if this is an out-of-range error
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}
