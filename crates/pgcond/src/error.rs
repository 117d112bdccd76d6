//! Error types for pgcond

use thiserror::Error;

/// Result type alias for pgcond operations
pub type CondResult<T> = Result<T, CondError>;

/// Errors raised when caller input is parsed at the edge of the builder.
///
/// Misuse of the builder itself (predicate before `bind`) is not represented
/// here; that is a programming error and panics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CondError {
    /// Logical join token other than `AND` / `OR`
    #[error("Invalid separator: '{0}' (expected AND or OR)")]
    InvalidSeparator(String),

    /// Column name was empty or whitespace
    #[error("Column name cannot be empty")]
    EmptyColumn,

    /// Integer does not fit in a BIGINT parameter
    #[error("Integer {0} out of range for BIGINT")]
    OutOfRange(String),
}

impl CondError {
    /// Create an invalid separator error
    pub fn invalid_separator(token: impl Into<String>) -> Self {
        Self::InvalidSeparator(token.into())
    }

    /// Check if this is an invalid separator error
    pub fn is_invalid_separator(&self) -> bool {
        matches!(self, Self::InvalidSeparator(_))
    }

    /// Create an out of range error for an integer literal
    pub fn out_of_range(value: impl ToString) -> Self {
        Self::OutOfRange(value.to_string())
    }

    /// Check if this is an out of range error
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange(_))
    }
}
