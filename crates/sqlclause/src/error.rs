//! Error types for sqlclause

use thiserror::Error;

/// Result type alias for sqlclause operations
pub type ClauseResult<T> = Result<T, ClauseError>;

/// Errors reported while assembling or rendering clauses.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClauseError {
    /// Comparison operator token not understood by the condition parser
    #[error("Invalid operator: {0}")]
    InvalidOperator(String),

    /// Condition input has a shape that cannot become an expression
    #[error("Invalid condition: {0}")]
    InvalidCondition(String),

    /// Order-by input could not be interpreted
    #[error("Invalid order by: {0}")]
    InvalidOrderBy(String),

    /// INSERT rows are missing or malformed
    #[error("Invalid insert values: {0}")]
    InvalidInsertValues(String),

    /// UPDATE has nothing to SET
    #[error("Invalid update values: {0}")]
    InvalidUpdateValues(String),

    /// LIKE was given a non-string value
    #[error("LIKE on column '{column}' requires a string value, got {found}")]
    LikeValueNotString { column: String, found: &'static str },
}

impl ClauseError {
    /// Create an invalid operator error
    pub fn invalid_operator(op: impl Into<String>) -> Self {
        Self::InvalidOperator(op.into())
    }

    /// Create an invalid condition error
    pub fn invalid_condition(message: impl Into<String>) -> Self {
        Self::InvalidCondition(message.into())
    }

    /// Create an invalid insert values error
    pub fn invalid_insert_values(message: impl Into<String>) -> Self {
        Self::InvalidInsertValues(message.into())
    }

    /// Check if this error is reported through the builder while rendering
    /// (as opposed to while assembling the tree).
    pub fn is_render_error(&self) -> bool {
        matches!(
            self,
            Self::LikeValueNotString { .. }
                | Self::InvalidInsertValues(_)
                | Self::InvalidUpdateValues(_)
        )
    }

    /// Check if this is an invalid operator error
    pub fn is_invalid_operator(&self) -> bool {
        matches!(self, Self::InvalidOperator(_))
    }
}
