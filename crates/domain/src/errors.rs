//! Error types for cron expression parsing

use thiserror::Error;

/// Error returned when text is not a valid restricted five-field expression
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("Too few fields: expected 5, got {0}")]
    TooFewFields(usize),

    #[error("Too many fields: expected 5, got {0}")]
    TooManyFields(usize),

    #[error("Invalid field: {0}")]
    InvalidField(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),
}

/// Result type alias for expression parsing
pub type Result<T> = std::result::Result<T, ExpressionError>;
