//! Decomposition errors

use std::time::Duration;

use cronspan_common::{ErrorClassification, ErrorSeverity};
use thiserror::Error;

/// Validation failures reported before any field is computed
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScheduleError {
    /// The interval rounds to under one minute or exceeds one year
    #[error("Duration out of range: interval must round to between 1 minute and 365 days")]
    OutOfRange,

    /// The offset rounds to the interval or beyond it
    #[error("Invalid offset: offset is equivalent to or exceeds the interval")]
    InvalidOffset,
}

impl ErrorClassification for ScheduleError {
    fn is_retryable(&self) -> bool {
        false
    }

    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Warning
    }

    fn is_critical(&self) -> bool {
        false
    }

    fn retry_after(&self) -> Option<Duration> {
        None
    }
}

/// Result type alias for decomposition
pub type Result<T> = std::result::Result<T, ScheduleError>;
