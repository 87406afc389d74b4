//! Configuration errors

use std::time::Duration;

use cronspan_common::{ErrorClassification, ErrorSeverity};
use cronspan_core::ScheduleError;
use thiserror::Error;

/// Failures while locating, reading or validating schedule configuration
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Missing source, unreadable file or malformed value
    #[error("Configuration error: {0}")]
    Config(String),

    /// The configured interval and offset cannot form a schedule
    #[error("Invalid schedule: {0}")]
    Schedule(#[from] ScheduleError),
}

impl ErrorClassification for ConfigError {
    fn is_retryable(&self) -> bool {
        false
    }

    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Config(_) => ErrorSeverity::Error,
            Self::Schedule(inner) => inner.severity(),
        }
    }

    fn is_critical(&self) -> bool {
        false
    }

    fn retry_after(&self) -> Option<Duration> {
        None
    }
}

/// Result type alias for configuration loading
pub type Result<T> = std::result::Result<T, ConfigError>;
