//! Error classification shared by every cronspan error type
//!
//! Each crate defines its own `thiserror` enum for the failures it can
//! produce. What they share is the [`ErrorClassification`] trait, which lets
//! callers decide how to react to a failure without matching on concrete
//! variants:
//!
//! - **`is_retryable()`**: can the same call succeed if attempted again?
//! - **`severity()`**: how loudly should the failure be reported?
//! - **`is_critical()`**: does it point at broken internal state?
//! - **`retry_after()`**: suggested delay before a retry, if any
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//!
//! use cronspan_common::{ErrorClassification, ErrorSeverity};
//!
//! #[derive(Debug)]
//! enum LookupError {
//!     Missing,
//! }
//!
//! impl ErrorClassification for LookupError {
//!     fn is_retryable(&self) -> bool {
//!         false
//!     }
//!
//!     fn severity(&self) -> ErrorSeverity {
//!         ErrorSeverity::Info
//!     }
//!
//!     fn is_critical(&self) -> bool {
//!         false
//!     }
//!
//!     fn retry_after(&self) -> Option<Duration> {
//!         None
//!     }
//! }
//!
//! assert!(!LookupError::Missing.is_retryable());
//! ```

use std::fmt;
use std::time::Duration;

/// Standard interface for classifying errors by their characteristics
pub trait ErrorClassification {
    /// Check if this error is retryable
    ///
    /// Validation failures are never retryable: the input itself has to
    /// change before the call can succeed.
    fn is_retryable(&self) -> bool;

    /// Get the error severity level
    ///
    /// Used for logging and alerting decisions.
    fn severity(&self) -> ErrorSeverity;

    /// Check if this is a critical error requiring immediate attention
    fn is_critical(&self) -> bool;

    /// Get the suggested retry delay if applicable
    fn retry_after(&self) -> Option<Duration>;
}

/// Error severity levels for monitoring and alerting
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorSeverity {
    /// Informational, typically for debugging
    Info,
    /// Warning, caller supplied something unusable
    Warning,
    /// Error, requires attention and action
    Error,
    /// Critical, immediate action required
    Critical,
}

impl ErrorSeverity {
    /// Short uppercase label used in log lines
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARN",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
