//! Duration text utilities
//!
//! - **[`duration`]**: parse human-written durations (`"1h 30m"`, `"500ms"`)
//! - **[`format`]**: render durations back into the same notation
//!
//! ## Usage
//!
//! ```rust
//! use std::time::Duration;
//!
//! use cronspan_common::time::{format_duration, parse_duration};
//!
//! let duration = parse_duration("1h 15m").unwrap();
//! assert_eq!(duration, Duration::from_secs(4500));
//! assert_eq!(format_duration(duration), "1h 15m");
//! ```

pub mod duration;
pub mod format;

// Re-export commonly used items
pub use duration::{parse_duration, DurationParseError};
pub use format::format_duration;
