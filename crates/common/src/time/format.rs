//! Human-readable duration formatting
//!
//! Output uses the same units [`parse_duration`](super::parse_duration)
//! accepts, so formatted values can be written back into configuration.

use std::time::Duration;

const COMPONENTS: [(u128, &str); 7] = [
    (86_400_000_000_000, "d"),
    (3_600_000_000_000, "h"),
    (60_000_000_000, "m"),
    (1_000_000_000, "s"),
    (1_000_000, "ms"),
    (1_000, "us"),
    (1, "ns"),
];

/// Format a duration into a human-readable string
///
/// Only non-zero components are rendered, largest first. A zero duration
/// renders as `"0s"`.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use cronspan_common::time::format::format_duration;
///
/// assert_eq!(format_duration(Duration::from_secs(5)), "5s");
/// assert_eq!(format_duration(Duration::from_secs(3600)), "1h");
/// assert_eq!(format_duration(Duration::from_secs(4500)), "1h 15m");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1s 500ms");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let mut remaining = duration.as_nanos();
    if remaining == 0 {
        return "0s".to_string();
    }

    let mut parts = Vec::new();
    for (unit_nanos, suffix) in COMPONENTS {
        let value = remaining / unit_nanos;
        if value > 0 {
            parts.push(format!("{value}{suffix}"));
            remaining %= unit_nanos;
        }
    }

    parts.join(" ")
}
