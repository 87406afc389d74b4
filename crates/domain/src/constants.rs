//! Calendar constants
//!
//! Unit sizes used when mapping a duration onto cron fields. `DAYS_PER_MONTH`
//! is cron's largest day-of-month value rather than a calendar fact, and a
//! year is always 365 days; both are accepted approximations.

use std::time::Duration;

/// Minutes in an hour
pub const MINUTES_PER_HOUR: u32 = 60;
/// Hours in a day
pub const HOURS_PER_DAY: u32 = 24;
/// Days in a week
pub const DAYS_PER_WEEK: u32 = 7;
/// Days in a month, as cron counts them
pub const DAYS_PER_MONTH: u32 = 31; // max day value allowed in a cron expression
/// Months in a year
pub const MONTHS_PER_YEAR: u32 = 12;
/// Days in a year, leap days ignored
pub const DAYS_PER_YEAR: u32 = 365;

// Unit durations
/// One minute
pub const MINUTE: Duration = Duration::from_secs(60);
/// One hour
pub const HOUR: Duration = Duration::from_secs(60 * MINUTES_PER_HOUR as u64);
/// One day
pub const DAY: Duration = Duration::from_secs(60 * 60 * HOURS_PER_DAY as u64);
/// One week
pub const WEEK: Duration = Duration::from_secs(60 * 60 * 24 * DAYS_PER_WEEK as u64);
/// One 31-day month
pub const MONTH: Duration = Duration::from_secs(60 * 60 * 24 * DAYS_PER_MONTH as u64);

/// Longest interval a five-field expression is asked to represent
pub const MAX_INTERVAL: Duration = Duration::from_secs(60 * 60 * 24 * DAYS_PER_YEAR as u64);

/// Token rendered for an unconstrained field
pub const WILDCARD: &str = "*";
