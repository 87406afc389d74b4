//! Duration parsing from strings
//!
//! Parses duration strings into `std::time::Duration` with nanosecond
//! precision. Integer components are exact; fractional components are
//! rounded to the nearest nanosecond.

use std::time::Duration;

use thiserror::Error;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Error type for duration parsing
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DurationParseError {
    #[error("Invalid duration format: {0}")]
    InvalidFormat(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Duration overflows the supported range")]
    Overflow,

    #[error("Empty duration string")]
    EmptyString,
}

/// Parse a duration string into a Duration
///
/// Supports the following units, combinable with optional whitespace:
/// - `ns`, `us` (or `µs`), `ms`
/// - `s`, `m`, `h`
/// - `d` (24 hours), `w` (7 days)
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use cronspan_common::time::duration::parse_duration;
///
/// assert_eq!(parse_duration("15m").unwrap(), Duration::from_secs(900));
/// assert_eq!(parse_duration("1h30m").unwrap(), Duration::from_secs(5400));
/// assert_eq!(parse_duration("1h 30m").unwrap(), Duration::from_secs(5400));
/// assert_eq!(parse_duration("1.5s").unwrap(), Duration::from_millis(1500));
/// assert_eq!(parse_duration("1s 1ns").unwrap(), Duration::new(1, 1));
/// ```
pub fn parse_duration(s: &str) -> Result<Duration, DurationParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(DurationParseError::EmptyString);
    }

    let mut total_nanos: u128 = 0;
    let mut current_number = String::new();
    let mut chars = s.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch.is_ascii_digit() || ch == '.' {
            current_number.push(ch);
            continue;
        }
        if ch.is_whitespace() {
            continue;
        }

        // Units may span several letters ("ms", "ns", "µs")
        let mut unit = String::from(ch);
        while let Some(&next) = chars.peek() {
            if !next.is_alphabetic() {
                break;
            }
            unit.push(next);
            chars.next();
        }

        if current_number.is_empty() {
            return Err(DurationParseError::InvalidFormat(format!(
                "Expected number before unit '{unit}'"
            )));
        }

        let unit_nanos =
            unit_nanos(&unit).ok_or_else(|| DurationParseError::UnknownUnit(unit.clone()))?;
        let component = component_nanos(&current_number, unit_nanos)?;
        total_nanos = total_nanos.checked_add(component).ok_or(DurationParseError::Overflow)?;
        current_number.clear();
    }

    if !current_number.is_empty() {
        return Err(DurationParseError::InvalidFormat(format!(
            "Missing unit after number '{current_number}'"
        )));
    }

    let secs = u64::try_from(total_nanos / NANOS_PER_SEC)
        .map_err(|_| DurationParseError::Overflow)?;
    let subsec_nanos = u32::try_from(total_nanos % NANOS_PER_SEC)
        .map_err(|_| DurationParseError::Overflow)?;

    Ok(Duration::new(secs, subsec_nanos))
}

fn unit_nanos(unit: &str) -> Option<u128> {
    let nanos = match unit {
        "ns" => 1,
        "us" | "µs" => 1_000,
        "ms" => 1_000_000,
        "s" => NANOS_PER_SEC,
        "m" => 60 * NANOS_PER_SEC,
        "h" => 3_600 * NANOS_PER_SEC,
        "d" => 86_400 * NANOS_PER_SEC,
        "w" => 604_800 * NANOS_PER_SEC,
        _ => return None,
    };
    Some(nanos)
}

fn component_nanos(number: &str, unit_nanos: u128) -> Result<u128, DurationParseError> {
    if !number.contains('.') {
        let whole: u128 =
            number.parse().map_err(|_| DurationParseError::InvalidNumber(number.to_string()))?;
        return whole.checked_mul(unit_nanos).ok_or(DurationParseError::Overflow);
    }

    let value: f64 =
        number.parse().map_err(|_| DurationParseError::InvalidNumber(number.to_string()))?;
    let nanos = (value * unit_nanos as f64).round();

    if !nanos.is_finite() || nanos >= u64::MAX as f64 {
        return Err(DurationParseError::Overflow);
    }

    Ok(nanos as u128)
}
