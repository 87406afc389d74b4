//! Rounding at unit boundaries
//!
//! Every cascade stage converts a duration into fractional units of its own
//! granularity and rounds with [`round_half_away_from_zero`]. Keeping the
//! rule in one place means a stage never rounds differently from another.

use std::time::Duration;

/// Round to the nearest integer, ties away from zero
///
/// `0.5` rounds to `1`, `-0.5` to `-1`, `29.5` to `30`.
///
/// # Examples
///
/// ```
/// use cronspan_core::rounding::round_half_away_from_zero;
///
/// assert_eq!(round_half_away_from_zero(0.5), 1);
/// assert_eq!(round_half_away_from_zero(0.49), 0);
/// assert_eq!(round_half_away_from_zero(-0.5), -1);
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn round_half_away_from_zero(value: f64) -> i64 {
    if value < 0.0 {
        (value - 0.5) as i64
    } else {
        (value + 0.5) as i64
    }
}

/// Length of `duration` measured in `unit`s, including the fraction
///
/// Whole units and the remainder are divided separately so nanoseconds are
/// not lost on year-long durations. `unit` must be non-zero.
#[allow(clippy::cast_precision_loss)]
pub fn units_in(duration: Duration, unit: Duration) -> f64 {
    let total = duration.as_nanos();
    let unit = unit.as_nanos();
    (total / unit) as f64 + (total % unit) as f64 / unit as f64
}

/// [`units_in`] rounded with [`round_half_away_from_zero`]
pub fn rounded_units(duration: Duration, unit: Duration) -> i64 {
    round_half_away_from_zero(units_in(duration, unit))
}

#[cfg(test)]
mod tests {
    //! Unit tests for rounding.
    use super::*;

    const MINUTE: Duration = Duration::from_secs(60);

    /// Validates `round_half_away_from_zero` at the 0.5 boundaries.
    ///
    /// Assertions:
    /// - Confirms ties round away from zero on both signs.
    /// - Confirms values just below a tie round toward zero.
    #[test]
    fn test_round_boundaries() {
        assert_eq!(round_half_away_from_zero(0.5), 1);
        assert_eq!(round_half_away_from_zero(-0.5), -1);
        assert_eq!(round_half_away_from_zero(29.5), 30);
        assert_eq!(round_half_away_from_zero(-29.5), -30);
        assert_eq!(round_half_away_from_zero(0.499_999), 0);
        assert_eq!(round_half_away_from_zero(-0.499_999), 0);
    }

    /// Validates `round_half_away_from_zero` on whole and ordinary values.
    #[test]
    fn test_round_ordinary_values() {
        assert_eq!(round_half_away_from_zero(0.0), 0);
        assert_eq!(round_half_away_from_zero(1.0), 1);
        assert_eq!(round_half_away_from_zero(1.49), 1);
        assert_eq!(round_half_away_from_zero(1.51), 2);
        assert_eq!(round_half_away_from_zero(-1.4), -1);
        assert_eq!(round_half_away_from_zero(-1.6), -2);
    }

    /// Validates `units_in` keeps fractions and nanoseconds.
    ///
    /// Assertions:
    /// - Confirms 90 seconds is 1.5 minutes.
    /// - Confirms sub-second remainders survive on year-long durations.
    #[test]
    fn test_units_in() {
        assert!((units_in(Duration::from_secs(90), MINUTE) - 1.5).abs() < f64::EPSILON);
        assert!(units_in(Duration::ZERO, MINUTE).abs() < f64::EPSILON);

        let year = Duration::from_secs(365 * 86_400);
        assert!(units_in(year + Duration::from_millis(1), MINUTE) > units_in(year, MINUTE));
    }

    /// Validates `rounded_units` at the half-minute boundary.
    #[test]
    fn test_rounded_units_half_minute() {
        assert_eq!(rounded_units(Duration::from_secs(30), MINUTE), 1);
        assert_eq!(rounded_units(Duration::from_secs(30) - Duration::from_nanos(1), MINUTE), 0);
        assert_eq!(rounded_units(Duration::from_secs(89), MINUTE), 1);
        assert_eq!(rounded_units(Duration::from_secs(90), MINUTE), 2);
    }
}
