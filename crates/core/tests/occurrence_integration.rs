//! Integration tests tying decomposition to wall-clock firings

use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use cronspan_core::{decompose, decompose_interval, matches, next_after, upcoming};

const MINUTE: Duration = Duration::from_secs(60);
const HOUR: Duration = Duration::from_secs(3_600);
const DAY: Duration = Duration::from_secs(86_400);

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}

/// Intervals that divide their parent unit evenly fire at exactly that spacing.
#[test]
fn test_even_intervals_fire_at_their_spacing() {
    let start = at(2024, 3, 9, 22, 17);
    let intervals = [
        MINUTE,
        5 * MINUTE,
        15 * MINUTE,
        30 * MINUTE,
        HOUR,
        2 * HOUR,
        6 * HOUR,
        12 * HOUR,
        24 * HOUR,
        7 * DAY,
    ];

    for interval in intervals {
        let schedule = decompose_interval(interval).expect("valid interval");
        let firings = upcoming(&schedule, &start, 10);
        assert_eq!(firings.len(), 10, "{schedule}");

        let expected = chrono::Duration::from_std(interval).unwrap();
        for pair in firings.windows(2) {
            assert_eq!(pair[1] - pair[0], expected, "{schedule} between {} and {}", pair[0], pair[1]);
        }
    }
}

/// Offsets shift the first firing after midnight.
#[test]
fn test_offsets_shift_firings() {
    let midnight = at(2024, 1, 1, 0, 0);

    let six_hourly = decompose(6 * HOUR, 2 * HOUR).unwrap();
    assert_eq!(next_after(&six_hourly, &midnight), Some(at(2024, 1, 1, 2, 0)));

    let quarter = decompose(15 * MINUTE, 5 * MINUTE).unwrap();
    assert_eq!(next_after(&quarter, &midnight), Some(at(2024, 1, 1, 0, 5)));

    let daily = decompose(24 * HOUR, HOUR + 15 * MINUTE).unwrap();
    assert_eq!(next_after(&daily, &midnight), Some(at(2024, 1, 1, 1, 0)));
}

/// Every firing reported by `upcoming` matches the schedule.
#[test]
fn test_upcoming_firings_match() {
    let schedule = decompose(3 * DAY, DAY).unwrap();
    let firings = upcoming(&schedule, &at(2024, 6, 1, 0, 0), 6);

    assert_eq!(firings.len(), 6);
    assert!(firings.iter().all(|firing| matches(&schedule, firing)));
}

/// Multi-month intervals land on the first of the selected months.
#[test]
fn test_month_steps() {
    let schedule = decompose_interval(4 * 31 * DAY).unwrap();
    let firings = upcoming(&schedule, &at(2024, 1, 1, 0, 0), 3);

    assert_eq!(firings, vec![at(2024, 5, 1, 0, 0), at(2024, 9, 1, 0, 0), at(2025, 1, 1, 0, 0)]);
}
