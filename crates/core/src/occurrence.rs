//! Evaluating schedules against wall-clock time
//!
//! Times are UTC. Fields combine with AND; the decomposer never constrains
//! day-of-month and day-of-week together, so cron's OR rule for that pair
//! never comes into play.

use chrono::{DateTime, Datelike, Days, NaiveDate, Timelike, Utc};
use cronspan_domain::constants::{HOURS_PER_DAY, MINUTES_PER_HOUR};
use cronspan_domain::{CronField, Schedule};

/// How far ahead [`next_after`] searches (covers leap-day-only schedules)
const SEARCH_HORIZON_DAYS: u64 = 4 * 366;

fn field_matches(schedule: &Schedule, field: CronField, value: u32) -> bool {
    let values = schedule.field(field);
    values.is_empty() || values.contains(&value)
}

fn date_matches(schedule: &Schedule, date: NaiveDate) -> bool {
    field_matches(schedule, CronField::DayOfMonth, date.day())
        && field_matches(schedule, CronField::Month, date.month())
        && field_matches(schedule, CronField::DayOfWeek, date.weekday().num_days_from_sunday())
}

/// Check if a datetime falls on a minute the schedule fires
pub fn matches(schedule: &Schedule, dt: &DateTime<Utc>) -> bool {
    field_matches(schedule, CronField::Minute, dt.minute())
        && field_matches(schedule, CronField::Hour, dt.hour())
        && date_matches(schedule, dt.date_naive())
}

/// Get the first firing strictly after the given datetime
///
/// Walks matching days, then hours, then minutes instead of testing every
/// minute. Returns `None` if nothing fires within four years.
pub fn next_after(schedule: &Schedule, after: &DateTime<Utc>) -> Option<DateTime<Utc>> {
    let start = after.date_naive();

    for day in 0..=SEARCH_HORIZON_DAYS {
        let date = start.checked_add_days(Days::new(day))?;
        if !date_matches(schedule, date) {
            continue;
        }

        for hour in (0..HOURS_PER_DAY).filter(|h| field_matches(schedule, CronField::Hour, *h)) {
            for minute in
                (0..MINUTES_PER_HOUR).filter(|m| field_matches(schedule, CronField::Minute, *m))
            {
                let candidate = date.and_hms_opt(hour, minute, 0)?.and_utc();
                if candidate > *after {
                    return Some(candidate);
                }
            }
        }
    }

    None
}

/// Compute up to `n` consecutive firings after the given datetime
pub fn upcoming(schedule: &Schedule, after: &DateTime<Utc>, n: usize) -> Vec<DateTime<Utc>> {
    let mut results = Vec::with_capacity(n);
    let mut cursor = *after;

    while results.len() < n {
        match next_after(schedule, &cursor) {
            Some(next) => {
                results.push(next);
                cursor = next;
            }
            None => break,
        }
    }

    results
}
