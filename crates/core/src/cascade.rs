//! Stage pipeline for interval decomposition
//!
//! Decomposition walks from the finest cron field to the coarsest. Each
//! [`Stage`] looks at the interval in its own unit and either finishes the
//! schedule or pins its field and hands the rest of the offset on:
//!
//! | Stage | Unit | Finishes with |
//! |-------|------|---------------|
//! | minute | 1 minute | wildcard, or a minute step sequence |
//! | hour | 1 hour | wildcard, or an hour step sequence |
//! | day | 1 day | wildcard, a weekday sequence or value, or a day-of-month sequence |
//! | month | 31 days | wildcard, or a month step sequence |
//!
//! An interval of exactly one unit leaves that field wildcarded. A step
//! sequence always finishes the cascade, so coarser fields stay wildcards.
//!
//! Offsets shorter than the parent unit are pinned in the finer field and
//! subtracted, so no offset minute is represented twice. An offset that
//! reaches a whole parent unit is carried to the coarser stage instead and
//! the finer field is pinned to its lowest value.

use std::fmt;
use std::time::Duration;

use cronspan_domain::constants::{DAY, DAYS_PER_MONTH, DAYS_PER_WEEK, HOUR, MINUTE, MONTH};
use cronspan_domain::{CronField, Schedule};
use tracing::debug;

use crate::rounding::{rounded_units, units_in};

/// Result of running one stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutcome {
    /// The schedule is complete; later stages do not run
    Done(Schedule),
    /// The stage pinned its field; the next stage continues from here
    Continue(Cascade),
}

/// State handed from one stage to the next
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cascade {
    interval: Duration,
    offset: Duration,
    schedule: Schedule,
}

impl Cascade {
    /// Start a cascade with an all-wildcard schedule
    pub fn new(interval: Duration, offset: Duration) -> Self {
        Self { interval, offset, schedule: Schedule::default() }
    }

    /// Interval being decomposed
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Portion of the offset not yet represented by a pinned field
    pub const fn offset(&self) -> Duration {
        self.offset
    }

    /// Schedule built so far
    pub const fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Take the schedule built so far
    pub fn into_schedule(self) -> Schedule {
        self.schedule
    }

    fn finish(self, field: CronField, values: Vec<u32>) -> StageOutcome {
        StageOutcome::Done(self.schedule.with_field(field, values))
    }

    /// Pin `field` to the offset measured in `unit`, or carry the offset on
    fn pin(self, field: CronField, unit: Duration) -> Self {
        let position = rounded_units(self.offset, unit);

        match u32::try_from(position) {
            Ok(steps) if steps < field.cycle() => Self {
                interval: self.interval,
                offset: self.offset.saturating_sub(unit * steps),
                schedule: self.schedule.with_field(field, vec![field.min() + steps]),
            },
            _ => Self {
                interval: self.interval,
                offset: self.offset,
                schedule: self.schedule.with_field(field, vec![field.min()]),
            },
        }
    }
}

/// The cascade stages, finest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Pins or steps the minute field
    Minute,
    /// Pins or steps the hour field
    Hour,
    /// Chooses between day-of-week and day-of-month
    Day,
    /// Steps the month field; always finishes
    Month,
}

impl Stage {
    /// Order the decomposer runs stages in
    pub const ORDER: [Self; 4] = [Self::Minute, Self::Hour, Self::Day, Self::Month];

    /// Lowercase name used in log fields
    pub const fn name(self) -> &'static str {
        match self {
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Month => "month",
        }
    }

    /// Run this stage on the cascade
    pub fn run(self, cascade: Cascade) -> StageOutcome {
        match self {
            Self::Minute => minute_stage(cascade),
            Self::Hour => hour_stage(cascade),
            Self::Day => day_stage(cascade),
            Self::Month => month_stage(cascade),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Minute stage: unit of one minute, parent unit of one hour
pub fn minute_stage(cascade: Cascade) -> StageOutcome {
    sub_unit_stage(cascade, CronField::Minute, MINUTE)
}

/// Hour stage: unit of one hour, parent unit of one day
pub fn hour_stage(cascade: Cascade) -> StageOutcome {
    sub_unit_stage(cascade, CronField::Hour, HOUR)
}

/// Minute and hour stages share one shape: wildcard on exactly one unit, a
/// step sequence below one parent unit, otherwise pin and continue.
fn sub_unit_stage(cascade: Cascade, field: CronField, unit: Duration) -> StageOutcome {
    let units = units_in(cascade.interval, unit);
    let step = rounded_units(cascade.interval, unit);
    debug!(stage = %field, units, step, "evaluating interval");

    if step == 1 {
        return StageOutcome::Done(cascade.into_schedule());
    }

    if units < f64::from(field.cycle()) {
        let position = rounded_units(cascade.offset, unit);
        return cascade.finish(field, step_sequence(field, step, position));
    }

    StageOutcome::Continue(cascade.pin(field, unit))
}

/// Day stage: weekday cycle below a week, day-of-month below a month
pub fn day_stage(cascade: Cascade) -> StageOutcome {
    let days = units_in(cascade.interval, DAY);
    let step = rounded_units(cascade.interval, DAY);
    let position = rounded_units(cascade.offset, DAY);
    debug!(stage = "day", days, step, position, "evaluating interval");

    if step == 1 {
        return StageOutcome::Done(cascade.into_schedule());
    }

    // Sub-week periods read better as a weekday cycle than as days of month
    if days < f64::from(DAYS_PER_WEEK) {
        return cascade.finish(CronField::DayOfWeek, step_sequence(CronField::DayOfWeek, step, position));
    }

    if step == i64::from(DAYS_PER_WEEK) {
        return cascade.finish(CronField::DayOfWeek, vec![pinned(CronField::DayOfWeek, position)]);
    }

    if days < f64::from(DAYS_PER_MONTH) {
        return cascade
            .finish(CronField::DayOfMonth, step_sequence(CronField::DayOfMonth, step, position));
    }

    StageOutcome::Continue(cascade.pin(CronField::DayOfMonth, DAY))
}

/// Always finishes: months are the coarsest unit the cascade reaches.
pub fn month_stage(cascade: Cascade) -> StageOutcome {
    let step = rounded_units(cascade.interval, MONTH);
    let position = rounded_units(cascade.offset, MONTH);
    debug!(stage = "month", step, position, "evaluating interval");

    if step == 1 {
        return StageOutcome::Done(cascade.into_schedule());
    }

    cascade.finish(CronField::Month, step_sequence(CronField::Month, step, position))
}

/// Values of `field` starting `position` units into its cycle, every `step`
/// units, up to the end of one cycle
///
/// `position` wraps modulo the cycle; 1-indexed fields start at 1, so
/// position 0 of a day-of-month sequence is day 1.
///
/// # Examples
///
/// ```
/// use cronspan_core::cascade::step_sequence;
/// use cronspan_core::CronField;
///
/// assert_eq!(step_sequence(CronField::Minute, 15, 5), vec![5, 20, 35, 50]);
/// assert_eq!(step_sequence(CronField::Month, 4, 0), vec![1, 5, 9]);
/// ```
pub fn step_sequence(field: CronField, step: i64, position: i64) -> Vec<u32> {
    let step = usize::try_from(step.max(1)).unwrap_or(usize::MAX);
    let start = wrap(field, position);

    (start..field.cycle()).step_by(step).map(|steps| field.min() + steps).collect()
}

/// Single value of `field` at `position` units into its cycle
pub fn pinned(field: CronField, position: i64) -> u32 {
    field.min() + wrap(field, position)
}

fn wrap(field: CronField, position: i64) -> u32 {
    let cycle = i64::from(field.cycle());
    u32::try_from(position.rem_euclid(cycle)).unwrap_or_default()
}
