//! Interval to schedule decomposition
//!
//! Validates the inputs, then runs the [`Stage`]s in order until one of them
//! finishes the schedule.

use std::time::Duration;

use cronspan_common::format_duration;
use cronspan_domain::constants::{MAX_INTERVAL, MINUTE};
use cronspan_domain::Schedule;
use tracing::{debug, instrument};

use crate::cascade::{Cascade, Stage, StageOutcome};
use crate::error::{Result, ScheduleError};
use crate::rounding::rounded_units;

/// Return the schedule that represents `interval`, shifted by `offset`, as
/// closely as a five-field cron expression allows
///
/// # Errors
/// - [`ScheduleError::OutOfRange`] if the interval rounds to under one
///   minute or is longer than 365 days
/// - [`ScheduleError::InvalidOffset`] if the offset rounds to a whole number
///   of minutes at or beyond the interval's
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use cronspan_core::decompose;
///
/// let hour = Duration::from_secs(3600);
/// let schedule = decompose(24 * hour, hour).unwrap();
/// assert_eq!(schedule.expression(), "0 1 * * *");
/// ```
#[instrument(
    level = "debug",
    skip_all,
    fields(interval = %format_duration(interval), offset = %format_duration(offset))
)]
pub fn decompose(interval: Duration, offset: Duration) -> Result<Schedule> {
    validate(interval, offset)?;

    let mut cascade = Cascade::new(interval, offset);
    for stage in Stage::ORDER {
        match stage.run(cascade) {
            StageOutcome::Done(schedule) => {
                debug!(%stage, expression = %schedule, "decomposition finished");
                return Ok(schedule);
            }
            StageOutcome::Continue(next) => {
                debug!(
                    %stage,
                    partial = %next.schedule(),
                    residual = %format_duration(next.offset()),
                    "stage pinned its field"
                );
                cascade = next;
            }
        }
    }

    // The month stage always finishes; reaching here means a stage was added
    // after it without finishing.
    Ok(cascade.into_schedule())
}

/// [`decompose`] without an offset
///
/// # Errors
/// Same as [`decompose`].
pub fn decompose_interval(interval: Duration) -> Result<Schedule> {
    decompose(interval, Duration::ZERO)
}

/// Decompose and render the cron expression in one call
///
/// # Errors
/// Same as [`decompose`].
pub fn to_expression(interval: Duration, offset: Duration) -> Result<String> {
    decompose(interval, offset).map(|schedule| schedule.expression())
}

fn validate(interval: Duration, offset: Duration) -> Result<()> {
    let interval_minutes = rounded_units(interval, MINUTE);

    if interval_minutes < 1 || interval > MAX_INTERVAL {
        debug!(interval_minutes, "interval out of range");
        return Err(ScheduleError::OutOfRange);
    }

    let offset_minutes = rounded_units(offset, MINUTE);
    if offset_minutes >= interval_minutes {
        debug!(interval_minutes, offset_minutes, "offset does not fit inside interval");
        return Err(ScheduleError::InvalidOffset);
    }

    Ok(())
}
