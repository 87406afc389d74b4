//! Schedule configuration
//!
//! A [`ScheduleConfig`] names the interval and offset a job runs at. Durations
//! are written as text (`"15m"`, `"1h 30m"`) or as a whole number of seconds.
//!
//! ```toml
//! interval = "6h"
//! offset = "2h"
//! ```

pub mod loader;

use std::time::Duration;

use cronspan_common::duration_text;
use cronspan_core::{decompose, Schedule};
use serde::{Deserialize, Serialize};

use crate::errors::Result;

// Re-export commonly used items
pub use loader::{load, load_from_env, load_from_file, load_from_vars, probe_config_paths};

/// Interval and offset of a periodic job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// How often the job runs
    #[serde(with = "duration_text")]
    pub interval: Duration,
    /// Shift from the start of each cycle, zero when omitted
    #[serde(default, with = "duration_text")]
    pub offset: Duration,
}

impl ScheduleConfig {
    /// Build a config from an interval and offset
    pub const fn new(interval: Duration, offset: Duration) -> Self {
        Self { interval, offset }
    }

    /// Decompose into a cron schedule
    ///
    /// # Errors
    /// Returns `ConfigError::Schedule` if the interval is out of range or the
    /// offset does not fit inside it.
    pub fn schedule(&self) -> Result<Schedule> {
        Ok(decompose(self.interval, self.offset)?)
    }

    /// Decompose and render the cron expression
    ///
    /// # Errors
    /// Same as [`ScheduleConfig::schedule`].
    pub fn expression(&self) -> Result<String> {
        self.schedule().map(|schedule| schedule.expression())
    }
}
