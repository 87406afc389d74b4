//! # cronspan Core
//!
//! Interval to cron schedule decomposition - no infrastructure dependencies.
//!
//! This crate contains:
//! - [`decompose`]: the validated entry point turning an interval and offset
//!   into a [`Schedule`]
//! - [`cascade`]: the per-field stages the decomposer runs in order
//! - [`rounding`]: the single rounding rule every stage shares
//! - [`occurrence`]: evaluating a produced schedule against wall-clock time
//!
//! ## Architecture Principles
//! - Only depends on `cronspan-common` and `cronspan-domain`
//! - No I/O; every function is pure and safe to call from any thread
//!
//! ## Usage
//!
//! ```rust
//! use std::time::Duration;
//!
//! use cronspan_core::{decompose, to_expression};
//!
//! let schedule = decompose(Duration::from_secs(15 * 60), Duration::from_secs(5 * 60)).unwrap();
//! assert_eq!(schedule.expression(), "5,20,35,50 * * * *");
//!
//! let daily = to_expression(Duration::from_secs(24 * 3600), Duration::ZERO).unwrap();
//! assert_eq!(daily, "0 0 * * *");
//! ```

pub mod cascade;
pub mod decompose;
pub mod error;
pub mod occurrence;
pub mod rounding;

// Re-export specific items to avoid ambiguity
pub use cascade::{Cascade, Stage, StageOutcome};
pub use cronspan_domain::{CronField, Schedule};
pub use decompose::{decompose, decompose_interval, to_expression};
pub use error::{Result, ScheduleError};
pub use occurrence::{matches, next_after, upcoming};
pub use rounding::round_half_away_from_zero;
