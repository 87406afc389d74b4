//! # cronspan Domain
//!
//! Cron schedule types shared by the decomposer and its callers.
//!
//! This crate contains:
//! - The [`Schedule`] value and its five [`CronField`]s
//! - Formatting into, and parsing from, five-field cron expressions
//! - Calendar unit constants
//!
//! ## Architecture
//! - No dependencies on other cronspan crates
//! - Only external dependencies allowed
//! - Pure data structures, no I/O

pub mod constants;
pub mod errors;
pub mod schedule;

// Re-export commonly used items
pub use errors::*;
pub use schedule::{CronField, Schedule};
