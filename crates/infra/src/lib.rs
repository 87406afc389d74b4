//! # cronspan Infrastructure
//!
//! The impure edge of cronspan: reading schedule configuration from the
//! environment and from JSON or TOML files.
//!
//! ## Architecture
//! - Depends on `cronspan-core` for validation and decomposition
//! - Contains all file system and environment access

pub mod config;
pub mod errors;

// Re-export commonly used items
pub use config::{
    load, load_from_env, load_from_file, load_from_vars, probe_config_paths, ScheduleConfig,
};
pub use errors::{ConfigError, Result};
