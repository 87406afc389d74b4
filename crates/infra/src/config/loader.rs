//! Configuration loader
//!
//! Loads a [`ScheduleConfig`] from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If that fails, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! Every loaded configuration is validated by decomposing it once, so a
//! config that loads is one that produces a schedule.
//!
//! ## Environment Variables
//! - `CRONSPAN_INTERVAL`: Interval as duration text or whole seconds
//! - `CRONSPAN_OFFSET`: Offset as duration text or whole seconds (optional)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./cronspan.toml`, `./cronspan.json`, `./config.toml`, `./config.json`
//! 2. The same names in the parent and grandparent directories
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};
use std::time::Duration;

use cronspan_common::parse_duration;
use tracing::{debug, info};

use super::ScheduleConfig;
use crate::errors::{ConfigError, Result};

/// Environment variable holding the interval
pub const INTERVAL_VAR: &str = "CRONSPAN_INTERVAL";
/// Environment variable holding the offset
pub const OFFSET_VAR: &str = "CRONSPAN_OFFSET";

const CONFIG_FILE_NAMES: [&str; 4] = ["cronspan.toml", "cronspan.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If that fails, falls
/// back to loading from a config file.
///
/// # Errors
/// Returns the file error if neither source yields a valid configuration.
pub fn load() -> Result<ScheduleConfig> {
    match load_from_env() {
        Ok(config) => {
            info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            debug!(error = %e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from the process environment
///
/// # Errors
/// See [`load_from_vars`].
pub fn load_from_env() -> Result<ScheduleConfig> {
    load_from_vars(|key| std::env::var(key).ok())
}

/// Load configuration through an injected variable lookup
///
/// `CRONSPAN_INTERVAL` is required; `CRONSPAN_OFFSET` defaults to zero.
///
/// # Errors
/// - `ConfigError::Config` if the interval is missing or a value is not a
///   duration
/// - `ConfigError::Schedule` if the values cannot form a schedule
pub fn load_from_vars<F>(lookup: F) -> Result<ScheduleConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let interval = lookup(INTERVAL_VAR).ok_or_else(|| {
        ConfigError::Config(format!("Missing required environment variable: {INTERVAL_VAR}"))
    })?;
    let interval = parse_value(INTERVAL_VAR, &interval)?;

    let offset = match lookup(OFFSET_VAR) {
        Some(text) => parse_value(OFFSET_VAR, &text)?,
        None => Duration::ZERO,
    };

    validated(ScheduleConfig::new(interval, offset))
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `ConfigError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
///
/// Returns `ConfigError::Schedule` if the values cannot form a schedule.
pub fn load_from_file(path: Option<PathBuf>) -> Result<ScheduleConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ConfigError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ConfigError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ConfigError::Config(format!("Failed to read config file: {e}")))?;

    validated(parse_config(&contents, &config_path)?)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`); a path without
/// an extension is read as JSON.
fn parse_config(contents: &str, path: &Path) -> Result<ScheduleConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ConfigError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ConfigError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(ConfigError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the working directory, its parent and grandparent, then the same
/// three levels from the executable's directory.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.extend([exe_dir.to_path_buf(), exe_dir.join(".."), exe_dir.join("../..")]);
        }
    }

    candidates(roots).find(|path| path.exists())
}

/// Every config file name under each root, roots in order
fn candidates(roots: Vec<PathBuf>) -> impl Iterator<Item = PathBuf> {
    roots
        .into_iter()
        .flat_map(|root| CONFIG_FILE_NAMES.into_iter().map(move |name| root.join(name)))
}

/// Duration text, or a bare integer read as whole seconds
fn parse_value(key: &str, text: &str) -> Result<Duration> {
    let text = text.trim();

    if let Ok(secs) = text.parse::<u64>() {
        return Ok(Duration::from_secs(secs));
    }

    parse_duration(text).map_err(|e| ConfigError::Config(format!("Invalid {key}: {e}")))
}

fn validated(config: ScheduleConfig) -> Result<ScheduleConfig> {
    let expression = config.expression()?;
    debug!(%expression, "Configuration validated");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;
    use std::sync::Mutex;

    use cronspan_core::ScheduleError;
    use tempfile::{Builder, TempDir};

    use super::*;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const MINUTE: Duration = Duration::from_secs(60);

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |key| map.get(key).cloned()
    }

    fn write_config(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    /// Validates `load_from_vars` with both variables set.
    ///
    /// Assertions:
    /// - Ensures duration text is parsed.
    /// - Ensures bare integers are read as seconds.
    #[test]
    fn test_load_from_vars_all_set() {
        let config = load_from_vars(vars(&[(INTERVAL_VAR, "6h"), (OFFSET_VAR, "7200")])).unwrap();
        assert_eq!(config, ScheduleConfig::new(6 * 60 * MINUTE, 120 * MINUTE));
        assert_eq!(config.expression().unwrap(), "0 2,8,14,20 * * *");
    }

    #[test]
    fn test_load_from_vars_offset_defaults_to_zero() {
        let config = load_from_vars(vars(&[(INTERVAL_VAR, " 15m ")])).unwrap();
        assert_eq!(config.offset, Duration::ZERO);
    }

    #[test]
    fn test_load_from_vars_missing_interval() {
        let err = load_from_vars(vars(&[(OFFSET_VAR, "5m")])).unwrap_err();
        assert!(matches!(err, ConfigError::Config(ref msg) if msg.contains(INTERVAL_VAR)));
    }

    #[test]
    fn test_load_from_vars_invalid_value() {
        let err = load_from_vars(vars(&[(INTERVAL_VAR, "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::Config(_)), "Should be a Config error");
    }

    /// Values that parse but cannot form a schedule are rejected.
    #[test]
    fn test_load_from_vars_invalid_schedule() {
        let err = load_from_vars(vars(&[(INTERVAL_VAR, "10s")])).unwrap_err();
        assert_eq!(err, ConfigError::Schedule(ScheduleError::OutOfRange));

        let err = load_from_vars(vars(&[(INTERVAL_VAR, "1h"), (OFFSET_VAR, "2h")])).unwrap_err();
        assert_eq!(err, ConfigError::Schedule(ScheduleError::InvalidOffset));
    }

    #[test]
    fn test_load_from_env() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var(INTERVAL_VAR, "24h");
        std::env::set_var(OFFSET_VAR, "1h 15m");

        let result = load_from_env();

        std::env::remove_var(INTERVAL_VAR);
        std::env::remove_var(OFFSET_VAR);

        let config = result.expect("Should load config from env vars");
        assert_eq!(config.expression().unwrap(), "0 1 * * *");
    }

    #[test]
    fn test_load_from_file_json() {
        let file = write_config(".json", r#"{ "interval": "15m", "offset": "5m" }"#);

        let config = load_from_file(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config, ScheduleConfig::new(15 * MINUTE, 5 * MINUTE));
    }

    #[test]
    fn test_load_from_file_toml() {
        let file = write_config(".toml", "interval = \"13h\"\noffset = 5400\n");

        let config = load_from_file(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.expression().unwrap(), "0 2,15 * * *");
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/cronspan.toml")));
        assert!(matches!(result, Err(ConfigError::Config(_))), "Should be a Config error");
    }

    #[test]
    fn test_load_from_file_invalid_json() {
        let file = write_config(".json", r#"{ "this is": "not valid json" "#);
        let result = load_from_file(Some(file.path().to_path_buf()));
        assert!(matches!(result, Err(ConfigError::Config(_))));
    }

    #[test]
    fn test_load_from_file_invalid_schedule() {
        let file = write_config(".toml", "interval = \"1m\"\noffset = \"1m\"\n");
        let result = load_from_file(Some(file.path().to_path_buf()));
        assert_eq!(result, Err(ConfigError::Schedule(ScheduleError::InvalidOffset)));
    }

    #[test]
    fn test_parse_config_formats() {
        assert!(parse_config(r#"{"interval": 3600}"#, Path::new("test.json")).is_ok());
        assert!(parse_config("interval = 3600", Path::new("test.toml")).is_ok());
        assert!(parse_config(r#"{"interval": "1h"}"#, Path::new("test")).is_ok());
    }

    #[test]
    fn test_parse_config_unsupported_format() {
        let result = parse_config("interval: 1h", Path::new("test.yaml"));
        assert!(result.is_err(), "Should fail with unsupported format");
    }

    /// Candidate order prefers the cronspan name and TOML within each root.
    #[test]
    fn test_candidate_order() {
        let dir = TempDir::new().unwrap();
        let roots = vec![dir.path().to_path_buf()];

        let names: Vec<PathBuf> = candidates(roots.clone()).collect();
        assert_eq!(names.first(), Some(&dir.path().join("cronspan.toml")));
        assert_eq!(names.len(), CONFIG_FILE_NAMES.len());

        std::fs::write(dir.path().join("config.json"), r#"{"interval": "1h"}"#).unwrap();
        std::fs::write(dir.path().join("cronspan.json"), r#"{"interval": "2h"}"#).unwrap();

        let found = candidates(roots).find(|path| path.exists());
        assert_eq!(found, Some(dir.path().join("cronspan.json")));
    }

    /// Validates that later roots are searched once earlier ones are empty.
    ///
    /// Assertions:
    /// - Ensures every name in the first root comes before the second root.
    /// - Ensures a file in the second root is found.
    #[test]
    fn test_candidates_span_roots() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        std::fs::write(second.path().join("config.toml"), "interval = \"1h\"\n").unwrap();

        let roots = vec![first.path().to_path_buf(), second.path().to_path_buf()];
        let names: Vec<PathBuf> = candidates(roots.clone()).collect();
        assert_eq!(names.len(), 2 * CONFIG_FILE_NAMES.len());
        assert!(names[..CONFIG_FILE_NAMES.len()].iter().all(|path| path.starts_with(first.path())));

        let found = candidates(roots).find(|path| path.exists());
        assert_eq!(found, Some(second.path().join("config.toml")));
    }

    /// Validates `probe_config_paths` only reports files that exist under a
    /// known config name.
    #[test]
    fn test_probe_config_paths_reports_existing_file() {
        if let Some(path) = probe_config_paths() {
            assert!(path.exists(), "probed path should exist: {}", path.display());
            let name = path.file_name().and_then(|name| name.to_str()).unwrap_or_default();
            assert!(CONFIG_FILE_NAMES.contains(&name), "unexpected config name: {name}");
        }
    }
}
