//! Serialization utilities for configuration values

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serializer};

/// Custom serialization module for Duration as human-readable text
///
/// Serializes with [`format_duration`](crate::time::format_duration) and
/// accepts either duration text (`"1h 30m"`) or a bare integer number of
/// seconds when deserializing.
///
/// # Usage
/// ```rust
/// use std::time::Duration;
///
/// use cronspan_common::duration_text;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Example {
///     #[serde(with = "duration_text")]
///     interval: Duration,
/// }
///
/// let parsed: Example = serde_json::from_str(r#"{"interval":"15m"}"#).unwrap();
/// assert_eq!(parsed.interval, Duration::from_secs(900));
/// ```
pub mod duration_text {
    use serde::de::Error as _;

    use super::{Deserialize, Deserializer, Duration, Serializer};
    use crate::time::{format_duration, parse_duration};

    /// Serde serialization result type
    type SerializeResult<S> = Result<<S as Serializer>::Ok, <S as Serializer>::Error>;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Text(String),
        Seconds(u64),
    }

    /// Serialize a Duration as duration text
    pub fn serialize<S>(duration: &Duration, serializer: S) -> SerializeResult<S>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_duration(*duration))
    }

    /// Deserialize duration text or whole seconds into a Duration
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Repr::deserialize(deserializer)? {
            Repr::Text(text) => parse_duration(&text).map_err(D::Error::custom),
            Repr::Seconds(secs) => Ok(Duration::from_secs(secs)),
        }
    }
}
