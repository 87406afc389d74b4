//! Five-field cron schedule
//!
//! A [`Schedule`] holds one list of values per cron field. An empty list is
//! the wildcard. Only the restricted dialect is produced and accepted: each
//! field is `*` or a comma-separated list of integers, with no ranges, steps
//! or names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::{
    DAYS_PER_MONTH, DAYS_PER_WEEK, HOURS_PER_DAY, MINUTES_PER_HOUR, MONTHS_PER_YEAR, WILDCARD,
};
use crate::errors::{ExpressionError, Result};

/// One of the five cron fields, in expression order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CronField {
    /// 0-59
    Minute,
    /// 0-23
    Hour,
    /// 1-31
    DayOfMonth,
    /// 1-12
    Month,
    /// 0-6, Sunday is 0
    DayOfWeek,
}

impl CronField {
    /// All fields in the order they appear in an expression
    pub const ALL: [Self; 5] =
        [Self::Minute, Self::Hour, Self::DayOfMonth, Self::Month, Self::DayOfWeek];

    /// Smallest valid value (day-of-month and month are 1-indexed)
    pub const fn min(self) -> u32 {
        match self {
            Self::DayOfMonth | Self::Month => 1,
            Self::Minute | Self::Hour | Self::DayOfWeek => 0,
        }
    }

    /// Number of distinct values the field cycles through
    pub const fn cycle(self) -> u32 {
        match self {
            Self::Minute => MINUTES_PER_HOUR,
            Self::Hour => HOURS_PER_DAY,
            Self::DayOfMonth => DAYS_PER_MONTH,
            Self::Month => MONTHS_PER_YEAR,
            Self::DayOfWeek => DAYS_PER_WEEK,
        }
    }

    /// Largest valid value
    pub const fn max(self) -> u32 {
        self.min() + self.cycle() - 1
    }

    /// Check if `value` lies in the field's range
    pub const fn contains(self, value: u32) -> bool {
        value >= self.min() && value <= self.max()
    }

    /// Human-readable field name used in errors
    pub const fn name(self) -> &'static str {
        match self {
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::DayOfMonth => "day-of-month",
            Self::Month => "month",
            Self::DayOfWeek => "day-of-week",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Minute => 0,
            Self::Hour => 1,
            Self::DayOfMonth => 2,
            Self::Month => 3,
            Self::DayOfWeek => 4,
        }
    }
}

impl fmt::Display for CronField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A cron schedule
///
/// Built once through consuming [`with_field`](Self::with_field) calls and
/// immutable afterwards. `Schedule::default()` fires every minute.
///
/// # Examples
///
/// ```
/// use cronspan_domain::{CronField, Schedule};
///
/// let schedule = Schedule::default()
///     .with_field(CronField::Minute, vec![0, 30])
///     .with_field(CronField::Hour, vec![9]);
///
/// assert_eq!(schedule.expression(), "0,30 9 * * *");
/// assert_eq!("0,30 9 * * *".parse::<Schedule>().unwrap(), schedule);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Schedule {
    fields: [Vec<u32>; 5],
}

impl Schedule {
    /// The all-wildcard schedule
    pub fn every_minute() -> Self {
        Self::default()
    }

    /// Return a copy of this schedule with `field` set to `values`
    ///
    /// Values are kept in the given order. An empty list resets the field
    /// to the wildcard.
    #[must_use]
    pub fn with_field(mut self, field: CronField, values: impl Into<Vec<u32>>) -> Self {
        let values = values.into();
        debug_assert!(
            values.iter().all(|value| field.contains(*value)),
            "{field} values out of range: {values:?}"
        );
        self.fields[field.index()] = values;
        self
    }

    /// Values of `field`; empty means wildcard
    pub fn field(&self, field: CronField) -> &[u32] {
        &self.fields[field.index()]
    }

    /// Check if `field` is unconstrained
    pub fn is_wildcard(&self, field: CronField) -> bool {
        self.field(field).is_empty()
    }

    /// Minute values
    pub fn minutes(&self) -> &[u32] {
        self.field(CronField::Minute)
    }

    /// Hour values
    pub fn hours(&self) -> &[u32] {
        self.field(CronField::Hour)
    }

    /// Day-of-month values
    pub fn days_of_month(&self) -> &[u32] {
        self.field(CronField::DayOfMonth)
    }

    /// Month values
    pub fn months(&self) -> &[u32] {
        self.field(CronField::Month)
    }

    /// Day-of-week values, Sunday is 0
    pub fn days_of_week(&self) -> &[u32] {
        self.field(CronField::DayOfWeek)
    }

    /// Render the five-field cron expression
    pub fn expression(&self) -> String {
        self.to_string()
    }

    /// Parse a restricted five-field cron expression
    pub fn parse(expr: &str) -> Result<Self> {
        let parts: Vec<&str> = expr.split_whitespace().collect();

        if parts.len() < CronField::ALL.len() {
            return Err(ExpressionError::TooFewFields(parts.len()));
        }
        if parts.len() > CronField::ALL.len() {
            return Err(ExpressionError::TooManyFields(parts.len()));
        }

        CronField::ALL.iter().zip(parts).try_fold(Self::default(), |schedule, (&field, text)| {
            Ok(schedule.with_field(field, parse_field(text, field)?))
        })
    }
}

fn parse_field(text: &str, field: CronField) -> Result<Vec<u32>> {
    if text == WILDCARD {
        return Ok(Vec::new());
    }

    text.split(',')
        .map(|part| {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ExpressionError::InvalidField(format!("{field} field '{text}'")));
            }

            let value: u32 = part
                .parse()
                .map_err(|_| ExpressionError::InvalidField(format!("{field} field '{text}'")))?;

            if !field.contains(value) {
                return Err(ExpressionError::InvalidRange(format!(
                    "{} not in {} range {}-{}",
                    value,
                    field,
                    field.min(),
                    field.max()
                )));
            }

            Ok(value)
        })
        .collect()
}

fn write_field(f: &mut fmt::Formatter<'_>, values: &[u32]) -> fmt::Result {
    let Some((first, rest)) = values.split_first() else {
        return f.write_str(WILDCARD);
    };

    write!(f, "{first}")?;
    for value in rest {
        write!(f, ",{value}")?;
    }
    Ok(())
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, values) in self.fields.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write_field(f, values)?;
        }
        Ok(())
    }
}

impl FromStr for Schedule {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Schedule {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Schedule {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
