//! Calendar date value type used for birth dates, task dates and assignments.
//!
//! A [`CalendarDate`] is a day without time or zone. Its textual form is fixed
//! to `YYYY-MM-DD` on input and output, independently of how the database
//! stores dates; repositories convert to and from [`NaiveDate`] at the
//! boundary.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Textual format of a calendar date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Error returned when a string is not a `YYYY-MM-DD` date.
#[derive(Debug, thiserror::Error)]
#[error("invalid date '{input}', expected YYYY-MM-DD: {source}")]
pub struct CalendarDateError {
    input: String,
    #[source]
    source: chrono::ParseError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Parses a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarDateError`] for any other shape or an impossible
    /// date such as `2023-02-30`.
    pub fn parse(input: &str) -> Result<Self, CalendarDateError> {
        NaiveDate::parse_from_str(input, DATE_FORMAT)
            .map(Self)
            .map_err(|source| CalendarDateError {
                input: input.to_string(),
                source,
            })
    }

    /// Formats the date as `YYYY-MM-DD`.
    pub fn format(&self) -> String {
        self.0.format(DATE_FORMAT).to_string()
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
