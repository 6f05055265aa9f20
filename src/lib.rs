//! Expand terse month/day shorthand into the calendar days it covers.
//!
//! ```
//! use shorthand_dates::{Year, expand};
//!
//! let year = Year::new(2022).unwrap();
//! let schedule = expand(["12/30-1/2", "6/7"], year).unwrap();
//! let days: Vec<String> = schedule.dates().map(|d| d.to_string()).collect();
//! assert_eq!(
//!     days,
//!     ["2021/12/30", "2021/12/31", "2022/01/01", "2022/01/02", "2022/06/07"]
//! );
//! ```

mod consts;
mod expand;
mod prelude;
mod range;
mod stepper;
#[cfg(test)]
mod test_utils;
mod types;

pub use consts::*;
pub use expand::{ExpandedSchedule, expand, split_tokens};
pub use range::{DateRange, Days, InvalidDateError, TokenShape, parse};
pub use stepper::{increment_day, increment_month};
pub use types::{Day, Month, Year, days_in_month, is_leap_year, is_valid_date};

use crate::prelude::*;
use std::str::FromStr;

/// A single civil date. Always valid; every operation returns a new value.
///
/// Ordering is lexicographic on (year, month, day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}/{}/{}", year, month, day)]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Range starts ({start}) after it ends ({end})")]
    ReversedRange { start: CalendarDate, end: CalendarDate },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

impl CalendarDate {
    /// Builds a date from already validated parts.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if `day` is past the end of `month` in `year`.
    pub fn new(year: Year, month: Month, day: u8) -> Result<Self, DateError> {
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Builds a date from raw numbers, validating every component.
    ///
    /// # Errors
    /// Returns the `DateError` for the first component that is out of range.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        Self::new(Year::new(year)?, Month::new(month)?, day)
    }

    /// Builds a date only when [`is_valid_date`] holds for the triple.
    pub(crate) fn from_checked(year: u16, month: u8, day: u8) -> Option<Self> {
        is_valid_date(year, month, day)
            .then(|| Self::from_ymd(year, month, day).ok())
            .flatten()
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// The `(year, month, day)` triple as plain numbers.
    pub const fn to_ymd(&self) -> (u16, u8, u8) {
        (self.year(), self.month(), self.day())
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Parses the `YYYY/MM/DD` form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(MONTH_DAY_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(format!(
                "Expected YYYY{MONTH_DAY_SEPARATOR}MM{MONTH_DAY_SEPARATOR}DD, got {trimmed}"
            )));
        };

        let year = year
            .parse::<u16>()
            .map_err(|_| DateError::InvalidFormat((*year).to_owned()))?;
        let month = month
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat((*month).to_owned()))?;
        let day = day
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat((*day).to_owned()))?;

        Self::from_ymd(year, month, day)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
