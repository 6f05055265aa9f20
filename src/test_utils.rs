//! Shorthand constructors for unit tests.

use crate::{CalendarDate, Month, Year};

pub fn year(value: u16) -> Year {
    Year::new(value).expect("test year out of range")
}

pub fn month(value: u8) -> Month {
    Month::new(value).expect("test month out of range")
}

pub fn date(y: u16, m: u8, d: u8) -> CalendarDate {
    CalendarDate::from_ymd(y, m, d).expect("test date should be valid")
}

/// Renders dates as `YYYY/MM/DD` strings.
pub fn rendered(dates: &[CalendarDate]) -> Vec<String> {
    dates.iter().map(ToString::to_string).collect()
}
