use std::iter::FusedIterator;

use serde::Serialize;

use crate::consts::MAX_FIELD_DIGITS;
use crate::{CalendarDate, DateError, MONTH_DAY_SEPARATOR, Month, RANGE_SEPARATOR, Year, prelude::*};

/// An inclusive run of days. The start date is never after the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[display(fmt = "{start}-{end}")]
pub struct DateRange {
    start: CalendarDate,
    end:   CalendarDate,
}

/// The three shorthand layouts a token can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum TokenShape {
    /// `M/D`, a single day.
    #[display(fmt = "M/D")]
    Single,
    /// `M1/D1-M2/D2`, possibly wrapping into the next year.
    #[display(fmt = "M/D-M/D")]
    MonthDayRange,
    /// `M/D1-D2`, both ends in the same month.
    #[display(fmt = "M/D-D")]
    DayRange,
}

/// A token that does not name a real range of days.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid date token '{token}': {source}")]
pub struct InvalidDateError {
    token:  String,
    source: DateError,
}

impl InvalidDateError {
    /// The token exactly as it was passed in.
    pub fn token(&self) -> &str {
        &self.token
    }

    pub const fn reason(&self) -> &DateError {
        &self.source
    }
}

impl DateRange {
    /// Creates a new range, rejecting one that runs backwards.
    ///
    /// # Errors
    /// Returns `DateError::ReversedRange` if `start > end`.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self, DateError> {
        if start > end {
            return Err(DateError::ReversedRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// A range covering exactly one day.
    pub const fn single(date: CalendarDate) -> Self {
        Self {
            start: date,
            end:   date,
        }
    }

    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    /// Returns both ends as a tuple
    pub const fn dates(&self) -> (CalendarDate, CalendarDate) {
        (self.start, self.end)
    }

    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Every day from start to end, inclusive, in order.
    pub const fn days(&self) -> Days {
        Days {
            next: Some(self.start),
            end:  self.end,
        }
    }

    /// Number of days covered, always at least one.
    pub fn len_days(&self) -> usize {
        self.days().count()
    }
}

impl IntoIterator for DateRange {
    type Item = CalendarDate;
    type IntoIter = Days;

    fn into_iter(self) -> Days {
        self.days()
    }
}

/// Iterator over the days of a [`DateRange`], produced by stepping one day at a time.
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<CalendarDate>,
    end:  CalendarDate,
}

impl Iterator for Days {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<CalendarDate> {
        let current = self.next.take()?;
        // Anything before `end` has a successor, so this never stops early.
        if current < self.end {
            self.next = current.increment_day();
        }
        Some(current)
    }
}

impl FusedIterator for Days {}

impl TokenShape {
    /// Decides the layout from the hyphen and whether a `/` follows it.
    pub fn classify(token: &str) -> Self {
        match token.split_once(RANGE_SEPARATOR) {
            None => Self::Single,
            Some((_, end)) if end.contains(MONTH_DAY_SEPARATOR) => Self::MonthDayRange,
            Some(_) => Self::DayRange,
        }
    }
}

/// Parses one shorthand token into the range of days it names.
///
/// Missing years come from `current_year`. In the `M1/D1-M2/D2` form an end
/// month numerically smaller than the start month means the range began in
/// the previous year, so `12/30-1/2` in 2022 runs from 2021/12/30 to
/// 2022/01/02. Ranges are assumed to cover at most one such wrap and never a
/// leap day at the wrap. A wrapped start date is validated in the year it
/// resolves to, so `2/29-1/5` in 2025 starts on 2024/02/29.
///
/// # Errors
/// Returns `InvalidDateError` carrying the token if a field is missing or not
/// numeric, a month or day does not exist, or the range runs backwards.
pub fn parse(token: &str, current_year: Year) -> Result<DateRange, InvalidDateError> {
    let range = parse_range(token.trim(), current_year).map_err(|source| InvalidDateError {
        token: token.to_owned(),
        source,
    })?;
    tracing::trace!(token, %range, "parsed date token");
    Ok(range)
}

fn parse_range(token: &str, year: Year) -> Result<DateRange, DateError> {
    if token.is_empty() {
        return Err(DateError::EmptyInput);
    }

    match TokenShape::classify(token) {
        TokenShape::Single => {
            let (month, day) = parse_month_day(token)?;
            Ok(DateRange::single(CalendarDate::new(year, month, day)?))
        }
        TokenShape::MonthDayRange => {
            let (first, second) = split_range(token)?;
            let (start_month, start_day) = parse_month_day(first)?;
            let (end_month, end_day) = parse_month_day(second)?;

            let start_year = if end_month < start_month {
                year.prev()?
            } else {
                year
            };

            DateRange::new(
                CalendarDate::new(start_year, start_month, start_day)?,
                CalendarDate::new(year, end_month, end_day)?,
            )
        }
        TokenShape::DayRange => {
            let (first, second) = split_range(token)?;
            let (month, start_day) = parse_month_day(first)?;
            let end_day = parse_field(second)?;

            DateRange::new(
                CalendarDate::new(year, month, start_day)?,
                CalendarDate::new(year, month, end_day)?,
            )
        }
    }
}

fn split_range(token: &str) -> Result<(&str, &str), DateError> {
    token
        .split_once(RANGE_SEPARATOR)
        .ok_or_else(|| DateError::InvalidFormat(token.to_owned()))
}

/// `M/D` with a validated month; the day is checked once the year is known.
fn parse_month_day(s: &str) -> Result<(Month, u8), DateError> {
    let (month, day) = s.split_once(MONTH_DAY_SEPARATOR).ok_or_else(|| {
        DateError::InvalidFormat(format!("Expected M{MONTH_DAY_SEPARATOR}D, got {s}"))
    })?;
    let month = Month::new(parse_field(month)?)?;
    Ok((month, parse_field(day)?))
}

/// One or two ASCII digits.
fn parse_field(s: &str) -> Result<u8, DateError> {
    let well_formed =
        !s.is_empty() && s.len() <= MAX_FIELD_DIGITS && s.bytes().all(|b| b.is_ascii_digit());
    if !well_formed {
        return Err(DateError::InvalidFormat(s.to_owned()));
    }
    s.parse::<u8>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, rendered, year};

    fn days_of(token: &str, current_year: u16) -> Vec<String> {
        let range = parse(token, year(current_year)).expect("token should parse");
        rendered(&range.days().collect::<Vec<_>>())
    }

    #[test]
    fn test_classify() {
        struct TestCase {
            token:    &'static str,
            expected: TokenShape,
        }

        let cases = [
            TestCase {
                token:    "6/7",
                expected: TokenShape::Single,
            },
            TestCase {
                token:    "12/30-1/2",
                expected: TokenShape::MonthDayRange,
            },
            TestCase {
                token:    "7/8-10",
                expected: TokenShape::DayRange,
            },
            TestCase {
                token:    "7/8-",
                expected: TokenShape::DayRange,
            },
        ];

        for case in &cases {
            assert_eq!(
                TokenShape::classify(case.token),
                case.expected,
                "shape of {}",
                case.token
            );
        }
    }

    #[test]
    fn test_single_day() {
        let range = parse("6/7", year(2022)).unwrap();
        assert_eq!(range.start(), date(2022, 6, 7));
        assert_eq!(range.end(), date(2022, 6, 7));
        assert_eq!(range.len_days(), 1);
        assert_eq!(days_of("6/7", 2022), ["2022/06/07"]);
    }

    #[test]
    fn test_same_month_range() {
        let range = parse("7/8-10", year(2022)).unwrap();
        assert_eq!(range.dates(), (date(2022, 7, 8), date(2022, 7, 10)));
        assert_eq!(
            days_of("7/8-10", 2022),
            ["2022/07/08", "2022/07/09", "2022/07/10"]
        );
    }

    #[test]
    fn test_year_wrap() {
        let range = parse("12/30-1/2", year(2022)).unwrap();
        assert_eq!(range.start(), date(2021, 12, 30));
        assert_eq!(range.end(), date(2022, 1, 2));
        assert_eq!(
            days_of("12/30-1/2", 2022),
            ["2021/12/30", "2021/12/31", "2022/01/01", "2022/01/02"]
        );
    }

    #[test]
    fn test_month_boundary_without_wrap() {
        assert_eq!(
            days_of("1/30-2/2", 2022),
            ["2022/01/30", "2022/01/31", "2022/02/01", "2022/02/02"]
        );
        assert_eq!(
            days_of("2/28-3/1", 2024),
            ["2024/02/28", "2024/02/29", "2024/03/01"]
        );
    }

    #[test]
    fn test_leading_zeros_and_whitespace() {
        assert_eq!(days_of("06/07", 2022), ["2022/06/07"]);
        assert_eq!(days_of(" 7/08-09 ", 2022), ["2022/07/08", "2022/07/09"]);
    }

    #[test]
    fn test_invalid_day_is_rejected() {
        let err = parse("2/30", year(2022)).unwrap_err();
        assert_eq!(err.token(), "2/30");
        assert!(matches!(
            err.reason(),
            DateError::InvalidDay {
                year: 2022,
                month: 2,
                day: 30
            }
        ));
        assert_eq!(
            err.to_string(),
            "Invalid date token '2/30': Invalid day 30 for month 2022-02"
        );
    }

    #[test]
    fn test_leap_day_depends_on_current_year() {
        assert!(parse("2/29", year(2024)).is_ok());
        assert!(parse("2/29", year(2022)).is_err());
    }

    #[test]
    fn test_malformed_tokens() {
        for token in ["", "6", "6/", "/7", "a/7", "6/b", "6/7/8", "6/7-x", "6/7-8-9", "+6/7", "006/7", "6/7-8/"] {
            let result = parse(token, year(2022));
            assert!(
                matches!(
                    result.as_ref().map_err(InvalidDateError::reason),
                    Err(DateError::InvalidFormat(_) | DateError::EmptyInput)
                ),
                "expected format error for {token:?}, got {result:?}"
            );
        }
    }

    #[test]
    fn test_out_of_range_fields() {
        assert!(matches!(
            parse("13/1", year(2022)).unwrap_err().reason(),
            DateError::InvalidMonth(13)
        ));
        assert!(matches!(
            parse("0/1", year(2022)).unwrap_err().reason(),
            DateError::InvalidMonth(0)
        ));
        assert!(matches!(
            parse("4/31", year(2022)).unwrap_err().reason(),
            DateError::InvalidDay { .. }
        ));
        assert!(matches!(
            parse("7/8-32", year(2022)).unwrap_err().reason(),
            DateError::InvalidDay { day: 32, .. }
        ));
    }

    #[test]
    fn test_backwards_range_is_rejected() {
        assert!(matches!(
            parse("7/10-8", year(2022)).unwrap_err().reason(),
            DateError::ReversedRange { .. }
        ));
        // Same month, so no year wrap applies
        assert!(matches!(
            parse("6/7-6/3", year(2022)).unwrap_err().reason(),
            DateError::ReversedRange { .. }
        ));
    }

    #[test]
    fn test_wrapped_start_is_checked_in_previous_year() {
        // Feb 29 only has to exist in the year the range actually starts in
        let range = parse("2/29-1/5", year(2025)).unwrap();
        assert_eq!(range.dates(), (date(2024, 2, 29), date(2025, 1, 5)));

        assert!(matches!(
            parse("2/29-1/5", year(2024)).unwrap_err().reason(),
            DateError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29
            }
        ));
    }

    #[test]
    fn test_wrap_before_year_one() {
        assert!(matches!(
            parse("12/30-1/2", year(1)).unwrap_err().reason(),
            DateError::InvalidYear(0)
        ));
    }

    #[test]
    fn test_range_new_and_contains() {
        let range = DateRange::new(date(2022, 7, 8), date(2022, 7, 10)).unwrap();
        assert!(range.contains(&date(2022, 7, 9)));
        assert!(!range.contains(&date(2022, 7, 11)));
        assert!(DateRange::new(date(2022, 7, 10), date(2022, 7, 8)).is_err());
    }

    #[test]
    fn test_days_iterator_is_fused() {
        let mut days = DateRange::single(date(2022, 6, 7)).days();
        assert_eq!(days.next(), Some(date(2022, 6, 7)));
        assert_eq!(days.next(), None);
        assert_eq!(days.next(), None);
    }

    #[test]
    fn test_last_representable_day() {
        let range = DateRange::new(date(9999, 12, 30), date(9999, 12, 31)).unwrap();
        assert_eq!(range.len_days(), 2);
    }

    #[test]
    fn test_display_and_serialize() {
        let range = parse("12/30-1/2", year(2022)).unwrap();
        assert_eq!(range.to_string(), "2021/12/30-2022/01/02");
        assert_eq!(
            serde_json::to_string(&range).unwrap(),
            r#"{"start":"2021/12/30","end":"2022/01/02"}"#
        );
    }
}
