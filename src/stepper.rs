//! Day and month arithmetic on [`CalendarDate`].

use crate::consts::MIN_DAY;
use crate::{CalendarDate, days_in_month, is_valid_date};

impl CalendarDate {
    /// The day after `self`, rolling over month and year ends.
    ///
    /// Returns `None` only for the last representable day, `9999/12/31`.
    /// [`expand`](crate::expand) never asks for the day after a range's end,
    /// so it never sees `None`.
    pub fn increment_day(self) -> Option<Self> {
        let (year, month, day) = self.to_ymd();
        if day < days_in_month(year, month) {
            return Self::from_checked(year, month, day + 1);
        }

        let (next_month, rolled) = self.month_typed().succ();
        let year = if rolled { year + 1 } else { year };
        Self::from_checked(year, next_month.get(), MIN_DAY)
    }

    /// The same day one month later, clamped to the last day of a shorter month.
    ///
    /// `2022/01/31` becomes `2022/02/28`, `2022/12/31` becomes `2023/01/31`.
    /// Returns `None` only for December of the last representable year.
    /// Nothing on the [`expand`](crate::expand) path steps by months.
    pub fn increment_month(self) -> Option<Self> {
        let (next_month, rolled) = self.month_typed().succ();
        let year = if rolled { self.year() + 1 } else { self.year() };
        let month = next_month.get();

        // Every month has at least 28 days, so this stops within three steps
        // for any in-range year.
        let day = (MIN_DAY..=self.day())
            .rev()
            .find(|&day| is_valid_date(year, month, day))?;
        Self::from_checked(year, month, day)
    }
}

/// Free-function form of [`CalendarDate::increment_day`].
pub fn increment_day(date: CalendarDate) -> Option<CalendarDate> {
    date.increment_day()
}

/// Free-function form of [`CalendarDate::increment_month`].
pub fn increment_month(date: CalendarDate) -> Option<CalendarDate> {
    date.increment_month()
}
