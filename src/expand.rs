use serde::Serialize;

use crate::{CalendarDate, InvalidDateError, TOKEN_SEPARATOR, Year, parse, prelude::*};

/// One run of days per input token, in token order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, IntoIterator, Serialize)]
#[serde(transparent)]
#[into_iterator(owned, ref)]
pub struct ExpandedSchedule(Vec<Vec<CalendarDate>>);

impl ExpandedSchedule {
    /// Every date across all tokens, in schedule order.
    pub fn dates(&self) -> impl Iterator<Item = &CalendarDate> + '_ {
        self.0.iter().flatten()
    }

    /// Total number of dates across all tokens.
    pub fn total_days(&self) -> usize {
        self.0.iter().map(Vec::len).sum()
    }

    pub fn into_inner(self) -> Vec<Vec<CalendarDate>> {
        self.0
    }
}

/// Expands each token into the inclusive run of days it names.
///
/// `current_year` fills in every missing year, so one call sees a single
/// consistent "this year" no matter how long it takes.
///
/// # Errors
/// Stops at the first token that fails to parse and returns its
/// `InvalidDateError`; no partial schedule is produced.
pub fn expand<I, S>(tokens: I, current_year: Year) -> Result<ExpandedSchedule, InvalidDateError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let schedule = tokens
        .into_iter()
        .map(|token| -> Result<Vec<CalendarDate>, InvalidDateError> {
            let token = token.as_ref();
            let range = parse(token, current_year)?;
            tracing::debug!(token, %range, days = range.len_days(), "expanded date token");
            Ok(range.days().collect())
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ExpandedSchedule(schedule))
}

/// Splits a comma-separated argument such as `12/30-1/2,6/7` into tokens.
///
/// Tokens are not trimmed or filtered; an empty piece stays in the list and
/// is rejected by [`parse`].
pub fn split_tokens(input: &str) -> Vec<&str> {
    input.split(TOKEN_SEPARATOR).collect()
}
