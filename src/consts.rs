/// Latest representable year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Number of months in a year
pub const MAX_MONTH: u8 = 12;

/// First day of every month
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Length of each month in a common year, indexed by month number.
pub const DAYS_IN_MONTH: [u8; 13] = [
    0, // months are 1-indexed
    31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31,
];

pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
pub(crate) const CENTURY_CYCLE: u16 = 100;
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Separates month from day inside a token (`6/7`)
pub const MONTH_DAY_SEPARATOR: char = '/';
/// Separates the two ends of a range token (`7/8-10`)
pub const RANGE_SEPARATOR: char = '-';
/// Separates tokens in the command-line argument (`6/7,7/8-10`)
pub const TOKEN_SEPARATOR: char = ',';

/// Most digits accepted in a month or day field
pub(crate) const MAX_FIELD_DIGITS: usize = 2;
