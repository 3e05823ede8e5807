//! Resolves a (year, month) pair into an inclusive calendar-day range.

use std::ops::RangeInclusive;

use time::{Date, Month};

use crate::Error;

/// Resolve a calendar month into the inclusive range of its days.
///
/// The range runs from the first day of the month through its last day,
/// accounting for variable month lengths and leap years. This is a pure
/// function: same inputs, same range, no side effects.
///
/// # Errors
/// This function will return a:
/// - [Error::MonthOutOfRange] if `month` is outside 1-12,
/// - or [Error::YearOutOfRange] if `year` cannot be represented as a date.
pub fn month_range(year: i32, month: u8) -> Result<RangeInclusive<Date>, Error> {
    let month = Month::try_from(month).map_err(|_| Error::MonthOutOfRange(month))?;

    let start =
        Date::from_calendar_date(year, month, 1).map_err(|_| Error::YearOutOfRange(year))?;
    let end = Date::from_calendar_date(year, month, days_in_month(month, year))
        .map_err(|_| Error::YearOutOfRange(year))?;

    Ok(start..=end)
}

/// The number of days in `month` of `year`.
fn days_in_month(month: Month, year: i32) -> u8 {
    match month {
        Month::January
        | Month::March
        | Month::May
        | Month::July
        | Month::August
        | Month::October
        | Month::December => 31,
        Month::April | Month::June | Month::September | Month::November => 30,
        Month::February if time::util::is_leap_year(year) => 29,
        Month::February => 28,
    }
}
