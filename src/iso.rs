//! Conversion from ISO-8601 week dates to Gregorian dates.
//!
//! ISO week 1 is the week containing the year's first Thursday, which is the
//! same as the week containing January 4th. The first day of an ISO year is
//! therefore the Monday on or before January 4th, and may belong to the
//! previous Gregorian year.

use chrono::{Datelike, Days, Duration, NaiveDate};

use crate::{DAYS_PER_WEEK, DateError, ISO_WEEK_ANCHOR_DAY, JANUARY};

/// The Gregorian date of the first day (Monday of week 1) of the given ISO year.
///
/// # Errors
/// Returns `DateError::OutOfRange` if `iso_year` is outside the range chrono can represent.
pub fn iso_year_start(iso_year: i32) -> Result<NaiveDate, DateError> {
    let fourth_jan = NaiveDate::from_ymd_opt(iso_year, JANUARY, ISO_WEEK_ANCHOR_DAY)
        .ok_or_else(|| DateError::OutOfRange(format!("ISO year {iso_year}")))?;
    let back = fourth_jan.weekday().number_from_monday() - 1;

    fourth_jan
        .checked_sub_days(Days::new(u64::from(back)))
        .ok_or_else(|| DateError::OutOfRange(format!("start of ISO year {iso_year}")))
}

/// The Gregorian date for the given ISO year, week and day.
///
/// `iso_week` and `iso_day` are not range checked: week 0 or day 8 simply walk
/// off the ends of the ISO year.
///
/// # Errors
/// Returns `DateError::OutOfRange` if the result cannot be represented.
pub fn iso_to_gregorian(iso_year: i32, iso_week: i64, iso_day: i64) -> Result<NaiveDate, DateError> {
    let year_start = iso_year_start(iso_year)?;

    let offset = iso_week
        .checked_sub(1)
        .and_then(|weeks| weeks.checked_mul(DAYS_PER_WEEK))
        .and_then(|days| iso_day.checked_sub(1).and_then(|d| days.checked_add(d)))
        .and_then(Duration::try_days);

    offset
        .and_then(|delta| year_start.checked_add_signed(delta))
        .ok_or_else(|| {
            log::warn!("ISO week date {iso_year}-W{iso_week}-{iso_day} is outside the representable range");
            DateError::OutOfRange(format!("ISO week date {iso_year}-W{iso_week}-{iso_day}"))
        })
}
