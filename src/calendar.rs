use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Utc, Weekday};

use crate::consts::{COMMON_REFERENCE_YEAR, LEAP_DAY_ORDINAL};
use crate::{DateError, FEBRUARY, LEAP_DAY};

/// Finds the `offset`-th (0-based) `weekday` in the given month.
///
/// Returns `None` if the month has fewer occurrences, or if `year`/`month`
/// do not name a month.
pub fn find_day_of_week(year: i32, month: u32, weekday: Weekday, offset: u32) -> Option<NaiveDate> {
    let nth = offset.checked_add(1).and_then(|n| u8::try_from(n).ok())?;
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, nth)
}

/// Midnight at the start of `date`
pub fn date_to_datetime(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Milliseconds since the Unix epoch, reading `time` as UTC.
/// `None` means the current time.
pub fn time_in_millis(time: Option<NaiveDateTime>) -> i64 {
    time.unwrap_or_else(|| Utc::now().naive_utc())
        .and_utc()
        .timestamp_millis()
}

/// Ordinal of the day within a common (non-leap) year, e.g. Feb 3 is 34.
///
/// Feb 29 has no slot in a common year and is reported as 60, the same as Mar 1.
///
/// # Errors
/// Returns `DateError::InvalidDate` if `month`/`day` name no day in any year.
pub fn day_of_year(month: u32, day: u32) -> Result<u32, DateError> {
    if let Some(date) = NaiveDate::from_ymd_opt(COMMON_REFERENCE_YEAR, month, day) {
        return Ok(date.ordinal());
    }
    if month == FEBRUARY && day == LEAP_DAY {
        return Ok(LEAP_DAY_ORDINAL);
    }
    Err(DateError::InvalidDate {
        year: COMMON_REFERENCE_YEAR,
        month,
        day,
    })
}
