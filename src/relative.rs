use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::{DEFAULT_RECENT_WINDOW_SECS, DateError, FEBRUARY, FEBRUARY_DAYS_COMMON, LEAP_DAY};

/// The date `years` calendar years before `date`.
///
/// Subtracting multiples of 365 days drifts across leap years, so only the
/// year is changed. A Feb 29 that does not exist in the target year becomes
/// Feb 28. Negative `years` move forward in time.
///
/// # Errors
/// Returns `DateError::OutOfRange` if the target year cannot be represented.
pub fn years_ago(date: NaiveDate, years: i32) -> Result<NaiveDate, DateError> {
    let out_of_range = || DateError::OutOfRange(format!("{years} years before {date}"));
    let year = date.year().checked_sub(years).ok_or_else(out_of_range)?;

    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| {
            if date.month() == FEBRUARY && date.day() == LEAP_DAY {
                log::debug!("{year} has no Feb 29, falling back to Feb 28");
                NaiveDate::from_ymd_opt(year, FEBRUARY, FEBRUARY_DAYS_COMMON)
            } else {
                None
            }
        })
        .ok_or_else(out_of_range)
}

/// Whether `datetime` is earlier than midnight `years` years before `now`.
///
/// # Errors
/// Returns `DateError::OutOfRange` if the cutoff cannot be represented.
pub fn date_before_at(now: NaiveDateTime, datetime: NaiveDateTime, years: i32) -> Result<bool, DateError> {
    let cutoff = years_ago(now.date(), years)?.and_time(NaiveTime::MIN);
    Ok(cutoff > datetime)
}

/// Negation of [`date_before_at`].
///
/// # Errors
/// Returns `DateError::OutOfRange` if the cutoff cannot be represented.
pub fn date_after_at(now: NaiveDateTime, datetime: NaiveDateTime, years: i32) -> Result<bool, DateError> {
    date_before_at(now, datetime, years).map(|before| !before)
}

/// [`date_before_at`] against the local clock.
///
/// # Errors
/// Returns `DateError::OutOfRange` if the cutoff cannot be represented.
pub fn date_before(datetime: NaiveDateTime, years: i32) -> Result<bool, DateError> {
    date_before_at(Local::now().naive_local(), datetime, years)
}

/// [`date_after_at`] against the local clock.
///
/// # Errors
/// Returns `DateError::OutOfRange` if the cutoff cannot be represented.
pub fn date_after(datetime: NaiveDateTime, years: i32) -> Result<bool, DateError> {
    date_after_at(Local::now().naive_local(), datetime, years)
}

/// Whether `datetime` falls after `now - window`. The window defaults to one minute.
///
/// A cutoff past chrono's range counts as unbounded: before the earliest date
/// for a positive window, after the latest for a negative one.
pub fn is_recent_at(now: NaiveDateTime, datetime: NaiveDateTime, window: Option<Duration>) -> bool {
    let window = window.unwrap_or_else(|| Duration::seconds(DEFAULT_RECENT_WINDOW_SECS));
    now.checked_sub_signed(window)
        .map_or_else(|| window > Duration::zero(), |threshold| threshold < datetime)
}

/// [`is_recent_at`] against the local clock.
pub fn is_recent(datetime: NaiveDateTime, window: Option<Duration>) -> bool {
    is_recent_at(Local::now().naive_local(), datetime, window)
}
