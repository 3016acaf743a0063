mod calendar;
mod consts;
mod iso;
mod ordering;
mod prelude;
mod relative;
mod types;

pub use calendar::{date_to_datetime, day_of_year, find_day_of_week, time_in_millis};
pub use consts::*;
pub use iso::{iso_to_gregorian, iso_year_start};
pub use ordering::TryOrd;
pub use relative::{
    date_after, date_after_at, date_before, date_before_at, is_recent, is_recent_at, years_ago,
};
pub use types::{IsoWeekDate, weeks_in_year};

use crate::prelude::*;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A bucket of year, month and day, any or all of which may be absent.
///
/// Nothing is range checked on construction: `month = 13` is stored as given
/// and only rejected when the value is converted to a real date, which is
/// what every comparison does first. Partial dates compare against
/// [`NaiveDate`] and [`NaiveDateTime`] through [`TryOrd`], never against each
/// other.
#[derive(Debug, Clone, Copy, Default, Display, Serialize)]
#[display(fmt = "{}-{}-{}", "Component(year)", "Component(month)", "Component(day)")]
pub struct PartialDate {
    year:  Option<i32>,
    month: Option<u32>,
    day:   Option<u32>,
}

/// Renders an optional component, using `ABSENT_COMPONENT` when missing.
struct Component<'a, T>(&'a Option<T>);

impl<T: fmt::Display> fmt::Display for Component<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value}"),
            None => f.write_str(ABSENT_COMPONENT),
        }
    }
}

/// Error type for all fallible operations in this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Input had a shape a `PartialDate` cannot be built from.
    #[error("Can't construct a PartialDate out of {0}")]
    UnsupportedInput(String),

    /// A comparison needed a year, month and day but at least one was absent.
    #[error("Comparison of incomplete dates is not supported: {0}")]
    Incomplete(String),

    /// All components were present but do not name a calendar date.
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// Date arithmetic left the range chrono can represent.
    #[error("Date out of range: {0}")]
    OutOfRange(String),

    /// Week or weekday outside the given ISO year.
    #[error("Invalid ISO week date: {year}-W{week:02}-{day}")]
    InvalidIsoWeekDate { year: i32, week: u32, day: u32 },
}

impl PartialDate {
    /// Copies year, month and day out of a full date or date-time
    pub fn from_date<D: Datelike>(date: &D) -> Self {
        Self {
            year:  Some(date.year()),
            month: Some(date.month()),
            day:   Some(date.day()),
        }
    }

    /// A partial date with every component absent
    pub const fn empty() -> Self {
        Self {
            year:  None,
            month: None,
            day:   None,
        }
    }

    /// Builds a partial date from individually optional components (not validated)
    pub const fn from_parts(year: Option<i32>, month: Option<u32>, day: Option<u32>) -> Self {
        Self { year, month, day }
    }

    /// Returns the year component if present
    pub const fn year(&self) -> Option<i32> {
        self.year
    }

    /// Returns the month component if present
    pub const fn month(&self) -> Option<u32> {
        self.month
    }

    /// Returns the day component if present
    pub const fn day(&self) -> Option<u32> {
        self.day
    }

    /// Returns all three components as a tuple
    pub const fn parts(&self) -> (Option<i32>, Option<u32>, Option<u32>) {
        (self.year, self.month, self.day)
    }

    /// Whether any component is present
    pub const fn is_truthy(&self) -> bool {
        self.year.is_some() || self.month.is_some() || self.day.is_some()
    }

    /// Whether year, month and day are all present
    pub const fn is_complete(&self) -> bool {
        self.year.is_some() && self.month.is_some() && self.day.is_some()
    }

    /// Converts to a calendar date.
    ///
    /// # Errors
    /// Returns `DateError::Incomplete` if any component is absent, and
    /// `DateError::InvalidDate` if the components do not name a real day.
    pub fn to_date(&self) -> Result<NaiveDate, DateError> {
        let (Some(year), Some(month), Some(day)) = self.parts() else {
            log::debug!("PartialDate {self} is incomplete");
            return Err(DateError::Incomplete(self.to_string()));
        };

        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            log::debug!("PartialDate {self} is not a calendar date");
            DateError::InvalidDate { year, month, day }
        })
    }

    /// Converts to midnight of the calendar date.
    ///
    /// # Errors
    /// Same as [`PartialDate::to_date`].
    pub fn to_datetime(&self) -> Result<NaiveDateTime, DateError> {
        Ok(self.to_date()?.and_time(NaiveTime::MIN))
    }
}

impl From<NaiveDate> for PartialDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(&date)
    }
}

impl From<NaiveDateTime> for PartialDate {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::from_date(&datetime)
    }
}

impl From<Option<NaiveDate>> for PartialDate {
    fn from(date: Option<NaiveDate>) -> Self {
        date.map_or_else(Self::empty, |d| Self::from_date(&d))
    }
}

/// Every shape a `PartialDate` can be deserialized from.
#[derive(Deserialize)]
#[serde(untagged)]
enum PartialDateInput {
    Absent(()),
    Full(NaiveDate),
    Parts(PartialDateParts),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialDateParts {
    #[serde(default)]
    year:  Option<i32>,
    #[serde(default)]
    month: Option<u32>,
    #[serde(default)]
    day:   Option<u32>,
}

impl<'de> Deserialize<'de> for PartialDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let input = PartialDateInput::deserialize(deserializer).map_err(|e| {
            <D::Error as serde::de::Error>::custom(DateError::UnsupportedInput(e.to_string()))
        })?;

        Ok(match input {
            PartialDateInput::Absent(()) => Self::empty(),
            PartialDateInput::Full(date) => Self::from_date(&date),
            PartialDateInput::Parts(PartialDateParts { year, month, day }) => {
                Self::from_parts(year, month, day)
            }
        })
    }
}
