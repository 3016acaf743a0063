use crate::consts::{
    DECEMBER, ISO_LAST_WEEK_ANCHOR_DAY, ISO_MONDAY, ISO_SUNDAY, LONG_ISO_YEAR_WEEKS,
    SHORT_ISO_YEAR_WEEKS,
};
use crate::iso::iso_to_gregorian;
use crate::prelude::*;
use crate::DateError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// An ISO-8601 week date guaranteed to name a real day:
/// `week` is within the ISO year and `day` is 1 (Monday) through 7 (Sunday).
///
/// Use [`iso_to_gregorian`] directly for unchecked arithmetic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into, Serialize, Deserialize,
)]
#[display(fmt = "{:04}-W{:02}-{}", "year", "week", "day")]
#[serde(try_from = "RawIsoWeekDate")]
pub struct IsoWeekDate {
    year: i32,
    week: u32,
    day: u32,
}

#[derive(Deserialize)]
struct RawIsoWeekDate {
    year: i32,
    week: u32,
    day: u32,
}

impl TryFrom<RawIsoWeekDate> for IsoWeekDate {
    type Error = DateError;

    fn try_from(raw: RawIsoWeekDate) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.week, raw.day)
    }
}

impl IsoWeekDate {
    /// Creates a new ISO week date, validating week and day
    ///
    /// # Errors
    /// Returns `DateError::InvalidIsoWeekDate` if the week is not in the ISO year or
    /// the day is not 1..=7, and `DateError::OutOfRange` if the year is unrepresentable.
    pub fn new(year: i32, week: u32, day: u32) -> Result<Self, DateError> {
        let max_week = weeks_in_year(year)?;
        if week == 0 || week > max_week || !(ISO_MONDAY..=ISO_SUNDAY).contains(&day) {
            return Err(DateError::InvalidIsoWeekDate { year, week, day });
        }
        Ok(Self { year, week, day })
    }

    /// The ISO week date of a calendar date, as computed by chrono
    pub fn from_date<D: Datelike>(date: &D) -> Self {
        let iso = date.iso_week();
        Self {
            year: iso.year(),
            week: iso.week(),
            day: date.weekday().number_from_monday(),
        }
    }

    /// Converts back to a Gregorian date
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` near the edges of chrono's supported range.
    pub fn to_date(self) -> Result<NaiveDate, DateError> {
        iso_to_gregorian(self.year, i64::from(self.week), i64::from(self.day))
    }

    /// ISO year, which can differ from the Gregorian year near January 1st
    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// ISO week number, 1 through 52 or 53
    #[inline]
    pub const fn week(self) -> u32 {
        self.week
    }

    /// ISO weekday, 1 = Monday .. 7 = Sunday
    #[inline]
    pub const fn day(self) -> u32 {
        self.day
    }
}

impl From<NaiveDate> for IsoWeekDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(&date)
    }
}

/// Number of weeks (52 or 53) in the given ISO year.
///
/// December 28th is always in the last ISO week of its year.
///
/// # Errors
/// Returns `DateError::OutOfRange` if the year is unrepresentable.
pub fn weeks_in_year(iso_year: i32) -> Result<u32, DateError> {
    let dec_28 = NaiveDate::from_ymd_opt(iso_year, DECEMBER, ISO_LAST_WEEK_ANCHOR_DAY)
        .ok_or_else(|| DateError::OutOfRange(format!("ISO year {iso_year}")))?;
    let weeks = dec_28.iso_week().week();
    debug_assert!(weeks == SHORT_ISO_YEAR_WEEKS || weeks == LONG_ISO_YEAR_WEEKS);
    Ok(weeks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_new_valid() {
        assert!(IsoWeekDate::new(2012, 1, 1).is_ok());
        assert!(IsoWeekDate::new(2012, 52, 7).is_ok());
        // 2020 is a long ISO year
        assert!(IsoWeekDate::new(2020, 53, 4).is_ok());
    }

    #[test]
    fn test_new_invalid() {
        struct TestCase {
            year:        i32,
            week:        u32,
            day:         u32,
            description: &'static str,
        }

        let cases = [
            TestCase { year: 2012, week: 0, day: 1, description: "week zero" },
            TestCase { year: 2021, week: 53, day: 1, description: "week 53 in a short year" },
            TestCase { year: 2012, week: 54, day: 1, description: "week past 53" },
            TestCase { year: 2012, week: 1, day: 0, description: "day zero" },
            TestCase { year: 2012, week: 1, day: 8, description: "day past Sunday" },
        ];

        for case in &cases {
            let result = IsoWeekDate::new(case.year, case.week, case.day);
            assert!(
                matches!(result, Err(DateError::InvalidIsoWeekDate { .. })),
                "Expected failure for: {}",
                case.description
            );
        }
    }

    #[test]
    fn test_weeks_in_year() {
        for year in [2004, 2009, 2015, 2020, 2026] {
            assert_eq!(weeks_in_year(year).unwrap(), 53, "{year} should have 53 weeks");
        }
        for year in [2003, 2010, 2012, 2021, 2023] {
            assert_eq!(weeks_in_year(year).unwrap(), 52, "{year} should have 52 weeks");
        }
    }

    #[test]
    fn test_from_date() {
        let iso = IsoWeekDate::from_date(&ymd(2012, 1, 12));
        assert_eq!((iso.year(), iso.week(), iso.day()), (2012, 2, 4));

        // Belongs to the last week of the previous ISO year
        let iso: IsoWeekDate = ymd(2010, 1, 3).into();
        assert_eq!((iso.year(), iso.week(), iso.day()), (2009, 53, 7));
    }

    #[test]
    fn test_to_date() {
        let iso = IsoWeekDate::new(2012, 12, 4).unwrap();
        assert_eq!(iso.to_date().unwrap(), ymd(2012, 3, 22));

        let iso = IsoWeekDate::new(2009, 1, 1).unwrap();
        assert_eq!(iso.to_date().unwrap(), ymd(2008, 12, 29));
    }

    #[test]
    fn test_display() {
        let iso = IsoWeekDate::new(2012, 2, 4).unwrap();
        assert_eq!(iso.to_string(), "2012-W02-4");
    }

    #[test]
    fn test_into_tuple() {
        let iso = IsoWeekDate::new(2020, 53, 5).unwrap();
        let parts: (i32, u32, u32) = iso.into();
        assert_eq!(parts, (2020, 53, 5));
    }

    #[test]
    fn test_ordering() {
        let a = IsoWeekDate::new(2020, 53, 7).unwrap();
        let b = IsoWeekDate::new(2021, 1, 1).unwrap();
        assert!(a < b);
        assert_eq!(a.to_date().unwrap().succ_opt().unwrap(), b.to_date().unwrap());
    }

    #[test]
    fn test_serde() {
        let iso = IsoWeekDate::new(2012, 2, 4).unwrap();
        let json = serde_json::to_string(&iso).unwrap();
        assert_eq!(json, r#"{"year":2012,"week":2,"day":4}"#);

        let parsed: IsoWeekDate = serde_json::from_str(&json).unwrap();
        assert_eq!(iso, parsed);
    }

    #[test]
    fn test_serde_validation() {
        let json = r#"{"year":2021,"week":53,"day":1}"#;
        let result: Result<IsoWeekDate, _> = serde_json::from_str(json);
        assert!(result.is_err());

        let json = r#"{"year":2012,"week":1,"day":9}"#;
        let result: Result<IsoWeekDate, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
