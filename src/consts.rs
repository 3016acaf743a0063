/// Day of January that always falls in ISO week 1
pub const ISO_WEEK_ANCHOR_DAY: u32 = 4;
/// Day of December that always falls in the last ISO week of its year
pub const ISO_LAST_WEEK_ANCHOR_DAY: u32 = 28;

/// Month number for January
pub const JANUARY: u32 = 1;
/// Month number for February
pub const FEBRUARY: u32 = 2;
/// Month number for December
pub const DECEMBER: u32 = 12;

/// Last day of February in a common year
pub const FEBRUARY_DAYS_COMMON: u32 = 28;
/// Leap day
pub const LEAP_DAY: u32 = 29;

/// Days in one ISO week
pub const DAYS_PER_WEEK: i64 = 7;

/// Number of weeks in a short ISO year
pub const SHORT_ISO_YEAR_WEEKS: u32 = 52;
/// Number of weeks in a long ISO year
pub const LONG_ISO_YEAR_WEEKS: u32 = 53;

/// ISO weekday number for Monday
pub const ISO_MONDAY: u32 = 1;
/// ISO weekday number for Sunday
pub const ISO_SUNDAY: u32 = 7;

/// Default window for `is_recent`, in seconds
pub const DEFAULT_RECENT_WINDOW_SECS: i64 = 60;

/// Arbitrary common (non-leap) year used to compute day-of-year ordinals
pub(crate) const COMMON_REFERENCE_YEAR: i32 = 2003;
/// Ordinal reported for Feb 29, which the common reference year lacks
pub(crate) const LEAP_DAY_ORDINAL: u32 = 60;

/// Rendered in place of a missing partial date component
pub const ABSENT_COMPONENT: &str = "None";
