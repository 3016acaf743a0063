//! Fallible total-ordering completion.
//!
//! Types whose comparisons can fail implement only [`TryOrd::try_lt`] and
//! [`TryOrd::try_eq`]; the other relational operators are provided in terms
//! of those two, so all six always agree with each other.

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveDateTime};

use crate::{DateError, PartialDate};

/// Comparison that may fail before an ordering can be decided.
pub trait TryOrd<Rhs: ?Sized = Self> {
    type Error;

    /// `self < other`
    ///
    /// # Errors
    /// Returns `Self::Error` if the operands cannot be compared.
    fn try_lt(&self, other: &Rhs) -> Result<bool, Self::Error>;

    /// `self == other`
    ///
    /// # Errors
    /// Returns `Self::Error` if the operands cannot be compared.
    fn try_eq(&self, other: &Rhs) -> Result<bool, Self::Error>;

    /// `self <= other`
    ///
    /// # Errors
    /// Returns `Self::Error` if the operands cannot be compared.
    fn try_le(&self, other: &Rhs) -> Result<bool, Self::Error> {
        Ok(self.try_lt(other)? || self.try_eq(other)?)
    }

    /// `self > other`
    ///
    /// # Errors
    /// Returns `Self::Error` if the operands cannot be compared.
    fn try_gt(&self, other: &Rhs) -> Result<bool, Self::Error> {
        Ok(!self.try_le(other)?)
    }

    /// `self >= other`
    ///
    /// # Errors
    /// Returns `Self::Error` if the operands cannot be compared.
    fn try_ge(&self, other: &Rhs) -> Result<bool, Self::Error> {
        Ok(!self.try_lt(other)?)
    }

    /// `self != other`
    ///
    /// # Errors
    /// Returns `Self::Error` if the operands cannot be compared.
    fn try_ne(&self, other: &Rhs) -> Result<bool, Self::Error> {
        Ok(!self.try_eq(other)?)
    }

    /// Three-way comparison
    ///
    /// # Errors
    /// Returns `Self::Error` if the operands cannot be compared.
    fn try_cmp(&self, other: &Rhs) -> Result<Ordering, Self::Error> {
        if self.try_lt(other)? {
            Ok(Ordering::Less)
        } else if self.try_eq(other)? {
            Ok(Ordering::Equal)
        } else {
            Ok(Ordering::Greater)
        }
    }
}

// Partial dates only compare against complete calendar values; comparing two
// partial dates is unsupported, so there is no `TryOrd<PartialDate> for PartialDate`.

impl TryOrd<NaiveDate> for PartialDate {
    type Error = DateError;

    fn try_lt(&self, other: &NaiveDate) -> Result<bool, DateError> {
        Ok(self.to_date()? < *other)
    }

    fn try_eq(&self, other: &NaiveDate) -> Result<bool, DateError> {
        Ok(self.to_date()? == *other)
    }
}

impl TryOrd<NaiveDateTime> for PartialDate {
    type Error = DateError;

    fn try_lt(&self, other: &NaiveDateTime) -> Result<bool, DateError> {
        Ok(self.to_datetime()? < *other)
    }

    fn try_eq(&self, other: &NaiveDateTime) -> Result<bool, DateError> {
        Ok(self.to_datetime()? == *other)
    }
}

impl TryOrd<PartialDate> for NaiveDate {
    type Error = DateError;

    fn try_lt(&self, other: &PartialDate) -> Result<bool, DateError> {
        Ok(*self < other.to_date()?)
    }

    fn try_eq(&self, other: &PartialDate) -> Result<bool, DateError> {
        Ok(*self == other.to_date()?)
    }
}

impl TryOrd<PartialDate> for NaiveDateTime {
    type Error = DateError;

    fn try_lt(&self, other: &PartialDate) -> Result<bool, DateError> {
        Ok(*self < other.to_datetime()?)
    }

    fn try_eq(&self, other: &PartialDate) -> Result<bool, DateError> {
        Ok(*self == other.to_datetime()?)
    }
}

// The std operators see an incomplete or invalid partial date as unequal to
// and unordered with every date. Use `TryOrd` to get the error instead.

impl PartialEq<NaiveDate> for PartialDate {
    fn eq(&self, other: &NaiveDate) -> bool {
        self.try_eq(other).unwrap_or(false)
    }
}

impl PartialOrd<NaiveDate> for PartialDate {
    fn partial_cmp(&self, other: &NaiveDate) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl PartialEq<PartialDate> for NaiveDate {
    fn eq(&self, other: &PartialDate) -> bool {
        self.try_eq(other).unwrap_or(false)
    }
}

impl PartialOrd<PartialDate> for NaiveDate {
    fn partial_cmp(&self, other: &PartialDate) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}
