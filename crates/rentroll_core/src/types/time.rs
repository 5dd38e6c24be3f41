//! Calendar date type for billing-cycle arithmetic.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - Month arithmetic that preserves the day-of-month, spilling excess days
//!   forward when the target month is shorter
//!
//! # Examples
//!
//! ```
//! use rentroll_core::types::time::Date;
//!
//! let date = Date::from_ymd(2023, 1, 31).unwrap();
//!
//! // February 2023 has 28 days; the three excess days spill into March.
//! assert_eq!(date.add_months(1), Date::from_ymd(2023, 3, 3).unwrap());
//! ```

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 serialisation, standard date comparison, and the
/// field-wise month arithmetic used to walk billing cycles: adding a month
/// keeps the day-of-month, and when the target month has fewer days the
/// excess days roll forward into the following month. Dates are never
/// clamped to end-of-month.
///
/// # Examples
///
/// ```
/// use rentroll_core::types::time::Date;
///
/// // Create from year, month, day
/// let date = Date::from_ymd(2023, 6, 15).unwrap();
/// assert_eq!(date.year(), 2023);
/// assert_eq!(date.month(), 6);
/// assert_eq!(date.day(), 15);
///
/// // Parse from ISO 8601 string
/// let parsed: Date = "2023-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// // Calculate days between dates
/// let start = Date::from_ymd(2023, 1, 1).unwrap();
/// let end = Date::from_ymd(2023, 1, 11).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Arguments
    /// * `year` - Year (e.g., 2023)
    /// * `month` - Month (1-12)
    /// * `day` - Day (1-31, depending on month)
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use rentroll_core::types::time::Date;
    ///
    /// // Valid date
    /// let date = Date::from_ymd(2023, 6, 15).unwrap();
    ///
    /// // Invalid date returns error
    /// let invalid = Date::from_ymd(2023, 2, 30);
    /// assert!(invalid.is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Examples
    ///
    /// ```
    /// use rentroll_core::types::time::Date;
    ///
    /// let date = Date::parse("2023-06-15").unwrap();
    /// assert_eq!(date.year(), 2023);
    ///
    /// let invalid = Date::parse("not-a-date");
    /// assert!(invalid.is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(e.to_string()))
    }

    /// Returns the underlying NaiveDate.
    ///
    /// Use this method when you need access to chrono's full API.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns a new date with the given number of calendar months added,
    /// keeping the day-of-month.
    ///
    /// When the target month is shorter than the day-of-month, the excess
    /// days spill forward into the following month instead of clamping to
    /// end-of-month. This mirrors field-wise month increments: the month
    /// field moves, the day field stays, and the out-of-range date then
    /// normalises forward.
    ///
    /// # Panics
    /// Panics if the resulting date exceeds chrono's representable range.
    ///
    /// # Examples
    ///
    /// ```
    /// use rentroll_core::types::time::Date;
    ///
    /// let due = Date::from_ymd(2023, 1, 15).unwrap();
    /// assert_eq!(due.add_months(1), Date::from_ymd(2023, 2, 15).unwrap());
    ///
    /// // Jan 31 + 1 month: February 2023 has 28 days, so 3 days spill into March.
    /// let eom = Date::from_ymd(2023, 1, 31).unwrap();
    /// assert_eq!(eom.add_months(1), Date::from_ymd(2023, 3, 3).unwrap());
    ///
    /// // In a leap year February has 29 days, so only 2 days spill.
    /// let leap = Date::from_ymd(2024, 1, 31).unwrap();
    /// assert_eq!(leap.add_months(1), Date::from_ymd(2024, 3, 2).unwrap());
    /// ```
    pub fn add_months(self, months: u32) -> Self {
        let total = self.0.month0() + months;
        let year = self.0.year() + (total / 12) as i32;
        let month = total % 12 + 1;
        Date(resolve_day_overflow(year, month, self.0.day()))
    }

    /// Returns a new date in the same month with the day-of-month replaced.
    ///
    /// A day beyond the end of the month spills forward into the following
    /// month, with the same normalisation rule as [`Date::add_months`].
    ///
    /// # Panics
    /// Panics if `day` is 0; callers supply a day-of-month of at least 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use rentroll_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2023, 4, 10).unwrap();
    /// assert_eq!(date.with_day(3), Date::from_ymd(2023, 4, 3).unwrap());
    ///
    /// // April has 30 days; day 31 normalises to May 1.
    /// assert_eq!(date.with_day(31), Date::from_ymd(2023, 5, 1).unwrap());
    /// ```
    pub fn with_day(self, day: u32) -> Self {
        Date(resolve_day_overflow(self.0.year(), self.0.month(), day))
    }
}

/// Builds a date from components, rolling an overflowing day forward.
///
/// The spill is at most three days (day <= 31, shortest month 28 days), so
/// the normalised day always fits in the following month.
fn resolve_day_overflow(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => {
            let in_month = days_in_month(year, month);
            let (year, month) = if month == 12 {
                (year + 1, 1)
            } else {
                (year, month + 1)
            };
            NaiveDate::from_ymd_opt(year, month, day - in_month)
                .expect("spilled day fits in the following month")
        }
    }
}

/// Number of days in the given month, leap-aware via chrono.
fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .expect("first of month is always valid")
        .pred_opt()
        .expect("predecessor of first of month exists")
        .day()
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
