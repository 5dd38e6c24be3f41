//! Monthly billing record and schedule types.

use rentroll_core::types::Date;
use std::fmt;

/// One billing period's outcome for a leased unit.
///
/// Carries:
/// - Vacancy status for the period
/// - Amount due, rounded to two decimal places
/// - The date the amount falls due
///
/// # Examples
///
/// ```
/// use rentroll_core::types::Date;
/// use rentroll_models::schedules::MonthlyRentRecord;
///
/// let record = MonthlyRentRecord::new(
///     false,
///     110.0,
///     Date::from_ymd(2023, 2, 1).unwrap(),
/// );
///
/// assert!(!record.vacancy());
/// assert_eq!(record.rent_amount(), 110.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthlyRentRecord {
    /// Whether the unit was unoccupied for this period.
    vacancy: bool,
    /// Amount due, rounded to two decimal places.
    rent_amount: f64,
    /// The date this period's rent is due.
    rent_due_date: Date,
}

impl MonthlyRentRecord {
    /// Creates a new record from its components.
    #[inline]
    pub fn new(vacancy: bool, rent_amount: f64, rent_due_date: Date) -> Self {
        Self {
            vacancy,
            rent_amount,
            rent_due_date,
        }
    }

    /// Returns whether the unit was unoccupied for this period.
    #[inline]
    pub fn vacancy(&self) -> bool {
        self.vacancy
    }

    /// Returns the amount due for this period.
    #[inline]
    pub fn rent_amount(&self) -> f64 {
        self.rent_amount
    }

    /// Returns the date this period's rent is due.
    #[inline]
    pub fn rent_due_date(&self) -> Date {
        self.rent_due_date
    }
}

impl fmt::Display for MonthlyRentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.2} ({})",
            self.rent_due_date,
            self.rent_amount,
            if self.vacancy { "vacant" } else { "occupied" }
        )
    }
}

/// The ordered sequence of monthly billing records for one observation
/// window.
///
/// Records are chronologically increasing by due date. A schedule may be
/// empty: an inverted observation window is a defined empty-result case, not
/// an error.
///
/// # Examples
///
/// ```
/// use rentroll_core::types::Date;
/// use rentroll_models::schedules::{MonthlyRentRecord, RentSchedule};
///
/// let schedule = RentSchedule::new(vec![
///     MonthlyRentRecord::new(true, 100.0, Date::from_ymd(2023, 1, 1).unwrap()),
///     MonthlyRentRecord::new(true, 90.0, Date::from_ymd(2023, 2, 1).unwrap()),
/// ]);
///
/// assert_eq!(schedule.len(), 2);
/// assert_eq!(
///     schedule.first_due_date(),
///     Some(Date::from_ymd(2023, 1, 1).unwrap()),
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RentSchedule {
    /// All records in the schedule.
    records: Vec<MonthlyRentRecord>,
}

impl RentSchedule {
    /// Creates a schedule from a list of records.
    #[inline]
    pub fn new(records: Vec<MonthlyRentRecord>) -> Self {
        Self { records }
    }

    /// Returns the records in the schedule.
    #[inline]
    pub fn records(&self) -> &[MonthlyRentRecord] {
        &self.records
    }

    /// Returns the number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the schedule is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns an iterator over the records.
    pub fn iter(&self) -> impl Iterator<Item = &MonthlyRentRecord> {
        self.records.iter()
    }

    /// Returns the earliest due date, if any records exist.
    #[inline]
    pub fn first_due_date(&self) -> Option<Date> {
        self.records.first().map(|r| r.rent_due_date())
    }

    /// Returns the latest due date, if any records exist.
    #[inline]
    pub fn last_due_date(&self) -> Option<Date> {
        self.records.last().map(|r| r.rent_due_date())
    }
}

impl IntoIterator for RentSchedule {
    type Item = MonthlyRentRecord;
    type IntoIter = std::vec::IntoIter<MonthlyRentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
