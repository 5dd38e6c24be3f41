//! Lease terms definition and builder.

use super::error::ScheduleError;
use rentroll_core::types::Date;
use std::fmt;

/// The billing parameters of one lease.
///
/// Groups the unit's base rent, the lease start date, the day of each month
/// rent falls due, and the periodic rate change (frequency in months and
/// signed fractional rate, e.g. `0.10` for +10%).
///
/// `new` performs no validation; the documented ranges are preconditions the
/// caller upholds. Use [`LeaseTerms::builder`] for validated construction.
///
/// # Examples
///
/// ```
/// use rentroll_core::types::Date;
/// use rentroll_models::schedules::LeaseTerms;
///
/// let terms = LeaseTerms::builder()
///     .base_monthly_rent(100.0)
///     .lease_start(Date::from_ymd(2023, 1, 1).unwrap())
///     .rent_due_day(15)
///     .rate_change_frequency(2)
///     .rate_change(0.10)
///     .build()
///     .unwrap();
///
/// assert_eq!(terms.rent_due_day(), 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeaseTerms {
    /// Base monthly rent at lease signing (non-negative).
    base_monthly_rent: f64,
    /// The date the tenant's lease starts.
    lease_start: Date,
    /// Day of each month on which rent is due (1-31).
    rent_due_day: u32,
    /// How often the rent rate changes, in months (at least 1).
    rate_change_frequency: u32,
    /// Signed fractional rate change, positive for increase.
    rate_change: f64,
}

impl LeaseTerms {
    /// Creates lease terms from raw components without validation.
    ///
    /// # Arguments
    ///
    /// * `base_monthly_rent` - Base monthly rent, expected non-negative
    /// * `lease_start` - Date the lease starts
    /// * `rent_due_day` - Day of month rent is due, expected in 1-31
    /// * `rate_change_frequency` - Months between rate changes, expected >= 1
    /// * `rate_change` - Signed fractional rate, e.g. `0.10` or `-0.10`
    ///
    /// Values outside the expected ranges are not rejected here and lead to
    /// unspecified schedules; validate with the builder when inputs are not
    /// already trusted.
    #[inline]
    pub fn new(
        base_monthly_rent: f64,
        lease_start: Date,
        rent_due_day: u32,
        rate_change_frequency: u32,
        rate_change: f64,
    ) -> Self {
        Self {
            base_monthly_rent,
            lease_start,
            rent_due_day,
            rate_change_frequency,
            rate_change,
        }
    }

    /// Returns a builder with no fields set.
    pub fn builder() -> LeaseTermsBuilder {
        LeaseTermsBuilder::new()
    }

    /// Returns the base monthly rent.
    #[inline]
    pub fn base_monthly_rent(&self) -> f64 {
        self.base_monthly_rent
    }

    /// Returns the lease start date.
    #[inline]
    pub fn lease_start(&self) -> Date {
        self.lease_start
    }

    /// Returns the day of each month rent is due.
    #[inline]
    pub fn rent_due_day(&self) -> u32 {
        self.rent_due_day
    }

    /// Returns the rate change frequency in months.
    #[inline]
    pub fn rate_change_frequency(&self) -> u32 {
        self.rate_change_frequency
    }

    /// Returns the signed fractional rate change.
    #[inline]
    pub fn rate_change(&self) -> f64 {
        self.rate_change
    }
}

impl fmt::Display for LeaseTerms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lease(start {}, base {:.2}, due day {}, {:+.2}% every {}m)",
            self.lease_start,
            self.base_monthly_rent,
            self.rent_due_day,
            self.rate_change * 100.0,
            self.rate_change_frequency
        )
    }
}

/// Builder for constructing validated lease terms.
///
/// Required fields: base rent and lease start. Rent due day defaults to the
/// 1st, rate change frequency to 1 month, rate change to 0.
///
/// # Examples
///
/// ```
/// use rentroll_core::types::Date;
/// use rentroll_models::schedules::LeaseTerms;
///
/// let terms = LeaseTerms::builder()
///     .base_monthly_rent(50.0)
///     .lease_start(Date::from_ymd(2023, 1, 1).unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(terms.rent_due_day(), 1);
/// assert_eq!(terms.rate_change(), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct LeaseTermsBuilder {
    base_monthly_rent: Option<f64>,
    lease_start: Option<Date>,
    rent_due_day: u32,
    rate_change_frequency: u32,
    rate_change: f64,
}

impl Default for LeaseTermsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LeaseTermsBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_monthly_rent: None,
            lease_start: None,
            rent_due_day: 1,
            rate_change_frequency: 1,
            rate_change: 0.0,
        }
    }

    /// Sets the base monthly rent.
    pub fn base_monthly_rent(mut self, rent: f64) -> Self {
        self.base_monthly_rent = Some(rent);
        self
    }

    /// Sets the lease start date.
    pub fn lease_start(mut self, date: Date) -> Self {
        self.lease_start = Some(date);
        self
    }

    /// Sets the day of each month rent is due.
    pub fn rent_due_day(mut self, day: u32) -> Self {
        self.rent_due_day = day;
        self
    }

    /// Sets the rate change frequency in months.
    pub fn rate_change_frequency(mut self, months: u32) -> Self {
        self.rate_change_frequency = months;
        self
    }

    /// Sets the signed fractional rate change.
    pub fn rate_change(mut self, rate: f64) -> Self {
        self.rate_change = rate;
        self
    }

    /// Builds the lease terms.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Base rent or lease start is missing
    /// - Base rent is negative
    /// - Rent due day is outside 1-31
    /// - Rate change frequency is zero
    pub fn build(self) -> Result<LeaseTerms, ScheduleError> {
        let base_monthly_rent = self
            .base_monthly_rent
            .ok_or(ScheduleError::MissingField {
                field: "base_monthly_rent",
            })?;
        let lease_start = self.lease_start.ok_or(ScheduleError::MissingField {
            field: "lease_start",
        })?;

        if base_monthly_rent < 0.0 {
            return Err(ScheduleError::NegativeBaseRent {
                rent: base_monthly_rent,
            });
        }
        if !(1..=31).contains(&self.rent_due_day) {
            return Err(ScheduleError::InvalidDueDay {
                day: self.rent_due_day,
            });
        }
        if self.rate_change_frequency == 0 {
            return Err(ScheduleError::InvalidFrequency {
                months: self.rate_change_frequency,
            });
        }

        Ok(LeaseTerms {
            base_monthly_rent,
            lease_start,
            rent_due_day: self.rent_due_day,
            rate_change_frequency: self.rate_change_frequency,
            rate_change: self.rate_change,
        })
    }
}
