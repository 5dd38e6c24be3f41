//! Rent schedule generation over an observation window.

use super::record::{MonthlyRentRecord, RentSchedule};
use super::terms::LeaseTerms;
use rentroll_core::math::rounding::round_to_cents;
use rentroll_core::types::Date;

/// Days in the flat month used to prorate the first occupied period,
/// regardless of the calendar length of the lease-start month.
const PRORATION_MONTH_DAYS: f64 = 30.0;

/// Walking state threaded through consecutive billing months.
#[derive(Debug, Clone, Copy)]
struct BillingCursor {
    /// Due date of the next record to emit.
    due_date: Date,
    /// Running rent, re-rounded after every emitted month.
    rent: f64,
    /// Whole months since the rent rate last changed.
    months_since_rate_change: u32,
}

/// Generates the monthly billing records for a leased unit across an
/// observation window.
///
/// A window opening before the lease produces one vacant record per whole
/// month until the lease starts; the partial first occupied month is
/// prorated and anchored to the lease start date itself; every following
/// occupied month falls due on the lease's billing day. Rent rate changes
/// become due every `rate_change_frequency` months and apply only when
/// directionally consistent with vacancy: decreases while vacant, increases
/// while occupied.
///
/// Generation is a pure function of the terms and the window. It never
/// fails; a window whose start is after its end yields an empty schedule.
///
/// # Examples
///
/// ```
/// use rentroll_core::types::Date;
/// use rentroll_models::schedules::{LeaseTerms, RentScheduleGenerator};
///
/// let terms = LeaseTerms::builder()
///     .base_monthly_rent(100.0)
///     .lease_start(Date::from_ymd(2023, 1, 1).unwrap())
///     .rent_due_day(15)
///     .rate_change_frequency(1)
///     .rate_change(0.10)
///     .build()
///     .unwrap();
///
/// let schedule = RentScheduleGenerator::new(terms).generate(
///     Date::from_ymd(2023, 1, 1).unwrap(),
///     Date::from_ymd(2023, 3, 31).unwrap(),
/// );
///
/// // Prorated first month, then whole months on the 15th.
/// let amounts: Vec<f64> = schedule.iter().map(|r| r.rent_amount()).collect();
/// assert_eq!(amounts, vec![46.67, 100.0, 110.0, 121.0]);
/// ```
#[derive(Debug, Clone)]
pub struct RentScheduleGenerator {
    terms: LeaseTerms,
}

impl RentScheduleGenerator {
    /// Creates a generator for the given lease terms.
    pub fn new(terms: LeaseTerms) -> Self {
        Self { terms }
    }

    /// Returns the lease terms this generator walks.
    pub fn terms(&self) -> &LeaseTerms {
        &self.terms
    }

    /// Generates the billing records covering `window_start..=window_end`.
    ///
    /// Returns an empty schedule when `window_start > window_end`; this is a
    /// defined empty-result case, not an error. The vacancy phase is bounded
    /// by the lease start, not the window end, so a lease starting after the
    /// window closes still bills every vacant month up to the lease start.
    pub fn generate(&self, window_start: Date, window_end: Date) -> RentSchedule {
        let mut records = Vec::new();

        if window_start > window_end {
            return RentSchedule::new(records);
        }

        let lease_start = self.terms.lease_start();
        let mut cursor = BillingCursor {
            due_date: window_start,
            rent: self.terms.base_monthly_rent(),
            months_since_rate_change: 0,
        };

        if window_start < lease_start {
            // One record per whole month while the unit is vacant.
            while cursor.due_date < lease_start {
                let (record, next) = self.advance_one_month(cursor, true);
                records.push(record);
                cursor = next;
            }
            // Occupancy runs its own rate-change clock.
            cursor.months_since_rate_change = 0;
        }

        if window_end > lease_start {
            // Partial first occupied month, anchored to the lease start
            // rather than the billing day.
            let first_amount = round_to_cents(cursor.rent * self.first_month_pay_rate());
            records.push(MonthlyRentRecord::new(false, first_amount, lease_start));

            cursor.due_date = lease_start.with_day(self.terms.rent_due_day());
            if lease_start >= cursor.due_date {
                // The lease began on or after this month's billing day, so
                // the prorated month already consumed one billing cycle.
                cursor.due_date = cursor.due_date.add_months(1);
                cursor.months_since_rate_change += 1;
            }

            while cursor.due_date < window_end {
                let (record, next) = self.advance_one_month(cursor, false);
                records.push(record);
                cursor = next;
            }
        }

        RentSchedule::new(records)
    }

    /// Emits one whole billing month and steps the cursor one calendar month
    /// forward.
    fn advance_one_month(
        &self,
        cursor: BillingCursor,
        vacancy: bool,
    ) -> (MonthlyRentRecord, BillingCursor) {
        let mut rent = cursor.rent;
        let mut months_since_rate_change = cursor.months_since_rate_change;

        if months_since_rate_change >= self.terms.rate_change_frequency() {
            let rate = self.terms.rate_change();
            // Decreases apply only while vacant, increases only while
            // occupied. An inapplicable change leaves the clock running, to
            // be re-checked next month.
            if (vacancy && rate < 0.0) || (!vacancy && rate > 0.0) {
                rent *= 1.0 + rate;
                months_since_rate_change = 0;
            }
        }

        // The rounded amount is also carried forward as the running rent.
        let rent = round_to_cents(rent);
        let record = MonthlyRentRecord::new(vacancy, rent, cursor.due_date);

        let next = BillingCursor {
            due_date: cursor.due_date.add_months(1),
            rent,
            months_since_rate_change: months_since_rate_change + 1,
        };
        (record, next)
    }

    /// Pay rate for the partial month between lease start and the first
    /// billing day, on a flat 30-day basis.
    fn first_month_pay_rate(&self) -> f64 {
        let lease_day = f64::from(self.terms.lease_start().day());
        let due_day = f64::from(self.terms.rent_due_day());
        if lease_day < due_day {
            (due_day - lease_day) / PRORATION_MONTH_DAYS
        } else {
            1.0 - (lease_day - due_day) / PRORATION_MONTH_DAYS
        }
    }
}
