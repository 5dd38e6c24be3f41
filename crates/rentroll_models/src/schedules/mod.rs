//! Monthly rent schedule generation for leased units.
//!
//! This module provides:
//! - [`MonthlyRentRecord`]: One billing period's vacancy status, amount due,
//!   and due date
//! - [`RentSchedule`]: The ordered sequence of records covering an
//!   observation window
//! - [`LeaseTerms`] / [`LeaseTermsBuilder`]: Lease parameters with a
//!   validating builder
//! - [`RentScheduleGenerator`]: Walks an observation window month by month,
//!   emitting records through the vacancy and occupancy phases
//!
//! # Examples
//!
//! ```
//! use rentroll_core::types::Date;
//! use rentroll_models::schedules::{LeaseTerms, RentScheduleGenerator};
//!
//! // Unit vacant through March, lease starting mid-April
//! let terms = LeaseTerms::builder()
//!     .base_monthly_rent(100.0)
//!     .lease_start(Date::from_ymd(2023, 4, 11).unwrap())
//!     .rent_due_day(3)
//!     .rate_change_frequency(1)
//!     .rate_change(-0.10)
//!     .build()
//!     .unwrap();
//!
//! let schedule = RentScheduleGenerator::new(terms).generate(
//!     Date::from_ymd(2023, 1, 1).unwrap(),
//!     Date::from_ymd(2023, 4, 10).unwrap(),
//! );
//!
//! // Four vacant months, rent decaying 10% each month
//! assert_eq!(schedule.len(), 4);
//! assert!(schedule.records().iter().all(|r| r.vacancy()));
//! assert_eq!(schedule.records()[3].rent_amount(), 72.9);
//! ```

mod error;
mod generator;
mod record;
mod terms;

pub use error::ScheduleError;
pub use generator::RentScheduleGenerator;
pub use record::{MonthlyRentRecord, RentSchedule};
pub use terms::{LeaseTerms, LeaseTermsBuilder};
