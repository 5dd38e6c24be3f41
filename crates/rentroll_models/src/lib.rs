//! # Rentroll Models (L2: Business Logic)
//!
//! Lease terms and monthly rent schedule generation.
//!
//! This crate provides:
//! - Lease parameter definitions with a validating builder
//! - Monthly billing record and schedule types
//! - The rent schedule generator: vacancy phase, prorated first occupied
//!   month, and whole occupied months with directional rate changes
//!
//! ## Design Principles
//!
//! - **Immutable walking state** threaded through the month step function
//! - **Builder pattern** for ergonomic lease construction with validation
//! - **Total generation**: `generate` never fails; an inverted observation
//!   window yields an empty schedule
//!
//! # Examples
//!
//! ```
//! use rentroll_core::types::Date;
//! use rentroll_models::schedules::{LeaseTerms, RentScheduleGenerator};
//!
//! let terms = LeaseTerms::builder()
//!     .base_monthly_rent(100.0)
//!     .lease_start(Date::from_ymd(2023, 1, 1).unwrap())
//!     .rent_due_day(1)
//!     .rate_change_frequency(1)
//!     .rate_change(0.10)
//!     .build()
//!     .unwrap();
//!
//! let generator = RentScheduleGenerator::new(terms);
//! let schedule = generator.generate(
//!     Date::from_ymd(2023, 1, 1).unwrap(),
//!     Date::from_ymd(2023, 3, 31).unwrap(),
//! );
//!
//! assert_eq!(schedule.len(), 3);
//! assert_eq!(schedule.records()[1].rent_amount(), 110.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod schedules;
