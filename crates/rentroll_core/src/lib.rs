//! # rentroll_core: Foundation Types for the Rentroll Library
//!
//! ## Layer 1 (Foundation) Role
//!
//! rentroll_core serves as the bottom layer of the two-layer architecture,
//! providing:
//! - Calendar date type with billing-cycle arithmetic (`types::time`)
//! - Currency rounding helpers (`math::rounding`)
//! - Error types: `DateError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other rentroll_* crates, with minimal
//! external dependencies:
//! - chrono: Date arithmetic
//! - thiserror: Error derive support
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use rentroll_core::math::rounding::round_to_cents;
//! use rentroll_core::types::Date;
//!
//! // Date operations
//! let due = Date::from_ymd(2023, 1, 31).unwrap();
//! let next = due.add_months(1);
//! assert_eq!(next, Date::from_ymd(2023, 3, 3).unwrap());
//!
//! // Currency rounding
//! let amount = round_to_cents(100.0 * (14.0 / 30.0));
//! assert_eq!(amount, 46.67);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `Date`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
