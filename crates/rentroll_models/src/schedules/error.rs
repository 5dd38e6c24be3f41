//! Lease construction error types.

use thiserror::Error;

/// Errors that can occur while building lease terms.
///
/// These are construction-time failures only; schedule generation itself is
/// total and never returns an error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScheduleError {
    /// Missing required field in builder.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Rent due day outside the 1-31 calendar range.
    #[error("Rent due day {day} must be between 1 and 31")]
    InvalidDueDay {
        /// The rejected day-of-month.
        day: u32,
    },

    /// Rate change frequency below one month.
    #[error("Rate change frequency must be at least 1 month, got {months}")]
    InvalidFrequency {
        /// The rejected frequency in months.
        months: u32,
    },

    /// Base monthly rent below zero.
    #[error("Base monthly rent must be non-negative, got {rent}")]
    NegativeBaseRent {
        /// The rejected rent amount.
        rent: f64,
    },
}
