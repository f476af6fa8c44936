//! Error types for the Accrue core library.
//!
//! This module defines the error types shared by the value types and the
//! day count conventions, providing structured error handling with context.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Accrual start date is after the accrual end date.
    #[error("Invalid date order: {start} is after {end}")]
    InvalidDateOrder {
        /// The start date that was supplied.
        start: String,
        /// The end date that was supplied.
        end: String,
    },

    /// A day count identifier outside the closed enumeration.
    ///
    /// Indicates a configuration defect upstream (an instrument record
    /// referencing a convention this engine does not know). Fatal, never
    /// retried.
    #[error("Unknown day count convention: '{identifier}'")]
    UnknownConvention {
        /// The identifier that failed to resolve.
        identifier: String,
    },

    /// A periodicity identifier outside the closed enumeration.
    #[error("Unknown periodicity: '{identifier}'")]
    UnknownPeriodicity {
        /// The identifier that failed to resolve.
        identifier: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid date order error.
    #[must_use]
    pub fn invalid_date_order(start: impl ToString, end: impl ToString) -> Self {
        Self::InvalidDateOrder {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    /// Creates an unknown convention error.
    #[must_use]
    pub fn unknown_convention(identifier: impl Into<String>) -> Self {
        Self::UnknownConvention {
            identifier: identifier.into(),
        }
    }

    /// Creates an unknown periodicity error.
    #[must_use]
    pub fn unknown_periodicity(identifier: impl Into<String>) -> Self {
        Self::UnknownPeriodicity {
            identifier: identifier.into(),
        }
    }
}
