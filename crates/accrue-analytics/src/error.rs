//! Unified error types for the analytics layer.
//!
//! Lower-layer errors (date arithmetic, day count dispatch, solver
//! failures) lift into [`AnalyticsError`] via `From`, so callers at the
//! application boundary catch a single type and translate it into their
//! own error representation.

use thiserror::Error;

use accrue_core::error::CoreError;
use accrue_math::error::MathError;

/// Unified error type for all analytics operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalyticsError {
    /// Invalid input parameter
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Error from the core date/day-count layer
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Error from the numerical solver layer
    #[error(transparent)]
    Math(#[from] MathError),
}

/// Result type alias for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_lifts() {
        let err: AnalyticsError = CoreError::unknown_convention("ACT/999").into();
        assert!(err.to_string().contains("ACT/999"));
    }

    #[test]
    fn test_math_error_lifts() {
        let err: AnalyticsError = MathError::convergence_failed(100, 0.5).into();
        assert!(err.to_string().contains("100 iterations"));
    }

    #[test]
    fn test_invalid_input_display() {
        let err = AnalyticsError::InvalidInput("day count must be positive".to_string());
        assert!(err.to_string().contains("invalid input"));
    }
}
