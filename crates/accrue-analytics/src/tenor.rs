//! Tenor mapping.
//!
//! Maps an observed day count between coupons to the nearest standard
//! period, for callers reconstructing a schedule from market data.

use accrue_core::daycounts::DayCountConvention;
use accrue_core::types::Tenor;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Maps a day count between coupons to the nearest standard tenor.
///
/// The candidate table covers one year down to a fortnight, each
/// expressed in the convention's implied day units (a 360-day year for
/// the 30/360 family, 365 otherwise). The nearest candidate wins; exact
/// midpoints resolve to the earlier (coarser) table entry.
///
/// # Errors
///
/// Returns `AnalyticsError::InvalidInput` for a day count of zero or
/// less.
///
/// # Example
///
/// ```rust
/// use accrue_analytics::nearest_tenor;
/// use accrue_core::daycounts::DayCountConvention;
/// use accrue_core::types::Tenor;
///
/// let tenor = nearest_tenor(172, DayCountConvention::ThirtyE360).unwrap();
/// assert_eq!(tenor, Tenor::SixMonths);
/// ```
pub fn nearest_tenor(days: i64, convention: DayCountConvention) -> AnalyticsResult<Tenor> {
    if days <= 0 {
        return Err(AnalyticsError::InvalidInput(format!(
            "day count between coupons must be positive, got {days}"
        )));
    }

    let year = f64::from(convention.implied_year_length());
    let candidates = [
        (Tenor::OneYear, year),
        (Tenor::SixMonths, year / 2.0),
        (Tenor::ThreeMonths, year / 4.0),
        (Tenor::TwoMonths, year / 6.0),
        (Tenor::OneMonth, year / 12.0),
        (Tenor::TwentyEightDays, 28.0),
        (Tenor::Fortnight, 14.0),
    ];

    let target = days as f64;
    let mut best = candidates[0];
    for candidate in candidates {
        // Strict comparison keeps the earlier entry on a midpoint tie
        if (candidate.1 - target).abs() < (best.1 - target).abs() {
            best = candidate;
        }
    }

    Ok(best.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semiannual_boundary() {
        assert_eq!(
            nearest_tenor(172, DayCountConvention::ThirtyE360).unwrap(),
            Tenor::SixMonths
        );
    }

    #[test]
    fn test_year_length_follows_convention() {
        // 340 days: nearest to 360 on a 30/360 basis, but also nearest
        // to 365 on an actual basis
        assert_eq!(
            nearest_tenor(340, DayCountConvention::Thirty360US).unwrap(),
            Tenor::OneYear
        );
        assert_eq!(
            nearest_tenor(340, DayCountConvention::Act365).unwrap(),
            Tenor::OneYear
        );

        // 270 sits exactly between 180 and 360 on a 360 basis; the
        // coarser entry wins the tie
        assert_eq!(
            nearest_tenor(270, DayCountConvention::Thirty360US).unwrap(),
            Tenor::OneYear
        );
    }

    #[test]
    fn test_short_tenors() {
        assert_eq!(
            nearest_tenor(29, DayCountConvention::Act365).unwrap(),
            Tenor::TwentyEightDays
        );
        assert_eq!(
            nearest_tenor(30, DayCountConvention::Thirty360US).unwrap(),
            Tenor::OneMonth
        );
        assert_eq!(
            nearest_tenor(15, DayCountConvention::Act365).unwrap(),
            Tenor::Fortnight
        );
        assert_eq!(
            nearest_tenor(1, DayCountConvention::Act365).unwrap(),
            Tenor::Fortnight
        );
    }

    #[test]
    fn test_quarterly_and_bimonthly() {
        assert_eq!(
            nearest_tenor(91, DayCountConvention::Act365).unwrap(),
            Tenor::ThreeMonths
        );
        assert_eq!(
            nearest_tenor(61, DayCountConvention::Act365).unwrap(),
            Tenor::TwoMonths
        );
    }

    #[test]
    fn test_non_positive_rejected() {
        assert!(matches!(
            nearest_tenor(0, DayCountConvention::Act365),
            Err(AnalyticsError::InvalidInput(_))
        ));
        assert!(matches!(
            nearest_tenor(-14, DayCountConvention::Act365),
            Err(AnalyticsError::InvalidInput(_))
        ));
    }
}
