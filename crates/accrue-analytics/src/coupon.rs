//! Coupon amount calculation.
//!
//! Computes the cash amount accrued between two arbitrary dates,
//! applying the schedule's day count convention directly to the supplied
//! pair (no period stepping) and scaling by the nominal coupon size.

use rust_decimal::Decimal;

use accrue_core::daycounts::{AccrualContext, DayCountConvention};
use accrue_core::error::CoreError;
use accrue_core::types::{AccrualSchedule, Date};

use crate::error::AnalyticsResult;

/// Calculates the coupon amount accrued between `start` and `end`.
///
/// With `unit_mode` the coupon size is forced to one, yielding a ratio
/// instead of a cash amount.
///
/// ACT/ACT ICMA pays the full-period coupon once the period is reached,
/// so its amount is `size / frequency` independent of the day count
/// (frequency 0 divides by one; frequencies above monthly yield zero).
/// Every other convention multiplies the size by its own factor over the
/// supplied pair, including the 30/360 end-of-month arithmetic and the
/// BD/252 weekend exclusion. The maturity date is forwarded for the
/// 30/360 ISDA and German February rule.
///
/// Returns `Ok(None)` when the schedule is missing its convention or
/// periodicity - no calculation is possible yet.
///
/// # Errors
///
/// Returns `CoreError::InvalidDateOrder` (lifted into
/// `AnalyticsError`) when `start > end`; the pair is rejected before
/// any arithmetic.
pub fn coupon_amount(
    schedule: &AccrualSchedule,
    start: Date,
    end: Date,
    maturity: Option<Date>,
    unit_mode: bool,
) -> AnalyticsResult<Option<Decimal>> {
    if start > end {
        return Err(CoreError::invalid_date_order(start, end).into());
    }

    let (Some(convention), Some(periodicity)) = (schedule.day_count, schedule.periodicity) else {
        return Ok(None);
    };

    let size = if unit_mode {
        Decimal::ONE
    } else {
        schedule.accrual_size
    };

    let amount = match convention {
        DayCountConvention::ActActIcma => {
            let freq = periodicity.frequency_per_year();
            if freq > 12 {
                Decimal::ZERO
            } else {
                size / Decimal::from(freq.max(1))
            }
        }
        _ => {
            let ctx = AccrualContext::with_maturity(maturity);
            size * convention.year_fraction(start, end, &ctx)?
        }
    };

    Ok(Some(amount))
}
