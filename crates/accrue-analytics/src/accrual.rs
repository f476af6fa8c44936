//! Accrual factor calculation.
//!
//! Locates the coupon period containing the as-of date by advancing the
//! schedule period by period, then delegates the fractional factor to
//! the schedule's day count convention.

use rust_decimal::Decimal;

use accrue_core::daycounts::AccrualContext;
use accrue_core::types::{AccrualSchedule, Date};

use crate::error::AnalyticsResult;

/// The coupon period containing an as-of date.
///
/// `start` is the accrual start of the period (d1), `end` the next
/// scheduled coupon date on or after the as-of date (d3, possibly
/// clamped to maturity).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ResolvedPeriod {
    start: Date,
    end: Date,
    frequency: u32,
}

/// Calculates the fraction of the current coupon period that has
/// elapsed by `as_of`.
///
/// Returns `Ok(None)` when the schedule is missing any of its
/// convention-selecting fields - no calculation is possible yet, which
/// is distinct from a computed zero. Otherwise:
///
/// - frequencies above monthly produce a defined zero factor;
/// - an at-maturity schedule (frequency 0) accrues over a single
///   synthetic annual period anchored one year after the start date;
/// - an as-of date before the period start produces a zero factor.
///
/// # Errors
///
/// Returns an error when period stepping runs off the calendar or the
/// day count dispatch rejects the resolved dates.
///
/// # Example
///
/// ```rust
/// use accrue_analytics::accrual_factor;
/// use accrue_core::daycounts::DayCountConvention;
/// use accrue_core::types::{AccrualSchedule, Date, Periodicity};
/// use rust_decimal_macros::dec;
///
/// let schedule = AccrualSchedule::new(
///     Date::from_ymd(2025, 1, 15).unwrap(),
///     Date::from_ymd(2025, 7, 15).unwrap(),
///     dec!(5.0),
///     DayCountConvention::Act360,
///     Periodicity::SemiAnnual,
/// );
/// let as_of = Date::from_ymd(2025, 4, 15).unwrap();
///
/// let factor = accrual_factor(&schedule, as_of, None).unwrap();
/// assert_eq!(factor, Some(dec!(90) / dec!(360)));
/// ```
pub fn accrual_factor(
    schedule: &AccrualSchedule,
    as_of: Date,
    maturity: Option<Date>,
) -> AnalyticsResult<Option<Decimal>> {
    let (Some(convention), Some(periodicity), Some(start_date), Some(first_payment)) = (
        schedule.day_count,
        schedule.periodicity,
        schedule.start_date,
        schedule.first_payment_date,
    ) else {
        return Ok(None);
    };

    let freq = periodicity.frequency_per_year();

    if freq > 12 {
        // Sub-monthly coupon frequencies are outside the supported
        // domain; a zero factor is the defined result, not an error
        return Ok(Some(Decimal::ZERO));
    }

    let period = if freq == 0 {
        ResolvedPeriod {
            start: start_date,
            end: start_date.add_years(1)?,
            frequency: 1,
        }
    } else {
        resolve_period(
            start_date,
            first_payment,
            periodicity.months_per_period() as i32,
            freq,
            as_of,
            maturity,
        )?
    };

    if as_of < period.start {
        return Ok(Some(Decimal::ZERO));
    }

    let ctx = AccrualContext::new(Some(period.end), period.frequency, maturity);
    let factor = convention.year_fraction(period.start, as_of, &ctx)?;
    Ok(Some(factor))
}

/// Compatibility helper collapsing "no calculation possible" to zero.
///
/// Mirrors the upstream behavior where an incomplete schedule yields a
/// zero factor; prefer [`accrual_factor`] when the caller can
/// distinguish the two.
pub fn accrual_factor_or_zero(
    schedule: &AccrualSchedule,
    as_of: Date,
    maturity: Option<Date>,
) -> AnalyticsResult<Decimal> {
    Ok(accrual_factor(schedule, as_of, maturity)?.unwrap_or(Decimal::ZERO))
}

/// Advances the schedule one period at a time until the cursor passes
/// the as-of date.
///
/// The clamping order is step-then-clamp: the cursor overshoots to the
/// next scheduled date first, and only then clamps to a maturity lying
/// strictly between the as-of date and the overshot cursor. The period
/// start derives from the pre-clamp cursor, so a clamped final period is
/// shortened at its end only.
fn resolve_period(
    start_date: Date,
    first_payment: Date,
    months: i32,
    frequency: u32,
    as_of: Date,
    maturity: Option<Date>,
) -> AnalyticsResult<ResolvedPeriod> {
    let mut cursor = first_payment;
    let mut steps = 0u32;

    while cursor <= as_of {
        cursor = cursor.add_months(months)?;
        steps += 1;
    }

    let pre_clamp = cursor;
    let mut end = pre_clamp;
    if let Some(m) = maturity {
        if as_of < m && m < pre_clamp {
            end = m;
        }
    }

    let start = if steps > 0 {
        pre_clamp.add_months(-months)?
    } else {
        start_date
    };

    Ok(ResolvedPeriod {
        start,
        end,
        frequency,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use accrue_core::daycounts::DayCountConvention;
    use accrue_core::types::Periodicity;
    use rust_decimal_macros::dec;

    fn date(s: &str) -> Date {
        Date::parse(s).unwrap()
    }

    fn icma_schedule() -> AccrualSchedule {
        AccrualSchedule::new(
            date("2024-01-15"),
            date("2024-07-15"),
            dec!(5.0),
            DayCountConvention::ActActIcma,
            Periodicity::SemiAnnual,
        )
    }

    #[test]
    fn test_incomplete_schedule_is_none_not_zero() {
        let schedule = AccrualSchedule {
            start_date: Some(date("2024-01-15")),
            accrual_size: dec!(5.0),
            ..AccrualSchedule::default()
        };

        let factor = accrual_factor(&schedule, date("2024-03-15"), None).unwrap();
        assert_eq!(factor, None);

        let collapsed = accrual_factor_or_zero(&schedule, date("2024-03-15"), None).unwrap();
        assert_eq!(collapsed, Decimal::ZERO);
    }

    #[test]
    fn test_first_period_uses_schedule_start() {
        // As-of before the first payment date: no stepping, the period
        // runs from the schedule's start date
        let schedule = icma_schedule();
        let factor = accrual_factor(&schedule, date("2024-04-15"), None)
            .unwrap()
            .unwrap();

        // 91 days accrued over a 182-day period at frequency 2
        assert_eq!(factor, dec!(91) / dec!(182) / dec!(2));
    }

    #[test]
    fn test_stepping_into_later_period() {
        // As-of 2025-03-10 sits in the period 2025-01-15 .. 2025-07-15
        let schedule = icma_schedule();
        let factor = accrual_factor(&schedule, date("2025-03-10"), None)
            .unwrap()
            .unwrap();

        assert_eq!(factor, dec!(54) / dec!(181) / dec!(2));
    }

    #[test]
    fn test_as_of_on_coupon_date_starts_new_period() {
        // The cursor steps past an as-of date equal to a coupon date, so
        // the new period has zero accrual
        let schedule = icma_schedule();
        let factor = accrual_factor(&schedule, date("2024-07-15"), None)
            .unwrap()
            .unwrap();

        assert_eq!(factor, Decimal::ZERO);
    }

    #[test]
    fn test_maturity_clamps_final_period() {
        // Maturity 2025-05-15 lies strictly between as-of and the
        // overshot cursor 2025-07-15, so the period end clamps while the
        // period start stays on the regular cycle
        let schedule = icma_schedule();
        let factor = accrual_factor(&schedule, date("2025-03-10"), Some(date("2025-05-15")))
            .unwrap()
            .unwrap();

        assert_eq!(factor, dec!(54) / dec!(120) / dec!(2));
    }

    #[test]
    fn test_maturity_beyond_cursor_does_not_clamp() {
        let schedule = icma_schedule();
        let unclamped = accrual_factor(&schedule, date("2025-03-10"), Some(date("2026-01-15")))
            .unwrap()
            .unwrap();

        assert_eq!(unclamped, dec!(54) / dec!(181) / dec!(2));
    }

    #[test]
    fn test_frequency_above_monthly_is_zero() {
        let schedule = AccrualSchedule {
            periodicity: Some(Periodicity::Weekly),
            ..icma_schedule()
        };

        let factor = accrual_factor(&schedule, date("2024-03-15"), None).unwrap();
        assert_eq!(factor, Some(Decimal::ZERO));
    }

    #[test]
    fn test_monthly_frequency_is_supported() {
        let schedule = AccrualSchedule {
            periodicity: Some(Periodicity::Monthly),
            first_payment_date: Some(date("2024-02-15")),
            ..icma_schedule()
        };

        // Period 2024-02-15 .. 2024-03-15 after one step
        let factor = accrual_factor(&schedule, date("2024-03-01"), None)
            .unwrap()
            .unwrap();

        assert_eq!(factor, dec!(15) / dec!(29) / dec!(12));
    }

    #[test]
    fn test_at_maturity_synthesizes_annual_period() {
        let schedule = AccrualSchedule {
            periodicity: Some(Periodicity::AtMaturity),
            ..icma_schedule()
        };

        // Single annual period 2024-01-15 .. 2025-01-15
        let factor = accrual_factor(&schedule, date("2024-07-15"), None)
            .unwrap()
            .unwrap();

        assert_eq!(factor, dec!(182) / dec!(366));
    }

    #[test]
    fn test_as_of_before_start_is_zero() {
        let schedule = icma_schedule();
        let factor = accrual_factor(&schedule, date("2023-12-01"), None)
            .unwrap()
            .unwrap();

        assert_eq!(factor, Decimal::ZERO);
    }

    #[test]
    fn test_non_icma_convention_uses_period_dates() {
        let schedule = AccrualSchedule {
            day_count: Some(DayCountConvention::Act360),
            ..icma_schedule()
        };

        let factor = accrual_factor(&schedule, date("2025-03-10"), None)
            .unwrap()
            .unwrap();

        // ACT/360 ignores the period end; 54 days since 2025-01-15
        assert_eq!(factor, dec!(54) / dec!(360));
    }
}
