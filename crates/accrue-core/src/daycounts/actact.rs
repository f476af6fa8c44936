//! Actual/Actual day count conventions.

use rust_decimal::Decimal;

use super::DayCount;
use crate::types::Date;

/// Actual/Actual ISDA day count convention.
///
/// When the two dates fall in years of equal leap status the fraction
/// is a flat actual/365. When the leap status differs, the span is split
/// at the calendar-year boundary and each side is divided by its own
/// year length (365 or 366), then summed.
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Days in non-leap year}}{365} + \frac{\text{Days in leap year}}{366}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActActIsda;

impl DayCount for ActActIsda {
    fn name(&self) -> &'static str {
        "ACT/ACT ISDA"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        if start >= end {
            return Decimal::ZERO;
        }

        if start.is_leap_year() == end.is_leap_year() {
            let days = start.days_between(&end);
            return Decimal::from(days) / Decimal::from(365);
        }

        // Jan 1 is always a valid date
        let head_end = Date::from_ymd(start.year() + 1, 1, 1).unwrap();
        let tail_start = Date::from_ymd(end.year(), 1, 1).unwrap();

        let head_days = start.days_between(&head_end);
        let tail_days = tail_start.days_between(&end);

        Decimal::from(head_days) / Decimal::from(start.days_in_year())
            + Decimal::from(tail_days) / Decimal::from(end.days_in_year())
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

/// Actual/Actual ICMA day count convention.
///
/// Period-based: the accrued days are divided by the actual length of
/// the current coupon period and by the coupon frequency. The period end
/// and frequency are resolved by the accrual calculator (which advances
/// the schedule to locate the period containing the accrual end) and
/// supplied here via the accrual context.
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Accrued Days}}{\text{Days in Period} \times \text{Frequency}}$$
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActActIcma {
    /// Coupon frequency (periods per year); 0 is treated as annual
    frequency: u32,
    /// End of the coupon period containing the accrual end date
    period_end: Option<Date>,
}

impl ActActIcma {
    /// Creates a new ACT/ACT ICMA convention with period context.
    #[must_use]
    pub fn new(frequency: u32, period_end: Option<Date>) -> Self {
        Self {
            frequency,
            period_end,
        }
    }
}

impl Default for ActActIcma {
    fn default() -> Self {
        Self::new(1, None)
    }
}

impl DayCount for ActActIcma {
    fn name(&self) -> &'static str {
        "ACT/ACT ICMA"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        // Frequencies above monthly are outside the supported domain
        if self.frequency > 12 {
            return Decimal::ZERO;
        }
        let freq = self.frequency.max(1);

        match self.period_end {
            Some(period_end) => {
                let days_in_period = start.days_between(&period_end);
                if days_in_period <= 0 {
                    return Decimal::ZERO;
                }

                let accrued_days = start.days_between(&end);
                Decimal::from(accrued_days)
                    / Decimal::from(days_in_period)
                    / Decimal::from(freq)
            }
            // Without period information, fall back to a flat actual/365
            None => {
                let days = start.days_between(&end);
                Decimal::from(days) / Decimal::from(365)
            }
        }
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}
