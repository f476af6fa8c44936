//! Business-day count convention.

use rust_decimal::Decimal;

use super::DayCount;
use crate::types::Date;

/// BD/252 day count convention.
///
/// Counts business days (Monday through Friday) in the half-open range
/// `[start, end)` and divides by 252. Weekends only; no holiday
/// calendar is applied at this layer.
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Business Days}}{252}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bd252;

impl DayCount for Bd252 {
    fn name(&self) -> &'static str {
        "BD/252"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        Decimal::from(self.day_count(start, end)) / Decimal::from(252)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let mut count = 0i64;
        let mut current = start;
        while current < end {
            if current.is_weekday() {
                count += 1;
            }
            current = current.add_days(1);
        }
        count
    }
}
