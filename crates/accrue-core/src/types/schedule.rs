//! Accrual schedule record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Date, Periodicity};
use crate::daycounts::DayCountConvention;

/// One row of an instrument's coupon plan.
///
/// This mirrors the upstream instrument record, where every
/// convention-selecting field is nullable while the instrument is being
/// configured. The calculators treat an incomplete schedule as "no
/// calculation possible yet" (a `None` result) rather than an error, so
/// callers can distinguish that state from a genuine zero accrual.
///
/// The engine never mutates a schedule; it is read-only input supplied
/// by the surrounding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AccrualSchedule {
    /// Accrual start date of the first coupon period
    pub start_date: Option<Date>,
    /// First scheduled coupon payment date
    pub first_payment_date: Option<Date>,
    /// Nominal coupon rate or amount per full period (may be zero)
    pub accrual_size: Decimal,
    /// Day count convention applied to this schedule
    pub day_count: Option<DayCountConvention>,
    /// Coupon payment periodicity
    pub periodicity: Option<Periodicity>,
}

impl AccrualSchedule {
    /// Creates a fully populated schedule.
    #[must_use]
    pub fn new(
        start_date: Date,
        first_payment_date: Date,
        accrual_size: Decimal,
        day_count: DayCountConvention,
        periodicity: Periodicity,
    ) -> Self {
        Self {
            start_date: Some(start_date),
            first_payment_date: Some(first_payment_date),
            accrual_size,
            day_count: Some(day_count),
            periodicity: Some(periodicity),
        }
    }

    /// Checks whether all convention-selecting fields are present.
    ///
    /// An incomplete schedule yields `None` from the calculators instead
    /// of a factor.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.start_date.is_some()
            && self.first_payment_date.is_some()
            && self.day_count.is_some()
            && self.periodicity.is_some()
    }
}
