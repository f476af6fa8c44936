//! Dated cash flow type for valuation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;

/// A dated cash flow.
///
/// A sequence of these, ordered by date, is the sole input to the
/// XNPV/XIRR valuation routines. The first element of a sequence is
/// treated as the valuation anchor. Cash flows are transient values
/// constructed per calculation; nothing here carries persistent
/// identity.
///
/// # Example
///
/// ```rust
/// use accrue_core::types::{CashFlow, Date};
/// use rust_decimal_macros::dec;
///
/// let cf = CashFlow::new(Date::from_ymd(2025, 6, 15).unwrap(), dec!(-1000));
/// assert_eq!(cf.amount, dec!(-1000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Payment date
    pub date: Date,
    /// Signed amount (negative = outflow, positive = inflow)
    pub amount: Decimal,
}

impl CashFlow {
    /// Creates a new cash flow.
    #[must_use]
    pub fn new(date: Date, amount: Decimal) -> Self {
        Self { date, amount }
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.amount)
    }
}
