//! Value types used across the calculation engine.
//!
//! Everything here is transient and value-typed: created from
//! caller-supplied data immediately before a calculation, consumed
//! synchronously, and discarded. Persistence belongs to the surrounding
//! application.

mod cashflow;
mod date;
mod periodicity;
mod schedule;
mod tenor;

pub use cashflow::CashFlow;
pub use date::{days_in_month, is_leap_year, Date};
pub use periodicity::Periodicity;
pub use schedule::AccrualSchedule;
pub use tenor::Tenor;
