//! # Accrue Analytics
//!
//! The calculation layer of the Accrue engine.
//!
//! This crate orchestrates the core day count conventions into the
//! operations the surrounding application calls:
//!
//! - **Accrual factors**: fraction of the current coupon period elapsed
//!   by an as-of date, with schedule period stepping and maturity
//!   clamping
//! - **Coupon amounts**: cash accrued between two arbitrary dates,
//!   scaled by the nominal coupon size
//! - **Valuation**: XNPV over dated cash flow streams and the XIRR
//!   Newton-Raphson solver with a tagged convergence outcome
//! - **Tenor mapping**: nearest standard period for an observed day
//!   count between coupons
//!
//! Every operation is a pure, synchronous function over caller-owned
//! value types; there is no shared state and no synchronization
//! requirement for concurrent use.
//!
//! ## Example
//!
//! ```rust
//! use accrue_analytics::{accrual_factor, xirr};
//! use accrue_core::daycounts::DayCountConvention;
//! use accrue_core::types::{AccrualSchedule, CashFlow, Date, Periodicity};
//! use rust_decimal_macros::dec;
//!
//! let schedule = AccrualSchedule::new(
//!     Date::from_ymd(2025, 1, 15).unwrap(),
//!     Date::from_ymd(2025, 7, 15).unwrap(),
//!     dec!(5.0),
//!     DayCountConvention::ActActIcma,
//!     Periodicity::SemiAnnual,
//! );
//! let factor = accrual_factor(&schedule, Date::from_ymd(2025, 4, 15).unwrap(), None).unwrap();
//! assert!(factor.is_some());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::uninlined_format_args)]

pub mod accrual;
pub mod coupon;
pub mod error;
pub mod tenor;
pub mod valuation;

pub use accrual::{accrual_factor, accrual_factor_or_zero};
pub use coupon::coupon_amount;
pub use error::{AnalyticsError, AnalyticsResult};
pub use tenor::nearest_tenor;
pub use valuation::{xirr, xirr_or_zero, xirr_with_guess, xnpv, XirrOutcome};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::accrual::{accrual_factor, accrual_factor_or_zero};
    pub use crate::coupon::coupon_amount;
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::tenor::nearest_tenor;
    pub use crate::valuation::{xirr, xirr_or_zero, xirr_with_guess, xnpv, XirrOutcome};
}
