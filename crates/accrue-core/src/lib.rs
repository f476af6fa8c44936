//! # Accrue Core
//!
//! Core value types and day count conventions for the Accrue calculation
//! engine.
//!
//! This crate provides the foundational building blocks used throughout
//! Accrue:
//!
//! - **Types**: Domain-specific types like `Date`, `Periodicity`,
//!   `AccrualSchedule`, `CashFlow`
//! - **Day Count Conventions**: The closed enumeration of market
//!   conventions and their year fraction calculations
//!
//! ## Design Philosophy
//!
//! - **Closed enumerations**: adding or removing a convention is a
//!   compile-time-checked change; unknown identifiers are unrepresentable
//!   past the parse boundary
//! - **Pure value types**: every entity is transient and caller-owned;
//!   calculations are side-effect-free and safe to run concurrently
//!   without synchronization
//! - **Explicit over implicit**: incomplete input is a distinct result,
//!   not a zero
//!
//! ## Example
//!
//! ```rust
//! use accrue_core::daycounts::{AccrualContext, DayCountConvention};
//! use accrue_core::types::Date;
//!
//! let start = Date::from_ymd(2025, 1, 15).unwrap();
//! let end = Date::from_ymd(2025, 7, 15).unwrap();
//!
//! let factor = DayCountConvention::Act365
//!     .year_fraction(start, end, &AccrualContext::default())
//!     .unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::unreadable_literal)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{AccrualContext, DayCount, DayCountConvention};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{AccrualSchedule, CashFlow, Date, Periodicity, Tenor};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{AccrualSchedule, CashFlow, Date, Periodicity};
