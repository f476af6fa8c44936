//! Day count conventions for accrual calculations.
//!
//! Day count conventions determine how accrued interest is calculated
//! by specifying how to count days between two dates and the year basis.
//!
//! # Supported Conventions
//!
//! ## ACT Family (Actual numerator)
//!
//! - [`Act360`]: Actual/360 - Money market convention
//! - [`Act364`]: Actual/364 - 52-week year markets
//! - [`Act365`]: Actual/365 Fixed
//! - [`Act365A`]: Actual/365A - Numerator counts both boundary dates
//! - [`Act365Leap`]: Actual/365L - 366 basis when the span contains Feb 29
//! - [`Act36525`]: Actual/365.25 - Averaged leap cycle
//! - [`Act366`]: Actual/366 - Cross-year only, leap-day sensitive
//! - [`Nl365`]: NL/365 - Leap days excluded from the numerator
//! - [`ActActIsda`]: Actual/Actual ISDA - Year-boundary split
//! - [`ActActIcma`]: Actual/Actual ICMA - Period-based (government bonds)
//!
//! ## Business-Day Family
//!
//! - [`Bd252`]: BD/252 - Weekday count over a 252-day year
//!
//! ## 30/360 Family (Assumes 30-day months, 360-day years)
//!
//! - [`Thirty360US`]: 30/360 US - US corporate bonds (with Feb EOM rules)
//! - [`ThirtyE360`]: 30E/360 - Eurobond convention
//! - [`ThirtyEPlus360`]: 30E+/360 - Day 31 rolls into the next month
//! - [`Thirty360Isda`]: 30/360 ISDA - EOM handling with February maturity rule
//! - [`Thirty360German`]: 30/360 German - German market convention
//!
//! # Usage
//!
//! ```rust
//! use accrue_core::daycounts::{AccrualContext, DayCountConvention};
//! use accrue_core::types::Date;
//!
//! let convention = DayCountConvention::Act360;
//! let start = Date::from_ymd(2025, 1, 15).unwrap();
//! let end = Date::from_ymd(2025, 7, 15).unwrap();
//!
//! let factor = convention
//!     .year_fraction(start, end, &AccrualContext::default())
//!     .unwrap();
//! ```

mod act;
mod actact;
mod business252;
mod thirty360;

pub use act::{Act360, Act364, Act365, Act36525, Act365A, Act365Leap, Act366, Nl365};
pub use actact::{ActActIcma, ActActIsda};
pub use business252::Bd252;
pub use thirty360::{Thirty360German, Thirty360Isda, Thirty360US, ThirtyE360, ThirtyEPlus360};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations provide the year fraction calculation between two
/// dates according to specific market conventions. All implementations
/// are pure, total functions over ordered date pairs and are thread-safe
/// (`Send + Sync`).
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Callers are expected to supply `start <= end`; the dispatching
    /// [`DayCountConvention::year_fraction`] enforces this before any
    /// arithmetic.
    fn year_fraction(&self, start: Date, end: Date) -> Decimal;

    /// Calculates the day count between two dates.
    ///
    /// For ACT conventions this is actual calendar days; for 30/360
    /// conventions it uses the 30-day month arithmetic; for BD/252 it is
    /// the weekday count.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

/// Period and maturity context for context-sensitive conventions.
///
/// ACT/ACT ICMA needs the end of the coupon period containing the
/// accrual end date plus the coupon frequency; the 30/360 ISDA and
/// German variants need the maturity date for their February rule. The
/// accrual calculator resolves these from the schedule and passes them
/// down; conventions that do not need them ignore the context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccrualContext {
    /// End of the coupon period containing the accrual end date (d3)
    pub period_end: Option<Date>,
    /// Coupon frequency (periods per year); 0 means at-maturity
    pub frequency: u32,
    /// Maturity date of the instrument, when known
    pub maturity: Option<Date>,
}

impl AccrualContext {
    /// Creates a context with period information.
    #[must_use]
    pub fn new(period_end: Option<Date>, frequency: u32, maturity: Option<Date>) -> Self {
        Self {
            period_end,
            frequency,
            maturity,
        }
    }

    /// Creates a context carrying only a maturity date.
    #[must_use]
    pub fn with_maturity(maturity: Option<Date>) -> Self {
        Self {
            period_end: None,
            frequency: 0,
            maturity,
        }
    }
}

/// Enumeration of all supported day count conventions.
///
/// This is a closed sum type: every convention the engine knows has a
/// variant here, dispatch is exhaustive, and an unknown stored
/// identifier is rejected at parse time with
/// [`CoreError::UnknownConvention`] instead of surviving as a runtime
/// code path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayCountConvention {
    // =========================================================================
    // ACT Family
    // =========================================================================
    /// Actual/360 - Money market instruments
    Act360,

    /// Actual/364 - 52-week year markets
    Act364,

    /// Actual/365 Fixed
    Act365,

    /// Actual/365A - Numerator counts both boundary dates
    Act365A,

    /// Actual/365L - 366 basis when the span contains Feb 29
    Act365Leap,

    /// Actual/365.25 - Averaged leap cycle
    Act36525,

    /// Actual/366 - Cross-year only, leap-day sensitive
    Act366,

    /// NL/365 - Leap days excluded from the numerator
    Nl365,

    /// Actual/Actual ISDA - Year-boundary split
    ActActIsda,

    /// Actual/Actual ICMA - Period-based calculation for bonds
    ActActIcma,

    // =========================================================================
    // Business-Day Family
    // =========================================================================
    /// BD/252 - Weekday count over a 252-day year
    Bd252,

    // =========================================================================
    // 30/360 Family
    // =========================================================================
    /// 30/360 US (Bond Basis) - US corporate, agency, municipal bonds
    Thirty360US,

    /// 30E/360 (Eurobond Basis)
    ThirtyE360,

    /// 30E+/360 - Day 31 rolls into the next month
    ThirtyEPlus360,

    /// 30/360 ISDA - EOM handling with February maturity rule
    Thirty360Isda,

    /// 30/360 German
    Thirty360German,
}

impl DayCountConvention {
    /// Creates a boxed day count implementation for the given context.
    ///
    /// Context-sensitive conventions (ACT/ACT ICMA, 30/360 ISDA,
    /// 30/360 German) capture the relevant parts of `ctx`; the rest are
    /// stateless.
    #[must_use]
    pub fn to_day_count(&self, ctx: &AccrualContext) -> Box<dyn DayCount> {
        match self {
            // ACT Family
            DayCountConvention::Act360 => Box::new(Act360),
            DayCountConvention::Act364 => Box::new(Act364),
            DayCountConvention::Act365 => Box::new(Act365),
            DayCountConvention::Act365A => Box::new(Act365A),
            DayCountConvention::Act365Leap => Box::new(Act365Leap),
            DayCountConvention::Act36525 => Box::new(Act36525),
            DayCountConvention::Act366 => Box::new(Act366),
            DayCountConvention::Nl365 => Box::new(Nl365),
            DayCountConvention::ActActIsda => Box::new(ActActIsda),
            DayCountConvention::ActActIcma => {
                Box::new(ActActIcma::new(ctx.frequency, ctx.period_end))
            }

            // Business-Day Family
            DayCountConvention::Bd252 => Box::new(Bd252),

            // 30/360 Family
            DayCountConvention::Thirty360US => Box::new(Thirty360US),
            DayCountConvention::ThirtyE360 => Box::new(ThirtyE360),
            DayCountConvention::ThirtyEPlus360 => Box::new(ThirtyEPlus360),
            DayCountConvention::Thirty360Isda => Box::new(Thirty360Isda::new(ctx.maturity)),
            DayCountConvention::Thirty360German => Box::new(Thirty360German::new(ctx.maturity)),
        }
    }

    /// Calculates the year fraction between two dates under this
    /// convention.
    ///
    /// This is the dispatch boundary: the date order is validated before
    /// any arithmetic runs.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDateOrder` if `start > end`.
    pub fn year_fraction(
        &self,
        start: Date,
        end: Date,
        ctx: &AccrualContext,
    ) -> CoreResult<Decimal> {
        if start > end {
            return Err(CoreError::invalid_date_order(start, end));
        }
        Ok(self.to_day_count(ctx).year_fraction(start, end))
    }

    /// Calculates the convention day count between two dates.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDateOrder` if `start > end`.
    pub fn day_count(&self, start: Date, end: Date, ctx: &AccrualContext) -> CoreResult<i64> {
        if start > end {
            return Err(CoreError::invalid_date_order(start, end));
        }
        Ok(self.to_day_count(ctx).day_count(start, end))
    }

    /// Returns the name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Act360 => "ACT/360",
            DayCountConvention::Act364 => "ACT/364",
            DayCountConvention::Act365 => "ACT/365",
            DayCountConvention::Act365A => "ACT/365A",
            DayCountConvention::Act365Leap => "ACT/365L",
            DayCountConvention::Act36525 => "ACT/365.25",
            DayCountConvention::Act366 => "ACT/366",
            DayCountConvention::Nl365 => "NL/365",
            DayCountConvention::ActActIsda => "ACT/ACT ISDA",
            DayCountConvention::ActActIcma => "ACT/ACT ICMA",
            DayCountConvention::Bd252 => "BD/252",
            DayCountConvention::Thirty360US => "30/360 US",
            DayCountConvention::ThirtyE360 => "30E/360",
            DayCountConvention::ThirtyEPlus360 => "30E+/360",
            DayCountConvention::Thirty360Isda => "30/360 ISDA",
            DayCountConvention::Thirty360German => "30/360 German",
        }
    }

    /// Returns all available day count conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[
            DayCountConvention::Act360,
            DayCountConvention::Act364,
            DayCountConvention::Act365,
            DayCountConvention::Act365A,
            DayCountConvention::Act365Leap,
            DayCountConvention::Act36525,
            DayCountConvention::Act366,
            DayCountConvention::Nl365,
            DayCountConvention::ActActIsda,
            DayCountConvention::ActActIcma,
            DayCountConvention::Bd252,
            DayCountConvention::Thirty360US,
            DayCountConvention::ThirtyE360,
            DayCountConvention::ThirtyEPlus360,
            DayCountConvention::Thirty360Isda,
            DayCountConvention::Thirty360German,
        ]
    }

    /// Returns the year length, in days, implied for schedule
    /// construction.
    ///
    /// 360 for the 30/360 family; 365 for the actual-day families. Used
    /// by the tenor mapper to express standard periods in the
    /// convention's day units.
    #[must_use]
    pub const fn implied_year_length(&self) -> u32 {
        match self {
            DayCountConvention::Thirty360US
            | DayCountConvention::ThirtyE360
            | DayCountConvention::ThirtyEPlus360
            | DayCountConvention::Thirty360Isda
            | DayCountConvention::Thirty360German => 360,

            DayCountConvention::Act360
            | DayCountConvention::Act364
            | DayCountConvention::Act365
            | DayCountConvention::Act365A
            | DayCountConvention::Act365Leap
            | DayCountConvention::Act36525
            | DayCountConvention::Act366
            | DayCountConvention::Nl365
            | DayCountConvention::ActActIsda
            | DayCountConvention::ActActIcma
            | DayCountConvention::Bd252 => 365,
        }
    }
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DayCountConvention {
    type Err = CoreError;

    /// Parses a day count convention from a stored identifier.
    ///
    /// Supports multiple formats:
    /// - Market-style: "ACT/360", "30/360 US", "ACT/ACT ICMA"
    /// - Rust enum-style: "Act360", "Thirty360US", "ActActIcma"
    /// - Common aliases: "BOND", "EUROBOND", "BUS/252"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_uppercase();
        let normalized = normalized.trim();

        match normalized {
            // ACT/360
            "ACT/360" | "ACTUAL/360" | "ACT360" => Ok(DayCountConvention::Act360),

            // ACT/364
            "ACT/364" | "ACTUAL/364" | "ACT364" => Ok(DayCountConvention::Act364),

            // ACT/365 Fixed
            "ACT/365" | "ACT/365F" | "ACT/365 FIXED" | "ACTUAL/365" | "ACT365" => {
                Ok(DayCountConvention::Act365)
            }

            // ACT/365A
            "ACT/365A" | "ACTUAL/365A" | "ACT365A" => Ok(DayCountConvention::Act365A),

            // ACT/365 Leap
            "ACT/365L" | "ACT/365 LEAP" | "ACTUAL/365 LEAP" | "ACT365LEAP" => {
                Ok(DayCountConvention::Act365Leap)
            }

            // ACT/365.25
            "ACT/365.25" | "ACTUAL/365.25" | "ACT36525" => Ok(DayCountConvention::Act36525),

            // ACT/366
            "ACT/366" | "ACTUAL/366" | "ACT366" => Ok(DayCountConvention::Act366),

            // NL/365
            "NL/365" | "NL365" | "ACT/365 NO LEAP" => Ok(DayCountConvention::Nl365),

            // ACT/ACT ISDA
            "ACT/ACT" | "ACT/ACT ISDA" | "ACTUAL/ACTUAL" | "ACTUAL/ACTUAL ISDA"
            | "ACTACTISDA" | "ACTACT" => Ok(DayCountConvention::ActActIsda),

            // ACT/ACT ICMA
            "ACT/ACT ICMA" | "ACTUAL/ACTUAL ICMA" | "ACT/ACT ISMA" | "ACTACTICMA" | "ISMA" => {
                Ok(DayCountConvention::ActActIcma)
            }

            // BD/252
            "BD/252" | "BUS/252" | "BUSINESS/252" | "BD252" => Ok(DayCountConvention::Bd252),

            // 30/360 US
            "30/360" | "30/360 US" | "30U/360" | "BOND" | "THIRTY360US" | "30/360US" => {
                Ok(DayCountConvention::Thirty360US)
            }

            // 30E/360
            "30E/360" | "30/360 ICMA" | "EUROBOND" | "THIRTYE360" | "30E360" => {
                Ok(DayCountConvention::ThirtyE360)
            }

            // 30E+/360
            "30E+/360" | "30E+360" | "THIRTYEPLUS360" => Ok(DayCountConvention::ThirtyEPlus360),

            // 30/360 ISDA
            "30/360 ISDA" | "30E/360 ISDA" | "THIRTY360ISDA" | "30/360ISDA" => {
                Ok(DayCountConvention::Thirty360Isda)
            }

            // 30/360 German
            "30/360 GERMAN" | "30E/360 GERMAN" | "GERMAN" | "THIRTY360GERMAN" => {
                Ok(DayCountConvention::Thirty360German)
            }

            _ => Err(CoreError::unknown_convention(s)),
        }
    }
}
