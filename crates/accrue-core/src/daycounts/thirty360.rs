//! 30/360 day count conventions.
//!
//! Each variant assumes 30-day months and a 360-day year but applies a
//! distinct end-of-month adjustment for day-of-month 31 and, for the
//! ISDA and German variants, a February special case at maturity.

use rust_decimal::Decimal;

use super::DayCount;
use crate::types::Date;

// =============================================================================
// Helper Functions
// =============================================================================

/// Checks if a date is the last day of February.
#[inline]
fn is_last_day_of_february(date: Date) -> bool {
    date.month() == 2 && date.is_end_of_month()
}

// =============================================================================
// 30/360 US (Bond Basis)
// =============================================================================

/// 30/360 US day count convention (Bond Basis).
///
/// # Rules
///
/// 1. If D1 is the last day of February, change D1 to 30
/// 2. If D1 is 31, change D1 to 30
/// 3. If D2 is the last day of February AND D1 was last day of February, change D2 to 30
/// 4. If D2 is 31 AND D1 is now >= 30, change D2 to 30
///
/// # Formula
///
/// $$\text{Days} = 360 \times (Y_2 - Y_1) + 30 \times (M_2 - M_1) + (D_2 - D_1)$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360US;

impl DayCount for Thirty360US {
    fn name(&self) -> &'static str {
        "30/360 US"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        let days = self.day_count(start, end);
        Decimal::from(days) / Decimal::from(360)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let y1 = start.year() as i64;
        let y2 = end.year() as i64;
        let m1 = start.month() as i64;
        let m2 = end.month() as i64;
        let mut d1 = start.day() as i64;
        let mut d2 = end.day() as i64;

        // Track if D1 was adjusted due to being last day of February
        let d1_was_feb_eom = is_last_day_of_february(start);

        if d1_was_feb_eom || d1 == 31 {
            d1 = 30;
        }

        if is_last_day_of_february(end) && d1_was_feb_eom {
            d2 = 30;
        } else if d2 == 31 && d1 >= 30 {
            d2 = 30;
        }

        360 * (y2 - y1) + 30 * (m2 - m1) + (d2 - d1)
    }
}

// =============================================================================
// 30E/360 (Eurobond Basis)
// =============================================================================

/// 30E/360 day count convention (Eurobond Basis).
///
/// # Rules
///
/// 1. If D1 is 31, change D1 to 30
/// 2. If D2 is 31, change D2 to 30
///
/// No February handling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThirtyE360;

impl DayCount for ThirtyE360 {
    fn name(&self) -> &'static str {
        "30E/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        let days = self.day_count(start, end);
        Decimal::from(days) / Decimal::from(360)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let y1 = start.year() as i64;
        let y2 = end.year() as i64;
        let m1 = start.month() as i64;
        let m2 = end.month() as i64;
        let mut d1 = start.day() as i64;
        let mut d2 = end.day() as i64;

        if d1 == 31 {
            d1 = 30;
        }

        if d2 == 31 {
            d2 = 30;
        }

        360 * (y2 - y1) + 30 * (m2 - m1) + (d2 - d1)
    }
}

// =============================================================================
// 30E+/360
// =============================================================================

/// 30E+/360 day count convention.
///
/// Like 30E/360 for the start date, but an end date on day 31 rolls
/// forward into the first of the next month instead of clamping to 30.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThirtyEPlus360;

impl DayCount for ThirtyEPlus360 {
    fn name(&self) -> &'static str {
        "30E+/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        let days = self.day_count(start, end);
        Decimal::from(days) / Decimal::from(360)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let y1 = start.year() as i64;
        let y2 = end.year() as i64;
        let m1 = start.month() as i64;
        let mut m2 = end.month() as i64;
        let mut d1 = start.day() as i64;
        let mut d2 = end.day() as i64;

        if d1 == 31 {
            d1 = 30;
        }

        // Day 31 rolls into the next month; month 13 folds into the
        // year term of the formula
        if d2 == 31 {
            d2 = 1;
            m2 += 1;
        }

        360 * (y2 - y1) + 30 * (m2 - m1) + (d2 - d1)
    }
}

// =============================================================================
// 30/360 ISDA
// =============================================================================

/// 30/360 ISDA day count convention.
///
/// End-of-month dates on both sides clamp to 30, except that an end
/// date which is both the maturity date and in February keeps its
/// actual day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360Isda {
    /// Maturity date of the instrument, when known
    maturity: Option<Date>,
}

impl Thirty360Isda {
    /// Creates a new 30/360 ISDA convention.
    #[must_use]
    pub fn new(maturity: Option<Date>) -> Self {
        Self { maturity }
    }
}

impl DayCount for Thirty360Isda {
    fn name(&self) -> &'static str {
        "30/360 ISDA"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        let days = self.day_count(start, end);
        Decimal::from(days) / Decimal::from(360)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let y1 = start.year() as i64;
        let y2 = end.year() as i64;
        let m1 = start.month() as i64;
        let m2 = end.month() as i64;
        let mut d1 = start.day() as i64;
        let mut d2 = end.day() as i64;

        if start.is_end_of_month() {
            d1 = 30;
        }

        // A February end date at maturity keeps its actual day
        let at_february_maturity =
            self.maturity == Some(end) && end.month() == 2;
        if end.is_end_of_month() && !at_february_maturity {
            d2 = 30;
        }

        360 * (y2 - y1) + 30 * (m2 - m1) + (d2 - d1)
    }
}

// =============================================================================
// 30/360 German
// =============================================================================

/// 30/360 German day count convention.
///
/// Day 31 and the last day of February clamp to 30 on both sides, with
/// the same February-at-maturity exception as the ISDA variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360German {
    /// Maturity date of the instrument, when known
    maturity: Option<Date>,
}

impl Thirty360German {
    /// Creates a new 30/360 German convention.
    #[must_use]
    pub fn new(maturity: Option<Date>) -> Self {
        Self { maturity }
    }
}

impl DayCount for Thirty360German {
    fn name(&self) -> &'static str {
        "30/360 German"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        let days = self.day_count(start, end);
        Decimal::from(days) / Decimal::from(360)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let y1 = start.year() as i64;
        let y2 = end.year() as i64;
        let m1 = start.month() as i64;
        let m2 = end.month() as i64;
        let mut d1 = start.day() as i64;
        let mut d2 = end.day() as i64;

        if d1 == 31 || is_last_day_of_february(start) {
            d1 = 30;
        }

        let at_february_maturity =
            self.maturity == Some(end) && end.month() == 2;
        if d2 == 31 || (is_last_day_of_february(end) && !at_february_maturity) {
            d2 = 30;
        }

        360 * (y2 - y1) + 30 * (m2 - m1) + (d2 - d1)
    }
}

// =============================================================================
// Tests
// =============================================================================
