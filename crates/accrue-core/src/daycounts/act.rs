//! Actual-day count conventions with fixed denominators.
//!
//! This module provides the ACT family: flat ratios of actual calendar
//! days over a fixed year basis, plus the leap-year-sensitive variants
//! ACT/365L, ACT/366 and NL/365.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::DayCount;
use crate::types::{is_leap_year, Date};

/// Checks if the range `(start, end]` contains a February 29.
pub(crate) fn contains_leap_day(start: Date, end: Date) -> bool {
    if start >= end {
        return false;
    }

    for year in start.year()..=end.year() {
        if !is_leap_year(year) {
            continue;
        }

        // Always valid in a leap year
        let feb_29 = Date::from_ymd(year, 2, 29).unwrap();

        if feb_29 > start && feb_29 <= end {
            return true;
        }
    }

    false
}

/// Actual/360 day count convention.
///
/// Money market convention: actual days over a 360-day year.
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{360}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act360;

impl DayCount for Act360 {
    fn name(&self) -> &'static str {
        "ACT/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        let days = start.days_between(&end);
        Decimal::from(days) / Decimal::from(360)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

/// Actual/364 day count convention.
///
/// Used in a handful of money markets with 364-day (52-week) years.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act364;

impl DayCount for Act364 {
    fn name(&self) -> &'static str {
        "ACT/364"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        let days = start.days_between(&end);
        Decimal::from(days) / Decimal::from(364)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

/// Actual/365 Fixed day count convention.
///
/// The year basis is always 365 days, ignoring leap years.
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{365}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365;

impl DayCount for Act365 {
    fn name(&self) -> &'static str {
        "ACT/365"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        let days = start.days_between(&end);
        Decimal::from(days) / Decimal::from(365)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

/// Actual/365A day count convention.
///
/// Counts both boundary dates: the numerator is the actual day span
/// plus one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365A;

impl DayCount for Act365A {
    fn name(&self) -> &'static str {
        "ACT/365A"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        let days = start.days_between(&end);
        Decimal::from(days + 1) / Decimal::from(365)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

/// Actual/365 Leap day count convention (ACT/365L).
///
/// The denominator is 366 if the period contains a February 29,
/// otherwise 365.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Leap;

impl DayCount for Act365Leap {
    fn name(&self) -> &'static str {
        "ACT/365L"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        let days = start.days_between(&end);
        let basis = if contains_leap_day(start, end) { 366 } else { 365 };
        Decimal::from(days) / Decimal::from(basis)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

/// Actual/365.25 day count convention.
///
/// Averages the leap cycle into the denominator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act36525;

impl DayCount for Act36525 {
    fn name(&self) -> &'static str {
        "ACT/365.25"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        let days = start.days_between(&end);
        Decimal::from(days) / dec!(365.25)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

/// Actual/366 day count convention.
///
/// Defined only across calendar-year boundaries: the fraction is zero
/// when both dates fall in the same year. The numerator counts both
/// boundary dates; the denominator is 366 when the span crosses a
/// February 29, otherwise 365.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act366;

impl DayCount for Act366 {
    fn name(&self) -> &'static str {
        "ACT/366"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        if start.year() == end.year() {
            return Decimal::ZERO;
        }

        let days = start.days_between(&end);
        let basis = if contains_leap_day(start, end) { 366 } else { 365 };
        Decimal::from(days + 1) / Decimal::from(basis)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

/// No-Leap/365 day count convention (NL/365).
///
/// Actual days with any February 29 in the span excluded from the
/// numerator, over a fixed 365-day year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nl365;

impl DayCount for Nl365 {
    fn name(&self) -> &'static str {
        "NL/365"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        Decimal::from(self.day_count(start, end)) / Decimal::from(365)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let days = start.days_between(&end);
        if contains_leap_day(start, end) {
            days - 1
        } else {
            days
        }
    }
}
