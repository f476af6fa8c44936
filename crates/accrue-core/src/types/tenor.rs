//! Standard tenor periods.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A standard period between two scheduled payment dates.
///
/// These are the candidates the tenor mapper can resolve an observed
/// day count to when reconstructing a schedule from market data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tenor {
    /// One year
    OneYear,
    /// Six months (semi-annual)
    SixMonths,
    /// Three months (quarterly)
    ThreeMonths,
    /// Two months
    TwoMonths,
    /// One month
    OneMonth,
    /// Twenty-eight days (lunar month)
    TwentyEightDays,
    /// Fourteen days
    Fortnight,
}

impl Tenor {
    /// Returns the tenor's length in months, when it is month-based.
    #[must_use]
    pub fn months(&self) -> Option<u32> {
        match self {
            Tenor::OneYear => Some(12),
            Tenor::SixMonths => Some(6),
            Tenor::ThreeMonths => Some(3),
            Tenor::TwoMonths => Some(2),
            Tenor::OneMonth => Some(1),
            Tenor::TwentyEightDays | Tenor::Fortnight => None,
        }
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tenor::OneYear => "1Y",
            Tenor::SixMonths => "6M",
            Tenor::ThreeMonths => "3M",
            Tenor::TwoMonths => "2M",
            Tenor::OneMonth => "1M",
            Tenor::TwentyEightDays => "28D",
            Tenor::Fortnight => "14D",
        };
        write!(f, "{name}")
    }
}
