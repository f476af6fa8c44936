//! Coupon periodicity type.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// Coupon payment periodicity.
///
/// Maps to an integer frequency per year. `AtMaturity` (frequency 0)
/// means a single payment at redemption; frequencies above 12 exist in
/// upstream instrument data but are outside the domain of the
/// period-based day count calculations, which return a zero factor for
/// them rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Periodicity {
    /// Single payment at maturity (frequency 0)
    AtMaturity,
    /// Annual payments (1 per year)
    #[default]
    Annual,
    /// Semi-annual payments (2 per year)
    SemiAnnual,
    /// Quarterly payments (4 per year)
    Quarterly,
    /// Monthly payments (12 per year)
    Monthly,
    /// Weekly payments (52 per year) - zero factor in period calculations
    Weekly,
    /// Daily payments (365 per year) - zero factor in period calculations
    Daily,
}

impl Periodicity {
    /// Returns the number of coupon periods per year.
    #[must_use]
    pub fn frequency_per_year(&self) -> u32 {
        match self {
            Periodicity::AtMaturity => 0,
            Periodicity::Annual => 1,
            Periodicity::SemiAnnual => 2,
            Periodicity::Quarterly => 4,
            Periodicity::Monthly => 12,
            Periodicity::Weekly => 52,
            Periodicity::Daily => 365,
        }
    }

    /// Returns the number of months per coupon period.
    ///
    /// Returns 0 for variants that are not month-based (`AtMaturity`,
    /// `Weekly`, `Daily`); period stepping is not defined for those.
    #[must_use]
    pub fn months_per_period(&self) -> u32 {
        match self {
            Periodicity::Annual => 12,
            Periodicity::SemiAnnual => 6,
            Periodicity::Quarterly => 3,
            Periodicity::Monthly => 1,
            Periodicity::AtMaturity | Periodicity::Weekly | Periodicity::Daily => 0,
        }
    }

    /// Returns all periodicity variants.
    #[must_use]
    pub fn all() -> &'static [Periodicity] {
        &[
            Periodicity::AtMaturity,
            Periodicity::Annual,
            Periodicity::SemiAnnual,
            Periodicity::Quarterly,
            Periodicity::Monthly,
            Periodicity::Weekly,
            Periodicity::Daily,
        ]
    }
}

impl fmt::Display for Periodicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Periodicity::AtMaturity => "At Maturity",
            Periodicity::Annual => "Annual",
            Periodicity::SemiAnnual => "Semi-Annual",
            Periodicity::Quarterly => "Quarterly",
            Periodicity::Monthly => "Monthly",
            Periodicity::Weekly => "Weekly",
            Periodicity::Daily => "Daily",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for Periodicity {
    type Err = CoreError;

    /// Parses a periodicity from a stored identifier.
    ///
    /// Accepts the upstream storage spellings, the display names, and the
    /// bare frequency numbers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_uppercase();
        let normalized = normalized.trim();

        match normalized {
            "AT MATURITY" | "AT_MATURITY" | "MATURITY" | "N_AT_MATURITY" | "0" => {
                Ok(Periodicity::AtMaturity)
            }
            "ANNUAL" | "ANNUALLY" | "N_ANNUALLY" | "1" => Ok(Periodicity::Annual),
            "SEMI-ANNUAL" | "SEMIANNUAL" | "SEMI_ANNUALLY" | "N_SEMI_ANNUALLY" | "2" => {
                Ok(Periodicity::SemiAnnual)
            }
            "QUARTERLY" | "N_QUARTERLY" | "4" => Ok(Periodicity::Quarterly),
            "MONTHLY" | "N_MONTHLY" | "12" => Ok(Periodicity::Monthly),
            "WEEKLY" | "N_WEEKLY" | "52" => Ok(Periodicity::Weekly),
            "DAILY" | "N_DAILY" | "365" => Ok(Periodicity::Daily),
            _ => Err(CoreError::unknown_periodicity(s)),
        }
    }
}
