//! Cash flow valuation: XNPV and XIRR.
//!
//! XNPV discounts an irregularly-dated cash flow stream against its
//! first flow date; XIRR wraps it in a derivative-free Newton-Raphson
//! iteration to find the rate that zeroes the net present value.

use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use accrue_core::types::CashFlow;
use accrue_math::solvers::{newton_forward, SolverConfig};

/// Default initial guess for the XIRR iteration.
pub const XIRR_INITIAL_GUESS: f64 = 0.0;

/// Convergence tolerance for the XIRR iteration.
pub const XIRR_TOLERANCE: f64 = 1e-6;

/// Iteration budget for the XIRR iteration.
pub const XIRR_MAX_ITERATIONS: u32 = 100;

/// Forward-difference step for the XIRR derivative estimate.
const XIRR_DERIVATIVE_STEP: f64 = 1e-5;

/// Year basis for converting day offsets to exponents.
const DAYS_PER_YEAR: f64 = 365.0;

/// Outcome of an XIRR calculation.
///
/// The solver is a best-effort heuristic, so non-convergence is an
/// expected outcome for pathological streams (no sign change, flat
/// objective) and is reported as data rather than an error. Callers
/// needing the historical collapsing behavior use [`xirr_or_zero`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum XirrOutcome {
    /// The iteration converged to an annualized rate.
    Converged {
        /// The annualized rate zeroing the net present value.
        rate: f64,
        /// Iterations consumed.
        iterations: u32,
    },
    /// The iteration hit a degenerate derivative or exhausted its
    /// budget; no rate could be determined.
    DidNotConverge,
}

impl XirrOutcome {
    /// Returns the converged rate, if any.
    #[must_use]
    pub fn rate(&self) -> Option<f64> {
        match self {
            XirrOutcome::Converged { rate, .. } => Some(*rate),
            XirrOutcome::DidNotConverge => None,
        }
    }

    /// Checks whether the iteration converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        matches!(self, XirrOutcome::Converged { .. })
    }
}

/// Calculates the net present value of a dated cash flow stream.
///
/// All flows are anchored to the first flow's date; each flow
/// contributes `amount / (1 + rate)^years` with the offset converted to
/// years over a fixed 365-day basis. An empty stream values to zero, and
/// a rate of exactly -1 returns positive infinity instead of dividing
/// by zero.
///
/// # Example
///
/// ```rust
/// use accrue_analytics::xnpv;
/// use accrue_core::types::{CashFlow, Date};
/// use rust_decimal_macros::dec;
///
/// let flows = [
///     CashFlow::new(Date::from_ymd(2025, 1, 1).unwrap(), dec!(-1000)),
///     CashFlow::new(Date::from_ymd(2026, 1, 1).unwrap(), dec!(1100)),
/// ];
/// let npv = xnpv(&flows, 0.10);
/// assert!(npv.abs() < 1e-9);
/// ```
#[must_use]
pub fn xnpv(flows: &[CashFlow], rate: f64) -> f64 {
    let Some(anchor) = flows.first() else {
        return 0.0;
    };

    if rate == -1.0 {
        return f64::INFINITY;
    }

    let anchor_date = anchor.date;
    flows
        .iter()
        .map(|cf| {
            let years = anchor_date.days_between(&cf.date) as f64 / DAYS_PER_YEAR;
            cf.amount.to_f64().unwrap_or(0.0) / (1.0 + rate).powf(years)
        })
        .sum()
}

/// Calculates the internal rate of return of a dated cash flow stream.
///
/// Runs a Newton-Raphson iteration on [`xnpv`] from a zero initial
/// guess, estimating the derivative with a forward finite difference.
/// Streams with fewer than two flows cannot determine a rate and report
/// [`XirrOutcome::DidNotConverge`] immediately.
#[must_use]
pub fn xirr(flows: &[CashFlow]) -> XirrOutcome {
    xirr_with_guess(flows, XIRR_INITIAL_GUESS)
}

/// [`xirr`] with an explicit initial guess.
#[must_use]
pub fn xirr_with_guess(flows: &[CashFlow], guess: f64) -> XirrOutcome {
    if flows.len() < 2 {
        return XirrOutcome::DidNotConverge;
    }

    let config = SolverConfig::new(XIRR_TOLERANCE, XIRR_MAX_ITERATIONS);
    match newton_forward(|rate| xnpv(flows, rate), guess, XIRR_DERIVATIVE_STEP, &config) {
        Ok(result) => XirrOutcome::Converged {
            rate: result.root,
            iterations: result.iterations,
        },
        Err(err) => {
            log::debug!("XIRR did not converge: {err}");
            XirrOutcome::DidNotConverge
        }
    }
}

/// Compatibility helper collapsing non-convergence to `0.0`.
///
/// Reproduces the historical contract where a failed iteration and a
/// genuine zero yield are indistinguishable; prefer [`xirr`] when the
/// caller can tell the two apart.
#[must_use]
pub fn xirr_or_zero(flows: &[CashFlow]) -> f64 {
    match xirr(flows) {
        XirrOutcome::Converged { rate, .. } => rate,
        XirrOutcome::DidNotConverge => {
            log::debug!("XIRR collapsed a non-convergence to 0.0");
            0.0
        }
    }
}
