//! Newton-Raphson root-finding with a forward-difference derivative.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Newton-Raphson root-finding with a forward finite-difference
/// derivative.
///
/// Uses the iteration:
/// `x_{n+1} = x_n - f(x_n) / d_n` with
/// `d_n = (f(x_n + step) - f(x_n)) / step`
///
/// The iteration succeeds as soon as the step size `|x_{n+1} - x_n|`
/// falls below the configured tolerance; the returned root is the *new*
/// point. A derivative magnitude below the tolerance is degenerate and
/// aborts the iteration.
///
/// This is a best-effort heuristic: with no bracketing it can fail on
/// oscillating or flat objective functions, and a failure is
/// deterministic for given inputs.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `initial_guess` - Starting point for the iteration
/// * `step` - Forward-difference step for the derivative estimate
/// * `config` - Solver configuration
///
/// # Errors
///
/// Returns `MathError::DivisionByZero` when the derivative estimate
/// collapses below the tolerance, and `MathError::ConvergenceFailed`
/// when the iteration budget is exhausted.
///
/// # Example
///
/// ```rust
/// use accrue_math::solvers::{newton_forward, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
///
/// let result = newton_forward(f, 1.5, 1e-5, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-5);
/// ```
pub fn newton_forward<F>(
    f: F,
    initial_guess: f64,
    step: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let mut x = initial_guess;

    for iteration in 0..config.max_iterations {
        let fx = f(x);
        let derivative = (f(x + step) - fx) / step;

        if derivative.abs() < config.tolerance {
            return Err(MathError::DivisionByZero { value: derivative });
        }

        let next = x - fx / derivative;

        if (next - x).abs() < config.tolerance {
            return Ok(SolverResult {
                root: next,
                iterations: iteration + 1,
                residual: f(next),
            });
        }

        x = next;
    }

    let residual = f(x).abs();
    log::debug!(
        "Newton iteration exhausted {} iterations (residual: {residual:.2e})",
        config.max_iterations
    );
    Err(MathError::convergence_failed(config.max_iterations, residual))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| x * x - 2.0;

        let result = newton_forward(f, 1.5, 1e-5, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-5);
        assert!(result.iterations < 10);
    }

    #[test]
    fn test_cube_root() {
        // Find cube root of 27 (should be 3)
        let f = |x: f64| x * x * x - 27.0;

        let result = newton_forward(f, 2.0, 1e-5, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 3.0, epsilon = 1e-5);
    }

    #[test]
    fn test_linear_function_converges_in_one_correction() {
        let f = |x: f64| 2.0 * x - 1.0;

        let result = newton_forward(f, 0.0, 1e-5, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 0.5, epsilon = 1e-6);
        assert!(result.iterations <= 2);
    }

    #[test]
    fn test_flat_function_is_degenerate() {
        // Constant function has a zero derivative everywhere
        let f = |_x: f64| 1.0;

        let result = newton_forward(f, 0.0, 1e-5, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::DivisionByZero { .. })));
    }

    #[test]
    fn test_iteration_budget_exhausted() {
        // sin has infinitely many roots; an absurdly tight tolerance and
        // a tiny budget exhausts the iterations instead
        let f = |x: f64| (x * 10.0).sin() + 1.5 * x;

        let config = SolverConfig::new(1e-300, 3);
        let result = newton_forward(f, 0.7, 1e-5, &config);

        assert!(matches!(result, Err(MathError::ConvergenceFailed { .. })));
    }

    #[test]
    fn test_root_is_new_point_after_final_step() {
        // The returned root must include the final correction, not the
        // point the step was measured from
        let f = |x: f64| x * x - 4.0;

        let result = newton_forward(f, 3.0, 1e-5, &SolverConfig::default()).unwrap();

        assert!(result.residual.abs() < 1e-4);
    }
}
