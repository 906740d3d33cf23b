//! Bracketed scalar Newton solver.

use crate::error::{SolverError, SolverResult};

/// Newton solver configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonConfig {
    /// Maximum iterations
    pub max_iterations: usize,
    /// Absolute tolerance on the residual
    pub residual_tol: f64,
    /// Step tolerance, relative to the current iterate
    pub step_rel_tol: f64,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            residual_tol: 1e-12,
            step_rel_tol: 1e-14,
        }
    }
}

/// Newton iteration result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonResult {
    /// Root estimate
    pub x: f64,
    /// Final residual
    pub residual: f64,
    /// Number of iterations
    pub iterations: usize,
}

/// Find the root of an increasing function on `[lo, hi]`.
///
/// Requires `f(lo) <= 0 <= f(hi)`. `f` is only ever evaluated strictly
/// inside the bracket or at `hi`, so it may be undefined at `lo`. Any Newton
/// step that would leave the current bracket is replaced by bisection.
pub fn newton_bracketed<F, D>(
    lo: f64,
    hi: f64,
    residual_fn: F,
    derivative_fn: D,
    config: &NewtonConfig,
) -> SolverResult<NewtonResult>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    if !(lo.is_finite() && hi.is_finite()) || hi <= lo {
        return Err(SolverError::ComputationDegenerate {
            what: format!("empty Newton bracket [{lo}, {hi}]"),
        });
    }

    let (mut lo, mut hi) = (lo, hi);
    let mut x = hi;

    for iter in 0..config.max_iterations {
        let r = residual_fn(x);
        if !r.is_finite() {
            return Err(SolverError::ComputationDegenerate {
                what: format!("non-finite residual at x = {x}"),
            });
        }

        tracing::trace!(iter, x, residual = r, lo, hi, "newton iteration");

        if r.abs() <= config.residual_tol {
            return Ok(NewtonResult {
                x,
                residual: r,
                iterations: iter,
            });
        }

        // Shrink bracket
        if r > 0.0 {
            hi = x;
        } else {
            lo = x;
        }

        let slope = derivative_fn(x);
        let mut next = x - r / slope;
        if !next.is_finite() || next <= lo || next >= hi {
            next = 0.5 * (lo + hi);
        }

        // Relative to the iterate so roots far below the bracket width still resolve
        if (next - x).abs() <= config.step_rel_tol * next.abs().max(f64::MIN_POSITIVE) {
            return Ok(NewtonResult {
                x: next,
                residual: residual_fn(next),
                iterations: iter + 1,
            });
        }

        x = next;
    }

    Err(SolverError::ConvergenceFailed {
        what: format!(
            "Maximum iterations {} reached, bracket = [{lo}, {hi}]",
            config.max_iterations
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_quadratic() {
        // Solve x^2 - 4 = 0 on [0, 3]
        let result = newton_bracketed(
            0.0,
            3.0,
            |x| x * x - 4.0,
            |x| 2.0 * x,
            &NewtonConfig::default(),
        )
        .unwrap();

        assert!((result.x - 2.0).abs() < 1e-10);
    }

    #[test]
    fn log_residual_undefined_at_lower_bound() {
        // ln(x) = ln(1e-6), undefined at x = 0
        let target = 1e-6_f64.ln();
        let result = newton_bracketed(
            0.0,
            1.0,
            |x| x.ln() - target,
            |x| 1.0 / x,
            &NewtonConfig::default(),
        )
        .unwrap();

        assert!((result.x - 1e-6).abs() < 1e-15);
    }

    #[test]
    fn root_many_decades_below_bracket() {
        let target = 1e-17_f64.ln();
        let result = newton_bracketed(
            0.0,
            1e-3,
            |x| x.ln() - target,
            |x| 1.0 / x,
            &NewtonConfig::default(),
        )
        .unwrap();

        assert!((result.x / 1e-17 - 1.0).abs() < 1e-9, "x = {}", result.x);
    }

    #[test]
    fn empty_bracket_is_degenerate() {
        let err = newton_bracketed(1.0, 1.0, |x| x, |_| 1.0, &NewtonConfig::default())
            .unwrap_err();
        assert!(matches!(err, SolverError::ComputationDegenerate { .. }));
    }

    #[test]
    fn iteration_cap_reports_convergence_failure() {
        let config = NewtonConfig {
            max_iterations: 2,
            residual_tol: 0.0,
            step_rel_tol: 0.0,
        };
        let err = newton_bracketed(0.0, 10.0, |x| x.powi(3) - 2.0, |x| 3.0 * x * x, &config)
            .unwrap_err();
        assert!(matches!(err, SolverError::ConvergenceFailed { .. }));
    }
}
