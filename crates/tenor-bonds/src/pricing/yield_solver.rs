//! Yield-to-maturity solver.
//!
//! Inverts price to yield with Newton-Raphson iteration on
//! `f(y) = price(y) - target_price`, using a central finite-difference
//! derivative. Non-convergence is an expected outcome for poorly
//! conditioned inputs, so it is reported in the result (`converged =
//! false`) rather than raised as an error; batch callers can keep going.
//!
//! # Example
//!
//! ```rust
//! use tenor_bonds::pricing::yield_solver::YieldSolver;
//! use tenor_bonds::spec::BondSpec;
//! use rust_decimal_macros::dec;
//!
//! let spec = BondSpec::new(dec!(1000), dec!(0.05), 5.0, 2).unwrap();
//! let result = YieldSolver::new().solve(&spec, dec!(957.35)).unwrap();
//! assert!(result.converged);
//! assert!((result.yield_value - 0.06).abs() < 1e-4);
//! ```

use log::debug;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tenor_math::solvers::{newton_raphson_numerical, SolverConfig};
use tenor_math::MathError;

use crate::cashflows::CashFlowSchedule;
use crate::error::BondResult;
use crate::spec::BondSpec;

/// Result of a yield calculation.
///
/// Either a valid yield (`converged = true`) or an explicit failure;
/// `yield_value` is NaN only when the explicit flag says so.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct YieldSolveResult {
    /// The calculated yield (as a decimal, e.g., 0.05 for 5%).
    pub yield_value: f64,
    /// Whether the iteration met the tolerance.
    pub converged: bool,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual `price(yield) - target`.
    pub residual: f64,
}

impl YieldSolveResult {
    fn failed(iterations: u32, residual: f64) -> Self {
        Self {
            yield_value: f64::NAN,
            converged: false,
            iterations,
            residual,
        }
    }
}

/// Yield-to-maturity solver.
///
/// Newton-Raphson with a finite-difference derivative. The initial guess
/// defaults to the bond's coupon rate; callers may override it.
#[derive(Debug, Clone)]
pub struct YieldSolver {
    /// Solver configuration.
    config: SolverConfig,
    /// Caller-supplied starting point, if any.
    initial_guess: Option<f64>,
}

impl Default for YieldSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl YieldSolver {
    /// Creates a new yield solver with default settings.
    ///
    /// Default tolerance: 1e-8
    /// Default max iterations: 100
    /// Default initial guess: the bond's coupon rate
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SolverConfig::default(),
            initial_guess: None,
        }
    }

    /// Sets the solver tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = self.config.with_tolerance(tolerance);
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config = self.config.with_max_iterations(max_iterations);
        self
    }

    /// Overrides the initial guess.
    #[must_use]
    pub fn with_initial_guess(mut self, guess: f64) -> Self {
        self.initial_guess = Some(guess);
        self
    }

    /// Solves for the yield that prices `spec` at `target_price`.
    ///
    /// An economically impossible target (zero or negative) is reported as
    /// `converged = false` immediately, never as a negative yield presented
    /// as valid.
    ///
    /// # Errors
    ///
    /// Fails only on structural problems (a schedule that cannot be
    /// generated). Numerical non-convergence is carried in the result.
    pub fn solve(&self, spec: &BondSpec, target_price: Decimal) -> BondResult<YieldSolveResult> {
        let target = target_price.to_f64().unwrap_or(f64::NAN);
        if target.is_nan() || target <= 0.0 {
            debug!("yield solve rejected non-positive target price {target_price}");
            return Ok(YieldSolveResult::failed(0, f64::NAN));
        }

        let schedule = CashFlowSchedule::generate(spec)?;
        let compounding = spec.compounding();

        // Convert cash flows to f64 once for the iteration
        let cf_data: Vec<(f64, f64)> = schedule
            .iter()
            .map(|cf| (cf.time(), cf.amount().to_f64().unwrap_or(0.0)))
            .collect();

        let objective = |y: f64| {
            cf_data
                .iter()
                .map(|(time, amount)| amount * compounding.discount_factor(y, *time))
                .sum::<f64>()
                - target
        };

        let guess = self.initial_guess.unwrap_or_else(|| spec.coupon_rate_f64());

        match newton_raphson_numerical(&objective, guess, &self.config) {
            Ok(result) if result.root.is_finite() => Ok(YieldSolveResult {
                yield_value: result.root,
                converged: true,
                iterations: result.iterations,
                residual: result.residual,
            }),
            Ok(result) => {
                debug!("yield solve produced non-finite root after {} iterations", result.iterations);
                Ok(YieldSolveResult::failed(result.iterations, result.residual))
            }
            Err(MathError::ConvergenceFailed {
                iterations,
                residual,
            }) => {
                debug!("yield solve exhausted {iterations} iterations (residual {residual:.2e})");
                Ok(YieldSolveResult::failed(iterations, residual))
            }
            Err(MathError::DivisionByZero {
                value,
                iterations,
                residual,
            }) => {
                debug!("yield solve hit flat derivative ({value:.2e}) after {iterations} iterations");
                Ok(YieldSolveResult::failed(iterations, residual))
            }
            Err(err) => Err(err.into()),
        }
    }
}
