//! Newton-Raphson root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult, DERIVATIVE_STEP, FLAT_DERIVATIVE_THRESHOLD};

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration:
/// `x_{n+1} = x_n - f(x_n) / f'(x_n)`
///
/// This method has quadratic convergence near the root but requires
/// the derivative of the function.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `df` - The derivative of the function
/// * `initial_guess` - Starting point for the iteration
/// * `config` - Solver configuration
///
/// # Returns
///
/// The root and iteration statistics, or an error when the iteration cap
/// is exhausted or a numerically flat region is reached.
///
/// # Example
///
/// ```rust
/// use tenor_math::solvers::{newton_raphson, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = newton_raphson(f, df, 1.5, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-8);
/// ```
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let mut x = initial_guess;

    for iteration in 0..config.max_iterations {
        let fx = f(x);

        // Check for convergence
        if fx.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        let dfx = df(x);

        // Flat region: report, never retry indefinitely
        if dfx.abs() < FLAT_DERIVATIVE_THRESHOLD {
            return Err(MathError::DivisionByZero {
                value: dfx,
                iterations: iteration,
                residual: fx,
            });
        }

        // Newton step
        let step = fx / dfx;
        x -= step;

        // Check for step convergence
        if step.abs() < config.tolerance {
            let final_fx = f(x);
            return Ok(SolverResult {
                root: x,
                iterations: iteration + 1,
                residual: final_fx,
            });
        }
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        f(x).abs(),
    ))
}

/// Newton-Raphson with numerical derivative estimation.
///
/// Uses a central finite difference with step [`DERIVATIVE_STEP`] to
/// estimate the derivative when an analytical derivative is not available.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `initial_guess` - Starting point for the iteration
/// * `config` - Solver configuration
pub fn newton_raphson_numerical<F>(
    f: F,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let df = |x: f64| {
        let f1 = f(x + DERIVATIVE_STEP);
        let f2 = f(x - DERIVATIVE_STEP);
        (f1 - f2) / (2.0 * DERIVATIVE_STEP)
    };

    newton_raphson(&f, df, initial_guess, config)
}
