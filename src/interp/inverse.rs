//! interp::inverse — numeric inverses of monotone functions.
//!
//! Purpose
//! -------
//! Approximate the inverse of a monotone function by sampling it on a set of
//! points and interpolating the swapped pairs `(f(x_i), x_i)` piecewise
//! linearly.
//!
//! Key behaviors
//! -------------
//! - The evaluation strategy is chosen at compile time through
//!   [`MonotoneFn`]: [`Vectorized`] calls the function once on the whole
//!   sample, [`Elementwise`] once per point.
//! - The returned [`LinearInterpolant`] maps outputs back to inputs and is
//!   exact at every sampled output.
//!
//! Invariants & assumptions
//! ------------------------
//! - Monotonicity is the caller's promise and is not verified. Tied outputs
//!   (a function that is flat on the sample) are logged at warn level and
//!   resolved as documented on [`LinearInterpolant`].
//! - Out-of-range queries follow the chosen [`Extrapolation`]; the default
//!   clamps to the sampled input range.
//!
//! Conventions
//! -----------
//! - Additional function parameters are captured by the closure rather than
//!   forwarded as separate arguments.

use crate::interp::{
    errors::{InterpError, InterpResult},
    linear::{Extrapolation, LinearInterpolant},
};
use ndarray::{Array1, ArrayBase, Data, Ix1};

/// A function that can be sampled on a one-dimensional grid.
pub trait MonotoneFn {
    /// Evaluate at every point of `x`, preserving order.
    fn sample(&self, x: &Array1<f64>) -> Array1<f64>;
}

/// Batch strategy: the wrapped function maps a whole sample at once.
#[derive(Debug, Clone, Copy)]
pub struct Vectorized<F>(pub F);

impl<F> Vectorized<F>
where
    F: Fn(&Array1<f64>) -> Array1<f64>,
{
    pub fn new(f: F) -> Self {
        Vectorized(f)
    }
}

impl<F> MonotoneFn for Vectorized<F>
where
    F: Fn(&Array1<f64>) -> Array1<f64>,
{
    fn sample(&self, x: &Array1<f64>) -> Array1<f64> {
        (self.0)(x)
    }
}

/// Scalar strategy: the wrapped function is called once per point.
#[derive(Debug, Clone, Copy)]
pub struct Elementwise<F>(pub F);

impl<F> Elementwise<F>
where
    F: Fn(f64) -> f64,
{
    pub fn new(f: F) -> Self {
        Elementwise(f)
    }
}

impl<F> MonotoneFn for Elementwise<F>
where
    F: Fn(f64) -> f64,
{
    fn sample(&self, x: &Array1<f64>) -> Array1<f64> {
        x.iter().map(|&v| (self.0)(v)).collect()
    }
}

/// monotone_fn_inverter — piecewise-linear inverse of a monotone function.
///
/// Parameters
/// ----------
/// - `f`: `&M`
///   Monotone function wrapped in [`Vectorized`] or [`Elementwise`]. No check
///   is made that it is actually monotone on `x`.
/// - `x`: `&ArrayBase<S, Ix1>`
///   Sample points in the function's domain, in any order.
///
/// Returns
/// -------
/// `InterpResult<LinearInterpolant>`
///   Interpolant with nodes `f(x)` and values `x`, using
///   [`Extrapolation::Clamp`] outside the sampled output range.
///
/// Errors
/// ------
/// - `InterpError::ShapeMismatch` if a vectorized function returns a
///   different number of outputs than inputs.
/// - `InterpError::EmptyNodes` if `x` is empty.
/// - `InterpError::NaNNode` if the function returns NaN.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::{Array1, array};
/// # use rust_stat_utils::interp::{Vectorized, monotone_fn_inverter};
/// let cube = Vectorized::new(|x: &Array1<f64>| x.mapv(|v| v * v * v));
/// let inv = monotone_fn_inverter(&cube, &array![-2.0, -1.0, 0.0, 1.0, 2.0]).unwrap();
/// assert_eq!(inv.eval(8.0), 2.0);
/// assert_eq!(inv.eval(-1.0), -1.0);
/// ```
pub fn monotone_fn_inverter<M, S>(f: &M, x: &ArrayBase<S, Ix1>) -> InterpResult<LinearInterpolant>
where
    M: MonotoneFn,
    S: Data<Elem = f64>,
{
    monotone_fn_inverter_with(f, x, Extrapolation::default())
}

/// monotone_fn_inverter_with — [`monotone_fn_inverter`] with an explicit
/// out-of-range policy.
pub fn monotone_fn_inverter_with<M, S>(
    f: &M, x: &ArrayBase<S, Ix1>, extrapolation: Extrapolation,
) -> InterpResult<LinearInterpolant>
where
    M: MonotoneFn,
    S: Data<Elem = f64>,
{
    let x = x.to_owned();
    let y = f.sample(&x);
    if y.len() != x.len() {
        return Err(InterpError::ShapeMismatch { nodes: y.len(), values: x.len() });
    }

    let inverse = LinearInterpolant::new(&y, &x, extrapolation)?;
    if inverse.has_tied_nodes() {
        log::warn!(
            "monotone_fn_inverter: sampled outputs contain ties; the function is not strictly \
             monotone on the {} sample points",
            x.len()
        );
    }
    Ok(inverse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;
    use statrs::distribution::{ContinuousCDF, Normal};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Round trips at the sample nodes for increasing and decreasing
    //   functions, under both strategies.
    // - Agreement between the vectorized and elementwise strategies.
    // - Interpolation accuracy against an analytic inverse (normal quantile).
    // - Out-of-range behavior and error paths.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // The inverse recovers every sample point from its image.
    //
    // Given
    // -----
    // - f(x) = exp(x) on an unsorted grid, vectorized.
    //
    // Expect
    // ------
    // - inv(f(x_i)) == x_i exactly.
    fn inverter_round_trips_at_sample_nodes() {
        // Arrange
        let x = array![0.5, -1.0, 2.0, 0.0, 1.25, -0.3];
        let exp = Vectorized::new(|v: &Array1<f64>| v.mapv(f64::exp));

        // Act
        let inv = monotone_fn_inverter(&exp, &x).unwrap();

        // Assert
        for &x_i in x.iter() {
            assert_eq!(inv.eval(x_i.exp()), x_i);
        }
    }

    #[test]
    // Purpose
    // -------
    // Both strategies build the same interpolant, also for decreasing
    // functions.
    //
    // Given
    // -----
    // - f(x) = -x³ + 2 sampled on [0, 0.5, ..., 3].
    //
    // Expect
    // ------
    // - Identical interpolants; the inverse round-trips and is decreasing.
    fn inverter_strategies_agree_for_decreasing_functions() {
        // Arrange
        let x = Array1::linspace(0.0, 3.0, 7);
        let batch = Vectorized::new(|v: &Array1<f64>| v.mapv(|t| -t * t * t + 2.0));
        let scalar = Elementwise::new(|t: f64| -t * t * t + 2.0);

        // Act
        let inv_batch = monotone_fn_inverter(&batch, &x).unwrap();
        let inv_scalar = monotone_fn_inverter(&scalar, &x).unwrap();

        // Assert
        assert_eq!(inv_batch, inv_scalar);
        for &x_i in x.iter() {
            assert_eq!(inv_scalar.eval(-x_i * x_i * x_i + 2.0), x_i);
        }
        assert!(inv_scalar.eval(0.0) > inv_scalar.eval(1.0));
    }

    #[test]
    // Purpose
    // -------
    // Between nodes the inverse approximates the true inverse.
    //
    // Given
    // -----
    // - The standard normal CDF sampled on 401 points in [-4, 4]; closure
    //   captures the distribution.
    //
    // Expect
    // ------
    // - inv(p) is within 1e-3 of the normal quantile for p in [0.05, 0.95].
    fn inverter_approximates_normal_quantile() {
        // Arrange
        let normal = Normal::new(0.0, 1.0).unwrap();
        let cdf = Elementwise::new(|t: f64| normal.cdf(t));
        let x = Array1::linspace(-4.0, 4.0, 401);

        // Act
        let quantile = monotone_fn_inverter(&cdf, &x).unwrap();

        // Assert
        for p in Array1::linspace(0.05, 0.95, 19).iter() {
            assert_abs_diff_eq!(quantile.eval(*p), normal.inverse_cdf(*p), epsilon = 1e-3);
        }
    }

    #[test]
    // Purpose
    // -------
    // Outside the sampled outputs the configured policy applies uniformly.
    //
    // Given
    // -----
    // - f(x) = 2x on [0, 1, 2]; default (clamp) and linear extrapolation.
    //
    // Expect
    // ------
    // - Clamp: inv(10) = 2, inv(-10) = 0. Linear: inv(10) = 5, inv(-10) = -5.
    fn inverter_applies_extrapolation_policy() {
        // Arrange
        let double = Elementwise::new(|t: f64| 2.0 * t);
        let x = array![0.0, 1.0, 2.0];

        // Act
        let clamped = monotone_fn_inverter(&double, &x).unwrap();
        let linear = monotone_fn_inverter_with(&double, &x, Extrapolation::Linear).unwrap();

        // Assert
        assert_eq!(clamped.eval(10.0), 2.0);
        assert_eq!(clamped.eval(-10.0), 0.0);
        assert_abs_diff_eq!(linear.eval(10.0), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(linear.eval(-10.0), -5.0, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Contract violations by the function or sample are reported.
    //
    // Given
    // -----
    // - A vectorized function that drops an element; an empty sample; a
    //   function that returns NaN.
    //
    // Expect
    // ------
    // - `ShapeMismatch`, `EmptyNodes`, `NaNNode`.
    fn inverter_reports_malformed_samples() {
        let short = Vectorized::new(|v: &Array1<f64>| v.slice(ndarray::s![1..]).to_owned());
        let identity = Elementwise::new(|t: f64| t);
        let nan = Elementwise::new(|_: f64| f64::NAN);

        assert_eq!(
            monotone_fn_inverter(&short, &array![1.0, 2.0, 3.0]),
            Err(InterpError::ShapeMismatch { nodes: 2, values: 3 })
        );
        assert_eq!(
            monotone_fn_inverter(&identity, &Array1::<f64>::zeros(0)),
            Err(InterpError::EmptyNodes)
        );
        assert_eq!(
            monotone_fn_inverter(&nan, &array![1.0]),
            Err(InterpError::NaNNode { index: 0 })
        );
    }
}
