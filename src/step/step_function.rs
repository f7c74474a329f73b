//! step::step_function — right-continuous piecewise-constant functions.
//!
//! Purpose
//! -------
//! Represent a step function by its breakpoints and values and evaluate it at
//! scalar or array-valued points. Values at the ends are handled in the
//! simplest way possible: everything left of the first breakpoint maps to the
//! initial value `ival`, everything at or right of the last breakpoint maps
//! to the last value.
//!
//! Key behaviors
//! -------------
//! - Prepend the synthetic pair `(-∞, ival)` to the caller's breakpoints and
//!   values.
//! - Unless the caller declares the input presorted, co-sort both sequences
//!   by breakpoint with a stable sort (ties keep their input order).
//! - Evaluate with a binary search for the number of breakpoints `<= t`
//!   (searchsorted, side = right) minus one.
//!
//! Invariants & assumptions
//! ------------------------
//! - `x[0] == -∞` and `y[0] == ival` after a sorted construction.
//! - `x.len() == y.len() == n`.
//! - No breakpoint is NaN.
//! - The value on `[x[k], x[k+1])` is `y[k]`; for tied breakpoints the last
//!   tied value wins.
//! - With `presorted = true` the caller guarantees ascending breakpoints;
//!   nothing is checked and unsorted input gives unspecified (but memory-
//!   safe) results.
//!
//! Conventions
//! -----------
//! - Instances are immutable after construction and `Send + Sync`;
//!   evaluations may run concurrently.
//! - NaN queries evaluate to NaN.

use crate::step::errors::{StepError, StepResult};
use ndarray::{Array, ArrayBase, ArrayView1, Data, Dimension};
use std::cmp::Ordering;

/// StepFunction — right-continuous step function on the real line.
///
/// Fields
/// ------
/// - `x`: breakpoints, `-∞` first, ascending.
/// - `y`: value taken from each breakpoint up to the next one.
/// - `ival`: value left of every real breakpoint.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::{Array1, array};
/// # use rust_stat_utils::step::StepFunction;
/// let x = Array1::range(0.0, 20.0, 1.0);
/// let f = StepFunction::new(&x, &x, 0.0, false).unwrap();
///
/// assert_eq!(f.eval(3.2), 3.0);
/// assert_eq!(
///     f.eval_array(&array![[3.2, 4.5], [24.0, -3.1]]),
///     array![[3.0, 4.0], [19.0, 0.0]]
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StepFunction {
    x: Vec<f64>,
    y: Vec<f64>,
    ival: f64,
}

impl StepFunction {
    /// Build a step function from breakpoints `x` and values `y`.
    ///
    /// Parameters
    /// ----------
    /// - `x`, `y`: arrays of identical shape; must be one-dimensional. They
    ///   are taken as arbitrary-dimensional arrays so that the shape and
    ///   dimension checks report the caller's actual input.
    /// - `ival`: value for inputs below the first breakpoint.
    /// - `presorted`: skip the co-sort when `x` is already ascending.
    ///
    /// Errors
    /// ------
    /// - `StepError::ShapeMismatch` when `x.shape() != y.shape()`.
    /// - `StepError::DimensionError` when the inputs are not 1-D.
    /// - `StepError::NaNBreakpoint` when `x` contains NaN.
    pub fn new<Sx, Sy, Dx, Dy>(
        x: &ArrayBase<Sx, Dx>, y: &ArrayBase<Sy, Dy>, ival: f64, presorted: bool,
    ) -> StepResult<Self>
    where
        Sx: Data<Elem = f64>,
        Sy: Data<Elem = f64>,
        Dx: Dimension,
        Dy: Dimension,
    {
        if x.shape() != y.shape() {
            return Err(StepError::ShapeMismatch {
                x_shape: x.shape().to_vec(),
                y_shape: y.shape().to_vec(),
            });
        }
        if x.ndim() != 1 {
            return Err(StepError::DimensionError { ndim: x.ndim() });
        }
        if let Some(index) = x.iter().position(|v| v.is_nan()) {
            return Err(StepError::NaNBreakpoint { index });
        }

        let xs: Vec<f64> = std::iter::once(f64::NEG_INFINITY).chain(x.iter().copied()).collect();
        let ys: Vec<f64> = std::iter::once(ival).chain(y.iter().copied()).collect();

        if presorted {
            return Ok(StepFunction { x: xs, y: ys, ival });
        }

        let order = ascending_order(&xs);
        Ok(StepFunction {
            x: order.iter().map(|&k| xs[k]).collect(),
            y: order.iter().map(|&k| ys[k]).collect(),
            ival,
        })
    }

    /// [`StepFunction::new`] for plain slices.
    pub fn from_slices(x: &[f64], y: &[f64], ival: f64, presorted: bool) -> StepResult<Self> {
        StepFunction::new(&ArrayView1::from(x), &ArrayView1::from(y), ival, presorted)
    }

    /// Evaluate at a single point.
    pub fn eval(&self, t: f64) -> f64 {
        let upper = self.x.partition_point(|&b| b <= t);
        if upper == 0 {
            // Only reachable for NaN: every real t satisfies -∞ <= t.
            return f64::NAN;
        }
        self.y[upper - 1]
    }

    /// Evaluate elementwise; the result has the shape of `t`.
    pub fn eval_array<S, D>(&self, t: &ArrayBase<S, D>) -> Array<f64, D>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        t.mapv(|v| self.eval(v))
    }

    /// Breakpoints, starting with `-∞`.
    pub fn x(&self) -> ArrayView1<'_, f64> {
        ArrayView1::from(&self.x[..])
    }

    /// Step values, starting with `ival` (after sorting).
    pub fn y(&self) -> ArrayView1<'_, f64> {
        ArrayView1::from(&self.y[..])
    }

    pub fn ival(&self) -> f64 {
        self.ival
    }

    /// Number of stored breakpoints, the synthetic `-∞` included.
    pub fn n(&self) -> usize {
        self.x.len()
    }
}

// ---- Helper methods ----

/// Stable ascending argsort. Inputs are NaN-free, so `partial_cmp` is total.
fn ascending_order(values: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].partial_cmp(&values[b]).unwrap_or(Ordering::Equal));
    order
}
