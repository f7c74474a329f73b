//! step::ecdf — empirical cumulative distribution functions.

use crate::step::{errors::StepResult, step_function::StepFunction};
use ndarray::{Array1, ArrayBase, Data, Dimension};

/// ecdf — empirical CDF of `values` as a [`StepFunction`].
///
/// Parameters
/// ----------
/// - `values`: `&ArrayBase<S, D>`
///   Sample of any shape; it is copied and flattened in logical order, the
///   caller's array is never modified.
///
/// Returns
/// -------
/// `StepResult<StepFunction>`
///   `f(t) = #{values <= t} / n`: `0` below the sample minimum, `1.0` at and
///   above the maximum, non-decreasing and right-continuous in between. An
///   empty sample yields the constant-zero function.
///
/// Errors
/// ------
/// - `StepError::NaNBreakpoint` if the sample contains NaN.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use rust_stat_utils::step::ecdf;
/// let f = ecdf(&array![5.0, 1.0, 3.0, 2.0, 4.0]).unwrap();
/// assert!((f.eval(3.0) - 0.6).abs() < 1e-12);
/// assert_eq!(f.eval(0.0), 0.0);
/// assert_eq!(f.eval(100.0), 1.0);
/// ```
pub fn ecdf<S, D>(values: &ArrayBase<S, D>) -> StepResult<StepFunction>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let mut x: Vec<f64> = values.iter().copied().collect();
    x.sort_by(f64::total_cmp);
    let n = x.len();
    let y: Array1<f64> = (0..n).map(|i| (i as f64 + 1.0) / n as f64).collect();
    StepFunction::new(&Array1::from(x), &y, 0.0, false)
}
