//! Elementwise reciprocals, zero-column removal, and `l^p` norms.
//!
//! Small array helpers used ahead of pseudoinverse and rank computations.
//! All of them allocate a fresh array and leave the input untouched.

use crate::linalg::errors::{LinalgError, LinalgResult};
use ndarray::{Array, Array2, ArrayBase, Axis, Data, Dimension, Ix2, RemoveAxis};

/// Reciprocal of every entry, with non-positive entries mapped to `0`.
///
/// Intended for arrays that should be positive (variances, weights): any
/// entry `<= 0` is treated as "absent" rather than inverted. NaN stays NaN.
///
/// ```rust
/// # use ndarray::array;
/// # use rust_stat_utils::linalg::elementwise::inv;
/// assert_eq!(inv(&array![2.0, 0.0, -1.0]), array![0.5, 0.0, 0.0]);
/// ```
pub fn inv<S, D>(x: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    x.mapv(|v| {
        if v > 0.0 {
            1.0 / v
        } else if v.is_nan() {
            f64::NAN
        } else {
            0.0
        }
    })
}

/// Reciprocal of every entry, with exact zeros mapped to `0`.
///
/// Unlike [`inv`], negative entries are inverted normally.
pub fn inv0<S, D>(x: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    x.mapv(|v| if v == 0.0 { 0.0 } else { 1.0 / v })
}

/// Drop every column whose entries are all zero.
///
/// Surviving columns keep their relative order. A matrix with only zero
/// columns yields a `rows × 0` result.
pub fn clean0<S>(matrix: &ArrayBase<S, Ix2>) -> Array2<f64>
where
    S: Data<Elem = f64>,
{
    let keep: Vec<usize> = matrix
        .columns()
        .into_iter()
        .enumerate()
        .filter(|(_, col)| col.iter().map(|v| v * v).sum::<f64>() != 0.0)
        .map(|(j, _)| j)
        .collect();
    matrix.select(Axis(1), &keep)
}

/// `l^p` norm of `x` along `axis`: `(Σ |x|^p)^(1/p)`.
///
/// # Errors
/// - `LinalgError::InvalidNormOrder` if `p` is not finite and positive.
/// - `LinalgError::InvalidAxis` if `axis >= x.ndim()`.
///
/// ```rust
/// # use ndarray::array;
/// # use rust_stat_utils::linalg::elementwise::norm;
/// let x = array![[3.0, 1.0], [4.0, 0.0]];
/// assert_eq!(norm(&x, 2.0, 0).unwrap(), array![5.0, 1.0]);
/// ```
pub fn norm<S, D>(x: &ArrayBase<S, D>, p: f64, axis: usize) -> LinalgResult<Array<f64, D::Smaller>>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
{
    if !p.is_finite() || p <= 0.0 {
        return Err(LinalgError::InvalidNormOrder { p });
    }
    if axis >= x.ndim() {
        return Err(LinalgError::InvalidAxis { axis, ndim: x.ndim() });
    }
    let powered = x.mapv(|v| v.abs().powf(p));
    Ok(powered.sum_axis(Axis(axis)).mapv(|s| s.powf(1.0 / p)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn inv_zeroes_non_positive_entries() {
        let out = inv(&array![[4.0, -2.0], [0.0, 0.5]]);
        assert_eq!(out, array![[0.25, 0.0], [0.0, 2.0]]);
        assert!(inv(&array![f64::NAN])[0].is_nan());
    }

    #[test]
    fn inv0_keeps_sign_and_zeroes_exact_zeros() {
        assert_eq!(inv0(&array![2.0, 0.0, -4.0]), array![0.5, 0.0, -0.25]);
    }

    #[test]
    fn clean0_drops_only_all_zero_columns() {
        // Arrange
        let m = array![[0.0, 1.0, 0.0, -2.0], [0.0, 0.0, 0.0, 3.0]];

        // Act
        let cleaned = clean0(&m);

        // Assert
        assert_eq!(cleaned, array![[1.0, -2.0], [0.0, 3.0]]);
        assert_eq!(clean0(&Array2::<f64>::zeros((2, 3))).dim(), (2, 0));
    }

    #[test]
    fn norm_reduces_along_requested_axis() {
        // Arrange
        let x = array![[3.0, -1.0], [-4.0, 1.0]];

        // Act
        let by_col = norm(&x, 2.0, 0).unwrap();
        let by_row = norm(&x, 1.0, 1).unwrap();

        // Assert
        assert_relative_eq!(by_col[0], 5.0, epsilon = 1e-12);
        assert_relative_eq!(by_col[1], 2.0_f64.sqrt(), epsilon = 1e-12);
        assert_eq!(by_row, array![4.0, 5.0]);
    }

    #[test]
    fn norm_rejects_bad_order_and_axis() {
        let x = array![1.0, 2.0];
        assert_eq!(norm(&x, 0.0, 0), Err(LinalgError::InvalidNormOrder { p: 0.0 }));
        assert_eq!(norm(&x, 2.0, 1), Err(LinalgError::InvalidAxis { axis: 1, ndim: 1 }));
    }
}
