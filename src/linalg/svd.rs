//! linalg::svd — singular value decomposition bridge and ordering.
//!
//! Purpose
//! -------
//! Wrap nalgebra's dense SVD behind an `ndarray` interface and normalize its
//! output so that downstream rank and basis routines can rely on singular
//! values sorted in descending order, with the matching left singular
//! vectors permuted alongside.
//!
//! Key behaviors
//! -------------
//! - Validate that the input matrix is non-empty and finite.
//! - Copy the `ndarray` matrix into a `nalgebra::DMatrix` (`fill_dmatrix`).
//! - Run `try_svd` with the convergence settings from [`SvdOptions`].
//! - Re-sort singular values descending via [`descending_order`] regardless
//!   of the ordering produced by the decomposition.
//!
//! Invariants & assumptions
//! ------------------------
//! - `SingularSystem::singular_values` is non-increasing.
//! - When requested, column `k` of `SingularSystem::left_vectors` is the left
//!   singular vector belonging to `singular_values[k]`.
//! - Ties between equal singular values keep the decomposition's relative
//!   order (the sort is stable).
//!
//! Conventions
//! -----------
//! - Only the thin factor `U` (`rows × min(rows, cols)`) is ever materialized;
//!   right singular vectors are not needed by this crate.
//! - Errors are reported via [`LinalgResult`].

use crate::linalg::errors::{LinalgError, LinalgResult};
use nalgebra::DMatrix;
use ndarray::{Array1, Array2, ArrayBase, Data, Ix2};

/// Default relative tolerance for numerical rank decisions.
pub const DEFAULT_COND: f64 = 1.0e-6;

/// SvdOptions — configuration for rank estimation and basis extraction.
///
/// Fields
/// ------
/// - `cond`: relative tolerance; a singular value `d` counts toward the rank
///   when `d / d_max > cond`.
/// - `eps`: convergence threshold handed to the SVD iteration; must be
///   finite and strictly positive.
/// - `max_niter`: iteration budget for the SVD; `0` means unlimited.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvdOptions {
    pub cond: f64,
    pub eps: f64,
    pub max_niter: usize,
}

impl SvdOptions {
    /// Build validated options.
    ///
    /// # Errors
    /// - `LinalgError::InvalidCond` if `cond` is negative or non-finite.
    /// - `LinalgError::InvalidEps` if `eps` is not finite and positive.
    pub fn new(cond: f64, eps: f64, max_niter: usize) -> LinalgResult<Self> {
        let opts = SvdOptions { cond, eps, max_niter };
        opts.validate()?;
        Ok(opts)
    }

    /// Default options with a custom relative tolerance.
    pub fn with_cond(cond: f64) -> LinalgResult<Self> {
        SvdOptions::new(cond, f64::EPSILON, 0)
    }

    pub(crate) fn validate(&self) -> LinalgResult<()> {
        if !self.cond.is_finite() || self.cond < 0.0 {
            return Err(LinalgError::InvalidCond { cond: self.cond });
        }
        if !self.eps.is_finite() || self.eps <= 0.0 {
            return Err(LinalgError::InvalidEps { eps: self.eps });
        }
        Ok(())
    }
}

impl Default for SvdOptions {
    fn default() -> Self {
        SvdOptions { cond: DEFAULT_COND, eps: f64::EPSILON, max_niter: 0 }
    }
}

/// Singular values sorted descending, optionally with matching left vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct SingularSystem {
    pub singular_values: Array1<f64>,
    pub left_vectors: Option<Array2<f64>>,
}

/// singular_system — SVD of `x` with descending singular values.
///
/// Parameters
/// ----------
/// - `x`: `&ArrayBase<S, Ix2>`
///   Dense `rows × cols` matrix. Must be non-empty with finite entries.
/// - `compute_u`: `bool`
///   Whether to return the left singular vectors.
/// - `opts`: `&SvdOptions`
///   Convergence settings (`eps`, `max_niter`); `cond` is not used here.
///
/// Returns
/// -------
/// `LinalgResult<SingularSystem>`
///   `min(rows, cols)` singular values in descending order and, when
///   `compute_u` is set, the `rows × min(rows, cols)` matrix of left singular
///   vectors with its columns permuted to match.
///
/// Errors
/// ------
/// - `LinalgError::EmptyMatrix` for a zero-length dimension.
/// - `LinalgError::NonFiniteEntry` for NaN/±∞ entries.
/// - `LinalgError::InvalidEps` / `InvalidCond` for malformed options.
/// - `LinalgError::DecompositionFailed` if the iteration does not converge.
pub fn singular_system<S>(
    x: &ArrayBase<S, Ix2>, compute_u: bool, opts: &SvdOptions,
) -> LinalgResult<SingularSystem>
where
    S: Data<Elem = f64>,
{
    opts.validate()?;
    validate_matrix(x)?;

    let mut x_nalg = DMatrix::<f64>::zeros(x.nrows(), x.ncols());
    fill_dmatrix(x, &mut x_nalg);

    let svd = match x_nalg.try_svd(compute_u, false, opts.eps, opts.max_niter) {
        Some(svd) => svd,
        None => {
            log::warn!(
                "SVD of a {}x{} matrix did not converge (max_niter = {})",
                x.nrows(),
                x.ncols(),
                opts.max_niter
            );
            return Err(LinalgError::DecompositionFailed { max_niter: opts.max_niter });
        }
    };

    let raw: Vec<f64> = svd.singular_values.iter().copied().collect();
    let order = descending_order(&raw);
    let singular_values: Array1<f64> = order.iter().map(|&k| raw[k]).collect();

    let left_vectors = svd.u.map(|u| {
        Array2::from_shape_fn((u.nrows(), order.len()), |(i, j)| u[(i, order[j])])
    });

    Ok(SingularSystem { singular_values, left_vectors })
}

/// Descending singular values of `x` with default convergence settings.
pub fn singular_values<S>(x: &ArrayBase<S, Ix2>) -> LinalgResult<Array1<f64>>
where
    S: Data<Elem = f64>,
{
    Ok(singular_system(x, false, &SvdOptions::default())?.singular_values)
}

/// descending_order — stable argsort of `values`, largest first.
///
/// Equal values keep their input order. The decomposition's own ordering is
/// never trusted; callers index into the raw output through this permutation.
pub fn descending_order(values: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[b].total_cmp(&values[a]));
    order
}

// ---- Helper methods ----

fn validate_matrix<S>(x: &ArrayBase<S, Ix2>) -> LinalgResult<()>
where
    S: Data<Elem = f64>,
{
    let (rows, cols) = x.dim();
    if rows == 0 || cols == 0 {
        return Err(LinalgError::EmptyMatrix { rows, cols });
    }
    if let Some(((row, col), &value)) = x.indexed_iter().find(|(_, v)| !v.is_finite()) {
        return Err(LinalgError::NonFiniteEntry { row, col, value });
    }
    Ok(())
}

/// Copy `x` into a preallocated `DMatrix` of the same shape, column by
/// column to follow `DMatrix`'s column-major storage.
fn fill_dmatrix<S>(x: &ArrayBase<S, Ix2>, x_nalg: &mut DMatrix<f64>)
where
    S: Data<Elem = f64>,
{
    for j in 0..x.ncols() {
        for i in 0..x.nrows() {
            x_nalg[(i, j)] = x[[i, j]];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Option validation for `SvdOptions`.
    // - Input validation (empty and non-finite matrices).
    // - Descending order of singular values and the permutation helper.
    // - Consistency between permuted left vectors and singular values.
    //
    // They intentionally DO NOT cover:
    // - Rank and basis semantics; those live in `linalg::rank`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Reject malformed tolerances up front.
    //
    // Given
    // -----
    // - Negative, NaN, and infinite `cond` / `eps`.
    //
    // Expect
    // ------
    // - `InvalidCond` / `InvalidEps` errors; defaults validate cleanly.
    fn svdoptions_new_rejects_invalid_tolerances() {
        assert!(matches!(SvdOptions::new(-1.0, 1e-12, 0), Err(LinalgError::InvalidCond { .. })));
        assert!(matches!(
            SvdOptions::new(f64::NAN, 1e-12, 0),
            Err(LinalgError::InvalidCond { .. })
        ));
        assert!(matches!(
            SvdOptions::new(1e-6, f64::INFINITY, 0),
            Err(LinalgError::InvalidEps { .. })
        ));
        assert!(SvdOptions::default().validate().is_ok());
        assert_eq!(SvdOptions::with_cond(1e-3).unwrap().cond, 1e-3);
    }

    #[test]
    // Purpose
    // -------
    // A zero convergence threshold is rejected up front, both by the
    // constructor and when options are built field by field.
    //
    // Given
    // -----
    // - `eps = 0` with an unlimited iteration budget; a generic 6×5 matrix.
    //
    // Expect
    // ------
    // - `InvalidEps { eps: 0.0 }` from `new` and from `singular_system`,
    //   without starting the decomposition.
    fn zero_eps_is_rejected_before_decomposition() {
        // Arrange
        let x = Array2::from_shape_fn((6, 5), |(i, j)| ((i * 5 + j) as f64).sin() + 0.1 * i as f64);
        let literal = SvdOptions { cond: 1e-6, eps: 0.0, max_niter: 0 };

        // Act / Assert
        assert_eq!(SvdOptions::new(1e-6, 0.0, 0), Err(LinalgError::InvalidEps { eps: 0.0 }));
        assert_eq!(SvdOptions::new(1e-6, 0.0, 100), Err(LinalgError::InvalidEps { eps: 0.0 }));
        assert_eq!(singular_system(&x, true, &literal), Err(LinalgError::InvalidEps { eps: 0.0 }));
    }

    #[test]
    // Purpose
    // -------
    // Ensure degenerate matrices are rejected before decomposition.
    //
    // Given
    // -----
    // - A `0×3` matrix and a matrix containing NaN at (1, 0).
    //
    // Expect
    // ------
    // - `EmptyMatrix { rows: 0, cols: 3 }` and
    //   `NonFiniteEntry { row: 1, col: 0, .. }`.
    fn singular_system_rejects_empty_and_non_finite_matrices() {
        // Arrange
        let empty = Array2::<f64>::zeros((0, 3));
        let with_nan = array![[1.0, 2.0], [f64::NAN, 3.0]];

        // Act
        let empty_err = singular_system(&empty, false, &SvdOptions::default());
        let nan_err = singular_system(&with_nan, false, &SvdOptions::default());

        // Assert
        assert_eq!(empty_err, Err(LinalgError::EmptyMatrix { rows: 0, cols: 3 }));
        assert!(matches!(nan_err, Err(LinalgError::NonFiniteEntry { row: 1, col: 0, .. })));
    }

    #[test]
    // Purpose
    // -------
    // Check that singular values come back sorted descending even when the
    // diagonal input lists them in ascending order.
    //
    // Given
    // -----
    // - `diag(1, 5, 3)`.
    //
    // Expect
    // ------
    // - Singular values `[5, 3, 1]`.
    fn singular_values_are_sorted_descending() {
        // Arrange
        let x = array![[1.0, 0.0, 0.0], [0.0, 5.0, 0.0], [0.0, 0.0, 3.0]];

        // Act
        let d = singular_values(&x).unwrap();

        // Assert
        assert_eq!(d.len(), 3);
        assert_relative_eq!(d[0], 5.0, epsilon = 1e-12);
        assert_relative_eq!(d[1], 3.0, epsilon = 1e-12);
        assert_relative_eq!(d[2], 1.0, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Verify that permuted left vectors stay paired with their singular
    // values: `‖Xᵀ u_k‖ = d_k` for every column `k`.
    //
    // Given
    // -----
    // - A `4×3` matrix with distinct singular values.
    //
    // Expect
    // ------
    // - `U` is `4×3` and each column satisfies the identity above.
    fn singular_system_left_vectors_match_singular_values() {
        // Arrange
        let x = array![[2.0, 0.0, 1.0], [0.0, 3.0, 0.0], [1.0, 0.0, 4.0], [0.0, 1.0, 0.0]];

        // Act
        let sys = singular_system(&x, true, &SvdOptions::default()).unwrap();
        let u = sys.left_vectors.expect("left vectors requested");

        // Assert
        assert_eq!(u.dim(), (4, 3));
        for k in 0..3 {
            let xt_u = x.t().dot(&u.column(k));
            let norm = xt_u.dot(&xt_u).sqrt();
            assert_relative_eq!(norm, sys.singular_values[k], epsilon = 1e-10);
        }
    }

    #[test]
    // Purpose
    // -------
    // Pin the tie-handling of `descending_order`.
    //
    // Given
    // -----
    // - Values `[1, 3, 3, 2]`.
    //
    // Expect
    // ------
    // - `[1, 2, 3, 0]`: ties keep input order.
    fn descending_order_is_stable_on_ties() {
        assert_eq!(descending_order(&[1.0, 3.0, 3.0, 2.0]), vec![1, 2, 3, 0]);
        assert!(descending_order(&[]).is_empty());
    }
}
