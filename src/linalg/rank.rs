//! linalg::rank — numerical rank and column-span bases.
//!
//! Purpose
//! -------
//! Estimate the numerical rank of a dense matrix from its singular values and
//! build a matrix with orthonormal columns spanning the same column space.
//!
//! Key behaviors
//! -------------
//! - [`rank`] / [`rank_with`] count singular values whose ratio to the largest
//!   singular value strictly exceeds the relative tolerance `cond`.
//! - [`fullrank`] / [`fullrank_with`] return the leading `r` left singular
//!   vectors, ordered by decreasing singular value.
//!
//! Invariants & assumptions
//! ------------------------
//! - The rank of the zero matrix is `0`; no ratio is formed when the largest
//!   singular value is zero.
//! - `rank(X) == rank(Xᵀ)` since only singular values are inspected.
//! - A caller-supplied `r` is trusted: it is never compared with, or clamped
//!   to, the numerical rank. Only an `r` above `min(rows, cols)` is rejected,
//!   because those singular vectors do not exist.

use crate::linalg::{
    errors::{LinalgError, LinalgResult},
    svd::{SvdOptions, singular_system},
};
use ndarray::{Array1, Array2, ArrayBase, Data, Ix2, s};

/// rank — numerical rank of `x` with relative tolerance `cond`.
///
/// Parameters
/// ----------
/// - `x`: `&ArrayBase<S, Ix2>`
///   Dense, non-empty matrix with finite entries.
/// - `cond`: `f64`
///   Relative tolerance; typical values lie in `(0, 1)`. Use
///   [`DEFAULT_COND`](crate::linalg::svd::DEFAULT_COND) for the customary
///   `1e-6`.
///
/// Returns
/// -------
/// `LinalgResult<usize>`
///   Number of singular values `d_i` with `d_i / d_max > cond`, or `0` for the
///   zero matrix.
///
/// Errors
/// ------
/// - `LinalgError::EmptyMatrix`, `NonFiniteEntry`, `InvalidCond`,
///   `DecompositionFailed`.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use rust_stat_utils::linalg::rank::rank;
/// let x = array![[1.0, 2.0], [2.0, 4.0], [3.0, 6.0]];
/// assert_eq!(rank(&x, 1e-6).unwrap(), 1);
/// assert_eq!(rank(&x.t(), 1e-6).unwrap(), 1);
/// ```
pub fn rank<S>(x: &ArrayBase<S, Ix2>, cond: f64) -> LinalgResult<usize>
where
    S: Data<Elem = f64>,
{
    rank_with(x, &SvdOptions::with_cond(cond)?)
}

/// rank_with — numerical rank using a full [`SvdOptions`] configuration.
pub fn rank_with<S>(x: &ArrayBase<S, Ix2>, opts: &SvdOptions) -> LinalgResult<usize>
where
    S: Data<Elem = f64>,
{
    let d = singular_system(x, false, opts)?.singular_values;
    Ok(count_above_cond(&d, opts.cond))
}

/// fullrank — matrix whose columns span the column space of `x`.
///
/// Parameters
/// ----------
/// - `x`: `&ArrayBase<S, Ix2>`
///   Dense, non-empty `rows × cols` matrix with finite entries.
/// - `r`: `Option<usize>`
///   Number of basis columns. `None` estimates it with [`rank`] at the
///   default tolerance. A supplied value is **not** checked against the
///   numerical rank; larger values return directions with (near-)zero
///   singular values.
///
/// Returns
/// -------
/// `LinalgResult<Array2<f64>>`
///   `rows × r` matrix of orthonormal columns: the left singular vectors of
///   `x` in order of decreasing singular value.
///
/// Errors
/// ------
/// - `LinalgError::RankExceedsBasis` if `r > min(rows, cols)`.
/// - Any validation or decomposition error from [`rank_with`].
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use rust_stat_utils::linalg::rank::fullrank;
/// let x = array![[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 0.0, 1.0]];
/// let basis = fullrank(&x, None).unwrap();
/// assert_eq!(basis.dim(), (3, 2));
/// ```
pub fn fullrank<S>(x: &ArrayBase<S, Ix2>, r: Option<usize>) -> LinalgResult<Array2<f64>>
where
    S: Data<Elem = f64>,
{
    fullrank_with(x, r, &SvdOptions::default())
}

/// fullrank_with — [`fullrank`] with explicit SVD options.
///
/// `opts.cond` is only consulted when `r` is `None`.
pub fn fullrank_with<S>(
    x: &ArrayBase<S, Ix2>, r: Option<usize>, opts: &SvdOptions,
) -> LinalgResult<Array2<f64>>
where
    S: Data<Elem = f64>,
{
    let sys = singular_system(x, true, opts)?;
    let r = match r {
        Some(r) => r,
        None => count_above_cond(&sys.singular_values, opts.cond),
    };

    let available = sys.singular_values.len();
    if r > available {
        return Err(LinalgError::RankExceedsBasis { requested: r, available });
    }
    let u = sys
        .left_vectors
        .ok_or(LinalgError::DecompositionFailed { max_niter: opts.max_niter })?;

    log::debug!("fullrank: selecting {r} of {available} left singular vectors");
    Ok(u.slice(s![.., ..r]).to_owned())
}

// ---- Helper methods ----

/// Number of descending singular values `d` with `d_i / d_max > cond`; `0`
/// when `d_max == 0`.
fn count_above_cond(d: &Array1<f64>, cond: f64) -> usize {
    let d_max = d[0];
    if d_max == 0.0 {
        log::debug!("rank: all {} singular values are zero", d.len());
        return 0;
    }
    let r = d.iter().filter(|&&d_i| d_i / d_max > cond).count();
    log::debug!("rank: {r} of {} singular values exceed cond = {cond}", d.len());
    r
}
