//! linalg — SVD-based rank estimation, column-span bases, and array helpers.
//!
//! Purpose
//! -------
//! Provide the dense linear-algebra building blocks used by statistical code:
//! numerical rank from singular values, an orthonormal basis for the column
//! space of a matrix, and a handful of elementwise reciprocals and norms.
//!
//! Key behaviors
//! -------------
//! - [`singular_system`] bridges `ndarray` matrices into nalgebra's SVD and
//!   returns singular values in descending order, together with the matching
//!   left singular vectors when requested.
//! - [`rank`] counts singular values above a relative tolerance; the zero
//!   matrix has rank `0`.
//! - [`fullrank`] returns the leading left singular vectors, trusting a
//!   caller-supplied rank.
//! - [`inv`], [`inv0`], [`clean0`], [`norm`] are elementwise helpers.
//!
//! Invariants & assumptions
//! ------------------------
//! - Matrices are dense `f64` arrays with finite entries and no zero-length
//!   dimension; violations surface as [`LinalgError`].
//! - Singular-value ordering from the decomposition is never trusted; it is
//!   re-sorted before any ratio test or column selection.
//!
//! Conventions
//! -----------
//! - All routines are pure; the only side effect is `log` output at debug
//!   level (rank decisions) and warn level (non-convergence).
//!
//! Testing notes
//! -------------
//! - Unit tests live beside each submodule. The integration suite in
//!   `tests/` checks rank/transpose symmetry and span recovery end to end.

pub mod elementwise;
pub mod errors;
pub mod rank;
pub mod svd;

// ---- Re-exports (primary surface) -----------------------------------------

pub use self::elementwise::{clean0, inv, inv0, norm};
pub use self::errors::{LinalgError, LinalgResult};
pub use self::rank::{fullrank, fullrank_with, rank, rank_with};
pub use self::svd::{DEFAULT_COND, SingularSystem, SvdOptions, singular_system, singular_values};
