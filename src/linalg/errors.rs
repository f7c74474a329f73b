//! linalg::errors — error type for SVD-based rank and basis routines.
//!
//! Purpose
//! -------
//! Provide a single error enum and result alias for the dense linear-algebra
//! helpers in this crate (`rank`, `fullrank`, and the elementwise array
//! helpers). Every variant is an input-contract violation detected before or
//! during the computation; none of them are recovered internally.
//!
//! Conventions
//! -----------
//! - Variants carry the offending value (shape, entry, tolerance) so that
//!   callers can log or report the failure without extra context.
//! - `From<LinalgError> for PyErr` maps every variant to `ValueError` when the
//!   `python-bindings` feature is enabled.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type LinalgResult<T> = Result<T, LinalgError>;

/// LinalgError — invalid inputs to rank, basis, and array helpers.
///
/// Variants
/// --------
/// - `EmptyMatrix { rows, cols }`
///   The matrix has a zero-length dimension, so no singular values exist.
/// - `NonFiniteEntry { row, col, value }`
///   The matrix contains NaN or ±∞; the decomposition is undefined.
/// - `InvalidCond { cond }`
///   The relative rank tolerance is negative or non-finite.
/// - `InvalidEps { eps }`
///   The SVD convergence threshold is not finite and positive.
/// - `RankExceedsBasis { requested, available }`
///   More basis columns were requested than singular vectors exist
///   (`min(rows, cols)`).
/// - `DecompositionFailed { max_niter }`
///   The SVD did not converge within the configured iteration budget.
/// - `InvalidNormOrder { p }`
///   The `p` of an `l^p` norm is not finite and positive.
/// - `InvalidAxis { axis, ndim }`
///   A reduction axis is out of range for the input array.
#[derive(Debug, Clone, PartialEq)]
pub enum LinalgError {
    // ---- Matrix validation ----
    EmptyMatrix { rows: usize, cols: usize },
    NonFiniteEntry { row: usize, col: usize, value: f64 },

    // ---- Options ----
    InvalidCond { cond: f64 },
    InvalidEps { eps: f64 },
    RankExceedsBasis { requested: usize, available: usize },

    // ---- Decomposition ----
    DecompositionFailed { max_niter: usize },

    // ---- Array helpers ----
    InvalidNormOrder { p: f64 },
    InvalidAxis { axis: usize, ndim: usize },
}

impl std::error::Error for LinalgError {}

impl std::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinalgError::EmptyMatrix { rows, cols } => {
                write!(f, "Linalg Error: matrix must be non-empty (got {rows}x{cols})")
            }
            LinalgError::NonFiniteEntry { row, col, value } => write!(
                f,
                "Linalg Error: non-finite entry {value} at ({row}, {col}); entries must be finite"
            ),
            LinalgError::InvalidCond { cond } => write!(
                f,
                "Linalg Error: invalid relative tolerance cond = {cond}; must be finite and >= 0"
            ),
            LinalgError::InvalidEps { eps } => write!(
                f,
                "Linalg Error: invalid SVD convergence threshold eps = {eps}; must be finite and > 0"
            ),
            LinalgError::RankExceedsBasis { requested, available } => write!(
                f,
                "Linalg Error: requested {requested} basis columns but only {available} singular vectors exist"
            ),
            LinalgError::DecompositionFailed { max_niter } => write!(
                f,
                "Linalg Error: SVD did not converge (max_niter = {max_niter})"
            ),
            LinalgError::InvalidNormOrder { p } => {
                write!(f, "Linalg Error: invalid norm order p = {p}; must be finite and > 0")
            }
            LinalgError::InvalidAxis { axis, ndim } => {
                write!(f, "Linalg Error: axis {axis} is out of range for a {ndim}-dimensional array")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<LinalgError> for PyErr {
    fn from(err: LinalgError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Embedding of payload values into `Display` messages.
    //
    // They intentionally DO NOT cover:
    // - The `From<LinalgError> for PyErr` conversion, which needs the Python
    //   C API and belongs in Python-level tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `EmptyMatrix` reports the offending shape.
    //
    // Given
    // -----
    // - `LinalgError::EmptyMatrix { rows: 0, cols: 3 }`.
    //
    // Expect
    // ------
    // - The message contains "0x3".
    fn linalg_error_empty_matrix_includes_shape_in_display() {
        // Arrange
        let err = LinalgError::EmptyMatrix { rows: 0, cols: 3 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("0x3"), "Display message should include the shape.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `RankExceedsBasis` reports both the request and the limit.
    //
    // Given
    // -----
    // - `requested = 5`, `available = 2`.
    //
    // Expect
    // ------
    // - The message contains both "5" and "2".
    fn linalg_error_rank_exceeds_basis_includes_payload_in_display() {
        // Arrange
        let err = LinalgError::RankExceedsBasis { requested: 5, available: 2 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains('5') && msg.contains('2'), "Got: {msg}");
    }
}
