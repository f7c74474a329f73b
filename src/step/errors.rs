//! step::errors — error type for step-function construction.
//!
//! Purpose
//! -------
//! Report malformed breakpoint/value inputs to [`StepFunction`] and the ECDF
//! builder. Evaluation itself never fails; every check happens once, at
//! construction time.
//!
//! [`StepFunction`]: crate::step::step_function::StepFunction

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type StepResult<T> = Result<T, StepError>;

/// StepError — invalid inputs to step-function construction.
///
/// Variants
/// --------
/// - `ShapeMismatch { x_shape, y_shape }`
///   Breakpoints and values do not have the same shape.
/// - `DimensionError { ndim }`
///   Breakpoints and values are not one-dimensional.
/// - `NaNBreakpoint { index }`
///   A breakpoint is NaN, which has no position in the sorted order.
#[derive(Debug, Clone, PartialEq)]
pub enum StepError {
    ShapeMismatch { x_shape: Vec<usize>, y_shape: Vec<usize> },
    DimensionError { ndim: usize },
    NaNBreakpoint { index: usize },
}

impl std::error::Error for StepError {}

impl std::fmt::Display for StepError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepError::ShapeMismatch { x_shape, y_shape } => write!(
                f,
                "in StepFunction: x and y do not have the same shape ({x_shape:?} vs {y_shape:?})"
            ),
            StepError::DimensionError { ndim } => write!(
                f,
                "in StepFunction: x and y must be 1-dimensional (got {ndim} dimensions)"
            ),
            StepError::NaNBreakpoint { index } => {
                write!(f, "in StepFunction: breakpoint at index {index} is NaN")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<StepError> for PyErr {
    fn from(err: StepError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Keep the historical wording of the shape and dimension messages.
    //
    // Given
    // -----
    // - A `ShapeMismatch` and a `DimensionError`.
    //
    // Expect
    // ------
    // - Messages contain "do not have the same shape" and
    //   "must be 1-dimensional".
    fn step_error_messages_name_the_violated_constraint() {
        // Arrange
        let shape = StepError::ShapeMismatch { x_shape: vec![3], y_shape: vec![2] };
        let dim = StepError::DimensionError { ndim: 2 };

        // Act
        let shape_msg = shape.to_string();
        let dim_msg = dim.to_string();

        // Assert
        assert!(shape_msg.contains("x and y do not have the same shape"), "Got: {shape_msg}");
        assert!(dim_msg.contains("x and y must be 1-dimensional"), "Got: {dim_msg}");
    }
}
