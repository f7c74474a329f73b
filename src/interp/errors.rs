//! interp::errors — error type for interpolation and monotone inversion.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type InterpResult<T> = Result<T, InterpError>;

/// InterpError — invalid nodes or function samples.
///
/// Variants
/// --------
/// - `ShapeMismatch { nodes, values }`
///   Node and value sequences differ in length (for the inverter: the
///   function returned a different number of outputs than it was given).
/// - `EmptyNodes`
///   No node to interpolate from.
/// - `NaNNode { index }`
///   A node is NaN and cannot be ordered.
#[derive(Debug, Clone, PartialEq)]
pub enum InterpError {
    ShapeMismatch { nodes: usize, values: usize },
    EmptyNodes,
    NaNNode { index: usize },
}

impl std::error::Error for InterpError {}

impl std::fmt::Display for InterpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InterpError::ShapeMismatch { nodes, values } => write!(
                f,
                "Interp Error: {nodes} nodes but {values} values; lengths must match"
            ),
            InterpError::EmptyNodes => write!(f, "Interp Error: at least one node is required"),
            InterpError::NaNNode { index } => write!(f, "Interp Error: node at index {index} is NaN"),
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<InterpError> for PyErr {
    fn from(err: InterpError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
