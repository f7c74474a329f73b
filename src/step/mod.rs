//! step — step functions and empirical CDFs.
//!
//! Purpose
//! -------
//! Provide a right-continuous piecewise-constant [`StepFunction`] and the
//! [`ecdf`] builder that turns a sample into its empirical CDF.
//!
//! Key behaviors
//! -------------
//! - [`StepFunction::new`] validates shapes, prepends `(-∞, ival)`, and
//!   co-sorts breakpoints with values.
//! - [`StepFunction::eval`] / [`StepFunction::eval_array`] evaluate with a
//!   side-right binary search, preserving the query's shape.
//! - [`ecdf`] sorts a copy of the sample and assigns `(i + 1) / n` to the
//!   `i`-th order statistic.
//!
//! Invariants & assumptions
//! ------------------------
//! - Constructed values are immutable; evaluation has no side effects.
//! - Validation failures surface as [`StepError`] at construction time.

pub mod ecdf;
pub mod errors;
pub mod step_function;

// ---- Re-exports (primary surface) -----------------------------------------

pub use self::ecdf::ecdf;
pub use self::errors::{StepError, StepResult};
pub use self::step_function::StepFunction;
