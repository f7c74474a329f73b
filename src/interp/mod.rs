//! interp — linear interpolation and monotone function inversion.
//!
//! Purpose
//! -------
//! Provide a piecewise-linear interpolant over arbitrary (unsorted) nodes and
//! use it to approximate inverses of monotone functions from samples.
//!
//! Key behaviors
//! -------------
//! - [`LinearInterpolant`] co-sorts nodes with values, is exact at the nodes,
//!   and handles out-of-range queries per [`Extrapolation`].
//! - [`monotone_fn_inverter`] samples a [`MonotoneFn`] and interpolates the
//!   swapped pairs `(f(x), x)`.
//! - [`Vectorized`] and [`Elementwise`] select, at compile time, whether the
//!   function is evaluated on the whole sample or point by point.
//!
//! Invariants & assumptions
//! ------------------------
//! - Monotonicity of the inverted function is assumed, never checked.
//! - Errors surface as [`InterpError`] at construction; evaluation is total.

pub mod errors;
pub mod inverse;
pub mod linear;

// ---- Re-exports (primary surface) -----------------------------------------

pub use self::errors::{InterpError, InterpResult};
pub use self::inverse::{
    Elementwise, MonotoneFn, Vectorized, monotone_fn_inverter, monotone_fn_inverter_with,
};
pub use self::linear::{Extrapolation, LinearInterpolant};
