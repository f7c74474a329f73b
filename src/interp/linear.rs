//! interp::linear — piecewise-linear interpolation on unsorted nodes.
//!
//! Purpose
//! -------
//! Provide the interpolation primitive behind the monotone inverter: a
//! piecewise-linear function through `(node, value)` pairs, with a single,
//! explicit policy for queries outside the node range.
//!
//! Key behaviors
//! -------------
//! - Co-sort nodes and values by node (stable), so callers may pass samples
//!   in any order.
//! - Reproduce the stored value exactly at every node.
//! - Apply [`Extrapolation`] uniformly to every out-of-range query.
//!
//! Invariants & assumptions
//! ------------------------
//! - At least one node; no NaN node; `nodes.len() == values.len()`.
//! - Nodes are stored ascending. For tied nodes the value of the last tied
//!   pair (in input order) is returned at the tie.
//! - A single node gives a constant function.
//!
//! Conventions
//! -----------
//! - NaN queries return NaN.
//! - Immutable after construction; safe to evaluate from several threads.

use crate::interp::errors::{InterpError, InterpResult};
use ndarray::{Array, ArrayBase, ArrayView1, Data, Dimension, Ix1};
use std::cmp::Ordering;

/// Policy for queries below the first or above the last node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extrapolation {
    /// Return the value at the nearest end node.
    #[default]
    Clamp,
    /// Extend the first or last segment linearly.
    Linear,
}

/// LinearInterpolant — piecewise-linear map from nodes to values.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use rust_stat_utils::interp::{Extrapolation, LinearInterpolant};
/// let f = LinearInterpolant::new(&array![2.0, 0.0, 1.0], &array![1.0, 0.0, 2.0], Extrapolation::Clamp)
///     .unwrap();
/// assert!((f.eval(0.5) - 1.0).abs() < 1e-14);
/// assert_eq!(f.eval(5.0), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearInterpolant {
    nodes: Vec<f64>,
    values: Vec<f64>,
    extrapolation: Extrapolation,
}

impl LinearInterpolant {
    /// Build an interpolant through `(nodes[i], values[i])`.
    ///
    /// # Errors
    /// - `InterpError::ShapeMismatch` if the lengths differ.
    /// - `InterpError::EmptyNodes` if there are no nodes.
    /// - `InterpError::NaNNode` if a node is NaN.
    pub fn new<Sn, Sv>(
        nodes: &ArrayBase<Sn, Ix1>, values: &ArrayBase<Sv, Ix1>, extrapolation: Extrapolation,
    ) -> InterpResult<Self>
    where
        Sn: Data<Elem = f64>,
        Sv: Data<Elem = f64>,
    {
        if nodes.len() != values.len() {
            return Err(InterpError::ShapeMismatch { nodes: nodes.len(), values: values.len() });
        }
        if nodes.is_empty() {
            return Err(InterpError::EmptyNodes);
        }
        if let Some(index) = nodes.iter().position(|v| v.is_nan()) {
            return Err(InterpError::NaNNode { index });
        }

        let mut order: Vec<usize> = (0..nodes.len()).collect();
        order.sort_by(|&a, &b| nodes[a].partial_cmp(&nodes[b]).unwrap_or(Ordering::Equal));

        Ok(LinearInterpolant {
            nodes: order.iter().map(|&k| nodes[k]).collect(),
            values: order.iter().map(|&k| values[k]).collect(),
            extrapolation,
        })
    }

    /// Evaluate at a single point.
    pub fn eval(&self, t: f64) -> f64 {
        if t.is_nan() {
            return f64::NAN;
        }
        let n = self.nodes.len();
        let last = n - 1;
        if n == 1 {
            return self.values[0];
        }

        if t < self.nodes[0] {
            return match self.extrapolation {
                Extrapolation::Clamp => self.values[0],
                Extrapolation::Linear => self.extend(0, t, self.values[0]),
            };
        }
        if t > self.nodes[last] {
            return match self.extrapolation {
                Extrapolation::Clamp => self.values[last],
                Extrapolation::Linear => self.extend(last - 1, t, self.values[last]),
            };
        }

        // nodes[i] <= t, and t < nodes[i + 1] unless t sits on the last node.
        let i = self.nodes.partition_point(|&b| b <= t) - 1;
        if self.nodes[i] == t || i == last {
            return self.values[i];
        }
        self.lerp(i, t)
    }

    /// Evaluate elementwise; the result has the shape of `t`.
    pub fn eval_array<S, D>(&self, t: &ArrayBase<S, D>) -> Array<f64, D>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        t.mapv(|v| self.eval(v))
    }

    /// Sorted nodes.
    pub fn nodes(&self) -> ArrayView1<'_, f64> {
        ArrayView1::from(&self.nodes[..])
    }

    /// Values matching [`LinearInterpolant::nodes`].
    pub fn values(&self) -> ArrayView1<'_, f64> {
        ArrayView1::from(&self.values[..])
    }

    pub fn extrapolation(&self) -> Extrapolation {
        self.extrapolation
    }

    /// True when two adjacent sorted nodes coincide.
    pub fn has_tied_nodes(&self) -> bool {
        self.nodes.windows(2).any(|w| w[0] == w[1])
    }

    // ---- Helper methods ----

    fn lerp(&self, i: usize, t: f64) -> f64 {
        let h = self.nodes[i + 1] - self.nodes[i];
        let w = (t - self.nodes[i]) / h;
        self.values[i] + w * (self.values[i + 1] - self.values[i])
    }

    /// Linear extension of segment `i`; a zero-width segment has no slope,
    /// so the end value is kept.
    fn extend(&self, i: usize, t: f64, end_value: f64) -> f64 {
        if self.nodes[i + 1] == self.nodes[i] {
            return end_value;
        }
        self.lerp(i, t)
    }
}
