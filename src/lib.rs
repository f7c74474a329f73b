//! rust_stat_utils — numerical building blocks for statistical code.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and, with the `python-bindings`
//! feature, as the PyO3 bridge exposing the same routines through the
//! `_rust_stat_utils` extension module.
//!
//! Key behaviors
//! -------------
//! - Re-export the core modules: [`linalg`] (SVD rank, column-span bases,
//!   elementwise reciprocals and norms), [`step`] (step functions and
//!   ECDFs), and [`interp`] (linear interpolation and monotone inverses).
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer when
//!   `python-bindings` is enabled, registering the submodules `linalg`,
//!   `step`, and `interp` so dot-notation imports work.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in the inner modules; this file performs only
//!   FFI glue, input conversion, and error mapping.
//! - Every routine is pure and every returned object is immutable, so
//!   results may be shared freely between threads.
//!
//! Conventions
//! -----------
//! - Errors are module-specific enums ([`linalg::LinalgError`],
//!   [`step::StepError`], [`interp::InterpError`]) converted to `ValueError`
//!   at the PyO3 boundary.
//! - Diagnostics go through the `log` facade; no logger is installed here.
//!
//! Testing notes
//! -------------
//! - Numerical behavior is covered by unit tests in the inner modules and by
//!   the integration suite under `tests/`.
//! - The PyO3 wrappers are exercised from Python (`tests/python`); they are
//!   not compiled in the default test build.

pub mod interp;
pub mod linalg;
pub mod step;
pub mod utils;

pub use crate::interp::{
    Elementwise, Extrapolation, InterpError, LinearInterpolant, MonotoneFn, Vectorized,
    monotone_fn_inverter, monotone_fn_inverter_with,
};
pub use crate::linalg::{
    LinalgError, SvdOptions, clean0, fullrank, fullrank_with, inv, inv0, norm, rank, rank_with,
};
pub use crate::step::{StepError, StepFunction, ecdf};

#[cfg(feature = "python-bindings")]
use ndarray::Array1;

#[cfg(feature = "python-bindings")]
use numpy::IntoPyArray;

#[cfg(feature = "python-bindings")]
use pyo3::{
    prelude::*,
    types::{PyDict, PyFloat},
};

#[cfg(feature = "python-bindings")]
use crate::{
    linalg::DEFAULT_COND,
    utils::{
        PyFailure, call_batch, call_scalar, extract_f64_matrix, extract_f64_ndarray,
        extract_f64_vector,
    },
};

/// PyStepFunction — Python-facing wrapper for [`StepFunction`].
///
/// Constructed from Python via `StepFunction(x, y, ival=0.0, sorted=False)`.
/// Calling the instance with a float returns a float; calling it with an
/// array-like returns a numpy array of the same shape.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_stat_utils.step", name = "StepFunction", frozen)]
pub struct PyStepFunction {
    inner: StepFunction,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyStepFunction {
    #[new]
    #[pyo3(text_signature = "(x, y, /, ival=0.0, sorted=False)", signature = (x, y, ival = 0.0, sorted = false))]
    pub fn new<'py>(
        x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>, ival: f64, sorted: bool,
    ) -> PyResult<Self> {
        let x = extract_f64_ndarray(x)?;
        let y = extract_f64_ndarray(y)?;
        Ok(PyStepFunction { inner: StepFunction::new(&x, &y, ival, sorted)? })
    }

    pub fn __call__<'py>(&self, py: Python<'py>, time: &Bound<'py, PyAny>) -> PyResult<PyObject> {
        if let Ok(t) = time.extract::<f64>() {
            return Ok(PyFloat::new(py, self.inner.eval(t)).into_any().unbind());
        }
        let t = extract_f64_ndarray(time)?;
        Ok(self.inner.eval_array(&t).into_pyarray(py).into_any().unbind())
    }

    /// Breakpoints, starting with `-inf`.
    #[getter]
    pub fn x<'py>(&self, py: Python<'py>) -> Bound<'py, numpy::PyArray1<f64>> {
        self.inner.x().to_owned().into_pyarray(py)
    }

    /// Step values, starting with `ival`.
    #[getter]
    pub fn y<'py>(&self, py: Python<'py>) -> Bound<'py, numpy::PyArray1<f64>> {
        self.inner.y().to_owned().into_pyarray(py)
    }

    #[getter]
    pub fn n(&self) -> usize {
        self.inner.n()
    }
}

/// PyLinearInterpolant — Python-facing wrapper for [`LinearInterpolant`],
/// returned by `monotone_fn_inverter`.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_stat_utils.interp", name = "LinearInterpolant", frozen)]
pub struct PyLinearInterpolant {
    inner: LinearInterpolant,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyLinearInterpolant {
    #[new]
    #[pyo3(text_signature = "(x, y, /, extrapolate=False)", signature = (x, y, extrapolate = false))]
    pub fn new<'py>(
        x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>, extrapolate: bool,
    ) -> PyResult<Self> {
        let nodes = extract_f64_vector(x)?;
        let values = extract_f64_vector(y)?;
        let inner = LinearInterpolant::new(&nodes, &values, extrapolation_policy(extrapolate))?;
        Ok(PyLinearInterpolant { inner })
    }

    pub fn __call__<'py>(&self, py: Python<'py>, value: &Bound<'py, PyAny>) -> PyResult<PyObject> {
        if let Ok(t) = value.extract::<f64>() {
            return Ok(PyFloat::new(py, self.inner.eval(t)).into_any().unbind());
        }
        let t = extract_f64_ndarray(value)?;
        Ok(self.inner.eval_array(&t).into_pyarray(py).into_any().unbind())
    }
}

/// `ecdf(values)` — empirical CDF as a `StepFunction`.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "ecdf")]
fn py_ecdf<'py>(values: &Bound<'py, PyAny>) -> PyResult<PyStepFunction> {
    let values = extract_f64_ndarray(values)?;
    Ok(PyStepFunction { inner: ecdf(&values)? })
}

/// `rank(x, cond=1e-6)` — numerical rank from singular values.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "rank")]
#[pyo3(signature = (x, cond = DEFAULT_COND))]
fn py_rank<'py>(x: &Bound<'py, PyAny>, cond: f64) -> PyResult<usize> {
    let x = extract_f64_matrix(x)?;
    Ok(rank(&x, cond)?)
}

/// `fullrank(x, r=None)` — orthonormal basis of the column span of `x`.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "fullrank")]
#[pyo3(signature = (x, r = None))]
fn py_fullrank<'py>(
    py: Python<'py>, x: &Bound<'py, PyAny>, r: Option<usize>,
) -> PyResult<Bound<'py, numpy::PyArray2<f64>>> {
    let x = extract_f64_matrix(x)?;
    Ok(fullrank(&x, r)?.into_pyarray(py))
}

/// `monotone_fn_inverter(fn, x, vectorized=True, extrapolate=False, **kwargs)`.
///
/// The Python `vectorized` flag selects between the [`Vectorized`] and
/// [`Elementwise`] strategies. Any remaining keyword arguments are passed to
/// `fn` on every call.
#[cfg(feature = "python-bindings")]
#[pyfunction(name = "monotone_fn_inverter")]
#[pyo3(signature = (func, x, vectorized = true, extrapolate = false, **kwargs))]
fn py_monotone_fn_inverter<'py>(
    func: &Bound<'py, PyAny>, x: &Bound<'py, PyAny>, vectorized: bool, extrapolate: bool,
    kwargs: Option<&Bound<'py, PyDict>>,
) -> PyResult<PyLinearInterpolant> {
    let x = extract_f64_vector(x)?;
    let policy = extrapolation_policy(extrapolate);
    let failure = PyFailure::default();

    let result = if vectorized {
        let f = Vectorized::new(|sample: &Array1<f64>| {
            call_batch(func, sample, kwargs).unwrap_or_else(|err| {
                failure.record(err);
                Array1::from_elem(sample.len(), f64::NAN)
            })
        });
        monotone_fn_inverter_with(&f, &x, policy)
    } else {
        let f = Elementwise::new(|v: f64| {
            call_scalar(func, v, kwargs).unwrap_or_else(|err| {
                failure.record(err);
                f64::NAN
            })
        });
        monotone_fn_inverter_with(&f, &x, policy)
    };

    if let Some(err) = failure.take() {
        return Err(err);
    }
    Ok(PyLinearInterpolant { inner: result? })
}

#[cfg(feature = "python-bindings")]
fn extrapolation_policy(extrapolate: bool) -> Extrapolation {
    if extrapolate { Extrapolation::Linear } else { Extrapolation::Clamp }
}

/// _rust_stat_utils — PyO3 module initializer.
///
/// Creates the `linalg`, `step`, and `interp` submodules, registers their
/// classes and functions, and inserts them into `sys.modules` so that
/// `import rust_stat_utils.step` style imports resolve.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_stat_utils<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let linalg_mod = PyModule::new(_py, "linalg")?;
    let step_mod = PyModule::new(_py, "step")?;
    let interp_mod = PyModule::new(_py, "interp")?;
    linalg_module(_py, m, &linalg_mod)?;
    step_module(_py, m, &step_mod)?;
    interp_module(_py, m, &interp_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    let modules = _py.import("sys")?.getattr("modules")?;
    modules.set_item("rust_stat_utils.linalg", linalg_mod)?;
    modules.set_item("rust_stat_utils.step", step_mod)?;
    modules.set_item("rust_stat_utils.interp", interp_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn linalg_module<'py>(
    _py: Python, parent: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_rank, m)?)?;
    m.add_function(wrap_pyfunction!(py_fullrank, m)?)?;
    parent.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn step_module<'py>(
    _py: Python, parent: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<PyStepFunction>()?;
    m.add_function(wrap_pyfunction!(py_ecdf, m)?)?;
    parent.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn interp_module<'py>(
    _py: Python, parent: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<PyLinearInterpolant>()?;
    m.add_function(wrap_pyfunction!(py_monotone_fn_inverter, m)?)?;
    parent.add_submodule(m)?;
    Ok(())
}
