//! utils — Python input conversion shared by the PyO3 wrappers.
//!
//! Everything here is compiled only with the `python-bindings` feature. The
//! helpers accept numpy arrays, pandas objects exposing `to_numpy`, and
//! plain sequences of floats, and hand back owned `ndarray` values so the
//! core routines never see Python types.

#[cfg(feature = "python-bindings")]
use std::cell::RefCell;

#[cfg(feature = "python-bindings")]
use ndarray::{Array1, Array2, ArrayD};

#[cfg(feature = "python-bindings")]
use numpy::{
    PyReadonlyArray1,
    PyReadonlyArrayDyn,
    ToPyArray, // &Array → PyArray
};

#[cfg(feature = "python-bindings")]
use pyo3::{
    PyErr,
    exceptions::PyTypeError,
    prelude::*,
    types::{PyAny, PyDict},
};

/// Convert an array-like of any dimension into an owned `ArrayD<f64>`.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_ndarray<'py>(raw_data: &Bound<'py, PyAny>) -> PyResult<ArrayD<f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArrayDyn<f64>>() {
        return Ok(arr_ro.as_array().to_owned());
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArrayDyn<f64>>() {
            return Ok(series_ro.as_array().to_owned());
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err("expected a numpy.ndarray, pandas object, or sequence of float64")
    })?;
    Ok(Array1::from(vec).into_dyn())
}

/// Convert a 1-D array-like into an owned `Array1<f64>`.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_vector<'py>(raw_data: &Bound<'py, PyAny>) -> PyResult<Array1<f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        return Ok(arr_ro.as_array().to_owned());
    }
    extract_f64_ndarray(raw_data)?
        .into_dimensionality()
        .map_err(|_| PyTypeError::new_err("expected a 1-D array-like of float64"))
}

/// Convert a 2-D array-like (numpy matrix or nested sequences) into an
/// owned `Array2<f64>`.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_matrix<'py>(raw_data: &Bound<'py, PyAny>) -> PyResult<Array2<f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArrayDyn<f64>>() {
        return arr_ro
            .as_array()
            .to_owned()
            .into_dimensionality()
            .map_err(|_| PyTypeError::new_err("expected a 2-D array of float64"));
    }

    let rows: Vec<Vec<f64>> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err("expected a 2-D numpy.ndarray or nested sequence of float64")
    })?;
    let ncols = rows.first().map_or(0, |r| r.len());
    if rows.iter().any(|r| r.len() != ncols) {
        return Err(PyTypeError::new_err("rows of the matrix must all have the same length"));
    }
    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    Array2::from_shape_vec((flat.len() / ncols.max(1), ncols), flat)
        .map_err(|e| PyTypeError::new_err(e.to_string()))
}

/// First Python exception raised inside an infallible Rust callback.
///
/// The [`MonotoneFn`](crate::interp::MonotoneFn) strategies take plain
/// `Fn(..) -> f64` closures, so a failing Python call records its error here
/// and yields NaN; the caller checks [`PyFailure::take`] afterwards.
#[cfg(feature = "python-bindings")]
#[derive(Default)]
pub struct PyFailure(RefCell<Option<PyErr>>);

#[cfg(feature = "python-bindings")]
impl PyFailure {
    pub fn record(&self, err: PyErr) {
        let mut slot = self.0.borrow_mut();
        if slot.is_none() {
            *slot = Some(err);
        }
    }

    pub fn take(&self) -> Option<PyErr> {
        self.0.borrow_mut().take()
    }
}

/// Call `func(x, **kwargs)` once on the whole sample and read back a 1-D
/// float array.
#[cfg(feature = "python-bindings")]
pub fn call_batch<'py>(
    func: &Bound<'py, PyAny>, x: &Array1<f64>, kwargs: Option<&Bound<'py, PyDict>>,
) -> PyResult<Array1<f64>> {
    let arg = x.to_pyarray(func.py());
    let out = func.call((arg,), kwargs)?;
    extract_f64_vector(&out)
}

/// Call `func(v, **kwargs)` on a single float.
#[cfg(feature = "python-bindings")]
pub fn call_scalar<'py>(
    func: &Bound<'py, PyAny>, v: f64, kwargs: Option<&Bound<'py, PyDict>>,
) -> PyResult<f64> {
    func.call((v,), kwargs)?.extract::<f64>()
}
