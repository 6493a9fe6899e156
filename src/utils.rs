#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::correlation::lags::LagSet;

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

/// Coerce a Python object into a contiguous 1-D float64 array.
///
/// Accepts, in order of preference: a numpy array, anything with a
/// `to_numpy` method (e.g. a pandas Series), or a plain sequence of
/// floats (copied into a fresh array).
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Interpret the Python-facing `lags` argument.
///
/// Mirrors the conventional correlogram parameter: `None` defers to the
/// estimator's default lag set, an integer `m` selects lags `0..m`, and
/// a sequence of non-negative integers is taken verbatim (and must be
/// strictly increasing).
#[cfg(feature = "python-bindings")]
pub fn extract_lag_set<'py>(
    _py: Python<'py>, lags: Option<&Bound<'py, PyAny>>,
) -> PyResult<Option<LagSet>> {
    let raw = match lags {
        Some(raw) => raw,
        None => return Ok(None),
    };

    if let Ok(count) = raw.extract::<usize>() {
        let lag_vec: Vec<usize> = (0..count).collect();
        return LagSet::new(lag_vec).map(Some).map_err(PyErr::from);
    }

    let lag_vec: Vec<usize> = raw.extract().map_err(|_| {
        PyValueError::new_err(
            "lags must be None, a non-negative int, or a sequence of non-negative ints",
        )
    })?;
    LagSet::new(lag_vec).map(Some).map_err(PyErr::from)
}
