//! rust_correlogram — correlogram estimation with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the correlation estimation engine to Python via the
//! `_rust_correlogram` extension module. When the `python-bindings`
//! feature is enabled, this module defines the Python-facing classes and
//! submodules used by the `rust_correlogram` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`correlation` and `inference`) as
//!   the public crate surface.
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for
//!   the `_rust_correlogram` Python extension.
//! - Create and register Python submodules (`correlation`, `inference`)
//!   under `rust_correlogram` so that dot-notation imports work as
//!   expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this
//!   file performs only FFI glue, input validation, and error mapping.
//! - When `python-bindings` is enabled, the Python-visible types mirror
//!   the invariants and signatures of their Rust counterparts (e.g.
//!   [`CorrelationResult`]).
//! - On successful conversion from Python objects to Rust types, the
//!   invariants documented in the core modules are assumed to hold.
//!
//! Conventions
//! -----------
//! - Python-exposed classes live under `_rust_correlogram.<submodule>`
//!   and are typically wrapped by thin pure-Python facades in the
//!   top-level `rust_correlogram` package.
//! - Lag, bias, and method conventions follow the documentation of the
//!   underlying Rust modules (`correlation::acovf`, `correlation::pacf`,
//!   `inference::bartlett`).
//! - Errors from core Rust code are propagated as rich error types
//!   internally and converted to `PyErr` values at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should usually depend directly on the inner
//!   modules and can ignore the PyO3 items guarded by the
//!   `python-bindings` feature.
//! - The Python packaging layer imports the `_rust_correlogram` module
//!   defined here and wraps its classes in user-facing Python APIs.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner
//!   modules and by the integration suite under `tests/`.
//! - Smoke tests for the PyO3 bindings verify that classes can be
//!   constructed, called, and round-tripped correctly from Python.

pub mod correlation;
pub mod inference;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use numpy::PyReadonlyArray1;

#[cfg(feature = "python-bindings")]
use std::str::FromStr;

#[cfg(feature = "python-bindings")]
use crate::{
    correlation::{
        acovf::{estimate_autocorrelation, AcfOptions},
        pacf::{estimate_partial_autocorrelation, PacfMethod, PacfOptions},
        result::CorrelationResult,
        series::SeriesBuffer,
    },
    utils::{extract_f64_array, extract_lag_set},
};

#[cfg(feature = "python-bindings")]
fn extract_series<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<SeriesBuffer> {
    let arr: PyReadonlyArray1<f64> = extract_f64_array(py, raw_data)?;
    let data = arr.as_slice().map_err(|_| {
        pyo3::exceptions::PyValueError::new_err(
            "series must be a 1-D contiguous float64 array or sequence",
        )
    })?;
    SeriesBuffer::from_slice(data).map_err(PyErr::from)
}

/// Acf — Python-facing autocorrelation estimate.
///
/// Purpose
/// -------
/// Represent the outcome of one autocorrelation estimation when called
/// from Python and forward all computation to
/// [`estimate_autocorrelation`].
///
/// Key behaviors
/// -------------
/// - Validate and convert Python inputs into a [`SeriesBuffer`] and an
///   optional lag set.
/// - Run the estimator with an explicit [`AcfOptions`] built from the
///   keyword arguments and store the [`CorrelationResult`] internally.
/// - Expose `lags`, `coefficients`, `confidence`, and `warnings` as
///   Python properties.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `Acf(data, lags=None, unbiased=False, fft=True, alpha=None)`:
/// - `data`: one-dimensional array-like of finite float64 values,
///   length ≥ 1.
/// - `lags`: `None` (default lag set), an int `m` (lags `0..m`), or a
///   strictly increasing sequence of non-negative ints.
/// - `unbiased`: use n−k autocovariance denominators instead of n.
/// - `fft`: compute via spectral convolution.
/// - `alpha`: optional significance level in (0, 1) for a Bartlett
///   confidence band.
///
/// Notes
/// -----
/// - This type is primarily intended to be used from Python; native
///   Rust code should prefer calling [`estimate_autocorrelation`]
///   directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_correlogram.correlation")]
pub struct Acf {
    /// The estimation outcome.
    inner: CorrelationResult,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl Acf {
    #[new]
    #[pyo3(
        text_signature = "(data, /, lags=None, unbiased=False, fft=True, alpha=None)",
        signature = (data, lags = None, unbiased = false, fft = true, alpha = None)
    )]
    #[allow(clippy::self_named_constructors)]
    pub fn acf<'py>(
        py: Python<'py>, data: &Bound<'py, PyAny>, lags: Option<&Bound<'py, PyAny>>,
        unbiased: bool, fft: bool, alpha: Option<f64>,
    ) -> PyResult<Acf> {
        let series = extract_series(py, data)?;
        let lag_set = extract_lag_set(py, lags)?;
        let options = AcfOptions::new(unbiased, fft, alpha);
        let inner = estimate_autocorrelation(&series, lag_set.as_ref(), &options)?;
        Ok(Acf { inner })
    }

    /// The requested lags, in increasing order.
    #[getter]
    pub fn lags(&self) -> Vec<usize> {
        self.inner.lags().to_vec()
    }

    /// Estimated coefficients, aligned with `lags`.
    #[getter]
    pub fn coefficients(&self) -> Vec<f64> {
        self.inner.coefficients().to_vec()
    }

    /// Per-lag (low, high) bounds, when a band was requested.
    #[getter]
    pub fn confidence(&self) -> Option<Vec<(f64, f64)>> {
        self.inner.confidence().map(|bounds| bounds.to_vec())
    }

    /// Human-readable numerical warnings accumulated during estimation.
    #[getter]
    pub fn warnings(&self) -> Vec<String> {
        self.inner.warnings().iter().map(|w| w.to_string()).collect()
    }
}

/// Pacf — Python-facing partial autocorrelation estimate.
///
/// Purpose
/// -------
/// Represent the outcome of one partial autocorrelation estimation when
/// called from Python and forward all computation to
/// [`estimate_partial_autocorrelation`].
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `Pacf(data, lags=None, method='yw', alpha=None)`:
/// - `data`: one-dimensional array-like of finite float64 values,
///   length ≥ 1.
/// - `lags`: as for [`Acf`].
/// - `method`: one of the documented aliases
///   ('yw'/'ywunbiased', 'ywm'/'ywmle', 'ols', 'ld'/'ldunbiased',
///   'ldb'/'ldbiased'); unknown names raise `ValueError` eagerly.
/// - `alpha`: optional significance level in (0, 1) for the
///   constant-variance large-sample band.
///
/// Notes
/// -----
/// - Native Rust callers should use
///   [`estimate_partial_autocorrelation`] directly; this type exists
///   solely for the PyO3 binding surface.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_correlogram.correlation")]
pub struct Pacf {
    /// The estimation outcome.
    inner: CorrelationResult,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl Pacf {
    #[new]
    #[pyo3(
        text_signature = "(data, /, lags=None, method='yw', alpha=None)",
        signature = (data, lags = None, method = "yw", alpha = None)
    )]
    #[allow(clippy::self_named_constructors)]
    pub fn pacf<'py>(
        py: Python<'py>, data: &Bound<'py, PyAny>, lags: Option<&Bound<'py, PyAny>>,
        method: &str, alpha: Option<f64>,
    ) -> PyResult<Pacf> {
        let series = extract_series(py, data)?;
        let lag_set = extract_lag_set(py, lags)?;
        let parsed_method = PacfMethod::from_str(method)?;
        let options = PacfOptions::new(parsed_method, alpha);
        let inner = estimate_partial_autocorrelation(&series, lag_set.as_ref(), &options)?;
        Ok(Pacf { inner })
    }

    /// The requested lags, in increasing order.
    #[getter]
    pub fn lags(&self) -> Vec<usize> {
        self.inner.lags().to_vec()
    }

    /// Estimated coefficients, aligned with `lags`.
    #[getter]
    pub fn coefficients(&self) -> Vec<f64> {
        self.inner.coefficients().to_vec()
    }

    /// Per-lag (low, high) bounds, when a band was requested.
    #[getter]
    pub fn confidence(&self) -> Option<Vec<(f64, f64)>> {
        self.inner.confidence().map(|bounds| bounds.to_vec())
    }

    /// Human-readable numerical warnings accumulated during estimation.
    #[getter]
    pub fn warnings(&self) -> Vec<String> {
        self.inner.warnings().iter().map(|w| w.to_string()).collect()
    }
}

/// Bartlett-formula confidence bounds for a coefficient sequence.
///
/// Mirrors `inference::bartlett::compute_confidence_interval` for Python
/// callers that hold externally produced coefficients.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(text_signature = "(n, coefficients, alpha, /)")]
fn confidence_interval(
    n: usize, coefficients: Vec<(usize, f64)>, alpha: f64,
) -> PyResult<Vec<(usize, (f64, f64))>> {
    inference::bartlett::compute_confidence_interval(n, &coefficients, alpha)
        .map_err(PyErr::from)
}

/// Constant-variance confidence bounds for partial autocorrelations.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(text_signature = "(n, coefficients, alpha, /)")]
fn pacf_confidence_interval(
    n: usize, coefficients: Vec<(usize, f64)>, alpha: f64,
) -> PyResult<Vec<(usize, (f64, f64))>> {
    inference::bartlett::pacf_confidence_interval(n, &coefficients, alpha)
        .map_err(PyErr::from)
}

/// _rust_correlogram — PyO3 module initializer for the Python extension.
///
/// Creates the `correlation` and `inference` submodules, attaches them to
/// the parent `_rust_correlogram` module, and registers them in
/// `sys.modules` so they are importable via dotted paths from Python.
/// Invoked automatically by Python when importing the compiled
/// extension; not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_correlogram<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let correlation_mod = PyModule::new(_py, "correlation")?;
    let inference_mod = PyModule::new(_py, "inference")?;
    correlation_submodule(_py, m, &correlation_mod)?;
    inference_submodule(_py, m, &inference_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    _py.import("sys")?
        .getattr("modules")?
        .set_item("rust_correlogram.correlation", correlation_mod)?;

    _py.import("sys")?
        .getattr("modules")?
        .set_item("rust_correlogram.inference", inference_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn correlation_submodule<'py>(
    _py: Python, rust_correlogram: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<Acf>()?;
    m.add_class::<Pacf>()?;
    rust_correlogram.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn inference_submodule<'py>(
    _py: Python, rust_correlogram: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(confidence_interval, m)?)?;
    m.add_function(wrap_pyfunction!(pacf_confidence_interval, m)?)?;
    rust_correlogram.add_submodule(m)?;
    Ok(())
}
