//! correlation::errors — shared error types and warnings for estimation.
//!
//! Purpose
//! -------
//! Provide the error enum, result alias, and non-fatal warning type used by
//! the correlation estimation routines, together with a conversion layer to
//! Python exceptions for PyO3-based bindings. This keeps validation and
//! runtime failures localized while exposing a clean error surface to both
//! Rust and Python.
//!
//! Key behaviors
//! -------------
//! - Define [`CorrResult`] and [`CorrError`] as the canonical result and
//!   error types for series construction, lag handling, and the
//!   autocorrelation / partial-autocorrelation estimators.
//! - Define [`CorrWarning`] for non-fatal numerical diagnostics that are
//!   carried on results instead of aborting a computation.
//! - Attach human-readable `Display` messages to each variant so that
//!   diagnostics are meaningful without additional context.
//! - Implement `From<CorrError> for PyErr` to surface Rust-side failures as
//!   `ValueError` to Python callers.
//!
//! Conventions
//! -----------
//! - Error messages are phrased in terms of domain constraints (e.g.,
//!   "lag must satisfy lag < n") rather than low-level details.
//! - Variants carry just enough payload (offending value, lag, sample
//!   size) for downstream logging without dragging along large structures.
//! - Confidence-band errors live in `inference::errors`; the `From`
//!   conversion below folds them into [`CorrError`] when a band is
//!   attached during estimation.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that each variant's `Display` message embeds its
//!   payload and that the `inference` conversion maps every variant.

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, PyErr};

use crate::inference::errors::CIError;

pub type CorrResult<T> = Result<T, CorrError>;

/// CorrError — error conditions for correlation estimation.
///
/// Variants
/// --------
/// - `EmptySeries`
///   The input series contains no observations.
/// - `NonFiniteValue(value)`
///   A sample is `NaN` or ±∞ and cannot enter lagged-product sums.
/// - `InvalidLag { lag, n }`
///   A requested lag is outside `[0, n-1]` for a series of length `n`.
/// - `NonIncreasingLags { prev, next }`
///   A lag set is not strictly increasing.
/// - `InsufficientData { method, max_lag, n }`
///   The series is too short to support the requested maximum lag under
///   the chosen estimation method.
/// - `ZeroVariance`
///   The lag-0 autocovariance is exactly zero (constant series), so
///   correlation coefficients are undefined.
/// - `InvalidAlpha(alpha)`
///   A confidence level outside the open interval (0, 1).
/// - `UnknownMethod(name)`
///   A method string that does not name a supported partial
///   autocorrelation algorithm.
///
/// Notes
/// -----
/// - Implements [`std::error::Error`] and [`std::fmt::Display`] for
///   idiomatic `?`-based propagation.
/// - A feature-gated `From<CorrError> for PyErr` maps all cases to
///   `ValueError` at the Python boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum CorrError {
    //------ Input validation errors ------
    EmptySeries,
    NonFiniteValue(f64),
    InvalidLag { lag: usize, n: usize },
    NonIncreasingLags { prev: usize, next: usize },
    InsufficientData { method: &'static str, max_lag: usize, n: usize },
    //------ Numerical errors ------
    ZeroVariance,
    //------ Configuration errors ------
    InvalidAlpha(f64),
    UnknownMethod(String),
}

impl std::error::Error for CorrError {}

impl std::fmt::Display for CorrError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorrError::EmptySeries => {
                write!(f, "Series must contain at least one observation.")
            }
            CorrError::NonFiniteValue(value) => {
                write!(f, "Invalid sample value: {value}. Must be a finite number.")
            }
            CorrError::InvalidLag { lag, n } => {
                write!(f, "Invalid lag {lag} for series of length {n}. Must satisfy lag < n.")
            }
            CorrError::NonIncreasingLags { prev, next } => {
                write!(f, "Lags must be strictly increasing; got {next} after {prev}.")
            }
            CorrError::InsufficientData { method, max_lag, n } => {
                write!(
                    f,
                    "Series of length {n} is too short for max lag {max_lag} with the {method} method."
                )
            }
            CorrError::ZeroVariance => {
                write!(f, "Lag-0 autocovariance is zero; correlation is undefined for a constant series.")
            }
            CorrError::InvalidAlpha(alpha) => {
                write!(f, "Invalid confidence level alpha = {alpha}. Must lie in (0, 1).")
            }
            CorrError::UnknownMethod(name) => {
                write!(
                    f,
                    "Unknown partial autocorrelation method {name:?} (expected 'yw', 'ywm', 'ols', 'ld', or 'ldb')."
                )
            }
        }
    }
}

impl From<CIError> for CorrError {
    fn from(err: CIError) -> CorrError {
        match err {
            CIError::InvalidAlpha(alpha) => CorrError::InvalidAlpha(alpha),
            CIError::InvalidSeriesLength(_) => CorrError::EmptySeries,
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<CorrError> for PyErr {
    fn from(err: CorrError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// CorrWarning — non-fatal numerical diagnostics.
///
/// Warnings are carried on a result rather than raised as errors: the
/// computation still returns best-effort coefficients, and the caller
/// decides whether the conditioning of the underlying linear systems is
/// acceptable.
///
/// Variants
/// --------
/// - `IllConditioned { lag, rcond }`
///   The symmetric system solved at the given lag order had a reciprocal
///   condition number at or below `stability::RCOND_TOL`; eigendirections
///   below the truncation cutoff were discarded before solving.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CorrWarning {
    IllConditioned { lag: usize, rcond: f64 },
}

impl std::fmt::Display for CorrWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorrWarning::IllConditioned { lag, rcond } => {
                write!(
                    f,
                    "Ill-conditioned system at lag {lag} (reciprocal condition number {rcond:e}); coefficient is best-effort."
                )
            }
        }
    }
}
