//! inference — confidence bands for estimated correlograms.
//!
//! Purpose
//! -------
//! Provide post-estimation uncertainty quantification for the coefficients
//! produced by the `correlation` subtree. This module computes symmetric
//! large-sample confidence bounds: Bartlett-formula bands for
//! autocorrelations and the conventional constant-variance band for
//! partial autocorrelations.
//!
//! Key behaviors
//! -------------
//! - Define a unified error and result type, [`CIError`] and
//!   [`CIResult`], for confidence-band preconditions (alpha range,
//!   sample size).
//! - Build Bartlett bands via [`compute_confidence_interval`], where the
//!   variance at lag k accumulates the squared coefficients at earlier
//!   lags.
//! - Build flat ±z·n^{-1/2} bands via [`pacf_confidence_interval`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Coefficient inputs are (lag, value) pairs in increasing lag order;
//!   lag 0 always receives an exact zero-width band.
//! - Returned bounds bracket their coefficient with non-negative width.
//! - All numerical routines return [`CIError`] on failure rather than
//!   panicking; callers handle these errors explicitly.
//!
//! Conventions
//! -----------
//! - `alpha` is the significance level: a band at `alpha = 0.05` covers
//!   the 95% level. The quantile z_{1−α/2} comes from the standard
//!   normal distribution.
//! - All functions are pure with respect to I/O: no logging, no global
//!   state, and no `unsafe` code paths.
//!
//! Downstream usage
//! ----------------
//! - The `correlation` estimators attach bands when their options carry
//!   an `alpha`, folding [`CIError`] into the estimation error type.
//! - Callers with external coefficient sequences can invoke the band
//!   calculators directly; nothing here depends on how the coefficients
//!   were produced.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`bartlett`] pin the variance recursion, the flat
//!   band width, the bracketing invariants, and both error branches.
//! - Band attachment during estimation is exercised by the correlation
//!   modules and the integration suite.

pub mod bartlett;
pub mod errors;

// ---- Re-exports (primary surface) -----------------------------------------

pub use self::bartlett::{compute_confidence_interval, pacf_confidence_interval};
pub use self::errors::{CIError, CIResult};

// ---- Optional convenience prelude for downstream crates ------------------
//
// Downstream crates can `use rust_correlogram::inference::prelude::*;` to
// import the confidence-band surface in a single line.

pub mod prelude {
    pub use super::bartlett::{compute_confidence_interval, pacf_confidence_interval};
    pub use super::errors::{CIError, CIResult};
}
