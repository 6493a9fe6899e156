//! correlation — autocorrelation and partial autocorrelation estimation.
//!
//! Purpose
//! -------
//! Collect the estimation routines and their shared infrastructure for
//! sample correlograms: validated series buffers, lag sets, the
//! autocovariance/autocorrelation estimator with direct and FFT paths,
//! and the partial autocorrelation estimator with its Yule-Walker, OLS,
//! and Levinson-Durbin families.
//!
//! Key behaviors
//! -------------
//! - Expose the two estimation entry points
//!   [`estimate_autocorrelation`](acovf::estimate_autocorrelation) and
//!   [`estimate_partial_autocorrelation`](pacf::estimate_partial_autocorrelation),
//!   both returning immutable [`CorrelationResult`] values.
//! - Centralize input guards in [`validation`], ensuring series content
//!   and lag ranges are checked once in a consistent way across
//!   estimator modules.
//! - Provide a dedicated error type [`CorrError`], result alias
//!   [`CorrResult`], and the non-fatal [`CorrWarning`] diagnostic, plus
//!   a conversion layer to Python exceptions when the `python-bindings`
//!   feature is enabled.
//! - Keep every numerically sensitive solve behind
//!   [`stability::solve_symmetric`], with documented conditioning
//!   thresholds.
//!
//! Invariants & assumptions
//! ------------------------
//! - Series are validated at [`SeriesBuffer`] construction: non-empty
//!   and finite. Estimators never re-validate content.
//! - Lag sets are strictly increasing by construction and range-checked
//!   against the series length at estimation time.
//! - Estimators report failures via [`CorrResult`] and never panic on
//!   user-facing invalid inputs; ill-conditioning is a warning on the
//!   result, not an error.
//! - All operations are pure functions of their inputs: no I/O, no
//!   shared mutable state, no locking. Concurrent use on independent
//!   inputs needs no synchronization.
//!
//! Conventions
//! -----------
//! - Lag k pairs (xₜ, xₜ₊ₖ) for t = 0,…,n−k−1; the biased convention
//!   divides by n, the unbiased one by n−k.
//! - Coefficients at lag 0 are exactly 1.0 for both estimators.
//! - Error messages are phrased in terms of domain constraints such as
//!   "lag must satisfy lag < n" rather than low-level details.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use rust_correlogram::correlation::{
//!       estimate_autocorrelation, AcfOptions, SeriesBuffer,
//!   };
//!
//!   let series = SeriesBuffer::from_values(vec![1.0, 2.0, 3.0, 4.0, 5.0])?;
//!   let acf = estimate_autocorrelation(&series, None, &AcfOptions::default())?;
//!   assert_eq!(acf.coefficient(0), Some(1.0));
//!   # Ok::<(), rust_correlogram::correlation::CorrError>(())
//!   ```
//!
//! - A presentation layer may consume [`CorrelationResult`] for display;
//!   this subtree exposes no rendering capability of any kind.
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each module: hand-pinned coefficients in
//!   [`acovf`] and [`pacf`], guard coverage in [`validation`], solver
//!   behavior in [`stability`].
//! - The crate-level integration suite exercises the full pipeline on
//!   longer synthetic series.

pub mod acovf;
pub mod errors;
pub mod lags;
pub mod pacf;
pub mod result;
pub mod series;
pub mod stability;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::acovf::{estimate_autocorrelation, AcfOptions};
pub use self::errors::{CorrError, CorrResult, CorrWarning};
pub use self::lags::LagSet;
pub use self::pacf::{estimate_partial_autocorrelation, PacfMethod, PacfOptions};
pub use self::result::CorrelationResult;
pub use self::series::SeriesBuffer;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_correlogram::correlation::prelude::*;
//
// to import the main estimation surface in a single line.

pub mod prelude {
    pub use super::acovf::{estimate_autocorrelation, AcfOptions};
    pub use super::errors::{CorrError, CorrResult, CorrWarning};
    pub use super::lags::LagSet;
    pub use super::pacf::{estimate_partial_autocorrelation, PacfMethod, PacfOptions};
    pub use super::result::CorrelationResult;
    pub use super::series::SeriesBuffer;
}
