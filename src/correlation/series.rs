//! correlation::series — validated, immutable sample buffers.
//!
//! Purpose
//! -------
//! Provide [`SeriesBuffer`], the validated entry point for all estimation
//! routines in this crate. Construction is the single place where series
//! content is checked, so every downstream computation can assume a
//! non-empty, finite sample sequence.
//!
//! Key behaviors
//! -------------
//! - Reject empty input and non-finite samples at construction time via
//!   `validation::validate_series`.
//! - Cache the sample mean once, since every estimator centers on it.
//! - Expose length, indexed read access, and a borrowed slice; no
//!   mutation is possible after construction.
//!
//! Invariants & assumptions
//! ------------------------
//! - `len() >= 1` and every sample is finite for any successfully
//!   constructed buffer.
//! - The cached mean equals the arithmetic mean of the stored samples.
//!
//! Downstream usage
//! ----------------
//! - Estimators borrow a `&SeriesBuffer`; the buffer is owned by the
//!   caller and can be shared freely across threads since it is never
//!   mutated.

use ndarray::Array1;

use crate::correlation::errors::CorrResult;
use crate::correlation::validation::validate_series;

/// SeriesBuffer — immutable view over a validated sample sequence.
///
/// Purpose
/// -------
/// Own a time series that has passed content validation, together with
/// its precomputed sample mean.
///
/// Fields
/// ------
/// - `values`: `Array1<f64>`
///   The samples in temporal order.
/// - `mean`: `f64`
///   Arithmetic mean of `values`, computed once at construction.
///
/// Invariants
/// ----------
/// - `values` is non-empty and contains only finite numbers.
///
/// Performance
/// -----------
/// - Construction is O(n) (one validation scan plus one summation);
///   all accessors are O(1).
///
/// Examples
/// --------
/// ```rust
/// use rust_correlogram::correlation::series::SeriesBuffer;
///
/// let series = SeriesBuffer::from_values(vec![1.0, 2.0, 3.0]).unwrap();
/// assert_eq!(series.len(), 3);
/// assert_eq!(series.mean(), 2.0);
/// assert!(SeriesBuffer::from_values(Vec::new()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesBuffer {
    values: Array1<f64>,
    mean: f64,
}

impl SeriesBuffer {
    /// Build a buffer from owned samples.
    ///
    /// Parameters
    /// ----------
    /// - `values`: `Vec<f64>`
    ///   Samples in temporal order. Must be non-empty and finite.
    ///
    /// Returns
    /// -------
    /// `CorrResult<SeriesBuffer>`
    ///   - `Ok(buffer)` when validation passes.
    ///   - `Err(CorrError::EmptySeries)` for empty input.
    ///   - `Err(CorrError::NonFiniteValue(v))` for the first NaN or ±∞.
    pub fn from_values(values: Vec<f64>) -> CorrResult<Self> {
        validate_series(&values)?;
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        Ok(SeriesBuffer { values: Array1::from(values), mean })
    }

    /// Build a buffer by copying from a slice.
    pub fn from_slice(values: &[f64]) -> CorrResult<Self> {
        SeriesBuffer::from_values(values.to_vec())
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false` for a successfully constructed buffer; provided for
    /// API completeness.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sample at position `index` (0-based, temporal order).
    ///
    /// Panics on out-of-range access, like slice indexing.
    pub fn value(&self, index: usize) -> f64 {
        self.values[index]
    }

    /// Borrowed view of all samples.
    pub fn values(&self) -> &[f64] {
        self.values.as_slice().expect("owned 1-D array is contiguous")
    }

    /// Cached arithmetic mean of the samples.
    pub fn mean(&self) -> f64 {
        self.mean
    }
}
