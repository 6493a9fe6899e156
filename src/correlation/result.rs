//! correlation::result — immutable estimation outcomes.
//!
//! Purpose
//! -------
//! Represent the outcome of a single autocorrelation or partial
//! autocorrelation estimation: one coefficient per requested lag, an
//! optional per-lag confidence band, and any non-fatal numerical
//! warnings accumulated along the way.
//!
//! Key behaviors
//! -------------
//! - Hold exactly one coefficient per requested lag, in lag order.
//! - Optionally carry symmetric (low, high) bounds aligned with the
//!   coefficients.
//! - Expose lookup accessors by lag so downstream code does not depend
//!   on positional layout.
//!
//! Invariants
//! ----------
//! - `lags`, `coefficients`, and (when present) `confidence` all have the
//!   same length.
//! - Bounds always bracket their coefficient; at lag 0 the band is exact
//!   with zero width.
//!
//! Notes
//! -----
//! - Designed as a value object; it does not own the original series.
//!   A separate presentation layer may consume it for display; this
//!   crate never renders anything.

use crate::correlation::errors::CorrWarning;

/// Outcome of one estimation call.
///
/// Construction happens inside the estimators; callers only read.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationResult {
    lags: Vec<usize>,
    coefficients: Vec<f64>,
    confidence: Option<Vec<(f64, f64)>>,
    warnings: Vec<CorrWarning>,
}

impl CorrelationResult {
    pub(crate) fn new(lags: Vec<usize>, coefficients: Vec<f64>) -> Self {
        debug_assert_eq!(lags.len(), coefficients.len());
        CorrelationResult { lags, coefficients, confidence: None, warnings: Vec::new() }
    }

    pub(crate) fn with_confidence(mut self, bounds: Vec<(f64, f64)>) -> Self {
        debug_assert_eq!(bounds.len(), self.lags.len());
        self.confidence = Some(bounds);
        self
    }

    pub(crate) fn with_warnings(mut self, warnings: Vec<CorrWarning>) -> Self {
        self.warnings = warnings;
        self
    }

    /// Requested lags, in increasing order.
    pub fn lags(&self) -> &[usize] {
        &self.lags
    }

    /// Estimated coefficients, aligned with [`lags`](Self::lags).
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Coefficient at a specific lag, or `None` if the lag was not
    /// requested.
    pub fn coefficient(&self, lag: usize) -> Option<f64> {
        self.position(lag).map(|i| self.coefficients[i])
    }

    /// Confidence bounds aligned with the coefficients, when a band was
    /// requested.
    pub fn confidence(&self) -> Option<&[(f64, f64)]> {
        self.confidence.as_deref()
    }

    /// Confidence bounds at a specific lag, when present.
    pub fn confidence_at(&self, lag: usize) -> Option<(f64, f64)> {
        let bounds = self.confidence.as_ref()?;
        self.position(lag).map(|i| bounds[i])
    }

    /// Non-fatal numerical warnings accumulated during estimation.
    pub fn warnings(&self) -> &[CorrWarning] {
        &self.warnings
    }

    /// Number of (lag, coefficient) entries.
    pub fn len(&self) -> usize {
        self.lags.len()
    }

    /// Whether the result holds no entries (empty lag set requested).
    pub fn is_empty(&self) -> bool {
        self.lags.is_empty()
    }

    fn position(&self, lag: usize) -> Option<usize> {
        self.lags.binary_search(&lag).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correlation::errors::CorrWarning;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Alignment of lags, coefficients, and bounds.
    // - Lag-based lookup for coefficients and bounds.
    // - Warning accumulation.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that lag-based lookup returns the aligned coefficient and
    // that unrequested lags return None.
    //
    // Given
    // -----
    // - A result over lags [0, 2, 5].
    //
    // Expect
    // ------
    // - coefficient(2) is the second entry; coefficient(1) is None.
    fn coefficient_lookup_uses_lag_not_position() {
        // Arrange
        let result = CorrelationResult::new(vec![0, 2, 5], vec![1.0, 0.4, -0.1]);

        // Act / Assert
        assert_eq!(result.coefficient(0), Some(1.0));
        assert_eq!(result.coefficient(2), Some(0.4));
        assert_eq!(result.coefficient(5), Some(-0.1));
        assert_eq!(result.coefficient(1), None);
        assert_eq!(result.len(), 3);
        assert!(!result.is_empty());
    }

    #[test]
    // Purpose
    // -------
    // Verify that attached bounds are retrievable by lag and absent by
    // default.
    //
    // Given
    // -----
    // - A result over lags [0, 1] with bounds attached for both.
    //
    // Expect
    // ------
    // - confidence_at(1) returns the second pair; a band-free result
    //   returns None everywhere.
    fn confidence_bounds_align_with_lags() {
        // Arrange
        let bare = CorrelationResult::new(vec![0, 1], vec![1.0, 0.5]);
        let banded = CorrelationResult::new(vec![0, 1], vec![1.0, 0.5])
            .with_confidence(vec![(1.0, 1.0), (0.3, 0.7)]);

        // Act / Assert
        assert!(bare.confidence().is_none());
        assert_eq!(bare.confidence_at(1), None);
        assert_eq!(banded.confidence_at(0), Some((1.0, 1.0)));
        assert_eq!(banded.confidence_at(1), Some((0.3, 0.7)));
    }

    #[test]
    // Purpose
    // -------
    // Ensure warnings attached during estimation are surfaced in order.
    //
    // Given
    // -----
    // - A result with one IllConditioned warning.
    //
    // Expect
    // ------
    // - warnings() exposes exactly that warning.
    fn warnings_are_carried_on_the_result() {
        // Arrange
        let warning = CorrWarning::IllConditioned { lag: 3, rcond: 0.0 };
        let result =
            CorrelationResult::new(vec![0], vec![1.0]).with_warnings(vec![warning]);

        // Act / Assert
        assert_eq!(result.warnings(), &[warning]);
    }
}
