//! Unified error handling for confidence-interval routines.
//!
//! This module defines `CIError`, the error type used by the Bartlett and
//! large-sample confidence band calculators, together with the alias
//! `CIResult<T>` that standardizes the return type across inference code.

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, PyErr};

/// Error type for confidence-interval calculators.
///
/// Covers the two preconditions of the band formulas: a confidence level
/// inside the open unit interval and a strictly positive sample size.
/// Designed to provide readable diagnostics through `Display` and to fold
/// into `correlation::CorrError` when bands are attached during estimation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CIError {
    /// The significance level lies outside (0, 1).
    InvalidAlpha(f64),

    /// The sample size is zero, so no large-sample variance exists.
    InvalidSeriesLength(usize),
}

pub type CIResult<T> = Result<T, CIError>;

impl std::error::Error for CIError {}

impl std::fmt::Display for CIError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CIError::InvalidAlpha(alpha) => {
                write!(f, "Inference Error: alpha = {} must lie in (0, 1)", alpha)
            }
            CIError::InvalidSeriesLength(n) => {
                write!(f, "Inference Error: series length {} must be positive", n)
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<CIError> for PyErr {
    fn from(err: CIError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Verify that both CIError variants embed their payload in the
    // Display message.
    //
    // Given
    // -----
    // - `InvalidAlpha(1.5)` and `InvalidSeriesLength(0)`.
    //
    // Expect
    // ------
    // - The formatted messages contain "1.5" and "0" respectively.
    fn ci_error_display_includes_payload() {
        // Act
        let alpha_msg = CIError::InvalidAlpha(1.5).to_string();
        let len_msg = CIError::InvalidSeriesLength(0).to_string();

        // Assert
        assert!(alpha_msg.contains("1.5"), "Got: {alpha_msg}");
        assert!(len_msg.contains('0'), "Got: {len_msg}");
    }
}
