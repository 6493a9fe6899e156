//! correlation::validation — shared input guards for estimation routines.
//!
//! Purpose
//! -------
//! Centralize basic input validation for the correlation estimators in
//! this crate. This avoids duplicating checks on series content and lag
//! ranges across the autocovariance and partial-autocorrelation modules.
//!
//! Key behaviors
//! -------------
//! - Enforce simple preconditions on series samples before any lagged
//!   computation is performed.
//! - Map invalid inputs into structured [`CorrError`] values for
//!   consistent error handling in Rust and Python bindings.
//!
//! Conventions
//! -----------
//! - This module is purely about *validation*; it performs no I/O and
//!   allocates nothing beyond what error construction requires.
//! - Callers are responsible for any further method-specific checks
//!   (e.g., the OLS sample-size requirement), which live next to the
//!   estimator they guard.

use crate::correlation::errors::{CorrError, CorrResult};

/// Validate that a series is non-empty and contains only finite values.
///
/// Parameters
/// ----------
/// - `values`: `&[f64]`
///   Candidate sample sequence.
///
/// Returns
/// -------
/// `CorrResult<()>`
///   - `Ok(())` when `values` is non-empty and every entry is finite.
///   - `Err(CorrError::EmptySeries)` when `values` is empty.
///   - `Err(CorrError::NonFiniteValue(v))` for the first `NaN` or ±∞
///     entry `v` encountered.
pub fn validate_series(values: &[f64]) -> CorrResult<()> {
    if values.is_empty() {
        return Err(CorrError::EmptySeries);
    }

    for &value in values {
        if !value.is_finite() {
            return Err(CorrError::NonFiniteValue(value));
        }
    }

    Ok(())
}

/// Validate that every lag lies inside `[0, n - 1]`.
///
/// Parameters
/// ----------
/// - `lags`: `&[usize]`
///   Requested lags, already known to be strictly increasing.
/// - `n`: `usize`
///   Series length.
///
/// Returns
/// -------
/// `CorrResult<()>`
///   - `Ok(())` when all lags satisfy `lag < n`.
///   - `Err(CorrError::InvalidLag { lag, n })` for the first violating lag.
pub fn validate_lags(lags: &[usize], n: usize) -> CorrResult<()> {
    for &lag in lags {
        if lag >= n {
            return Err(CorrError::InvalidLag { lag, n });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Successful validation of well-formed inputs.
    // - Each error branch: empty series, non-finite value, out-of-range
    //   lag.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `validate_series` succeeds on a finite, non-empty
    // series.
    //
    // Given
    // -----
    // - A finite series of length 3.
    //
    // Expect
    // ------
    // - `validate_series` returns `Ok(())`.
    fn validate_series_finite_values_succeeds() {
        // Arrange
        let data = [0.1_f64, -0.2, 0.3];

        // Act
        let result = validate_series(&data);

        // Assert
        assert!(result.is_ok(), "Expected Ok(()) for valid input, got {result:?}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure that an empty series is rejected with
    // `CorrError::EmptySeries`.
    //
    // Given
    // -----
    // - An empty slice.
    //
    // Expect
    // ------
    // - `validate_series` returns `Err(CorrError::EmptySeries)`.
    fn validate_series_empty_returns_empty_series() {
        // Arrange
        let data: [f64; 0] = [];

        // Act
        let result = validate_series(&data);

        // Assert
        assert_eq!(result, Err(CorrError::EmptySeries));
    }

    #[test]
    // Purpose
    // -------
    // Verify that a NaN in the data triggers `NonFiniteValue` with the
    // offending payload.
    //
    // Given
    // -----
    // - A series containing a NaN.
    //
    // Expect
    // ------
    // - `validate_series` returns `Err(CorrError::NonFiniteValue(v))`
    //   where `v` is non-finite.
    fn validate_series_nan_returns_non_finite_value() {
        // Arrange
        let data = [0.1_f64, f64::NAN, 0.3];

        // Act
        let result = validate_series(&data);

        // Assert
        match result {
            Err(CorrError::NonFiniteValue(v)) => {
                assert!(!v.is_finite(), "payload should be non-finite, got {v}");
            }
            other => panic!("expected NonFiniteValue error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure that a lag at or beyond the series length is rejected with
    // `InvalidLag` carrying both the lag and the length.
    //
    // Given
    // -----
    // - Lags [0, 10] against a series of length 5.
    //
    // Expect
    // ------
    // - `validate_lags` returns `Err(CorrError::InvalidLag { lag: 10, n: 5 })`.
    fn validate_lags_out_of_range_returns_invalid_lag() {
        // Arrange
        let lags = [0_usize, 10];

        // Act
        let result = validate_lags(&lags, 5);

        // Assert
        assert_eq!(result, Err(CorrError::InvalidLag { lag: 10, n: 5 }));
    }

    #[test]
    // Purpose
    // -------
    // Verify that the boundary lag n - 1 is accepted.
    //
    // Given
    // -----
    // - Lags [0, 4] against a series of length 5.
    //
    // Expect
    // ------
    // - `validate_lags` returns `Ok(())`.
    fn validate_lags_boundary_lag_is_accepted() {
        // Arrange
        let lags = [0_usize, 4];

        // Act
        let result = validate_lags(&lags, 5);

        // Assert
        assert!(result.is_ok(), "lag n-1 should be valid, got {result:?}");
    }
}
