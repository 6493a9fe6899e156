//! correlation::acovf — sample autocovariance and autocorrelation.
//!
//! Purpose
//! -------
//! Estimate mean-centered sample autocovariances at a set of lags and
//! normalize them into autocorrelation coefficients. Two computation
//! paths are provided: a direct lagged-product sum, and a spectral
//! convolution that computes every lag up to the maximum in one FFT
//! round trip. Both paths produce the same numbers up to floating-point
//! roundoff; their agreement within 1e-9 relative tolerance is an
//! asserted test property, not an implementation accident.
//!
//! Key behaviors
//! -------------
//! - Compute γ̂ₖ = cₖ · ∑ₜ (xₜ − x̄)(xₜ₊ₖ − x̄) with cₖ = 1/(n−k)
//!   (unbiased) or 1/n (biased), over t = 0,…,n−k−1.
//! - Normalize by γ̂₀ so that the lag-0 coefficient is exactly 1.0.
//! - Optionally attach a Bartlett-formula confidence band when
//!   [`AcfOptions::alpha`] is set, via `inference::bartlett`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Input is a validated [`SeriesBuffer`]; samples are finite and
//!   n ≥ 1.
//! - Every requested lag satisfies lag < n (checked on entry).
//! - A constant series has γ̂₀ = 0 and is rejected with
//!   `CorrError::ZeroVariance` rather than dividing by zero.
//!
//! Conventions
//! -----------
//! - The FFT path zero-pads to the next power of two at or above 2n so
//!   the circular convolution is linear; the inverse transform is
//!   unnormalized and is rescaled by the padded length.
//! - No planner state is cached between calls; estimation stays a pure
//!   function of its inputs.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the hand-computed lag-1 coefficient of
//!   [1, 2, 3, 4, 5] for both bias conventions (0.4 biased, 0.5
//!   unbiased), verify FFT/direct agreement, and exercise the
//!   degenerate and invalid-lag error paths.

use rustfft::{num_complex::Complex, FftPlanner};

use crate::correlation::errors::{CorrError, CorrResult};
use crate::correlation::lags::LagSet;
use crate::correlation::result::CorrelationResult;
use crate::correlation::series::SeriesBuffer;
use crate::correlation::validation::validate_lags;
use crate::inference::bartlett::compute_confidence_interval;

/// AcfOptions — configuration for autocorrelation estimation.
///
/// Purpose
/// -------
/// Enumerate the recognized estimation options explicitly instead of
/// forwarding an open-ended argument bag: bias convention, computation
/// path, and an optional confidence level.
///
/// Fields
/// ------
/// - `unbiased`: `bool`
///   If `true`, autocovariance denominators are n−k; otherwise n.
/// - `use_fft`: `bool`
///   If `true`, all lags up to the maximum are computed in one spectral
///   convolution pass.
/// - `alpha`: `Option<f64>`
///   When `Some(a)` with a ∈ (0, 1), a Bartlett-formula confidence band
///   at level 1−a is attached to the result.
///
/// Notes
/// -----
/// - `Default` matches the common correlogram baseline: biased
///   denominators, FFT path on, no band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcfOptions {
    /// Use n−k denominators instead of n.
    pub unbiased: bool,
    /// Compute via spectral convolution instead of direct sums.
    pub use_fft: bool,
    /// Optional significance level for a Bartlett confidence band.
    pub alpha: Option<f64>,
}

impl AcfOptions {
    /// Construct an `AcfOptions` value from explicit settings.
    pub fn new(unbiased: bool, use_fft: bool, alpha: Option<f64>) -> AcfOptions {
        AcfOptions { unbiased, use_fft, alpha }
    }
}

impl Default for AcfOptions {
    fn default() -> Self {
        Self { unbiased: false, use_fft: true, alpha: None }
    }
}

/// Estimate autocorrelation coefficients at the requested lags.
///
/// Parameters
/// ----------
/// - `series`: `&SeriesBuffer`
///   Validated input samples.
/// - `lags`: `Option<&LagSet>`
///   Lags to report. `None` selects `0..=min(n−1, 40)`.
/// - `options`: `&AcfOptions`
///   Bias convention, computation path, and optional confidence level.
///
/// Returns
/// -------
/// `CorrResult<CorrelationResult>`
///   One coefficient per requested lag, with `coefficient[0] == 1.0`
///   whenever lag 0 is requested, plus a confidence band when
///   `options.alpha` is set.
///
/// Errors
/// ------
/// - `CorrError::InvalidLag`
///   A requested lag is ≥ n.
/// - `CorrError::ZeroVariance`
///   The series is constant, so normalization is undefined.
/// - `CorrError::InvalidAlpha`
///   `options.alpha` lies outside (0, 1).
///
/// Panics
/// ------
/// - Never panics under the documented invariants.
///
/// Notes
/// -----
/// - When a confidence band is requested, Bartlett variances are
///   accumulated over the full contiguous coefficient sequence up to the
///   maximum lag, then the requested lags are selected; sparse lag sets
///   therefore get the same band they would inside a contiguous request.
///
/// Examples
/// --------
/// ```rust
/// use rust_correlogram::correlation::acovf::{estimate_autocorrelation, AcfOptions};
/// use rust_correlogram::correlation::lags::LagSet;
/// use rust_correlogram::correlation::series::SeriesBuffer;
///
/// let series = SeriesBuffer::from_values(vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// let lags = LagSet::new(vec![0, 1]).unwrap();
/// let options = AcfOptions::default();
///
/// let result = estimate_autocorrelation(&series, Some(&lags), &options).unwrap();
/// assert_eq!(result.coefficient(0), Some(1.0));
/// assert!((result.coefficient(1).unwrap() - 0.4).abs() < 1e-12);
/// ```
pub fn estimate_autocorrelation(
    series: &SeriesBuffer, lags: Option<&LagSet>, options: &AcfOptions,
) -> CorrResult<CorrelationResult> {
    let n = series.len();
    let default_lags;
    let lags = match lags {
        Some(set) => set,
        None => {
            default_lags = LagSet::default_for_len(n);
            &default_lags
        }
    };
    validate_lags(lags.as_slice(), n)?;

    let max_lag = match lags.max_lag() {
        Some(max_lag) => max_lag,
        None => return Ok(CorrelationResult::new(Vec::new(), Vec::new())),
    };

    let acov = autocovariances(series, max_lag, options.unbiased, options.use_fft);
    let gamma0 = acov[0];
    if gamma0 == 0.0 {
        return Err(CorrError::ZeroVariance);
    }

    // Full contiguous coefficient sequence; lag 0 is pinned to exactly 1.
    let coeffs_full: Vec<f64> =
        acov.iter().enumerate().map(|(k, &g)| if k == 0 { 1.0 } else { g / gamma0 }).collect();

    let coefficients: Vec<f64> = lags.iter().map(|&k| coeffs_full[k]).collect();
    let mut result = CorrelationResult::new(lags.as_slice().to_vec(), coefficients);

    if let Some(alpha) = options.alpha {
        let pairs: Vec<(usize, f64)> =
            coeffs_full.iter().enumerate().map(|(k, &r)| (k, r)).collect();
        let bounds_full = compute_confidence_interval(n, &pairs, alpha)?;
        let bounds: Vec<(f64, f64)> = lags.iter().map(|&k| bounds_full[k].1).collect();
        result = result.with_confidence(bounds);
    }

    Ok(result)
}

/// Mean-centered sample autocovariances for lags `0..=max_lag`.
///
/// # Arguments
/// - `series`: validated input samples.
/// - `max_lag`: largest lag to compute; callers guarantee `max_lag < n`.
/// - `unbiased`: use n−k denominators instead of n.
/// - `use_fft`: compute via spectral convolution instead of direct sums.
///
/// # Returns
/// A vector of length `max_lag + 1` with γ̂ₖ at index k.
pub(crate) fn autocovariances(
    series: &SeriesBuffer, max_lag: usize, unbiased: bool, use_fft: bool,
) -> Vec<f64> {
    debug_assert!(max_lag < series.len());
    let mean = series.mean();
    let centered: Vec<f64> = series.values().iter().map(|&x| x - mean).collect();
    if use_fft {
        fft_autocovariances(&centered, max_lag, unbiased)
    } else {
        direct_autocovariances(&centered, max_lag, unbiased)
    }
}

/// Direct lagged-product autocovariances on a centered series.
///
/// For each lag k this forms ∑ₜ x̃ₜ x̃ₜ₊ₖ by zipping the series against
/// its k-shifted self, then applies the requested denominator.
fn direct_autocovariances(centered: &[f64], max_lag: usize, unbiased: bool) -> Vec<f64> {
    let n = centered.len();
    (0..=max_lag)
        .map(|k| {
            let sum: f64 = centered[k..]
                .iter()
                .zip(centered)
                .map(|(x_t, x_t_min_k): (&f64, &f64)| x_t * x_t_min_k)
                .sum();
            let denom = if unbiased { (n - k) as f64 } else { n as f64 };
            sum / denom
        })
        .collect()
}

/// Spectral-convolution autocovariances on a centered series.
///
/// Uses the convolution theorem: the inverse transform of
/// `FFT(x̃) · conj(FFT(x̃))` on a zero-padded buffer yields the raw
/// lagged-product sums ∑ₜ x̃ₜ x̃ₜ₊ₖ at index k. The buffer is padded to
/// the next power of two at or above 2n so the circular convolution is
/// linear, and the unnormalized inverse transform is rescaled by the
/// padded length before the bias denominator is applied.
fn fft_autocovariances(centered: &[f64], max_lag: usize, unbiased: bool) -> Vec<f64> {
    let n = centered.len();
    let padded_len = (2 * n).next_power_of_two();

    let mut buffer: Vec<Complex<f64>> =
        centered.iter().map(|&x| Complex::new(x, 0.0)).collect();
    buffer.resize(padded_len, Complex::new(0.0, 0.0));

    let mut planner = FftPlanner::<f64>::new();
    let forward = planner.plan_fft_forward(padded_len);
    forward.process(&mut buffer);

    // Power spectrum: FFT(x) * conj(FFT(x)).
    for value in buffer.iter_mut() {
        let v = *value;
        *value = v * v.conj();
    }

    let inverse = planner.plan_fft_inverse(padded_len);
    inverse.process(&mut buffer);

    (0..=max_lag)
        .map(|k| {
            // The inverse transform is unnormalized; divide by the padded
            // length to recover the raw lagged-product sum.
            let sum = buffer[k].re / padded_len as f64;
            let denom = if unbiased { (n - k) as f64 } else { n as f64 };
            sum / denom
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correlation::errors::CorrError;
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Hand-computed lag-1 coefficients of [1, 2, 3, 4, 5] for both bias
    //   conventions.
    // - Exact lag-0 normalization.
    // - Agreement of the FFT and direct paths within 1e-9 relative error.
    // - Error paths: out-of-range lag, constant series, default lag set.
    //
    // They intentionally DO NOT cover:
    // - Confidence-band numerics, which are pinned in inference::bartlett.
    // -------------------------------------------------------------------------

    fn five_point_series() -> SeriesBuffer {
        SeriesBuffer::from_values(vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // Pin the biased lag-1 autocorrelation of [1, 2, 3, 4, 5].
    //
    // Given
    // -----
    // - Centered series [-2, -1, 0, 1, 2], so γ̂₀ = 10/5 = 2 and
    //   γ̂₁ = 4/5 = 0.8 with the biased (divide-by-n) convention.
    //
    // Expect
    // ------
    // - coefficient(0) == 1.0 exactly and coefficient(1) == 0.8/2 = 0.4.
    fn estimate_autocorrelation_biased_lag_one_matches_hand_computation() {
        // Arrange
        let series = five_point_series();
        let lags = LagSet::new(vec![0, 1]).unwrap();
        let options = AcfOptions::new(false, false, None);

        // Act
        let result = estimate_autocorrelation(&series, Some(&lags), &options)
            .expect("estimation should succeed");

        // Assert
        assert_eq!(result.coefficient(0), Some(1.0));
        assert_relative_eq!(result.coefficient(1).unwrap(), 0.4, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Pin the unbiased lag-1 autocorrelation of [1, 2, 3, 4, 5].
    //
    // Given
    // -----
    // - The same centered series; the unbiased convention divides the
    //   lag-1 sum by n−1 = 4, so γ̂₁ = 1.0 and γ̂₀ = 2.0.
    //
    // Expect
    // ------
    // - coefficient(1) == 0.5.
    fn estimate_autocorrelation_unbiased_lag_one_matches_hand_computation() {
        // Arrange
        let series = five_point_series();
        let lags = LagSet::new(vec![0, 1]).unwrap();
        let options = AcfOptions::new(true, false, None);

        // Act
        let result = estimate_autocorrelation(&series, Some(&lags), &options)
            .expect("estimation should succeed");

        // Assert
        assert_relative_eq!(result.coefficient(1).unwrap(), 0.5, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Verify that the FFT path reproduces the direct path within 1e-9
    // relative error across all lags and both bias conventions.
    //
    // Given
    // -----
    // - A deterministic oscillating series of length 64 with a trend,
    //   and every lag up to n−1.
    //
    // Expect
    // ------
    // - Per-lag agreement within 1e-9 relative tolerance.
    fn fft_and_direct_autocovariances_agree_within_tolerance() {
        // Arrange
        let data: Vec<f64> = (0..64)
            .map(|t| (t as f64 * 0.37).sin() + 0.01 * t as f64)
            .collect();
        let series = SeriesBuffer::from_values(data).unwrap();
        let max_lag = series.len() - 1;

        for &unbiased in &[false, true] {
            // Act
            let direct = autocovariances(&series, max_lag, unbiased, false);
            let fft = autocovariances(&series, max_lag, unbiased, true);

            // Assert
            for (k, (&d, &f)) in direct.iter().zip(&fft).enumerate() {
                assert_relative_eq!(d, f, max_relative = 1e-9, epsilon = 1e-12);
                assert!(d.is_finite(), "direct γ̂ at lag {k} should be finite");
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that the FFT-backed public entry point and the direct one
    // return the same coefficients.
    //
    // Given
    // -----
    // - The five-point series with lags [0, 1, 2].
    //
    // Expect
    // ------
    // - Coefficients agree within 1e-12 and the lag-0 value is exactly 1.
    fn estimate_autocorrelation_fft_path_matches_direct_path() {
        // Arrange
        let series = five_point_series();
        let lags = LagSet::new(vec![0, 1, 2]).unwrap();

        // Act
        let direct =
            estimate_autocorrelation(&series, Some(&lags), &AcfOptions::new(false, false, None))
                .unwrap();
        let fft =
            estimate_autocorrelation(&series, Some(&lags), &AcfOptions::new(false, true, None))
                .unwrap();

        // Assert
        assert_eq!(fft.coefficient(0), Some(1.0));
        for (&d, &f) in direct.coefficients().iter().zip(fft.coefficients()) {
            assert_relative_eq!(d, f, epsilon = 1e-12);
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure that a lag beyond the series length is rejected with
    // `InvalidLag`.
    //
    // Given
    // -----
    // - A 5-element series and lags [10].
    //
    // Expect
    // ------
    // - `estimate_autocorrelation` returns
    //   `Err(CorrError::InvalidLag { lag: 10, n: 5 })`.
    fn estimate_autocorrelation_out_of_range_lag_returns_invalid_lag() {
        // Arrange
        let series = five_point_series();
        let lags = LagSet::new(vec![10]).unwrap();

        // Act
        let result = estimate_autocorrelation(&series, Some(&lags), &AcfOptions::default());

        // Assert
        assert_eq!(result, Err(CorrError::InvalidLag { lag: 10, n: 5 }));
    }

    #[test]
    // Purpose
    // -------
    // Ensure that a constant series is rejected with `ZeroVariance`
    // instead of dividing by a zero lag-0 autocovariance.
    //
    // Given
    // -----
    // - The constant series [2, 2, 2, 2].
    //
    // Expect
    // ------
    // - `estimate_autocorrelation` returns `Err(CorrError::ZeroVariance)`.
    fn estimate_autocorrelation_constant_series_returns_zero_variance() {
        // Arrange
        let series = SeriesBuffer::from_values(vec![2.0, 2.0, 2.0, 2.0]).unwrap();

        // Act
        let result = estimate_autocorrelation(&series, None, &AcfOptions::default());

        // Assert
        assert_eq!(result, Err(CorrError::ZeroVariance));
    }

    #[test]
    // Purpose
    // -------
    // Verify that omitting the lag set selects 0..=min(n−1, 40).
    //
    // Given
    // -----
    // - The five-point series with `lags = None`.
    //
    // Expect
    // ------
    // - The result covers lags 0..=4 with coefficient(0) == 1.0.
    fn estimate_autocorrelation_default_lags_cover_series() {
        // Arrange
        let series = five_point_series();

        // Act
        let result =
            estimate_autocorrelation(&series, None, &AcfOptions::default()).unwrap();

        // Assert
        assert_eq!(result.lags(), &[0, 1, 2, 3, 4]);
        assert_eq!(result.coefficient(0), Some(1.0));
    }

    #[test]
    // Purpose
    // -------
    // Verify that requesting a band attaches bracketing bounds and that
    // lag 0 is exact with zero width.
    //
    // Given
    // -----
    // - A length-32 oscillating series, default lags, alpha = 0.05.
    //
    // Expect
    // ------
    // - Bounds exist for every lag, satisfy low ≤ r ≤ high, and the
    //   lag-0 band is (1.0, 1.0).
    fn estimate_autocorrelation_alpha_attaches_bracketing_band() {
        // Arrange
        let data: Vec<f64> = (0..32).map(|t| (t as f64 * 0.9).cos()).collect();
        let series = SeriesBuffer::from_values(data).unwrap();
        let options = AcfOptions::new(false, true, Some(0.05));

        // Act
        let result = estimate_autocorrelation(&series, None, &options).unwrap();

        // Assert
        let bounds = result.confidence().expect("band should be attached");
        assert_eq!(bounds.len(), result.len());
        assert_eq!(result.confidence_at(0), Some((1.0, 1.0)));
        for (&r, &(low, high)) in result.coefficients().iter().zip(bounds) {
            assert!(low <= r && r <= high, "bounds ({low}, {high}) should bracket {r}");
            assert!(high - low >= 0.0);
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure that an invalid alpha is rejected eagerly.
    //
    // Given
    // -----
    // - alpha = 1.5.
    //
    // Expect
    // ------
    // - `estimate_autocorrelation` returns `Err(CorrError::InvalidAlpha(1.5))`.
    fn estimate_autocorrelation_invalid_alpha_is_rejected() {
        // Arrange
        let series = five_point_series();
        let options = AcfOptions::new(false, true, Some(1.5));

        // Act
        let result = estimate_autocorrelation(&series, None, &options);

        // Assert
        assert_eq!(result, Err(CorrError::InvalidAlpha(1.5)));
    }
}
