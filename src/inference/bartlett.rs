//! inference::bartlett — large-sample confidence bands for correlograms.
//!
//! Purpose
//! -------
//! Turn estimated correlation coefficients into symmetric large-sample
//! confidence bands. Two variance conventions are provided:
//!
//! - **Bartlett's formula** for autocorrelations: under the null that the
//!   process is white beyond lag k−1, the sampling variance of r̂ₖ is
//!   approximately (1 + 2·∑_{j<k} r̂ⱼ²)/n, so the band widens as earlier
//!   coefficients accumulate.
//! - **Constant variance** for partial autocorrelations: the conventional
//!   large-sample band uses var(φ̂ₖₖ) ≈ 1/n at every lag, giving the
//!   familiar flat ±z·n^{-1/2} corridor.
//!
//! Key behaviors
//! -------------
//! - Bounds are symmetric around each coefficient:
//!   r̂ₖ ± z_{1−α/2} · √var, with the quantile taken from the standard
//!   normal distribution.
//! - Lag 0 is exact by construction (the coefficient is 1 with zero
//!   sampling error), so its band has zero width.
//! - Coefficients are supplied as (lag, value) pairs in increasing lag
//!   order; the Bartlett accumulation runs over the supplied
//!   coefficients at smaller lags.
//!
//! Invariants & assumptions
//! ------------------------
//! - `n ≥ 1` and `alpha ∈ (0, 1)`; both are validated on entry.
//! - Returned bounds always satisfy low ≤ coefficient ≤ high with
//!   non-negative width.
//!
//! Downstream usage
//! ----------------
//! - `correlation::acovf` attaches Bartlett bands when
//!   `AcfOptions::alpha` is set; `correlation::pacf` attaches the
//!   constant-variance band. Both fold [`CIError`] into the estimation
//!   error type.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the variance recursion against hand-accumulated
//!   values, check the bracketing and zero-width-at-lag-0 invariants,
//!   and exercise both error branches.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::inference::errors::{CIError, CIResult};

/// Compute Bartlett-formula confidence bounds for autocorrelations.
///
/// Parameters
/// ----------
/// - `n`: `usize`
///   Sample size of the underlying series. Must be positive.
/// - `coefficients`: `&[(usize, f64)]`
///   (lag, coefficient) pairs in increasing lag order. Lag 0, when
///   present, receives an exact zero-width band.
/// - `alpha`: `f64`
///   Significance level in (0, 1); the band covers level 1−alpha.
///
/// Returns
/// -------
/// `CIResult<Vec<(usize, (f64, f64))>>`
///   One (lag, (low, high)) entry per input pair, in the same order,
///   with low = r̂ₖ − z·√var and high = r̂ₖ + z·√var where
///   var = (1 + 2·∑_{j<k, j≥1} r̂ⱼ²)/n.
///
/// Errors
/// ------
/// - `CIError::InvalidAlpha`
///   `alpha` lies outside the open interval (0, 1).
/// - `CIError::InvalidSeriesLength`
///   `n == 0`.
///
/// Panics
/// ------
/// - Never panics; the standard normal constructor cannot fail for unit
///   parameters.
///
/// Examples
/// --------
/// ```rust
/// use rust_correlogram::inference::bartlett::compute_confidence_interval;
///
/// let coefficients = [(0_usize, 1.0), (1, 0.5)];
/// let bounds = compute_confidence_interval(100, &coefficients, 0.05).unwrap();
///
/// // Lag 0 is exact; lag 1 uses var = 1/n.
/// assert_eq!(bounds[0], (0, (1.0, 1.0)));
/// let (low, high) = bounds[1].1;
/// assert!(low < 0.5 && 0.5 < high);
/// assert!((high - 0.5 - 1.959964 / 10.0).abs() < 1e-4);
/// ```
pub fn compute_confidence_interval(
    n: usize, coefficients: &[(usize, f64)], alpha: f64,
) -> CIResult<Vec<(usize, (f64, f64))>> {
    let z = normal_quantile(n, alpha)?;
    let n = n as f64;

    let mut cumulative = 0.0;
    let mut bounds = Vec::with_capacity(coefficients.len());
    for &(lag, coeff) in coefficients {
        if lag == 0 {
            bounds.push((lag, (coeff, coeff)));
            continue;
        }
        let variance = (1.0 + 2.0 * cumulative) / n;
        let half_width = z * variance.sqrt();
        bounds.push((lag, (coeff - half_width, coeff + half_width)));
        cumulative += coeff * coeff;
    }

    Ok(bounds)
}

/// Compute constant-variance confidence bounds for partial
/// autocorrelations.
///
/// Parameters
/// ----------
/// - `n`: `usize`
///   Sample size of the underlying series. Must be positive.
/// - `coefficients`: `&[(usize, f64)]`
///   (lag, coefficient) pairs; ordering is irrelevant here since the
///   variance does not accumulate.
/// - `alpha`: `f64`
///   Significance level in (0, 1).
///
/// Returns
/// -------
/// `CIResult<Vec<(usize, (f64, f64))>>`
///   One entry per input pair with the flat half-width z_{1−α/2}·n^{-1/2}
///   for every lag > 0 and an exact zero-width band at lag 0.
///
/// Errors
/// ------
/// - Same as [`compute_confidence_interval`].
pub fn pacf_confidence_interval(
    n: usize, coefficients: &[(usize, f64)], alpha: f64,
) -> CIResult<Vec<(usize, (f64, f64))>> {
    let z = normal_quantile(n, alpha)?;
    let half_width = z / (n as f64).sqrt();

    let bounds = coefficients
        .iter()
        .map(|&(lag, coeff)| {
            if lag == 0 {
                (lag, (coeff, coeff))
            } else {
                (lag, (coeff - half_width, coeff + half_width))
            }
        })
        .collect();

    Ok(bounds)
}

/// Validate inputs and return the two-sided standard normal quantile
/// z_{1−α/2}.
fn normal_quantile(n: usize, alpha: f64) -> CIResult<f64> {
    if n == 0 {
        return Err(CIError::InvalidSeriesLength(n));
    }
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(CIError::InvalidAlpha(alpha));
    }

    let standard_normal =
        Normal::new(0.0, 1.0).expect("unit normal parameters are valid");
    Ok(standard_normal.inverse_cdf(1.0 - alpha / 2.0))
}
