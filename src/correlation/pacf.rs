//! correlation::pacf — partial autocorrelation estimation.
//!
//! Purpose
//! -------
//! Estimate partial autocorrelation coefficients φₖₖ, the correlation
//! between xₜ and xₜ₋ₖ after removing the influence of the intervening
//! lags. Three algorithm families are provided, selected through
//! [`PacfMethod`]:
//!
//! - **Yule-Walker**: for each order k, solve the Toeplitz normal
//!   equations built from autocovariances at lags 0..k and take the last
//!   coefficient of the order-k solution. The MLE variant drives the
//!   system with biased (divide-by-n) autocovariances; the unbiased
//!   variant divides by n−k.
//! - **OLS**: regress xₜ on an intercept and xₜ₋₁,…,xₜ₋ₖ; φₖₖ is the
//!   coefficient on the k-th lag term.
//! - **Levinson-Durbin**: the reflection-coefficient recursion over the
//!   same autocovariances, with the same bias choice; φₖₖ is the order-k
//!   reflection coefficient.
//!
//! Key behaviors
//! -------------
//! - φ₀₀ is 1.0 by convention whenever lag 0 is requested.
//! - All symmetric solves go through `stability::solve_symmetric`
//!   (truncated eigendecomposition, never naive inversion). A reciprocal
//!   condition number at or below `stability::RCOND_TOL` produces a
//!   non-fatal `CorrWarning::IllConditioned` on the result while the
//!   best-effort coefficient is still returned.
//! - Method strings from the wrapper-style aliases ('yw', 'ywm', 'ols',
//!   'ld', 'ldb', and their long forms) are validated eagerly via
//!   [`PacfMethod::from_str`]; unknown names fail fast with
//!   `CorrError::UnknownMethod` instead of being deferred downstream.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are validated [`SeriesBuffer`] values; every requested lag
//!   satisfies lag < n.
//! - OLS additionally requires n − k ≥ k + 1 rows for the order-k
//!   regression (k + 1 unknowns including the intercept), i.e.
//!   n ≥ 2·max_lag + 1; violations produce `InsufficientData`.
//! - A constant series is rejected with `ZeroVariance` before any
//!   method-specific work.
//!
//! Testing notes
//! -------------
//! - Unit tests pin hand-solved Yule-Walker coefficients on
//!   [1, 2, 3, 4, 5], assert Levinson-Durbin / Yule-Walker agreement
//!   under a shared bias convention, exercise the OLS sufficiency and
//!   collinearity paths, and cover the method-string aliases.

use std::str::FromStr;

use nalgebra::{DMatrix, DVector};

use crate::correlation::acovf::autocovariances;
use crate::correlation::errors::{CorrError, CorrResult, CorrWarning};
use crate::correlation::lags::LagSet;
use crate::correlation::result::CorrelationResult;
use crate::correlation::series::SeriesBuffer;
use crate::correlation::stability::{solve_symmetric, RCOND_TOL};
use crate::correlation::validation::validate_lags;
use crate::inference::bartlett::pacf_confidence_interval;

/// Partial autocorrelation algorithm families.
///
/// - `YuleWalkerUnbiased`: Toeplitz solve on n−k-denominator
///   autocovariances (the correlogram default).
/// - `YuleWalkerMle`: Toeplitz solve on divide-by-n autocovariances.
/// - `Ols`: lagged regression with intercept.
/// - `LevinsonDurbinUnbiased` / `LevinsonDurbinBiased`: reflection
///   recursion under the respective bias convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacfMethod {
    YuleWalkerUnbiased,
    YuleWalkerMle,
    Ols,
    LevinsonDurbinUnbiased,
    LevinsonDurbinBiased,
}

impl PacfMethod {
    /// Short name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            PacfMethod::YuleWalkerUnbiased => "yw",
            PacfMethod::YuleWalkerMle => "ywm",
            PacfMethod::Ols => "ols",
            PacfMethod::LevinsonDurbinUnbiased => "ld",
            PacfMethod::LevinsonDurbinBiased => "ldb",
        }
    }
}

impl FromStr for PacfMethod {
    type Err = CorrError;

    /// Parse a method alias, case-insensitively.
    ///
    /// Accepted aliases follow the conventional correlogram spellings:
    /// 'yw'/'ywunbiased', 'ywm'/'ywmle', 'ols', 'ld'/'ldunbiased',
    /// 'ldb'/'ldbiased'. Anything else fails eagerly with
    /// `CorrError::UnknownMethod`.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_lowercase().as_str() {
            "yw" | "ywunbiased" | "yw_unbiased" => Ok(PacfMethod::YuleWalkerUnbiased),
            "ywm" | "ywmle" | "yw_mle" => Ok(PacfMethod::YuleWalkerMle),
            "ols" => Ok(PacfMethod::Ols),
            "ld" | "ldunbiased" | "ld_unbiased" => Ok(PacfMethod::LevinsonDurbinUnbiased),
            "ldb" | "ldbiased" | "ld_biased" => Ok(PacfMethod::LevinsonDurbinBiased),
            other => Err(CorrError::UnknownMethod(other.to_string())),
        }
    }
}

/// PacfOptions — configuration for partial autocorrelation estimation.
///
/// Fields
/// ------
/// - `method`: [`PacfMethod`]
///   Algorithm family; defaults to Yule-Walker with unbiased
///   autocovariances.
/// - `alpha`: `Option<f64>`
///   When `Some(a)` with a ∈ (0, 1), the conventional ±z·n^{-1/2}
///   large-sample band at level 1−a is attached to the result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PacfOptions {
    /// Algorithm family used for the estimate.
    pub method: PacfMethod,
    /// Optional significance level for a large-sample confidence band.
    pub alpha: Option<f64>,
}

impl PacfOptions {
    /// Construct a `PacfOptions` value from explicit settings.
    pub fn new(method: PacfMethod, alpha: Option<f64>) -> PacfOptions {
        PacfOptions { method, alpha }
    }
}

impl Default for PacfOptions {
    fn default() -> Self {
        Self { method: PacfMethod::YuleWalkerUnbiased, alpha: None }
    }
}

/// Estimate partial autocorrelation coefficients at the requested lags.
///
/// Parameters
/// ----------
/// - `series`: `&SeriesBuffer`
///   Validated input samples.
/// - `lags`: `Option<&LagSet>`
///   Lags to report. `None` selects `0..=min(n−1, 40)`.
/// - `options`: `&PacfOptions`
///   Algorithm family and optional confidence level.
///
/// Returns
/// -------
/// `CorrResult<CorrelationResult>`
///   One coefficient per requested lag (lag 0 fixed at 1.0), any
///   ill-conditioning warnings from the underlying solves, and a
///   confidence band when `options.alpha` is set.
///
/// Errors
/// ------
/// - `CorrError::InvalidLag`
///   A requested lag is ≥ n.
/// - `CorrError::InsufficientData`
///   The OLS regression at the maximum lag would have fewer rows than
///   unknowns (n < 2·max_lag + 1).
/// - `CorrError::ZeroVariance`
///   The series is constant.
/// - `CorrError::InvalidAlpha`
///   `options.alpha` lies outside (0, 1).
///
/// Panics
/// ------
/// - Never panics under the documented invariants.
///
/// Notes
/// -----
/// - Coefficients are computed for every order 1..=max_lag regardless of
///   gaps in the requested lag set, since each order's solution feeds
///   the interpretation of the next; the requested lags are then
///   selected from the full sequence.
///
/// Examples
/// --------
/// ```rust
/// use rust_correlogram::correlation::pacf::{
///     estimate_partial_autocorrelation, PacfMethod, PacfOptions,
/// };
/// use rust_correlogram::correlation::lags::LagSet;
/// use rust_correlogram::correlation::series::SeriesBuffer;
///
/// let series = SeriesBuffer::from_values(vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// let lags = LagSet::new(vec![0, 1]).unwrap();
/// let options = PacfOptions::new(PacfMethod::YuleWalkerMle, None);
///
/// let result = estimate_partial_autocorrelation(&series, Some(&lags), &options).unwrap();
/// assert_eq!(result.coefficient(0), Some(1.0));
/// assert!((result.coefficient(1).unwrap() - 0.4).abs() < 1e-12);
/// ```
pub fn estimate_partial_autocorrelation(
    series: &SeriesBuffer, lags: Option<&LagSet>, options: &PacfOptions,
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

    // A constant series defeats every method: the Toeplitz systems are
    // all-zero and the regression is perfectly collinear.
    let mean = series.mean();
    let centered_sumsq: f64 =
        series.values().iter().map(|&x| (x - mean) * (x - mean)).sum();
    if centered_sumsq == 0.0 {
        return Err(CorrError::ZeroVariance);
    }

    if options.method == PacfMethod::Ols && n < 2 * max_lag + 1 {
        return Err(CorrError::InsufficientData { method: options.method.name(), max_lag, n });
    }

    let (pacf_full, warnings) = match options.method {
        PacfMethod::YuleWalkerUnbiased => yule_walker_pacf(series, max_lag, true),
        PacfMethod::YuleWalkerMle => yule_walker_pacf(series, max_lag, false),
        PacfMethod::Ols => ols_pacf(series, max_lag),
        PacfMethod::LevinsonDurbinUnbiased => levinson_durbin_pacf(series, max_lag, true),
        PacfMethod::LevinsonDurbinBiased => levinson_durbin_pacf(series, max_lag, false),
    };

    let coefficients: Vec<f64> = lags.iter().map(|&k| pacf_full[k]).collect();
    let mut result = CorrelationResult::new(lags.as_slice().to_vec(), coefficients)
        .with_warnings(warnings);

    if let Some(alpha) = options.alpha {
        let pairs: Vec<(usize, f64)> =
            pacf_full.iter().enumerate().map(|(k, &phi)| (k, phi)).collect();
        let bounds_full = pacf_confidence_interval(n, &pairs, alpha)?;
        let bounds: Vec<(f64, f64)> = lags.iter().map(|&k| bounds_full[k].1).collect();
        result = result.with_confidence(bounds);
    }

    Ok(result)
}

/// Yule-Walker partial autocorrelations for orders `0..=max_lag`.
///
/// For each order k, builds the k×k Toeplitz matrix R with
/// R[i][j] = γ̂_{|i−j|} and right-hand side (γ̂₁,…,γ̂ₖ), solves via the
/// truncated symmetric eigendecomposition, and keeps the last
/// coefficient φₖₖ. Ill-conditioned orders are recorded as warnings.
fn yule_walker_pacf(
    series: &SeriesBuffer, max_lag: usize, unbiased: bool,
) -> (Vec<f64>, Vec<CorrWarning>) {
    let acov = autocovariances(series, max_lag, unbiased, false);

    let mut pacf = Vec::with_capacity(max_lag + 1);
    pacf.push(1.0);
    let mut warnings = Vec::new();

    for k in 1..=max_lag {
        let toeplitz =
            DMatrix::from_fn(k, k, |i, j| acov[(i as isize - j as isize).unsigned_abs()]);
        let rhs = DVector::from_fn(k, |i, _| acov[i + 1]);

        let solve = solve_symmetric(toeplitz, &rhs);
        if solve.rcond <= RCOND_TOL {
            warnings.push(CorrWarning::IllConditioned { lag: k, rcond: solve.rcond });
        }
        pacf.push(solve.solution[k - 1]);
    }

    (pacf, warnings)
}

/// OLS partial autocorrelations for orders `0..=max_lag`.
///
/// For each order k, regresses xₜ on an intercept and the k previous
/// samples over t = k,…,n−1 by solving the normal equations
/// ZᵀZ β = Zᵀy with the truncated symmetric eigendecomposition; φₖₖ is
/// the coefficient on the k-th lag. Callers guarantee n ≥ 2·max_lag + 1.
fn ols_pacf(series: &SeriesBuffer, max_lag: usize) -> (Vec<f64>, Vec<CorrWarning>) {
    let x = series.values();
    let n = series.len();

    let mut pacf = Vec::with_capacity(max_lag + 1);
    pacf.push(1.0);
    let mut warnings = Vec::new();

    for k in 1..=max_lag {
        let rows = n - k;
        // Design row i covers t = k + i: an intercept column followed by
        // x[t-1], ..., x[t-k].
        let design = DMatrix::from_fn(rows, k + 1, |i, j| {
            if j == 0 {
                1.0
            } else {
                x[k + i - j]
            }
        });
        let response = DVector::from_fn(rows, |i, _| x[k + i]);

        let normal_matrix = design.transpose() * &design;
        let normal_rhs = design.transpose() * &response;

        let solve = solve_symmetric(normal_matrix, &normal_rhs);
        if solve.rcond <= RCOND_TOL {
            warnings.push(CorrWarning::IllConditioned { lag: k, rcond: solve.rcond });
        }
        pacf.push(solve.solution[k]);
    }

    (pacf, warnings)
}

/// Levinson-Durbin partial autocorrelations for orders `0..=max_lag`.
///
/// Runs the reflection-coefficient recursion on the autocovariances:
/// at order k the reflection coefficient κₖ equals φₖₖ, and the
/// prediction-error variance shrinks by (1 − κₖ²). When the relative
/// prediction error falls to `RCOND_TOL` or below, the remaining orders
/// are indeterminate; the recursion records a warning, reports 0.0 for
/// that order, and leaves the error unchanged.
fn levinson_durbin_pacf(
    series: &SeriesBuffer, max_lag: usize, unbiased: bool,
) -> (Vec<f64>, Vec<CorrWarning>) {
    let acov = autocovariances(series, max_lag, unbiased, false);

    let mut pacf = Vec::with_capacity(max_lag + 1);
    pacf.push(1.0);
    let mut warnings = Vec::new();
    if max_lag == 0 {
        return (pacf, warnings);
    }

    let mut phi = vec![0.0_f64; max_lag + 1];
    let mut prev = vec![0.0_f64; max_lag + 1];
    let mut error = acov[0];

    for k in 1..=max_lag {
        let ratio = error / acov[0];
        if !(ratio > RCOND_TOL) {
            warnings.push(CorrWarning::IllConditioned { lag: k, rcond: ratio.max(0.0) });
            pacf.push(0.0);
            continue;
        }

        let mut numerator = acov[k];
        for j in 1..k {
            numerator -= prev[j] * acov[k - j];
        }

        let kappa = numerator / error;
        phi[k] = kappa;
        for j in 1..k {
            phi[j] = prev[j] - kappa * prev[k - j];
        }
        error *= 1.0 - kappa * kappa;
        prev[..=k].copy_from_slice(&phi[..=k]);

        pacf.push(kappa);
    }

    (pacf, warnings)
}
