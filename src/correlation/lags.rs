//! Lag sets for correlation estimation.
//!
//! A [`LagSet`] is an ordered, strictly increasing sequence of
//! non-negative lags. Ordering is enforced at construction; the upper
//! bound `lag < n` depends on the series and is checked by the estimators
//! via `validation::validate_lags`.
//!
//! The default lag set for a series of length `n` is `0..=min(n - 1, 40)`,
//! the conventional correlogram default of mainstream statistical
//! libraries.

use crate::correlation::errors::{CorrError, CorrResult};

/// Default cap on the number of lags when the caller does not specify any.
const DEFAULT_MAX_LAG: usize = 40;

/// Strictly increasing sequence of non-negative lags.
///
/// # Examples
/// ```rust
/// use rust_correlogram::correlation::lags::LagSet;
///
/// let lags = LagSet::new(vec![0, 1, 5]).unwrap();
/// assert_eq!(lags.max_lag(), Some(5));
/// assert!(LagSet::new(vec![2, 1]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LagSet {
    lags: Vec<usize>,
}

impl LagSet {
    /// Build a lag set from explicit lags, validating strict ordering.
    ///
    /// # Arguments
    /// - `lags`: candidate lags; may be empty, in which case estimators
    ///   produce an empty result.
    ///
    /// # Errors
    /// - `CorrError::NonIncreasingLags` when two consecutive entries are
    ///   not strictly increasing.
    pub fn new(lags: Vec<usize>) -> CorrResult<Self> {
        for window in lags.windows(2) {
            if window[1] <= window[0] {
                return Err(CorrError::NonIncreasingLags { prev: window[0], next: window[1] });
            }
        }
        Ok(LagSet { lags })
    }

    /// Contiguous lag set `0..=max_lag`.
    pub fn up_to(max_lag: usize) -> Self {
        LagSet { lags: (0..=max_lag).collect() }
    }

    /// Default lag set for a series of length `n`: `0..=min(n - 1, 40)`.
    ///
    /// Callers guarantee `n >= 1` (a [`super::series::SeriesBuffer`] is
    /// never empty).
    pub fn default_for_len(n: usize) -> Self {
        LagSet::up_to((n - 1).min(DEFAULT_MAX_LAG))
    }

    /// Largest lag, or `None` for an empty set.
    pub fn max_lag(&self) -> Option<usize> {
        self.lags.last().copied()
    }

    /// Borrowed view of the lags.
    pub fn as_slice(&self) -> &[usize] {
        &self.lags
    }

    /// Iterator over the lags.
    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.lags.iter()
    }

    /// Number of lags in the set.
    pub fn len(&self) -> usize {
        self.lags.len()
    }

    /// Whether the set contains no lags.
    pub fn is_empty(&self) -> bool {
        self.lags.is_empty()
    }
}
