//! Numerical stability constants and the shared symmetric solver.
//!
//! Every linear system in this crate (Yule-Walker normal equations, OLS
//! normal equations) is symmetric. Rather than inverting matrices, all of
//! them are solved through a symmetric eigendecomposition with eigenvalue
//! truncation, which degrades gracefully when a system is close to
//! singular: directions with negligible eigenvalues are dropped and the
//! caller is told how well-conditioned the system was.
//!
//! # Provided items
//! - [`RCOND_TOL`]: reciprocal-condition threshold (default 1e-12) at or
//!   below which a solve is reported as ill-conditioned. Estimators
//!   translate this into a `CorrWarning::IllConditioned` on the result
//!   while still returning the truncated best-effort solution.
//! - [`EIGEN_EPS`]: relative eigenvalue cutoff (default 1e-12). During a
//!   solve, eigenvalues with magnitude at most `EIGEN_EPS * lambda_max`
//!   are treated as zero and excluded from the pseudoinverse.
//! - [`solve_symmetric`]: truncated-eigendecomposition solve returning the
//!   solution together with the observed reciprocal condition number.

use nalgebra::{DMatrix, DVector};

/// Reciprocal-condition threshold for reporting an ill-conditioned solve.
///
/// The reciprocal condition number of a symmetric system is
/// `|lambda_min| / |lambda_max|`. At or below this threshold the solution
/// is still returned (with tiny eigendirections truncated), but the
/// estimator records a non-fatal warning so callers are never handed a
/// silently meaningless coefficient.
pub const RCOND_TOL: f64 = 1e-12;

/// Relative eigenvalue cutoff for pseudoinverse truncation.
///
/// Eigenvalues with magnitude at most `EIGEN_EPS * |lambda_max|` are
/// treated as numerically zero and skipped when assembling the solution.
pub const EIGEN_EPS: f64 = 1e-12;

/// Outcome of a truncated symmetric solve.
///
/// Holds the best-effort solution vector and the reciprocal condition
/// number observed in the eigendecomposition, so callers can decide
/// whether to attach an ill-conditioning warning.
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetricSolve {
    /// Solution of the (possibly truncated) system.
    pub solution: DVector<f64>,
    /// `|lambda_min| / |lambda_max|`, or 0.0 for an all-zero matrix.
    pub rcond: f64,
}

/// Solve a symmetric system `A x = b` via eigendecomposition.
///
/// # Arguments
/// - `matrix`: symmetric `n x n` coefficient matrix. Consumed by the
///   eigendecomposition.
/// - `rhs`: right-hand side of length `n`.
///
/// # Returns
/// A [`SymmetricSolve`] whose `solution` is
/// `sum_{k: |lambda_k| > EIGEN_EPS * |lambda_max|} (q_k . b / lambda_k) q_k`,
/// i.e. the pseudoinverse applied to `b` with tiny eigendirections
/// truncated, and whose `rcond` is the reciprocal condition number of the
/// full spectrum.
///
/// No explicit inverse is ever formed. For a well-conditioned system the
/// truncation is inactive and the result equals the exact solution up to
/// floating-point roundoff.
pub fn solve_symmetric(matrix: DMatrix<f64>, rhs: &DVector<f64>) -> SymmetricSolve {
    let n = rhs.len();
    let eigen_decomp = matrix.symmetric_eigen();
    let q = eigen_decomp.eigenvectors;
    let eigenvals = eigen_decomp.eigenvalues;

    let lambda_max = eigenvals.iter().fold(0.0_f64, |acc, &l| acc.max(l.abs()));
    let lambda_min = eigenvals.iter().fold(f64::INFINITY, |acc, &l| acc.min(l.abs()));
    let rcond = if lambda_max > 0.0 { lambda_min / lambda_max } else { 0.0 };

    let cutoff = EIGEN_EPS * lambda_max;
    let mut solution = DVector::<f64>::zeros(n);
    for (k, &lambda) in eigenvals.iter().enumerate() {
        if lambda.abs() <= cutoff {
            continue;
        }
        let mut projection = 0.0;
        for j in 0..n {
            projection += q[(j, k)] * rhs[j];
        }
        let coeff = projection / lambda;
        for j in 0..n {
            solution[j] += coeff * q[(j, k)];
        }
    }

    SymmetricSolve { solution, rcond }
}
