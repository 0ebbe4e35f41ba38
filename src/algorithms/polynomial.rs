//! Polynomial least-squares fitting with coefficient covariance.
//!
//! ## Purpose
//!
//! This module fits a polynomial of a given order by ordinary least
//! squares and retains everything needed for pointwise confidence
//! intervals on the mean response: the coefficient vector, the inverse
//! normal matrix, and the residual variance.
//!
//! ## Design notes
//!
//! * **Numerics**: All algebra runs in `f64` through nalgebra; callers
//!   convert at the boundary. The normal equations are solved by
//!   Cholesky, which doubles as the singularity check.
//! * **Standard errors**: `se(x0)^2 = sigma^2 * v' (X'X)^-1 v` with `v`
//!   the monomial vector at `x0` and `sigma^2 = RSS / (n - p)`.
//!
//! ## Invariants
//!
//! * `df = n - (order + 1) >= 1` (enforced by the caller's validation).
//! * A returned model has finite coefficients and non-negative variance.
//!
//! ## Non-goals
//!
//! * This module does not choose the evaluation grid or the confidence
//!   level; it only exposes the fitted model.

// External dependencies
use nalgebra::{Cholesky, DMatrix, DVector, Dyn};

// Internal dependencies
use crate::primitives::errors::StatError;

// ============================================================================
// Model
// ============================================================================

/// Fitted polynomial with the pieces needed for interval construction.
#[derive(Debug, Clone)]
pub struct PolyModel {
    coeffs: DVector<f64>,
    xtx_inv: DMatrix<f64>,
    sigma2: f64,
    df: f64,
}

impl PolyModel {
    /// Residual degrees of freedom `n - (order + 1)`.
    pub fn df(&self) -> f64 {
        self.df
    }

    /// Fitted mean response at `x0`.
    pub fn predict(&self, x0: f64) -> f64 {
        let mut acc = 0.0;
        let mut pow = 1.0;
        for &c in self.coeffs.iter() {
            acc += c * pow;
            pow *= x0;
        }
        acc
    }

    /// Standard error of the mean response at `x0`.
    pub fn standard_error(&self, x0: f64) -> f64 {
        let p = self.coeffs.len();
        let v = DVector::from_fn(p, |i, _| x0.powi(i as i32));
        let quad = (v.transpose() * &self.xtx_inv * &v)[(0, 0)];
        // Rounding can push the quadratic form a hair below zero.
        (self.sigma2 * quad.max(0.0)).sqrt()
    }
}

// ============================================================================
// Fitting
// ============================================================================

/// Fit a polynomial of `order` by ordinary least squares.
///
/// Fails with [`StatError::DegenerateDesign`] when the normal matrix is
/// not positive definite (collinear design, e.g. a single distinct x)
/// or the solution is not finite.
pub fn fit_polynomial(x: &[f64], y: &[f64], order: usize) -> Result<PolyModel, StatError> {
    let n = x.len();
    let p = order + 1;
    debug_assert!(n > p, "fit_polynomial: need more points than coefficients");

    let design = DMatrix::from_fn(n, p, |i, j| x[i].powi(j as i32));
    let response = DVector::from_column_slice(y);

    let xtx = design.transpose() * &design;
    let xty = design.transpose() * &response;

    let chol: Cholesky<f64, Dyn> = Cholesky::new(xtx).ok_or_else(|| {
        StatError::DegenerateDesign(format!(
            "normal matrix for order {order} is not positive definite"
        ))
    })?;

    let coeffs = chol.solve(&xty);
    let xtx_inv = chol.inverse();

    if coeffs.iter().any(|c| !c.is_finite()) {
        return Err(StatError::DegenerateDesign(format!(
            "non-finite coefficients for order {order}"
        )));
    }

    let residuals = &response - &design * &coeffs;
    let rss = residuals.dot(&residuals);
    let df = (n - p) as f64;
    let sigma2 = rss / df;

    if !sigma2.is_finite() {
        return Err(StatError::DegenerateDesign(format!(
            "non-finite residual variance for order {order}"
        )));
    }

    Ok(PolyModel {
        coeffs,
        xtx_inv,
        sigma2,
        df,
    })
}
