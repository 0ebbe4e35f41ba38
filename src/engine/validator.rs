//! Input and parameter validation.
//!
//! ## Purpose
//!
//! This module provides the fail-fast validation used by every transform:
//! parameter bounds at one end, data-dependent feasibility at the other.
//! Feasibility can only be judged against the data a transform actually
//! receives, so transforms validate per invocation rather than at
//! configuration time.
//!
//! ## Design notes
//!
//! * **Fail-fast**: Validation stops at the first violation.
//! * **Ordering**: Checks run cheap-to-expensive.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not correct invalid inputs.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::StatError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for transform parameters and per-group data.
///
/// All methods return `Result<(), StatError>` and fail fast on the first
/// violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Data Validation
    // ========================================================================

    /// Validate paired sample columns: non-empty and equal length.
    pub fn validate_samples<T: Float>(x: &[T], y: &[T]) -> Result<(), StatError> {
        if x.len() != y.len() {
            return Err(StatError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if x.is_empty() {
            return Err(StatError::EmptyInput);
        }
        Ok(())
    }

    /// Validate that the data supports local regression at all.
    pub fn validate_distinct_x(distinct_x: usize) -> Result<(), StatError> {
        if distinct_x < 2 {
            return Err(StatError::TooFewDistinctX { got: distinct_x });
        }
        Ok(())
    }

    /// Validate that the fraction selects enough distinct x-values.
    ///
    /// A local linear fit needs two support points, so the smallest
    /// feasible fraction is `2 / distinct_x`.
    pub fn validate_span_feasibility(distinct_x: usize, frac: f64) -> Result<(), StatError> {
        let min_frac = 2.0 / distinct_x as f64;
        if frac < min_frac {
            return Err(StatError::InfeasibleFraction {
                distinct_x,
                frac,
                min_frac,
            });
        }
        Ok(())
    }

    /// Validate the point count against the polynomial order.
    ///
    /// Requires at least one residual degree of freedom beyond the
    /// `order + 1` coefficients.
    pub fn validate_points_for_order(n: usize, order: usize) -> Result<(), StatError> {
        if n < order + 2 {
            return Err(StatError::TooFewPointsForOrder { got: n, order });
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the smoothing fraction (bandwidth) parameter.
    pub fn validate_fraction(frac: f64) -> Result<(), StatError> {
        if !frac.is_finite() || frac <= 0.0 || frac > 1.0 {
            return Err(StatError::InvalidFraction(frac));
        }
        Ok(())
    }

    /// Validate the confidence complement.
    pub fn validate_alpha(alpha: f64) -> Result<(), StatError> {
        if !alpha.is_finite() || alpha <= 0.0 || alpha >= 1.0 {
            return Err(StatError::InvalidAlpha(alpha));
        }
        Ok(())
    }

    /// Validate the evaluation grid size.
    pub fn validate_gridsize(gridsize: usize) -> Result<(), StatError> {
        if gridsize < 2 {
            return Err(StatError::InvalidGridSize(gridsize));
        }
        Ok(())
    }

    /// Validate the polynomial order.
    pub fn validate_order(order: usize) -> Result<(), StatError> {
        if order < 1 {
            return Err(StatError::InvalidOrder(order));
        }
        Ok(())
    }

    /// Validate the rolling window length.
    pub fn validate_window(window: usize) -> Result<(), StatError> {
        if window < 1 {
            return Err(StatError::InvalidWindow(window));
        }
        Ok(())
    }
}
