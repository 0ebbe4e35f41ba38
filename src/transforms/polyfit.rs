//! Polynomial fit with analytic confidence intervals.
//!
//! ## Purpose
//!
//! This module exposes ordinary least-squares polynomial regression as a
//! grouped transform. Unlike the bootstrap band of the LOWESS transform,
//! the uncertainty here is closed-form: Student-t intervals on the mean
//! response from the coefficient covariance.
//!
//! ## Design notes
//!
//! * **Always banded**: The interval costs one quadratic form per grid
//!   point, so there is no opt-out; `alpha` only controls the width.
//! * **Numerics**: The algebra runs in `f64` regardless of the input
//!   float type.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::polynomial::fit_polynomial;
use crate::engine::grouped::{Orient, ScaleContext, Stat};
use crate::engine::validator::Validator;
use crate::math::grid::linspace;
use crate::math::quantile::student_t_quantile;
use crate::primitives::errors::StatError;
use crate::primitives::sorting::filter_finite;
use crate::primitives::table::{FitTable, SampleTable};

// ============================================================================
// Configuration
// ============================================================================

/// Polynomial least-squares fit with a pointwise confidence band.
///
/// ```rust
/// use fitband::prelude::*;
///
/// let x: Vec<f64> = (0..30).map(|i| i as f64 / 3.0).collect();
/// let y: Vec<f64> = x.iter().map(|v| 1.0 + 2.0 * v - 0.3 * v * v).collect();
///
/// let fit = PolyFitWithCI::new().order(2).gridsize(40).fit(&x, &y)?;
/// assert!(fit.has_band());
/// # Result::<(), StatError>::Ok(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PolyFitWithCI {
    order: usize,
    gridsize: usize,
    alpha: f64,
}

impl Default for PolyFitWithCI {
    fn default() -> Self {
        Self::new()
    }
}

impl PolyFitWithCI {
    /// Default polynomial order.
    pub const DEFAULT_ORDER: usize = 2;

    /// Default evaluation grid size.
    pub const DEFAULT_GRIDSIZE: usize = 100;

    /// Default confidence complement (95% intervals).
    pub const DEFAULT_ALPHA: f64 = 0.05;

    /// Create a transform with default parameters.
    pub fn new() -> Self {
        Self {
            order: Self::DEFAULT_ORDER,
            gridsize: Self::DEFAULT_GRIDSIZE,
            alpha: Self::DEFAULT_ALPHA,
        }
    }

    /// Polynomial order (1 = line, 2 = parabola, ...).
    pub fn order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    /// Number of evaluation grid points.
    pub fn gridsize(mut self, gridsize: usize) -> Self {
        self.gridsize = gridsize;
        self
    }

    /// Confidence complement for the interval (0.05 gives 95%).
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Fit one group of observations.
    pub fn fit<T: Float>(&self, x: &[T], y: &[T]) -> Result<FitTable<T>, StatError> {
        Validator::validate_order(self.order)?;
        Validator::validate_gridsize(self.gridsize)?;
        Validator::validate_alpha(self.alpha)?;
        Validator::validate_samples(x, y)?;

        let (fx, fy) = filter_finite(x, y);
        if fx.is_empty() {
            return Err(StatError::EmptyInput);
        }
        Validator::validate_points_for_order(fx.len(), self.order)?;

        let xs: Vec<f64> = fx.iter().map(|v| v.to_f64().unwrap()).collect();
        let ys: Vec<f64> = fy.iter().map(|v| v.to_f64().unwrap()).collect();

        let model = fit_polynomial(&xs, &ys, self.order)?;
        let t_crit = student_t_quantile(1.0 - self.alpha / 2.0, model.df())?;

        let (x_lo, x_hi) = xs.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |acc, &v| {
            (acc.0.min(v), acc.1.max(v))
        });
        let grid = linspace(x_lo, x_hi, self.gridsize);

        let mut gx = Vec::with_capacity(self.gridsize);
        let mut gy = Vec::with_capacity(self.gridsize);
        let mut lower = Vec::with_capacity(self.gridsize);
        let mut upper = Vec::with_capacity(self.gridsize);

        for &g in &grid {
            let mean = model.predict(g);
            let se = model.standard_error(g);
            let half = t_crit * se;

            if !mean.is_finite() || !half.is_finite() {
                return Err(StatError::DegenerateDesign(format!(
                    "non-finite interval at x={g}"
                )));
            }

            gx.push(T::from(g).unwrap());
            gy.push(T::from(mean).unwrap());
            lower.push(T::from(mean - half).unwrap());
            upper.push(T::from(mean + half).unwrap());
        }

        Ok(FitTable {
            x: gx,
            y: gy,
            ymin: Some(lower),
            ymax: Some(upper),
        })
    }
}

// ============================================================================
// Stat Implementation
// ============================================================================

impl<T: Float> Stat<T> for PolyFitWithCI {
    fn apply(
        &self,
        samples: &SampleTable<T>,
        _orient: Orient,
        _scales: &ScaleContext,
    ) -> Result<FitTable<T>, StatError> {
        self.fit(&samples.x, &samples.y)
    }
}
