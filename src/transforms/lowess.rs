//! LOWESS transform with optional bootstrap confidence bands.
//!
//! ## Purpose
//!
//! This module exposes the locally weighted regression smoother as a
//! grouped transform: observations in, a regridded curve out, with an
//! optional bootstrap percentile band around it.
//!
//! ## Design notes
//!
//! * **Configuration**: Fluent setters over an immutable value; a
//!   configured transform is reusable across groups and threads.
//! * **Validation**: Deferred to evaluation, where feasibility can be
//!   judged against the actual data.
//! * **Bands**: The resample-count decision lives in
//!   [`bootstrap_plan`](crate::evaluation::bootstrap::bootstrap_plan);
//!   the band is clamped onto the point estimate so `ymin <= y <= ymax`
//!   holds exactly.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::interpolation::interpolate_curve;
use crate::algorithms::lowess::smooth_sorted;
use crate::engine::grouped::{Orient, ScaleContext, Stat};
use crate::engine::validator::Validator;
use crate::evaluation::bootstrap::{bootstrap_plan, percentile_band, CancelFlag};
use crate::math::grid::evaluation_grid;
use crate::primitives::errors::StatError;
use crate::primitives::sorting::{count_distinct_sorted, filter_finite, sort_by_x};
use crate::primitives::table::{FitTable, SampleTable};

// ============================================================================
// Configuration
// ============================================================================

/// Locally weighted regression with optional bootstrap bands.
///
/// ```rust
/// use fitband::prelude::*;
///
/// let x: Vec<f64> = (0..50).map(|i| i as f64).collect();
/// let y: Vec<f64> = x.iter().map(|v| v * 0.5 + 1.0).collect();
///
/// let fit = Lowess::new().fraction(0.5).gridsize(25).fit(&x, &y)?;
/// assert_eq!(fit.x.len(), 25);
/// # Result::<(), StatError>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct Lowess {
    frac: f64,
    iterations: usize,
    gridsize: usize,
    bootstrap: Option<usize>,
    alpha: f64,
    seed: Option<u64>,
    cancel: Option<CancelFlag>,
}

impl Default for Lowess {
    fn default() -> Self {
        Self::new()
    }
}

impl Lowess {
    /// Default smoothing fraction.
    pub const DEFAULT_FRAC: f64 = 0.2;

    /// Default number of robustness iterations.
    pub const DEFAULT_ITERATIONS: usize = 3;

    /// Default evaluation grid size.
    pub const DEFAULT_GRIDSIZE: usize = 100;

    /// Default confidence complement (95% bands).
    pub const DEFAULT_ALPHA: f64 = 0.05;

    /// Create a transform with default parameters and no bands.
    pub fn new() -> Self {
        Self {
            frac: Self::DEFAULT_FRAC,
            iterations: Self::DEFAULT_ITERATIONS,
            gridsize: Self::DEFAULT_GRIDSIZE,
            bootstrap: None,
            alpha: Self::DEFAULT_ALPHA,
            seed: None,
            cancel: None,
        }
    }

    /// Fraction of the data used for each local fit.
    pub fn fraction(mut self, frac: f64) -> Self {
        self.frac = frac;
        self
    }

    /// Number of robustness iterations (0 disables robustness).
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Number of evaluation grid points.
    pub fn gridsize(mut self, gridsize: usize) -> Self {
        self.gridsize = gridsize;
        self
    }

    /// Explicit bootstrap resample count; 0 disables bands.
    pub fn bootstrap(mut self, resamples: usize) -> Self {
        self.bootstrap = Some(resamples);
        self
    }

    /// Confidence complement for the band (0.05 gives 95% bands).
    ///
    /// Setting a non-default value without an explicit resample count
    /// opts into bootstrap bands.
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Seed for reproducible bootstrap bands.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Shared flag checked between resamples; setting it aborts the fit
    /// with [`StatError::Cancelled`].
    pub fn cancel_flag(mut self, flag: CancelFlag) -> Self {
        self.cancel = Some(flag);
        self
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Fit one group of observations.
    pub fn fit<T: Float>(&self, x: &[T], y: &[T]) -> Result<FitTable<T>, StatError> {
        Validator::validate_fraction(self.frac)?;
        Validator::validate_alpha(self.alpha)?;
        Validator::validate_gridsize(self.gridsize)?;
        Validator::validate_samples(x, y)?;

        let (fx, fy) = filter_finite(x, y);
        if fx.is_empty() {
            return Err(StatError::EmptyInput);
        }

        let (xs, ys) = sort_by_x(&fx, &fy);
        let distinct = count_distinct_sorted(&xs);
        Validator::validate_distinct_x(distinct)?;
        Validator::validate_span_feasibility(distinct, self.frac)?;

        let frac_t = T::from(self.frac).unwrap();
        let grid = evaluation_grid(&xs, self.gridsize);

        let fitted = smooth_sorted(&xs, &ys, frac_t, self.iterations);
        let curve = interpolate_curve(&xs, &fitted, &grid);

        let plan = bootstrap_plan(self.bootstrap, self.alpha, Self::DEFAULT_ALPHA);
        let resamples = match plan {
            Some(b) => b,
            None => return Ok(FitTable::curve(grid, curve)),
        };

        let band = percentile_band(
            &xs,
            &ys,
            grid.len(),
            resamples,
            self.alpha,
            self.seed,
            self.cancel.as_ref(),
            |xb, yb| {
                let (rx, ry) = sort_by_x(xb, yb);
                let refit = smooth_sorted(&rx, &ry, frac_t, self.iterations);
                Ok(interpolate_curve(&rx, &refit, &grid))
            },
        )?;

        // Percentiles of resampled curves need not straddle the point
        // estimate; clamp so the band always contains it.
        let ymin: Vec<T> = band
            .lower
            .iter()
            .zip(curve.iter())
            .map(|(&lo, &fit)| lo.min(fit))
            .collect();
        let ymax: Vec<T> = band
            .upper
            .iter()
            .zip(curve.iter())
            .map(|(&hi, &fit)| hi.max(fit))
            .collect();

        Ok(FitTable {
            x: grid,
            y: curve,
            ymin: Some(ymin),
            ymax: Some(ymax),
        })
    }
}

// ============================================================================
// Stat Implementation
// ============================================================================

impl<T: Float> Stat<T> for Lowess {
    fn apply(
        &self,
        samples: &SampleTable<T>,
        _orient: Orient,
        _scales: &ScaleContext,
    ) -> Result<FitTable<T>, StatError> {
        self.fit(&samples.x, &samples.y)
    }
}
