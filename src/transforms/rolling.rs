//! Rolling window smoothing.
//!
//! ## Purpose
//!
//! This module exposes centered windowed smoothing as a grouped
//! transform for data that is already ordered along the independent
//! axis, such as time series. It replaces each value with a kernel-
//! weighted average of its window.
//!
//! ## Design notes
//!
//! * **No regridding**: Output rows correspond one-to-one with the
//!   (finite) input rows, in input order. The transform never sorts.
//! * **Boundaries**: Windows are truncated at the series edges and the
//!   surviving weights renormalized; no padding values are invented.
//! * **No bands**: A rolling mean carries no uncertainty model.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::grouped::{Orient, ScaleContext, Stat};
use crate::engine::validator::Validator;
use crate::math::kernel::WindowKernel;
use crate::primitives::errors::StatError;
use crate::primitives::sorting::filter_finite;
use crate::primitives::table::{FitTable, SampleTable};

// ============================================================================
// Configuration
// ============================================================================

/// Centered rolling mean with a configurable window kernel.
///
/// ```rust
/// use fitband::prelude::*;
///
/// let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
/// let y = vec![1.0, 3.0, 2.0, 5.0, 4.0];
///
/// let fit = Rolling::new().window(3).fit(&x, &y)?;
/// assert_eq!(fit.y.len(), 5);
/// assert!(!fit.has_band());
/// # Result::<(), StatError>::Ok(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Rolling {
    window: usize,
    kernel: WindowKernel,
}

impl Default for Rolling {
    fn default() -> Self {
        Self::new()
    }
}

impl Rolling {
    /// Default window length.
    pub const DEFAULT_WINDOW: usize = 5;

    /// Create a transform with a boxcar window of the default length.
    pub fn new() -> Self {
        Self {
            window: Self::DEFAULT_WINDOW,
            kernel: WindowKernel::Boxcar,
        }
    }

    /// Window length in rows.
    pub fn window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Weighting kernel over the window.
    pub fn kernel(mut self, kernel: WindowKernel) -> Self {
        self.kernel = kernel;
        self
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Smooth one group of ordered observations.
    pub fn fit<T: Float>(&self, x: &[T], y: &[T]) -> Result<FitTable<T>, StatError> {
        Validator::validate_window(self.window)?;
        if !self.kernel.is_valid() {
            return Err(StatError::InvalidKernel(format!("{:?}", self.kernel)));
        }
        Validator::validate_samples(x, y)?;

        let (xs, ys) = filter_finite(x, y);
        if xs.is_empty() {
            return Err(StatError::EmptyInput);
        }

        let n = ys.len();
        // Center sits right of the midpoint for even window lengths.
        let half_left = (self.window - 1) / 2;
        let half_right = self.window / 2;

        let mut smoothed = Vec::with_capacity(n);
        for i in 0..n {
            let lo = i.saturating_sub(half_left);
            let hi = usize::min(n - 1, i + half_right);

            let mut sum_w = T::zero();
            let mut sum_wy = T::zero();
            for j in lo..=hi {
                let offset = j as isize - i as isize;
                let w: T = self.kernel.weight(offset, half_left, half_right);
                sum_w = sum_w + w;
                sum_wy = sum_wy + w * ys[j];
            }

            // Kernel weights are strictly positive in-window, so the
            // renormalized mean is always defined.
            smoothed.push(sum_wy / sum_w);
        }

        Ok(FitTable::curve(xs, smoothed))
    }
}

// ============================================================================
// Stat Implementation
// ============================================================================

impl<T: Float> Stat<T> for Rolling {
    fn apply(
        &self,
        samples: &SampleTable<T>,
        _orient: Orient,
        _scales: &ScaleContext,
    ) -> Result<FitTable<T>, StatError> {
        self.fit(&samples.x, &samples.y)
    }
}
