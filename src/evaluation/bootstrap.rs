//! Bootstrap confidence bands.
//!
//! ## Purpose
//!
//! This module estimates pointwise uncertainty for smoothers without a
//! closed-form error model: it refits on resampled rows and takes
//! empirical percentiles of the refitted curves at each grid position.
//!
//! ## Design notes
//!
//! * **Plan first**: [`bootstrap_plan`] is a pure function from the
//!   explicit resample count and the confidence level to the number of
//!   resamples; the decision is inspectable and never mutates the
//!   transform's configuration.
//! * **Determinism**: A seed makes the whole band reproducible; without
//!   one the generator draws from entropy.
//! * **Cancellation**: A shared flag is checked between resamples.
//!   Cancellation fails the fit; a partial band is never returned.
//!
//! ## Invariants
//!
//! * `lower[i] <= upper[i]` for every grid position.
//! * A cancelled run produces no band output at all.
//!
//! ## Non-goals
//!
//! * This module does not know how to fit; callers supply the refit
//!   closure.

// External dependencies
use num_traits::Float;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

// Internal dependencies
use crate::math::quantile::percentile;
use crate::primitives::errors::StatError;

// ============================================================================
// Plan
// ============================================================================

/// Resample count used when bands are requested implicitly.
pub const DEFAULT_RESAMPLES: usize = 200;

/// Shared flag for cooperative cancellation of long-running fits.
pub type CancelFlag = Arc<AtomicBool>;

/// Decide how many bootstrap resamples to run.
///
/// An explicit count always wins, and an explicit zero disables bands.
/// With no explicit count, choosing a non-default confidence level opts
/// into [`DEFAULT_RESAMPLES`]; otherwise no bands are computed.
pub fn bootstrap_plan(explicit: Option<usize>, alpha: f64, default_alpha: f64) -> Option<usize> {
    match explicit {
        Some(0) => None,
        Some(b) => Some(b),
        None if alpha != default_alpha => Some(DEFAULT_RESAMPLES),
        None => None,
    }
}

// ============================================================================
// Band
// ============================================================================

/// Pointwise percentile band over bootstrap refits.
#[derive(Debug, Clone, PartialEq)]
pub struct BootstrapBand<T> {
    /// Lower bound at each grid position (`alpha / 2` percentile).
    pub lower: Vec<T>,

    /// Upper bound at each grid position (`1 - alpha / 2` percentile).
    pub upper: Vec<T>,
}

/// Compute a percentile band by refitting on resampled rows.
///
/// `refit` receives a resampled (x, y) pairing (unsorted) and must return
/// one fitted value per position of `grid`. The resample keeps the
/// original row pairing; only row membership varies.
pub fn percentile_band<T, F>(
    x: &[T],
    y: &[T],
    grid_len: usize,
    resamples: usize,
    alpha: f64,
    seed: Option<u64>,
    cancel: Option<&CancelFlag>,
    refit: F,
) -> Result<BootstrapBand<T>, StatError>
where
    T: Float,
    F: Fn(&[T], &[T]) -> Result<Vec<T>, StatError>,
{
    debug_assert_eq!(x.len(), y.len(), "percentile_band: length mismatch");
    debug_assert!(resamples > 0, "percentile_band: need at least 1 resample");

    let n = x.len();
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let mut curves: Vec<Vec<T>> = Vec::with_capacity(resamples);
    let mut xb = vec![T::zero(); n];
    let mut yb = vec![T::zero(); n];

    for _ in 0..resamples {
        if let Some(flag) = cancel {
            if flag.load(Ordering::Relaxed) {
                return Err(StatError::Cancelled);
            }
        }

        for slot in 0..n {
            let pick = rng.gen_range(0..n);
            xb[slot] = x[pick];
            yb[slot] = y[pick];
        }

        curves.push(refit(&xb, &yb)?);
    }

    let q_lo = alpha / 2.0;
    let q_hi = 1.0 - alpha / 2.0;

    let mut lower = Vec::with_capacity(grid_len);
    let mut upper = Vec::with_capacity(grid_len);
    let mut column = vec![T::zero(); resamples];

    for g in 0..grid_len {
        for (slot, curve) in column.iter_mut().zip(curves.iter()) {
            *slot = curve[g];
        }
        // Resamples > 0, so both percentiles exist; the buffer is
        // refilled on the next pass, so sorting it here is harmless.
        let lo = percentile(&mut column, q_lo).ok_or(StatError::EmptyInput)?;
        let hi = percentile(&mut column, q_hi).ok_or(StatError::EmptyInput)?;
        lower.push(lo);
        upper.push(hi);
    }

    Ok(BootstrapBand { lower, upper })
}
