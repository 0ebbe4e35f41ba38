//! Evaluation grid construction.
//!
//! Regridding transforms evaluate their fit on a deterministic grid over
//! the observed x-range. The grid never extends beyond the observed
//! bounds, so a fitted curve never extrapolates.

// External dependencies
use num_traits::Float;

/// `n` equally spaced points from `start` to `stop`, endpoints included.
///
/// Requires `n >= 2`; the last point is exactly `stop`.
pub fn linspace<T: Float>(start: T, stop: T, n: usize) -> Vec<T> {
    debug_assert!(n >= 2, "linspace: need at least 2 points");

    let step = (stop - start) / T::from(n - 1).unwrap();
    let mut out = Vec::with_capacity(n);
    for i in 0..n - 1 {
        out.push(start + step * T::from(i).unwrap());
    }
    out.push(stop);
    out
}

/// Evaluation grid over sorted observations.
///
/// When the requested size is at least the sample count the observed
/// x-values are reused directly; a denser grid than the data cannot add
/// information.
pub fn evaluation_grid<T: Float>(sorted_x: &[T], gridsize: usize) -> Vec<T> {
    let n = sorted_x.len();
    debug_assert!(n >= 2, "evaluation_grid: need at least 2 observations");

    if gridsize >= n {
        return sorted_x.to_vec();
    }
    linspace(sorted_x[0], sorted_x[n - 1], gridsize)
}
