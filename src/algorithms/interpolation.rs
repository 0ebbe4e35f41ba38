//! Interpolation of a fitted curve onto an evaluation grid.
//!
//! The smoothers fit at the sample locations; this module moves those
//! values onto the output grid by linear interpolation. Grid points at
//! or beyond the data range take the nearest endpoint value, so the
//! curve never extrapolates. Tied x-values contribute the average of
//! their fitted values.

// External dependencies
use num_traits::Float;

/// Linearly interpolate `(xs, ys)` at each grid position.
///
/// `xs` must be sorted ascending; `grid` positions may repeat and need
/// not be sorted.
pub fn interpolate_curve<T: Float>(xs: &[T], ys: &[T], grid: &[T]) -> Vec<T> {
    debug_assert_eq!(xs.len(), ys.len(), "interpolate_curve: length mismatch");
    debug_assert!(!xs.is_empty(), "interpolate_curve: empty curve");

    grid.iter().map(|&g| interpolate_at(xs, ys, g)).collect()
}

fn interpolate_at<T: Float>(xs: &[T], ys: &[T], g: T) -> T {
    let n = xs.len();

    if g <= xs[0] {
        return tied_mean(xs, ys, 0);
    }
    if g >= xs[n - 1] {
        return tied_mean(xs, ys, n - 1);
    }

    // First index with xs[idx] >= g; interior because of the edge checks.
    let idx = xs.partition_point(|&v| v < g);

    if xs[idx] == g {
        return tied_mean(xs, ys, idx);
    }

    let (x_lo, y_lo) = (xs[idx - 1], tied_mean(xs, ys, idx - 1));
    let (x_hi, y_hi) = (xs[idx], tied_mean(xs, ys, idx));

    let t = (g - x_lo) / (x_hi - x_lo);
    y_lo + (y_hi - y_lo) * t
}

// Average fitted value over the run of x-values tied with xs[idx].
fn tied_mean<T: Float>(xs: &[T], ys: &[T], idx: usize) -> T {
    let x0 = xs[idx];

    let mut lo = idx;
    while lo > 0 && xs[lo - 1] == x0 {
        lo -= 1;
    }
    let mut hi = idx;
    while hi + 1 < xs.len() && xs[hi + 1] == x0 {
        hi += 1;
    }

    if lo == hi {
        return ys[idx];
    }

    let sum = ys[lo..=hi].iter().fold(T::zero(), |acc, &v| acc + v);
    sum / T::from(hi - lo + 1).unwrap()
}
