//! Row filtering and ordering helpers.
//!
//! Transforms that regrid need their observations sorted by the
//! independent axis; this module provides the shared preparation steps:
//! dropping non-finite rows, a permutation sort of (x, y) pairs, and a
//! distinct-value count over sorted data.

// External dependencies
use num_traits::Float;

/// Drop rows where either coordinate is NaN or infinite.
pub fn filter_finite<T: Float>(x: &[T], y: &[T]) -> (Vec<T>, Vec<T>) {
    let mut fx = Vec::with_capacity(x.len());
    let mut fy = Vec::with_capacity(y.len());

    for (&xi, &yi) in x.iter().zip(y.iter()) {
        if xi.is_finite() && yi.is_finite() {
            fx.push(xi);
            fy.push(yi);
        }
    }

    (fx, fy)
}

/// Sort (x, y) pairs by x, keeping the pairing intact.
///
/// The sort is stable so rows with tied x keep their input order.
pub fn sort_by_x<T: Float>(x: &[T], y: &[T]) -> (Vec<T>, Vec<T>) {
    debug_assert_eq!(x.len(), y.len(), "sort_by_x: length mismatch");

    let mut order: Vec<usize> = (0..x.len()).collect();
    // Inputs are pre-filtered to finite values, so total order holds.
    order.sort_by(|&a, &b| x[a].partial_cmp(&x[b]).unwrap_or(std::cmp::Ordering::Equal));

    let sx = order.iter().map(|&i| x[i]).collect();
    let sy = order.iter().map(|&i| y[i]).collect();
    (sx, sy)
}

/// Count distinct values in a sorted slice.
pub fn count_distinct_sorted<T: Float>(x: &[T]) -> usize {
    if x.is_empty() {
        return 0;
    }

    let mut count = 1;
    for w in x.windows(2) {
        if w[1] > w[0] {
            count += 1;
        }
    }
    count
}
