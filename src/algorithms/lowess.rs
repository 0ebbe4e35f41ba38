//! Locally weighted regression (LOWESS).
//!
//! ## Purpose
//!
//! This module implements Cleveland's LOWESS smoother over sorted data:
//! for each sample point a weighted linear fit over its nearest neighbors,
//! optionally refined by bisquare robustness iterations that downweight
//! outliers.
//!
//! ## Design notes
//!
//! * **Windows**: Nearest-neighbor windows slide along the sorted x-axis
//!   and recenter at each point, so every local fit uses the `q` closest
//!   observations.
//! * **Weights**: Tricube over normalized distance, with near/far
//!   thresholds at 0.1% and 99.9% of the window radius snapping weights
//!   to exactly 1 and 0.
//! * **Robustness**: Bisquare weights from MAD-scaled residuals with
//!   Cleveland's tuning constant `c = 6`.
//!
//! ## Invariants
//!
//! * Input slices are sorted by x and contain only finite values.
//! * Output has the same length and ordering as the input.
//! * Robustness weights stay in `[0, 1]`.
//!
//! ## Non-goals
//!
//! * This module does not sort, filter, or validate its inputs.
//! * This module does not regrid; it fits at the sample locations only.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::kernel::tricube;

// ============================================================================
// Constants
// ============================================================================

/// Bisquare tuning constant applied to the residual MAD (Cleveland 1979).
const BISQUARE_C: f64 = 6.0;

/// Fraction of the threshold below which a residual keeps full weight.
const NEAR_FRACTION: f64 = 0.001;

/// Fraction of the threshold beyond which a residual is fully rejected.
const FAR_FRACTION: f64 = 0.999;

// ============================================================================
// Neighborhood
// ============================================================================

// Inclusive index bounds [lo, hi] of the points used for one local fit.
#[derive(Copy, Clone, Debug)]
struct Neighborhood {
    lo: usize,
    hi: usize,
}

impl Neighborhood {
    // Window of `span` points starting at the left edge.
    fn leftmost(span: usize, n: usize) -> Self {
        let hi = usize::min(span, n).saturating_sub(1);
        Self { lo: 0, hi }
    }

    // Slide so the window holds the nearest neighbors of x[current].
    fn recenter<T: Float>(&mut self, x: &[T], current: usize) {
        let n = x.len();
        let x0 = x[current];

        // Slide right while the point past the window is closer than the
        // leftmost point in it.
        while self.hi < n - 1 {
            let d_lo = x0 - x[self.lo];
            let d_next = x[self.hi + 1] - x0;
            if d_lo <= d_next {
                break;
            }
            self.lo += 1;
            self.hi += 1;
        }

        // Slide left while the point before the window is closer than the
        // rightmost point in it.
        while self.lo > 0 {
            let d_prev = x0 - x[self.lo - 1];
            let d_hi = x[self.hi] - x0;
            if d_hi <= d_prev {
                break;
            }
            self.lo -= 1;
            self.hi -= 1;
        }
    }

    // Largest distance from x0 to either window edge.
    fn radius<T: Float>(&self, x: &[T], x0: T) -> T {
        T::max(x0 - x[self.lo], x[self.hi] - x0)
    }
}

/// Window size `q` from the smoothing fraction.
///
/// Rounds `frac * n` up through a small epsilon and clamps to `[2, n]`
/// so a local linear fit always has two support points.
pub fn span_from_fraction<T: Float>(n: usize, frac: T) -> usize {
    let epsilon = T::from(1e-5).unwrap();
    let q = (frac * T::from(n).unwrap() + epsilon).to_usize().unwrap_or(0);
    usize::max(2, usize::min(n, q))
}

// ============================================================================
// Local Fit
// ============================================================================

// Weighted linear fit over one neighborhood, evaluated at x0.
//
// Degenerate windows (zero radius or no x-spread under the weights)
// fall back to the weighted mean of the window's y-values.
fn fit_local<T: Float>(
    x: &[T],
    y: &[T],
    robustness: &[T],
    nb: Neighborhood,
    x0: T,
) -> T {
    let radius = nb.radius(x, x0);

    // All window points share one x: the weighted mean is the fit.
    if radius <= T::zero() {
        return weighted_mean(&y[nb.lo..=nb.hi], &robustness[nb.lo..=nb.hi]);
    }

    let h1 = T::from(NEAR_FRACTION).unwrap() * radius;
    let h9 = T::from(FAR_FRACTION).unwrap() * radius;

    let mut sum_w = T::zero();
    let mut sum_wx = T::zero();
    let mut sum_wy = T::zero();
    let mut sum_wxx = T::zero();
    let mut sum_wxy = T::zero();

    for j in nb.lo..=nb.hi {
        let d = (x[j] - x0).abs();
        let k = if d <= h1 {
            T::one()
        } else if d > h9 {
            T::zero()
        } else {
            tricube(d / radius)
        };

        let w = k * robustness[j];
        if w <= T::zero() {
            continue;
        }

        let wx = w * x[j];
        sum_w = sum_w + w;
        sum_wx = sum_wx + wx;
        sum_wy = sum_wy + w * y[j];
        sum_wxx = sum_wxx + wx * x[j];
        sum_wxy = sum_wxy + wx * y[j];
    }

    // Robustness can zero out the whole window; fall back to the plain
    // local mean rather than emitting a non-finite value.
    if sum_w <= T::zero() {
        let len = nb.hi - nb.lo + 1;
        let sum = y[nb.lo..=nb.hi]
            .iter()
            .fold(T::zero(), |acc, &v| acc + v);
        return sum / T::from(len).unwrap();
    }

    let x_mean = sum_wx / sum_w;
    let y_mean = sum_wy / sum_w;
    let variance = sum_wxx - (sum_wx * sum_wx) / sum_w;

    let abs_tol = T::from(1e-7).unwrap();
    let rel_tol = T::epsilon() * radius * radius;
    if variance <= abs_tol.max(rel_tol) {
        return y_mean;
    }

    let covariance = sum_wxy - (sum_wx * sum_wy) / sum_w;
    let slope = covariance / variance;
    let intercept = y_mean - slope * x_mean;
    intercept + slope * x0
}

fn weighted_mean<T: Float>(y: &[T], w: &[T]) -> T {
    let mut sum_w = T::zero();
    let mut sum_wy = T::zero();
    for (&yi, &wi) in y.iter().zip(w.iter()) {
        sum_w = sum_w + wi;
        sum_wy = sum_wy + wi * yi;
    }

    if sum_w > T::zero() {
        sum_wy / sum_w
    } else {
        let sum = y.iter().fold(T::zero(), |acc, &v| acc + v);
        sum / T::from(y.len().max(1)).unwrap()
    }
}

// ============================================================================
// Robustness Weights
// ============================================================================

// Bisquare weights from residuals, scaled by 6 * MAD.
//
// cmad = 6 * median(|r|)
// w = 1                   if |r| <= 0.001 * cmad
// w = (1 - (r/cmad)^2)^2  if |r| <= 0.999 * cmad
// w = 0                   otherwise
fn bisquare_weights<T: Float>(residuals: &[T], weights: &mut [T], scratch: &mut Vec<T>) {
    scratch.clear();
    scratch.extend(residuals.iter().map(|r| r.abs()));
    let mad = median_in_place(scratch);

    let cmad = T::from(BISQUARE_C).unwrap() * mad;
    if cmad <= T::from(1e-12).unwrap() {
        // Residuals are essentially zero; keep every point.
        for w in weights.iter_mut() {
            *w = T::one();
        }
        return;
    }

    let c1 = T::from(NEAR_FRACTION).unwrap() * cmad;
    let c9 = T::from(FAR_FRACTION).unwrap() * cmad;

    for (w, &r) in weights.iter_mut().zip(residuals.iter()) {
        let a = r.abs();
        *w = if a <= c1 {
            T::one()
        } else if a <= c9 {
            let u = a / cmad;
            let t = T::one() - u * u;
            t * t
        } else {
            T::zero()
        };
    }
}

// Median by sorting the buffer; averages the middle pair for even n.
fn median_in_place<T: Float>(values: &mut [T]) -> T {
    if values.is_empty() {
        return T::zero();
    }

    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = values.len();
    if n % 2 == 1 {
        values[n / 2]
    } else {
        (values[n / 2 - 1] + values[n / 2]) / T::from(2.0).unwrap()
    }
}

// ============================================================================
// Smoother
// ============================================================================

/// Smooth sorted observations at their own x-locations.
///
/// `iterations` counts robustness passes after the initial fit; zero
/// means a single unweighted pass.
pub fn smooth_sorted<T: Float>(x: &[T], y: &[T], frac: T, iterations: usize) -> Vec<T> {
    let n = x.len();
    debug_assert!(n >= 2, "smooth_sorted: need at least 2 points");

    let span = span_from_fraction(n, frac);
    let mut robustness = vec![T::one(); n];
    let mut fitted = vec![T::zero(); n];
    let mut residuals = vec![T::zero(); n];
    let mut scratch = Vec::with_capacity(n);

    for pass in 0..=iterations {
        let mut nb = Neighborhood::leftmost(span, n);
        for i in 0..n {
            nb.recenter(x, i);
            fitted[i] = fit_local(x, y, &robustness, nb, x[i]);
        }

        if pass == iterations {
            break;
        }

        for i in 0..n {
            residuals[i] = y[i] - fitted[i];
        }
        bisquare_weights(&residuals, &mut robustness, &mut scratch);
    }

    fitted
}
