//! Tests for the polynomial fit transform.
//!
//! These tests verify:
//! - Mean recovery on noiseless polynomials
//! - Interval ordering, strictness, and width behavior
//! - Failure modes (too few points, collinear designs)
//!
//! ## Test Organization
//!
//! 1. **Mean** - Recovery and alpha-independence
//! 2. **Band** - Containment, strictness, width ordering, edge widening
//! 3. **Failures** - Degrees of freedom, degenerate designs

use approx::assert_relative_eq;

use fitband::prelude::*;

fn noise(i: usize) -> f64 {
    ((i * 6271) % 97) as f64 / 97.0 - 0.5
}

fn noisy_quadratic(n: usize) -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..n).map(|i| i as f64 / 5.0).collect();
    let y: Vec<f64> = x
        .iter()
        .enumerate()
        .map(|(i, v)| 1.0 + 2.0 * v - 0.3 * v * v + noise(i))
        .collect();
    (x, y)
}

// ============================================================================
// Mean Tests
// ============================================================================

/// Test the fitted mean recovers a noiseless quadratic on the grid.
#[test]
fn test_mean_recovers_noiseless_quadratic() {
    let x: Vec<f64> = (0..40).map(|i| i as f64 / 4.0).collect();
    let y: Vec<f64> = x.iter().map(|v| 1.0 + 2.0 * v - 0.3 * v * v).collect();

    let fit = PolyFitWithCI::new().order(2).gridsize(50).fit(&x, &y).unwrap();

    assert_eq!(fit.x.len(), 50);
    for (&g, &m) in fit.x.iter().zip(fit.y.iter()) {
        let truth = 1.0 + 2.0 * g - 0.3 * g * g;
        assert_relative_eq!(m, truth, epsilon = 1e-7, max_relative = 1e-7);
    }
}

/// Test the grid spans exactly the observed x-range.
#[test]
fn test_grid_spans_observations() {
    let (x, y) = noisy_quadratic(30);
    let fit = PolyFitWithCI::new().gridsize(25).fit(&x, &y).unwrap();

    assert_eq!(fit.x[0], 0.0);
    assert_relative_eq!(fit.x[24], 29.0 / 5.0, epsilon = 1e-12);
}

/// Test the mean curve does not depend on alpha.
#[test]
fn test_mean_independent_of_alpha() {
    let (x, y) = noisy_quadratic(40);

    let a = PolyFitWithCI::new().alpha(0.05).fit(&x, &y).unwrap();
    let b = PolyFitWithCI::new().alpha(0.01).fit(&x, &y).unwrap();

    assert_eq!(a.y, b.y, "alpha must only affect the band");
}

// ============================================================================
// Band Tests
// ============================================================================

/// Test the band is always present and brackets the mean strictly on
/// noisy data.
#[test]
fn test_band_present_and_strict() {
    let (x, y) = noisy_quadratic(50);
    let fit = PolyFitWithCI::new().gridsize(40).fit(&x, &y).unwrap();

    assert!(fit.has_band());
    let ymin = fit.ymin.as_ref().unwrap();
    let ymax = fit.ymax.as_ref().unwrap();

    let mut strict = 0;
    for i in 0..fit.y.len() {
        assert!(ymin[i] <= fit.y[i] && fit.y[i] <= ymax[i]);
        if ymax[i] > ymin[i] {
            strict += 1;
        }
    }
    // Noisy data keeps sigma^2 positive, so the band should be open
    // almost everywhere.
    assert!(
        strict * 100 >= fit.y.len() * 95,
        "band strict at only {strict}/{} points",
        fit.y.len()
    );
}

/// Test band width ordering across confidence levels.
#[test]
fn test_band_width_ordering() {
    let (x, y) = noisy_quadratic(50);

    let width = |alpha: f64| -> f64 {
        let fit = PolyFitWithCI::new().alpha(alpha).fit(&x, &y).unwrap();
        let ymin = fit.ymin.unwrap();
        let ymax = fit.ymax.unwrap();
        ymin.iter().zip(ymax.iter()).map(|(lo, hi)| hi - lo).sum()
    };

    let w10 = width(0.10);
    let w05 = width(0.05);
    let w01 = width(0.01);
    assert!(w10 < w05 && w05 < w01, "widths: {w10} {w05} {w01}");
}

/// Test the band widens toward the edges of the x-range.
#[test]
fn test_band_wider_at_edges() {
    let (x, y) = noisy_quadratic(50);
    let fit = PolyFitWithCI::new().gridsize(41).fit(&x, &y).unwrap();

    let ymin = fit.ymin.unwrap();
    let ymax = fit.ymax.unwrap();
    let width = |i: usize| ymax[i] - ymin[i];

    let center = width(20);
    assert!(width(0) > center, "left edge should be wider than center");
    assert!(width(40) > center, "right edge should be wider than center");
}

// ============================================================================
// Failure Tests
// ============================================================================

/// Test the degrees-of-freedom floor: order k needs k + 2 points.
#[test]
fn test_too_few_points_for_order() {
    let x = vec![0.0f64, 1.0, 2.0];
    let y = vec![0.0f64, 1.0, 2.0];

    let res = PolyFitWithCI::new().order(2).fit(&x, &y);
    assert!(matches!(
        res,
        Err(StatError::TooFewPointsForOrder { got: 3, order: 2 })
    ));

    // One more point is enough.
    let x = vec![0.0f64, 1.0, 2.0, 3.0];
    let y = vec![0.0f64, 1.0, 4.0, 9.0];
    assert!(PolyFitWithCI::new().order(2).fit(&x, &y).is_ok());
}

/// Test a single distinct x is a degenerate design.
#[test]
fn test_collinear_design_fails() {
    let x = vec![2.0f64; 8];
    let y: Vec<f64> = (0..8).map(|i| i as f64).collect();

    let res = PolyFitWithCI::new().order(2).fit(&x, &y);
    assert!(matches!(res, Err(StatError::DegenerateDesign(_))));
}

/// Test parameter validation runs before data work.
#[test]
fn test_parameter_validation() {
    let (x, y) = noisy_quadratic(20);

    assert!(matches!(
        PolyFitWithCI::new().order(0).fit(&x, &y),
        Err(StatError::InvalidOrder(0))
    ));
    assert!(matches!(
        PolyFitWithCI::new().gridsize(1).fit(&x, &y),
        Err(StatError::InvalidGridSize(1))
    ));
    assert!(matches!(
        PolyFitWithCI::new().alpha(1.0).fit(&x, &y),
        Err(StatError::InvalidAlpha(_))
    ));
}
