//! Tests for input validation utilities.
//!
//! These tests verify the validation functions used by the transforms for:
//! - Sample column validation (length, emptiness)
//! - Parameter validation (fraction, alpha, gridsize, order, window)
//! - Data-dependent feasibility (distinct x, span floor, degrees of freedom)
//!
//! ## Test Organization
//!
//! 1. **Data Validation** - Column shape and distinct-x checks
//! 2. **Feasibility** - Span floor and polynomial degrees of freedom
//! 3. **Parameter Validation** - Scalar parameter bounds

use fitband::engine::validator::Validator;
use fitband::primitives::errors::StatError;

// ============================================================================
// Data Validation Tests
// ============================================================================

/// Test validation rejects empty input columns.
#[test]
fn test_validate_empty_samples() {
    let x: Vec<f64> = vec![];
    let y: Vec<f64> = vec![];
    let res = Validator::validate_samples(&x, &y);

    assert!(
        matches!(res, Err(StatError::EmptyInput)),
        "Empty input should error"
    );
}

/// Test validation rejects mismatched column lengths.
#[test]
fn test_validate_length_mismatch() {
    let x = vec![0.0, 1.0];
    let y = vec![1.0];
    let res = Validator::validate_samples(&x, &y);

    assert!(
        matches!(res, Err(StatError::MismatchedInputs { x_len: 2, y_len: 1 })),
        "Length mismatch should error"
    );
}

/// Test validation accepts well-formed columns.
#[test]
fn test_validate_samples_ok() {
    let x = vec![0.0, 1.0, 2.0];
    let y = vec![1.0, 2.0, 3.0];
    assert!(Validator::validate_samples(&x, &y).is_ok());
}

/// Test distinct-x floor for local regression.
#[test]
fn test_validate_distinct_x() {
    assert!(matches!(
        Validator::validate_distinct_x(1),
        Err(StatError::TooFewDistinctX { got: 1 })
    ));
    assert!(Validator::validate_distinct_x(2).is_ok());
}

// ============================================================================
// Feasibility Tests
// ============================================================================

/// Test the span feasibility floor of 2 / distinct_x.
///
/// With 3 distinct x-values the smallest workable fraction is 2/3.
#[test]
fn test_span_feasibility_floor() {
    assert!(Validator::validate_span_feasibility(3, 0.67).is_ok());
    assert!(Validator::validate_span_feasibility(3, 2.0 / 3.0).is_ok());

    let res = Validator::validate_span_feasibility(3, 0.2);
    match res {
        Err(StatError::InfeasibleFraction {
            distinct_x,
            frac,
            min_frac,
        }) => {
            assert_eq!(distinct_x, 3);
            assert_eq!(frac, 0.2);
            assert!((min_frac - 2.0 / 3.0).abs() < 1e-12);
        }
        other => panic!("expected InfeasibleFraction, got {other:?}"),
    }
}

/// Test the infeasibility diagnostic names the data and the parameter.
#[test]
fn test_span_feasibility_message() {
    let err = Validator::validate_span_feasibility(3, 0.2).unwrap_err();
    let msg = err.to_string();

    assert!(msg.contains("distinct x"), "message should name distinct x: {msg}");
    assert!(msg.contains("frac=0.2"), "message should name the fraction: {msg}");
}

/// Test the degrees-of-freedom requirement for polynomial fits.
///
/// Order k needs at least k + 2 points so one residual degree of
/// freedom remains.
#[test]
fn test_points_for_order() {
    assert!(matches!(
        Validator::validate_points_for_order(3, 2),
        Err(StatError::TooFewPointsForOrder { got: 3, order: 2 })
    ));
    assert!(Validator::validate_points_for_order(4, 2).is_ok());
    assert!(Validator::validate_points_for_order(3, 1).is_ok());
}

// ============================================================================
// Parameter Validation Tests
// ============================================================================

/// Test fraction bounds (0, 1].
#[test]
fn test_validate_fraction() {
    assert!(Validator::validate_fraction(0.5).is_ok());
    assert!(Validator::validate_fraction(1.0).is_ok());
    assert!(matches!(
        Validator::validate_fraction(0.0),
        Err(StatError::InvalidFraction(_))
    ));
    assert!(matches!(
        Validator::validate_fraction(1.5),
        Err(StatError::InvalidFraction(_))
    ));
    assert!(matches!(
        Validator::validate_fraction(f64::NAN),
        Err(StatError::InvalidFraction(_))
    ));
}

/// Test alpha bounds (0, 1).
#[test]
fn test_validate_alpha() {
    assert!(Validator::validate_alpha(0.05).is_ok());
    assert!(matches!(
        Validator::validate_alpha(0.0),
        Err(StatError::InvalidAlpha(_))
    ));
    assert!(matches!(
        Validator::validate_alpha(1.0),
        Err(StatError::InvalidAlpha(_))
    ));
}

/// Test gridsize, order, and window floors.
#[test]
fn test_validate_size_parameters() {
    assert!(matches!(
        Validator::validate_gridsize(1),
        Err(StatError::InvalidGridSize(1))
    ));
    assert!(Validator::validate_gridsize(2).is_ok());

    assert!(matches!(
        Validator::validate_order(0),
        Err(StatError::InvalidOrder(0))
    ));
    assert!(Validator::validate_order(1).is_ok());

    assert!(matches!(
        Validator::validate_window(0),
        Err(StatError::InvalidWindow(0))
    ));
    assert!(Validator::validate_window(1).is_ok());
}
