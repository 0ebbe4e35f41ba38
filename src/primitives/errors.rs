//! Error types for statistical transforms.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while evaluating
//! a transform, covering input shape, parameter bounds, fit feasibility,
//! numerical degeneracy, and cooperative cancellation.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (e.g., actual
//!   lengths, the configured fraction and its feasible floor).
//! * **Synchronous**: Every failure is raised at evaluation time; no
//!   transform ever emits NaN rows in place of an error.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric values in errors use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// External dependencies
use std::error::Error;
use std::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for statistical transform evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum StatError {
    /// Input columns are empty after non-finite rows were dropped.
    EmptyInput,

    /// `x` and `y` columns must have the same number of rows.
    MismatchedInputs {
        /// Number of rows in the `x` column.
        x_len: usize,
        /// Number of rows in the `y` column.
        y_len: usize,
    },

    /// Local regression needs at least 2 distinct x-values.
    TooFewDistinctX {
        /// Number of distinct x-values observed.
        got: usize,
    },

    /// The smoothing fraction selects fewer points than a local fit needs.
    InfeasibleFraction {
        /// Number of distinct x-values observed.
        distinct_x: usize,
        /// The configured fraction.
        frac: f64,
        /// Smallest feasible fraction for this data.
        min_frac: f64,
    },

    /// Polynomial fit needs more points than coefficients plus one.
    TooFewPointsForOrder {
        /// Number of points provided.
        got: usize,
        /// The configured polynomial order.
        order: usize,
    },

    /// The fit matrix is singular or produced non-finite values.
    DegenerateDesign(String),

    /// Smoothing fraction must be in the range (0, 1].
    InvalidFraction(f64),

    /// Confidence complement must be strictly between 0 and 1.
    InvalidAlpha(f64),

    /// Evaluation grid needs at least 2 points.
    InvalidGridSize(usize),

    /// Polynomial order must be at least 1.
    InvalidOrder(usize),

    /// Rolling window must cover at least 1 point.
    InvalidWindow(usize),

    /// Window kernel parameters are unusable (e.g. non-positive std).
    InvalidKernel(String),

    /// Orientation string was neither "x" nor "y".
    InvalidOrient(String),

    /// A required column is missing from the input table.
    MissingColumn(String),

    /// Tables being concatenated do not share a schema.
    MismatchedColumns {
        /// Column layout of the first table.
        expected: String,
        /// Column layout of the offending table.
        got: String,
    },

    /// Evaluation was cancelled through the shared cancel flag.
    Cancelled,
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for StatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input columns are empty"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} rows, y has {y_len}")
            }
            Self::TooFewDistinctX { got } => {
                write!(f, "Too few distinct x values: got {got}, need at least 2")
            }
            Self::InfeasibleFraction {
                distinct_x,
                frac,
                min_frac,
            } => {
                write!(
                    f,
                    "frac={frac} is too small for {distinct_x} distinct x values; \
                     each local fit needs at least 2 points, so frac must be at least {min_frac:.6}"
                )
            }
            Self::TooFewPointsForOrder { got, order } => {
                write!(
                    f,
                    "Too few points for order {order}: got {got}, need at least {}",
                    order + 2
                )
            }
            Self::DegenerateDesign(msg) => write!(f, "Degenerate fit: {msg}"),
            Self::InvalidFraction(frac) => {
                write!(f, "Invalid fraction: {frac} (must be > 0 and <= 1)")
            }
            Self::InvalidAlpha(alpha) => {
                write!(f, "Invalid alpha: {alpha} (must be > 0 and < 1)")
            }
            Self::InvalidGridSize(size) => {
                write!(f, "Invalid gridsize: {size} (must be at least 2)")
            }
            Self::InvalidOrder(order) => {
                write!(f, "Invalid order: {order} (must be at least 1)")
            }
            Self::InvalidWindow(window) => {
                write!(f, "Invalid window: {window} (must be at least 1)")
            }
            Self::InvalidKernel(msg) => write!(f, "Invalid window kernel: {msg}"),
            Self::InvalidOrient(s) => {
                write!(f, "Invalid orient: '{s}' (must be 'x' or 'y')")
            }
            Self::MissingColumn(name) => write!(f, "Missing column: '{name}'"),
            Self::MismatchedColumns { expected, got } => {
                write!(f, "Schema mismatch: expected columns [{expected}], got [{got}]")
            }
            Self::Cancelled => write!(f, "Evaluation was cancelled"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl Error for StatError {}
