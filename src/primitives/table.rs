//! Columnar tables exchanged with the plotting layer.
//!
//! ## Purpose
//!
//! This module defines the data structures at the transform boundary:
//! the generic named-column [`Table`], the per-group [`SampleTable`] a
//! transform consumes, and the [`FitTable`] it produces.
//!
//! ## Design notes
//!
//! * **Optional outputs**: Band columns use `Option<Vec<T>>`; a transform
//!   that computes no uncertainty simply leaves them unset.
//! * **Column order**: `Table` preserves insertion order so concatenated
//!   outputs keep a stable schema.
//!
//! ## Invariants
//!
//! * All columns of a `Table` have the same number of rows.
//! * A populated `FitTable` band satisfies `ymin <= y <= ymax` row-wise.
//!
//! ## Non-goals
//!
//! * This module does not validate statistical consistency of the values
//!   it stores (responsibility of the transforms).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::StatError;

// ============================================================================
// Table
// ============================================================================

/// Ordered collection of equal-length named numeric columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table<T> {
    columns: Vec<(String, Vec<T>)>,
}

impl<T: Float> Table<T> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Append a column, enforcing equal row counts.
    pub fn push_column(&mut self, name: &str, values: Vec<T>) -> Result<(), StatError> {
        if let Some((_, first)) = self.columns.first() {
            if first.len() != values.len() {
                return Err(StatError::MismatchedInputs {
                    x_len: first.len(),
                    y_len: values.len(),
                });
            }
        }
        self.columns.push((name.to_string(), values));
        Ok(())
    }

    /// Fluent variant of [`push_column`](Self::push_column).
    pub fn with_column(mut self, name: &str, values: Vec<T>) -> Result<Self, StatError> {
        self.push_column(name, values)?;
        Ok(self)
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&[T]> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Number of rows (0 for a table with no columns).
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, |(_, v)| v.len())
    }

    /// Whether the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.n_rows() == 0
    }

    /// Append the rows of another table with an identical schema.
    pub fn append(&mut self, other: &Table<T>) -> Result<(), StatError> {
        if self.column_names() != other.column_names() {
            return Err(StatError::MismatchedColumns {
                expected: self.column_names().join(", "),
                got: other.column_names().join(", "),
            });
        }
        for ((_, dst), (_, src)) in self.columns.iter_mut().zip(other.columns.iter()) {
            dst.extend_from_slice(src);
        }
        Ok(())
    }
}

// ============================================================================
// Sample Table
// ============================================================================

/// One group's observations after orientation has been applied.
///
/// `x` is the independent axis regardless of how the plotting layer
/// labels its columns.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleTable<T> {
    /// Independent values.
    pub x: Vec<T>,

    /// Dependent values.
    pub y: Vec<T>,
}

impl<T: Float> SampleTable<T> {
    /// Build from paired columns, enforcing equal lengths.
    pub fn new(x: Vec<T>, y: Vec<T>) -> Result<Self, StatError> {
        if x.len() != y.len() {
            return Err(StatError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the group holds no observations.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

// ============================================================================
// Fit Table
// ============================================================================

/// Output of a transform for one group: the fitted curve and, when
/// uncertainty was computed, its band.
#[derive(Debug, Clone, PartialEq)]
pub struct FitTable<T> {
    /// Evaluation positions along the independent axis.
    pub x: Vec<T>,

    /// Fitted values.
    pub y: Vec<T>,

    /// Lower band bound, present only when uncertainty was computed.
    pub ymin: Option<Vec<T>>,

    /// Upper band bound, present only when uncertainty was computed.
    pub ymax: Option<Vec<T>>,
}

impl<T: Float> FitTable<T> {
    /// A fit without a band.
    pub fn curve(x: Vec<T>, y: Vec<T>) -> Self {
        Self {
            x,
            y,
            ymin: None,
            ymax: None,
        }
    }

    /// Check whether both band bounds are populated.
    pub fn has_band(&self) -> bool {
        self.ymin.is_some() && self.ymax.is_some()
    }

    /// Number of output rows.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the fit holds no rows.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}
