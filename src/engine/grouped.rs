//! Grouped application of statistical transforms.
//!
//! ## Purpose
//!
//! This module is the seam between the plotting layer and the numeric
//! core: it extracts oriented (x, y) samples from per-group tables,
//! applies a transform independently to each group, and reassembles the
//! outputs with orientation-appropriate column names.
//!
//! ## Design notes
//!
//! * **Purity**: [`Stat::apply`] sees one group at a time and carries no
//!   cross-group state, so groups can be evaluated in any order or in
//!   parallel without changing results.
//! * **Orientation**: `Orient::Y` swaps the axes on the way in and the
//!   column names on the way out; the numeric core always works with x
//!   as the independent axis.
//! * **Parallelism**: `apply_grouped_par` splits at the group boundary
//!   (feature `parallel`); within-group work stays single-threaded.
//!
//! ## Invariants
//!
//! * Output group order matches input group order on both paths.
//! * A failure in any group fails the whole application.
//!
//! ## Non-goals
//!
//! * This module does not group rows; callers pass data already split by
//!   category.
//! * This module does not interpret scale metadata; it forwards the
//!   context untouched.

// External dependencies
use num_traits::Float;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::str::FromStr;

// Internal dependencies
use crate::primitives::errors::StatError;
use crate::primitives::table::{FitTable, SampleTable, Table};

// ============================================================================
// Orientation
// ============================================================================

/// Which axis is the independent variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orient {
    /// `x` is independent (the usual case).
    #[default]
    X,

    /// `y` is independent; the fit runs along the y-axis.
    Y,
}

impl FromStr for Orient {
    type Err = StatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            other => Err(StatError::InvalidOrient(other.to_string())),
        }
    }
}

// ============================================================================
// Scale Context
// ============================================================================

/// Opaque scale metadata forwarded from the plotting layer.
///
/// Transforms in this crate operate in data space and never examine it,
/// but the protocol carries it so a transform that needs axis scales can
/// be added without changing the trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScaleContext;

// ============================================================================
// Stat Trait
// ============================================================================

/// A statistical transform applied independently to each group.
pub trait Stat<T: Float>: Send + Sync {
    /// Transform one group's samples into a fitted curve.
    fn apply(
        &self,
        samples: &SampleTable<T>,
        orient: Orient,
        scales: &ScaleContext,
    ) -> Result<FitTable<T>, StatError>;
}

// ============================================================================
// Extraction and Reassembly
// ============================================================================

/// Pull oriented samples out of a group table.
///
/// With `Orient::Y` the `y` column becomes the independent axis.
pub fn extract_samples<T: Float>(
    table: &Table<T>,
    orient: Orient,
) -> Result<SampleTable<T>, StatError> {
    let x = table
        .column("x")
        .ok_or_else(|| StatError::MissingColumn("x".to_string()))?;
    let y = table
        .column("y")
        .ok_or_else(|| StatError::MissingColumn("y".to_string()))?;

    match orient {
        Orient::X => SampleTable::new(x.to_vec(), y.to_vec()),
        Orient::Y => SampleTable::new(y.to_vec(), x.to_vec()),
    }
}

/// Turn a fit back into a table with orientation-appropriate names.
///
/// With `Orient::Y` the dependent axis is x, so the band columns are
/// emitted as `xmin`/`xmax`.
pub fn fit_into_table<T: Float>(fit: FitTable<T>, orient: Orient) -> Result<Table<T>, StatError> {
    let (ind, dep, band) = match orient {
        Orient::X => ("x", "y", ("ymin", "ymax")),
        Orient::Y => ("y", "x", ("xmin", "xmax")),
    };

    let mut table = Table::new().with_column(ind, fit.x)?.with_column(dep, fit.y)?;

    if let (Some(lower), Some(upper)) = (fit.ymin, fit.ymax) {
        table.push_column(band.0, lower)?;
        table.push_column(band.1, upper)?;
    }

    Ok(table)
}

// ============================================================================
// Grouped Application
// ============================================================================

/// Apply a transform to each group in order.
pub fn apply_grouped<T, S>(
    stat: &S,
    groups: &[Table<T>],
    orient: Orient,
    scales: &ScaleContext,
) -> Result<Vec<Table<T>>, StatError>
where
    T: Float,
    S: Stat<T>,
{
    groups
        .iter()
        .map(|group| apply_one(stat, group, orient, scales))
        .collect()
}

/// Apply a transform to each group across threads.
///
/// Output order matches input order; results are identical to
/// [`apply_grouped`].
#[cfg(feature = "parallel")]
pub fn apply_grouped_par<T, S>(
    stat: &S,
    groups: &[Table<T>],
    orient: Orient,
    scales: &ScaleContext,
) -> Result<Vec<Table<T>>, StatError>
where
    T: Float + Send + Sync,
    S: Stat<T>,
{
    groups
        .par_iter()
        .map(|group| apply_one(stat, group, orient, scales))
        .collect()
}

fn apply_one<T, S>(
    stat: &S,
    group: &Table<T>,
    orient: Orient,
    scales: &ScaleContext,
) -> Result<Table<T>, StatError>
where
    T: Float,
    S: Stat<T>,
{
    let samples = extract_samples(group, orient)?;
    let fit = stat.apply(&samples, orient, scales)?;
    fit_into_table(fit, orient)
}

/// Concatenate per-group outputs into one table.
///
/// All tables must share the schema of the first; group order is
/// preserved.
pub fn concat_tables<T: Float>(tables: Vec<Table<T>>) -> Result<Table<T>, StatError> {
    let mut iter = tables.into_iter();
    let mut combined = match iter.next() {
        Some(first) => first,
        None => return Ok(Table::new()),
    };

    for table in iter {
        combined.append(&table)?;
    }
    Ok(combined)
}
