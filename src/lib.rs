//! # fitband — grouped statistical transforms for plotting pipelines
//!
//! Statistical transforms that turn raw (x, y) observations, grouped by
//! category, into smooth curves with optional uncertainty bands. The output
//! is plain columnar data for a plotting layer to draw; no rendering,
//! scaling, or layout happens here.
//!
//! ## Transforms
//!
//! * [`Lowess`](transforms::Lowess) — locally weighted robust regression
//!   with optional bootstrap confidence bands.
//! * [`PolyFitWithCI`](transforms::PolyFitWithCI) — polynomial least-squares
//!   fit with closed-form confidence intervals.
//! * [`Rolling`](transforms::Rolling) — centered windowed smoothing over
//!   ordered series.
//!
//! ## Quick start
//!
//! ```rust
//! use fitband::prelude::*;
//!
//! let x: Vec<f64> = (0..200).map(|i| i as f64 / 10.0).collect();
//! let y: Vec<f64> = x.iter().map(|v| (v * 0.8).sin() + v * 0.1).collect();
//!
//! let fit = Lowess::new()
//!     .fraction(0.3)
//!     .iterations(2)
//!     .gridsize(50)
//!     .fit(&x, &y)?;
//!
//! assert_eq!(fit.x.len(), 50);
//! # Result::<(), StatError>::Ok(())
//! ```
//!
//! ## Grouped evaluation
//!
//! Transforms implement the [`Stat`](engine::grouped::Stat) trait and are
//! pure per group: [`apply_grouped`](engine::grouped::apply_grouped) maps a
//! transform over per-group tables, and `apply_grouped_par` does the same
//! across threads (feature `parallel`, enabled by default).

// ============================================================================
// Layers
// ============================================================================

// Layer 1: primitives (errors, tables, sorting)
pub mod primitives;

// Layer 2: math (kernels, grids, quantiles)
pub mod math;

// Layer 3: algorithms (lowess, interpolation, polynomial)
pub mod algorithms;

// Layer 4: evaluation (bootstrap uncertainty)
pub mod evaluation;

// Layer 5: engine (validation, grouped orchestration)
pub mod engine;

// Layer 6: user-facing transforms
pub mod transforms;

// ============================================================================
// Prelude
// ============================================================================

/// Common imports for typical usage.
pub mod prelude {
    #[cfg(feature = "parallel")]
    pub use crate::engine::grouped::apply_grouped_par;
    pub use crate::engine::grouped::{
        apply_grouped, concat_tables, Orient, ScaleContext, Stat,
    };
    pub use crate::evaluation::bootstrap::{
        bootstrap_plan, CancelFlag, DEFAULT_RESAMPLES,
    };
    pub use crate::math::kernel::WindowKernel;
    pub use crate::primitives::errors::StatError;
    pub use crate::primitives::table::{FitTable, SampleTable, Table};
    pub use crate::transforms::{Lowess, PolyFitWithCI, Rolling};
}
