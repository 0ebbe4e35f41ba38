//! Quantile helpers.
//!
//! ## Purpose
//!
//! Two quantile computations back the uncertainty bands: the Student-t
//! inverse CDF for analytic intervals and an empirical percentile for
//! bootstrap distributions.
//!
//! ## Design notes
//!
//! * **Percentile convention**: linear interpolation between order
//!   statistics at rank `q * (n - 1)`, matching the convention the
//!   plotting ecosystem expects from its numeric stack.

// External dependencies
use num_traits::Float;
use statrs::distribution::{ContinuousCDF, StudentsT};

// Internal dependencies
use crate::primitives::errors::StatError;

/// Student-t quantile at probability `p` with `df` degrees of freedom.
pub fn student_t_quantile(p: f64, df: f64) -> Result<f64, StatError> {
    let dist = StudentsT::new(0.0, 1.0, df).map_err(|e| {
        StatError::DegenerateDesign(format!("t distribution with df={df}: {e}"))
    })?;
    Ok(dist.inverse_cdf(p))
}

/// Empirical percentile of unordered values at `q` in `[0, 1]`.
///
/// Sorts the buffer in place. Returns `None` for an empty buffer.
pub fn percentile<T: Float>(values: &mut [T], q: f64) -> Option<T> {
    if values.is_empty() {
        return None;
    }

    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let rank = q.clamp(0.0, 1.0) * (values.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;

    if lo == hi {
        return Some(values[lo]);
    }

    let weight = T::from(rank - lo as f64).unwrap();
    Some(values[lo] + (values[hi] - values[lo]) * weight)
}
