//! Core numerical algorithms.

pub mod interpolation;
pub mod lowess;
pub mod polynomial;
