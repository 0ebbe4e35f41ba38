//! Pure mathematical functions shared by the algorithms.

pub mod grid;
pub mod kernel;
pub mod quantile;
