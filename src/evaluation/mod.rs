//! Uncertainty estimation for fitted curves.

pub mod bootstrap;
