//! Core data structures and low-level utilities.

pub mod errors;
pub mod sorting;
pub mod table;
