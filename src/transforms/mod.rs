//! User-facing transform configurations.

pub mod lowess;
pub mod polyfit;
pub mod rolling;

pub use lowess::Lowess;
pub use polyfit::PolyFitWithCI;
pub use rolling::Rolling;
