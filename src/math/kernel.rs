//! Weighting kernels.
//!
//! ## Purpose
//!
//! This module provides the distance-weighting functions used by the
//! smoothers: the tricube kernel for local regression and the discrete
//! window kernels for rolling smoothing.
//!
//! ## Key concepts
//!
//! * **Tricube**: `(1 - u^3)^3` on `[0, 1]`, Cleveland's standard choice.
//!   Smoothly de-emphasizes distant neighbors and reaches exactly zero at
//!   the window edge.
//! * **Window kernels**: weights over integer offsets within a centered
//!   window; truncated windows are renormalized by the caller.
//!
//! ## Invariants
//!
//! * All weights are finite and non-negative.
//! * `tricube(0) == 1` and `tricube(u) == 0` for `u >= 1`.

// External dependencies
use num_traits::Float;

// ============================================================================
// Tricube
// ============================================================================

/// Tricube weight for a normalized distance `u = d / radius`.
#[inline]
pub fn tricube<T: Float>(u: T) -> T {
    if u >= T::one() {
        return T::zero();
    }
    let t = T::one() - u * u * u;
    t * t * t
}

// ============================================================================
// Window Kernels
// ============================================================================

/// Discrete weighting kernel for centered rolling windows.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum WindowKernel {
    /// Uniform weights (plain moving average) - default.
    #[default]
    Boxcar,

    /// Gaussian weights `exp(-0.5 * (d / std)^2)` over the integer
    /// offset `d` from the window center.
    Gaussian {
        /// Standard deviation in index units; must be positive.
        std: f64,
    },

    /// Linear taper from 1 at the center to 0 just outside the window.
    Triangle,
}

impl WindowKernel {
    /// Weight for a point at integer `offset` from the window center.
    ///
    /// `half_left` and `half_right` are the window's reach on each side;
    /// `Triangle` tapers over the longer reach so every in-window weight
    /// stays strictly positive.
    #[inline]
    pub fn weight<T: Float>(&self, offset: isize, half_left: usize, half_right: usize) -> T {
        match *self {
            Self::Boxcar => T::one(),
            Self::Gaussian { std } => {
                let d = T::from(offset.unsigned_abs()).unwrap();
                let s = T::from(std).unwrap();
                let u = d / s;
                (-(u * u) / T::from(2.0).unwrap()).exp()
            }
            Self::Triangle => {
                let span = usize::max(half_left, half_right) + 1;
                let d = T::from(offset.unsigned_abs()).unwrap();
                T::one() - d / T::from(span).unwrap()
            }
        }
    }

    /// Whether the kernel's parameters are usable.
    pub fn is_valid(&self) -> bool {
        match *self {
            Self::Gaussian { std } => std.is_finite() && std > 0.0,
            _ => true,
        }
    }
}
