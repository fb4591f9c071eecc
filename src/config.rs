// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

// These parameters should rarely need adjustment.

//! # **Configuration Constants** - *Compile-time Behaviour Parameters*
//!
//! Global configuration constants controlling special-function branch points
//! and the defaults of the `scipy.stats.norm` style surface.

/// Default location (mean) applied when `loc` is omitted.
pub const DEFAULT_LOC: f64 = 0.0;

/// Default scale (standard deviation) applied when `scale` is omitted.
pub const DEFAULT_SCALE: f64 = 1.0;

/// Number of terms of the asymptotic series used by `log_ndtr` in the far
/// lower tail. Three terms keep the truncation error below 1e-13 relative at
/// the f64 cutoff.
pub const LOG_NDTR_SERIES_ORDER: usize = 3;

/// Below this point `log_ndtr` switches to the asymptotic expansion (f64).
pub const LOG_NDTR_LOWER_F64: f64 = -20.0;

/// Above this point `log_ndtr` uses `-ndtr(-x)` (f64).
pub const LOG_NDTR_UPPER_F64: f64 = 8.0;

/// Below this point `log_ndtr` switches to the asymptotic expansion (f32).
pub const LOG_NDTR_LOWER_F32: f64 = -10.0;

/// Above this point `log_ndtr` uses `-ndtr(-x)` (f32).
pub const LOG_NDTR_UPPER_F32: f64 = 5.0;

/// Tail probability below which `ndtri` inverts via `erfc⁻¹` rather than
/// Acklam's rational approximation. Equal to half of f64 machine epsilon.
pub const NDTRI_TAIL_EPS: f64 = 1.110_223_024_625_156_5e-16;
