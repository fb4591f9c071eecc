// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Special Functions Module** - *Standard-Normal CDF, Log-CDF and Quantile*
//!
//! Scalar and tensor forms of:
//! - `ndtr(a)   = Φ(a)`, the standard-normal CDF;
//! - `log_ndtr(a) = ln Φ(a)`, finite far into the left tail where `Φ(a)` underflows;
//! - `ndtri(p)  = Φ⁻¹(p)`, the standard-normal quantile.
//!
//! Scalars are evaluated in `f64`; the tensor wrappers narrow the result to the
//! element type of their input and keep its shape and validity mask.
//!
//! ## log_ndtr regions
//! | region | evaluation |
//! |---|---|
//! | `a > upper` | `-ndtr(-a)`, since `ln(1 - ε) ≈ -ε` |
//! | `lower < a ≤ upper` | `ln(ndtr(a))` |
//! | `a ≤ lower` | asymptotic expansion of `ln Φ` |
//!
//! `lower`/`upper` depend on the element type, see [`KernelFloat::LOG_NDTR_LOWER`].

use crate::config::{LOG_NDTR_LOWER_F64, LOG_NDTR_SERIES_ORDER, LOG_NDTR_UPPER_F64, NDTRI_TAIL_EPS};
use crate::kernels::scientific::distributions::shared::constants::{
    FRAC_1_SQRT_2, HALF_LOG_TWO_PI, SQRT_2, TWO_PI,
};
use crate::kernels::scientific::erf::{erf, erfc, erfc_inv, ndtri_rational_left};
use crate::kernels::unary::map_unary;
use crate::structs::tensor::Tensor;
use crate::traits::kernel_float::KernelFloat;

/// Standard-normal CDF Φ(a).
///
/// Uses `erf` near the origin and `erfc` elsewhere, so both tails keep relative
/// precision. `ndtr(0) == 0.5` exactly.
#[inline]
pub fn ndtr(a: f64) -> f64 {
    if a.is_nan() {
        return f64::NAN;
    }
    let x = a * FRAC_1_SQRT_2;
    let z = x.abs();
    if z < FRAC_1_SQRT_2 {
        0.5 + 0.5 * erf(x)
    } else {
        let y = 0.5 * erfc(z);
        if x > 0.0 { 1.0 - y } else { y }
    }
}

/// `1 + Σ_{n=1}^{order} (-1)^n (2n-1)!! / a^{2n}`.
#[inline]
fn log_ndtr_asymptotic_series(a: f64, order: usize) -> f64 {
    let a_sq = a * a;
    let mut even_sum = 0.0;
    let mut odd_sum = 0.0;
    let mut a_pow = a_sq;
    let mut double_fac = 1.0;
    for n in 1..=order {
        double_fac *= (2 * n - 1) as f64;
        let term = double_fac / a_pow;
        if n % 2 == 1 {
            odd_sum += term;
        } else {
            even_sum += term;
        }
        a_pow *= a_sq;
    }
    1.0 + even_sum - odd_sum
}

/// `ln Φ(a)` with explicit branch points.
///
/// `lower` and `upper` pick the region boundaries; [`log_ndtr`] uses the
/// double-precision defaults.
#[inline]
pub fn log_ndtr_with_cutoffs(a: f64, lower: f64, upper: f64) -> f64 {
    if a.is_nan() {
        return f64::NAN;
    }
    if a > upper {
        return -ndtr(-a);
    }
    if a > lower {
        return ndtr(a).ln();
    }
    if a == f64::NEG_INFINITY {
        return f64::NEG_INFINITY;
    }
    -0.5 * a * a - (-a).ln() - HALF_LOG_TWO_PI
        + log_ndtr_asymptotic_series(a, LOG_NDTR_SERIES_ORDER).ln()
}

/// Log of the standard-normal CDF, `ln Φ(a)`.
///
/// Stays finite for very negative `a`, e.g. `log_ndtr(-40) ≈ -804.6084`, where
/// `ndtr(-40)` underflows to `0`. `log_ndtr(-∞) = -∞`, `log_ndtr(+∞) = 0`.
#[inline]
pub fn log_ndtr(a: f64) -> f64 {
    log_ndtr_with_cutoffs(a, LOG_NDTR_LOWER_F64, LOG_NDTR_UPPER_F64)
}

/// Standard-normal quantile Φ⁻¹(p).
///
/// - `p` outside `[0, 1]` or NaN → NaN
/// - `ndtri(0) = -∞`, `ndtri(1) = +∞`, `ndtri(0.5) = 0`
///
/// Acklam initial approximation, one Halley step on `Φ(z) - p`, and an
/// `erfc⁻¹` path for tail probabilities below machine epsilon.
pub fn ndtri(p: f64) -> f64 {
    if p.is_nan() || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p == 0.0 {
        return f64::NEG_INFINITY;
    }
    if p == 1.0 {
        return f64::INFINITY;
    }
    if p == 0.5 {
        return 0.0;
    }

    let (p_left, sign) = if p < 0.5 { (p, 1.0) } else { (1.0 - p, -1.0) };

    if p_left < NDTRI_TAIL_EPS {
        // Φ⁻¹(p) = −√2 · erfc⁻¹(2p)
        return sign * (-SQRT_2 * erfc_inv(2.0 * p_left));
    }

    let mut z = ndtri_rational_left(p_left);

    // Halley: f = Φ(z) − p, f' = φ(z), f'' = −z φ(z)
    let pdf = (-0.5 * z * z).exp() / TWO_PI.sqrt();
    let f = ndtr(z) - p_left;
    let u = f / pdf;
    z -= u / (1.0 + 0.5 * z * u);

    sign * z
}

/// Elementwise [`ndtr`], narrowed to the tensor's element type.
pub fn ndtr_nd<T: KernelFloat>(x: &Tensor<T>) -> Tensor<T> {
    map_unary(x, |v| T::from_f64_lossy(ndtr(v.into_f64())))
}

/// Elementwise `ln Φ` using the element type's branch points.
pub fn log_ndtr_nd<T: KernelFloat>(x: &Tensor<T>) -> Tensor<T> {
    map_unary(x, |v| {
        T::from_f64_lossy(log_ndtr_with_cutoffs(
            v.into_f64(),
            T::LOG_NDTR_LOWER,
            T::LOG_NDTR_UPPER,
        ))
    })
}

/// Elementwise [`ndtri`], narrowed to the tensor's element type.
pub fn ndtri_nd<T: KernelFloat>(p: &Tensor<T>) -> Tensor<T> {
    map_unary(p, |v| T::from_f64_lossy(ndtri(v.into_f64())))
}
