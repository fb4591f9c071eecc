// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Mathematical Constants Module** - *Constants for the Normal Kernels*
//!
//! Hard-coded double-precision constants used by the normal distribution,
//! the error functions and the quantile approximation.

/// The square root of 2: √2 ≈ 1.414213562373095.
///
/// Scales the standard-normal argument into the error function domain,
/// `Φ(x) = ½ erfc(−x/√2)`.
pub(crate) const SQRT_2: f64 = 1.4142135623730951_f64;

/// The reciprocal of √2: 1/√2 ≈ 0.7071067811865476.
pub(crate) const FRAC_1_SQRT_2: f64 = 0.7071067811865476_f64;

/// The square root of π: √π ≈ 1.772453850905516.
pub(crate) const SQRT_PI: f64 = 1.7724538509055159_f64;

/// 2π, the variance normaliser of the Gaussian log-density.
pub const TWO_PI: f64 = 2.0 * std::f64::consts::PI;

/// Half of the natural logarithm of 2π: ½ln(2π) ≈ 0.918938533204673.
///
/// Constant term of the standard-normal log-density and of the
/// asymptotic log-CDF expansion.
pub const HALF_LOG_TWO_PI: f64 = 0.918_938_533_204_672_741_780_329_736_406;

/// Acklam's inverse normal CDF approximation coefficients (numerator polynomial).
///
/// Central region 0.02425 < p < 0.97575, relative error below 1.15e-9 before refinement.
pub(crate) const A: [f64; 6] = [
    -3.969683028665376e+01,
    2.209460984245205e+02,
    -2.759285104469687e+02,
    1.383577518672690e+02,
    -3.066479806614716e+01,
    2.506628277459239e+00,
];

/// Acklam's inverse normal CDF approximation coefficients (denominator polynomial).
pub(crate) const B: [f64; 5] = [
    -5.447609879822406e+01,
    1.615858368580409e+02,
    -1.556989798598866e+02,
    6.680131188771972e+01,
    -1.328068155288572e+01,
];

/// Acklam's inverse normal CDF approximation coefficients (tail region numerator).
pub(crate) const C: [f64; 6] = [
    -7.784894002430293e-03,
    -3.223964580411365e-01,
    -2.400758277161838e+00,
    -2.549732539343734e+00,
    4.374664141464968e+00,
    2.938163982698783e+00,
];

/// Acklam's inverse normal CDF approximation coefficients (tail region denominator).
pub(crate) const D: [f64; 4] = [
    7.784695709041462e-03,
    3.224671290700398e-01,
    2.445134137142996e+00,
    3.754408661907416e+00,
];

/// Lower break-point between Acklam's central and tail approximations (≈ −2σ).
pub(crate) const P_LOW: f64 = 0.02425;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_agree_with_std() {
        assert_eq!(SQRT_2, std::f64::consts::SQRT_2);
        assert_eq!(FRAC_1_SQRT_2, std::f64::consts::FRAC_1_SQRT_2);
        assert!((HALF_LOG_TWO_PI - 0.5 * TWO_PI.ln()).abs() < 1e-15);
        assert!((SQRT_PI * SQRT_PI - std::f64::consts::PI).abs() < 1e-15);
    }
}
