// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Scalar Distribution Utilities Module** - *Reference Scalar Normal Evaluators*
//!
//! Single-point `f64` evaluators for the normal distribution. They follow the
//! same operation order as the tensor kernels and serve as their reference in
//! tests, and as a convenience for callers holding plain scalars.

use crate::kernels::scientific::distributions::shared::constants::TWO_PI;
use crate::kernels::scientific::special::{log_ndtr, ndtr, ndtri};

/// Normal log-density `-(ln(2π σ²) + (x - μ)²/σ²) / 2`.
///
/// `scale` is not validated: `σ = 0` yields NaN per IEEE rules, a negative
/// `σ` behaves like `|σ|`.
#[inline(always)]
pub fn normal_logpdf_scalar(x: f64, loc: f64, scale: f64) -> f64 {
    let scale_sq = scale.powf(2.0);
    let log_normalizer = (TWO_PI * scale_sq).ln();
    let quadratic = (x - loc).powf(2.0) / scale_sq;
    -(log_normalizer + quadratic) / 2.0
}

/// Normal density, `exp(logpdf)`. Underflows to `0` in far tails.
#[inline(always)]
pub fn normal_pdf_scalar(x: f64, loc: f64, scale: f64) -> f64 {
    normal_logpdf_scalar(x, loc, scale).exp()
}

/// Normal CDF `Φ((x - μ)/σ)`.
#[inline(always)]
pub fn normal_cdf_scalar(x: f64, loc: f64, scale: f64) -> f64 {
    ndtr((x - loc) / scale)
}

/// Normal log-CDF, finite far into the left tail.
#[inline(always)]
pub fn normal_logcdf_scalar(x: f64, loc: f64, scale: f64) -> f64 {
    log_ndtr((x - loc) / scale)
}

/// Survival function `1 - Φ(z)`, evaluated as `Φ(-z)` to keep upper-tail precision.
#[inline(always)]
pub fn normal_sf_scalar(x: f64, loc: f64, scale: f64) -> f64 {
    ndtr(-((x - loc) / scale))
}

/// Log survival function `ln Φ(-z)`.
#[inline(always)]
pub fn normal_logsf_scalar(x: f64, loc: f64, scale: f64) -> f64 {
    log_ndtr(-((x - loc) / scale))
}

/// Inverse CDF `μ + σ Φ⁻¹(q)`.
///
/// `q = 0` gives `-∞`, `q = 1` gives `+∞`, `q` outside `[0, 1]` gives NaN.
#[inline(always)]
pub fn normal_quantile_scalar(q: f64, loc: f64, scale: f64) -> f64 {
    loc + scale * ndtri(q)
}

#[cfg(test)]
mod tests {
    use super::*;

    // scipy.stats.norm reference values, scipy 1.16

    #[test]
    fn logpdf_standard() {
        // scipy.stats.norm.logpdf(0) == -0.9189385332046728
        assert!((normal_logpdf_scalar(0.0, 0.0, 1.0) + 0.9189385332046728).abs() < 1e-15);
        // scipy.stats.norm.logpdf(3) == -5.418938533204673
        assert!((normal_logpdf_scalar(3.0, 0.0, 1.0) + 5.418938533204673).abs() < 1e-14);
    }

    #[test]
    fn logpdf_location_scale() {
        // scipy.stats.norm.logpdf(5, loc=2, scale=3) == -2.5175508218727822
        assert!((normal_logpdf_scalar(5.0, 2.0, 3.0) + 2.5175508218727822).abs() < 1e-14);
    }

    #[test]
    fn pdf_peak() {
        // 1/sqrt(2π·9) == 0.13298076013381088
        assert!((normal_pdf_scalar(2.0, 2.0, 3.0) - 0.13298076013381088).abs() < 1e-15);
    }

    #[test]
    fn cdf_and_sf_complement() {
        for x in [-3.0, -0.5, 0.0, 0.7, 4.0] {
            let s = normal_cdf_scalar(x, 0.5, 2.0) + normal_sf_scalar(x, 0.5, 2.0);
            assert!((s - 1.0).abs() < 1e-15);
        }
        assert_eq!(normal_cdf_scalar(1.0, 1.0, 2.0), 0.5);
    }

    #[test]
    fn logcdf_and_logsf_mirror() {
        for x in [-30.0, -2.0, 0.0, 1.5, 12.0] {
            assert_eq!(normal_logsf_scalar(x, 0.0, 1.0), normal_logcdf_scalar(-x, 0.0, 1.0));
        }
    }

    #[test]
    fn quantile_location_scale() {
        // scipy.stats.norm.ppf(0.8413447460685429, loc=2, scale=3) == 5.0
        assert!((normal_quantile_scalar(0.8413447460685429, 2.0, 3.0) - 5.0).abs() < 1e-12);
        assert_eq!(normal_quantile_scalar(0.5, 7.0, 2.0), 7.0);
        assert_eq!(normal_quantile_scalar(0.0, 7.0, 2.0), f64::NEG_INFINITY);
        assert!(normal_quantile_scalar(1.5, 0.0, 1.0).is_nan());
    }

    #[test]
    fn zero_scale_is_ieee() {
        // ln(0) meets 0/0 or x/0
        assert!(normal_logpdf_scalar(1.0, 1.0, 0.0).is_nan());
        assert!(normal_logpdf_scalar(2.0, 1.0, 0.0).is_nan());
        assert_eq!(normal_cdf_scalar(2.0, 1.0, 0.0), 1.0);
        assert_eq!(normal_cdf_scalar(0.0, 1.0, 0.0), 0.0);
        assert!(normal_cdf_scalar(1.0, 1.0, 0.0).is_nan());
    }
}
