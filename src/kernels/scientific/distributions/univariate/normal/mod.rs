// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Normal Distribution Module** - *Gaussian Density, CDF and Quantile Kernels*
//!
//! Evaluates the normal distribution `N(loc, scale²)` over broadcastable inputs of
//! mixed numeric type.
//!
//! ## Mathematical Definition
//! ```text
//! logpdf(x) = -(ln(2π σ²) + (x - μ)²/σ²) / 2
//! pdf(x)    = exp(logpdf(x))
//! cdf(x)    = Φ((x - μ)/σ)
//! logcdf(x) = ln Φ((x - μ)/σ)
//! ```
//!
//! ## Argument handling
//! - `x`, `loc` and `scale` accept anything convertible to an [`Operand`]:
//!   scalars, slices, `Vec64`, minarrow arrays or shaped tensors.
//! - Arguments are promoted to a common float dtype and rank first, see
//!   [`promote_args`]. The result has the broadcast shape of all three.
//! - Null lanes in any operand propagate to the output as `NaN` with a cleared
//!   validity bit.
//! - `scale` is not validated. `σ = 0` or `σ < 0` produce whatever IEEE
//!   arithmetic produces, typically `NaN` or `±inf`.
//!
//! ## Numerical notes
//! - `pdf` is `exp(logpdf)` and underflows to `0` beyond `|z| ≈ 38.6`.
//! - `logcdf` switches to an asymptotic expansion below the element type's lower
//!   branch point, so it stays finite for arbitrarily negative `x`.
//! - `sf`/`logsf` evaluate `Φ(-z)` rather than `1 - Φ(z)`.

pub mod compose;

use crate::errors::KernelError;
use crate::kernels::promote::{dispatch_promoted, promote_args};
use crate::structs::operand::Operand;
use crate::structs::tensor::DynTensor;

use compose::{
    normal_cdf_nd, normal_logcdf_nd, normal_logpdf_nd, normal_logsf_nd, normal_pdf_nd,
    normal_quantile_nd, normal_sf_nd,
};

macro_rules! impl_normal_kernel {
    ($(#[$meta:meta])* $name:ident, $body:ident) => {
        $(#[$meta])*
        pub fn $name<'a>(
            x: impl Into<Operand<'a>>,
            loc: impl Into<Operand<'a>>,
            scale: impl Into<Operand<'a>>,
        ) -> Result<DynTensor, KernelError> {
            let promoted = promote_args(stringify!($name), &x.into(), &loc.into(), &scale.into())?;
            dispatch_promoted!(promoted, |x, loc, scale| $body(&x, &loc, &scale))
        }
    };
}

impl_normal_kernel!(
    /// Normal log-density.
    normal_logpdf,
    normal_logpdf_nd
);

impl_normal_kernel!(
    /// Normal density.
    normal_pdf,
    normal_pdf_nd
);

impl_normal_kernel!(
    /// Normal cumulative distribution function.
    normal_cdf,
    normal_cdf_nd
);

impl_normal_kernel!(
    /// Log of the normal CDF. Accurate far into the left tail where the CDF
    /// itself underflows to `0`.
    normal_logcdf,
    normal_logcdf_nd
);

impl_normal_kernel!(
    /// Normal survival function `1 - cdf`.
    normal_sf,
    normal_sf_nd
);

impl_normal_kernel!(
    /// Log of the normal survival function.
    normal_logsf,
    normal_logsf_nd
);

impl_normal_kernel!(
    /// Normal quantile (inverse CDF). `x` holds probabilities.
    ///
    /// `0` maps to `-inf`, `1` to `+inf`, anything outside `[0, 1]` to `NaN`.
    normal_quantile,
    normal_quantile_nd
);

#[cfg(test)]
mod tests {
    use minarrow::{Bitmask, FloatArray, IntegerArray, vec64};

    use super::*;
    use crate::kernels::scientific::distributions::shared::scalar::{
        normal_cdf_scalar, normal_logpdf_scalar,
    };
    use crate::structs::shape::Shape;
    use crate::structs::tensor::DType;

    fn assert_close(a: f64, b: f64, tol: f64) {
        assert!(
            (a - b).abs() < tol || (a.is_nan() && b.is_nan()),
            "{} vs {} (tol {})",
            a,
            b,
            tol
        );
    }

    fn f64_values(out: &DynTensor) -> Vec<f64> {
        out.as_f64().unwrap().values().to_vec()
    }

    // normal_logpdf

    #[test]
    fn logpdf_standard_scipy_values() {
        // scipy.stats.norm.logpdf([-3, -1, 0, 1, 3])
        let x = vec64![-3.0, -1.0, 0.0, 1.0, 3.0];
        let expect = [
            -5.418938533204673,
            -1.4189385332046727,
            -0.9189385332046728,
            -1.4189385332046727,
            -5.418938533204673,
        ];
        let out = normal_logpdf(&x, 0.0, 1.0).unwrap();
        assert_eq!(out.dtype(), DType::Float64);
        assert_eq!(out.shape(), &Shape::vector(5));
        for (a, e) in f64_values(&out).iter().zip(expect.iter()) {
            assert_close(*a, *e, 1e-14);
        }
    }

    #[test]
    fn logpdf_location_scale() {
        // scipy.stats.norm.logpdf([0, 1, 2, 5], loc=2, scale=3)
        let x = [0.0_f64, 1.0, 2.0, 5.0];
        let expect = [
            -2.2397730440950046,
            -2.073106377428338,
            -2.0175508218727822,
            -2.5175508218727822,
        ];
        let out = normal_logpdf(&x, 2.0, 3.0).unwrap();
        for (a, e) in f64_values(&out).iter().zip(expect.iter()) {
            assert_close(*a, *e, 1e-14);
        }
    }

    #[test]
    fn logpdf_far_tails_stay_finite() {
        // scipy.stats.norm.logpdf([-100, -40, 40, 1e5])
        let x = [-100.0_f64, -40.0, 40.0, 1e5];
        let expect = [
            -5000.918938533205,
            -800.9189385332047,
            -800.9189385332047,
            -5000000000.918939,
        ];
        let out = normal_logpdf(&x, 0.0, 1.0).unwrap();
        for (a, e) in f64_values(&out).iter().zip(expect.iter()) {
            assert!(((a - e) / e).abs() < 1e-14);
        }
    }

    #[test]
    fn logpdf_matches_scalar_reference() {
        let x = [-2.5_f64, -0.3, 0.0, 0.9, 4.2];
        let out = normal_logpdf(&x, 0.4, 1.7).unwrap();
        for (a, &xi) in f64_values(&out).iter().zip(x.iter()) {
            assert_close(*a, normal_logpdf_scalar(xi, 0.4, 1.7), 1e-15);
        }
    }

    // normal_pdf

    #[test]
    fn pdf_broadcast_grid() {
        let x = [-1.0_f64, 0.0, 1.0];
        let locs = [0.0_f64, 1.0];
        let loc = Operand::from(&locs).with_shape([2, 1]).unwrap();
        let out = normal_pdf(&x, loc, 1.0).unwrap();
        assert_eq!(out.shape(), &Shape::new([2, 3]));
        let expect = [
            0.24197072451914334,
            0.3989422804014327,
            0.24197072451914334,
            0.05399096651318805,
            0.24197072451914334,
            0.3989422804014327,
        ];
        for (a, e) in f64_values(&out).iter().zip(expect.iter()) {
            assert_close(*a, *e, 1e-15);
        }
    }

    #[test]
    fn pdf_peak_and_underflow() {
        let out = normal_pdf(&[2.0_f64, 2.0 + 3.0 * 40.0], 2.0, 3.0).unwrap();
        let v = f64_values(&out);
        assert_close(v[0], 0.13298076013381088, 1e-15);
        assert_eq!(v[1], 0.0);
    }

    // normal_cdf / normal_logcdf

    #[test]
    fn cdf_location_scale() {
        // scipy.stats.norm.cdf([-5, 0, 1, 3], loc=1, scale=2)
        let x = [-5.0_f64, 0.0, 1.0, 3.0];
        let expect = [
            0.0013498980316300946,
            0.3085375387259869,
            0.5,
            0.8413447460685429,
        ];
        let out = normal_cdf(&x, 1.0, 2.0).unwrap();
        for (a, e) in f64_values(&out).iter().zip(expect.iter()) {
            assert_close(*a, *e, 1e-15);
        }
    }

    #[test]
    fn cdf_left_tail_relative_precision() {
        let out = normal_cdf(&[-10.0_f64, -20.0, -40.0], 0.0, 1.0).unwrap();
        let v = f64_values(&out);
        assert!(((v[0] - 7.619853024160525e-24) / 7.619853024160525e-24).abs() < 1e-12);
        assert!(((v[1] - 2.7536241186062337e-89) / 2.7536241186062337e-89).abs() < 1e-12);
        assert_eq!(v[2], 0.0);
    }

    #[test]
    fn logcdf_central_and_tails() {
        // scipy.stats.norm.logcdf([-2, -1, 0, 1, 2])
        let x = [-2.0_f64, -1.0, 0.0, 1.0, 2.0];
        let expect = [
            -3.783184333682032,
            -1.8410216450092636,
            -0.6931471805599453,
            -0.17275377902344988,
            -0.02301290932896349,
        ];
        let out = normal_logcdf(&x, 0.0, 1.0).unwrap();
        for (a, e) in f64_values(&out).iter().zip(expect.iter()) {
            assert_close(*a, *e, 1e-14);
        }

        // scipy.stats.norm.logcdf([-10, -20, -30, -40, -100])
        let x = [-10.0_f64, -20.0, -30.0, -40.0, -100.0];
        let expect = [
            -53.23128515051247,
            -203.91715537109727,
            -454.3212439563432,
            -804.6084420137538,
            -5005.524208694205,
        ];
        let out = normal_logcdf(&x, 0.0, 1.0).unwrap();
        for (a, e) in f64_values(&out).iter().zip(expect.iter()) {
            assert!(((a - e) / e).abs() < 1e-10, "{} vs {}", a, e);
        }
    }

    #[test]
    fn logcdf_upper_tail() {
        // scipy.stats.norm.logcdf([5, 8, 10])
        let out = normal_logcdf(&[5.0_f64, 8.0, 10.0], 0.0, 1.0).unwrap();
        let expect = [
            -2.866516129637636e-07,
            -6.220960574271786e-16,
            -7.619853024160525e-24,
        ];
        for (a, e) in f64_values(&out).iter().zip(expect.iter()) {
            assert_close(*a, *e, 1e-15);
        }
    }

    #[test]
    fn logcdf_infinities() {
        let out = normal_logcdf(&[f64::NEG_INFINITY, f64::INFINITY, f64::NAN], 0.0, 1.0).unwrap();
        let v = f64_values(&out);
        assert_eq!(v[0], f64::NEG_INFINITY);
        assert_eq!(v[1], 0.0);
        assert!(v[2].is_nan());
    }

    // normal_sf / normal_logsf

    #[test]
    fn sf_and_logsf_values() {
        // scipy.stats.norm.sf([-2, -1, 0, 1, 2, 10])
        let x = [-2.0_f64, -1.0, 0.0, 1.0, 2.0, 10.0];
        let expect = [
            0.9772498680518208,
            0.8413447460685429,
            0.5,
            0.15865525393145705,
            0.02275013194817921,
            7.619853024160525e-24,
        ];
        let out = normal_sf(&x, 0.0, 1.0).unwrap();
        for (a, e) in f64_values(&out).iter().zip(expect.iter()) {
            assert!((a - e).abs() <= 1e-15 * e.max(1e-300) + 1e-16);
        }

        // scipy.stats.norm.logsf([-2, 0, 1, 10, 40])
        let x = [-2.0_f64, 0.0, 1.0, 10.0, 40.0];
        let expect = [
            -0.02301290932896349,
            -0.6931471805599453,
            -1.8410216450092636,
            -53.23128515051247,
            -804.6084420137538,
        ];
        let out = normal_logsf(&x, 0.0, 1.0).unwrap();
        for (a, e) in f64_values(&out).iter().zip(expect.iter()) {
            assert!(((a - e) / e).abs() < 1e-10);
        }
    }

    // normal_quantile

    #[test]
    fn quantile_scipy_values() {
        // scipy.stats.norm.ppf([0.001, 0.025, 0.5, 0.975, 0.999])
        let p = [0.001_f64, 0.025, 0.5, 0.975, 0.999];
        let expect = [
            -3.0902323061678136,
            -1.9599639845400543,
            0.0,
            1.9599639845400543,
            3.0902323061678136,
        ];
        let out = normal_quantile(&p, 0.0, 1.0).unwrap();
        for (a, e) in f64_values(&out).iter().zip(expect.iter()) {
            assert_close(*a, *e, 1e-13);
        }
    }

    #[test]
    fn quantile_domain_edges() {
        let p = [0.0_f64, 1.0, -0.1, 1.1, f64::NAN];
        let v = f64_values(&normal_quantile(&p, 3.0, 2.0).unwrap());
        assert_eq!(v[0], f64::NEG_INFINITY);
        assert_eq!(v[1], f64::INFINITY);
        assert!(v[2].is_nan() && v[3].is_nan() && v[4].is_nan());
    }

    #[test]
    fn quantile_inverts_cdf() {
        let x = [-2.0_f64, -0.5, 0.0, 1.2, 2.0];
        let cdf = normal_cdf(&x, 1.0, 0.5).unwrap();
        let back = normal_quantile(&cdf, 1.0, 0.5).unwrap();
        for (a, e) in f64_values(&back).iter().zip(x.iter()) {
            assert_close(*a, *e, 1e-9);
        }
    }

    // Promotion and nulls

    #[test]
    fn f32_input_stays_f32() {
        let x = [-1.0_f32, 0.0, 1.0];
        let out = normal_logpdf(&x, 0.0, 1.0).unwrap();
        assert_eq!(out.dtype(), DType::Float32);
        let v = out.as_f32().unwrap().values();
        assert!((v[1] as f64 + 0.9189385332046728).abs() < 1e-6);
        assert!((v[0] as f64 + 1.4189385332046727).abs() < 1e-6);
    }

    #[test]
    fn f32_logcdf_far_tail() {
        let x = [-10.0_f32, -20.0];
        let out = normal_logcdf(&x, 0.0_f32, 1.0_f32).unwrap();
        let v = out.as_f32().unwrap().values();
        assert!(((v[0] as f64 + 53.23128515051247) / 53.23128515051247).abs() < 1e-5);
        assert!(((v[1] as f64 + 203.91715537109727) / 203.91715537109727).abs() < 1e-5);
    }

    #[test]
    fn mixed_f32_f64_promotes_to_f64() {
        let x = [0.5_f32];
        let loc = [0.0_f64];
        let out = normal_cdf(&x, &loc, 1.0).unwrap();
        assert_eq!(out.dtype(), DType::Float64);
        assert_close(f64_values(&out)[0], 0.6914624612740131, 1e-15);
    }

    #[test]
    fn integer_input_promotes_to_f64() {
        let arr = IntegerArray::<i64>::from_slice(&[-1, 0, 1]);
        let out = normal_pdf(&arr, 0_i32, 1_i32).unwrap();
        assert_eq!(out.dtype(), DType::Float64);
        assert_close(f64_values(&out)[1], 0.3989422804014327, 1e-15);
    }

    #[test]
    fn all_scalar_inputs_give_rank_zero() {
        let out = normal_cdf(0.5_f64, 0.0_f64, 1.0_f64).unwrap();
        assert!(out.shape().is_scalar());
        assert_eq!(f64_values(&out)[0], normal_cdf_scalar(0.5, 0.0, 1.0));
    }

    #[test]
    fn nulls_propagate() {
        let mut mask = Bitmask::new_set_all(3, true);
        mask.set(1, false);
        let x = FloatArray::<f64> {
            data: vec64![0.0, 1.0, 2.0].into(),
            null_mask: Some(mask),
        };
        let out = normal_logpdf(&x, 0.0, 1.0).unwrap();
        assert!(out.is_valid(0));
        assert!(!out.is_valid(1));
        assert!(out.is_valid(2));
        assert!(f64_values(&out)[1].is_nan());
    }

    #[test]
    fn null_in_scale_masks_whole_row() {
        let mut mask = Bitmask::new_set_all(2, true);
        mask.set(0, false);
        let scales = FloatArray::<f64> {
            data: vec64![1.0, 2.0].into(),
            null_mask: Some(mask),
        };
        let scale = Operand::from(&scales).with_shape([2, 1]).unwrap();
        let out = normal_cdf(&[0.0_f64, 1.0], 0.0, scale).unwrap();
        assert_eq!(out.shape(), &Shape::new([2, 2]));
        assert!(!out.is_valid(0) && !out.is_valid(1));
        assert!(out.is_valid(2) && out.is_valid(3));
    }

    #[test]
    fn incompatible_shapes_error() {
        let err = normal_logpdf(&[1.0_f64, 2.0, 3.0], &[0.0_f64, 1.0], 1.0).unwrap_err();
        assert_eq!(
            err,
            KernelError::ShapeMismatch(
                "normal_logpdf => operands could not be broadcast together with shapes (3,) (2,)"
                    .into()
            )
        );
    }

    #[test]
    fn empty_input() {
        let x: [f64; 0] = [];
        let out = normal_pdf(&x, 0.0, 1.0).unwrap();
        assert!(out.is_empty());
        assert_eq!(out.shape(), &Shape::vector(0));
    }

    #[test]
    fn zero_scale_is_nan_not_error() {
        let out = normal_logpdf(&[1.0_f64, 2.0], 1.0, 0.0).unwrap();
        assert!(f64_values(&out).iter().all(|v| v.is_nan()));
    }
}
