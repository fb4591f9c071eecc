// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Generic tensor bodies of the normal kernels.
//!
//! Inputs are already promoted: one element type, equal rank, broadcast
//! compatible. Every step is an elementwise primitive, so outputs take the
//! broadcast shape of `(x, loc, scale)` and propagate nulls.

use crate::errors::KernelError;
use crate::kernels::arithmetic::{add, div, mul, pow, sub};
use crate::kernels::promote::constant_like;
use crate::kernels::scientific::distributions::shared::constants::TWO_PI;
use crate::kernels::scientific::special::{log_ndtr_nd, ndtr_nd, ndtri_nd};
use crate::kernels::unary::{exp, log, neg};
use crate::structs::tensor::Tensor;
use crate::traits::kernel_float::KernelFloat;

/// `-(ln(2π σ²) + (x - μ)²/σ²) / 2`
pub fn normal_logpdf_nd<T: KernelFloat>(
    x: &Tensor<T>,
    loc: &Tensor<T>,
    scale: &Tensor<T>,
) -> Result<Tensor<T>, KernelError> {
    let two = constant_like(x, 2.0);
    let scale_sq = pow(scale, &two)?;
    let log_normalizer = log(&mul(&constant_like(x, TWO_PI), &scale_sq)?);
    let quadratic = div(&pow(&sub(x, loc)?, &two)?, &scale_sq)?;
    div(&neg(&add(&log_normalizer, &quadratic)?), &two)
}

/// `exp(logpdf)`
pub fn normal_pdf_nd<T: KernelFloat>(
    x: &Tensor<T>,
    loc: &Tensor<T>,
    scale: &Tensor<T>,
) -> Result<Tensor<T>, KernelError> {
    Ok(exp(&normal_logpdf_nd(x, loc, scale)?))
}

/// `z = (x - μ) / σ`
#[inline]
fn standardise<T: KernelFloat>(
    x: &Tensor<T>,
    loc: &Tensor<T>,
    scale: &Tensor<T>,
) -> Result<Tensor<T>, KernelError> {
    div(&sub(x, loc)?, scale)
}

pub fn normal_cdf_nd<T: KernelFloat>(
    x: &Tensor<T>,
    loc: &Tensor<T>,
    scale: &Tensor<T>,
) -> Result<Tensor<T>, KernelError> {
    Ok(ndtr_nd(&standardise(x, loc, scale)?))
}

pub fn normal_logcdf_nd<T: KernelFloat>(
    x: &Tensor<T>,
    loc: &Tensor<T>,
    scale: &Tensor<T>,
) -> Result<Tensor<T>, KernelError> {
    Ok(log_ndtr_nd(&standardise(x, loc, scale)?))
}

pub fn normal_sf_nd<T: KernelFloat>(
    x: &Tensor<T>,
    loc: &Tensor<T>,
    scale: &Tensor<T>,
) -> Result<Tensor<T>, KernelError> {
    Ok(ndtr_nd(&neg(&standardise(x, loc, scale)?)))
}

pub fn normal_logsf_nd<T: KernelFloat>(
    x: &Tensor<T>,
    loc: &Tensor<T>,
    scale: &Tensor<T>,
) -> Result<Tensor<T>, KernelError> {
    Ok(log_ndtr_nd(&neg(&standardise(x, loc, scale)?)))
}

/// `μ + σ Φ⁻¹(q)`
pub fn normal_quantile_nd<T: KernelFloat>(
    q: &Tensor<T>,
    loc: &Tensor<T>,
    scale: &Tensor<T>,
) -> Result<Tensor<T>, KernelError> {
    add(loc, &mul(scale, &ndtri_nd(q))?)
}
