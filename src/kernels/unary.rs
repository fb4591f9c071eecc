// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Unary Operations Kernels Module** - *Single-Tensor Transformations*
//!
//! Elementwise `log`, `exp` and `neg` over float tensors, plus [`map_unary`], the
//! generic null-aware helper used by the special-function wrappers.
//!
//! ### Null handling
//! - Null lanes produce `NaN` and stay null in the output mask.
//! - Any `NaN` or `inf` values generated by the function are kept verbatim,
//!   without nulling them in the mask, given that:
//!   1. These values can represent additional data signal.
//!   2. Handling them requires additional CPU cycles on the hot path.

use minarrow::{Bitmask, Vec64};

use crate::operators::UnaryOperator;
use crate::structs::tensor::Tensor;
use crate::traits::kernel_float::KernelFloat;

/// Dense kernel helper. Applies `scalar_body` to every lane.
#[inline(always)]
fn dense_unary_kernel<T, F>(x: &[T], scalar_body: F) -> Vec64<T>
where
    T: KernelFloat,
    F: Fn(T) -> T,
{
    let mut out = Vec64::with_capacity(x.len());
    for &xi in x {
        out.push(scalar_body(xi));
    }
    out
}

/// Null-aware masked kernel helper. The input mask is propagated as-is.
#[inline(always)]
fn masked_unary_kernel<T, F>(x: &[T], mask: &Bitmask, scalar_body: F) -> (Vec64<T>, Bitmask)
where
    T: KernelFloat,
    F: Fn(T) -> T,
{
    let mut out = Vec64::with_capacity(x.len());
    for (idx, &xi) in x.iter().enumerate() {
        if mask.get(idx) {
            out.push(scalar_body(xi));
        } else {
            out.push(T::nan());
        }
    }
    (out, mask.clone())
}

/// Applies `f` to every valid lane of `x`, keeping its shape and validity.
pub fn map_unary<T, F>(x: &Tensor<T>, f: F) -> Tensor<T>
where
    T: KernelFloat,
    F: Fn(T) -> T,
{
    match x.null_mask() {
        None => Tensor::from_parts(dense_unary_kernel(x.values(), f), None, x.shape().clone()),
        Some(mask) => {
            let (data, out_mask) = masked_unary_kernel(x.values(), mask, f);
            Tensor::from_parts(data, Some(out_mask), x.shape().clone())
        }
    }
}

/// Applies a [`UnaryOperator`] elementwise. Dense inputs use the SIMD body when enabled.
pub fn apply_unary<T: KernelFloat>(x: &Tensor<T>, op: UnaryOperator) -> Tensor<T> {
    match x.null_mask() {
        None => Tensor::from_parts(T::dense_unary(op, x.values()), None, x.shape().clone()),
        Some(_) => map_unary(x, |v| match op {
            UnaryOperator::Negate => -v,
            UnaryOperator::Log => v.ln(),
            UnaryOperator::Exp => v.exp(),
        }),
    }
}

/// Natural logarithm.
#[inline]
pub fn log<T: KernelFloat>(x: &Tensor<T>) -> Tensor<T> {
    apply_unary(x, UnaryOperator::Log)
}

/// Exponential.
#[inline]
pub fn exp<T: KernelFloat>(x: &Tensor<T>) -> Tensor<T> {
    apply_unary(x, UnaryOperator::Exp)
}

/// Negation.
#[inline]
pub fn neg<T: KernelFloat>(x: &Tensor<T>) -> Tensor<T> {
    apply_unary(x, UnaryOperator::Negate)
}
