// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Arithmetic Dispatch Module** - *Broadcasting Dispatch Layer for Float Primitives*
//!
//! Entry points for the binary elementwise primitives over [`Tensor`]s.
//!
//! ## Overview
//! - **Dense fast path**: equal shapes and no validity masks go straight to the
//!   contiguous body (`KernelFloat::dense_binary`), SIMD-accelerated when the
//!   `simd` feature is enabled and inputs are 64-byte aligned.
//! - **Broadcast path**: shapes are combined with NumPy rules and each operand is
//!   read through a [`BroadcastOffsets`] iterator, so nothing is materialised.
//! - **Null-aware**: output validity is the AND of the broadcast input masks.
//!   Null lanes hold `NaN`. Without input masks the output carries none.

use log::trace;
use minarrow::{Bitmask, Vec64};

use crate::errors::KernelError;
use crate::kernels::arithmetic::std::float_scalar_op;
use crate::operators::ArithmeticOperator;
use crate::structs::shape::{BroadcastOffsets, Shape, broadcast_shapes};
use crate::structs::tensor::Tensor;
use crate::traits::kernel_float::KernelFloat;
use crate::utils::is_valid;

/// Performs an element-wise float `ArithmeticOperator` on two broadcastable tensors.
///
/// Returns `KernelError::ShapeMismatch` when the shapes cannot be broadcast together.
pub fn apply_float<T: KernelFloat>(
    lhs: &Tensor<T>,
    rhs: &Tensor<T>,
    op: ArithmeticOperator,
) -> Result<Tensor<T>, KernelError> {
    let out_shape = broadcast_shapes(lhs.shape(), rhs.shape())?;

    if lhs.shape() == rhs.shape() && lhs.null_mask().is_none() && rhs.null_mask().is_none() {
        let data = T::dense_binary(op, lhs.values(), rhs.values());
        return Ok(Tensor::from_parts(data, None, out_shape));
    }

    trace!(
        "apply_float {:?} => broadcasting {} and {} to {}",
        op,
        lhs.shape(),
        rhs.shape(),
        out_shape
    );
    Ok(broadcast_body(lhs, rhs, op, out_shape))
}

/// General path: strided reads with zero strides on broadcast axes.
fn broadcast_body<T: KernelFloat>(
    lhs: &Tensor<T>,
    rhs: &Tensor<T>,
    op: ArithmeticOperator,
    out_shape: Shape,
) -> Tensor<T> {
    let n = out_shape.numel();
    let l_vals = lhs.values();
    let r_vals = rhs.values();
    let l_mask = lhs.null_mask();
    let r_mask = rhs.null_mask();
    let masked = l_mask.is_some() || r_mask.is_some();

    let mut out = Vec64::with_capacity(n);
    let mut out_mask = if masked {
        Some(Bitmask::new_set_all(n, true))
    } else {
        None
    };

    let l_idx = BroadcastOffsets::new(lhs.shape(), &out_shape);
    let r_idx = BroadcastOffsets::new(rhs.shape(), &out_shape);
    for (i, (li, ri)) in l_idx.zip(r_idx).enumerate() {
        let valid = is_valid(l_mask, li) && is_valid(r_mask, ri);
        if valid {
            out.push(float_scalar_op(op, l_vals[li], r_vals[ri]));
        } else {
            out.push(T::nan());
            if let Some(m) = out_mask.as_mut() {
                m.set(i, false);
            }
        }
    }
    Tensor::from_parts(out, out_mask, out_shape)
}

/// `lhs + rhs`
#[inline]
pub fn add<T: KernelFloat>(lhs: &Tensor<T>, rhs: &Tensor<T>) -> Result<Tensor<T>, KernelError> {
    apply_float(lhs, rhs, ArithmeticOperator::Add)
}

/// `lhs - rhs`
#[inline]
pub fn sub<T: KernelFloat>(lhs: &Tensor<T>, rhs: &Tensor<T>) -> Result<Tensor<T>, KernelError> {
    apply_float(lhs, rhs, ArithmeticOperator::Subtract)
}

/// `lhs * rhs`
#[inline]
pub fn mul<T: KernelFloat>(lhs: &Tensor<T>, rhs: &Tensor<T>) -> Result<Tensor<T>, KernelError> {
    apply_float(lhs, rhs, ArithmeticOperator::Multiply)
}

/// `lhs / rhs`
#[inline]
pub fn div<T: KernelFloat>(lhs: &Tensor<T>, rhs: &Tensor<T>) -> Result<Tensor<T>, KernelError> {
    apply_float(lhs, rhs, ArithmeticOperator::Divide)
}

/// `lhs ^ rhs`
#[inline]
pub fn pow<T: KernelFloat>(lhs: &Tensor<T>, rhs: &Tensor<T>) -> Result<Tensor<T>, KernelError> {
    apply_float(lhs, rhs, ArithmeticOperator::Power)
}
