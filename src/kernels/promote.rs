// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Argument Promotion Module** - *Common Dtype and Rank for Kernel Inputs*
//!
//! Reconciles the `(x, loc, scale)` triple before evaluation:
//!
//! 1. **dtype**: integer arrays promote to `Float64`; otherwise the widest float
//!    array wins. Scalar literals are weakly typed and adopt the array dtype, so
//!    `f32` data with `loc = 0.0` stays `f32`. All-scalar inputs evaluate in `Float64`.
//! 2. **rank**: unit dimensions are prepended so all three share the maximum rank.
//! 3. **shape**: the three shapes must broadcast together, otherwise
//!    `KernelError::ShapeMismatch` is returned, prefixed with the calling kernel.
//!
//! [`constant_like`] materialises literals (`2`, `2π`) as rank-0 tensors of the
//! promoted dtype so later elementwise steps neither upcast nor mismatch.

use log::trace;

use crate::errors::{KernelError, log_shape_mismatch};
use crate::structs::operand::Operand;
use crate::structs::shape::{Shape, broadcast_shapes};
use crate::structs::tensor::{DType, Tensor};
use crate::traits::kernel_float::KernelFloat;

/// The promoted `(x, loc, scale)` triple, in one of the two float precisions.
#[derive(Debug, Clone)]
pub enum Promoted {
    Float32([Tensor<f32>; 3]),
    Float64([Tensor<f64>; 3]),
}

impl Promoted {
    pub fn dtype(&self) -> DType {
        match self {
            Promoted::Float32(_) => DType::Float32,
            Promoted::Float64(_) => DType::Float64,
        }
    }
}

/// Common float dtype of a set of operands.
pub fn result_dtype(operands: &[&Operand<'_>]) -> DType {
    let mut saw_array = false;
    let mut dtype = DType::Float32;
    for op in operands {
        match op {
            Operand::Scalar(_) => {}
            Operand::Float32(_) => saw_array = true,
            Operand::Float64(_) | Operand::Int32(_) | Operand::Int64(_) => {
                saw_array = true;
                dtype = DType::Float64;
            }
        }
    }
    if saw_array { dtype } else { DType::Float64 }
}

/// Broadcast shape of `shapes`, reporting failures against `fname`.
fn broadcast_for(fname: &str, shapes: &[Shape]) -> Result<Shape, KernelError> {
    let mut acc = Shape::scalar();
    for s in shapes {
        acc = broadcast_shapes(&acc, s)
            .map_err(|_| KernelError::ShapeMismatch(log_shape_mismatch(fname, &acc, s)))?;
    }
    Ok(acc)
}

/// Casts and rank-aligns the three operands to element type `T`.
fn promote_to<T: KernelFloat>(
    operands: [&Operand<'_>; 3],
    rank: usize,
) -> Result<[Tensor<T>; 3], KernelError> {
    let [x, loc, scale] = operands.map(|op| {
        let t = op.to_tensor::<T>();
        let aligned = t.shape().with_rank(rank);
        t.reshape(aligned)
    });
    Ok([x?, loc?, scale?])
}

/// Promotes `(x, loc, scale)` to a common dtype and rank.
///
/// `fname` names the calling kernel in error messages.
pub fn promote_args(
    fname: &str,
    x: &Operand<'_>,
    loc: &Operand<'_>,
    scale: &Operand<'_>,
) -> Result<Promoted, KernelError> {
    let shapes = [x.shape(), loc.shape(), scale.shape()];
    let out = broadcast_for(fname, &shapes)?;
    let rank = out.rank();
    let dtype = result_dtype(&[x, loc, scale]);
    trace!(
        "{} => promoting {} {} {} to {:?}, broadcast shape {}",
        fname, shapes[0], shapes[1], shapes[2], dtype, out
    );
    match dtype {
        DType::Float32 => Ok(Promoted::Float32(promote_to([x, loc, scale], rank)?)),
        DType::Float64 => Ok(Promoted::Float64(promote_to([x, loc, scale], rank)?)),
    }
}

/// Rank-0 tensor holding `literal` in the dtype of `reference`.
#[inline]
pub fn constant_like<T: KernelFloat>(_reference: &Tensor<T>, literal: f64) -> Tensor<T> {
    Tensor::scalar(T::from_f64_lossy(literal))
}

/// Runs a generic tensor body on a [`Promoted`] triple and wraps the result as
/// a `DynTensor` of the promoted precision.
macro_rules! dispatch_promoted {
    ($promoted:expr, |$x:ident, $loc:ident, $scale:ident| $body:expr) => {
        match $promoted {
            $crate::kernels::promote::Promoted::Float32([$x, $loc, $scale]) => {
                ($body).map($crate::structs::tensor::DynTensor::F32)
            }
            $crate::kernels::promote::Promoted::Float64([$x, $loc, $scale]) => {
                ($body).map($crate::structs::tensor::DynTensor::F64)
            }
        }
    };
}

pub(crate) use dispatch_promoted;
