// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Operand Module** - *Borrowed Kernel Inputs of Mixed Numeric Type*
//!
//! [`Operand`] is what the public kernels accept for each of `x`, `loc` and
//! `scale`: either a weakly-typed scalar literal, or a borrowed, shaped view over
//! `f32` / `f64` / `i32` / `i64` data with an optional Arrow validity mask.
//!
//! Views are built with `From` from slices, fixed-size arrays, `Vec`, minarrow
//! `Vec64` / `FloatArray` / `IntegerArray`, and [`Tensor`]s. Flat views are
//! rank 1; [`Operand::with_shape`] reinterprets them as n-d row-major arrays.
//!
//! ```rust,ignore
//! let x = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
//! let grid = Operand::from(&x).with_shape([2, 3])?;
//! ```

use minarrow::{Bitmask, FloatArray, IntegerArray, Vec64};
use num_traits::AsPrimitive;

use crate::errors::KernelError;
use crate::structs::shape::Shape;
use crate::structs::tensor::{DynTensor, Tensor};
use crate::traits::kernel_float::KernelFloat;
use crate::utils::{confirm_len, confirm_mask_len, is_valid};

/// Borrowed, shaped view over typed input data.
#[derive(Debug, Clone)]
pub struct OperandView<'a, T> {
    data: &'a [T],
    null_mask: Option<&'a Bitmask>,
    shape: Shape,
}

impl<'a, T: Copy + AsPrimitive<f64>> OperandView<'a, T> {
    /// Validates that `data` (and `null_mask`, if any) cover `shape`.
    pub fn new(
        data: &'a [T],
        null_mask: Option<&'a Bitmask>,
        shape: Shape,
    ) -> Result<Self, KernelError> {
        confirm_len("OperandView::new", data.len(), shape.numel())?;
        confirm_mask_len("OperandView::new", null_mask, data.len())?;
        Ok(Self {
            data,
            null_mask,
            shape,
        })
    }

    /// Flat rank-1 view.
    #[inline]
    fn flat(data: &'a [T], null_mask: Option<&'a Bitmask>) -> Self {
        Self {
            shape: Shape::vector(data.len()),
            data,
            null_mask,
        }
    }

    #[inline]
    pub fn data(&self) -> &'a [T] {
        self.data
    }

    #[inline]
    pub fn null_mask(&self) -> Option<&'a Bitmask> {
        self.null_mask
    }

    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Converts into an owned tensor of element type `U`.
    ///
    /// Null lanes are written as `NaN` and keep their null bit.
    pub fn to_tensor<U: KernelFloat>(&self) -> Tensor<U> {
        let mask = self.null_mask;
        let data: Vec64<U> = self
            .data
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                if is_valid(mask, i) {
                    U::from_f64_lossy(v.as_())
                } else {
                    U::nan()
                }
            })
            .collect();
        Tensor::from_parts(data, mask.cloned(), self.shape.clone())
    }
}

/// A kernel input: a weakly-typed scalar or a typed array view.
#[derive(Debug, Clone)]
pub enum Operand<'a> {
    /// Python-style scalar literal. Adopts the dtype of the array operands.
    Scalar(f64),
    Float32(OperandView<'a, f32>),
    Float64(OperandView<'a, f64>),
    Int32(OperandView<'a, i32>),
    Int64(OperandView<'a, i64>),
}

impl<'a> Operand<'a> {
    /// Logical shape. Scalars are rank 0.
    pub fn shape(&self) -> Shape {
        match self {
            Operand::Scalar(_) => Shape::scalar(),
            Operand::Float32(v) => v.shape.clone(),
            Operand::Float64(v) => v.shape.clone(),
            Operand::Int32(v) => v.shape.clone(),
            Operand::Int64(v) => v.shape.clone(),
        }
    }

    #[inline]
    pub fn is_scalar(&self) -> bool {
        matches!(self, Operand::Scalar(_))
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        matches!(self, Operand::Int32(_) | Operand::Int64(_))
    }

    /// Reinterprets the view with a row-major shape of the same element count.
    ///
    /// Scalar literals only accept the rank-0 shape.
    pub fn with_shape(self, shape: impl Into<Shape>) -> Result<Self, KernelError> {
        let shape = shape.into();
        match self {
            Operand::Scalar(v) => {
                if shape.is_scalar() {
                    Ok(Operand::Scalar(v))
                } else {
                    Err(KernelError::InvalidArguments(format!(
                        "with_shape => scalar literal cannot take shape {}",
                        shape
                    )))
                }
            }
            Operand::Float32(v) => Ok(Operand::Float32(OperandView::new(v.data, v.null_mask, shape)?)),
            Operand::Float64(v) => Ok(Operand::Float64(OperandView::new(v.data, v.null_mask, shape)?)),
            Operand::Int32(v) => Ok(Operand::Int32(OperandView::new(v.data, v.null_mask, shape)?)),
            Operand::Int64(v) => Ok(Operand::Int64(OperandView::new(v.data, v.null_mask, shape)?)),
        }
    }

    /// Converts into an owned tensor of element type `T`.
    pub fn to_tensor<T: KernelFloat>(&self) -> Tensor<T> {
        match self {
            Operand::Scalar(v) => Tensor::scalar(T::from_f64_lossy(*v)),
            Operand::Float32(v) => v.to_tensor(),
            Operand::Float64(v) => v.to_tensor(),
            Operand::Int32(v) => v.to_tensor(),
            Operand::Int64(v) => v.to_tensor(),
        }
    }
}

// Scalars

macro_rules! impl_from_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand<'_> {
                #[inline]
                fn from(v: $ty) -> Self {
                    Operand::Scalar(v as f64)
                }
            }
        )*
    };
}

impl_from_scalar!(f32, f64, i32, i64);

// Borrowed buffers

macro_rules! impl_from_buffers {
    ($ty:ty, $variant:ident) => {
        impl<'a> From<&'a [$ty]> for Operand<'a> {
            #[inline]
            fn from(data: &'a [$ty]) -> Self {
                Operand::$variant(OperandView::flat(data, None))
            }
        }

        impl<'a, const N: usize> From<&'a [$ty; N]> for Operand<'a> {
            #[inline]
            fn from(data: &'a [$ty; N]) -> Self {
                Operand::$variant(OperandView::flat(data.as_slice(), None))
            }
        }

        impl<'a> From<&'a Vec<$ty>> for Operand<'a> {
            #[inline]
            fn from(data: &'a Vec<$ty>) -> Self {
                Operand::$variant(OperandView::flat(data.as_slice(), None))
            }
        }

        impl<'a> From<&'a Vec64<$ty>> for Operand<'a> {
            #[inline]
            fn from(data: &'a Vec64<$ty>) -> Self {
                Operand::$variant(OperandView::flat(data.as_slice(), None))
            }
        }
    };
}

impl_from_buffers!(f32, Float32);
impl_from_buffers!(f64, Float64);
impl_from_buffers!(i32, Int32);
impl_from_buffers!(i64, Int64);

// Minarrow arrays

impl<'a> From<&'a FloatArray<f32>> for Operand<'a> {
    fn from(arr: &'a FloatArray<f32>) -> Self {
        Operand::Float32(OperandView::flat(arr.data.as_slice(), arr.null_mask.as_ref()))
    }
}

impl<'a> From<&'a FloatArray<f64>> for Operand<'a> {
    fn from(arr: &'a FloatArray<f64>) -> Self {
        Operand::Float64(OperandView::flat(arr.data.as_slice(), arr.null_mask.as_ref()))
    }
}

impl<'a> From<&'a IntegerArray<i32>> for Operand<'a> {
    fn from(arr: &'a IntegerArray<i32>) -> Self {
        Operand::Int32(OperandView::flat(arr.data.as_slice(), arr.null_mask.as_ref()))
    }
}

impl<'a> From<&'a IntegerArray<i64>> for Operand<'a> {
    fn from(arr: &'a IntegerArray<i64>) -> Self {
        Operand::Int64(OperandView::flat(arr.data.as_slice(), arr.null_mask.as_ref()))
    }
}

// Tensors

impl<'a> From<&'a Tensor<f32>> for Operand<'a> {
    fn from(t: &'a Tensor<f32>) -> Self {
        Operand::Float32(OperandView {
            data: t.values(),
            null_mask: t.null_mask(),
            shape: t.shape().clone(),
        })
    }
}

impl<'a> From<&'a Tensor<f64>> for Operand<'a> {
    fn from(t: &'a Tensor<f64>) -> Self {
        Operand::Float64(OperandView {
            data: t.values(),
            null_mask: t.null_mask(),
            shape: t.shape().clone(),
        })
    }
}

impl<'a> From<&'a DynTensor> for Operand<'a> {
    fn from(t: &'a DynTensor) -> Self {
        match t {
            DynTensor::F32(t) => Operand::from(t),
            DynTensor::F64(t) => Operand::from(t),
        }
    }
}
