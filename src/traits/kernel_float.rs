// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Kernel Float Trait** - *Element Types for Tensor Kernels*
//!
//! `KernelFloat` is implemented for `f32` and `f64`, the two precisions a
//! promoted tensor can hold. Generic kernels are written once against
//! `num_traits::Float`; the per-type pieces (Minarrow buffer construction,
//! SIMD lane widths, `log_ndtr` branch points) are generated by
//! `impl_kernel_float!`.

use core::fmt::{Debug, Display};

use minarrow::{Bitmask, FloatArray, Vec64};

use crate::config::{
    LOG_NDTR_LOWER_F32, LOG_NDTR_LOWER_F64, LOG_NDTR_UPPER_F32, LOG_NDTR_UPPER_F64,
};
#[cfg(feature = "simd")]
use crate::kernels::arithmetic::simd::{
    float_dense_body_f32_simd, float_dense_body_f64_simd, unary_dense_body_f32_simd,
    unary_dense_body_f64_simd,
};
#[cfg(not(feature = "simd"))]
use crate::kernels::arithmetic::std::{float_dense_body_std, unary_dense_body_std};
use crate::operators::{ArithmeticOperator, UnaryOperator};
use crate::structs::tensor::DType;

/// Floating-point element type of a [`Tensor`](crate::structs::tensor::Tensor).
pub trait KernelFloat:
    num_traits::Float + Copy + Default + Debug + Display + Send + Sync + 'static
{
    /// Runtime tag for this element type.
    const DTYPE: DType;

    /// `log_ndtr` uses the asymptotic series at or below this point.
    const LOG_NDTR_LOWER: f64;

    /// `log_ndtr` uses `-ndtr(-x)` above this point.
    const LOG_NDTR_UPPER: f64;

    /// Narrowing (or identity) conversion from `f64`, `as`-cast semantics.
    fn from_f64_lossy(v: f64) -> Self;

    /// Widening (or identity) conversion to `f64`.
    fn into_f64(self) -> f64;

    /// Builds a Minarrow float array from an owned buffer.
    fn into_array(data: Vec64<Self>, null_mask: Option<Bitmask>) -> FloatArray<Self>;

    /// Borrows the values of a Minarrow float array.
    fn values(arr: &FloatArray<Self>) -> &[Self];

    /// Same-shape, null-free binary kernel. SIMD-accelerated where available.
    fn dense_binary(op: ArithmeticOperator, lhs: &[Self], rhs: &[Self]) -> Vec64<Self>;

    /// Null-free unary kernel. SIMD-accelerated where available.
    fn dense_unary(op: UnaryOperator, x: &[Self]) -> Vec64<Self>;
}

/// Generates the `KernelFloat` implementation for a primitive float type.
macro_rules! impl_kernel_float {
    ($ty:ty, $dtype:expr, $lower:expr, $upper:expr, $simd_bin:ident, $simd_un:ident) => {
        impl KernelFloat for $ty {
            const DTYPE: DType = $dtype;
            const LOG_NDTR_LOWER: f64 = $lower;
            const LOG_NDTR_UPPER: f64 = $upper;

            #[inline(always)]
            fn from_f64_lossy(v: f64) -> Self {
                v as $ty
            }

            #[inline(always)]
            fn into_f64(self) -> f64 {
                self as f64
            }

            #[inline(always)]
            fn into_array(data: Vec64<Self>, null_mask: Option<Bitmask>) -> FloatArray<Self> {
                FloatArray::from_vec64(data, null_mask)
            }

            #[inline(always)]
            fn values(arr: &FloatArray<Self>) -> &[Self] {
                arr.data.as_slice()
            }

            #[inline(always)]
            fn dense_binary(op: ArithmeticOperator, lhs: &[Self], rhs: &[Self]) -> Vec64<Self> {
                #[cfg(feature = "simd")]
                {
                    $simd_bin(op, lhs, rhs)
                }

                #[cfg(not(feature = "simd"))]
                {
                    float_dense_body_std(op, lhs, rhs)
                }
            }

            #[inline(always)]
            fn dense_unary(op: UnaryOperator, x: &[Self]) -> Vec64<Self> {
                #[cfg(feature = "simd")]
                {
                    $simd_un(op, x)
                }

                #[cfg(not(feature = "simd"))]
                {
                    unary_dense_body_std(op, x)
                }
            }
        }
    };
}

impl_kernel_float!(
    f32,
    DType::Float32,
    LOG_NDTR_LOWER_F32,
    LOG_NDTR_UPPER_F32,
    float_dense_body_f32_simd,
    unary_dense_body_f32_simd
);
impl_kernel_float!(
    f64,
    DType::Float64,
    LOG_NDTR_LOWER_F64,
    LOG_NDTR_UPPER_F64,
    float_dense_body_f64_simd,
    unary_dense_body_f64_simd
);
