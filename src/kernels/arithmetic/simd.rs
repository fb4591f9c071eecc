// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **SIMD Arithmetic Kernels Module** - *Vectorised Float Primitives*
//!
//! Inner SIMD-accelerated implementations using `std::simd`. Lane counts come from
//! `build.rs` (`W32` for `f32`, `W64` for `f64`).
//!
//! ## Architecture Notes
//! - Inputs must be 64-byte aligned, which is automatic for minarrow `Vec64` buffers.
//!   Unaligned slices (e.g. borrowed `&[f64]` operands) take the scalar body.
//! - `Power` is always evaluated lane by lane with `powf`.
//! - Parallelisation intentionally excluded to allow flexible chunking strategies

include!(concat!(env!("OUT_DIR"), "/simd_lanes.rs"));

use core::simd::Simd;
use std::simd::StdFloat;

use log::debug;
use minarrow::Vec64;

use crate::kernels::arithmetic::std::{
    float_dense_body_std, float_scalar_op, unary_dense_body_std, unary_scalar_op,
};
use crate::operators::{ArithmeticOperator, UnaryOperator};
use crate::utils::is_simd_aligned;

/// Generates a dense SIMD binary body for one float type.
macro_rules! impl_float_dense_simd {
    ($fn_name:ident, $ty:ty, $lanes:expr) => {
        #[doc = concat!(
            "SIMD `", stringify!($ty), "` arithmetic kernel for dense, same-length arrays. ",
            "Falls back to the scalar body for unaligned inputs and `Power`."
        )]
        #[inline(always)]
        pub fn $fn_name(op: ArithmeticOperator, lhs: &[$ty], rhs: &[$ty]) -> Vec64<$ty> {
            const LANES: usize = $lanes;
            debug_assert_eq!(lhs.len(), rhs.len());
            if op == ArithmeticOperator::Power {
                return float_dense_body_std(op, lhs, rhs);
            }
            if !(is_simd_aligned(lhs) && is_simd_aligned(rhs)) {
                debug!(
                    "{} => unaligned input of {} lanes, using scalar body",
                    stringify!($fn_name),
                    lhs.len()
                );
                return float_dense_body_std(op, lhs, rhs);
            }
            let n = lhs.len();
            let mut out = Vec64::with_capacity(n);
            out.resize(n, 0.0);
            let dst = out.as_mut_slice();
            let mut i = 0;
            while i + LANES <= n {
                let a = Simd::<$ty, LANES>::from_slice(&lhs[i..i + LANES]);
                let b = Simd::<$ty, LANES>::from_slice(&rhs[i..i + LANES]);
                let res = match op {
                    ArithmeticOperator::Add => a + b,
                    ArithmeticOperator::Subtract => a - b,
                    ArithmeticOperator::Multiply => a * b,
                    ArithmeticOperator::Divide => a / b,
                    ArithmeticOperator::Power => unreachable!(),
                };
                res.copy_to_slice(&mut dst[i..i + LANES]);
                i += LANES;
            }
            // Tail often caused by `n % LANES != 0`; uses scalar fallback
            for j in i..n {
                dst[j] = float_scalar_op(op, lhs[j], rhs[j]);
            }
            out
        }
    };
}

/// Generates a dense SIMD unary body for one float type.
macro_rules! impl_unary_dense_simd {
    ($fn_name:ident, $ty:ty, $lanes:expr) => {
        #[doc = concat!(
            "SIMD `", stringify!($ty), "` unary kernel for dense arrays. ",
            "Falls back to the scalar body for unaligned inputs."
        )]
        #[inline(always)]
        pub fn $fn_name(op: UnaryOperator, x: &[$ty]) -> Vec64<$ty> {
            const LANES: usize = $lanes;
            if !is_simd_aligned(x) {
                debug!(
                    "{} => unaligned input of {} lanes, using scalar body",
                    stringify!($fn_name),
                    x.len()
                );
                return unary_dense_body_std(op, x);
            }
            let n = x.len();
            let mut out = Vec64::with_capacity(n);
            out.resize(n, 0.0);
            let dst = out.as_mut_slice();
            let mut i = 0;
            while i + LANES <= n {
                let v = Simd::<$ty, LANES>::from_slice(&x[i..i + LANES]);
                let res = match op {
                    UnaryOperator::Negate => -v,
                    UnaryOperator::Log => v.ln(),
                    UnaryOperator::Exp => v.exp(),
                };
                res.copy_to_slice(&mut dst[i..i + LANES]);
                i += LANES;
            }
            for j in i..n {
                dst[j] = unary_scalar_op(op, x[j]);
            }
            out
        }
    };
}

impl_float_dense_simd!(float_dense_body_f32_simd, f32, W32);
impl_float_dense_simd!(float_dense_body_f64_simd, f64, W64);
impl_unary_dense_simd!(unary_dense_body_f32_simd, f32, W32);
impl_unary_dense_simd!(unary_dense_body_f64_simd, f64, W64);
