// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Standard Arithmetic Kernels Module** - *Scalar Fallback / Non-SIMD Implementations*
//!
//! Portable scalar implementations of the float primitives, used when the `simd`
//! feature is off, when SIMD alignment requirements aren't met, and for the
//! broadcasting path in `dispatch.rs`.
//!
//! ## Design Notes
//! - Intentionally avoids parallelisation to allow higher-level chunking strategies
//! - IEEE 754 throughout: division by zero produces Inf/NaN, never panics

use minarrow::Vec64;
use num_traits::Float;

use crate::operators::{ArithmeticOperator, UnaryOperator};

/// Applies a binary operator to one pair of lanes.
#[inline(always)]
pub fn float_scalar_op<T: Float>(op: ArithmeticOperator, a: T, b: T) -> T {
    match op {
        ArithmeticOperator::Add => a + b,
        ArithmeticOperator::Subtract => a - b,
        ArithmeticOperator::Multiply => a * b,
        ArithmeticOperator::Divide => a / b,
        ArithmeticOperator::Power => a.powf(b),
    }
}

/// Applies a unary operator to one lane.
#[inline(always)]
pub fn unary_scalar_op<T: Float>(op: UnaryOperator, x: T) -> T {
    match op {
        UnaryOperator::Negate => -x,
        UnaryOperator::Log => x.ln(),
        UnaryOperator::Exp => x.exp(),
    }
}

/// Scalar floating-point arithmetic kernel for dense, same-length arrays (no nulls).
#[inline(always)]
pub fn float_dense_body_std<T: Float>(op: ArithmeticOperator, lhs: &[T], rhs: &[T]) -> Vec64<T> {
    debug_assert_eq!(lhs.len(), rhs.len());
    let mut out = Vec64::with_capacity(lhs.len());
    for (&a, &b) in lhs.iter().zip(rhs) {
        out.push(float_scalar_op(op, a, b));
    }
    out
}

/// Scalar unary kernel for dense arrays (no nulls).
#[inline(always)]
pub fn unary_dense_body_std<T: Float>(op: UnaryOperator, x: &[T]) -> Vec64<T> {
    let mut out = Vec64::with_capacity(x.len());
    for &v in x {
        out.push(unary_scalar_op(op, v));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_ops_follow_ieee() {
        assert_eq!(float_scalar_op(ArithmeticOperator::Divide, 1.0_f64, 0.0), f64::INFINITY);
        assert!(float_scalar_op(ArithmeticOperator::Divide, 0.0_f64, 0.0).is_nan());
        assert_eq!(float_scalar_op(ArithmeticOperator::Power, -2.0_f64, 3.0), -8.0);
        assert!(float_scalar_op(ArithmeticOperator::Power, -2.0_f64, 0.5).is_nan());
        assert_eq!(unary_scalar_op(UnaryOperator::Log, 0.0_f64), f64::NEG_INFINITY);
        assert!(unary_scalar_op(UnaryOperator::Log, -1.0_f64).is_nan());
        assert_eq!(unary_scalar_op(UnaryOperator::Exp, -1000.0_f64), 0.0);
    }

    #[test]
    fn dense_bodies() {
        let out = float_dense_body_std(ArithmeticOperator::Subtract, &[3.0_f32, 1.0], &[1.0, 4.0]);
        assert_eq!(out.as_slice(), &[2.0, -3.0]);
        let out = unary_dense_body_std(UnaryOperator::Exp, &[0.0_f64]);
        assert_eq!(out.as_slice(), &[1.0]);
        assert!(unary_dense_body_std::<f64>(UnaryOperator::Negate, &[]).is_empty());
    }
}
