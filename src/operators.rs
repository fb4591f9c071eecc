// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Contains the elementwise operators for matching and routing purposes

/// Binary arithmetic operators for floating-point tensors.
///
/// All operators follow IEEE 754: division by zero yields ±Inf or NaN and
/// never panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOperator {
    /// Addition (`lhs + rhs`)
    Add,
    /// Subtraction (`lhs - rhs`)
    Subtract,
    /// Multiplication (`lhs * rhs`)
    Multiply,
    /// Division (`lhs / rhs`)
    Divide,
    /// Exponentiation (`lhs ^ rhs`)
    ///
    /// Uses `powf`, so negative bases with integral exponents are exact,
    /// e.g. `(-3)^2 == 9`.
    Power,
}

/// Unary operators for floating-point tensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Negation (`-x`)
    Negate,
    /// Natural logarithm (`ln x`). `ln 0 == -inf`, `ln x == NaN` for `x < 0`.
    Log,
    /// Exponential (`e^x`). Underflows to `0` for large negative `x`.
    Exp,
}
