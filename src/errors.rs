// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Types** - *Kernel Operation Error Handling*
//!
//! Error types for kernel operations with structured error reporting.
//!
//! Numerical anomalies (division by zero, `ln` of a negative number, overflow)
//! are **not** errors in this crate: they surface as IEEE-754 `inf`/`NaN` values.
//! Errors are reserved for structural problems with the inputs.
//!
//! ## Error Categories
//! - **Type Errors**: a dtype-erased result requested as the wrong float type
//! - **Length Errors**: a buffer whose length disagrees with its declared shape
//! - **Shape Errors**: operands that cannot be broadcast together
//! - **Argument Errors**: malformed shapes or reshape requests

use core::fmt;
use std::error::Error;

use crate::structs::shape::Shape;

/// Error type for all kernel operations.
///
/// Each variant includes a contextual message string providing specific details
/// about the error condition, prefixed by the kernel that raised it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// Data type mismatch, e.g. reading an `f32` result as `f64`.
    TypeMismatch(String),

    /// Buffer length does not match the element count of its shape.
    LengthMismatch(String),

    /// Operand shapes are not broadcast-compatible.
    ShapeMismatch(String),

    /// Invalid arguments provided to a kernel function.
    InvalidArguments(String),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::TypeMismatch(msg) => write!(f, "Type mismatch: {}", msg),
            KernelError::LengthMismatch(msg) => write!(f, "Length mismatch: {}", msg),
            KernelError::ShapeMismatch(msg) => write!(f, "Shape mismatch: {}", msg),
            KernelError::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
        }
    }
}

impl Error for KernelError {}

/// Creates a formatted error message for a buffer whose length disagrees with
/// the number of elements its shape describes.
///
/// # Arguments
/// * `fname` - Function name where the mismatch occurred
/// * `len` - Length of the data buffer
/// * `expected` - Element count implied by the shape
pub fn log_length_mismatch(fname: &str, len: usize, expected: usize) -> String {
    format!("{} => buffer has {} elements, shape expects {}", fname, len, expected)
}

/// Creates a formatted error message for two shapes that cannot be broadcast.
pub fn log_shape_mismatch(fname: &str, lhs: &Shape, rhs: &Shape) -> String {
    format!(
        "{} => operands could not be broadcast together with shapes {} {}",
        fname, lhs, rhs
    )
}
