// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Arithmetic Kernels Module** - *Broadcasting Float Primitives*
//!
//! Elementwise binary arithmetic for float tensors with null-aware semantics.
//!
//! ## Modules
//! - **`dispatch`**: broadcasting entry points (`apply_float`, `add`, `sub`, `mul`, `div`, `pow`)
//! - **`simd`**: SIMD-accelerated dense bodies using `std::simd`
//! - **`std`**: scalar bodies for compatibility, unaligned data and broadcasting
//!
//! ## Scope
//! **These do not leverage parallel-thread processing, as this is expected to be applied in the engine layer,
//! which is app-specific.**

pub mod dispatch;
#[cfg(feature = "simd")]
pub mod simd;
pub mod std;

pub use dispatch::{add, apply_float, div, mul, pow, sub};

// Shared tests for SIMD and Std
