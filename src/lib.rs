// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under the Mozilla Public License (MPL) 2.0.
// See LICENSE for details.

//! # **normal-kernels** - *Broadcasting Normal-Distribution Kernels*
//!
//! `logpdf`, `pdf`, `cdf`, `logcdf`, `sf`, `logsf` and `ppf` of the normal
//! distribution over scalars, Minarrow buffers and shaped tensors, with
//! `scipy.stats.norm` calling conventions: default `loc = 0`, `scale = 1`,
//! numpy-style broadcasting and dtype promotion.
//!
//! ```rust,ignore
//! use normal_kernels::stats::norm;
//!
//! let x = [-1.0, 0.0, 1.0];
//! let lp = norm::logpdf(&x, None, None)?;
//! let c = norm::cdf(&x, Some(2.0.into()), Some(0.5.into()))?;
//! ```
//!
//! Layers, bottom up:
//! - [`structs`]: shapes, tensors and borrowed operands;
//! - [`kernels::arithmetic`] / [`kernels::unary`]: broadcasting, null-aware elementwise primitives;
//! - [`kernels::scientific`]: `erf`, `ndtr`, `log_ndtr`, `ndtri`;
//! - [`kernels::promote`]: dtype and rank promotion of kernel arguments;
//! - [`kernels::scientific::distributions`]: the normal kernels;
//! - [`stats`]: the `norm` facade.

// At the time of writing this unlocks extra std::simd that the developers
// intend on stabilising but haven't yet.
#![cfg_attr(feature = "simd", feature(portable_simd))]

// compile with RUSTFLAGS="-C target-cpu=native" cargo +nightly build --features simd

pub mod operators;

pub mod kernels {
    pub mod arithmetic;
    pub mod promote;
    pub mod unary;
    pub mod scientific {
        pub mod distributions;
        pub mod erf;
        pub mod special;
    }
}

pub mod structs {
    pub mod operand;
    pub mod shape;
    pub mod tensor;
}

pub mod traits {
    pub mod kernel_float;
}

pub mod stats;

pub mod config;

pub mod errors;

pub mod utils;
