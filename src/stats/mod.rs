// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Stats Module** - *scipy.stats-style Distribution Surface*
//!
//! Thin wrappers over the distribution kernels with optional, defaulted
//! location and scale parameters.

pub mod norm;
