// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Statistical Distributions Module** - *Normal Distribution Kernels*
//!
//! Density, log-density, CDF, log-CDF, survival and quantile kernels for the
//! normal distribution, evaluated over broadcastable [`Operand`] triples.
//!
//! ### Null Value Philosophy
//! Rather than assume, we choose to recognise inf and NaN as valid float values
//! (consistent with Apache Arrow semantics), leaving it to the user to subsequently
//! treat them as nulls if they wish. Only lanes that were null on input come
//! back null.
//!
//! [`Operand`]: crate::structs::operand::Operand

/// # **Shared Distribution Utilities**
///
/// - **`constants`**: Mathematical constants and precomputed values
/// - **`scalar`**: Single-point `f64` reference evaluators
pub mod shared {
    pub mod constants;
    pub mod scalar;
}

/// # **Univariate Distributions** - *Single-Variable Probability Distributions*
pub mod univariate {
    pub mod normal;
}
