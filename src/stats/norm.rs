// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **norm** - *The Normal Distribution, scipy.stats Conventions*
//!
//! Every function takes `(x, loc, scale)`; `None` for `loc` or `scale` selects
//! the standard normal defaults `loc = 0`, `scale = 1`.
//!
//! ```rust,ignore
//! use normal_kernels::stats::norm;
//!
//! let x = [-1.0, 0.0, 1.0];
//! let p = norm::pdf(&x, None, None)?;
//! let lc = norm::logcdf(&x, Some(1.0.into()), Some(2.0.into()))?;
//! ```

use crate::config::{DEFAULT_LOC, DEFAULT_SCALE};
use crate::errors::KernelError;
use crate::kernels::scientific::distributions::univariate::normal::{
    normal_cdf, normal_logcdf, normal_logpdf, normal_logsf, normal_pdf, normal_quantile,
    normal_sf,
};
use crate::structs::operand::Operand;
use crate::structs::tensor::DynTensor;

#[inline]
fn with_defaults<'a>(
    loc: Option<Operand<'a>>,
    scale: Option<Operand<'a>>,
) -> (Operand<'a>, Operand<'a>) {
    (
        loc.unwrap_or(Operand::Scalar(DEFAULT_LOC)),
        scale.unwrap_or(Operand::Scalar(DEFAULT_SCALE)),
    )
}

/// Log of the probability density function.
pub fn logpdf<'a>(
    x: impl Into<Operand<'a>>,
    loc: Option<Operand<'a>>,
    scale: Option<Operand<'a>>,
) -> Result<DynTensor, KernelError> {
    let (loc, scale) = with_defaults(loc, scale);
    normal_logpdf(x, loc, scale)
}

/// Probability density function.
pub fn pdf<'a>(
    x: impl Into<Operand<'a>>,
    loc: Option<Operand<'a>>,
    scale: Option<Operand<'a>>,
) -> Result<DynTensor, KernelError> {
    let (loc, scale) = with_defaults(loc, scale);
    normal_pdf(x, loc, scale)
}

/// Cumulative distribution function.
pub fn cdf<'a>(
    x: impl Into<Operand<'a>>,
    loc: Option<Operand<'a>>,
    scale: Option<Operand<'a>>,
) -> Result<DynTensor, KernelError> {
    let (loc, scale) = with_defaults(loc, scale);
    normal_cdf(x, loc, scale)
}

/// Log of the cumulative distribution function.
pub fn logcdf<'a>(
    x: impl Into<Operand<'a>>,
    loc: Option<Operand<'a>>,
    scale: Option<Operand<'a>>,
) -> Result<DynTensor, KernelError> {
    let (loc, scale) = with_defaults(loc, scale);
    normal_logcdf(x, loc, scale)
}

/// Survival function, `1 - cdf`.
pub fn sf<'a>(
    x: impl Into<Operand<'a>>,
    loc: Option<Operand<'a>>,
    scale: Option<Operand<'a>>,
) -> Result<DynTensor, KernelError> {
    let (loc, scale) = with_defaults(loc, scale);
    normal_sf(x, loc, scale)
}

/// Log of the survival function.
pub fn logsf<'a>(
    x: impl Into<Operand<'a>>,
    loc: Option<Operand<'a>>,
    scale: Option<Operand<'a>>,
) -> Result<DynTensor, KernelError> {
    let (loc, scale) = with_defaults(loc, scale);
    normal_logsf(x, loc, scale)
}

/// Percent point function (inverse of `cdf`).
pub fn ppf<'a>(
    q: impl Into<Operand<'a>>,
    loc: Option<Operand<'a>>,
    scale: Option<Operand<'a>>,
) -> Result<DynTensor, KernelError> {
    let (loc, scale) = with_defaults(loc, scale);
    normal_quantile(q, loc, scale)
}
