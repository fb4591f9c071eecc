// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Utility Functions** - *Null-Mask and Memory Helpers*
//!
//! Small helpers shared by the elementwise and distribution kernels.

use minarrow::Bitmask;

use crate::errors::{KernelError, log_length_mismatch};

/// Returns true if lane `idx` is valid. A missing mask means every lane is valid.
#[inline(always)]
pub fn is_valid(mask: Option<&Bitmask>, idx: usize) -> bool {
    match mask {
        Some(m) => m.get(idx),
        None => true,
    }
}

/// Checks that a buffer of length `len` can back `expected` elements.
#[inline]
pub fn confirm_len(label: &str, len: usize, expected: usize) -> Result<(), KernelError> {
    if len != expected {
        return Err(KernelError::LengthMismatch(log_length_mismatch(
            label, len, expected,
        )));
    }
    Ok(())
}

/// Checks that an optional validity mask covers at least `len` lanes.
#[inline]
pub fn confirm_mask_len(
    label: &str,
    mask: Option<&Bitmask>,
    len: usize,
) -> Result<(), KernelError> {
    match mask {
        Some(m) if m.len() < len => Err(KernelError::LengthMismatch(format!(
            "{} => null mask covers {} lanes, data has {}",
            label,
            m.len(),
            len
        ))),
        _ => Ok(()),
    }
}

/// SIMD Alignment check. Returns true if the slice is properly
/// 64-byte aligned for SIMD operations, false otherwise.
#[inline(always)]
pub fn is_simd_aligned<T>(slice: &[T]) -> bool {
    if slice.is_empty() {
        true
    } else {
        (slice.as_ptr() as usize) % 64 == 0
    }
}
