// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Shape Module** - *Row-Major Shapes and Broadcasting*
//!
//! Describes the logical n-dimensional layout of a flat buffer and implements
//! NumPy broadcasting:
//!
//! 1. shapes are right-aligned, missing leading dimensions count as `1`;
//! 2. each aligned pair of dimensions must be equal, or one of them must be `1`;
//! 3. the output dimension is the non-`1` member of the pair.
//!
//! Rank-0 shapes describe a single scalar element.
//!
//! Broadcast operands are never materialised. [`BroadcastOffsets`] walks the
//! output shape in row-major order and yields the flat offset to read from a
//! smaller operand, using a zero stride on every broadcast axis.

use core::fmt;

use crate::errors::{KernelError, log_shape_mismatch};

/// Row-major n-dimensional shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    /// Creates a shape from its dimensions, outermost first.
    #[inline]
    pub fn new(dims: impl Into<Vec<usize>>) -> Self {
        Self { dims: dims.into() }
    }

    /// Rank-0 shape holding one element.
    #[inline]
    pub fn scalar() -> Self {
        Self { dims: Vec::new() }
    }

    /// One-dimensional shape `(n,)`.
    #[inline]
    pub fn vector(n: usize) -> Self {
        Self { dims: vec![n] }
    }

    #[inline]
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    #[inline]
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Number of elements described by the shape. `1` for rank 0.
    #[inline]
    pub fn numel(&self) -> usize {
        self.dims.iter().product()
    }

    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.dims.is_empty()
    }

    /// Returns the same shape with leading unit dimensions prepended up to `rank`.
    /// Shapes already at or above `rank` are returned unchanged.
    pub fn with_rank(&self, rank: usize) -> Shape {
        if self.rank() >= rank {
            return self.clone();
        }
        let mut dims = vec![1; rank - self.rank()];
        dims.extend_from_slice(&self.dims);
        Shape { dims }
    }

    /// Row-major element strides.
    pub fn strides(&self) -> Vec<usize> {
        let mut strides = vec![1; self.rank()];
        for axis in (0..self.rank().saturating_sub(1)).rev() {
            strides[axis] = strides[axis + 1] * self.dims[axis + 1];
        }
        strides
    }

    /// True if `self` can be broadcast up to `target` without changing `target`.
    pub fn broadcasts_to(&self, target: &Shape) -> bool {
        if self.rank() > target.rank() {
            return false;
        }
        let offset = target.rank() - self.rank();
        self.dims
            .iter()
            .zip(&target.dims[offset..])
            .all(|(&d, &t)| d == t || d == 1)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, d) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", d)?;
        }
        if self.dims.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Shape::new(dims.to_vec())
    }
}

impl<const R: usize> From<[usize; R]> for Shape {
    fn from(dims: [usize; R]) -> Self {
        Shape::new(dims.to_vec())
    }
}

/// Broadcasts two shapes against each other.
///
/// Returns `KernelError::ShapeMismatch` when an aligned pair of dimensions
/// differs and neither is `1`.
pub fn broadcast_shapes(lhs: &Shape, rhs: &Shape) -> Result<Shape, KernelError> {
    let rank = lhs.rank().max(rhs.rank());
    let l = lhs.with_rank(rank);
    let r = rhs.with_rank(rank);
    let mut dims = Vec::with_capacity(rank);
    for (&a, &b) in l.dims.iter().zip(&r.dims) {
        let d = if a == b {
            a
        } else if a == 1 {
            b
        } else if b == 1 {
            a
        } else {
            return Err(KernelError::ShapeMismatch(log_shape_mismatch(
                "broadcast_shapes",
                lhs,
                rhs,
            )));
        };
        dims.push(d);
    }
    Ok(Shape { dims })
}

/// Iterator over the source offsets of a broadcast operand.
///
/// Yields, for every element of `out` in row-major order, the flat index of the
/// element of `src` that lands there.
#[derive(Debug, Clone)]
pub struct BroadcastOffsets {
    out_dims: Vec<usize>,
    strides: Vec<usize>,
    counter: Vec<usize>,
    offset: usize,
    remaining: usize,
}

impl BroadcastOffsets {
    /// `src` must broadcast to `out`; see [`Shape::broadcasts_to`].
    pub fn new(src: &Shape, out: &Shape) -> Self {
        debug_assert!(
            src.broadcasts_to(out),
            "BroadcastOffsets: {} does not broadcast to {}",
            src,
            out
        );
        let aligned = src.with_rank(out.rank());
        let src_strides = aligned.strides();
        let strides = aligned
            .dims
            .iter()
            .zip(&out.dims)
            .zip(src_strides)
            .map(|((&s, &o), stride)| if s == 1 && o != 1 { 0 } else { stride })
            .collect();
        Self {
            out_dims: out.dims.clone(),
            strides,
            counter: vec![0; out.rank()],
            offset: 0,
            remaining: out.numel(),
        }
    }
}

impl Iterator for BroadcastOffsets {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.offset;
        self.remaining -= 1;
        // odometer step, innermost axis first
        for axis in (0..self.out_dims.len()).rev() {
            self.counter[axis] += 1;
            self.offset += self.strides[axis];
            if self.counter[axis] < self.out_dims[axis] {
                break;
            }
            self.offset -= self.strides[axis] * self.counter[axis];
            self.counter[axis] = 0;
        }
        Some(current)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for BroadcastOffsets {}
