// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Tensor Module** - *Shaped Float Arrays*
//!
//! A [`Tensor`] is a Minarrow [`FloatArray`] (64-byte aligned buffer plus an
//! optional Arrow validity bitmask) together with a row-major [`Shape`].
//! [`DynTensor`] erases the element type so public kernels can return the
//! promoted precision of their inputs.
//!
//! ## Null semantics
//! A null lane (validity bit `0`) holds `NaN` as its value. `NaN`/`inf`
//! produced by arithmetic are ordinary values and are never nulled.

use minarrow::{Bitmask, FloatArray, Vec64};

use crate::errors::KernelError;
use crate::structs::shape::Shape;
use crate::traits::kernel_float::KernelFloat;
use crate::utils::{confirm_len, confirm_mask_len, is_valid};

/// Runtime floating-point precision tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DType {
    Float32,
    Float64,
}

/// N-dimensional float tensor over a Minarrow buffer.
#[derive(Debug, Clone)]
pub struct Tensor<T: KernelFloat> {
    array: FloatArray<T>,
    shape: Shape,
}

impl<T: KernelFloat> Tensor<T> {
    /// Wraps an existing array. Its length must equal `shape.numel()`.
    pub fn new(array: FloatArray<T>, shape: Shape) -> Result<Self, KernelError> {
        let len = T::values(&array).len();
        confirm_len("Tensor::new", len, shape.numel())?;
        confirm_mask_len("Tensor::new", array.null_mask.as_ref(), len)?;
        Ok(Self { array, shape })
    }

    /// Builds a tensor from an owned buffer and optional validity mask.
    pub fn from_vec64(
        data: Vec64<T>,
        null_mask: Option<Bitmask>,
        shape: Shape,
    ) -> Result<Self, KernelError> {
        Self::new(T::into_array(data, null_mask), shape)
    }

    /// Copies `values` into a new dense tensor of the given shape.
    pub fn from_slice(values: &[T], shape: Shape) -> Result<Self, KernelError> {
        confirm_len("Tensor::from_slice", values.len(), shape.numel())?;
        let data: Vec64<T> = values.iter().copied().collect();
        Ok(Self::from_parts(data, None, shape))
    }

    /// Rank-1 dense tensor.
    pub fn vector(values: &[T]) -> Self {
        let data: Vec64<T> = values.iter().copied().collect();
        Self::from_parts(data, None, Shape::vector(values.len()))
    }

    /// Rank-0 tensor holding one value.
    pub fn scalar(value: T) -> Self {
        let data: Vec64<T> = core::iter::once(value).collect();
        Self::from_parts(data, None, Shape::scalar())
    }

    /// Internal constructor for kernels that already guarantee
    /// `data.len() == shape.numel()` and a mask of the same length.
    #[inline]
    pub(crate) fn from_parts(data: Vec64<T>, null_mask: Option<Bitmask>, shape: Shape) -> Self {
        debug_assert_eq!(data.len(), shape.numel(), "from_parts: length/shape mismatch");
        Self {
            array: T::into_array(data, null_mask),
            shape,
        }
    }

    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[inline]
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    #[inline]
    pub fn values(&self) -> &[T] {
        T::values(&self.array)
    }

    #[inline]
    pub fn null_mask(&self) -> Option<&Bitmask> {
        self.array.null_mask.as_ref()
    }

    #[inline]
    pub fn array(&self) -> &FloatArray<T> {
        &self.array
    }

    #[inline]
    pub fn into_array(self) -> FloatArray<T> {
        self.array
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if flat lane `idx` is valid (not null).
    #[inline]
    pub fn is_valid(&self, idx: usize) -> bool {
        is_valid(self.null_mask(), idx)
    }

    /// Number of null lanes.
    pub fn null_count(&self) -> usize {
        match self.null_mask() {
            Some(_) => (0..self.len()).filter(|&i| !self.is_valid(i)).count(),
            None => 0,
        }
    }

    /// Reinterprets the buffer with a new shape holding the same number of elements.
    pub fn reshape(self, shape: Shape) -> Result<Self, KernelError> {
        if shape.numel() != self.shape.numel() {
            return Err(KernelError::InvalidArguments(format!(
                "reshape => cannot reshape {} elements of shape {} into {}",
                self.shape.numel(),
                self.shape,
                shape
            )));
        }
        Ok(Self {
            array: self.array,
            shape,
        })
    }

    /// Converts to another precision, keeping the validity mask.
    pub fn cast<U: KernelFloat>(&self) -> Tensor<U> {
        let data: Vec64<U> = self
            .values()
            .iter()
            .map(|&v| U::from_f64_lossy(v.into_f64()))
            .collect();
        Tensor::from_parts(data, self.null_mask().cloned(), self.shape.clone())
    }

    /// Values as `f64`, nulls reported as `None`.
    pub fn to_options(&self) -> Vec<Option<f64>> {
        self.values()
            .iter()
            .enumerate()
            .map(|(i, &v)| self.is_valid(i).then(|| v.into_f64()))
            .collect()
    }
}

/// Dtype-erased tensor returned by the public kernels.
#[derive(Debug, Clone)]
pub enum DynTensor {
    F32(Tensor<f32>),
    F64(Tensor<f64>),
}

impl DynTensor {
    pub fn dtype(&self) -> DType {
        match self {
            DynTensor::F32(_) => DType::Float32,
            DynTensor::F64(_) => DType::Float64,
        }
    }

    pub fn shape(&self) -> &Shape {
        match self {
            DynTensor::F32(t) => t.shape(),
            DynTensor::F64(t) => t.shape(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            DynTensor::F32(t) => t.len(),
            DynTensor::F64(t) => t.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn null_mask(&self) -> Option<&Bitmask> {
        match self {
            DynTensor::F32(t) => t.null_mask(),
            DynTensor::F64(t) => t.null_mask(),
        }
    }

    pub fn is_valid(&self, idx: usize) -> bool {
        match self {
            DynTensor::F32(t) => t.is_valid(idx),
            DynTensor::F64(t) => t.is_valid(idx),
        }
    }

    /// Borrows the `f64` tensor, erroring if the result was promoted to `f32`.
    pub fn as_f64(&self) -> Result<&Tensor<f64>, KernelError> {
        match self {
            DynTensor::F64(t) => Ok(t),
            DynTensor::F32(_) => Err(KernelError::TypeMismatch(
                "as_f64 => tensor holds Float32".into(),
            )),
        }
    }

    /// Borrows the `f32` tensor, erroring if the result was promoted to `f64`.
    pub fn as_f32(&self) -> Result<&Tensor<f32>, KernelError> {
        match self {
            DynTensor::F32(t) => Ok(t),
            DynTensor::F64(_) => Err(KernelError::TypeMismatch(
                "as_f32 => tensor holds Float64".into(),
            )),
        }
    }

    /// Widens to `f64` (identity for `F64`).
    pub fn into_f64(self) -> Tensor<f64> {
        match self {
            DynTensor::F32(t) => t.cast::<f64>(),
            DynTensor::F64(t) => t,
        }
    }

    /// All values widened to `f64`, nulls included as their stored `NaN`.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        match self {
            DynTensor::F32(t) => t.values().iter().map(|&v| v as f64).collect(),
            DynTensor::F64(t) => t.values().to_vec(),
        }
    }
}

impl From<Tensor<f32>> for DynTensor {
    fn from(t: Tensor<f32>) -> Self {
        DynTensor::F32(t)
    }
}

impl From<Tensor<f64>> for DynTensor {
    fn from(t: Tensor<f64>) -> Self {
        DynTensor::F64(t)
    }
}
