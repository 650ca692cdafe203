//! Core Tensor type

use super::{Layout, Storage};
use crate::dispatch_dtype;
use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use bytemuck::Pod;
use std::fmt;

/// N-dimensional array in host memory
///
/// `Tensor` is the fundamental data structure in scanr. It consists of:
/// - **Storage**: Reference-counted, copy-on-write element buffer
/// - **Layout**: Shape, strides, and offset defining the view into storage
/// - **DType**: Element type (determined at runtime, carried by the storage)
///
/// # Zero-Copy Views
///
/// `permute`, `flip` and `narrow` create new tensors that share the same
/// underlying storage with a modified layout. `contiguous` materializes a
/// view into fresh row-major storage.
///
/// # Example
///
/// ```
/// use scanr::tensor::Tensor;
///
/// let a = Tensor::from_slice(&[1.0f32, 2.0, 3.0, 4.0], &[2, 2]);
/// let b = a.flip(-1)?; // Zero-copy, shares storage with a
/// assert_eq!(b.to_vec::<f32>(), [2.0, 1.0, 4.0, 3.0]);
/// # Ok::<(), scanr::error::Error>(())
/// ```
#[derive(Clone)]
pub struct Tensor {
    /// Element buffer
    storage: Storage,
    /// Shape, strides, offset
    layout: Layout,
}

impl Tensor {
    /// Create a tensor from storage and layout
    pub fn from_parts(storage: Storage, layout: Layout) -> Self {
        Self { storage, layout }
    }

    /// Create a tensor from a slice of data
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` does not equal the product of the `shape` dimensions.
    /// For a fallible alternative, use [`Self::try_from_slice`].
    pub fn from_slice<T: Element>(data: &[T], shape: &[usize]) -> Self {
        Self::try_from_slice(data, shape).expect("Tensor::from_slice failed")
    }

    /// Create a tensor from a slice of data (fallible version)
    ///
    /// Returns an error if `data.len()` does not equal the product of the `shape` dimensions.
    pub fn try_from_slice<T: Element>(data: &[T], shape: &[usize]) -> Result<Self> {
        check_len(data.len(), shape)?;
        Ok(Self {
            storage: Storage::from_slice(data),
            layout: Layout::contiguous(shape),
        })
    }

    /// Create a boolean tensor
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` does not match `shape`; see [`Self::try_from_bools`].
    pub fn from_bools(data: &[bool], shape: &[usize]) -> Self {
        Self::try_from_bools(data, shape).expect("Tensor::from_bools failed")
    }

    /// Create a boolean tensor (fallible version)
    pub fn try_from_bools(data: &[bool], shape: &[usize]) -> Result<Self> {
        check_len(data.len(), shape)?;
        let bytes: Vec<u8> = data.iter().map(|&b| b as u8).collect();
        Ok(Self {
            storage: Storage::from_slice_as(&bytes, DType::Bool),
            layout: Layout::contiguous(shape),
        })
    }

    /// Create a tensor filled with zeros
    pub fn zeros(shape: &[usize], dtype: DType) -> Self {
        let len: usize = shape.iter().product();
        Self {
            storage: Storage::zeroed(len, dtype),
            layout: Layout::contiguous(shape),
        }
    }

    /// Create a tensor filled with a scalar value
    ///
    /// The scalar is converted to the target dtype; for `Bool` any non-zero
    /// value is `true`.
    pub fn full_scalar(shape: &[usize], dtype: DType, value: f64) -> Result<Self> {
        let mut out = Self::zeros(shape, dtype);
        if out.numel() == 0 {
            return Ok(out);
        }

        if dtype == DType::Bool {
            out.storage.as_mut_slice::<u8>().fill((value != 0.0) as u8);
            return Ok(out);
        }

        dispatch_dtype!(dtype, T => {
            out.storage.as_mut_slice::<T>().fill(T::from_f64(value));
        }, "full_scalar");

        Ok(out)
    }

    /// Get the storage
    #[inline]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Mutable storage access (copy-on-write)
    #[inline]
    pub(crate) fn storage_mut(&mut self) -> &mut Storage {
        &mut self.storage
    }

    /// Get the layout
    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Get the shape
    #[inline]
    pub fn shape(&self) -> &[usize] {
        self.layout.shape()
    }

    /// Get the strides
    #[inline]
    pub fn strides(&self) -> &[isize] {
        self.layout.strides()
    }

    /// Get the number of dimensions (rank)
    #[inline]
    pub fn ndim(&self) -> usize {
        self.layout.ndim()
    }

    /// Get the total number of elements
    #[inline]
    pub fn numel(&self) -> usize {
        self.layout.elem_count()
    }

    /// Get the element type
    #[inline]
    pub fn dtype(&self) -> DType {
        self.storage.dtype()
    }

    /// Check if the tensor is contiguous in memory
    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.layout.is_contiguous() && self.storage.len() == self.numel()
    }

    /// Get size along a dimension (supports negative indexing)
    pub fn size(&self, dim: isize) -> Option<usize> {
        self.layout.dim(dim)
    }

    /// Permute dimensions (zero-copy)
    ///
    /// # Example
    ///
    /// ```
    /// # use scanr::tensor::Tensor;
    /// let t = Tensor::zeros(&[2, 3, 4], scanr::dtype::DType::F32);
    /// let p = t.permute(&[2, 0, 1])?;
    /// assert_eq!(p.shape(), &[4, 2, 3]);
    /// # Ok::<(), scanr::error::Error>(())
    /// ```
    pub fn permute(&self, dims: &[usize]) -> Result<Self> {
        let layout = self.layout.permute(dims).ok_or_else(|| {
            Error::invalid_argument(
                "dims",
                format!("{:?} is not a permutation of {} axes", dims, self.ndim()),
            )
        })?;
        Ok(Self::from_parts(self.storage.clone(), layout))
    }

    /// Flip (reverse) tensor along a dimension (zero-copy)
    pub fn flip(&self, dim: isize) -> Result<Self> {
        let layout = self.layout.flip(dim).ok_or(Error::InvalidDimension {
            dim,
            ndim: self.ndim(),
        })?;
        Ok(Self::from_parts(self.storage.clone(), layout))
    }

    /// Narrow a dimension to `start..start + length` (zero-copy)
    pub fn narrow(&self, dim: isize, start: usize, length: usize) -> Result<Self> {
        let idx = self
            .layout
            .normalize_dim(dim)
            .ok_or(Error::InvalidDimension {
                dim,
                ndim: self.ndim(),
            })?;
        let layout = self.layout.narrow(dim, start, length).ok_or_else(|| {
            Error::invalid_argument(
                "length",
                format!(
                    "range {}..{} exceeds dimension {} of size {}",
                    start,
                    start.saturating_add(length),
                    idx,
                    self.shape()[idx]
                ),
            )
        })?;
        Ok(Self::from_parts(self.storage.clone(), layout))
    }

    /// Make tensor contiguous (copy if needed)
    ///
    /// If the tensor is already contiguous, returns a view (zero-copy).
    /// Otherwise, allocates new storage and gathers the elements in row-major order.
    pub fn contiguous(&self) -> Self {
        if self.is_contiguous() {
            return self.clone();
        }

        let dtype = self.dtype();
        let storage = match dtype.size_in_bytes() {
            1 => Storage::from_slice_as(&self.gather::<u8>(), dtype),
            2 => Storage::from_slice_as(&self.gather::<u16>(), dtype),
            4 => Storage::from_slice_as(&self.gather::<u32>(), dtype),
            8 => Storage::from_slice_as(&self.gather::<u64>(), dtype),
            16 => Storage::from_slice_as(&self.gather::<[u64; 2]>(), dtype),
            width => unreachable!("no dtype is {width} bytes wide"),
        };
        Self::from_parts(storage, Layout::contiguous(self.shape()))
    }

    /// Copy tensor data to a Vec in logical row-major order
    ///
    /// `T` must have the element width of the tensor's dtype (`u8` for `Bool`).
    pub fn to_vec<T: Pod>(&self) -> Vec<T> {
        assert_eq!(
            std::mem::size_of::<T>(),
            self.dtype().size_in_bytes(),
            "to_vec: element type does not match dtype {}",
            self.dtype()
        );
        self.gather::<T>()
    }

    /// Copy a boolean tensor to a Vec<bool>
    pub fn to_bool_vec(&self) -> Vec<bool> {
        assert_eq!(self.dtype(), DType::Bool, "to_bool_vec on a non-bool tensor");
        self.gather::<u8>().into_iter().map(|b| b != 0).collect()
    }

    fn gather<T: Pod>(&self) -> Vec<T> {
        let src = self.storage.as_slice::<T>();
        self.layout.offsets().map(|o| src[o]).collect()
    }
}

fn check_len(len: usize, shape: &[usize]) -> Result<()> {
    let expected_len: usize = shape.iter().product();
    if len != expected_len {
        return Err(Error::ShapeMismatch {
            expected: shape.to_vec(),
            got: vec![len],
        });
    }
    Ok(())
}

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape())
            .field("dtype", &self.dtype())
            .field("contiguous", &self.is_contiguous())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_shape_check() {
        let err = Tensor::try_from_slice(&[1.0f32, 2.0, 3.0], &[2, 2]).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { .. }));
    }

    #[test]
    fn test_bools() {
        let t = Tensor::from_bools(&[true, false, true], &[3]);
        assert_eq!(t.dtype(), DType::Bool);
        assert_eq!(t.to_bool_vec(), vec![true, false, true]);
    }

    #[test]
    fn test_full_scalar() {
        let t = Tensor::full_scalar(&[2, 2], DType::I32, 7.0).unwrap();
        assert_eq!(t.to_vec::<i32>(), vec![7; 4]);

        let b = Tensor::full_scalar(&[2], DType::Bool, 1.0).unwrap();
        assert_eq!(b.to_bool_vec(), vec![true, true]);
    }

    #[test]
    fn test_permute_contiguous() {
        let t = Tensor::from_slice(&[1i64, 2, 3, 4, 5, 6], &[2, 3]);
        let p = t.permute(&[1, 0]).unwrap();
        assert!(!p.is_contiguous());
        assert_eq!(p.shape(), &[3, 2]);
        let c = p.contiguous();
        assert!(c.is_contiguous());
        assert_eq!(c.to_vec::<i64>(), vec![1, 4, 2, 5, 3, 6]);
    }

    #[test]
    fn test_flip_and_narrow() {
        let t = Tensor::from_slice(&[1.0f64, 2.0, 3.0, 4.0], &[4]);
        let v = t.flip(0).unwrap().narrow(0, 1, 2).unwrap();
        assert_eq!(v.to_vec::<f64>(), vec![3.0, 2.0]);
        assert!(matches!(t.flip(1), Err(Error::InvalidDimension { .. })));
        assert!(matches!(
            t.narrow(0, 3, 2),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_narrowed_view_is_not_contiguous() {
        let t = Tensor::from_slice(&[1u8, 2, 3], &[3]);
        let head = t.narrow(0, 0, 2).unwrap();
        assert!(!head.is_contiguous());
        assert_eq!(head.contiguous().storage().len(), 2);
    }
}
