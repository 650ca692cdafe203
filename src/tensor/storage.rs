//! Storage: host memory with Arc-based sharing

use crate::dtype::{DType, Element};
use bytemuck::{Pod, Zeroable};
use std::fmt;
use std::sync::Arc;

/// Allocation unit of tensor storage.
///
/// 16-byte aligned so the buffer can be reinterpreted as any element type,
/// up to and including `Complex128`.
#[derive(Copy, Clone, Default)]
#[repr(C, align(16))]
struct Chunk([u8; 16]);

// SAFETY: `Chunk` is a plain byte array with no padding (size 16, align 16).
unsafe impl Zeroable for Chunk {}
// SAFETY: every bit pattern is a valid `[u8; 16]`.
unsafe impl Pod for Chunk {}

const CHUNK_BYTES: usize = std::mem::size_of::<Chunk>();

/// Storage for tensor data
///
/// Storage wraps a zero-initialized byte buffer with reference counting,
/// enabling zero-copy views (permute, flip, narrow) that share it. Mutable
/// access goes through copy-on-write, so a shared buffer is never written in
/// place.
#[derive(Clone)]
pub struct Storage {
    chunks: Arc<Vec<Chunk>>,
    /// Number of elements (not bytes)
    len: usize,
    /// Element type
    dtype: DType,
}

impl Storage {
    /// Allocate zero-filled storage for `len` elements of `dtype`
    pub fn zeroed(len: usize, dtype: DType) -> Self {
        let bytes = len * dtype.size_in_bytes();
        let chunks = vec![Chunk::default(); bytes.div_ceil(CHUNK_BYTES)];
        Self {
            chunks: Arc::new(chunks),
            len,
            dtype,
        }
    }

    /// Copy `data` into new storage; the dtype is inferred from the element type
    pub fn from_slice<T: Element>(data: &[T]) -> Self {
        Self::from_slice_as(data, T::DTYPE)
    }

    /// Copy `data` into new storage tagged with an explicit dtype of the same width
    pub(crate) fn from_slice_as<T: Pod>(data: &[T], dtype: DType) -> Self {
        debug_assert_eq!(std::mem::size_of::<T>(), dtype.size_in_bytes());
        let mut storage = Self::zeroed(data.len(), dtype);
        storage.as_bytes_mut()[..std::mem::size_of_val(data)]
            .copy_from_slice(bytemuck::cast_slice(data));
        storage
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the storage holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Element type
    #[inline]
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// Size in bytes of the live elements
    #[inline]
    pub fn size_in_bytes(&self) -> usize {
        self.len * self.dtype.size_in_bytes()
    }

    /// Whether two storages share one buffer
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.chunks, &other.chunks)
    }

    /// View the elements as `T`
    ///
    /// `T` must have the width of the storage dtype; `Bool` storage is read as `u8`.
    #[inline]
    pub fn as_slice<T: Pod>(&self) -> &[T] {
        debug_assert_eq!(std::mem::size_of::<T>(), self.dtype.size_in_bytes());
        &bytemuck::cast_slice::<Chunk, T>(self.chunks.as_slice())[..self.len]
    }

    /// Mutable view of the elements as `T`, cloning the buffer if it is shared
    #[inline]
    pub fn as_mut_slice<T: Pod>(&mut self) -> &mut [T] {
        debug_assert_eq!(std::mem::size_of::<T>(), self.dtype.size_in_bytes());
        let len = self.len;
        let chunks = Arc::make_mut(&mut self.chunks).as_mut_slice();
        &mut bytemuck::cast_slice_mut::<Chunk, T>(chunks)[..len]
    }

    /// Raw bytes of the live elements
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &bytemuck::cast_slice::<Chunk, u8>(self.chunks.as_slice())[..self.size_in_bytes()]
    }

    /// Mutable raw bytes of the live elements (copy-on-write)
    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        let size = self.size_in_bytes();
        let chunks = Arc::make_mut(&mut self.chunks).as_mut_slice();
        &mut bytemuck::cast_slice_mut::<Chunk, u8>(chunks)[..size]
    }
}

impl fmt::Debug for Storage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Storage")
            .field("len", &self.len)
            .field("dtype", &self.dtype)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed() {
        let storage = Storage::zeroed(5, DType::F64);
        assert_eq!(storage.len(), 5);
        assert_eq!(storage.as_slice::<f64>(), &[0.0; 5]);
        assert_eq!(storage.size_in_bytes(), 40);
    }

    #[test]
    fn test_from_slice_roundtrip() {
        let storage = Storage::from_slice(&[1i16, -2, 3]);
        assert_eq!(storage.dtype(), DType::I16);
        assert_eq!(storage.as_slice::<i16>(), &[1, -2, 3]);
    }

    #[test]
    fn test_copy_on_write() {
        let a = Storage::from_slice(&[1.0f32, 2.0]);
        let mut b = a.clone();
        assert!(a.ptr_eq(&b));

        b.as_mut_slice::<f32>()[0] = 9.0;
        assert!(!a.ptr_eq(&b));
        assert_eq!(a.as_slice::<f32>(), &[1.0, 2.0]);
        assert_eq!(b.as_slice::<f32>(), &[9.0, 2.0]);
    }

    #[test]
    fn test_bytes_mut_copy_on_write() {
        let a = Storage::from_slice(&[1u8, 2, 3]);
        let mut b = a.clone();

        let bytes = b.as_bytes_mut();
        assert_eq!(bytes.len(), 3);
        bytes.copy_from_slice(&[7, 8, 9]);

        assert!(!a.ptr_eq(&b));
        assert_eq!(a.as_bytes(), &[1, 2, 3]);
        assert_eq!(b.as_slice::<u8>(), &[7, 8, 9]);
    }

    #[test]
    fn test_complex_alignment() {
        use crate::dtype::Complex128;
        let data = [Complex128::new(1.0, 2.0), Complex128::new(3.0, 4.0)];
        let storage = Storage::from_slice(&data);
        assert_eq!(storage.as_slice::<Complex128>(), &data);
    }
}
