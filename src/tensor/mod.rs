//! Tensor types
//!
//! This module provides the core `Tensor` type, an n-dimensional array in
//! host memory with zero-copy strided views.

mod core;
mod layout;
mod storage;

pub use core::Tensor;
pub use layout::{Layout, Shape, StridedOffsets, Strides};
pub use storage::Storage;
