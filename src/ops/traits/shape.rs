//! Shape operations trait.

use crate::error::Result;
use crate::tensor::Tensor;

/// Shape manipulation operations
pub trait ShapeOps {
    /// Concatenate tensors along a dimension
    ///
    /// Joins a sequence of tensors along an existing dimension. All tensors must
    /// have the same rank and the same shape except in the concatenation
    /// dimension. Mixed dtypes are promoted to a common dtype.
    ///
    /// # Example
    ///
    /// ```
    /// # use scanr::prelude::*;
    /// let client = CpuClient::new();
    /// let a = Tensor::from_slice(&[1.0f32, 2.0], &[2]);
    /// let b = Tensor::from_slice(&[3.0f32, 4.0, 5.0], &[3]);
    /// let c = client.cat(&[&a, &b], 0)?;
    /// assert_eq!(c.shape(), &[5]);
    /// # Ok::<(), scanr::error::Error>(())
    /// ```
    fn cat(&self, tensors: &[&Tensor], dim: isize) -> Result<Tensor>;
}
