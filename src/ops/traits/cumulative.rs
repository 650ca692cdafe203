//! Cumulative operations trait.

use crate::error::Result;
use crate::ops::{ScanMode, ScanOptions};
use crate::tensor::Tensor;

/// Cumulative (scan) operations along one axis
///
/// Every operation preserves the input shape. The [`ScanMode`] selects the
/// direction and whether each position includes its own element; the
/// output at the boundary of an exclusive scan is the operation's identity
/// (0 for sums, 1 for products, 0 for both cummax outputs).
pub trait CumulativeOps {
    /// Cumulative sum along a dimension
    ///
    /// For input `[a, b, c, d]`, output is `[a, a+b, a+b+c, a+b+c+d]`.
    /// Integer sums wrap on overflow.
    ///
    /// # Arguments
    ///
    /// * `a` - Input tensor
    /// * `dim` - Dimension along which to scan (supports negative indexing)
    /// * `options` - Mode and optional output dtype; without a dtype, booleans
    ///   accumulate in the default integer and narrow types widen to the
    ///   default of their kind
    ///
    /// # Example
    ///
    /// ```
    /// # use scanr::prelude::*;
    /// let client = CpuClient::new();
    /// let a = Tensor::from_slice(&[1.0f32, 2.0, 3.0, 4.0], &[4]);
    /// let result = client.cumsum(&a, 0, ScanOptions::new())?;
    /// assert_eq!(result.to_vec::<f32>(), [1.0, 3.0, 6.0, 10.0]);
    ///
    /// let excl = client.cumsum(&a, 0, ScanOptions::new().exclusive(true))?;
    /// assert_eq!(excl.to_vec::<f32>(), [0.0, 1.0, 3.0, 6.0]);
    /// # Ok::<(), scanr::error::Error>(())
    /// ```
    fn cumsum(&self, a: &Tensor, dim: isize, options: ScanOptions) -> Result<Tensor>;

    /// Cumulative sum written into a caller-provided destination
    ///
    /// `out` must have the input's shape, the resolved output dtype and a
    /// contiguous layout. All three are checked before any work is done.
    fn cumsum_into(
        &self,
        a: &Tensor,
        dim: isize,
        options: ScanOptions,
        out: &mut Tensor,
    ) -> Result<()>;

    /// Cumulative product along a dimension
    ///
    /// For input `[a, b, c, d]`, output is `[a, a*b, a*b*c, a*b*c*d]`.
    /// Half-precision inputs and outputs are rejected.
    ///
    /// # Example
    ///
    /// ```
    /// # use scanr::prelude::*;
    /// let client = CpuClient::new();
    /// let a = Tensor::from_bools(&[true, false, true], &[3]);
    /// let result = client.cumprod(&a, 0, ScanOptions::new())?;
    /// assert_eq!(result.dtype(), DType::I64);
    /// assert_eq!(result.to_vec::<i64>(), [1, 0, 0]);
    /// # Ok::<(), scanr::error::Error>(())
    /// ```
    fn cumprod(&self, a: &Tensor, dim: isize, options: ScanOptions) -> Result<Tensor>;

    /// Cumulative product written into a caller-provided destination
    ///
    /// Same destination contract as [`CumulativeOps::cumsum_into`].
    fn cumprod_into(
        &self,
        a: &Tensor,
        dim: isize,
        options: ScanOptions,
        out: &mut Tensor,
    ) -> Result<()>;

    /// Running maximum with the index at which it was last achieved
    ///
    /// Returns `(values, indices)`. Values are in the comparison dtype of the
    /// input (booleans compare as `F64`, 8/16-bit integers as `I64`, complex
    /// numbers by their real part); indices are `I64` positions along `dim`,
    /// counted in traversal order. Ties go to the later position.
    ///
    /// Exclusive modes scan the input shifted one step along `dim` with a
    /// zero in front, so the boundary slot holds the value `0` at index `0`
    /// and indices point into the shifted traversal. A NaN makes every later
    /// value NaN but never becomes the index.
    ///
    /// # Example
    ///
    /// ```
    /// # use scanr::prelude::*;
    /// let client = CpuClient::new();
    /// let a = Tensor::from_slice(&[3i32, 5, 5, 2], &[4]);
    /// let (values, indices) = client.cummax(&a, 0, ScanMode::Inclusive)?;
    /// assert_eq!(values.to_vec::<i32>(), [3, 5, 5, 5]);
    /// assert_eq!(indices.to_vec::<i64>(), [0, 1, 2, 2]);
    /// # Ok::<(), scanr::error::Error>(())
    /// ```
    fn cummax(&self, a: &Tensor, dim: isize, mode: ScanMode) -> Result<(Tensor, Tensor)>;
}
