//! Reduction operations trait.

use crate::dtype::DType;
use crate::error::Result;
use crate::tensor::Tensor;

/// Reduction operations
///
/// `dims` lists the axes to fold; an empty slice folds every axis. With
/// `keepdim` the reduced axes stay in the output with size 1.
pub trait ReduceOps {
    /// Sum along specified dimensions
    ///
    /// The result has `dtype` when given; otherwise booleans sum in the
    /// default integer dtype and every other input keeps its dtype.
    fn sum(
        &self,
        a: &Tensor,
        dims: &[usize],
        keepdim: bool,
        dtype: Option<DType>,
    ) -> Result<Tensor>;

    /// Product along specified dimensions
    ///
    /// Without an explicit dtype the product accumulates in the accumulation
    /// dtype of the input (narrow types widen to their kind's default).
    ///
    /// # Example
    ///
    /// ```
    /// # use scanr::prelude::*;
    /// let client = CpuClient::new();
    /// let a = Tensor::from_slice(&[1i32, 2, 3, 4, 5, 6], &[2, 3]);
    /// let p = client.prod(&a, &[1], false, None)?;
    /// assert_eq!(p.dtype(), DType::I64);
    /// assert_eq!(p.to_vec::<i64>(), [6, 120]);
    /// # Ok::<(), scanr::error::Error>(())
    /// ```
    fn prod(
        &self,
        a: &Tensor,
        dims: &[usize],
        keepdim: bool,
        dtype: Option<DType>,
    ) -> Result<Tensor>;

    /// Sum along specified dimensions into a caller-provided buffer
    ///
    /// `out` must be contiguous with the reduced shape and the dtype
    /// [`ReduceOps::sum`] would produce; this is checked before computing.
    fn sum_into(
        &self,
        a: &Tensor,
        dims: &[usize],
        keepdim: bool,
        dtype: Option<DType>,
        out: &mut Tensor,
    ) -> Result<()>;

    /// Product along specified dimensions into a caller-provided buffer
    fn prod_into(
        &self,
        a: &Tensor,
        dims: &[usize],
        keepdim: bool,
        dtype: Option<DType>,
        out: &mut Tensor,
    ) -> Result<()>;

    /// Mean along specified dimensions
    ///
    /// Accumulates in `f64` and casts back to the input dtype.
    fn mean(&self, a: &Tensor, dims: &[usize], keepdim: bool) -> Result<Tensor>;

    /// Mean along specified dimensions into a caller-provided buffer
    fn mean_into(
        &self,
        a: &Tensor,
        dims: &[usize],
        keepdim: bool,
        out: &mut Tensor,
    ) -> Result<()>;

    /// Maximum along specified dimensions
    ///
    /// Complex inputs and zero-size reductions are rejected.
    fn max(&self, a: &Tensor, dims: &[usize], keepdim: bool) -> Result<Tensor>;

    /// Maximum along specified dimensions into a caller-provided buffer
    fn max_into(
        &self,
        a: &Tensor,
        dims: &[usize],
        keepdim: bool,
        out: &mut Tensor,
    ) -> Result<()>;

    /// Minimum along specified dimensions
    ///
    /// Complex inputs and zero-size reductions are rejected.
    fn min(&self, a: &Tensor, dims: &[usize], keepdim: bool) -> Result<Tensor>;

    /// Minimum along specified dimensions into a caller-provided buffer
    fn min_into(
        &self,
        a: &Tensor,
        dims: &[usize],
        keepdim: bool,
        out: &mut Tensor,
    ) -> Result<()>;
}
