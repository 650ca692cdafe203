//! Statistical operations trait.

use crate::error::Result;
use crate::ops::Correction;
use crate::tensor::Tensor;

/// Statistical operations
pub trait StatisticalOps {
    /// Variance along specified dimensions
    ///
    /// # Arguments
    ///
    /// * `a` - Input tensor (real)
    /// * `dims` - Dimensions to reduce (empty = all)
    /// * `keepdim` - Keep reduced dimensions as size 1
    /// * `correction` - Degrees of freedom correction. `Integer(n)` divides by
    ///   `N - n`; `Fractional(c)` rescales the population variance by
    ///   `N / (N - c)` and yields NaN when nothing is reduced
    ///
    /// # Example
    ///
    /// ```
    /// # use scanr::prelude::*;
    /// let client = CpuClient::new();
    /// let a = Tensor::from_slice(&[1.0f64, 2.0, 3.0, 4.0], &[4]);
    /// let v = client.var(&a, &[], false, Correction::Integer(1))?;
    /// assert!((v.to_vec::<f64>()[0] - 5.0 / 3.0).abs() < 1e-12);
    /// # Ok::<(), scanr::error::Error>(())
    /// ```
    fn var(
        &self,
        a: &Tensor,
        dims: &[usize],
        keepdim: bool,
        correction: Correction,
    ) -> Result<Tensor>;

    /// Variance along specified dimensions into a caller-provided buffer
    ///
    /// `out` must be contiguous with the reduced shape and the dtype
    /// [`StatisticalOps::var`] would produce; this is checked before computing.
    fn var_into(
        &self,
        a: &Tensor,
        dims: &[usize],
        keepdim: bool,
        correction: Correction,
        out: &mut Tensor,
    ) -> Result<()>;

    /// Standard deviation along specified dimensions
    ///
    /// `sqrt(sum((x - mean)^2) / (N - correction))`. The result is floating
    /// point: the input dtype for float inputs, `F64` otherwise.
    fn std(
        &self,
        a: &Tensor,
        dims: &[usize],
        keepdim: bool,
        correction: Correction,
    ) -> Result<Tensor>;

    /// Standard deviation along specified dimensions into a caller-provided buffer
    fn std_into(
        &self,
        a: &Tensor,
        dims: &[usize],
        keepdim: bool,
        correction: Correction,
        out: &mut Tensor,
    ) -> Result<()>;
}
