//! Caller-provided output buffers for the `*_into` operations

use crate::dtype::DType;
use crate::error::{Error, Result};
use crate::ops::{reduce_output_shape, resolve_reduce_dims};
use crate::tensor::Tensor;

/// Check that `out` can receive a result of `shape` and `dtype`
///
/// Shape is checked first, then dtype, then contiguity.
pub(crate) fn check_destination(out: &Tensor, shape: &[usize], dtype: DType) -> Result<()> {
    if out.shape() != shape {
        return Err(Error::shape_mismatch(shape, out.shape()));
    }
    if out.dtype() != dtype {
        return Err(Error::DTypeMismatch {
            lhs: dtype,
            rhs: out.dtype(),
        });
    }
    if !out.is_contiguous() {
        return Err(Error::NotContiguous);
    }
    Ok(())
}

/// Copy `result` into a destination that passed [`check_destination`]
pub(crate) fn write_destination(result: &Tensor, out: &mut Tensor) {
    let result = result.contiguous();
    out.storage_mut()
        .as_bytes_mut()
        .copy_from_slice(result.storage().as_bytes());
}

/// Output shape of a reduction of `a` over `dims`
pub(crate) fn reduced_shape(a: &Tensor, dims: &[usize], keepdim: bool) -> Result<Vec<usize>> {
    let dims = resolve_reduce_dims(a.ndim(), dims)?;
    Ok(reduce_output_shape(a.shape(), &dims, keepdim))
}
