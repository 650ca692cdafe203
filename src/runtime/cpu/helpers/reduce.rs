//! Reduction helpers for CPU tensors
//!
//! Every reduction is lowered to a row reduction: the reduced axes are
//! permuted behind the kept ones and the view is materialized, so each
//! output element folds one contiguous run of inputs.

use super::super::{CpuClient, kernels};
use super::cast::cast_impl;
use super::destination::{check_destination, reduced_shape, write_destination};
use super::parallel::for_each_block;
use super::reorient::axes_last_permutation;
use crate::dispatch_dtype;
use crate::dtype::{DType, accumulation_dtype};
use crate::error::{Error, Result};
use crate::ops::{ReduceOp, reduce_output_shape, reduced_count, resolve_reduce_dims};
use crate::tensor::Tensor;
use log::debug;

/// Validated layout of a row reduction
#[derive(Debug)]
pub(crate) struct RowReduction {
    /// Contiguous input with the reduced axes last
    pub rows: Tensor,
    /// Elements folded into each output
    pub reduce_size: usize,
    /// Output shape (after `keepdim` handling)
    pub out_shape: Vec<usize>,
}

/// Move the reduced axes of `a` last and materialize it
pub(crate) fn prepare_rows(a: &Tensor, dims: &[usize], keepdim: bool) -> Result<RowReduction> {
    let dims = resolve_reduce_dims(a.ndim(), dims)?;
    let rows = a
        .permute(&axes_last_permutation(a.ndim(), &dims))?
        .contiguous();
    Ok(RowReduction {
        rows,
        reduce_size: reduced_count(a.shape(), &dims),
        out_shape: reduce_output_shape(a.shape(), &dims, keepdim),
    })
}

/// Fold the rows of `prep` with `op`, in `prep.rows`' dtype
fn reduce_rows(client: &CpuClient, op: ReduceOp, prep: &RowReduction) -> Result<Tensor> {
    let dtype = prep.rows.dtype();
    let mut out = Tensor::zeros(&prep.out_shape, dtype);
    if out.numel() == 0 {
        return Ok(out);
    }

    let input = prep.rows.storage();
    let output = out.storage_mut();
    let reduce_size = prep.reduce_size;
    dispatch_dtype!(dtype, T => {
        let x = input.as_slice::<T>();
        let y = output.as_mut_slice::<T>();
        if reduce_size == 0 {
            kernels::reduce_kernel(op, x, y, 0);
        } else {
            for_each_block(client, x, reduce_size, y, 1, |row, dst| {
                dst[0] = kernels::reduce_row(op, row)
            });
        }
    }, op.name());

    Ok(out)
}

/// Reduce in `work_dtype`, then cast the result to `out_dtype`
fn reduce_as(
    client: &CpuClient,
    op: ReduceOp,
    a: &Tensor,
    dims: &[usize],
    keepdim: bool,
    work_dtype: DType,
    out_dtype: DType,
) -> Result<Tensor> {
    debug!(
        "{}: shape={:?} dims={:?} keepdim={} {} -> {}",
        op.name(),
        a.shape(),
        dims,
        keepdim,
        a.dtype(),
        out_dtype
    );
    let prep = prepare_rows(&cast_impl(a, work_dtype)?, dims, keepdim)?;
    let out = reduce_rows(client, op, &prep)?;
    cast_impl(&out, out_dtype)
}

/// Explicit dtype, else booleans in the default integer, else the input dtype
fn sum_dtype(client: &CpuClient, input: DType, requested: Option<DType>) -> DType {
    requested.unwrap_or_else(|| match input {
        DType::Bool => client.defaults().int,
        other => other,
    })
}

fn prod_dtype(client: &CpuClient, input: DType, requested: Option<DType>) -> DType {
    requested.unwrap_or_else(|| accumulation_dtype(input, client.defaults()))
}

/// Sum along dimensions
///
/// Explicit dtype, else booleans in the default integer, else the input dtype.
pub fn sum_impl(
    client: &CpuClient,
    a: &Tensor,
    dims: &[usize],
    keepdim: bool,
    dtype: Option<DType>,
) -> Result<Tensor> {
    let out_dtype = sum_dtype(client, a.dtype(), dtype);
    reduce_as(client, ReduceOp::Sum, a, dims, keepdim, out_dtype, out_dtype)
}

/// Sum along dimensions into a caller-provided buffer
pub fn sum_into_impl(
    client: &CpuClient,
    a: &Tensor,
    dims: &[usize],
    keepdim: bool,
    dtype: Option<DType>,
    out: &mut Tensor,
) -> Result<()> {
    let shape = reduced_shape(a, dims, keepdim)?;
    check_destination(out, &shape, sum_dtype(client, a.dtype(), dtype))?;
    write_destination(&sum_impl(client, a, dims, keepdim, dtype)?, out);
    Ok(())
}

/// Product along dimensions
///
/// Explicit dtype, else the accumulation dtype of the input.
pub fn prod_impl(
    client: &CpuClient,
    a: &Tensor,
    dims: &[usize],
    keepdim: bool,
    dtype: Option<DType>,
) -> Result<Tensor> {
    let out_dtype = prod_dtype(client, a.dtype(), dtype);
    reduce_as(client, ReduceOp::Prod, a, dims, keepdim, out_dtype, out_dtype)
}

/// Product along dimensions into a caller-provided buffer
pub fn prod_into_impl(
    client: &CpuClient,
    a: &Tensor,
    dims: &[usize],
    keepdim: bool,
    dtype: Option<DType>,
    out: &mut Tensor,
) -> Result<()> {
    let shape = reduced_shape(a, dims, keepdim)?;
    check_destination(out, &shape, prod_dtype(client, a.dtype(), dtype))?;
    write_destination(&prod_impl(client, a, dims, keepdim, dtype)?, out);
    Ok(())
}

/// Mean along dimensions, accumulated in 64-bit precision
pub fn mean_impl(client: &CpuClient, a: &Tensor, dims: &[usize], keepdim: bool) -> Result<Tensor> {
    let work = if a.dtype().is_complex() {
        DType::Complex128
    } else {
        DType::F64
    };
    reduce_as(client, ReduceOp::Mean, a, dims, keepdim, work, a.dtype())
}

/// Mean along dimensions into a caller-provided buffer
pub fn mean_into_impl(
    client: &CpuClient,
    a: &Tensor,
    dims: &[usize],
    keepdim: bool,
    out: &mut Tensor,
) -> Result<()> {
    check_destination(out, &reduced_shape(a, dims, keepdim)?, a.dtype())?;
    write_destination(&mean_impl(client, a, dims, keepdim)?, out);
    Ok(())
}

/// Max or min along dimensions, in the input dtype
pub fn reduce_impl(
    client: &CpuClient,
    op: ReduceOp,
    a: &Tensor,
    dims: &[usize],
    keepdim: bool,
) -> Result<Tensor> {
    let dtype = a.dtype();
    if dtype.is_complex() {
        return Err(Error::unsupported_dtype(dtype, op.name()));
    }

    let resolved = resolve_reduce_dims(a.ndim(), dims)?;
    if reduced_count(a.shape(), &resolved) == 0 {
        return Err(Error::invalid_argument(
            "dims",
            format!("{} of a zero-size reduction has no identity", op.name()),
        ));
    }

    // Booleans fold as 0/1 bytes: max is "any", min is "all"
    let work = if dtype == DType::Bool { DType::U8 } else { dtype };
    reduce_as(client, op, a, dims, keepdim, work, dtype)
}

/// Max or min along dimensions into a caller-provided buffer
pub fn reduce_into_impl(
    client: &CpuClient,
    op: ReduceOp,
    a: &Tensor,
    dims: &[usize],
    keepdim: bool,
    out: &mut Tensor,
) -> Result<()> {
    check_destination(out, &reduced_shape(a, dims, keepdim)?, a.dtype())?;
    write_destination(&reduce_impl(client, op, a, dims, keepdim)?, out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_rows_moves_reduced_axes_last() {
        let a = Tensor::from_slice(&(0..6).collect::<Vec<i32>>(), &[2, 3]);
        let prep = prepare_rows(&a, &[0], false).unwrap();
        assert_eq!(prep.reduce_size, 2);
        assert_eq!(prep.out_shape, vec![3]);
        assert_eq!(prep.rows.to_vec::<i32>(), [0, 3, 1, 4, 2, 5]);
    }

    #[test]
    fn test_sum_bool_counts() {
        let client = CpuClient::new();
        let a = Tensor::from_bools(&[true, true, false, true], &[2, 2]);
        let s = sum_impl(&client, &a, &[], false, None).unwrap();
        assert_eq!(s.dtype(), DType::I64);
        assert_eq!(s.shape(), &[] as &[usize]);
        assert_eq!(s.to_vec::<i64>(), [3]);
    }

    #[test]
    fn test_max_bool_is_any() {
        let client = CpuClient::new();
        let a = Tensor::from_bools(&[false, false, true, false], &[2, 2]);
        let m = reduce_impl(&client, ReduceOp::Max, &a, &[1], false).unwrap();
        assert_eq!(m.to_bool_vec(), [false, true]);
        let m = reduce_impl(&client, ReduceOp::Min, &a, &[1], false).unwrap();
        assert_eq!(m.to_bool_vec(), [false, false]);
    }

    #[test]
    fn test_max_rejects_empty_and_complex() {
        let client = CpuClient::new();
        let empty = Tensor::zeros(&[2, 0], DType::F32);
        assert!(matches!(
            reduce_impl(&client, ReduceOp::Max, &empty, &[1], false),
            Err(Error::InvalidArgument { .. })
        ));
        // Reducing only the non-empty axis is fine
        let ok = reduce_impl(&client, ReduceOp::Max, &empty, &[0], false).unwrap();
        assert_eq!(ok.shape(), &[0]);

        let c = Tensor::zeros(&[2], DType::Complex64);
        assert!(matches!(
            reduce_impl(&client, ReduceOp::Min, &c, &[], false),
            Err(Error::UnsupportedDType { .. })
        ));
    }

    #[test]
    fn test_sum_into_checks_before_computing() {
        let client = CpuClient::new();
        let a = Tensor::from_bools(&[true, false, true, true], &[2, 2]);

        let mut out = Tensor::zeros(&[2], DType::I64);
        sum_into_impl(&client, &a, &[1], false, None, &mut out).unwrap();
        assert_eq!(out.to_vec::<i64>(), [1, 2]);

        let mut wrong = Tensor::zeros(&[2], DType::I32);
        assert!(matches!(
            sum_into_impl(&client, &a, &[1], false, None, &mut wrong),
            Err(Error::DTypeMismatch {
                lhs: DType::I64,
                rhs: DType::I32
            })
        ));
        assert_eq!(wrong.to_vec::<i32>(), [0, 0]);
    }
}
