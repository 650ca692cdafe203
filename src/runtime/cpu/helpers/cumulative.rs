//! Cumulative operation helpers for CPU tensors

use super::super::{CpuClient, kernels};
use super::cast::cast_impl;
use super::destination::{check_destination, write_destination};
use super::parallel::{for_each_block, for_each_block_pair};
use super::reorient::{move_axis_back, move_axis_last, normalize_axis, scan_with_mode};
use crate::dispatch_dtype;
use crate::dtype::{DType, DTypeSet, accumulation_dtype, comparison_dtype};
use crate::error::{Error, Result};
use crate::ops::{ScanMode, ScanOptions};
use crate::runtime::cpu::kernels::ScanOp;
use crate::tensor::Tensor;
use log::debug;

/// Dtypes a running product refuses, as input or as output
const CUMPROD_REJECTED: DTypeSet = DTypeSet::HALF;

/// Resolve and gate the output dtype of an arithmetic scan
fn resolve_scan_dtype(
    client: &CpuClient,
    op: ScanOp,
    input: DType,
    requested: Option<DType>,
) -> Result<DType> {
    if requested == Some(DType::Bool) {
        return Err(Error::unsupported_dtype(DType::Bool, op.name()));
    }
    let out = requested.unwrap_or_else(|| accumulation_dtype(input, client.defaults()));

    if op == ScanOp::Prod {
        for dtype in [input, out] {
            if CUMPROD_REJECTED.contains(dtype) {
                return Err(Error::unsupported_dtype(dtype, op.name()));
            }
        }
    }
    Ok(out)
}

/// Inclusive forward scan of `a` along `dim` into `out`
///
/// `out` must be contiguous with `a`'s shape and dtype.
fn scan_forward_into(
    client: &CpuClient,
    op: ScanOp,
    a: &Tensor,
    dim: usize,
    out: &mut Tensor,
) -> Result<()> {
    if a.numel() == 0 {
        return Ok(());
    }

    let src = a.contiguous();
    let scan_size = src.shape()[dim];
    let inner_size: usize = src.shape()[dim + 1..].iter().product();
    let input = src.storage();
    let output = out.storage_mut();

    dispatch_dtype!(src.dtype(), T => {
        let x = input.as_slice::<T>();
        let y = output.as_mut_slice::<T>();
        if inner_size == 1 {
            // Fast path: scan dimension is last (or tensor is 1D)
            for_each_block(client, x, scan_size, y, scan_size, |s, d| {
                kernels::scan_row(op, s, d)
            });
        } else {
            let block = scan_size * inner_size;
            for_each_block(client, x, block, y, block, |s, d| {
                kernels::scan_block(op, s, d, scan_size, inner_size)
            });
        }
    }, op.name());

    Ok(())
}

fn scan_forward(client: &CpuClient, op: ScanOp, a: &Tensor, dim: usize) -> Result<Tensor> {
    let mut out = Tensor::zeros(a.shape(), a.dtype());
    scan_forward_into(client, op, a, dim, &mut out)?;
    Ok(out)
}

/// Arithmetic scan under any mode, on an input already cast to its output dtype
fn arith_scan(
    client: &CpuClient,
    op: ScanOp,
    x: &Tensor,
    dim: usize,
    mode: ScanMode,
) -> Result<Tensor> {
    let [out] = scan_with_mode(client, x, dim, mode, op.identity_f64(), |x| {
        Ok([scan_forward(client, op, x, dim)?])
    })?;
    Ok(out)
}

fn arith_scan_impl(
    client: &CpuClient,
    op: ScanOp,
    a: &Tensor,
    dim: isize,
    options: ScanOptions,
) -> Result<Tensor> {
    let dim_idx = normalize_axis(a, dim)?;
    let dtype = resolve_scan_dtype(client, op, a.dtype(), options.dtype)?;
    debug!(
        "{}: shape={:?} dim={} mode={:?} {} -> {}",
        op.name(),
        a.shape(),
        dim_idx,
        options.mode,
        a.dtype(),
        dtype
    );

    let x = cast_impl(a, dtype)?;
    arith_scan(client, op, &x, dim_idx, options.mode)
}

fn arith_scan_into_impl(
    client: &CpuClient,
    op: ScanOp,
    a: &Tensor,
    dim: isize,
    options: ScanOptions,
    out: &mut Tensor,
) -> Result<()> {
    let dim_idx = normalize_axis(a, dim)?;
    let dtype = resolve_scan_dtype(client, op, a.dtype(), options.dtype)?;
    check_destination(out, a.shape(), dtype)?;
    debug!(
        "{}_into: shape={:?} dim={} mode={:?} {} -> {}",
        op.name(),
        a.shape(),
        dim_idx,
        options.mode,
        a.dtype(),
        dtype
    );

    let x = cast_impl(a, dtype)?;
    if options.mode == ScanMode::Inclusive {
        return scan_forward_into(client, op, &x, dim_idx, out);
    }

    let result = arith_scan(client, op, &x, dim_idx, options.mode)?;
    write_destination(&result, out);
    Ok(())
}

/// Cumulative sum along a dimension
pub fn cumsum_impl(
    client: &CpuClient,
    a: &Tensor,
    dim: isize,
    options: ScanOptions,
) -> Result<Tensor> {
    arith_scan_impl(client, ScanOp::Sum, a, dim, options)
}

/// Cumulative sum along a dimension into a caller-provided buffer
pub fn cumsum_into_impl(
    client: &CpuClient,
    a: &Tensor,
    dim: isize,
    options: ScanOptions,
    out: &mut Tensor,
) -> Result<()> {
    arith_scan_into_impl(client, ScanOp::Sum, a, dim, options, out)
}

/// Cumulative product along a dimension
pub fn cumprod_impl(
    client: &CpuClient,
    a: &Tensor,
    dim: isize,
    options: ScanOptions,
) -> Result<Tensor> {
    arith_scan_impl(client, ScanOp::Prod, a, dim, options)
}

/// Cumulative product along a dimension into a caller-provided buffer
pub fn cumprod_into_impl(
    client: &CpuClient,
    a: &Tensor,
    dim: isize,
    options: ScanOptions,
    out: &mut Tensor,
) -> Result<()> {
    arith_scan_into_impl(client, ScanOp::Prod, a, dim, options, out)
}

/// Inclusive forward running maximum: `[values, indices]`
fn cummax_forward(client: &CpuClient, x: &Tensor, dim: usize) -> Result<[Tensor; 2]> {
    let moved = move_axis_last(x, dim)?.contiguous();
    let shape = moved.shape().to_vec();
    let mut values = Tensor::zeros(&shape, x.dtype());
    let mut indices = Tensor::zeros(&shape, DType::I64);

    if moved.numel() > 0 {
        let len = shape[shape.len() - 1];
        let input = moved.storage();
        let index_out = indices.storage_mut().as_mut_slice::<i64>();
        dispatch_dtype!(x.dtype(), T => {
            for_each_block_pair(
                client,
                input.as_slice::<T>(),
                len,
                values.storage_mut().as_mut_slice::<T>(),
                index_out,
                kernels::cummax_row::<T>,
            );
        }, "cummax");
    }

    Ok([
        move_axis_back(&values, dim)?,
        move_axis_back(&indices, dim)?,
    ])
}

/// Running maximum with last-achieved indices
pub fn cummax_impl(
    client: &CpuClient,
    a: &Tensor,
    dim: isize,
    mode: ScanMode,
) -> Result<(Tensor, Tensor)> {
    let dim_idx = normalize_axis(a, dim)?;
    let dtype = comparison_dtype(a.dtype());
    debug!(
        "cummax: shape={:?} dim={} mode={:?} {} -> {}",
        a.shape(),
        dim_idx,
        mode,
        a.dtype(),
        dtype
    );

    let x = cast_impl(a, dtype)?;
    let [values, indices] = scan_with_mode(client, &x, dim_idx, mode, 0.0, |x| {
        cummax_forward(client, x, dim_idx)
    })?;
    Ok((values, indices))
}
