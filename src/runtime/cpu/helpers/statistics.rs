//! Variance and standard deviation helpers for CPU tensors

use super::super::{CpuClient, kernels};
use super::cast::cast_impl;
use super::destination::{check_destination, reduced_shape, write_destination};
use super::parallel::for_each_block;
use super::reduce::prepare_rows;
use crate::dtype::DType;
use crate::error::{Error, Result};
use crate::ops::{Correction, reduced_count, resolve_reduce_dims};
use crate::tensor::Tensor;
use log::debug;

/// Per-output sum of squared deviations (f64) and the reduced count
fn sum_sq_dev(
    client: &CpuClient,
    op: &'static str,
    a: &Tensor,
    dims: &[usize],
    keepdim: bool,
) -> Result<(Tensor, usize)> {
    if a.dtype().is_complex() {
        return Err(Error::unsupported_dtype(a.dtype(), op));
    }

    let prep = prepare_rows(&cast_impl(a, DType::F64)?, dims, keepdim)?;
    let mut out = Tensor::zeros(&prep.out_shape, DType::F64);
    if out.numel() > 0 {
        let x = prep.rows.storage().as_slice::<f64>();
        let y = out.storage_mut().as_mut_slice::<f64>();
        let n = prep.reduce_size;
        if n == 0 {
            kernels::sum_sq_dev_kernel(x, y, 0);
        } else {
            for_each_block(client, x, n, y, 1, |row, dst| {
                kernels::sum_sq_dev_kernel(row, dst, n)
            });
        }
    }
    Ok((out, prep.reduce_size))
}

/// Apply `f` to every element of an f64 tensor in place
fn map_f64(mut t: Tensor, f: impl Fn(f64) -> f64) -> Tensor {
    for v in t.storage_mut().as_mut_slice::<f64>() {
        *v = f(*v);
    }
    t
}

/// `input` when it is a float dtype, else `fallback`
fn float_or(input: DType, fallback: DType) -> DType {
    if input.is_float() { input } else { fallback }
}

/// Output dtype of a variance over `n` elements
fn var_dtype(client: &CpuClient, input: DType, n: usize, correction: Correction) -> DType {
    match correction {
        Correction::Fractional(_) if n == 0 => float_or(input, client.default_float()),
        _ => input,
    }
}

/// Variance along dimensions
pub fn var_impl(
    client: &CpuClient,
    a: &Tensor,
    dims: &[usize],
    keepdim: bool,
    correction: Correction,
) -> Result<Tensor> {
    let (ss, n) = sum_sq_dev(client, "var", a, dims, keepdim)?;
    debug!(
        "var: shape={:?} dims={:?} keepdim={} correction={:?} n={}",
        a.shape(),
        dims,
        keepdim,
        correction,
        n
    );

    let count = n as f64;
    let var = match correction {
        Correction::Integer(c) => {
            let divisor = count - c as f64;
            map_f64(ss, |s| s / divisor)
        }
        Correction::Fractional(_) if n == 0 => map_f64(ss, |_| f64::NAN),
        Correction::Fractional(c) => {
            let rescale = count / (count - c);
            map_f64(ss, |s| s / count * rescale)
        }
    };
    cast_impl(&var, var_dtype(client, a.dtype(), n, correction))
}

/// Variance along dimensions into a caller-provided buffer
pub fn var_into_impl(
    client: &CpuClient,
    a: &Tensor,
    dims: &[usize],
    keepdim: bool,
    correction: Correction,
    out: &mut Tensor,
) -> Result<()> {
    let n = reduced_count(a.shape(), &resolve_reduce_dims(a.ndim(), dims)?);
    let dtype = var_dtype(client, a.dtype(), n, correction);
    check_destination(out, &reduced_shape(a, dims, keepdim)?, dtype)?;
    write_destination(&var_impl(client, a, dims, keepdim, correction)?, out);
    Ok(())
}

/// Standard deviation along dimensions
pub fn std_impl(
    client: &CpuClient,
    a: &Tensor,
    dims: &[usize],
    keepdim: bool,
    correction: Correction,
) -> Result<Tensor> {
    let (ss, n) = sum_sq_dev(client, "std", a, dims, keepdim)?;
    debug!(
        "std: shape={:?} dims={:?} keepdim={} correction={:?} n={}",
        a.shape(),
        dims,
        keepdim,
        correction,
        n
    );

    let divisor = n as f64 - correction.as_f64();
    let std = map_f64(ss, |s| (s / divisor).sqrt());
    cast_impl(&std, float_or(a.dtype(), DType::F64))
}

/// Standard deviation along dimensions into a caller-provided buffer
pub fn std_into_impl(
    client: &CpuClient,
    a: &Tensor,
    dims: &[usize],
    keepdim: bool,
    correction: Correction,
    out: &mut Tensor,
) -> Result<()> {
    let dtype = float_or(a.dtype(), DType::F64);
    check_destination(out, &reduced_shape(a, dims, keepdim)?, dtype)?;
    write_destination(&std_impl(client, a, dims, keepdim, correction)?, out);
    Ok(())
}
