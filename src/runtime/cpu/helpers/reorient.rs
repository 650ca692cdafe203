//! Axis reorientation
//!
//! Every scan kernel only knows the inclusive forward scan. The other three
//! modes are produced here from zero-copy views (flip, permute, narrow) and
//! one concatenation applied to the input, so a value array and its index
//! companion come out of the same kernel call already aligned.

use super::super::CpuClient;
use super::shape::cat_impl;
use crate::error::{Error, Result};
use crate::ops::ScanMode;
use crate::tensor::Tensor;

/// Validate a scan axis, supporting negative indexing
pub(crate) fn normalize_axis(a: &Tensor, dim: isize) -> Result<usize> {
    a.layout().normalize_dim(dim).ok_or(Error::InvalidDimension {
        dim,
        ndim: a.ndim(),
    })
}

/// Permutation that moves `axes` (in the given order) behind all other axes
pub(crate) fn axes_last_permutation(ndim: usize, axes: &[usize]) -> Vec<usize> {
    (0..ndim)
        .filter(|d| !axes.contains(d))
        .chain(axes.iter().copied())
        .collect()
}

/// Inverse of a permutation
fn inverse_permutation(perm: &[usize]) -> Vec<usize> {
    let mut inv = vec![0; perm.len()];
    for (i, &p) in perm.iter().enumerate() {
        inv[p] = i;
    }
    inv
}

/// Move axis `dim` to the last position (zero-copy)
pub(crate) fn move_axis_last(t: &Tensor, dim: usize) -> Result<Tensor> {
    t.permute(&axes_last_permutation(t.ndim(), &[dim]))
}

/// Undo [`move_axis_last`] (zero-copy)
pub(crate) fn move_axis_back(t: &Tensor, dim: usize) -> Result<Tensor> {
    t.permute(&inverse_permutation(&axes_last_permutation(t.ndim(), &[dim])))
}

/// Shift `t` one step forward along `dim`
///
/// Moves `dim` last, drops the last slice, prepends a slice filled with
/// `fill` and moves the axis back. A zero-length axis is returned as is.
pub(crate) fn shift_exclusive(
    client: &CpuClient,
    t: &Tensor,
    dim: usize,
    fill: f64,
) -> Result<Tensor> {
    let len = t.shape()[dim];
    if len == 0 {
        return Ok(t.clone());
    }

    let moved = move_axis_last(t, dim)?;
    let head = moved.narrow(-1, 0, len - 1)?;
    let mut pad_shape = moved.shape().to_vec();
    if let Some(last) = pad_shape.last_mut() {
        *last = 1;
    }
    let pad = Tensor::full_scalar(&pad_shape, t.dtype(), fill)?;
    let shifted = cat_impl(client, &[&pad, &head], -1)?;
    move_axis_back(&shifted, dim)
}

/// Run an inclusive forward scan under any [`ScanMode`]
///
/// Reverse modes flip the input along `dim`. Exclusive modes then shift the
/// (possibly flipped) input one step forward with `pad` as the boundary
/// value before `scan` runs. `scan` returns `N` outputs of the input's shape,
/// which are flipped back for reverse modes and returned contiguous.
///
/// Index outputs are positions in the shifted traversal, so the boundary
/// slot itself is index `0`.
pub(crate) fn scan_with_mode<const N: usize, F>(
    client: &CpuClient,
    x: &Tensor,
    dim: usize,
    mode: ScanMode,
    pad: f64,
    scan: F,
) -> Result<[Tensor; N]>
where
    F: FnOnce(&Tensor) -> Result<[Tensor; N]>,
{
    let axis = dim as isize;
    let mut input = if mode.is_reverse() {
        x.flip(axis)?
    } else {
        x.clone()
    };
    if mode.is_exclusive() {
        input = shift_exclusive(client, &input, dim, pad)?;
    }

    let mut outputs = scan(&input)?;
    for out in outputs.iter_mut() {
        if mode.is_reverse() {
            *out = out.flip(axis)?;
        }
        *out = out.contiguous();
    }
    Ok(outputs)
}
