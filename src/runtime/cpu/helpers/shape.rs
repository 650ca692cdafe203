//! Shape operation helpers for CPU tensors

use super::cast::cast_impl;
use super::super::CpuClient;
use crate::dtype::{DType, promote};
use crate::error::{Error, Result};
use crate::tensor::Tensor;

/// Validated parameters of a concatenation
#[derive(Debug)]
struct CatParams {
    dim_idx: usize,
    dtype: DType,
    out_shape: Vec<usize>,
    outer_size: usize,
    inner_size: usize,
}

fn validate_cat(tensors: &[&Tensor], dim: isize) -> Result<CatParams> {
    let Some((&first, rest)) = tensors.split_first() else {
        return Err(Error::invalid_argument(
            "tensors",
            "cat requires at least one tensor",
        ));
    };
    let ndim = first.ndim();
    if ndim == 0 {
        return Err(Error::invalid_argument(
            "tensors",
            "cannot concatenate scalar tensors",
        ));
    }

    let dim_idx = first
        .layout()
        .normalize_dim(dim)
        .ok_or(Error::InvalidDimension { dim, ndim })?;

    let mut dtype = first.dtype();
    let mut cat_dim_total = first.shape()[dim_idx];
    for &tensor in rest {
        let compatible = tensor.ndim() == ndim
            && first
                .shape()
                .iter()
                .zip(tensor.shape())
                .enumerate()
                .all(|(i, (&a, &b))| i == dim_idx || a == b);
        if !compatible {
            return Err(Error::shape_mismatch(first.shape(), tensor.shape()));
        }
        dtype = promote(dtype, tensor.dtype());
        cat_dim_total += tensor.shape()[dim_idx];
    }

    let mut out_shape = first.shape().to_vec();
    out_shape[dim_idx] = cat_dim_total;
    let outer_size = out_shape[..dim_idx].iter().product();
    let inner_size = out_shape[dim_idx + 1..].iter().product();

    Ok(CatParams {
        dim_idx,
        dtype,
        out_shape,
        outer_size,
        inner_size,
    })
}

/// Concatenate tensors along an existing dimension
///
/// Inputs are promoted to a common dtype and copied block by block: for
/// every outer index, each input contributes one contiguous run of
/// `size(dim) * inner` elements.
pub fn cat_impl(_client: &CpuClient, tensors: &[&Tensor], dim: isize) -> Result<Tensor> {
    let params = validate_cat(tensors, dim)?;
    let elem_size = params.dtype.size_in_bytes();

    let parts = tensors
        .iter()
        .map(|&t| Ok(cast_impl(t, params.dtype)?.contiguous()))
        .collect::<Result<Vec<_>>>()?;

    let mut out = Tensor::zeros(&params.out_shape, params.dtype);
    if out.numel() == 0 {
        return Ok(out);
    }

    let run_bytes: Vec<usize> = parts
        .iter()
        .map(|p| p.shape()[params.dim_idx] * params.inner_size * elem_size)
        .collect();
    let dst = out.storage_mut().as_bytes_mut();
    let mut pos = 0;
    for outer in 0..params.outer_size {
        for (part, &run) in parts.iter().zip(&run_bytes) {
            let src = &part.storage().as_bytes()[outer * run..(outer + 1) * run];
            dst[pos..pos + run].copy_from_slice(src);
            pos += run;
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cat_inner_dim() {
        let client = CpuClient::new();
        let a = Tensor::from_slice(&[1i32, 2, 3, 4], &[2, 2]);
        let b = Tensor::from_slice(&[5i32, 6], &[2, 1]);
        let c = cat_impl(&client, &[&a, &b], -1).unwrap();
        assert_eq!(c.shape(), &[2, 3]);
        assert_eq!(c.to_vec::<i32>(), [1, 2, 5, 3, 4, 6]);
    }

    #[test]
    fn test_cat_promotes() {
        let client = CpuClient::new();
        let a = Tensor::from_slice(&[1i32], &[1]);
        let b = Tensor::from_slice(&[2.5f64], &[1]);
        let c = cat_impl(&client, &[&a, &b], 0).unwrap();
        assert_eq!(c.dtype(), DType::F64);
        assert_eq!(c.to_vec::<f64>(), [1.0, 2.5]);
    }

    #[test]
    fn test_cat_errors() {
        let client = CpuClient::new();
        let a = Tensor::from_slice(&[1.0f32, 2.0], &[2, 1]);
        let b = Tensor::from_slice(&[1.0f32, 2.0], &[1, 2]);
        assert!(matches!(
            cat_impl(&client, &[&a, &b], 0),
            Err(Error::ShapeMismatch { .. })
        ));
        assert!(matches!(
            cat_impl(&client, &[&a], 2),
            Err(Error::InvalidDimension { .. })
        ));
        assert!(matches!(
            cat_impl(&client, &[], 0),
            Err(Error::InvalidArgument { .. })
        ));
    }
}
