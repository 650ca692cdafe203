//! Dtype conversion helper

use super::super::kernels;
use crate::dispatch_dtype;
use crate::dtype::DType;
use crate::error::Result;
use crate::tensor::Tensor;

/// Cast a tensor to `dtype`
///
/// A no-op cast returns a view sharing the input storage. Otherwise the
/// result is a fresh contiguous tensor.
pub fn cast_impl(a: &Tensor, dtype: DType) -> Result<Tensor> {
    let src_dtype = a.dtype();
    if src_dtype == dtype {
        return Ok(a.clone());
    }

    let src = a.contiguous();
    let mut out = Tensor::zeros(src.shape(), dtype);
    if out.numel() == 0 {
        return Ok(out);
    }

    let input = src.storage();
    let output = out.storage_mut();
    match (src_dtype, dtype) {
        (DType::Bool, _) => {
            let bytes = input.as_slice::<u8>();
            dispatch_dtype!(dtype, D => {
                kernels::cast_from_bool_kernel::<D>(bytes, output.as_mut_slice::<D>());
            }, "cast");
        }
        (_, DType::Bool) => {
            let bytes = output.as_mut_slice::<u8>();
            dispatch_dtype!(src_dtype, S => {
                kernels::cast_to_bool_kernel::<S>(input.as_slice::<S>(), bytes);
            }, "cast");
        }
        _ => {
            dispatch_dtype!(src_dtype, S => {
                let values = input.as_slice::<S>();
                dispatch_dtype!(dtype, D => {
                    kernels::cast_kernel::<S, D>(values, output.as_mut_slice::<D>());
                }, "cast");
            }, "cast");
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cast_same_dtype_shares_storage() {
        let a = Tensor::from_slice(&[1.0f32, 2.0], &[2]);
        let b = cast_impl(&a, DType::F32).unwrap();
        assert!(a.storage().ptr_eq(b.storage()));
    }

    #[test]
    fn test_cast_strided_view() {
        let a = Tensor::from_slice(&[1i32, 2, 3, 4, 5, 6], &[2, 3]);
        let t = a.permute(&[1, 0]).unwrap();
        let b = cast_impl(&t, DType::F64).unwrap();
        assert_eq!(b.shape(), &[3, 2]);
        assert_eq!(b.to_vec::<f64>(), [1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn test_cast_bool() {
        let a = Tensor::from_bools(&[true, false, true], &[3]);
        let b = cast_impl(&a, DType::I64).unwrap();
        assert_eq!(b.to_vec::<i64>(), [1, 0, 1]);

        let c = cast_impl(&Tensor::from_slice(&[0.0f64, 0.5, -2.0], &[3]), DType::Bool).unwrap();
        assert_eq!(c.to_bool_vec(), [false, true, true]);
    }
}
