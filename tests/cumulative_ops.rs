//! Integration tests for cumulative arithmetic scans (cumsum, cumprod)
//!
//! Tests verify correctness across:
//! - Different dimensions and negative dimension indexing
//! - All four scan modes
//! - Output dtype resolution and dtype gates
//! - Destination buffers
//! - Edge cases (empty tensors, strided inputs, integer overflow)

mod common;

use common::{create_cpu_client, create_parallel_client};
use scanr::dtype::DType;
use scanr::error::Error;
use scanr::ops::{CumulativeOps, ScanMode, ScanOptions};
use scanr::tensor::Tensor;

fn opts(exclusive: bool, reverse: bool) -> ScanOptions {
    ScanOptions::new().exclusive(exclusive).reverse(reverse)
}

// ============================================================================
// Cumsum Tests
// ============================================================================

#[test]
fn test_cumsum_1d() {
    let client = create_cpu_client();
    let a = Tensor::from_slice(&[1.0f32, 2.0, 3.0, 4.0, 5.0], &[5]);

    let result = client.cumsum(&a, 0, ScanOptions::new()).unwrap();

    assert_eq!(result.shape(), &[5]);
    assert_eq!(result.dtype(), DType::F32);
    assert_eq!(result.to_vec::<f32>(), [1.0, 3.0, 6.0, 10.0, 15.0]);
}

#[test]
fn test_cumsum_2d_dim0() {
    let client = create_cpu_client();
    // Shape [3, 2]
    let a = Tensor::from_slice(&[1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0], &[3, 2]);

    let result = client.cumsum(&a, 0, ScanOptions::new()).unwrap();

    // Column-wise cumsum:
    // [1, 2] -> [1, 2]
    // [3, 4] -> [4, 6]
    // [5, 6] -> [9, 12]
    assert_eq!(result.to_vec::<f64>(), [1.0, 2.0, 4.0, 6.0, 9.0, 12.0]);
}

#[test]
fn test_cumsum_negative_dim() {
    let client = create_cpu_client();
    let a = Tensor::from_slice(&[1i64, 2, 3, 4, 5, 6, 7, 8], &[2, 4]);

    let result = client.cumsum(&a, -1, ScanOptions::new()).unwrap();

    // [1, 2, 3, 4] -> [1, 3, 6, 10]
    // [5, 6, 7, 8] -> [5, 11, 18, 26]
    assert_eq!(result.to_vec::<i64>(), [1, 3, 6, 10, 5, 11, 18, 26]);
}

#[test]
fn test_cumsum_modes() {
    let client = create_cpu_client();
    let a = Tensor::from_slice(&[1i64, 2, 3, 4], &[4]);

    let cases = [
        (false, false, [1, 3, 6, 10]),
        (true, false, [0, 1, 3, 6]),
        (false, true, [10, 9, 7, 4]),
        (true, true, [9, 7, 4, 0]),
    ];
    for (exclusive, reverse, expected) in cases {
        let result = client.cumsum(&a, 0, opts(exclusive, reverse)).unwrap();
        assert_eq!(
            result.to_vec::<i64>(),
            expected,
            "exclusive={exclusive} reverse={reverse}"
        );
    }
}

#[test]
fn test_cumsum_modes_middle_axis() {
    let client = create_cpu_client();
    // Shape [2, 3, 2]
    let data: Vec<i32> = (1..=12).collect();
    let a = Tensor::from_slice(&data, &[2, 3, 2]);

    let excl = client.cumsum(&a, 1, opts(true, false)).unwrap();
    assert_eq!(excl.dtype(), DType::I64);
    assert_eq!(excl.shape(), &[2, 3, 2]);
    assert_eq!(
        excl.to_vec::<i64>(),
        [0, 0, 1, 2, 4, 6, 0, 0, 7, 8, 16, 18]
    );

    let rev = client.cumsum(&a, 1, opts(false, true)).unwrap();
    assert_eq!(
        rev.to_vec::<i64>(),
        [9, 12, 8, 10, 5, 6, 27, 30, 20, 22, 11, 12]
    );
}

#[test]
fn test_cumsum_dtype_resolution() {
    let client = create_cpu_client();

    // Narrow integers widen to the default integer
    let a = Tensor::from_slice(&[100i8, 100, 100], &[3]);
    let result = client.cumsum(&a, 0, ScanOptions::new()).unwrap();
    assert_eq!(result.dtype(), DType::I64);
    assert_eq!(result.to_vec::<i64>(), [100, 200, 300]);

    // Unsigned widen to the default unsigned
    let a = Tensor::from_slice(&[1u8, 2], &[2]);
    let result = client.cumsum(&a, 0, ScanOptions::new()).unwrap();
    assert_eq!(result.dtype(), DType::U64);

    // Booleans count in the default integer
    let a = Tensor::from_bools(&[true, false, true, true], &[4]);
    let result = client.cumsum(&a, 0, ScanOptions::new()).unwrap();
    assert_eq!(result.dtype(), DType::I64);
    assert_eq!(result.to_vec::<i64>(), [1, 1, 2, 3]);

    // F64 is wider than the default float and is kept
    let a = Tensor::from_slice(&[0.5f64, 0.25], &[2]);
    let result = client.cumsum(&a, 0, ScanOptions::new()).unwrap();
    assert_eq!(result.dtype(), DType::F64);
}

#[test]
fn test_cumsum_explicit_dtype() {
    let client = create_cpu_client();
    let a = Tensor::from_slice(&[1i32, 2, 3], &[3]);

    let result = client
        .cumsum(&a, 0, ScanOptions::new().dtype(DType::F32))
        .unwrap();
    assert_eq!(result.dtype(), DType::F32);
    assert_eq!(result.to_vec::<f32>(), [1.0, 3.0, 6.0]);

    // An explicit narrow dtype is honoured verbatim and wraps
    let a = Tensor::from_slice(&[100i32, 100], &[2]);
    let result = client
        .cumsum(&a, 0, ScanOptions::new().dtype(DType::I8))
        .unwrap();
    assert_eq!(result.to_vec::<i8>(), [100, -56]);
}

#[test]
fn test_cumsum_rejects_bool_output() {
    let client = create_cpu_client();
    let a = Tensor::from_slice(&[1.0f32, 2.0], &[2]);
    let err = client
        .cumsum(&a, 0, ScanOptions::new().dtype(DType::Bool))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::UnsupportedDType {
            dtype: DType::Bool,
            ..
        }
    ));
}

#[test]
fn test_cumsum_invalid_dim() {
    let client = create_cpu_client();
    let a = Tensor::from_slice(&[1.0f32, 2.0, 3.0, 4.0], &[2, 2]);

    for dim in [2, -3] {
        let err = client.cumsum(&a, dim, ScanOptions::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidDimension { ndim: 2, .. }));
    }

    // A 0-d tensor has no axis at all
    let scalar = Tensor::from_slice(&[1.0f32], &[]);
    assert!(matches!(
        client.cumsum(&scalar, 0, ScanOptions::new()),
        Err(Error::InvalidDimension { ndim: 0, .. })
    ));
}

#[test]
fn test_cumsum_empty() {
    let client = create_cpu_client();
    let a = Tensor::zeros(&[0, 3], DType::I32);

    for mode in [
        ScanMode::Inclusive,
        ScanMode::Exclusive,
        ScanMode::Reverse,
        ScanMode::ReverseExclusive,
    ] {
        for dim in [0, 1] {
            let result = client.cumsum(&a, dim, ScanOptions::from(mode)).unwrap();
            assert_eq!(result.shape(), &[0, 3]);
            assert_eq!(result.dtype(), DType::I64);
            assert_eq!(result.numel(), 0);
        }
    }
}

#[test]
fn test_cumsum_strided_input() {
    let client = create_cpu_client();
    // [[1, 2, 3], [4, 5, 6]] transposed to [[1, 4], [2, 5], [3, 6]]
    let a = Tensor::from_slice(&[1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]);
    let t = a.permute(&[1, 0]).unwrap();
    assert!(!t.is_contiguous());

    let result = client.cumsum(&t, 0, ScanOptions::new()).unwrap();
    assert_eq!(result.shape(), &[3, 2]);
    assert_eq!(result.to_vec::<f64>(), [1.0, 4.0, 3.0, 9.0, 6.0, 15.0]);
}

#[test]
fn test_cumsum_does_not_modify_input() {
    let client = create_cpu_client();
    let a = Tensor::from_slice(&[1.0f32, 2.0, 3.0], &[3]);
    let _ = client.cumsum(&a, 0, opts(true, true)).unwrap();
    assert_eq!(a.to_vec::<f32>(), [1.0, 2.0, 3.0]);
}

#[test]
fn test_cumsum_integer_overflow_wraps() {
    let client = create_cpu_client();
    let a = Tensor::from_slice(&[i64::MAX, 1], &[2]);
    let result = client.cumsum(&a, 0, ScanOptions::new()).unwrap();
    assert_eq!(result.to_vec::<i64>(), [i64::MAX, i64::MIN]);
}

#[test]
fn test_cumsum_complex() {
    use scanr::dtype::Complex64;

    let client = create_cpu_client();
    let a = Tensor::from_slice(
        &[Complex64::new(1.0, 1.0), Complex64::new(2.0, -3.0)],
        &[2],
    );
    let result = client.cumsum(&a, 0, opts(true, false)).unwrap();
    assert_eq!(result.dtype(), DType::Complex64);
    assert_eq!(
        result.to_vec::<Complex64>(),
        [Complex64::new(0.0, 0.0), Complex64::new(1.0, 1.0)]
    );
}

#[test]
fn test_cumsum_parallel_matches_sequential() {
    let sequential = create_cpu_client();
    let parallel = create_parallel_client();
    let data: Vec<f64> = (0..600).map(|i| (i % 17) as f64 * 0.5).collect();
    let a = Tensor::from_slice(&data, &[20, 6, 5]);

    for dim in 0..3 {
        for (exclusive, reverse) in [(false, false), (true, true)] {
            let s = sequential.cumsum(&a, dim, opts(exclusive, reverse)).unwrap();
            let p = parallel.cumsum(&a, dim, opts(exclusive, reverse)).unwrap();
            assert_eq!(s.to_vec::<f64>(), p.to_vec::<f64>(), "dim={dim}");
        }
    }
}

// ============================================================================
// Cumprod Tests
// ============================================================================

#[test]
fn test_cumprod_1d() {
    let client = create_cpu_client();
    let a = Tensor::from_slice(&[1.0f32, 2.0, 3.0, 4.0], &[4]);

    let result = client.cumprod(&a, 0, ScanOptions::new()).unwrap();
    assert_eq!(result.to_vec::<f32>(), [1.0, 2.0, 6.0, 24.0]);
}

#[test]
fn test_cumprod_modes() {
    let client = create_cpu_client();
    let a = Tensor::from_slice(&[2i64, 3, 4], &[3]);

    let cases = [
        (false, false, [2, 6, 24]),
        (true, false, [1, 2, 6]),
        (false, true, [24, 12, 4]),
        (true, true, [12, 4, 1]),
    ];
    for (exclusive, reverse, expected) in cases {
        let result = client.cumprod(&a, 0, opts(exclusive, reverse)).unwrap();
        assert_eq!(
            result.to_vec::<i64>(),
            expected,
            "exclusive={exclusive} reverse={reverse}"
        );
    }
}

#[test]
fn test_cumprod_bool() {
    let client = create_cpu_client();
    let a = Tensor::from_bools(&[true, false, true], &[3]);

    let result = client.cumprod(&a, 0, ScanOptions::new()).unwrap();
    assert_eq!(result.dtype(), DType::I64);
    assert_eq!(result.to_vec::<i64>(), [1, 0, 0]);
}

#[test]
fn test_cumprod_2d_dim0() {
    let client = create_cpu_client();
    let a = Tensor::from_slice(&[1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0], &[3, 2]);

    let result = client.cumprod(&a, 0, ScanOptions::new()).unwrap();
    // [1, 2] -> [1, 2]
    // [3, 4] -> [3, 8]
    // [5, 6] -> [15, 48]
    assert_eq!(result.to_vec::<f64>(), [1.0, 2.0, 3.0, 8.0, 15.0, 48.0]);
}

#[test]
fn test_cumprod_rejects_half_precision() {
    let client = create_cpu_client();

    let a = Tensor::zeros(&[3], DType::F16);
    assert!(matches!(
        client.cumprod(&a, 0, ScanOptions::new()),
        Err(Error::UnsupportedDType {
            dtype: DType::F16,
            ..
        })
    ));

    let b = Tensor::from_slice(&[1.0f32, 2.0], &[2]);
    assert!(matches!(
        client.cumprod(&b, 0, ScanOptions::new().dtype(DType::BF16)),
        Err(Error::UnsupportedDType {
            dtype: DType::BF16,
            ..
        })
    ));
}

#[test]
fn test_cumprod_rejects_bool_output() {
    let client = create_cpu_client();
    let a = Tensor::from_slice(&[1i32, 2], &[2]);
    assert!(matches!(
        client.cumprod(&a, 0, ScanOptions::new().dtype(DType::Bool)),
        Err(Error::UnsupportedDType { .. })
    ));
}

#[test]
fn test_cumprod_with_zero() {
    let client = create_cpu_client();
    let a = Tensor::from_slice(&[1.0f32, 2.0, 0.0, 4.0, 5.0], &[5]);
    let result = client.cumprod(&a, 0, ScanOptions::new()).unwrap();
    assert_eq!(result.to_vec::<f32>(), [1.0, 2.0, 0.0, 0.0, 0.0]);
}

// ============================================================================
// Destination buffer Tests
// ============================================================================

#[test]
fn test_cumsum_into() {
    let client = create_cpu_client();
    let a = Tensor::from_slice(&[1i32, 2, 3, 4, 5, 6], &[2, 3]);
    let mut out = Tensor::zeros(&[2, 3], DType::I64);

    client
        .cumsum_into(&a, 1, ScanOptions::new(), &mut out)
        .unwrap();
    assert_eq!(out.to_vec::<i64>(), [1, 3, 6, 4, 9, 15]);

    client.cumsum_into(&a, 1, opts(true, true), &mut out).unwrap();
    assert_eq!(out.to_vec::<i64>(), [5, 3, 0, 11, 6, 0]);
}

#[test]
fn test_cumprod_into() {
    let client = create_cpu_client();
    let a = Tensor::from_slice(&[1.0f64, 2.0, 3.0, 4.0], &[2, 2]);
    let mut out = Tensor::zeros(&[2, 2], DType::F64);

    client
        .cumprod_into(&a, 0, ScanOptions::new().exclusive(true), &mut out)
        .unwrap();
    assert_eq!(out.to_vec::<f64>(), [1.0, 1.0, 1.0, 2.0]);
}

#[test]
fn test_into_matches_allocating_variant() {
    let client = create_cpu_client();
    let data: Vec<f32> = (0..24).map(|i| i as f32 * 0.25 - 2.0).collect();
    let a = Tensor::from_slice(&data, &[2, 3, 4]);

    for dim in [0, 1, 2] {
        for mode in [ScanMode::Inclusive, ScanMode::ReverseExclusive] {
            let options = ScanOptions::from(mode);
            let expected = client.cumsum(&a, dim, options).unwrap();
            let mut out = Tensor::zeros(&[2, 3, 4], DType::F32);
            client.cumsum_into(&a, dim, options, &mut out).unwrap();
            assert_eq!(out.to_vec::<f32>(), expected.to_vec::<f32>());
        }
    }
}

#[test]
fn test_into_validates_destination() {
    let client = create_cpu_client();
    let a = Tensor::from_slice(&[1.0f32, 2.0, 3.0, 4.0], &[2, 2]);

    let mut wrong_shape = Tensor::zeros(&[4], DType::F32);
    assert!(matches!(
        client.cumsum_into(&a, 0, ScanOptions::new(), &mut wrong_shape),
        Err(Error::ShapeMismatch { .. })
    ));

    let mut wrong_dtype = Tensor::zeros(&[2, 2], DType::F64);
    assert!(matches!(
        client.cumsum_into(&a, 0, ScanOptions::new(), &mut wrong_dtype),
        Err(Error::DTypeMismatch {
            lhs: DType::F32,
            rhs: DType::F64
        })
    ));

    let mut strided = Tensor::zeros(&[2, 2], DType::F32).permute(&[1, 0]).unwrap();
    assert!(matches!(
        client.cumprod_into(&a, 0, ScanOptions::new(), &mut strided),
        Err(Error::NotContiguous)
    ));

    // Nothing was written on failure
    assert_eq!(wrong_dtype.to_vec::<f64>(), [0.0; 4]);
}

#[test]
fn test_into_does_not_touch_shared_storage() {
    let client = create_cpu_client();
    let a = Tensor::from_slice(&[1i64, 2, 3], &[3]);
    let mut out = Tensor::zeros(&[3], DType::I64);
    let alias = out.clone();

    client.cumsum_into(&a, 0, ScanOptions::new(), &mut out).unwrap();
    assert_eq!(out.to_vec::<i64>(), [1, 3, 6]);
    assert_eq!(alias.to_vec::<i64>(), [0, 0, 0]);
}
