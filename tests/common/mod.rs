//! Common test utilities
#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scanr::runtime::cpu::{ClientConfig, CpuClient};
use scanr::tensor::Tensor;

/// Create a CPU client for testing
pub fn create_cpu_client() -> CpuClient {
    CpuClient::new()
}

/// Create a CPU client that parallelizes from two rows on
pub fn create_parallel_client() -> CpuClient {
    CpuClient::with_config(ClientConfig::default().with_parallel_min_rows(2))
}

/// Deterministic RNG for property tests
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Random f64 tensor with values in `[-10, 10)`
pub fn random_f64(rng: &mut StdRng, shape: &[usize]) -> Tensor {
    let n: usize = shape.iter().product();
    let data: Vec<f64> = (0..n).map(|_| rng.random_range(-10.0..10.0)).collect();
    Tensor::from_slice(&data, shape)
}

/// Random i64 tensor with values in `[-5, 5]`, so ties are frequent
pub fn random_i64(rng: &mut StdRng, shape: &[usize]) -> Tensor {
    let n: usize = shape.iter().product();
    let data: Vec<i64> = (0..n).map(|_| rng.random_range(-5..=5)).collect();
    Tensor::from_slice(&data, shape)
}

/// Random shape of rank 1..=4 with sizes 1..=5
pub fn random_shape(rng: &mut StdRng) -> Vec<usize> {
    let rank = rng.random_range(1..=4);
    (0..rank).map(|_| rng.random_range(1..=5)).collect()
}

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Assert two f32 slices are close within tolerance
pub fn assert_allclose_f32(a: &[f32], b: &[f32], rtol: f32, atol: f32, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Naive reference scan of a contiguous tensor along `dim`
///
/// Walks every `(outer, inner)` lane with explicit index arithmetic.
pub fn reference_cumsum(data: &[f64], shape: &[usize], dim: usize) -> Vec<f64> {
    let scan = shape[dim];
    let inner: usize = shape[dim + 1..].iter().product();
    let outer: usize = shape[..dim].iter().product();
    let mut out = data.to_vec();
    for o in 0..outer {
        for i in 0..inner {
            let mut acc = 0.0;
            for s in 0..scan {
                let idx = (o * scan + s) * inner + i;
                acc += data[idx];
                out[idx] = acc;
            }
        }
    }
    out
}
