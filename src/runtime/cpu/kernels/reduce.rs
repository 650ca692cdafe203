//! Reduction kernels
//!
//! Reductions are folded over contiguous rows: the caller moves every
//! reduced axis to the end, so each output element reduces one row of
//! `reduce_size` consecutive inputs.

use crate::dtype::Element;
use crate::ops::ReduceOp;

/// Reduce one contiguous row
///
/// `Max` and `Min` require a non-empty row. `Mean` of an empty row is NaN.
#[inline]
pub fn reduce_row<T: Element>(op: ReduceOp, row: &[T]) -> T {
    match op {
        ReduceOp::Sum => row.iter().fold(T::zero(), |acc, &x| acc.scan_add(x)),
        ReduceOp::Prod => row.iter().fold(T::one(), |acc, &x| acc.scan_mul(x)),
        ReduceOp::Mean => {
            let n = row.len() as f64;
            let sum = row.iter().fold(T::zero(), |acc, &x| acc.scan_add(x));
            T::from_parts(sum.to_f64() / n, sum.imag_f64() / n)
        }
        ReduceOp::Max => extremum(row, |x, best| x > best),
        ReduceOp::Min => extremum(row, |x, best| x < best),
    }
}

/// NaN-propagating extremum; the first NaN wins
#[inline]
fn extremum<T: Element>(row: &[T], better: impl Fn(T, T) -> bool) -> T {
    debug_assert!(!row.is_empty());
    let mut best = row[0];
    for &x in &row[1..] {
        if best.is_nan() {
            break;
        }
        if x.is_nan() || better(x, best) {
            best = x;
        }
    }
    best
}

/// Reduce consecutive rows of `reduce_size` elements into `out`
pub fn reduce_kernel<T: Element>(op: ReduceOp, a: &[T], out: &mut [T], reduce_size: usize) {
    if reduce_size == 0 {
        out.fill(reduce_row(op, &[]));
        return;
    }
    debug_assert_eq!(a.len(), out.len() * reduce_size);
    for (row, dst) in a.chunks_exact(reduce_size).zip(out.iter_mut()) {
        *dst = reduce_row(op, row);
    }
}

/// Sum of squared deviations from the row mean, per row
///
/// Two passes per row: the mean first, then the deviations.
pub fn sum_sq_dev_kernel(a: &[f64], out: &mut [f64], reduce_size: usize) {
    if reduce_size == 0 {
        out.fill(0.0);
        return;
    }
    for (row, dst) in a.chunks_exact(reduce_size).zip(out.iter_mut()) {
        let mean = row.iter().sum::<f64>() / reduce_size as f64;
        *dst = row.iter().map(|&x| (x - mean) * (x - mean)).sum();
    }
}
