//! Cumulative operation kernels (running sum, running product, running maximum)
//!
//! All kernels take contiguous row-major slices. A scan over axis `d` of a
//! tensor is viewed as `(outer, scan, inner)`: element `[o, s, i]` lives at
//! `o * scan * inner + s * inner + i`. The kernels below process one outer
//! block; the caller iterates (or parallelizes) over blocks.

use crate::dtype::Element;

/// Associative operation of an arithmetic scan
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScanOp {
    /// Running sum
    Sum,
    /// Running product
    Prod,
}

impl ScanOp {
    /// Operation name used in errors and log records
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sum => "cumsum",
            Self::Prod => "cumprod",
        }
    }

    /// Identity element, used as the boundary fill of exclusive scans
    pub const fn identity_f64(self) -> f64 {
        match self {
            Self::Sum => 0.0,
            Self::Prod => 1.0,
        }
    }

    #[inline(always)]
    fn combine<T: Element>(self, acc: T, x: T) -> T {
        match self {
            Self::Sum => acc.scan_add(x),
            Self::Prod => acc.scan_mul(x),
        }
    }
}

/// Inclusive scan of one contiguous row
///
/// The first output is the first input itself, so no identity element ever
/// enters the fold.
#[inline]
pub fn scan_row<T: Element>(op: ScanOp, src: &[T], dst: &mut [T]) {
    debug_assert_eq!(src.len(), dst.len());
    let mut pairs = src.iter().zip(dst.iter_mut());
    let Some((&first, out)) = pairs.next() else {
        return;
    };
    let mut acc = first;
    *out = acc;
    for (&x, out) in pairs {
        acc = op.combine(acc, x);
        *out = acc;
    }
}

/// Inclusive scan of one `(scan, inner)` block along its leading axis
///
/// Each step combines a whole previous slice with the current input slice,
/// which keeps the inner loop unit-stride.
pub fn scan_block<T: Element>(
    op: ScanOp,
    src: &[T],
    dst: &mut [T],
    scan_size: usize,
    inner_size: usize,
) {
    debug_assert_eq!(src.len(), scan_size * inner_size);
    debug_assert_eq!(dst.len(), src.len());
    if scan_size == 0 || inner_size == 0 {
        return;
    }

    dst[..inner_size].copy_from_slice(&src[..inner_size]);
    for s in 1..scan_size {
        let (done, rest) = dst.split_at_mut(s * inner_size);
        let prev = &done[(s - 1) * inner_size..];
        let cur = &mut rest[..inner_size];
        let x = &src[s * inner_size..(s + 1) * inner_size];
        for ((out, &p), &v) in cur.iter_mut().zip(prev).zip(x) {
            *out = op.combine(p, v);
        }
    }
}

/// Running maximum together with the position it was last achieved at
///
/// The value and the index are tracked separately. A NaN poisons the value
/// for the rest of the row but never takes the index, which keeps pointing at
/// the last position whose value is `>=` the value at the previous index.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RunningMax<T> {
    /// Largest value seen so far, NaN once a NaN was seen
    pub value: T,
    /// Position of the last occurrence of the largest comparable value
    pub index: i64,
    /// Element at `index`
    best: T,
}

impl<T: Element> RunningMax<T> {
    /// Seed the accumulator with the first element
    #[inline]
    pub fn start(value: T) -> Self {
        Self {
            value,
            index: 0,
            best: value,
        }
    }

    /// Fold in the element at `index`
    ///
    /// Ties move the index forward.
    #[inline]
    pub fn update(&mut self, x: T, index: i64) {
        if !self.value.is_nan() && (x.is_nan() || x >= self.value) {
            self.value = x;
        }
        // Comparisons with NaN are false on both sides
        if self.best <= x {
            self.best = x;
            self.index = index;
        }
    }
}

/// Inclusive running maximum of one contiguous row, with indices
pub fn cummax_row<T: Element>(src: &[T], values: &mut [T], indices: &mut [i64]) {
    debug_assert_eq!(src.len(), values.len());
    debug_assert_eq!(src.len(), indices.len());
    let Some(&first) = src.first() else {
        return;
    };

    let mut acc = RunningMax::start(first);
    for (i, ((&x, value), index)) in src.iter().zip(values.iter_mut()).zip(indices).enumerate() {
        if i > 0 {
            acc.update(x, i as i64);
        }
        *value = acc.value;
        *index = acc.index;
    }
}
