//! CPU runtime implementation
//!
//! Kernels operate on contiguous row-major slices. Strided inputs (views
//! produced by permute, flip or narrow) are materialized with
//! `Tensor::contiguous` before a kernel runs, so every kernel sees a plain
//! `(outer, scan, inner)` block structure.
//!
//! # Parallelism
//!
//! With the `rayon` feature, independent outer rows are split across the
//! global rayon pool once their count reaches
//! [`ClientConfig::parallel_min_rows`]. Each row is folded sequentially, so
//! results do not depend on the thread count.

mod client;
pub(crate) mod helpers;
pub(crate) mod kernels;

pub use crate::tensor::Tensor;
pub use client::{ClientConfig, CpuClient, DEFAULT_PARALLEL_MIN_ROWS};
