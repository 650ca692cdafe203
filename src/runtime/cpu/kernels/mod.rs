//! CPU kernel implementations
//!
//! This module provides low-level compute kernels for CPU operations.
//! Kernels are generic over `T: Element`, take contiguous slices and never
//! allocate; dtype dispatch and parallel scheduling happen in `helpers`.

pub mod cumulative;
pub mod memory;
pub mod reduce;

pub use cumulative::{ScanOp, cummax_row, scan_block, scan_row};
pub use memory::{cast_from_bool_kernel, cast_kernel, cast_to_bool_kernel};
pub use reduce::{reduce_kernel, reduce_row, sum_sq_dev_kernel};
