//! Tensor operations
//!
//! This module defines the operation traits and their CPU implementations.
//!
//! # Design
//!
//! Operations are defined as traits implemented by the client. The client
//! carries the configuration (default dtypes, parallel threshold) every op
//! needs to resolve dtypes and schedule kernels.
//!
//! ```text
//! CpuClient
//!   ├── CumulativeOps       cumsum, cumprod, cummax (+ _into variants)
//!   ├── ReduceOps           sum, prod, mean, max, min
//!   ├── StatisticalOps      var, std
//!   ├── ShapeOps            cat
//!   └── TypeConversionOps   cast
//! ```
//!
//! Helper types for operation parameters:
//! - [`ScanMode`], [`ScanOptions`] - scan direction, inclusivity, output dtype
//! - [`ReduceOp`] - reduction kinds
//! - [`Correction`] - degrees-of-freedom correction for var/std
//!
//! Validation helpers:
//! - [`reduce_output_shape`] - reduction output shape
//! - [`resolve_reduce_dims`] - reduction axis validation

pub(crate) mod cpu;
mod dispatch;
mod reduce;
mod scan;
pub mod traits;

pub use reduce::{
    Correction, ReduceOp, all_dims, reduce_output_shape, reduced_count, resolve_reduce_dims,
};
pub use scan::{ScanMode, ScanOptions};
pub use traits::{CumulativeOps, ReduceOps, ShapeOps, StatisticalOps, TypeConversionOps};
