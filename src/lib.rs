//! # scanr
//!
//! **Axis-wise cumulative reductions over dense N-dimensional arrays.**
//!
//! scanr computes running sums, running products and running maxima (with
//! the index where each maximum was last reached) along one axis of a
//! tensor, in any of four traversal modes: inclusive or exclusive, forward
//! or reverse. The plain reductions that share its dtype policy (sum, prod,
//! mean, min, max, var, std) come along.
//!
//! ## Features
//!
//! - **Scans**: cumsum, cumprod, cummax with [`ops::ScanMode`]
//! - **Destination buffers**: `cumsum_into` / `cumprod_into` write into an
//!   existing tensor
//! - **Reductions**: sum, prod, mean, max, min, var, std over any set of axes
//! - **Multiple dtypes**: f64, f32, f16, bf16, integers, bool, complex
//! - **Zero-copy views**: permute, flip and narrow share storage
//!
//! ## Quick Start
//!
//! ```rust
//! use scanr::prelude::*;
//!
//! let client = CpuClient::new();
//! let a = Tensor::from_slice(&[1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]);
//!
//! let rev = client.cumsum(&a, -1, ScanOptions::new().reverse(true))?;
//! assert_eq!(rev.to_vec::<f64>(), [6.0, 5.0, 3.0, 15.0, 11.0, 6.0]);
//!
//! let (values, indices) = client.cummax(&a, 0, ScanMode::Inclusive)?;
//! assert_eq!(values.to_vec::<f64>(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
//! assert_eq!(indices.to_vec::<i64>(), [0, 0, 0, 1, 1, 1]);
//! # Ok::<(), scanr::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): Multi-threaded CPU kernels
//! - `f16`: Half-precision floats (F16, BF16)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dtype;
pub mod error;
pub mod ops;
pub mod runtime;
pub mod tensor;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dtype::DType;
    pub use crate::error::{Error, Result};
    pub use crate::ops::{
        Correction, CumulativeOps, ReduceOps, ScanMode, ScanOptions, ShapeOps, StatisticalOps,
        TypeConversionOps,
    };
    pub use crate::runtime::cpu::{ClientConfig, CpuClient};
    pub use crate::tensor::{Layout, Tensor};
}
