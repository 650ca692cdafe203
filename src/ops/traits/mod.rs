//! Operation traits for tensor operations.
//!
//! This module contains trait definitions for the tensor operations.
//! Implementations live in the backend module (`ops/cpu`).

mod cumulative;
mod reduce;
mod shape;
mod statistics;
mod type_conversion;

pub use cumulative::CumulativeOps;
pub use reduce::ReduceOps;
pub use shape::ShapeOps;
pub use statistics::StatisticalOps;
pub use type_conversion::TypeConversionOps;
