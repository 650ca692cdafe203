//! Helper functions for CPU tensor operations
//!
//! This module contains the functions behind the operation trait
//! implementations, organized by functional category. Helpers validate
//! arguments, resolve dtypes, and dispatch to typed kernels.

pub mod cast;
pub mod cumulative;
pub(crate) mod destination;
pub(crate) mod parallel;
pub mod reduce;
pub(crate) mod reorient;
pub mod shape;
pub mod statistics;

pub use cast::cast_impl;
pub use cumulative::{cummax_impl, cumprod_impl, cumprod_into_impl, cumsum_impl, cumsum_into_impl};
pub use reduce::{
    mean_impl, mean_into_impl, prod_impl, prod_into_impl, reduce_impl, reduce_into_impl, sum_impl,
    sum_into_impl,
};
pub use shape::cat_impl;
pub use statistics::{std_impl, std_into_impl, var_impl, var_into_impl};
