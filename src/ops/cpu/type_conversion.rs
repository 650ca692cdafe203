//! CPU implementation of type conversion operations.

use crate::dtype::DType;
use crate::error::Result;
use crate::ops::TypeConversionOps;
use crate::runtime::cpu::{CpuClient, helpers::cast_impl};
use crate::tensor::Tensor;

/// TypeConversionOps implementation for the CPU client.
impl TypeConversionOps for CpuClient {
    fn cast(&self, a: &Tensor, dtype: DType) -> Result<Tensor> {
        cast_impl(a, dtype)
    }
}
