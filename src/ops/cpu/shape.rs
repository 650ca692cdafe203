//! CPU implementation of shape operations.

use crate::error::Result;
use crate::ops::ShapeOps;
use crate::runtime::cpu::{CpuClient, helpers::cat_impl};
use crate::tensor::Tensor;

/// ShapeOps implementation for the CPU client.
impl ShapeOps for CpuClient {
    fn cat(&self, tensors: &[&Tensor], dim: isize) -> Result<Tensor> {
        cat_impl(self, tensors, dim)
    }
}
