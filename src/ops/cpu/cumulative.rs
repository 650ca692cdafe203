//! CPU implementation of cumulative operations.

use crate::error::Result;
use crate::ops::{CumulativeOps, ScanMode, ScanOptions};
use crate::runtime::cpu::{
    CpuClient,
    helpers::{cummax_impl, cumprod_impl, cumprod_into_impl, cumsum_impl, cumsum_into_impl},
};
use crate::tensor::Tensor;

/// CumulativeOps implementation for the CPU client.
impl CumulativeOps for CpuClient {
    fn cumsum(&self, a: &Tensor, dim: isize, options: ScanOptions) -> Result<Tensor> {
        cumsum_impl(self, a, dim, options)
    }

    fn cumsum_into(
        &self,
        a: &Tensor,
        dim: isize,
        options: ScanOptions,
        out: &mut Tensor,
    ) -> Result<()> {
        cumsum_into_impl(self, a, dim, options, out)
    }

    fn cumprod(&self, a: &Tensor, dim: isize, options: ScanOptions) -> Result<Tensor> {
        cumprod_impl(self, a, dim, options)
    }

    fn cumprod_into(
        &self,
        a: &Tensor,
        dim: isize,
        options: ScanOptions,
        out: &mut Tensor,
    ) -> Result<()> {
        cumprod_into_impl(self, a, dim, options, out)
    }

    fn cummax(&self, a: &Tensor, dim: isize, mode: ScanMode) -> Result<(Tensor, Tensor)> {
        cummax_impl(self, a, dim, mode)
    }
}
