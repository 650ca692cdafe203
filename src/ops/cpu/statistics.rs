//! CPU implementation of statistical operations.

use crate::error::Result;
use crate::ops::{Correction, StatisticalOps};
use crate::runtime::cpu::{
    CpuClient,
    helpers::{std_impl, std_into_impl, var_impl, var_into_impl},
};
use crate::tensor::Tensor;

/// StatisticalOps implementation for the CPU client.
impl StatisticalOps for CpuClient {
    fn var(
        &self,
        a: &Tensor,
        dims: &[usize],
        keepdim: bool,
        correction: Correction,
    ) -> Result<Tensor> {
        var_impl(self, a, dims, keepdim, correction)
    }

    fn var_into(
        &self,
        a: &Tensor,
        dims: &[usize],
        keepdim: bool,
        correction: Correction,
        out: &mut Tensor,
    ) -> Result<()> {
        var_into_impl(self, a, dims, keepdim, correction, out)
    }

    fn std(
        &self,
        a: &Tensor,
        dims: &[usize],
        keepdim: bool,
        correction: Correction,
    ) -> Result<Tensor> {
        std_impl(self, a, dims, keepdim, correction)
    }

    fn std_into(
        &self,
        a: &Tensor,
        dims: &[usize],
        keepdim: bool,
        correction: Correction,
        out: &mut Tensor,
    ) -> Result<()> {
        std_into_impl(self, a, dims, keepdim, correction, out)
    }
}
