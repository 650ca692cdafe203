//! CPU implementation of reduction operations.

use crate::dtype::DType;
use crate::error::Result;
use crate::ops::{ReduceOp, ReduceOps};
use crate::runtime::cpu::{
    CpuClient,
    helpers::{
        mean_impl, mean_into_impl, prod_impl, prod_into_impl, reduce_impl, reduce_into_impl,
        sum_impl, sum_into_impl,
    },
};
use crate::tensor::Tensor;

/// ReduceOps implementation for the CPU client.
impl ReduceOps for CpuClient {
    fn sum(
        &self,
        a: &Tensor,
        dims: &[usize],
        keepdim: bool,
        dtype: Option<DType>,
    ) -> Result<Tensor> {
        sum_impl(self, a, dims, keepdim, dtype)
    }

    fn sum_into(
        &self,
        a: &Tensor,
        dims: &[usize],
        keepdim: bool,
        dtype: Option<DType>,
        out: &mut Tensor,
    ) -> Result<()> {
        sum_into_impl(self, a, dims, keepdim, dtype, out)
    }

    fn prod(
        &self,
        a: &Tensor,
        dims: &[usize],
        keepdim: bool,
        dtype: Option<DType>,
    ) -> Result<Tensor> {
        prod_impl(self, a, dims, keepdim, dtype)
    }

    fn prod_into(
        &self,
        a: &Tensor,
        dims: &[usize],
        keepdim: bool,
        dtype: Option<DType>,
        out: &mut Tensor,
    ) -> Result<()> {
        prod_into_impl(self, a, dims, keepdim, dtype, out)
    }

    fn mean(&self, a: &Tensor, dims: &[usize], keepdim: bool) -> Result<Tensor> {
        mean_impl(self, a, dims, keepdim)
    }

    fn mean_into(
        &self,
        a: &Tensor,
        dims: &[usize],
        keepdim: bool,
        out: &mut Tensor,
    ) -> Result<()> {
        mean_into_impl(self, a, dims, keepdim, out)
    }

    fn max(&self, a: &Tensor, dims: &[usize], keepdim: bool) -> Result<Tensor> {
        reduce_impl(self, ReduceOp::Max, a, dims, keepdim)
    }

    fn max_into(
        &self,
        a: &Tensor,
        dims: &[usize],
        keepdim: bool,
        out: &mut Tensor,
    ) -> Result<()> {
        reduce_into_impl(self, ReduceOp::Max, a, dims, keepdim, out)
    }

    fn min(&self, a: &Tensor, dims: &[usize], keepdim: bool) -> Result<Tensor> {
        reduce_impl(self, ReduceOp::Min, a, dims, keepdim)
    }

    fn min_into(
        &self,
        a: &Tensor,
        dims: &[usize],
        keepdim: bool,
        out: &mut Tensor,
    ) -> Result<()> {
        reduce_into_impl(self, ReduceOp::Min, a, dims, keepdim, out)
    }
}
