//! Reduction operations helpers
//!
//! Shared shape bookkeeping and option types for the plain reductions and
//! the variance/standard-deviation statistics.

use crate::error::{Error, Result};

/// Reduction operation kind
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReduceOp {
    /// Sum of elements
    Sum,
    /// Mean of elements
    Mean,
    /// Maximum element
    Max,
    /// Minimum element
    Min,
    /// Product of elements
    Prod,
}

impl ReduceOp {
    /// Operation name used in errors and log records
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Mean => "mean",
            Self::Max => "max",
            Self::Min => "min",
            Self::Prod => "prod",
        }
    }
}

/// Degrees-of-freedom correction for variance and standard deviation
///
/// `Integer(0)` is the population statistic, `Integer(1)` the sample one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Correction {
    /// Divide the squared deviations by `N - n`
    Integer(usize),
    /// Population variance rescaled by `N / (N - c)`
    Fractional(f64),
}

impl Default for Correction {
    fn default() -> Self {
        Self::Integer(0)
    }
}

impl From<usize> for Correction {
    fn from(n: usize) -> Self {
        Self::Integer(n)
    }
}

impl From<f64> for Correction {
    fn from(c: f64) -> Self {
        Self::Fractional(c)
    }
}

impl Correction {
    /// The correction as a real number
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(n) => n as f64,
            Self::Fractional(c) => c,
        }
    }
}

/// Compute output shape for reduction
///
/// # Arguments
/// * `input_shape` - Shape of input tensor
/// * `dims` - Dimensions to reduce over
/// * `keepdim` - If true, keep reduced dimensions as size 1
pub fn reduce_output_shape(input_shape: &[usize], dims: &[usize], keepdim: bool) -> Vec<usize> {
    if keepdim {
        input_shape
            .iter()
            .enumerate()
            .map(|(i, &s)| if dims.contains(&i) { 1 } else { s })
            .collect()
    } else {
        input_shape
            .iter()
            .enumerate()
            .filter(|(i, _)| !dims.contains(i))
            .map(|(_, &s)| s)
            .collect()
    }
}

/// Validate reduction dimensions, expanding an empty list to every axis
///
/// The result is sorted ascending.
pub fn resolve_reduce_dims(ndim: usize, dims: &[usize]) -> Result<Vec<usize>> {
    if dims.is_empty() {
        return Ok(all_dims(ndim));
    }

    let mut resolved = Vec::with_capacity(dims.len());
    for &d in dims {
        if d >= ndim {
            return Err(Error::InvalidDimension {
                dim: d as isize,
                ndim,
            });
        }
        if resolved.contains(&d) {
            return Err(Error::invalid_argument(
                "dims",
                format!("dimension {d} listed more than once"),
            ));
        }
        resolved.push(d);
    }
    resolved.sort_unstable();
    Ok(resolved)
}

/// All dimensions for full reduction
pub fn all_dims(ndim: usize) -> Vec<usize> {
    (0..ndim).collect()
}

/// Number of elements folded into each output of a reduction
pub fn reduced_count(input_shape: &[usize], dims: &[usize]) -> usize {
    dims.iter().map(|&d| input_shape[d]).product()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_output_shape() {
        assert_eq!(reduce_output_shape(&[2, 3, 4], &[1], false), vec![2, 4]);
        assert_eq!(reduce_output_shape(&[2, 3, 4], &[1], true), vec![2, 1, 4]);

        assert_eq!(reduce_output_shape(&[2, 3, 4], &[0, 2], false), vec![3]);
        assert_eq!(
            reduce_output_shape(&[2, 3, 4], &[0, 2], true),
            vec![1, 3, 1]
        );

        // Reduce all dims
        assert!(reduce_output_shape(&[2, 3, 4], &[0, 1, 2], false).is_empty());
        assert_eq!(
            reduce_output_shape(&[2, 3, 4], &[0, 1, 2], true),
            vec![1, 1, 1]
        );
    }

    #[test]
    fn test_resolve_reduce_dims() {
        assert_eq!(resolve_reduce_dims(3, &[]).unwrap(), vec![0, 1, 2]);
        assert_eq!(resolve_reduce_dims(3, &[2, 0]).unwrap(), vec![0, 2]);
        assert!(matches!(
            resolve_reduce_dims(3, &[3]),
            Err(Error::InvalidDimension { dim: 3, ndim: 3 })
        ));
        assert!(matches!(
            resolve_reduce_dims(3, &[1, 1]),
            Err(Error::InvalidArgument { .. })
        ));
        assert!(resolve_reduce_dims(0, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_reduced_count() {
        assert_eq!(reduced_count(&[2, 3, 4], &[0, 2]), 8);
        assert_eq!(reduced_count(&[2, 0], &[1]), 0);
        assert_eq!(reduced_count(&[], &[]), 1);
    }

    #[test]
    fn test_correction_conversions() {
        assert_eq!(Correction::from(1usize), Correction::Integer(1));
        assert_eq!(Correction::from(0.5), Correction::Fractional(0.5));
        assert_eq!(Correction::default().as_f64(), 0.0);
    }
}
