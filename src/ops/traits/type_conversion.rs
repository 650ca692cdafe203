//! Type conversion operations trait.

use crate::dtype::DType;
use crate::error::Result;
use crate::tensor::Tensor;

/// Type conversion operations
pub trait TypeConversionOps {
    /// Cast tensor to a different data type.
    ///
    /// The output tensor has the same shape as the input.
    ///
    /// # Supported Conversions
    ///
    /// - **Integer ↔ integer**: two's-complement wrap to the target width
    /// - **Float → int**: truncates toward zero, saturating at the bounds
    /// - **Bool**: reads as 0/1; any non-zero value becomes `true`
    /// - **Complex → real**: keeps the real part
    ///
    /// # Errors
    ///
    /// Returns `FeatureRequired` for half-precision dtypes without the `f16`
    /// feature.
    fn cast(&self, a: &Tensor, dtype: DType) -> Result<Tensor>;
}
