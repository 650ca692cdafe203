//! DType dispatch utilities
//!
//! This module provides the `dispatch_dtype!` macro for runtime type dispatch:
//! it converts a `DType` value into a concrete Rust type bound to an
//! identifier inside a code block.
//!
//! # Usage
//!
//! ```ignore
//! fn my_operation(dtype: DType) -> Result<usize> {
//!     dispatch_dtype!(dtype, T => {
//!         // T is now a concrete type (f32, f64, i32, etc.)
//!         Ok(std::mem::size_of::<T>())
//!     }, "my_operation")
//! }
//! ```
//!
//! # Arguments
//!
//! * `$dtype` - Expression evaluating to a `DType` value
//! * `$T` - Identifier to bind to the concrete type in the body
//! * `$body` - Code block to execute with `T` bound
//! * `$error_op` - Operation name for error messages
//!
//! # Supported Types
//!
//! - `F64`, `F32`, integer dtypes and complex dtypes map to their Rust types
//! - `F16` / `BF16` -> `half::f16` / `half::bf16` (requires the "f16" feature,
//!   otherwise `FeatureRequired`)
//! - `Bool` -> returns `UnsupportedDType`; boolean tensors are handled
//!   explicitly as `u8` where an operation accepts them
//!
//! The macro expands to `return Err(..)` on failure, so it must be used inside
//! a function returning `crate::error::Result`.

/// Internal helper macro to dispatch types requiring the "f16" feature.
#[macro_export]
#[doc(hidden)]
macro_rules! dispatch_f16_type {
    ($T:ident, $body:block, $dtype:expr, $error_op:expr, $type:ty) => {{
        #[cfg(feature = "f16")]
        {
            type $T = $type;
            $body
        }
        #[cfg(not(feature = "f16"))]
        {
            let _ = $error_op;
            return Err($crate::error::Error::FeatureRequired {
                dtype: $dtype,
                feature: "f16",
            });
        }
    }};
}

/// Macro for runtime dtype dispatch to typed operations.
///
/// Executes a code block with `T` bound to the Rust type of a `DType`.
#[macro_export]
macro_rules! dispatch_dtype {
    ($dtype:expr, $T:ident => $body:block, $error_op:expr) => {
        match $dtype {
            $crate::dtype::DType::F64 => {
                type $T = f64;
                $body
            }
            $crate::dtype::DType::F32 => {
                type $T = f32;
                $body
            }
            $crate::dtype::DType::F16 => {
                $crate::dispatch_f16_type!($T, $body, $dtype, $error_op, half::f16)
            }
            $crate::dtype::DType::BF16 => {
                $crate::dispatch_f16_type!($T, $body, $dtype, $error_op, half::bf16)
            }
            $crate::dtype::DType::I64 => {
                type $T = i64;
                $body
            }
            $crate::dtype::DType::I32 => {
                type $T = i32;
                $body
            }
            $crate::dtype::DType::I16 => {
                type $T = i16;
                $body
            }
            $crate::dtype::DType::I8 => {
                type $T = i8;
                $body
            }
            $crate::dtype::DType::U64 => {
                type $T = u64;
                $body
            }
            $crate::dtype::DType::U32 => {
                type $T = u32;
                $body
            }
            $crate::dtype::DType::U16 => {
                type $T = u16;
                $body
            }
            $crate::dtype::DType::U8 => {
                type $T = u8;
                $body
            }
            $crate::dtype::DType::Bool => {
                return Err($crate::error::Error::UnsupportedDType {
                    dtype: $dtype,
                    op: $error_op,
                })
            }
            $crate::dtype::DType::Complex64 => {
                type $T = $crate::dtype::Complex64;
                $body
            }
            $crate::dtype::DType::Complex128 => {
                type $T = $crate::dtype::Complex128;
                $body
            }
        }
    };
}
