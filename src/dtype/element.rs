//! Element trait for mapping Rust types to DType

use super::DType;
use super::complex::{Complex64, Complex128};
use bytemuck::{Pod, Zeroable};
use std::ops::{Add, Mul};

/// Trait for types that can be elements of a tensor
///
/// This trait connects Rust's type system to scanr's runtime dtype system.
/// It's implemented for all primitive numeric types and the complex types.
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - Basic trait requirements
/// - `Pod + Zeroable` - Safe reinterpretation of tensor storage (bytemuck)
/// - `Add + Mul` - Arithmetic operations (Output = Self)
/// - `PartialOrd` - Comparison for running maxima and min/max reductions
pub trait Element:
    Copy
    + Send
    + Sync
    + Pod
    + Zeroable
    + 'static
    + Add<Output = Self>
    + Mul<Output = Self>
    + PartialOrd
{
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Convert to f64
    ///
    /// For complex types this returns the **real part**; the imaginary part is
    /// available through [`Element::imag_f64`].
    fn to_f64(self) -> f64;

    /// Convert from f64 to this type
    ///
    /// For complex types, this creates a real number (imaginary part = 0).
    fn from_f64(v: f64) -> Self;

    /// Imaginary part as f64 (zero for real types)
    #[inline]
    fn imag_f64(self) -> f64 {
        0.0
    }

    /// Build a value from real and imaginary parts, dropping the imaginary
    /// part for real types
    #[inline]
    fn from_parts(re: f64, _im: f64) -> Self {
        Self::from_f64(re)
    }

    /// Exact integer view used by integer-to-integer casts
    #[inline]
    fn to_i128(self) -> i128 {
        self.to_f64() as i128
    }

    /// Build from an integer, wrapping to the target width for integer types
    #[inline]
    fn from_i128(v: i128) -> Self {
        Self::from_f64(v as f64)
    }

    /// Zero value
    fn zero() -> Self;

    /// One value
    fn one() -> Self;

    /// Addition used by running sums; integers wrap on overflow
    #[inline]
    fn scan_add(self, rhs: Self) -> Self {
        self + rhs
    }

    /// Multiplication used by running products; integers wrap on overflow
    #[inline]
    fn scan_mul(self, rhs: Self) -> Self {
        self * rhs
    }

    /// NaN test; always false for integers
    #[inline]
    #[allow(clippy::eq_op)]
    fn is_nan(self) -> bool {
        self != self
    }
}

macro_rules! impl_float_element {
    ($ty:ty, $dtype:ident) => {
        impl Element for $ty {
            const DTYPE: DType = DType::$dtype;

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $ty
            }

            #[inline]
            fn zero() -> Self {
                0.0
            }

            #[inline]
            fn one() -> Self {
                1.0
            }
        }
    };
}

macro_rules! impl_int_element {
    ($ty:ty, $dtype:ident) => {
        impl Element for $ty {
            const DTYPE: DType = DType::$dtype;

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $ty
            }

            #[inline]
            fn to_i128(self) -> i128 {
                self as i128
            }

            #[inline]
            fn from_i128(v: i128) -> Self {
                v as $ty
            }

            #[inline]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn one() -> Self {
                1
            }

            #[inline]
            fn scan_add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline]
            fn scan_mul(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }

            #[inline]
            fn is_nan(self) -> bool {
                false
            }
        }
    };
}

impl_float_element!(f64, F64);
impl_float_element!(f32, F32);

impl_int_element!(i64, I64);
impl_int_element!(i32, I32);
impl_int_element!(i16, I16);
impl_int_element!(i8, I8);
impl_int_element!(u64, U64);
impl_int_element!(u32, U32);
impl_int_element!(u16, U16);
impl_int_element!(u8, U8);

// Note: bool doesn't implement Pod, so we can't implement Element for it directly.
// Boolean tensors use u8 internally.

// ============================================================================
// Half-precision floating point types (requires "f16" feature)
// ============================================================================

#[cfg(feature = "f16")]
impl Element for half::f16 {
    const DTYPE: DType = DType::F16;

    #[inline]
    fn to_f64(self) -> f64 {
        half::f16::to_f64(self)
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        half::f16::from_f64(v)
    }

    #[inline]
    fn zero() -> Self {
        half::f16::ZERO
    }

    #[inline]
    fn one() -> Self {
        half::f16::ONE
    }
}

#[cfg(feature = "f16")]
impl Element for half::bf16 {
    const DTYPE: DType = DType::BF16;

    #[inline]
    fn to_f64(self) -> f64 {
        half::bf16::to_f64(self)
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        half::bf16::from_f64(v)
    }

    #[inline]
    fn zero() -> Self {
        half::bf16::ZERO
    }

    #[inline]
    fn one() -> Self {
        half::bf16::ONE
    }
}

// ============================================================================
// Complex types
// ============================================================================

impl Element for Complex64 {
    const DTYPE: DType = DType::Complex64;

    #[inline]
    fn to_f64(self) -> f64 {
        self.re as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        Self::new(v as f32, 0.0)
    }

    #[inline]
    fn imag_f64(self) -> f64 {
        self.im as f64
    }

    #[inline]
    fn from_parts(re: f64, im: f64) -> Self {
        Self::new(re as f32, im as f32)
    }

    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn one() -> Self {
        Self::ONE
    }

    #[inline]
    fn is_nan(self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }
}

impl Element for Complex128 {
    const DTYPE: DType = DType::Complex128;

    #[inline]
    fn to_f64(self) -> f64 {
        self.re
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        Self::new(v, 0.0)
    }

    #[inline]
    fn imag_f64(self) -> f64 {
        self.im
    }

    #[inline]
    fn from_parts(re: f64, im: f64) -> Self {
        Self::new(re, im)
    }

    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn one() -> Self {
        Self::ONE
    }

    #[inline]
    fn is_nan(self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }
}
