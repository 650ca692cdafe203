//! Type promotion rules
//!
//! Every scan and reduction resolves its working dtype through the pure
//! functions in this module, so the policy lives in one place:
//!
//! - [`accumulation_dtype`]: what cumsum/cumprod/prod accumulate in when no
//!   dtype is requested
//! - [`comparison_dtype`]: what cummax compares in (a totally ordered real type)
//! - [`promote`]: common dtype of two operands (used by concatenation)

use super::{DType, DTypeKind};

/// Runtime default dtypes, one per kind
///
/// The defaults mirror a 64-bit integer / 32-bit float runtime. They are part
/// of the client configuration, so a caller can pick e.g. `F64` as the
/// default float.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DefaultDTypes {
    /// Default signed integer dtype (also used for booleans)
    pub int: DType,
    /// Default unsigned integer dtype
    pub uint: DType,
    /// Default floating point dtype
    pub float: DType,
    /// Default complex dtype
    pub complex: DType,
}

impl Default for DefaultDTypes {
    fn default() -> Self {
        Self {
            int: DType::I64,
            uint: DType::U64,
            float: DType::F32,
            complex: DType::Complex64,
        }
    }
}

impl DefaultDTypes {
    /// The default dtype for a kind. Booleans map to the default integer.
    #[inline]
    pub const fn for_kind(&self, kind: DTypeKind) -> DType {
        match kind {
            DTypeKind::Bool | DTypeKind::SignedInt => self.int,
            DTypeKind::UnsignedInt => self.uint,
            DTypeKind::Float => self.float,
            DTypeKind::Complex => self.complex,
        }
    }
}

/// Width of a dtype in bits. `Bool` counts as a single bit.
#[inline]
pub const fn dtype_bits(dtype: DType) -> usize {
    match dtype {
        DType::Bool => 1,
        _ => dtype.size_in_bytes() * 8,
    }
}

/// The runtime default dtype of the same kind as `dtype`
#[inline]
pub const fn infer_default_dtype(dtype: DType, defaults: &DefaultDTypes) -> DType {
    defaults.for_kind(dtype.kind())
}

/// Dtype a running sum or product accumulates in when none is requested
///
/// Booleans accumulate in the default integer type. Any other dtype narrower
/// than its kind's default is widened to that default; otherwise the input
/// dtype is kept.
pub fn accumulation_dtype(dtype: DType, defaults: &DefaultDTypes) -> DType {
    if dtype.is_bool() {
        return defaults.int;
    }
    let default = infer_default_dtype(dtype, defaults);
    if dtype_bits(dtype) < dtype_bits(default) {
        default
    } else {
        dtype
    }
}

/// Dtype a running maximum compares in
///
/// - `Bool` → `F64`
/// - 8/16-bit integers → `I64`
/// - complex → its real component type
/// - everything else unchanged
pub const fn comparison_dtype(dtype: DType) -> DType {
    match dtype {
        DType::Bool => DType::F64,
        DType::I8 | DType::I16 | DType::U8 | DType::U16 => DType::I64,
        DType::Complex64 => DType::F32,
        DType::Complex128 => DType::F64,
        other => other,
    }
}

/// Promote two dtypes to a common dtype
///
/// Follows NumPy-like promotion rules:
/// - Complex wins over floats, floats win over integers
/// - Larger types win over smaller types
/// - Signed wins over unsigned when mixing
pub fn promote(lhs: DType, rhs: DType) -> DType {
    use DType::*;

    if lhs == rhs {
        return lhs;
    }

    // Promotion priority (higher = wins)
    let priority = |dt: DType| -> u8 {
        match dt {
            Complex128 => 120,
            Complex64 => 110,
            F64 => 100,
            F32 => 90,
            BF16 => 85,
            F16 => 80,
            I64 => 65,
            U64 => 60,
            I32 => 55,
            U32 => 50,
            I16 => 45,
            U16 => 40,
            I8 => 35,
            U8 => 30,
            Bool => 25,
        }
    };

    // Mixing signed and unsigned integers: signed type of same or larger size
    if lhs.is_signed_int() && rhs.is_unsigned_int() {
        return match (lhs, rhs) {
            (I64, _) => I64,
            (I32, U64 | U32) => I64,
            (I32, _) => I32,
            (I16, U64 | U32 | U16) => I32,
            (I16, _) => I16,
            (I8, U64 | U32 | U16 | U8) => I16,
            _ => I64,
        };
    }
    if rhs.is_signed_int() && lhs.is_unsigned_int() {
        return promote(rhs, lhs);
    }

    if priority(lhs) >= priority(rhs) {
        lhs
    } else {
        rhs
    }
}
