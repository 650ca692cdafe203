//! Memory kernels: element-wise dtype conversion

use crate::dtype::Element;

/// Convert every element of `src` into `dst`
///
/// Integer pairs convert through `i128` (two's-complement wrap to the target
/// width). Everything else goes through the `(re, im)` pair in `f64`, which
/// keeps the real part for complex → real and truncates toward zero
/// (saturating) for float → int.
pub fn cast_kernel<S: Element, D: Element>(src: &[S], dst: &mut [D]) {
    debug_assert_eq!(src.len(), dst.len());
    if S::DTYPE.is_int() && D::DTYPE.is_int() {
        for (d, &s) in dst.iter_mut().zip(src) {
            *d = D::from_i128(s.to_i128());
        }
    } else {
        for (d, &s) in dst.iter_mut().zip(src) {
            *d = D::from_parts(s.to_f64(), s.imag_f64());
        }
    }
}

/// Convert boolean bytes (0/1) into a numeric dtype
pub fn cast_from_bool_kernel<D: Element>(src: &[u8], dst: &mut [D]) {
    debug_assert_eq!(src.len(), dst.len());
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = if s != 0 { D::one() } else { D::zero() };
    }
}

/// Convert a numeric dtype into boolean bytes; any non-zero value is `true`
pub fn cast_to_bool_kernel<S: Element>(src: &[S], dst: &mut [u8]) {
    debug_assert_eq!(src.len(), dst.len());
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = (s != S::zero()) as u8;
    }
}
