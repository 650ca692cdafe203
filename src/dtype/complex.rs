//! Complex number element types
//!
//! `Complex64` and `Complex128` are `#[repr(C)]` pairs of floats stored in
//! interleaved format (re, im, re, im...), so tensors of them can live in the
//! same byte storage as every other dtype.
//!
//! Ordering is lexicographic (real part first, then imaginary part). Scans
//! that need a total order over real numbers project to the real component
//! before comparing, see [`crate::dtype::comparison_dtype`].

use bytemuck::{Pod, Zeroable};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Implements a complex type over one float width.
macro_rules! impl_complex {
    ($name:ident, $float:ty, $doc_bits:literal, $doc_float_bits:literal) => {
        #[doc = concat!($doc_bits, "-bit complex number with ", $doc_float_bits, " real and imaginary parts")]
        #[repr(C)]
        #[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
        pub struct $name {
            /// Real part
            pub re: $float,
            /// Imaginary part
            pub im: $float,
        }

        impl $name {
            /// Zero complex number
            pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

            /// One (real unit)
            pub const ONE: Self = Self { re: 1.0, im: 0.0 };

            /// Create a new complex number
            #[inline]
            pub const fn new(re: $float, im: $float) -> Self {
                Self { re, im }
            }

            /// Magnitude (absolute value): |z| = sqrt(re² + im²)
            #[inline]
            pub fn magnitude(self) -> $float {
                self.re.hypot(self.im)
            }

            /// Complex conjugate: conj(a + bi) = a - bi
            #[inline]
            pub fn conj(self) -> Self {
                Self {
                    re: self.re,
                    im: -self.im,
                }
            }
        }

        impl Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self {
                    re: self.re + rhs.re,
                    im: self.im + rhs.im,
                }
            }
        }

        impl Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self {
                    re: self.re - rhs.re,
                    im: self.im - rhs.im,
                }
            }
        }

        impl Mul for $name {
            type Output = Self;

            /// (a+bi)(c+di) = (ac-bd) + (ad+bc)i
            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self {
                    re: self.re * rhs.re - self.im * rhs.im,
                    im: self.re * rhs.im + self.im * rhs.re,
                }
            }
        }

        impl Div for $name {
            type Output = Self;

            #[inline]
            fn div(self, rhs: Self) -> Self {
                let denom = rhs.re * rhs.re + rhs.im * rhs.im;
                Self {
                    re: (self.re * rhs.re + self.im * rhs.im) / denom,
                    im: (self.im * rhs.re - self.re * rhs.im) / denom,
                }
            }
        }

        impl Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self {
                    re: -self.re,
                    im: -self.im,
                }
            }
        }

        impl PartialOrd for $name {
            #[inline]
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                match self.re.partial_cmp(&other.re)? {
                    Ordering::Equal => self.im.partial_cmp(&other.im),
                    ord => Some(ord),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.im >= 0.0 {
                    write!(f, "{}+{}i", self.re, self.im)
                } else {
                    write!(f, "{}{}i", self.re, self.im)
                }
            }
        }

        impl From<$float> for $name {
            #[inline]
            fn from(re: $float) -> Self {
                Self { re, im: 0.0 }
            }
        }
    };
}

impl_complex!(Complex64, f32, "64", "f32");
impl_complex!(Complex128, f64, "128", "f64");

impl From<Complex64> for Complex128 {
    #[inline]
    fn from(c: Complex64) -> Self {
        Self {
            re: c.re as f64,
            im: c.im as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Complex64::new(1.0, 2.0);
        let b = Complex64::new(3.0, 4.0);

        assert_eq!(a + b, Complex64::new(4.0, 6.0));
        assert_eq!(a - b, Complex64::new(-2.0, -2.0));
        // (1+2i)(3+4i) = -5 + 10i
        assert_eq!(a * b, Complex64::new(-5.0, 10.0));
        assert_eq!(-a, Complex64::new(-1.0, -2.0));
    }

    #[test]
    fn test_division() {
        // 1/i = -i
        let q = Complex128::ONE / Complex128::new(0.0, 1.0);
        assert!(q.re.abs() < 1e-12);
        assert!((q.im + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_lexicographic_order() {
        let a = Complex128::new(1.0, 5.0);
        let b = Complex128::new(2.0, -3.0);
        let c = Complex128::new(1.0, 6.0);
        assert!(a < b);
        assert!(a < c);
        assert!(c < b);
    }

    #[test]
    fn test_layout() {
        assert_eq!(std::mem::size_of::<Complex64>(), 8);
        assert_eq!(std::mem::size_of::<Complex128>(), 16);
        let z = Complex128::new(3.0, 4.0);
        assert_eq!(z.magnitude(), 5.0);
        assert_eq!(bytemuck::bytes_of(&z).len(), 16);
    }
}
