use std::fmt::Debug;

use bytemuck::Pod;

use crate::core::Repr;

/// A numeric value as handed to or read from a widening vector.
///
/// Every stored element converts into one of these three forms without loss,
/// so it also serves as the pivot for element-to-element casts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl Number {
    /// True if `self` can be stored in `repr` and read back unchanged.
    pub fn fits(self, repr: Repr) -> bool {
        match (repr.int_range(), self) {
            (None, Number::Float(_)) => true,
            (None, Number::Int(v)) => v as f64 as i128 == v as i128,
            (None, Number::UInt(v)) => v as f64 as i128 == v as i128,
            (Some((lo, hi)), Number::Int(v)) => lo <= v as i128 && v as i128 <= hi,
            (Some((lo, hi)), Number::UInt(v)) => v as i128 <= hi && lo <= v as i128,
            (Some((lo, hi)), Number::Float(v)) => {
                // fract() of NaN and infinities is NaN, so they never fit an integer.
                // -0.0 would come back as 0 and lose its sign.
                v.fract() == 0.0
                    && !(v == 0.0 && v.is_sign_negative())
                    && v >= lo as f64
                    && v < hi as f64 + 1.0
            }
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::UInt(v) => v as f64,
            Number::Float(v) => v,
        }
    }

    pub fn cast<T: Element>(self) -> T {
        T::from_number(self)
    }
}

/// Primitive element type that can be stored in or read out of a widening
/// vector. Conversions follow `as` semantics: narrowing truncates.
pub trait Element: Pod + PartialEq + Debug + Send + Sync + 'static {
    fn into_number(self) -> Number;

    fn from_number(value: Number) -> Self;
}

macro_rules! impl_element {
    ($variant:ident, $wide:ty, $($t:ty),+) => {
        $(
            impl Element for $t {
                #[inline]
                fn into_number(self) -> Number {
                    Number::$variant(self as $wide)
                }

                #[inline]
                fn from_number(value: Number) -> Self {
                    match value {
                        Number::Int(v) => v as $t,
                        Number::UInt(v) => v as $t,
                        Number::Float(v) => v as $t,
                    }
                }
            }

            impl From<$t> for Number {
                fn from(value: $t) -> Self {
                    value.into_number()
                }
            }
        )+
    };
}

impl_element!(UInt, u64, u8, u16, u32, u64, usize);
impl_element!(Int, i64, i8, i16, i32, i64);
impl_element!(Float, f64, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fits_integers() {
        assert!(Number::Int(200).fits(Repr::UInt8));
        assert!(!Number::Int(256).fits(Repr::UInt8));
        assert!(!Number::Int(-1).fits(Repr::UInt8));
        assert!(Number::Int(-128).fits(Repr::Int8));
        assert!(!Number::UInt(u64::MAX).fits(Repr::Int64));
        assert!(Number::UInt(u64::MAX).fits(Repr::UInt64));
    }

    #[test]
    fn test_fits_floats() {
        assert!(Number::Float(3.0).fits(Repr::UInt8));
        assert!(!Number::Float(3.5).fits(Repr::Int64));
        assert!(!Number::Float(f64::NAN).fits(Repr::Int64));
        assert!(!Number::Float(f64::INFINITY).fits(Repr::Int64));
        assert!(Number::Float(-9.223372036854775808e18).fits(Repr::Int64));
        assert!(!Number::Float(9.223372036854775808e18).fits(Repr::Int64));
        assert!(Number::Float(f64::NAN).fits(Repr::Float64));
    }

    #[test]
    fn test_negative_zero_only_fits_float() {
        assert!(Number::Float(0.0).fits(Repr::UInt8));
        assert!(!Number::Float(-0.0).fits(Repr::UInt8));
        assert!(!Number::Float(-0.0).fits(Repr::Int64));
        assert!(Number::Float(-0.0).fits(Repr::Float64));
    }

    #[test]
    fn test_large_integers_do_not_fit_float_exactly() {
        assert!(Number::Int(1 << 53).fits(Repr::Float64));
        assert!(!Number::Int((1 << 53) + 1).fits(Repr::Float64));
    }

    #[test]
    fn test_cast_truncates() {
        assert_eq!(Number::Int(300).cast::<u8>(), 44);
        assert_eq!(Number::Float(2.9).cast::<i32>(), 2);
        assert_eq!(Number::Int(-1).cast::<u16>(), u16::MAX);
        assert_eq!(Number::UInt(5).cast::<f32>(), 5.0);
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(Number::from(7u8), Number::UInt(7));
        assert_eq!(Number::from(-7i16), Number::Int(-7));
        assert_eq!(Number::from(0.5f32), Number::Float(0.5));
    }
}
