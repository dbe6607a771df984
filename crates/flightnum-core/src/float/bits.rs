// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! IEEE-754 storage layout.
//!
//! [`IeeeFloat`] ties each float type to its unsigned storage integer and the
//! field masks of its encoding. The masks come from `MANTISSA_DIGITS` and the
//! storage width through a single template, so `f32` and `f64` cannot drift
//! apart.

use num_traits::{Float, PrimInt, Signed, Unsigned};
use std::fmt::{Debug, Display};
use std::hash::Hash;

mod ieee_float {
    pub trait Sealed {}
}

/// A float type with an IEEE-754 binary interchange layout.
///
/// This trait is sealed; it is implemented for `f32` and `f64`.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::float::bits::IeeeFloat;
/// assert_eq!(<f32 as IeeeFloat>::MANT_LEN, 23);
/// assert_eq!(<f64 as IeeeFloat>::EXP_LEN, 11);
/// assert_eq!(<f32 as IeeeFloat>::EXP_MASK, 0x7F80_0000);
/// assert_eq!(1.0f64.to_raw_bits(), 0x3FF0_0000_0000_0000);
/// ```
pub trait IeeeFloat:
    Float + Debug + Display + Default + Send + Sync + ieee_float::Sealed + 'static
{
    /// Unsigned integer of the same width.
    type Bits: PrimInt + Unsigned + Debug + Hash;
    /// Signed integer of the same width, for bit-pattern ordinals.
    type Ordinal: PrimInt + Signed + Debug + Hash;

    /// Storage width in bits.
    const STORAGE_BITS: u32;
    /// Width of the stored mantissa field (without the implicit bit).
    const MANT_LEN: u32;
    /// Width of the exponent field.
    const EXP_LEN: u32;
    /// Exponent bias.
    const EXP_BIAS: i32;
    const SIGN_MASK: Self::Bits;
    const EXP_MASK: Self::Bits;
    const MANT_MASK: Self::Bits;
    /// Largest finite value.
    const MAX: Self;

    /// Reinterprets the value as its storage bits.
    fn to_raw_bits(self) -> Self::Bits;

    /// Reinterprets storage bits as a value.
    fn from_raw_bits(bits: Self::Bits) -> Self;

    /// Reinterprets storage bits as a signed ordinal of the same width.
    fn bits_to_ordinal(bits: Self::Bits) -> Self::Ordinal;
}

macro_rules! impl_ieee_float {
    ($t:ident, $bits:ident, $ord:ident) => {
        impl ieee_float::Sealed for $t {}
        impl IeeeFloat for $t {
            type Bits = $bits;
            type Ordinal = $ord;

            const STORAGE_BITS: u32 = $bits::BITS;
            const MANT_LEN: u32 = $t::MANTISSA_DIGITS - 1;
            const EXP_LEN: u32 = Self::STORAGE_BITS - Self::MANT_LEN - 1;
            const EXP_BIAS: i32 = (1 << (Self::EXP_LEN - 1)) - 1;
            const SIGN_MASK: $bits = 1 << (Self::STORAGE_BITS - 1);
            const EXP_MASK: $bits = ((1 << Self::EXP_LEN) - 1) << Self::MANT_LEN;
            const MANT_MASK: $bits = (1 << Self::MANT_LEN) - 1;
            const MAX: Self = $t::MAX;

            #[inline(always)]
            fn to_raw_bits(self) -> $bits {
                self.to_bits()
            }

            #[inline(always)]
            fn from_raw_bits(bits: $bits) -> Self {
                $t::from_bits(bits)
            }

            #[inline(always)]
            fn bits_to_ordinal(bits: $bits) -> $ord {
                bits as $ord
            }
        }
    };
}

impl_ieee_float!(f32, u32, i32);
impl_ieee_float!(f64, u64, i64);

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{Bounded, Zero};

    fn masks_partition<F: IeeeFloat>() {
        let all = F::SIGN_MASK | F::EXP_MASK | F::MANT_MASK;
        assert_eq!(all, F::Bits::max_value());
        assert_eq!(F::SIGN_MASK & F::EXP_MASK, F::Bits::zero());
        assert_eq!(F::EXP_MASK & F::MANT_MASK, F::Bits::zero());
    }

    #[test]
    fn test_layout_f32() {
        assert_eq!(<f32 as IeeeFloat>::STORAGE_BITS, 32);
        assert_eq!(<f32 as IeeeFloat>::EXP_LEN, 8);
        assert_eq!(<f32 as IeeeFloat>::EXP_BIAS, 127);
        assert_eq!(<f32 as IeeeFloat>::SIGN_MASK, 0x8000_0000);
        assert_eq!(<f32 as IeeeFloat>::MANT_MASK, 0x007F_FFFF);
        masks_partition::<f32>();
    }

    #[test]
    fn test_layout_f64() {
        assert_eq!(<f64 as IeeeFloat>::MANT_LEN, 52);
        assert_eq!(<f64 as IeeeFloat>::EXP_BIAS, 1023);
        assert_eq!(<f64 as IeeeFloat>::EXP_MASK, 0x7FF0_0000_0000_0000);
        masks_partition::<f64>();
    }

    #[test]
    fn test_bit_round_trip() {
        let v = -2.5f32;
        assert_eq!(f32::from_raw_bits(v.to_raw_bits()), v);
        assert_eq!(<f64 as IeeeFloat>::bits_to_ordinal(u64::MAX), -1);
    }
}
