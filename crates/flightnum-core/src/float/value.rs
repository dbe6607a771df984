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

//! Special values and unit-in-the-last-place.

use crate::env::{FloatRepr, FLOAT_REPR};
use crate::error::{ErrorKind, NumError, SaturateExt};
use crate::float::bits::IeeeFloat;
use crate::float::classify::{is_inf, is_nan, sign_bit};
use num_traits::{CheckedAdd, One};

/// The canonical quiet NaN: positive sign, exponent all ones, only the
/// mantissa MSB set. The largest finite value on non-IEEE hosts.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::float::value::nan;
/// # #[cfg(not(feature = "non-ieee-float"))]
/// assert_eq!(nan::<f32>().to_bits(), 0x7FC0_0000);
/// ```
#[inline]
pub fn nan<F: IeeeFloat>() -> F {
    match FLOAT_REPR {
        FloatRepr::Ieee754 => {
            let quiet = F::Bits::one() << (F::MANT_LEN as usize - 1);
            F::from_raw_bits(F::EXP_MASK | quiet)
        }
        FloatRepr::Other => F::MAX,
    }
}

/// Positive infinity. The largest finite value on non-IEEE hosts.
#[inline]
pub fn inf<F: IeeeFloat>() -> F {
    match FLOAT_REPR {
        FloatRepr::Ieee754 => F::from_raw_bits(F::EXP_MASK),
        FloatRepr::Other => F::MAX,
    }
}

/// Distance from `v` to the next representable value away from zero.
///
/// `ulp(±inf)` is `+inf`, and so is `ulp(MAX)`.
///
/// # Errors
///
/// NaN input yields [`ErrorKind::NotANumber`] with a NaN fallback.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::float::value::try_ulp;
/// assert_eq!(try_ulp(1.0f32), Ok(f32::EPSILON));
/// assert_eq!(try_ulp(-1.0f64), Ok(f64::EPSILON));
/// assert_eq!(try_ulp(f64::MAX), Ok(f64::INFINITY));
/// ```
pub fn try_ulp<F: IeeeFloat>(v: F) -> Result<F, NumError<F>> {
    if is_nan(v) {
        return Err(NumError::new(ErrorKind::NotANumber, nan()));
    }
    if is_inf(v) {
        return Ok(inf());
    }
    // Only the all-ones pattern has no successor; it is NaN under IEEE.
    let Some(bits) = CheckedAdd::checked_add(&v.to_raw_bits(), &F::Bits::one()) else {
        return Err(NumError::new(ErrorKind::Overflow, inf()));
    };
    let next = F::from_raw_bits(bits);
    Ok(if sign_bit(v) { v - next } else { next - v })
}

macro_rules! value_suffix_fns {
    ($t:ident, $suffix:ident) => {
        paste::paste! {
            #[doc = "Canonical quiet NaN of `" $t "`."]
            #[inline]
            pub fn [<nan_ $suffix>]() -> $t { nan() }

            #[doc = "Positive infinity of `" $t "`."]
            #[inline]
            pub fn [<inf_ $suffix>]() -> $t { inf() }

            #[doc = "Unit in the last place of `v`; NaN raises `err`."]
            #[inline]
            pub fn [<ulp_ $suffix>](v: $t, err: Option<&mut bool>) -> $t {
                try_ulp(v).saturate(err)
            }
        }
    };
}

value_suffix_fns!(f32, f);
value_suffix_fns!(f64, d);
