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

//! Exponent, mantissa and ULP inspection.

use crate::error::{raise, ErrorKind, NumError, SaturateExt};
use crate::float::bits::IeeeFloat;
use crate::float::classify::{is_finite, is_inf, is_nan, is_zero, sign_bit};
use crate::float::value::{nan, try_ulp};
use num_traits::{CheckedSub, One, ToPrimitive, Zero};

#[inline(always)]
fn non_finite_kind<F: IeeeFloat>(v: F) -> ErrorKind {
    if is_nan(v) {
        ErrorKind::NotANumber
    } else {
        ErrorKind::InvalidInput
    }
}

/// Unbiased exponent of `v`. Subnormals and zeros report `-bias`.
///
/// # Errors
///
/// Non-finite input fails with fallback `0`.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::float::inspect::try_fexp;
/// assert_eq!(try_fexp(1.0f32), Ok(0));
/// assert_eq!(try_fexp(-12.0f64), Ok(3));
/// assert_eq!(try_fexp(0.0f32), Ok(-127));
/// ```
pub fn try_fexp<F: IeeeFloat>(v: F) -> Result<i32, NumError<i32>> {
    if !is_finite(v) {
        return Err(NumError::new(non_finite_kind(v), 0));
    }
    let biased = (v.to_raw_bits() & F::EXP_MASK) >> F::MANT_LEN as usize;
    // The exponent field is at most 11 bits wide.
    let biased = biased.to_i32().unwrap_or(0);
    Ok(biased - F::EXP_BIAS)
}

/// Mantissa of `v` with the exponent reset to the bias and the sign dropped,
/// a value in `[1, 2)` for normal numbers.
///
/// # Errors
///
/// Non-finite input fails with a NaN fallback.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::float::inspect::try_mant;
/// assert_eq!(try_mant(12.0f64), Ok(1.5));
/// assert_eq!(try_mant(-0.75f32), Ok(1.5));
/// ```
pub fn try_mant<F: IeeeFloat>(v: F) -> Result<F, NumError<F>> {
    if !is_finite(v) {
        return Err(NumError::new(non_finite_kind(v), nan()));
    }
    // The bias in the exponent field: all exponent bits but the top one.
    let bias_field = (F::EXP_MASK >> 1) & F::EXP_MASK;
    let bits = (v.to_raw_bits() & F::MANT_MASK) | bias_field;
    Ok(F::from_raw_bits(bits))
}

/// Distance from `v` to its neighbour away from zero. Same as
/// [`try_ulp`](crate::float::value::try_ulp).
#[inline]
pub fn try_max_ulp<F: IeeeFloat>(v: F) -> Result<F, NumError<F>> {
    try_ulp(v)
}

/// Distance from `v` to its neighbour toward zero.
///
/// Zeros and non-finite values have no such neighbour and report
/// [`try_ulp`](crate::float::value::try_ulp) instead.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::float::inspect::try_min_ulp;
/// assert_eq!(try_min_ulp(1.0f64), Ok(f64::EPSILON / 2.0));
/// assert_eq!(try_min_ulp(-2.0f32), Ok(f32::EPSILON));
/// ```
pub fn try_min_ulp<F: IeeeFloat>(v: F) -> Result<F, NumError<F>> {
    if is_nan(v) || is_inf(v) || is_zero(v) {
        return try_ulp(v);
    }
    let Some(bits) = CheckedSub::checked_sub(&v.to_raw_bits(), &F::Bits::one()) else {
        return try_ulp(v);
    };
    let prev = F::from_raw_bits(bits);
    Ok(if sign_bit(v) { prev - v } else { v - prev })
}

/// Ordinal of the magnitude bit pattern of `v`: consecutive finite
/// magnitudes have consecutive ordinals, `0.0` is `0`.
///
/// # Errors
///
/// Non-finite input fails with fallback `0`.
pub fn try_to_ulp<F: IeeeFloat>(v: F) -> Result<F::Ordinal, NumError<F::Ordinal>> {
    if !is_finite(v) {
        return Err(NumError::new(non_finite_kind(v), F::Ordinal::zero()));
    }
    Ok(F::bits_to_ordinal(v.to_raw_bits() & !F::SIGN_MASK))
}

/// Tolerance equality: `|a - b|` is at most one ULP of the larger-magnitude
/// operand. Infinities only match themselves.
///
/// # Errors
///
/// Returns [`ErrorKind::NotANumber`] if either operand is NaN.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::float::inspect::try_approx_eq;
/// assert_eq!(try_approx_eq(1.0f32, 1.0 + f32::EPSILON), Ok(true));
/// assert_eq!(try_approx_eq(1.0f32, 1.0 + 2.0 * f32::EPSILON), Ok(false));
/// assert_eq!(try_approx_eq(0.1f64 + 0.2, 0.3), Ok(true));
/// ```
pub fn try_approx_eq<F: IeeeFloat>(a: F, b: F) -> Result<bool, ErrorKind> {
    if is_nan(a) || is_nan(b) {
        return Err(ErrorKind::NotANumber);
    }
    if is_inf(a) || is_inf(b) {
        return Ok(a == b);
    }
    let larger = a.abs().max(b.abs());
    // Next to MAX the spacing away from zero is infinite; use the finite one.
    let tolerance = if larger == F::MAX {
        try_min_ulp(larger)
    } else {
        try_ulp(larger)
    }
    .map_err(|e| e.kind())?;
    Ok((a - b).abs() <= tolerance)
}

macro_rules! inspect_suffix_fns {
    ($t:ident, $suffix:ident, $ord:ident) => {
        paste::paste! {
            #[doc = "Unbiased exponent of `v`; non-finite `v` yields `0` and raises `err`."]
            #[inline]
            pub fn [<fexp_ $suffix>](v: $t, err: Option<&mut bool>) -> i32 {
                try_fexp(v).saturate(err)
            }

            #[doc = "Mantissa of `v` in `[1, 2)`; non-finite `v` yields NaN and raises `err`."]
            #[inline]
            pub fn [<mant_ $suffix>](v: $t, err: Option<&mut bool>) -> $t {
                try_mant(v).saturate(err)
            }

            #[doc = "Spacing away from zero at `v`."]
            #[inline]
            pub fn [<max_ulp_ $suffix>](v: $t, err: Option<&mut bool>) -> $t {
                try_max_ulp(v).saturate(err)
            }

            #[doc = "Spacing toward zero at `v`."]
            #[inline]
            pub fn [<min_ulp_ $suffix>](v: $t, err: Option<&mut bool>) -> $t {
                try_min_ulp(v).saturate(err)
            }

            #[doc = "Magnitude ordinal of `v`; non-finite `v` yields `0` and raises `err`."]
            #[inline]
            pub fn [<to_ulp_ $suffix>](v: $t, err: Option<&mut bool>) -> $ord {
                try_to_ulp(v).saturate(err)
            }

            #[doc = "`a` and `b` are within one ULP; NaN yields `false` and raises `err`."]
            #[inline]
            pub fn [<approx_eq_ $suffix>](a: $t, b: $t, err: Option<&mut bool>) -> bool {
                match try_approx_eq(a, b) {
                    Ok(eq) => eq,
                    Err(_) => {
                        raise(err);
                        false
                    }
                }
            }
        }
    };
}

inspect_suffix_fns!(f32, f, i32);
inspect_suffix_fns!(f64, d, i64);

#[cfg(all(test, not(feature = "non-ieee-float")))]
mod tests {
    use super::*;

    #[test]
    fn test_fexp() {
        let mut err = false;
        assert_eq!(fexp_f(1.0, Some(&mut err)), 0);
        assert_eq!(fexp_f(0.25, Some(&mut err)), -2);
        assert_eq!(fexp_d(f64::MAX, Some(&mut err)), 1023);
        assert_eq!(fexp_d(f64::MIN_POSITIVE, Some(&mut err)), -1022);
        assert!(!err);

        assert_eq!(fexp_d(f64::INFINITY, Some(&mut err)), 0);
        assert!(err);
    }

    #[test]
    fn test_mant() {
        let mut err = false;
        assert_eq!(mant_f(3.0, Some(&mut err)), 1.5);
        assert_eq!(mant_d(1.0, Some(&mut err)), 1.0);
        assert!(!err);

        assert!(mant_f(f32::NAN, Some(&mut err)).is_nan());
        assert!(err);
    }

    #[test]
    fn test_min_and_max_ulp() {
        let mut err = false;
        assert_eq!(max_ulp_f(1.0, Some(&mut err)), f32::EPSILON);
        assert_eq!(min_ulp_f(1.0, Some(&mut err)), f32::EPSILON / 2.0);
        assert_eq!(min_ulp_d(0.0, Some(&mut err)), f64::from_bits(1));
        assert_eq!(min_ulp_d(f64::from_bits(1), Some(&mut err)), f64::from_bits(1));
        assert!(!err);
    }

    #[test]
    fn test_to_ulp() {
        let mut err = false;
        assert_eq!(to_ulp_f(0.0, Some(&mut err)), 0);
        assert_eq!(to_ulp_f(-0.0, Some(&mut err)), 0);
        assert_eq!(to_ulp_f(f32::from_bits(1), Some(&mut err)), 1);
        assert_eq!(to_ulp_d(-1.0, Some(&mut err)), 0x3FF0_0000_0000_0000);
        assert_eq!(
            to_ulp_f(1.0 + f32::EPSILON, Some(&mut err)) - to_ulp_f(1.0, Some(&mut err)),
            1
        );
        assert!(!err);

        assert_eq!(to_ulp_f(f32::NEG_INFINITY, Some(&mut err)), 0);
        assert!(err);
    }

    #[test]
    fn test_approx_eq() {
        let mut err = false;
        assert!(approx_eq_d(1.0, 1.0, Some(&mut err)));
        assert!(approx_eq_d(-0.0, 0.0, Some(&mut err)));
        assert!(approx_eq_f(f32::MAX, f32::from_bits(f32::MAX.to_bits() - 1), Some(&mut err)));
        assert!(!approx_eq_f(f32::MAX, -f32::MAX, Some(&mut err)));
        assert!(!approx_eq_d(f64::INFINITY, f64::MAX, Some(&mut err)));
        assert!(approx_eq_d(f64::INFINITY, f64::INFINITY, Some(&mut err)));
        assert!(!err);

        assert!(!approx_eq_f(f32::NAN, 1.0, Some(&mut err)));
        assert!(err);
    }
}
