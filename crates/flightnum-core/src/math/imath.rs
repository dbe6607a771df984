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

//! Integer powers, roots, logarithms, divisors and factorials, and sign
//! transfer.
//!
//! Every result is exact or fails with a saturated fallback. Exponents, root
//! indices and logarithm bases are `i32` counts, like shift amounts. Root and
//! logarithm round toward zero.

use crate::env::HostRepr;
use crate::error::{ErrorKind, NumError, SaturateExt};
use crate::float::bits::IeeeFloat;
use crate::float::classify::is_nan;
use crate::float::value::nan;
use crate::num::ops::kernel;
use crate::num::types::{Integer, SignedInteger};
use num_traits::NumCast;

type Checked<T> = Result<T, NumError<T>>;

#[inline(always)]
fn invalid<T: Integer>() -> Checked<T> {
    Err(NumError::new(ErrorKind::InvalidInput, T::ZERO))
}

/// `v` raised to the power `n`.
///
/// # Errors
///
/// Negative `n` fails with [`ErrorKind::InvalidInput`] and fallback `0`. A
/// power outside the host range saturates toward its sign.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::math::imath::try_pow;
/// assert_eq!(try_pow(3u32, 4), Ok(81));
/// assert_eq!(try_pow(-3i16, 3), Ok(-27));
/// assert_eq!(try_pow(7u8, 0), Ok(1));
/// assert_eq!(try_pow(2i8, 7).unwrap_err().saturated(), 127);
/// ```
pub fn try_pow<T: Integer>(v: T, n: i32) -> Checked<T> {
    if n < 0 {
        return invalid();
    }
    if n == 0 {
        return Ok(T::PLUS_ONE);
    }
    if v == T::ZERO || v == T::PLUS_ONE {
        return Ok(v);
    }
    if v < T::ZERO && v + T::PLUS_ONE == T::ZERO {
        return Ok(if n % 2 == 0 { T::PLUS_ONE } else { v });
    }
    // An intermediate can leave the range with the opposite sign.
    let out_of_range = |_| {
        if v < T::ZERO && n % 2 == 1 {
            NumError::new(ErrorKind::Underflow, kernel::repr_min::<HostRepr, T>())
        } else {
            NumError::new(ErrorKind::Overflow, T::MAX)
        }
    };
    // |v| >= 2 leaves the range within `T::BITS` steps.
    let mut acc = v;
    for _ in 1..n {
        acc = kernel::try_mul::<HostRepr, T>(acc, v).map_err(out_of_range)?;
    }
    Ok(acc)
}

/// Largest `r >= 0` with `r^n <= v`.
///
/// # Errors
///
/// Negative `v` or `n < 1` fails with [`ErrorKind::InvalidInput`] and
/// fallback `0`.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::math::imath::try_root;
/// assert_eq!(try_root(27u32, 3), Ok(3));
/// assert_eq!(try_root(26u32, 3), Ok(2));
/// assert_eq!(try_root(u64::MAX, 2), Ok(u32::MAX as u64));
/// ```
pub fn try_root<T: Integer>(v: T, n: i32) -> Checked<T> {
    if n < 1 || v < T::ZERO {
        return invalid();
    }
    if n == 1 || v <= T::PLUS_ONE {
        return Ok(v);
    }
    if n as u32 >= T::BITS {
        return Ok(T::PLUS_ONE);
    }
    // Invariant: lo^n <= v < (hi + 1)^n.
    let two = T::PLUS_ONE + T::PLUS_ONE;
    let (mut lo, mut hi) = (T::PLUS_ONE, v);
    while lo < hi {
        let mid = hi - (hi - lo) / two;
        match try_pow(mid, n) {
            Ok(p) if p <= v => lo = mid,
            _ => hi = mid - T::PLUS_ONE,
        }
    }
    Ok(lo)
}

/// Largest `k` with `base^k <= v`.
///
/// # Errors
///
/// `v < 1` or `base < 2` fails with [`ErrorKind::InvalidInput`] and
/// fallback `0`.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::math::imath::try_log;
/// assert_eq!(try_log(1000u32, 10), Ok(3));
/// assert_eq!(try_log(999u32, 10), Ok(2));
/// assert_eq!(try_log(200u8, 1000), Ok(0));
/// ```
pub fn try_log<T: Integer>(v: T, base: i32) -> Checked<T> {
    if v < T::PLUS_ONE || base < 2 {
        return invalid();
    }
    let Some(b) = <T as NumCast>::from(base) else {
        // The base is above every value of `T`.
        return Ok(T::ZERO);
    };
    let (mut rest, mut k) = (v, T::ZERO);
    while rest >= b {
        rest = rest / b;
        k = k + T::PLUS_ONE;
    }
    Ok(k)
}

/// Greatest common divisor of `|a|` and `|b|`; `gcd(0, 0)` is `0`.
///
/// # Errors
///
/// A divisor of `|T::MIN|` under two's complement is not representable and
/// saturates to `T::MAX`.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::math::imath::try_gcd;
/// assert_eq!(try_gcd(12i32, -18), Ok(6));
/// assert_eq!(try_gcd(0u16, 7), Ok(7));
/// ```
pub fn try_gcd<T: Integer>(a: T, b: T) -> Checked<T> {
    let (mut a, mut b) = (a, b);
    while b != T::ZERO {
        let r = kernel::try_rem::<HostRepr, T>(a, b)?;
        a = b;
        b = r;
    }
    if a < T::ZERO {
        kernel::try_sub::<HostRepr, T>(T::ZERO, a)
    } else {
        Ok(a)
    }
}

/// Least common multiple of `|a|` and `|b|`; `0` if either is `0`.
///
/// # Errors
///
/// A multiple above `T::MAX` fails with [`ErrorKind::Overflow`] and
/// fallback `T::MAX`.
pub fn try_lcm<T: Integer>(a: T, b: T) -> Checked<T> {
    if a == T::ZERO || b == T::ZERO {
        return Ok(T::ZERO);
    }
    let overflow = |_| NumError::new(ErrorKind::Overflow, T::MAX);
    let g = try_gcd(a, b).map_err(overflow)?;
    let m = kernel::try_mul::<HostRepr, T>(a / g, b).map_err(overflow)?;
    if m < T::ZERO {
        kernel::try_sub::<HostRepr, T>(T::ZERO, m).map_err(overflow)
    } else {
        Ok(m)
    }
}

/// `v!`.
///
/// # Errors
///
/// Negative `v` fails with [`ErrorKind::InvalidInput`] and fallback `0`;
/// overflow saturates to `T::MAX`.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::math::imath::try_fact;
/// assert_eq!(try_fact(5i8), Ok(120));
/// assert_eq!(try_fact(0u8), Ok(1));
/// assert_eq!(try_fact(6i8).unwrap_err().saturated(), 127);
/// ```
pub fn try_fact<T: Integer>(v: T) -> Checked<T> {
    if v < T::ZERO {
        return invalid();
    }
    let mut acc = T::PLUS_ONE;
    let mut i = T::PLUS_ONE;
    while i < v {
        i = i + T::PLUS_ONE;
        acc = kernel::try_mul::<HostRepr, T>(acc, i)?;
    }
    Ok(acc)
}

/// `|mag|` carrying the sign of `sign`; a zero `sign` counts as positive.
///
/// # Errors
///
/// `|T::MIN|` under two's complement saturates to `T::MAX`.
pub fn try_apply_sign<T: SignedInteger>(mag: T, sign: T) -> Checked<T> {
    if sign >= T::ZERO {
        kernel::try_abs::<HostRepr, T>(mag)
    } else if mag < T::ZERO {
        Ok(mag)
    } else {
        kernel::try_neg::<HostRepr, T>(mag)
    }
}

/// `|mag|` carrying the sign bit of `sign`, so `-0.0` counts as negative.
///
/// # Errors
///
/// A NaN operand yields [`ErrorKind::NotANumber`] with a NaN fallback.
pub fn try_apply_sign_float<F: IeeeFloat>(mag: F, sign: F) -> Checked<F> {
    if is_nan(mag) || is_nan(sign) {
        return Err(NumError::new(ErrorKind::NotANumber, nan()));
    }
    let abs = mag.abs();
    Ok(if sign.is_sign_negative() { -abs } else { abs })
}

macro_rules! imath_suffix_fns {
    ($($t:ident)*) => {$(
        paste::paste! {
            #[doc = "`v` to the power `n` on `" $t "`; negative `n` yields `0` and raises `err`."]
            #[inline]
            pub fn [<pow_ $t>](v: $t, n: i32, err: Option<&mut bool>) -> $t {
                try_pow(v, n).saturate(err)
            }

            #[doc = "Integer `n`th root of a `" $t "`, rounded down."]
            #[inline]
            pub fn [<root_ $t>](v: $t, n: i32, err: Option<&mut bool>) -> $t {
                try_root(v, n).saturate(err)
            }

            #[doc = "Integer logarithm of a `" $t "` to `base`, rounded down."]
            #[inline]
            pub fn [<log_ $t>](v: $t, base: i32, err: Option<&mut bool>) -> $t {
                try_log(v, base).saturate(err)
            }

            #[doc = "Greatest common divisor of two `" $t "` values."]
            #[inline]
            pub fn [<gcd_ $t>](a: $t, b: $t, err: Option<&mut bool>) -> $t {
                try_gcd(a, b).saturate(err)
            }

            #[doc = "Least common multiple of two `" $t "` values."]
            #[inline]
            pub fn [<lcm_ $t>](a: $t, b: $t, err: Option<&mut bool>) -> $t {
                try_lcm(a, b).saturate(err)
            }

            #[doc = "Factorial of a `" $t "`."]
            #[inline]
            pub fn [<fact_ $t>](v: $t, err: Option<&mut bool>) -> $t {
                try_fact(v).saturate(err)
            }
        }
    )*};
}

macro_rules! apply_sign_suffix_fns {
    ($($t:ident)*) => {$(
        paste::paste! {
            #[doc = "Magnitude of `mag` with the sign of `sign`, on `" $t "`."]
            #[inline]
            pub fn [<apply_sign_ $t>](mag: $t, sign: $t, err: Option<&mut bool>) -> $t {
                try_apply_sign(mag, sign).saturate(err)
            }
        }
    )*};
}

imath_suffix_fns!(i8 i16 i32 i64 u8 u16 u32 u64);
apply_sign_suffix_fns!(i8 i16 i32 i64);

/// Magnitude of `mag` with the sign of `sign`, on `f32`.
#[inline]
pub fn apply_sign_f(mag: f32, sign: f32, err: Option<&mut bool>) -> f32 {
    try_apply_sign_float(mag, sign).saturate(err)
}

/// Magnitude of `mag` with the sign of `sign`, on `f64`.
#[inline]
pub fn apply_sign_d(mag: f64, sign: f64, err: Option<&mut bool>) -> f64 {
    try_apply_sign_float(mag, sign).saturate(err)
}
