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

//! Minimum, maximum, clamping and range tests.
//!
//! Bounds may be given in either order. Integer operations never fail except
//! for the extreme of an empty slice. Float operations treat NaN as missing
//! data for min/max and as an error for clamping and range tests.

use crate::error::{raise, ErrorKind, NumError, SaturateExt};
use crate::float::bits::IeeeFloat;
use crate::float::classify::{is_nan, sign_bit};
use crate::float::value::nan;
use crate::mem::buffer;
use crate::num::types::Integer;

/// The first element of `values` no other element is `better` than.
#[inline(always)]
fn extreme<T: Copy>(values: impl Iterator<Item = T>, better: impl Fn(T, T) -> bool) -> Option<T> {
    values.fold(None, |best, v| match best {
        Some(b) if !better(v, b) => Some(b),
        _ => Some(v),
    })
}

/// Smallest element of `values`.
///
/// # Errors
///
/// An empty slice fails with [`ErrorKind::InvalidInput`] and fallback `0`.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::math::bounds::try_min;
/// assert_eq!(try_min(&[3i8, -4, 9]), Ok(-4));
/// assert_eq!(try_min::<u8>(&[]).unwrap_err().saturated(), 0);
/// ```
pub fn try_min<T: Integer>(values: &[T]) -> Result<T, NumError<T>> {
    extreme(values.iter().copied(), |a, b| a < b)
        .ok_or(NumError::new(ErrorKind::InvalidInput, T::ZERO))
}

/// Largest element of `values`.
///
/// # Errors
///
/// An empty slice fails with [`ErrorKind::InvalidInput`] and fallback `0`.
pub fn try_max<T: Integer>(values: &[T]) -> Result<T, NumError<T>> {
    extreme(values.iter().copied(), |a, b| a > b)
        .ok_or(NumError::new(ErrorKind::InvalidInput, T::ZERO))
}

/// Clamps `v` into the range spanned by `b1` and `b2`.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::math::bounds::clamp;
/// assert_eq!(clamp(15u8, 10, 5), 10);
/// assert_eq!(clamp(-3i32, 0, 7), 0);
/// ```
#[inline]
pub fn clamp<T: Integer>(v: T, b1: T, b2: T) -> T {
    let (lo, hi) = if b1 <= b2 { (b1, b2) } else { (b2, b1) };
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

/// Returns `true` if `v` lies in the closed range spanned by `b1` and `b2`.
#[inline]
pub fn in_range<T: Integer>(v: T, b1: T, b2: T) -> bool {
    clamp(v, b1, b2) == v
}

/// Smallest non-NaN element of `values`.
///
/// # Errors
///
/// An empty slice fails with [`ErrorKind::InvalidInput`]; a slice of NaNs
/// with [`ErrorKind::NotANumber`]. Both fall back to NaN.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::math::bounds::try_min_float;
/// assert_eq!(try_min_float(&[f32::NAN, 2.0, -1.0]), Ok(-1.0));
/// assert!(try_min_float(&[f64::NAN]).is_err());
/// ```
pub fn try_min_float<F: IeeeFloat>(values: &[F]) -> Result<F, NumError<F>> {
    if values.is_empty() {
        return Err(NumError::new(ErrorKind::InvalidInput, nan()));
    }
    extreme(values.iter().copied().filter(|&v| !is_nan(v)), |a, b| a < b)
        .ok_or(NumError::new(ErrorKind::NotANumber, nan()))
}

/// Largest non-NaN element of `values`.
///
/// # Errors
///
/// An empty slice fails with [`ErrorKind::InvalidInput`]; a slice of NaNs
/// with [`ErrorKind::NotANumber`]. Both fall back to NaN.
pub fn try_max_float<F: IeeeFloat>(values: &[F]) -> Result<F, NumError<F>> {
    if values.is_empty() {
        return Err(NumError::new(ErrorKind::InvalidInput, nan()));
    }
    extreme(values.iter().copied().filter(|&v| !is_nan(v)), |a, b| a > b)
        .ok_or(NumError::new(ErrorKind::NotANumber, nan()))
}

/// Clamps `v` into the range spanned by `b1` and `b2`.
///
/// # Errors
///
/// A NaN bound fails with fallback `b1` if both bounds share a sign bit, NaN
/// otherwise. A NaN `v` with valid bounds fails with fallback NaN.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::math::bounds::try_clamp_float;
/// assert_eq!(try_clamp_float(7.5f64, 2.0, -2.0), Ok(2.0));
/// assert!(try_clamp_float(f32::NAN, 0.0, 1.0).is_err());
/// ```
pub fn try_clamp_float<F: IeeeFloat>(v: F, b1: F, b2: F) -> Result<F, NumError<F>> {
    if is_nan(b1) || is_nan(b2) {
        let fallback = if sign_bit(b1) == sign_bit(b2) {
            b1
        } else {
            nan()
        };
        return Err(NumError::new(ErrorKind::NotANumber, fallback));
    }
    if is_nan(v) {
        return Err(NumError::new(ErrorKind::NotANumber, nan()));
    }
    let (lo, hi) = if b1 <= b2 { (b1, b2) } else { (b2, b1) };
    Ok(if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    })
}

/// Returns `true` if `v` lies in the closed range spanned by `b1` and `b2`.
///
/// # Errors
///
/// Returns [`ErrorKind::NotANumber`] if any argument is NaN.
pub fn try_in_range_float<F: IeeeFloat>(v: F, b1: F, b2: F) -> Result<bool, ErrorKind> {
    if is_nan(v) || is_nan(b1) || is_nan(b2) {
        return Err(ErrorKind::NotANumber);
    }
    let (lo, hi) = if b1 <= b2 { (b1, b2) } else { (b2, b1) };
    Ok(lo <= v && v <= hi)
}

macro_rules! raw_extreme_fns {
    ($($name:ident => $inner:ident, $bound:ident, $zero:expr;)*) => {$(
        #[doc = concat!("[`", stringify!($inner), "`] over a raw buffer. An invalid buffer yields `0`.")]
        ///
        /// # Safety
        ///
        /// See [`buffer`](crate::mem::buffer).
        pub unsafe fn $name<T: $bound>(ptr: *const T, n: i32) -> Result<T, NumError<T>> {
            let values = unsafe { buffer(ptr, n) }.map_err(|kind| NumError::new(kind, $zero))?;
            $inner(values)
        }
    )*};
}

raw_extreme_fns! {
    try_min_raw => try_min, Integer, T::ZERO;
    try_max_raw => try_max, Integer, T::ZERO;
    try_min_float_raw => try_min_float, IeeeFloat, T::zero();
    try_max_float_raw => try_max_float, IeeeFloat, T::zero();
}

macro_rules! bounds_int_suffix_fns {
    ($($t:ident)*) => {$(
        paste::paste! {
            #[doc = "Smallest `" $t "` in `values`; empty input yields `0` and raises `err`."]
            #[inline]
            pub fn [<min_ $t>](values: &[$t], err: Option<&mut bool>) -> $t {
                try_min(values).saturate(err)
            }

            #[doc = "Largest `" $t "` in `values`; empty input yields `0` and raises `err`."]
            #[inline]
            pub fn [<max_ $t>](values: &[$t], err: Option<&mut bool>) -> $t {
                try_max(values).saturate(err)
            }

            #[doc = "Clamps a `" $t "` into `[min(b1, b2), max(b1, b2)]`."]
            #[inline]
            pub fn [<clamp_ $t>](v: $t, b1: $t, b2: $t) -> $t {
                clamp(v, b1, b2)
            }

            #[doc = "Tests a `" $t "` against `[min(b1, b2), max(b1, b2)]`."]
            #[inline]
            pub fn [<in_range_ $t>](v: $t, b1: $t, b2: $t) -> bool {
                in_range(v, b1, b2)
            }
        }
    )*};
}

macro_rules! bounds_float_suffix_fns {
    ($t:ident, $suffix:ident) => {
        paste::paste! {
            #[doc = "Smallest non-NaN `" $t "` in `values`."]
            #[inline]
            pub fn [<min_ $suffix>](values: &[$t], err: Option<&mut bool>) -> $t {
                try_min_float(values).saturate(err)
            }

            #[doc = "Largest non-NaN `" $t "` in `values`."]
            #[inline]
            pub fn [<max_ $suffix>](values: &[$t], err: Option<&mut bool>) -> $t {
                try_max_float(values).saturate(err)
            }

            #[doc = "Clamps a `" $t "` into the range spanned by `b1` and `b2`."]
            #[inline]
            pub fn [<clamp_ $suffix>](v: $t, b1: $t, b2: $t, err: Option<&mut bool>) -> $t {
                try_clamp_float(v, b1, b2).saturate(err)
            }

            #[doc = "Tests a `" $t "` against the range spanned by `b1` and `b2`."]
            #[inline]
            pub fn [<in_range_ $suffix>](v: $t, b1: $t, b2: $t, err: Option<&mut bool>) -> bool {
                match try_in_range_float(v, b1, b2) {
                    Ok(inside) => inside,
                    Err(_) => {
                        raise(err);
                        false
                    }
                }
            }
        }
    };
}

bounds_int_suffix_fns!(i8 i16 i32 i64 u8 u16 u32 u64);
bounds_float_suffix_fns!(f32, f);
bounds_float_suffix_fns!(f64, d);
