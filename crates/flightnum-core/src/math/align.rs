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

//! Rounding to a multiple of a positive alignment.
//!
//! `floor_to` rounds toward negative infinity, `ceil_to` toward positive
//! infinity and `round_to` to the nearest multiple with halves going up. The
//! remainder is taken first so the truncated multiple `v - (v % align)` never
//! overflows; only the final step away from zero is checked.

use crate::env::HostRepr;
use crate::error::{ErrorKind, NumError, SaturateExt};
use crate::num::ops::kernel;
use crate::num::types::Integer;

type Checked<T> = Result<T, NumError<T>>;

/// Splits `v` into its multiple truncated toward zero and the remainder.
#[inline(always)]
fn split<T: Integer>(v: T, align: T) -> Result<(T, T), NumError<T>> {
    if align <= T::ZERO {
        return Err(NumError::new(ErrorKind::InvalidInput, v));
    }
    let r = kernel::try_rem::<HostRepr, T>(v, align)?;
    Ok((v - r, r))
}

/// Largest multiple of `align` not above `v`.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::error::ErrorKind;
/// # use flightnum_core::math::align::try_floor_to;
/// assert_eq!(try_floor_to(17u32, 8), Ok(16));
/// assert_eq!(try_floor_to(-17i32, 8), Ok(-24));
/// assert_eq!(try_floor_to(5i8, 0).unwrap_err().kind(), ErrorKind::InvalidInput);
/// ```
pub fn try_floor_to<T: Integer>(v: T, align: T) -> Checked<T> {
    let (base, r) = split(v, align)?;
    if r < T::ZERO {
        kernel::try_sub::<HostRepr, T>(base, align)
    } else {
        Ok(base)
    }
}

/// Smallest multiple of `align` not below `v`.
pub fn try_ceil_to<T: Integer>(v: T, align: T) -> Checked<T> {
    let (base, r) = split(v, align)?;
    if r > T::ZERO {
        kernel::try_add::<HostRepr, T>(base, align)
    } else {
        Ok(base)
    }
}

/// Nearest multiple of `align`; a value halfway between two multiples goes
/// to the larger one.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::math::align::try_round_to;
/// assert_eq!(try_round_to(12u8, 8), Ok(16));
/// assert_eq!(try_round_to(11u8, 8), Ok(8));
/// assert_eq!(try_round_to(-12i16, 8), Ok(-8));
/// assert_eq!(try_round_to(250u8, 100).unwrap_err().saturated(), 255);
/// ```
pub fn try_round_to<T: Integer>(v: T, align: T) -> Checked<T> {
    let (base, r) = split(v, align)?;
    if r > T::ZERO {
        // `base` is below `v`; `r` is the distance down.
        if r >= align - r {
            kernel::try_add::<HostRepr, T>(base, align)
        } else {
            Ok(base)
        }
    } else if r < T::ZERO {
        // `base` is above `v`; `-r` is the distance up.
        let up = T::ZERO - r;
        if up <= align - up {
            Ok(base)
        } else {
            kernel::try_sub::<HostRepr, T>(base, align)
        }
    } else {
        Ok(v)
    }
}

macro_rules! align_suffix_fns {
    ($($t:ident)*) => {$(
        paste::paste! {
            #[doc = "Rounds a `" $t "` down to a multiple of `align`."]
            #[inline]
            pub fn [<floor_to_ $t>](v: $t, align: $t, err: Option<&mut bool>) -> $t {
                try_floor_to(v, align).saturate(err)
            }

            #[doc = "Rounds a `" $t "` up to a multiple of `align`."]
            #[inline]
            pub fn [<ceil_to_ $t>](v: $t, align: $t, err: Option<&mut bool>) -> $t {
                try_ceil_to(v, align).saturate(err)
            }

            #[doc = "Rounds a `" $t "` to the nearest multiple of `align`."]
            #[inline]
            pub fn [<round_to_ $t>](v: $t, align: $t, err: Option<&mut bool>) -> $t {
                try_round_to(v, align).saturate(err)
            }
        }
    )*};
}

align_suffix_fns!(i8 i16 i32 i64 u8 u16 u32 u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_multiples_are_unchanged() {
        let mut err = false;
        for v in [-24i32, -8, 0, 8, 64] {
            assert_eq!(floor_to_i32(v, 8, Some(&mut err)), v);
            assert_eq!(ceil_to_i32(v, 8, Some(&mut err)), v);
            assert_eq!(round_to_i32(v, 8, Some(&mut err)), v);
        }
        assert!(!err);
    }

    #[test]
    fn test_floor_and_ceil() {
        let mut err = false;
        assert_eq!(floor_to_u16(1000, 64, Some(&mut err)), 960);
        assert_eq!(ceil_to_u16(1000, 64, Some(&mut err)), 1024);
        assert_eq!(floor_to_i16(-1, 10, Some(&mut err)), -10);
        assert_eq!(ceil_to_i16(-1, 10, Some(&mut err)), 0);
        assert_eq!(ceil_to_i64(-15, 10, Some(&mut err)), -10);
        assert!(!err);
    }

    #[test]
    fn test_round_halves_go_up() {
        let mut err = false;
        assert_eq!(round_to_u32(5, 10, Some(&mut err)), 10);
        assert_eq!(round_to_u32(4, 10, Some(&mut err)), 0);
        assert_eq!(round_to_i32(-5, 10, Some(&mut err)), 0);
        assert_eq!(round_to_i32(-6, 10, Some(&mut err)), -10);
        assert_eq!(round_to_i8(7, 3, Some(&mut err)), 6);
        assert_eq!(round_to_i8(-7, 3, Some(&mut err)), -6);
        assert!(!err);
    }

    #[test]
    fn test_non_positive_alignment() {
        let mut err = false;
        assert_eq!(floor_to_i32(17, 0, Some(&mut err)), 17);
        assert!(err);

        let mut err = false;
        assert_eq!(round_to_i64(-3, -4, Some(&mut err)), -3);
        assert!(err);

        let e = try_ceil_to(9u8, 0).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_overflow_saturates() {
        let mut err = false;
        assert_eq!(ceil_to_u8(250, 100, Some(&mut err)), u8::MAX);
        assert!(err);

        let mut err = false;
        assert_eq!(round_to_i8(120, 80, Some(&mut err)), i8::MAX);
        assert!(err);

        let lo = kernel::repr_min::<HostRepr, i8>();
        let mut err = false;
        assert_eq!(floor_to_i8(-120, 100, Some(&mut err)), lo);
        assert!(err);
    }

    #[test]
    fn test_large_alignment() {
        let mut err = false;
        assert_eq!(floor_to_u64(u64::MAX, u64::MAX, Some(&mut err)), u64::MAX);
        assert_eq!(round_to_u64(u64::MAX / 2, u64::MAX, Some(&mut err)), 0);
        assert_eq!(floor_to_i64(i64::MAX - 1, i64::MAX, Some(&mut err)), 0);
        assert!(!err);
    }
}
