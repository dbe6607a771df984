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

//! Bound-checked conversions between the exact-width integer types.
//!
//! The source is widened to [`MaxWidth`](crate::num::types::MaxWidth) and
//! compared against the destination bounds before narrowing, so no
//! conversion relies on implicit sign or width changes.

use crate::env::{HostRepr, SignRepr};
use crate::error::{ErrorKind, NumError, SaturateExt};
use crate::num::ops::kernel::repr_min;
use crate::num::types::Integer;

/// Converts `v` to `U`, saturating to the destination bounds under `R`.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::env::{OnesComplement, TwosComplement};
/// # use flightnum_core::num::ops::cast::try_cast;
/// assert_eq!(try_cast::<TwosComplement, i64, i8>(-5), Ok(-5));
/// assert_eq!(try_cast::<TwosComplement, i64, i8>(300).unwrap_err().saturated(), 127);
/// assert_eq!(try_cast::<OnesComplement, i64, i8>(-300).unwrap_err().saturated(), -127);
/// ```
#[inline]
pub fn try_cast<R: SignRepr, T: Integer, U: Integer>(v: T) -> Result<U, NumError<U>> {
    let wide = v.to_max_width();
    let lo = repr_min::<R, U>();
    if wide < lo.to_max_width() {
        Err(NumError::new(ErrorKind::Underflow, lo))
    } else if wide > U::MAX.to_max_width() {
        Err(NumError::new(ErrorKind::Overflow, U::MAX))
    } else {
        Ok(U::from_max_width(wide))
    }
}

/// Checked conversion into another exact-width integer type.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::num::ops::cast::CheckedCastVal;
/// let v: Result<u16, _> = (-1i32).checked_cast_val();
/// assert_eq!(v.unwrap_err().saturated(), 0);
/// assert_eq!(u64::MAX.checked_cast_val::<i64>().unwrap_err().saturated(), i64::MAX);
/// ```
pub trait CheckedCastVal: Integer {
    /// Converts `self` to `U` on the host representation.
    #[inline(always)]
    fn checked_cast_val<U: Integer>(self) -> Result<U, NumError<U>> {
        try_cast::<HostRepr, Self, U>(self)
    }

    /// Converts `self` to `U`, saturating and raising `err` when out of range.
    #[inline(always)]
    fn saturating_cast_val<U: Integer>(self, err: Option<&mut bool>) -> U {
        self.checked_cast_val::<U>().saturate(err)
    }
}

impl<T: Integer> CheckedCastVal for T {}

macro_rules! cast_suffix_fns {
    ($dst:ident: $($src:ident)*) => {
        paste::paste! {$(
            #[doc = "Converts `" $src "` to `" $dst "`, saturating out-of-range values."]
            #[inline]
            pub fn [<cast_ $dst _from_ $src>](v: $src, err: Option<&mut bool>) -> $dst {
                v.saturating_cast_val::<$dst>(err)
            }
        )*}
    };
}

cast_suffix_fns!(i8: i16 i32 i64 u8 u16 u32 u64);
cast_suffix_fns!(i16: i8 i32 i64 u8 u16 u32 u64);
cast_suffix_fns!(i32: i8 i16 i64 u8 u16 u32 u64);
cast_suffix_fns!(i64: i8 i16 i32 u8 u16 u32 u64);
cast_suffix_fns!(u8: i8 i16 i32 i64 u16 u32 u64);
cast_suffix_fns!(u16: i8 i16 i32 i64 u8 u32 u64);
cast_suffix_fns!(u32: i8 i16 i32 i64 u8 u16 u64);
cast_suffix_fns!(u64: i8 i16 i32 i64 u8 u16 u32);
