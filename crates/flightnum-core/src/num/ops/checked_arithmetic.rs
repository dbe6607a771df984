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

//! Checked integer arithmetic on the host representation.
//!
//! Each trait method forwards to the [`kernel`](super::kernel) with
//! [`HostRepr`] and returns the exact result or a [`NumError`] holding the
//! saturated fallback. The `can_*` predicates report whether the matching
//! operation would succeed.

use crate::env::HostRepr;
use crate::error::NumError;
use crate::num::ops::kernel;
use crate::num::types::Integer;

/// A trait for types that support checked addition by value.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::error::ErrorKind;
/// # use flightnum_core::num::ops::checked_arithmetic::CheckedAddVal;
/// let a: u8 = 200;
/// assert_eq!(a.checked_add_val(50), Ok(250));
/// let e = a.checked_add_val(100).unwrap_err();
/// assert_eq!(e.kind(), ErrorKind::Overflow);
/// assert_eq!(e.saturated(), 255);
/// ```
pub trait CheckedAddVal: Integer {
    /// Performs checked addition by value.
    fn checked_add_val(self, v: Self) -> Result<Self, NumError<Self>>;
}

/// A trait for types that support checked subtraction by value.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::num::ops::checked_arithmetic::CheckedSubVal;
/// let a: u8 = 50;
/// assert_eq!(a.checked_sub_val(20), Ok(30));
/// assert_eq!(a.checked_sub_val(100).unwrap_err().saturated(), 0);
/// ```
pub trait CheckedSubVal: Integer {
    /// Performs checked subtraction by value.
    fn checked_sub_val(self, v: Self) -> Result<Self, NumError<Self>>;
}

/// A trait for types that support checked multiplication by value.
pub trait CheckedMulVal: Integer {
    /// Performs checked multiplication by value.
    fn checked_mul_val(self, v: Self) -> Result<Self, NumError<Self>>;
}

/// A trait for types that support checked division by value.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::error::ErrorKind;
/// # use flightnum_core::num::ops::checked_arithmetic::CheckedDivVal;
/// assert_eq!(7i32.checked_div_val(2), Ok(3));
/// assert_eq!(7i32.checked_div_val(0).unwrap_err().kind(), ErrorKind::DivisionByZero);
/// ```
pub trait CheckedDivVal: Integer {
    /// Performs checked division by value.
    fn checked_div_val(self, v: Self) -> Result<Self, NumError<Self>>;
}

/// A trait for types that support checked remainder by value.
pub trait CheckedRemVal: Integer {
    /// Performs checked remainder by value.
    fn checked_rem_val(self, v: Self) -> Result<Self, NumError<Self>>;
}

/// A trait for types that support checked left shifts.
pub trait CheckedShlVal: Integer {
    /// Shifts left by `k`, stopping before the first set bit would be lost.
    fn checked_shl_val(self, k: i32) -> Result<Self, NumError<Self>>;
}

/// A trait for types that support checked right shifts.
pub trait CheckedShrVal: Integer {
    /// Shifts right by `k`, arithmetically for signed types.
    fn checked_shr_val(self, k: i32) -> Result<Self, NumError<Self>>;
}

/// A trait for signed types that support checked negation.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::num::ops::checked_arithmetic::CheckedNegVal;
/// assert_eq!(5i8.checked_neg_val(), Ok(-5));
/// # #[cfg(not(any(feature = "ones-complement", feature = "sign-magnitude")))]
/// assert_eq!(i8::MIN.checked_neg_val().unwrap_err().saturated(), i8::MAX);
/// ```
pub trait CheckedNegVal: Integer {
    /// Performs checked negation.
    fn checked_neg_val(self) -> Result<Self, NumError<Self>>;
}

/// A trait for signed types that support a checked absolute value.
pub trait CheckedAbsVal: Integer {
    /// Computes the checked absolute value.
    fn checked_abs_val(self) -> Result<Self, NumError<Self>>;
}

macro_rules! checked_impl_binary_val {
    ($trait_name:ident, $method:ident, $kernel_fn:ident, $rhs:ty; $($t:ident)*) => {$(
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: $rhs) -> Result<$t, NumError<$t>> {
                kernel::$kernel_fn::<HostRepr, $t>(self, v)
            }
        }
    )*};
}

macro_rules! checked_impl_unary_val {
    ($trait_name:ident, $method:ident, $kernel_fn:ident; $($t:ident)*) => {$(
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self) -> Result<$t, NumError<$t>> {
                kernel::$kernel_fn::<HostRepr, $t>(self)
            }
        }
    )*};
}

checked_impl_binary_val!(CheckedAddVal, checked_add_val, try_add, Self; i8 i16 i32 i64 u8 u16 u32 u64);
checked_impl_binary_val!(CheckedSubVal, checked_sub_val, try_sub, Self; i8 i16 i32 i64 u8 u16 u32 u64);
checked_impl_binary_val!(CheckedMulVal, checked_mul_val, try_mul, Self; i8 i16 i32 i64 u8 u16 u32 u64);
checked_impl_binary_val!(CheckedDivVal, checked_div_val, try_div, Self; i8 i16 i32 i64 u8 u16 u32 u64);
checked_impl_binary_val!(CheckedRemVal, checked_rem_val, try_rem, Self; i8 i16 i32 i64 u8 u16 u32 u64);
checked_impl_binary_val!(CheckedShlVal, checked_shl_val, try_lshift, i32; i8 i16 i32 i64 u8 u16 u32 u64);
checked_impl_binary_val!(CheckedShrVal, checked_shr_val, try_rshift, i32; i8 i16 i32 i64 u8 u16 u32 u64);

checked_impl_unary_val!(CheckedNegVal, checked_neg_val, try_neg; i8 i16 i32 i64);
checked_impl_unary_val!(CheckedAbsVal, checked_abs_val, try_abs; i8 i16 i32 i64);

/// Returns `true` if `-v` is representable.
#[inline(always)]
pub fn can_neg<T: CheckedNegVal>(v: T) -> bool {
    v.checked_neg_val().is_ok()
}

/// Returns `true` if `a + b` is representable.
#[inline(always)]
pub fn can_add<T: CheckedAddVal>(a: T, b: T) -> bool {
    a.checked_add_val(b).is_ok()
}

/// Returns `true` if `a - b` is representable.
#[inline(always)]
pub fn can_sub<T: CheckedSubVal>(a: T, b: T) -> bool {
    a.checked_sub_val(b).is_ok()
}

/// Returns `true` if `a * b` is representable.
#[inline(always)]
pub fn can_mul<T: CheckedMulVal>(a: T, b: T) -> bool {
    a.checked_mul_val(b).is_ok()
}

/// Returns `true` if `n / d` is defined and representable.
#[inline(always)]
pub fn can_div<T: CheckedDivVal>(n: T, d: T) -> bool {
    n.checked_div_val(d).is_ok()
}

/// Returns `true` if `n % d` is defined.
#[inline(always)]
pub fn can_rem<T: CheckedRemVal>(n: T, d: T) -> bool {
    n.checked_rem_val(d).is_ok()
}

/// Returns `true` if `v << k` loses no set bit.
#[inline(always)]
pub fn can_lshift<T: CheckedShlVal>(v: T, k: i32) -> bool {
    v.checked_shl_val(k).is_ok()
}

/// Returns `true` if `k` is a valid right-shift count.
#[inline(always)]
pub fn can_rshift<T: CheckedShrVal>(v: T, k: i32) -> bool {
    v.checked_shr_val(k).is_ok()
}

macro_rules! can_suffix_fns {
    ($($t:ident)*) => {$(
        paste::paste! {
            #[inline]
            pub fn [<can_add_ $t>](a: $t, b: $t) -> bool { can_add(a, b) }
            #[inline]
            pub fn [<can_sub_ $t>](a: $t, b: $t) -> bool { can_sub(a, b) }
            #[inline]
            pub fn [<can_mul_ $t>](a: $t, b: $t) -> bool { can_mul(a, b) }
            #[inline]
            pub fn [<can_div_ $t>](n: $t, d: $t) -> bool { can_div(n, d) }
            #[inline]
            pub fn [<can_rem_ $t>](n: $t, d: $t) -> bool { can_rem(n, d) }
            #[inline]
            pub fn [<can_lshift_ $t>](v: $t, k: i32) -> bool { can_lshift(v, k) }
            #[inline]
            pub fn [<can_rshift_ $t>](v: $t, k: i32) -> bool { can_rshift(v, k) }
        }
    )*};
}

macro_rules! can_signed_suffix_fns {
    ($($t:ident)*) => {$(
        paste::paste! {
            #[inline]
            pub fn [<can_neg_ $t>](v: $t) -> bool { can_neg(v) }
        }
    )*};
}

can_suffix_fns!(i8 i16 i32 i64 u8 u16 u32 u64);
can_signed_suffix_fns!(i8 i16 i32 i64);
