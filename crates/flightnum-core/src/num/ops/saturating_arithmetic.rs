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

//! Saturating integer arithmetic with an out-of-band error sink.
//!
//! Every operation returns a value in the range of its type: the exact result
//! when it is representable, otherwise the saturated fallback of the matching
//! `checked_*_val` operation. Failure raises the optional sink; success leaves
//! it untouched.
//!
//! The suffix-named free functions (`add_i8`, `lshift_u32`, ...) are the flat
//! API the C bindings export.

use crate::error::SaturateExt;
use crate::num::ops::checked_arithmetic::{
    CheckedAbsVal, CheckedAddVal, CheckedDivVal, CheckedMulVal, CheckedNegVal, CheckedRemVal,
    CheckedShlVal, CheckedShrVal, CheckedSubVal,
};

/// Saturating addition by value.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::num::ops::saturating_arithmetic::SaturatingAddVal;
/// let mut err = false;
/// assert_eq!(250u8.saturating_add_val(10, Some(&mut err)), 255);
/// assert!(err);
///
/// let mut err = false;
/// assert_eq!((-120i8).saturating_add_val(-20, Some(&mut err)), -128);
/// assert!(err);
/// ```
pub trait SaturatingAddVal: Sized {
    /// Performs saturating addition by value.
    fn saturating_add_val(self, v: Self, err: Option<&mut bool>) -> Self;
}

/// Saturating subtraction by value.
pub trait SaturatingSubVal: Sized {
    /// Performs saturating subtraction by value.
    fn saturating_sub_val(self, v: Self, err: Option<&mut bool>) -> Self;
}

/// Saturating multiplication by value.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::num::ops::saturating_arithmetic::SaturatingMulVal;
/// let mut err = false;
/// assert_eq!(127i8.saturating_mul_val(-2, Some(&mut err)), i8::MIN);
/// assert!(err);
/// ```
pub trait SaturatingMulVal: Sized {
    /// Performs saturating multiplication by value.
    fn saturating_mul_val(self, v: Self, err: Option<&mut bool>) -> Self;
}

/// Saturating division by value. Division by zero yields `0`.
pub trait SaturatingDivVal: Sized {
    /// Performs saturating division by value.
    fn saturating_div_val(self, v: Self, err: Option<&mut bool>) -> Self;
}

/// Saturating remainder by value. Division by zero yields `0`.
pub trait SaturatingRemVal: Sized {
    /// Performs saturating remainder by value.
    fn saturating_rem_val(self, v: Self, err: Option<&mut bool>) -> Self;
}

/// Left shift that stops before the first set bit is lost.
pub trait SaturatingShlVal: Sized {
    /// Shifts left by at most `k` positions.
    fn saturating_shl_val(self, k: i32, err: Option<&mut bool>) -> Self;
}

/// Right shift with negative counts rejected.
pub trait SaturatingShrVal: Sized {
    /// Shifts right by `k` positions.
    fn saturating_shr_val(self, k: i32, err: Option<&mut bool>) -> Self;
}

/// Saturating negation.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::num::ops::saturating_arithmetic::SaturatingNegVal;
/// assert_eq!(127i8.saturating_neg_val(None), -127);
/// ```
pub trait SaturatingNegVal: Sized {
    /// Performs saturating negation.
    fn saturating_neg_val(self, err: Option<&mut bool>) -> Self;
}

/// Saturating absolute value.
pub trait SaturatingAbsVal: Sized {
    /// Computes the saturating absolute value.
    fn saturating_abs_val(self, err: Option<&mut bool>) -> Self;
}

macro_rules! saturating_impl_binary_val {
    ($trait_name:ident, $method:ident, $checked_trait:ident, $checked:ident, $rhs:ty) => {
        impl<T: $checked_trait> $trait_name for T {
            #[inline(always)]
            fn $method(self, v: $rhs, err: Option<&mut bool>) -> Self {
                self.$checked(v).saturate(err)
            }
        }
    };
}

macro_rules! saturating_impl_unary_val {
    ($trait_name:ident, $method:ident, $checked_trait:ident, $checked:ident) => {
        impl<T: $checked_trait> $trait_name for T {
            #[inline(always)]
            fn $method(self, err: Option<&mut bool>) -> Self {
                self.$checked().saturate(err)
            }
        }
    };
}

saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, CheckedAddVal, checked_add_val, Self);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, CheckedSubVal, checked_sub_val, Self);
saturating_impl_binary_val!(SaturatingMulVal, saturating_mul_val, CheckedMulVal, checked_mul_val, Self);
saturating_impl_binary_val!(SaturatingDivVal, saturating_div_val, CheckedDivVal, checked_div_val, Self);
saturating_impl_binary_val!(SaturatingRemVal, saturating_rem_val, CheckedRemVal, checked_rem_val, Self);
saturating_impl_binary_val!(SaturatingShlVal, saturating_shl_val, CheckedShlVal, checked_shl_val, i32);
saturating_impl_binary_val!(SaturatingShrVal, saturating_shr_val, CheckedShrVal, checked_shr_val, i32);
saturating_impl_unary_val!(SaturatingNegVal, saturating_neg_val, CheckedNegVal, checked_neg_val);
saturating_impl_unary_val!(SaturatingAbsVal, saturating_abs_val, CheckedAbsVal, checked_abs_val);

macro_rules! arith_suffix_fns {
    ($($t:ident)*) => {$(
        paste::paste! {
            #[doc = "Saturating `a + b` on `" $t "`."]
            #[inline]
            pub fn [<add_ $t>](a: $t, b: $t, err: Option<&mut bool>) -> $t {
                a.saturating_add_val(b, err)
            }

            #[doc = "Saturating `a - b` on `" $t "`."]
            #[inline]
            pub fn [<sub_ $t>](a: $t, b: $t, err: Option<&mut bool>) -> $t {
                a.saturating_sub_val(b, err)
            }

            #[doc = "Saturating `a * b` on `" $t "`."]
            #[inline]
            pub fn [<mul_ $t>](a: $t, b: $t, err: Option<&mut bool>) -> $t {
                a.saturating_mul_val(b, err)
            }

            #[doc = "Checked `n / d` on `" $t "`; `0` when `d == 0`."]
            #[inline]
            pub fn [<div_ $t>](n: $t, d: $t, err: Option<&mut bool>) -> $t {
                n.saturating_div_val(d, err)
            }

            #[doc = "Checked `n % d` on `" $t "`; `0` when `d == 0`."]
            #[inline]
            pub fn [<rem_ $t>](n: $t, d: $t, err: Option<&mut bool>) -> $t {
                n.saturating_rem_val(d, err)
            }

            #[doc = "Checked `v << k` on `" $t "`."]
            #[inline]
            pub fn [<lshift_ $t>](v: $t, k: i32, err: Option<&mut bool>) -> $t {
                v.saturating_shl_val(k, err)
            }

            #[doc = "Checked `v >> k` on `" $t "`."]
            #[inline]
            pub fn [<rshift_ $t>](v: $t, k: i32, err: Option<&mut bool>) -> $t {
                v.saturating_shr_val(k, err)
            }
        }
    )*};
}

macro_rules! signed_suffix_fns {
    ($($t:ident)*) => {$(
        paste::paste! {
            #[doc = "Saturating `-v` on `" $t "`."]
            #[inline]
            pub fn [<neg_ $t>](v: $t, err: Option<&mut bool>) -> $t {
                v.saturating_neg_val(err)
            }

            #[doc = "Saturating `|v|` on `" $t "`."]
            #[inline]
            pub fn [<abs_ $t>](v: $t, err: Option<&mut bool>) -> $t {
                v.saturating_abs_val(err)
            }
        }
    )*};
}

arith_suffix_fns!(i8 i16 i32 i64 u8 u16 u32 u64);
signed_suffix_fns!(i8 i16 i32 i64);
