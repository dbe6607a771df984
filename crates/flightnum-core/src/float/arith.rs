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

//! Checked float arithmetic.
//!
//! The operations never produce a NaN from non-NaN operands or an infinity
//! from finite operands without reporting it. A NaN operand or result gives a
//! NaN fallback; finite operands overflowing to infinity give `±MAX`; division
//! by zero gives `0`.

use crate::error::{ErrorKind, NumError, SaturateExt};
use crate::float::bits::IeeeFloat;
use crate::float::classify::{is_finite, is_inf, is_nan, is_zero};
use crate::float::value::nan;

type Checked<F> = Result<F, NumError<F>>;

#[inline(always)]
fn nan_error<F: IeeeFloat>() -> Checked<F> {
    Err(NumError::new(ErrorKind::NotANumber, nan()))
}

/// Validates `r`, the raw result of an operation on finite-or-not operands.
#[inline(always)]
fn finish<F: IeeeFloat>(r: F, finite_operands: bool) -> Checked<F> {
    if is_nan(r) {
        return nan_error();
    }
    if finite_operands && is_inf(r) {
        return Err(if r > F::zero() {
            NumError::new(ErrorKind::Overflow, F::MAX)
        } else {
            NumError::new(ErrorKind::Underflow, -F::MAX)
        });
    }
    Ok(r)
}

/// Checked `-v`.
#[inline]
pub fn try_neg<F: IeeeFloat>(v: F) -> Checked<F> {
    if is_nan(v) {
        return nan_error();
    }
    Ok(-v)
}

/// Checked `|v|`.
#[inline]
pub fn try_abs<F: IeeeFloat>(v: F) -> Checked<F> {
    if is_nan(v) {
        return nan_error();
    }
    Ok(v.abs())
}

/// Checked `a + b`.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::error::ErrorKind;
/// # use flightnum_core::float::arith::try_add;
/// assert_eq!(try_add(1.5f32, 2.0), Ok(3.5));
/// let e = try_add(f64::MAX, f64::MAX).unwrap_err();
/// assert_eq!(e.kind(), ErrorKind::Overflow);
/// assert_eq!(e.saturated(), f64::MAX);
/// ```
#[inline]
pub fn try_add<F: IeeeFloat>(a: F, b: F) -> Checked<F> {
    if is_nan(a) || is_nan(b) {
        return nan_error();
    }
    finish(a + b, is_finite(a) && is_finite(b))
}

/// Checked `a - b`.
#[inline]
pub fn try_sub<F: IeeeFloat>(a: F, b: F) -> Checked<F> {
    if is_nan(a) || is_nan(b) {
        return nan_error();
    }
    finish(a - b, is_finite(a) && is_finite(b))
}

/// Checked `a * b`.
#[inline]
pub fn try_mul<F: IeeeFloat>(a: F, b: F) -> Checked<F> {
    if is_nan(a) || is_nan(b) {
        return nan_error();
    }
    finish(a * b, is_finite(a) && is_finite(b))
}

/// Checked `a / b`. Division by `±0` yields `0`.
#[inline]
pub fn try_div<F: IeeeFloat>(a: F, b: F) -> Checked<F> {
    if is_nan(a) || is_nan(b) {
        return nan_error();
    }
    if is_zero(b) {
        return Err(NumError::new(ErrorKind::DivisionByZero, F::zero()));
    }
    finish(a / b, is_finite(a) && is_finite(b))
}

macro_rules! arith_suffix_fns {
    ($t:ident, $suffix:ident) => {
        paste::paste! {
            #[inline]
            pub fn [<neg_ $suffix>](v: $t, err: Option<&mut bool>) -> $t {
                try_neg(v).saturate(err)
            }
            #[inline]
            pub fn [<abs_ $suffix>](v: $t, err: Option<&mut bool>) -> $t {
                try_abs(v).saturate(err)
            }
            #[inline]
            pub fn [<add_ $suffix>](a: $t, b: $t, err: Option<&mut bool>) -> $t {
                try_add(a, b).saturate(err)
            }
            #[inline]
            pub fn [<sub_ $suffix>](a: $t, b: $t, err: Option<&mut bool>) -> $t {
                try_sub(a, b).saturate(err)
            }
            #[inline]
            pub fn [<mul_ $suffix>](a: $t, b: $t, err: Option<&mut bool>) -> $t {
                try_mul(a, b).saturate(err)
            }
            #[inline]
            pub fn [<div_ $suffix>](a: $t, b: $t, err: Option<&mut bool>) -> $t {
                try_div(a, b).saturate(err)
            }
        }
    };
}

arith_suffix_fns!(f32, f);
arith_suffix_fns!(f64, d);
