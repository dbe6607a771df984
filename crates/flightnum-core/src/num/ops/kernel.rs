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

//! # Representation-Generic Kernel
//!
//! The checked integer operations, generic over the signed representation `R`
//! and the exact-width type `T`. Each returns the exact result or a
//! [`NumError`] carrying the saturated fallback.
//!
//! Overflow is detected by comparing one operand against a bound adjusted by
//! the other (`T::MAX - b`, `lo / p`, ...), never by widening, so the same code
//! serves `i64`/`u64` where no wider type exists.
//!
//! The host representation is wired in by the `checked_*_val` traits; the
//! functions here accept any [`SignRepr`] so every representation can be
//! exercised on any host.

use crate::env::{SignRepr, SignedRepr};
use crate::error::{ErrorKind, NumError};
use crate::num::types::{Integer, SignedInteger};

type Checked<T> = Result<T, NumError<T>>;

#[inline(always)]
fn fail<T>(kind: ErrorKind, saturated: T) -> Checked<T> {
    Err(NumError::new(kind, saturated))
}

/// Smallest valid value of `T` under the representation `R`.
///
/// Under one's-complement and sign-magnitude the signed range is symmetric,
/// so the lower bound is `-T::MAX` rather than the host's `T::MIN`.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::env::{OnesComplement, TwosComplement};
/// # use flightnum_core::num::ops::kernel::repr_min;
/// assert_eq!(repr_min::<TwosComplement, i8>(), -128);
/// assert_eq!(repr_min::<OnesComplement, i8>(), -127);
/// assert_eq!(repr_min::<OnesComplement, u8>(), 0);
/// ```
#[inline(always)]
pub fn repr_min<R: SignRepr, T: Integer>() -> T {
    if !T::SIGNED {
        return T::ZERO;
    }
    match R::KIND {
        SignedRepr::TwosComplement => T::MIN,
        SignedRepr::OnesComplement | SignedRepr::SignMagnitude => T::MIN + T::PLUS_ONE,
    }
}

#[inline(always)]
fn is_minus_one<T: Integer>(v: T) -> bool {
    T::SIGNED && v < T::ZERO && v + T::PLUS_ONE == T::ZERO
}

/// Checked negation. Lossless except for `T::MIN` on two's-complement.
#[inline]
pub fn try_neg<R: SignRepr, T: SignedInteger>(v: T) -> Checked<T> {
    // Outside two's-complement, T::MIN is below the modelled range and has
    // no valid negation either.
    if v < repr_min::<R, T>() || (R::KIND == SignedRepr::TwosComplement && v == T::MIN) {
        return fail(ErrorKind::UnrepresentableNegation, T::MAX);
    }
    // Negative zero does not exist in the host encoding; `-0 == 0`.
    Ok(-v)
}

/// Checked absolute value, failing exactly when negation would.
#[inline]
pub fn try_abs<R: SignRepr, T: SignedInteger>(v: T) -> Checked<T> {
    if v < T::ZERO {
        try_neg::<R, T>(v)
    } else {
        Ok(v)
    }
}

/// Checked addition.
#[inline]
pub fn try_add<R: SignRepr, T: Integer>(a: T, b: T) -> Checked<T> {
    let lo = repr_min::<R, T>();
    if b > T::ZERO && a > T::MAX - b {
        fail(ErrorKind::Overflow, T::MAX)
    } else if b < T::ZERO && a < lo - b {
        fail(ErrorKind::Underflow, lo)
    } else {
        Ok(a + b)
    }
}

/// Checked subtraction. Unsigned underflow saturates to `0`.
#[inline]
pub fn try_sub<R: SignRepr, T: Integer>(a: T, b: T) -> Checked<T> {
    let lo = repr_min::<R, T>();
    if b > T::ZERO && a < lo + b {
        fail(ErrorKind::Underflow, lo)
    } else if b < T::ZERO && a > T::MAX + b {
        fail(ErrorKind::Overflow, T::MAX)
    } else {
        Ok(a - b)
    }
}

/// Checked multiplication.
///
/// Products with equal signs saturate to `T::MAX` (including `MIN * -1`),
/// products with opposite signs to the representation minimum.
#[inline]
pub fn try_mul<R: SignRepr, T: Integer>(a: T, b: T) -> Checked<T> {
    if a == T::ZERO || b == T::ZERO {
        return Ok(T::ZERO);
    }

    if !T::SIGNED {
        return if a > T::MAX / b {
            fail(ErrorKind::Overflow, T::MAX)
        } else {
            Ok(a * b)
        };
    }

    let lo = repr_min::<R, T>();
    match (a > T::ZERO, b > T::ZERO) {
        (true, true) if a > T::MAX / b => fail(ErrorKind::Overflow, T::MAX),
        // `T::MAX / b` is negative and truncates toward zero.
        (false, false) if a < T::MAX / b => fail(ErrorKind::Overflow, T::MAX),
        (true, false) if b < lo / a => fail(ErrorKind::Underflow, lo),
        (false, true) if a < lo / b => fail(ErrorKind::Underflow, lo),
        _ => Ok(a * b),
    }
}

/// Checked division, truncating toward zero.
///
/// Division by zero yields `0`; `T::MIN / -1` yields `T::MAX`.
#[inline]
pub fn try_div<R: SignRepr, T: Integer>(n: T, d: T) -> Checked<T> {
    if d == T::ZERO {
        return fail(ErrorKind::DivisionByZero, T::ZERO);
    }
    // The host traps on MIN / -1 whatever the modelled representation.
    if n == T::MIN && is_minus_one(d) {
        return fail(ErrorKind::Overflow, T::MAX);
    }
    Ok(n / d)
}

/// Checked remainder, with the sign of the dividend.
///
/// Division by zero yields `0`; `T::MIN % -1` is `0` without error.
#[inline]
pub fn try_rem<R: SignRepr, T: Integer>(n: T, d: T) -> Checked<T> {
    if d == T::ZERO {
        return fail(ErrorKind::DivisionByZero, T::ZERO);
    }
    if is_minus_one(d) {
        return Ok(T::ZERO);
    }
    Ok(n % d)
}

/// Number of positions `v` can move left without losing a set bit or, for
/// signed `T`, changing sign.
#[inline(always)]
fn headroom<R: SignRepr, T: Integer>(v: T) -> u32 {
    if !T::SIGNED {
        return v.leading_zeros();
    }
    if v >= T::ZERO {
        return v.leading_zeros() - 1;
    }
    let mut room = (!v).leading_zeros() - 1;
    // A shift landing exactly on T::MIN leaves the symmetric range.
    if room > 0 && (v << room as usize) < repr_min::<R, T>() {
        room -= 1;
    }
    room
}

/// Checked left shift.
///
/// Shifts by the largest `k' <= k` that loses no set bit; if `k' < k` the
/// partially shifted value is returned with [`ErrorKind::ShiftTruncation`].
/// Negative `k` returns `v` unchanged.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::env::TwosComplement;
/// # use flightnum_core::num::ops::kernel::try_lshift;
/// assert_eq!(try_lshift::<TwosComplement, u8>(0b0001, 3), Ok(0b1000));
/// let e = try_lshift::<TwosComplement, u8>(0b0100_0000, 2).unwrap_err();
/// assert_eq!(e.saturated(), 0b1000_0000);
/// ```
#[inline]
pub fn try_lshift<R: SignRepr, T: Integer>(v: T, k: i32) -> Checked<T> {
    if k < 0 {
        return fail(ErrorKind::NegativeShift, v);
    }
    if v == T::ZERO {
        return Ok(T::ZERO);
    }
    let room = headroom::<R, T>(v);
    if (k as u32) <= room {
        Ok(v << k as usize)
    } else {
        fail(ErrorKind::ShiftTruncation, v << room as usize)
    }
}

/// Checked right shift, arithmetic for signed `T`.
///
/// Bits shifted off the low end are not signalled; counts of `T::BITS` or more
/// yield `0`, or `-1` for negative values. Negative `k` returns `v` unchanged.
#[inline]
pub fn try_rshift<R: SignRepr, T: Integer>(v: T, k: i32) -> Checked<T> {
    if k < 0 {
        return fail(ErrorKind::NegativeShift, v);
    }
    if (k as u32) >= T::BITS {
        return Ok(if v < T::ZERO { !T::ZERO } else { T::ZERO });
    }
    Ok(v >> k as usize)
}
