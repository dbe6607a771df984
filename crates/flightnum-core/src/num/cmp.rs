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

//! # Mixed-Signedness Comparison
//!
//! Exact comparisons between any two of `i8..i64`, `u8..u64`, `f32` and `f64`.
//!
//! Integers are widened to [`MaxWidth`], so a negative signed value is below
//! every unsigned value and no comparison goes through an implicit
//! conversion. An integer meets a float by splitting the float into its
//! integral part and a fractional remainder; the integral part is compared in
//! the integer domain and the remainder breaks ties. This stays exact past the
//! contiguous-integer range of the float (`2^24` for `f32`, `2^53` for `f64`).
//!
//! A NaN operand makes every ordering predicate `false` (and `cmp_ne` `true`)
//! and raises the error sink.

use crate::error::{raise, ErrorKind};
use crate::num::types::{Integer, MaxWidth};
use std::cmp::Ordering;

/// A comparison operand, widened losslessly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Int(MaxWidth),
    Float(f64),
}

mod comparable {
    pub trait Sealed {}
}

/// Types accepted by the comparison predicates.
///
/// This trait is sealed; it is implemented for every exact-width integer
/// type, `f32` and `f64`.
pub trait Comparable: Copy + comparable::Sealed {
    /// Widens `self` without loss.
    fn to_operand(self) -> Operand;
}

macro_rules! impl_comparable_int {
    ($($t:ident)*) => {$(
        impl comparable::Sealed for $t {}
        impl Comparable for $t {
            #[inline(always)]
            fn to_operand(self) -> Operand {
                Operand::Int(self.to_max_width())
            }
        }
    )*};
}

impl_comparable_int!(i8 i16 i32 i64 u8 u16 u32 u64);

impl comparable::Sealed for f32 {}
impl Comparable for f32 {
    #[inline(always)]
    fn to_operand(self) -> Operand {
        Operand::Float(f64::from(self))
    }
}

impl comparable::Sealed for f64 {}
impl Comparable for f64 {
    #[inline(always)]
    fn to_operand(self) -> Operand {
        Operand::Float(self)
    }
}

const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// Orders an integer against a float.
fn compare_int_float(i: MaxWidth, f: f64) -> Result<Ordering, ErrorKind> {
    if f.is_nan() {
        return Err(ErrorKind::NotANumber);
    }
    if f.is_infinite() {
        return Ok(if f > 0.0 {
            Ordering::Less
        } else {
            Ordering::Greater
        });
    }
    if f >= TWO_POW_64 {
        return Ok(Ordering::Less);
    }
    if f < -TWO_POW_63 {
        return Ok(Ordering::Greater);
    }

    let whole = f.trunc();
    let frac = f - whole;
    // `whole` is integral and inside the range of the chosen cast.
    let whole = if whole < 0.0 {
        MaxWidth::Negative(whole as i64)
    } else {
        MaxWidth::NonNegative(whole as u64)
    };

    Ok(match i.cmp(&whole) {
        Ordering::Equal if frac > 0.0 => Ordering::Less,
        Ordering::Equal if frac < 0.0 => Ordering::Greater,
        ord => ord,
    })
}

/// Orders two operands exactly.
///
/// # Errors
///
/// Returns [`ErrorKind::NotANumber`] if either operand is NaN.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::num::cmp::try_compare;
/// # use std::cmp::Ordering;
/// assert_eq!(try_compare(-1i32, 1u32), Ok(Ordering::Less));
/// assert_eq!(try_compare(u64::MAX, 1.8446744073709552e19f64), Ok(Ordering::Less));
/// assert!(try_compare(0u8, f32::NAN).is_err());
/// ```
pub fn try_compare<A: Comparable, B: Comparable>(a: A, b: B) -> Result<Ordering, ErrorKind> {
    match (a.to_operand(), b.to_operand()) {
        (Operand::Int(x), Operand::Int(y)) => Ok(x.cmp(&y)),
        (Operand::Int(x), Operand::Float(y)) => compare_int_float(x, y),
        (Operand::Float(x), Operand::Int(y)) => compare_int_float(y, x).map(Ordering::reverse),
        (Operand::Float(x), Operand::Float(y)) => x.partial_cmp(&y).ok_or(ErrorKind::NotANumber),
    }
}

#[inline(always)]
fn predicate<A: Comparable, B: Comparable>(
    a: A,
    b: B,
    err: Option<&mut bool>,
    on_nan: bool,
    test: impl FnOnce(Ordering) -> bool,
) -> bool {
    match try_compare(a, b) {
        Ok(ord) => test(ord),
        Err(_) => {
            raise(err);
            on_nan
        }
    }
}

/// `a == b`. `-0.0 == +0.0`.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::num::cmp::cmp_eq;
/// assert!(cmp_eq(3u8, 3.0f32, None));
/// assert!(!cmp_eq(-1i8, u64::MAX, None));
/// ```
#[inline]
pub fn cmp_eq<A: Comparable, B: Comparable>(a: A, b: B, err: Option<&mut bool>) -> bool {
    predicate(a, b, err, false, |o| o == Ordering::Equal)
}

/// `a != b`. NaN on either side is unequal to everything and raises `err`.
#[inline]
pub fn cmp_ne<A: Comparable, B: Comparable>(a: A, b: B, err: Option<&mut bool>) -> bool {
    predicate(a, b, err, true, |o| o != Ordering::Equal)
}

/// `a < b`.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::num::cmp::cmp_lt;
/// assert!(cmp_lt(-1i32, 1u32, None));
/// ```
#[inline]
pub fn cmp_lt<A: Comparable, B: Comparable>(a: A, b: B, err: Option<&mut bool>) -> bool {
    predicate(a, b, err, false, |o| o == Ordering::Less)
}

/// `a > b`.
#[inline]
pub fn cmp_gt<A: Comparable, B: Comparable>(a: A, b: B, err: Option<&mut bool>) -> bool {
    predicate(a, b, err, false, |o| o == Ordering::Greater)
}

/// `a <= b`.
#[inline]
pub fn cmp_le<A: Comparable, B: Comparable>(a: A, b: B, err: Option<&mut bool>) -> bool {
    predicate(a, b, err, false, |o| o != Ordering::Greater)
}

/// `a >= b`.
#[inline]
pub fn cmp_ge<A: Comparable, B: Comparable>(a: A, b: B, err: Option<&mut bool>) -> bool {
    predicate(a, b, err, false, |o| o != Ordering::Less)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_against_unsigned() {
        assert!(cmp_lt(-1i32, 1u32, None));
        assert!(cmp_lt(-1i64, 0u8, None));
        assert!(cmp_lt(i64::MIN, u64::MAX, None));
        assert!(cmp_gt(u64::MAX, i64::MAX, None));
        assert!(cmp_eq(i64::MAX, i64::MAX as u64, None));
        assert!(cmp_ne(-1i8, 255u8, None));
        assert!(cmp_le(0i16, 0u64, None));
        assert!(cmp_ge(200u8, 127i8, None));
    }

    #[test]
    fn test_integer_against_float_beyond_mantissa() {
        // 2^53 + 1 is not representable in f64.
        let big = 9_007_199_254_740_993i64;
        let f = 9_007_199_254_740_992.0f64;
        assert!(cmp_gt(big, f, None));
        assert!(cmp_ne(big, f, None));
        assert!(cmp_eq(big - 1, f, None));

        assert!(cmp_lt(16_777_217i32, 16_777_218.0f32, None));
        assert!(cmp_gt(16_777_217u32, 16_777_216.0f32, None));

        assert!(cmp_lt(u64::MAX, 18_446_744_073_709_551_616.0f64, None));
        assert!(cmp_eq(i64::MIN, -9_223_372_036_854_775_808.0f64, None));
        assert!(cmp_gt(i64::MIN, -1.0e19f64, None));
    }

    #[test]
    fn test_integer_against_fraction() {
        assert!(cmp_lt(0u8, 0.5f32, None));
        assert!(cmp_gt(0i8, -0.5f64, None));
        assert!(cmp_gt(-1i8, -1.5f64, None));
        assert!(cmp_lt(-2i32, -1.5f64, None));
        assert!(cmp_ge(0u32, -0.0f32, None));
        assert!(cmp_lt(1.5f64, 2u8, None));
    }

    #[test]
    fn test_infinities_compare_by_sign() {
        assert!(cmp_lt(u64::MAX, f64::INFINITY, None));
        assert!(cmp_gt(i64::MIN, f32::NEG_INFINITY, None));
        assert!(cmp_gt(f64::INFINITY, f32::MAX, None));
    }

    #[test]
    fn test_float_against_float() {
        assert!(cmp_eq(-0.0f64, 0.0f32, None));
        assert!(cmp_lt(f32::MIN_POSITIVE, f64::from(f32::MIN_POSITIVE) * 2.0, None));
        assert!(cmp_eq(0.1f32, 0.1f32 as f64, None));
        assert!(cmp_ne(0.1f32, 0.1f64, None));
    }

    #[test]
    fn test_nan_sets_sink() {
        let preds: [fn(f64, i32, Option<&mut bool>) -> bool; 5] =
            [cmp_eq, cmp_lt, cmp_gt, cmp_le, cmp_ge];
        for (i, pred) in preds.iter().enumerate() {
            let mut err = false;
            assert!(!pred(f64::NAN, 0, Some(&mut err)), "predicate {i}");
            assert!(err, "predicate {i}");
        }

        let mut err = false;
        assert!(cmp_ne(f32::NAN, f32::NAN, Some(&mut err)));
        assert!(err);
    }

    #[test]
    fn test_integer_comparisons_leave_sink_alone() {
        let mut err = false;
        assert!(cmp_lt(-5i8, 5u64, Some(&mut err)));
        assert!(!err);
    }
}
