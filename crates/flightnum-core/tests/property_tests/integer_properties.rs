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

//! Property-based tests for the saturating integer kernel
//!
//! This module tests:
//! - Agreement with a wide-integer oracle for add, sub, mul and div
//! - Sticky error flag semantics
//! - Negation and absolute value
//! - The division identity

use super::{clamp_wide, valid};
use flightnum_core::num::ops::checked_arithmetic::{can_add_i32, can_lshift_u32, can_mul_i64};
use flightnum_core::num::ops::saturating_arithmetic::*;
use proptest::prelude::*;

macro_rules! oracle_properties {
    ($($t:ident)*) => {
        paste::paste! {
            proptest! {
                $(
                    #[test]
                    fn [<add_matches_oracle_ $t>](a in valid::<$t>(), b in valid::<$t>()) {
                        let mut err = false;
                        let got = [<add_ $t>](a, b, Some(&mut err));
                        prop_assert_eq!((got, err), clamp_wide::<$t>(a as i128 + b as i128));
                    }

                    #[test]
                    fn [<sub_matches_oracle_ $t>](a in valid::<$t>(), b in valid::<$t>()) {
                        let mut err = false;
                        let got = [<sub_ $t>](a, b, Some(&mut err));
                        prop_assert_eq!((got, err), clamp_wide::<$t>(a as i128 - b as i128));
                    }

                    #[test]
                    fn [<mul_matches_oracle_ $t>](a in valid::<$t>(), b in valid::<$t>()) {
                        let mut err = false;
                        let got = [<mul_ $t>](a, b, Some(&mut err));
                        // Only `u64 * u64` can leave `i128`, and then the product is positive.
                        let exact = (a as i128).checked_mul(b as i128).unwrap_or(i128::MAX);
                        prop_assert_eq!((got, err), clamp_wide::<$t>(exact));
                    }

                    #[test]
                    fn [<div_matches_oracle_ $t>](a in valid::<$t>(), b in valid::<$t>()) {
                        prop_assume!(b != 0);
                        let mut err = false;
                        let got = [<div_ $t>](a, b, Some(&mut err));
                        prop_assert_eq!((got, err), clamp_wide::<$t>(a as i128 / b as i128));
                    }
                )*
            }
        }
    };
}

oracle_properties!(i8 i16 i32 i64 u8 u16 u32 u64);

proptest! {
    // =====================================
    // Error Flag Properties
    // =====================================

    /// A raised flag is never cleared by a later successful operation
    #[test]
    fn error_flag_is_sticky(a in valid::<i32>(), b in valid::<i32>()) {
        let mut err = true;
        let _ = add_i32(a, b, Some(&mut err));
        let _ = div_i32(a, 1, Some(&mut err));
        prop_assert!(err);
    }

    /// The result does not depend on whether a flag is supplied
    #[test]
    fn result_independent_of_sink(a in valid::<i64>(), b in valid::<i64>()) {
        let mut err = false;
        prop_assert_eq!(mul_i64(a, b, None), mul_i64(a, b, Some(&mut err)));
        prop_assert_eq!(err, !can_mul_i64(a, b));
    }

    /// The `can_*` predicates agree with the flag raised by the operation
    #[test]
    fn can_add_agrees_with_flag(a in valid::<i32>(), b in valid::<i32>()) {
        let mut err = false;
        let _ = add_i32(a, b, Some(&mut err));
        prop_assert_eq!(can_add_i32(a, b), !err);
    }

    /// A shift the predicate accepts is exact
    #[test]
    fn accepted_lshift_is_exact(
        (v, k) in (0u32..32).prop_flat_map(|k| (0..=u32::MAX >> k, Just(k as i32)))
    ) {
        prop_assert!(can_lshift_u32(v, k));
        let mut err = false;
        prop_assert_eq!(lshift_u32(v, k, Some(&mut err)) as u64, (v as u64) << k);
        prop_assert!(!err);
    }

    /// A shift that pushes out a set bit is rejected and saturates
    #[test]
    fn truncating_lshift_is_rejected(
        (v, k) in (1u32..32).prop_flat_map(|k| ((u32::MAX >> k) + 1..=u32::MAX, Just(k as i32)))
    ) {
        prop_assert!(!can_lshift_u32(v, k));
        let mut err = false;
        let _ = lshift_u32(v, k, Some(&mut err));
        prop_assert!(err);
    }

    /// Shifting right by any amount never raises the flag
    #[test]
    fn rshift_never_fails(v in valid::<i16>(), k in 0i32..64) {
        let mut err = false;
        let r = rshift_i16(v, k, Some(&mut err));
        prop_assert!(!err);
        prop_assert_eq!(r, if k >= 16 { if v < 0 { -1 } else { 0 } } else { v >> k });
    }

    // =====================================
    // Negation Properties
    // =====================================

    /// Negation is an involution wherever it succeeds
    #[test]
    fn neg_involution(v in valid::<i32>()) {
        let mut err = false;
        let once = neg_i32(v, Some(&mut err));
        prop_assume!(!err);
        prop_assert_eq!(neg_i32(once, Some(&mut err)), v);
        prop_assert!(!err);
    }

    /// The absolute value is never negative, even when it saturates
    #[test]
    fn abs_is_non_negative(v in valid::<i64>()) {
        let mut err = false;
        let a = abs_i64(v, Some(&mut err));
        prop_assert!(a >= 0);
        prop_assert_eq!(err, v.unsigned_abs() > i64::MAX as u64);
    }

    // =====================================
    // Division Properties
    // =====================================

    /// `(v / d) * d + v % d == v` whenever the quotient is representable
    #[test]
    fn division_identity(v in valid::<i16>(), d in valid::<i16>()) {
        prop_assume!(d != 0);
        prop_assume!(!(v == i16::MIN && d == -1));
        let mut err = false;
        let q = div_i16(v, d, Some(&mut err));
        let r = rem_i16(v, d, Some(&mut err));
        let back = add_i16(mul_i16(q, d, Some(&mut err)), r, Some(&mut err));
        prop_assert_eq!(back, v);
        prop_assert!(!err);
    }

    /// Division by zero saturates to zero and raises the flag
    #[test]
    fn division_by_zero(v in any::<u64>()) {
        let mut err = false;
        prop_assert_eq!(div_u64(v, 0, Some(&mut err)), 0);
        prop_assert!(err);
    }
}
