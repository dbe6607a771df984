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

//! Property-based tests for mixed integer/float comparison
//!
//! This module tests:
//! - Exactness against a wide-integer oracle, including 64-bit extremes
//! - Trichotomy and argument symmetry
//! - NaN handling

use flightnum_core::num::cmp::*;
use proptest::prelude::*;
use std::cmp::Ordering;

/// Finite floats concentrated around the edges of the 64-bit ranges
fn float_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1e20f64..1e20f64,
        -1e6f64..1e6f64,
        (-64i32..64).prop_map(|e| 2f64.powi(e)),
        Just(9_223_372_036_854_775_808.0),
        Just(-9_223_372_036_854_775_808.0),
        Just(18_446_744_073_709_551_616.0),
        Just(18_446_744_073_709_549_568.0),
    ]
}

/// Integers concentrated around the values floats cannot represent exactly
fn int_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![
        any::<i64>(),
        Just(i64::MAX),
        Just(i64::MIN),
        Just(i64::MAX - 1),
        (-1_000_000i64..1_000_000),
    ]
}

/// Exact ordering of an integer against a finite float
fn oracle(a: i128, b: f64) -> Ordering {
    let t = b.trunc();
    match a.cmp(&(t as i128)) {
        Ordering::Equal => t.partial_cmp(&b).unwrap_or(Ordering::Equal),
        o => o,
    }
}

proptest! {
    /// Signed integers compare exactly against floats
    #[test]
    fn signed_matches_oracle(a in int_strategy(), b in float_strategy()) {
        prop_assert_eq!(try_compare(a, b), Ok(oracle(a as i128, b)));
    }

    /// Unsigned integers compare exactly against floats
    #[test]
    fn unsigned_matches_oracle(a in prop_oneof![any::<u64>(), Just(u64::MAX)], b in float_strategy()) {
        prop_assert_eq!(try_compare(a, b), Ok(oracle(a as i128, b)));
    }

    /// Exactly one of `<`, `==`, `>` holds and the sink stays clear
    #[test]
    fn trichotomy(a in int_strategy(), b in float_strategy()) {
        let mut err = false;
        let lt = cmp_lt(a, b, Some(&mut err));
        let eq = cmp_eq(a, b, Some(&mut err));
        let gt = cmp_gt(a, b, Some(&mut err));
        prop_assert_eq!(lt as u8 + eq as u8 + gt as u8, 1);
        prop_assert_eq!(cmp_le(a, b, Some(&mut err)), lt || eq);
        prop_assert_eq!(cmp_ge(a, b, Some(&mut err)), gt || eq);
        prop_assert_eq!(cmp_ne(a, b, Some(&mut err)), !eq);
        prop_assert!(!err);
    }

    /// Swapping the operands reverses the ordering
    #[test]
    fn symmetry(a in int_strategy(), b in float_strategy()) {
        prop_assert_eq!(
            try_compare(b, a).map(Ordering::reverse),
            try_compare(a, b)
        );
    }

    /// Mixed-sign integer pairs compare by value, not by bit pattern
    #[test]
    fn mixed_sign_integers(a in any::<i64>(), b in any::<u64>()) {
        prop_assert_eq!(try_compare(a, b), Ok((a as i128).cmp(&(b as i128))));
    }

    /// Any comparison with NaN is false except `!=`, and raises the flag
    #[test]
    fn nan_is_unordered(a in int_strategy()) {
        let mut err = false;
        prop_assert!(!cmp_eq(a, f64::NAN, Some(&mut err)));
        prop_assert!(err);

        let mut err = false;
        prop_assert!(cmp_ne(f32::NAN, a, Some(&mut err)));
        prop_assert!(err);
    }
}
