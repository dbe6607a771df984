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

//! Property-based tests for the math helpers
//!
//! This module tests:
//! - Alignment rounding brackets the input
//! - Clamping and range tests with bounds in either order
//! - Aggregates against a wide-integer oracle
//! - NaN handling of float min/max
//! - Integer power, root and divisor identities

use super::{clamp_wide, valid};
use flightnum_core::env::HostRepr;
use flightnum_core::math::aggregate::{product_i32, summation_i16};
use flightnum_core::math::align::*;
use flightnum_core::math::bounds::*;
use flightnum_core::math::imath::{gcd_u32, lcm_u32, pow_i16, root_u32};
use flightnum_core::num::ops::kernel::repr_min;
use proptest::prelude::*;

proptest! {
    // =====================================
    // Alignment Properties
    // =====================================

    /// Floor and ceil land on multiples that bracket the value
    #[test]
    fn floor_and_ceil_bracket(v in valid::<i32>(), align in 1i32..=4096) {
        let mut err = false;
        let lo = floor_to_i32(v, align, Some(&mut err));
        let hi = ceil_to_i32(v, align, Some(&mut err));
        prop_assume!(!err);
        prop_assert!(lo <= v && v <= hi);
        prop_assert_eq!(lo % align, 0);
        prop_assert_eq!(hi % align, 0);
        prop_assert!(hi as i64 - lo as i64 <= align as i64);
    }

    /// Rounding picks whichever bracketing multiple is nearer, ties upward
    #[test]
    fn round_picks_nearest(v in any::<u16>(), align in 1u16..=1000) {
        let mut err = false;
        let lo = floor_to_u16(v, align, Some(&mut err));
        let r = round_to_u16(v, align, Some(&mut err));
        prop_assume!(!err);
        let down = (v - lo) as u32;
        let up = align as u32 - down;
        if down == 0 {
            prop_assert_eq!(r, v);
        } else if down < up {
            prop_assert_eq!(r, lo);
        } else {
            prop_assert_eq!(r as u32, lo as u32 + align as u32);
        }
    }

    /// A non-positive alignment leaves the value unchanged and raises the flag
    #[test]
    fn non_positive_alignment(v in valid::<i64>(), align in i64::MIN..=0) {
        let mut err = false;
        prop_assert_eq!(round_to_i64(v, align, Some(&mut err)), v);
        prop_assert!(err);
    }

    // =====================================
    // Bounds Properties
    // =====================================

    /// Clamping ignores bound order and lands inside the range
    #[test]
    fn clamp_is_order_independent(v in any::<i16>(), b1 in any::<i16>(), b2 in any::<i16>()) {
        let c = clamp_i16(v, b1, b2);
        prop_assert_eq!(c, clamp_i16(v, b2, b1));
        prop_assert!(c >= b1.min(b2) && c <= b1.max(b2));
        prop_assert_eq!(in_range_i16(v, b1, b2), c == v);
    }

    /// Slice extremes match the iterator extremes
    #[test]
    fn extremes_match_iterator(values in prop::collection::vec(any::<u32>(), 1..64)) {
        let mut err = false;
        prop_assert_eq!(min_u32(&values, Some(&mut err)), *values.iter().min().unwrap());
        prop_assert_eq!(max_u32(&values, Some(&mut err)), *values.iter().max().unwrap());
        prop_assert!(!err);
    }

    /// NaN entries are skipped by min and max
    #[test]
    fn float_extremes_skip_nan(
        values in prop::collection::vec(-1e9f64..1e9, 1..32),
        at in any::<prop::sample::Index>(),
    ) {
        let mut with_nan = values.clone();
        with_nan.insert(at.index(values.len() + 1), f64::NAN);

        let mut err = false;
        prop_assert_eq!(min_d(&with_nan, Some(&mut err)), min_d(&values, Some(&mut err)));
        prop_assert_eq!(max_d(&with_nan, Some(&mut err)), max_d(&values, Some(&mut err)));
        prop_assert!(!err);
    }

    // =====================================
    // Aggregate Properties
    // =====================================

    /// A sum that reports no error is exact
    #[test]
    fn summation_exact_without_error(values in prop::collection::vec(valid::<i16>(), 0..32)) {
        let mut err = false;
        let got = summation_i16(&values, Some(&mut err));
        let exact: i64 = values.iter().map(|&v| v as i64).sum();
        if !err {
            prop_assert_eq!(got as i64, exact);
        } else {
            prop_assert!(got == i16::MAX || got == repr_min::<HostRepr, i16>());
        }
    }

    /// Positive products flag exactly when the true product is out of range
    #[test]
    fn product_exact_without_error(values in prop::collection::vec(1i32..50, 0..8)) {
        let mut err = false;
        let got = product_i32(&values, Some(&mut err));
        let exact: i128 = values.iter().map(|&v| v as i128).product();
        prop_assert_eq!(err, exact > i32::MAX as i128);
        if !err {
            prop_assert_eq!(got as i128, exact);
        }
    }

    // =====================================
    // Integer Math Properties
    // =====================================

    /// Powers agree with a wide-integer oracle, saturating toward the sign
    #[test]
    fn pow_matches_oracle(v in -50i16..50, n in 0i32..6) {
        let mut err = false;
        let got = pow_i16(v, n, Some(&mut err));
        prop_assert_eq!((got, err), clamp_wide::<i16>((v as i128).pow(n as u32)));
    }

    /// The root is the largest value whose power does not exceed the input
    #[test]
    fn root_brackets_input(v in any::<u32>(), n in 1i32..8) {
        let mut err = false;
        let r = root_u32(v, n, Some(&mut err)) as u128;
        prop_assert!(!err);
        prop_assert!(r.pow(n as u32) <= v as u128);
        prop_assert!((r + 1).pow(n as u32) > v as u128);
    }

    /// `gcd * lcm == a * b` and the divisor divides both operands
    #[test]
    fn gcd_lcm_identity(a in 1u32..10_000, b in 1u32..10_000) {
        let mut err = false;
        let g = gcd_u32(a, b, Some(&mut err));
        let l = lcm_u32(a, b, Some(&mut err));
        prop_assert!(!err);
        prop_assert_eq!((a % g, b % g), (0, 0));
        prop_assert_eq!(g as u64 * l as u64, a as u64 * b as u64);
    }
}
