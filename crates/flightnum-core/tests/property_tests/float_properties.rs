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

//! Property-based tests for the IEEE-754 helpers
//!
//! This module tests:
//! - Classification as a partition of all bit patterns
//! - ULP spacing monotonic in magnitude
//! - Exponent and mantissa decomposition
//! - NaN propagation through arithmetic

#![cfg(not(feature = "non-ieee-float"))]

use flightnum_core::float::arith::{add_d, mul_f};
use flightnum_core::float::classify::*;
use flightnum_core::float::inspect::{approx_eq_d, fexp_d, mant_d, to_ulp_d, to_ulp_f};
use flightnum_core::float::value::ulp_d;
use proptest::prelude::*;

/// Any finite `f64`, drawn uniformly over bit patterns
fn finite_f64() -> impl Strategy<Value = f64> {
    any::<u64>()
        .prop_map(f64::from_bits)
        .prop_filter("finite", |v| v.is_finite())
}

proptest! {
    // =====================================
    // Classification Properties
    // =====================================

    /// Every bit pattern falls into exactly one class
    #[test]
    fn classification_partition_f64(bits in any::<u64>()) {
        let v = f64::from_bits(bits);
        let hits = [is_nan_d(v), is_inf_d(v), is_zero(v), is_denormal_d(v), is_normal_d(v)];
        prop_assert_eq!(hits.iter().filter(|&&h| h).count(), 1);
        prop_assert_eq!(is_finite_d(v), !is_nan_d(v) && !is_inf_d(v));
        prop_assert_eq!(sign_bit_d(v), bits >> 63 == 1);
    }

    /// The classes agree with the standard library
    #[test]
    fn classification_matches_std_f32(bits in any::<u32>()) {
        let v = f32::from_bits(bits);
        prop_assert_eq!(is_nan_f(v), v.is_nan());
        prop_assert_eq!(is_inf_f(v), v.is_infinite());
        prop_assert_eq!(is_normal_f(v), v.is_normal());
        prop_assert_eq!(is_denormal_f(v), v.is_subnormal());
    }

    // =====================================
    // ULP Properties
    // =====================================

    /// Larger magnitudes never have finer spacing
    #[test]
    fn ulp_monotone_in_magnitude(a in finite_f64(), b in finite_f64()) {
        let (small, large) = if a.abs() <= b.abs() { (a, b) } else { (b, a) };
        let mut err = false;
        prop_assert!(ulp_d(small, Some(&mut err)) <= ulp_d(large, Some(&mut err)));
        prop_assert!(!err);
    }

    /// Ordinals follow magnitude, and neighbours are one apart
    #[test]
    fn to_ulp_orders_magnitudes(a in finite_f64(), b in finite_f64()) {
        let mut err = false;
        let (oa, ob) = (to_ulp_d(a, Some(&mut err)), to_ulp_d(b, Some(&mut err)));
        prop_assert_eq!(oa.cmp(&ob), a.abs().partial_cmp(&b.abs()).unwrap());
        prop_assert!(!err);

        let next = a.abs() + ulp_d(a, None);
        if next.is_finite() {
            prop_assert_eq!(to_ulp_d(next, None), oa + 1);
        }
    }

    /// Non-finite values have no ordinal
    #[test]
    fn to_ulp_rejects_non_finite(negative in any::<bool>()) {
        let v = if negative { f32::NEG_INFINITY } else { f32::NAN };
        let mut err = false;
        prop_assert_eq!(to_ulp_f(v, Some(&mut err)), 0);
        prop_assert!(err);
    }

    /// Tolerance equality is reflexive and accepts the nearest neighbour
    #[test]
    fn approx_eq_neighbours(v in finite_f64()) {
        let mut err = false;
        prop_assert!(approx_eq_d(v, v, Some(&mut err)));
        let next = f64::from_bits(v.to_bits() + 1);
        if next.is_finite() {
            prop_assert!(approx_eq_d(v, next, Some(&mut err)));
        }
        prop_assert!(!err);
    }

    // =====================================
    // Decomposition Properties
    // =====================================

    /// Normal values are `mant * 2^fexp` in magnitude
    #[test]
    fn normal_decomposition(v in finite_f64()) {
        prop_assume!(v.is_normal());
        let mut err = false;
        let m = mant_d(v, Some(&mut err));
        let e = fexp_d(v, Some(&mut err));
        prop_assert!((1.0..2.0).contains(&m));
        prop_assert_eq!(m * 2f64.powi(e), v.abs());
        prop_assert!(!err);
    }

    // =====================================
    // NaN Propagation Properties
    // =====================================

    /// A NaN operand always yields NaN and raises the flag
    #[test]
    fn nan_propagates(v in finite_f64()) {
        let mut err = false;
        prop_assert!(add_d(v, f64::NAN, Some(&mut err)).is_nan());
        prop_assert!(err);

        let mut err = false;
        prop_assert!(mul_f(f32::NAN, v as f32, Some(&mut err)).is_nan());
        prop_assert!(err);
    }
}
