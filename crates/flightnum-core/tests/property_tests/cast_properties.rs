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

//! Property-based tests for integer casts
//!
//! This module tests:
//! - Round trips through a narrower type
//! - Agreement with a wide-integer oracle
//! - The generic and suffixed forms agreeing

use super::{clamp_wide, valid};
use flightnum_core::env::HostRepr;
use flightnum_core::num::ops::kernel::repr_min;
use flightnum_core::num::ops::cast::*;
use proptest::prelude::*;

proptest! {
    /// A value that fits the destination survives the round trip unchanged
    #[test]
    fn narrowing_round_trip(v in valid::<i64>()) {
        let mut err = false;
        let narrow = cast_i16_from_i64(v, Some(&mut err));
        let back = cast_i64_from_i16(narrow, Some(&mut err));
        if err {
            prop_assert!(v < i16::MIN as i64 || v > i16::MAX as i64);
            prop_assert!(narrow == i16::MAX || narrow == repr_min::<HostRepr, i16>());
            prop_assert_eq!(back, narrow as i64);
        } else {
            prop_assert_eq!(back, v);
        }
    }

    /// Casts clamp into the destination range and flag exactly when they do
    #[test]
    fn signed_to_unsigned_matches_oracle(v in valid::<i32>()) {
        let mut err = false;
        let got = cast_u8_from_i32(v, Some(&mut err));
        prop_assert_eq!((got, err), clamp_wide::<u8>(v as i128));
    }

    /// Unsigned sources beyond the signed destination saturate to its maximum
    #[test]
    fn unsigned_to_signed_matches_oracle(v in any::<u64>()) {
        let mut err = false;
        let got = cast_i64_from_u64(v, Some(&mut err));
        prop_assert_eq!((got, err), clamp_wide::<i64>(v as i128));
    }

    /// Widening casts never fail
    #[test]
    fn widening_is_lossless(v in valid::<i8>()) {
        let mut err = false;
        prop_assert_eq!(cast_i32_from_i8(v, Some(&mut err)), v as i32);
        prop_assert_eq!(cast_i64_from_i8(v, Some(&mut err)), v as i64);
        prop_assert!(!err);
    }

    /// The trait method and the suffixed function agree
    #[test]
    fn trait_and_suffix_agree(v in valid::<i64>()) {
        let mut err_a = false;
        let mut err_b = false;
        let a = v.saturating_cast_val::<u32>(Some(&mut err_a));
        let b = cast_u32_from_i64(v, Some(&mut err_b));
        prop_assert_eq!((a, err_a), (b, err_b));
    }
}
