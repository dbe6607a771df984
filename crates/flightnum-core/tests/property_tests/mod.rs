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

//! Property-based tests for flightnum-core
//!
//! This module checks the saturating integer kernel, casts and mixed
//! comparisons against wide-integer oracles, and the float helpers against
//! IEEE-754 bit-level invariants.

mod cast_properties;
mod cmp_properties;
mod float_properties;
mod integer_properties;
mod math_properties;

use flightnum_core::env::HostRepr;
use flightnum_core::num::ops::kernel::repr_min;
use flightnum_core::num::types::Integer;
use num_traits::NumCast;
use proptest::prelude::*;

/// Values inside the host's valid range for `T`.
pub(crate) fn valid<T>() -> impl Strategy<Value = T>
where
    T: Integer + proptest::arbitrary::Arbitrary,
{
    any::<T>().prop_filter("below the representation minimum", |&v| {
        v >= repr_min::<HostRepr, T>()
    })
}

/// Clamps a wide oracle result into `T`'s host range.
pub(crate) fn clamp_wide<T: Integer>(exact: i128) -> (T, bool) {
    let lo = repr_min::<HostRepr, T>().to_i128().unwrap_or(i128::MIN);
    let hi = T::MAX.to_i128().unwrap_or(i128::MAX);
    if exact < lo {
        (repr_min::<HostRepr, T>(), true)
    } else if exact > hi {
        (T::MAX, true)
    } else {
        (<T as NumCast>::from(exact).unwrap(), false)
    }
}
