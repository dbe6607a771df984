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

//! # Exact-Width Integer Types
//!
//! Named aliases for the widths the kernel works with, the sealed [`Integer`]
//! trait every checked operation is monomorphised over, and [`MaxWidth`], the
//! maximum-width intermediate used for cross-signedness comparisons and casts.

use crate::num::constants::{MinusOne, PlusOne, Zero};
use num_traits::PrimInt;
use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::Neg;

/// Maximum-width signed integer.
pub type IntMax = i64;
/// Maximum-width unsigned integer.
pub type UIntMax = u64;
/// Pointer-sized unsigned integer, used for address range checks.
pub type UIntPtr = usize;
/// Size integer.
pub type Size = usize;

/// An integer value widened to the maximum width without loss.
///
/// Negative values are held as [`IntMax`], non-negative values as [`UIntMax`],
/// so every value of every exact-width type is representable regardless of its
/// signedness.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::num::types::{Integer, MaxWidth};
/// assert!((-1i64).to_max_width() < u64::MAX.to_max_width());
/// assert_eq!(5u8.to_max_width(), 5i32.to_max_width());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaxWidth {
    Negative(IntMax),
    NonNegative(UIntMax),
}

impl Ord for MaxWidth {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        match (*self, *other) {
            (MaxWidth::Negative(a), MaxWidth::Negative(b)) => a.cmp(&b),
            (MaxWidth::NonNegative(a), MaxWidth::NonNegative(b)) => a.cmp(&b),
            // A negative value is below every non-negative value.
            (MaxWidth::Negative(_), MaxWidth::NonNegative(_)) => Ordering::Less,
            (MaxWidth::NonNegative(_), MaxWidth::Negative(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for MaxWidth {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for MaxWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaxWidth::Negative(v) => write!(f, "{}", v),
            MaxWidth::NonNegative(v) => write!(f, "{}", v),
        }
    }
}

mod integer {
    pub trait Sealed {}
}

/// The exact-width integer types the kernel supports.
///
/// This trait is sealed; it is implemented for `i8`, `i16`, `i32`, `i64`,
/// `u8`, `u16`, `u32` and `u64`.
pub trait Integer:
    PrimInt
    + Zero
    + PlusOne
    + Debug
    + Display
    + Default
    + Hash
    + Send
    + Sync
    + integer::Sealed
    + 'static
{
    /// Whether the type is signed.
    const SIGNED: bool;
    /// Storage width in bits.
    const BITS: u32;
    /// Smallest value of the host type.
    const MIN: Self;
    /// Largest value of the host type.
    const MAX: Self;

    /// Widens the value to the maximum-width intermediate.
    fn to_max_width(self) -> MaxWidth;

    /// Narrows a maximum-width value by truncation.
    ///
    /// The caller bound-checks `wide` against `MIN`/`MAX` first; out-of-range
    /// inputs keep the low bits.
    fn from_max_width(wide: MaxWidth) -> Self;
}

macro_rules! impl_integer_signed {
    ($($t:ident)*) => {$(
        impl integer::Sealed for $t {}
        impl Integer for $t {
            const SIGNED: bool = true;
            const BITS: u32 = $t::BITS;
            const MIN: Self = $t::MIN;
            const MAX: Self = $t::MAX;

            #[inline(always)]
            fn to_max_width(self) -> MaxWidth {
                if self < 0 {
                    MaxWidth::Negative(self as IntMax)
                } else {
                    MaxWidth::NonNegative(self as UIntMax)
                }
            }

            #[inline(always)]
            fn from_max_width(wide: MaxWidth) -> Self {
                match wide {
                    MaxWidth::Negative(v) => v as $t,
                    MaxWidth::NonNegative(v) => v as $t,
                }
            }
        }
    )*};
}

macro_rules! impl_integer_unsigned {
    ($($t:ident)*) => {$(
        impl integer::Sealed for $t {}
        impl Integer for $t {
            const SIGNED: bool = false;
            const BITS: u32 = $t::BITS;
            const MIN: Self = $t::MIN;
            const MAX: Self = $t::MAX;

            #[inline(always)]
            fn to_max_width(self) -> MaxWidth {
                MaxWidth::NonNegative(self as UIntMax)
            }

            #[inline(always)]
            fn from_max_width(wide: MaxWidth) -> Self {
                match wide {
                    MaxWidth::Negative(v) => v as $t,
                    MaxWidth::NonNegative(v) => v as $t,
                }
            }
        }
    )*};
}

impl_integer_signed!(i8 i16 i32 i64);
impl_integer_unsigned!(u8 u16 u32 u64);

/// The signed subset of [`Integer`], for operations only defined on signed
/// types (`neg`, `abs`).
pub trait SignedInteger: Integer + MinusOne + Neg<Output = Self> {}

impl SignedInteger for i8 {}
impl SignedInteger for i16 {}
impl SignedInteger for i32 {}
impl SignedInteger for i64 {}
