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

//! Bit-pattern classification.
//!
//! Every predicate inspects the storage bits directly. On hosts built with the
//! `non-ieee-float` feature the layout cannot be trusted and every predicate
//! returns `false`.

use crate::env::{FloatRepr, FLOAT_REPR};
use crate::float::bits::IeeeFloat;
use num_traits::Zero;

const IEEE: bool = matches!(FLOAT_REPR, FloatRepr::Ieee754);

/// The class of a float bit pattern.
///
/// The classes partition all bit patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatClass {
    Nan,
    Infinite,
    /// `+0.0`.
    Zero,
    /// `-0.0`.
    NegativeZero,
    Subnormal,
    Normal,
}

#[inline(always)]
fn exp_field<F: IeeeFloat>(v: F) -> F::Bits {
    v.to_raw_bits() & F::EXP_MASK
}

#[inline(always)]
fn mant_field<F: IeeeFloat>(v: F) -> F::Bits {
    v.to_raw_bits() & F::MANT_MASK
}

/// Returns `true` for any NaN, quiet or signalling.
#[inline]
pub fn is_nan<F: IeeeFloat>(v: F) -> bool {
    IEEE && exp_field(v) == F::EXP_MASK && !mant_field(v).is_zero()
}

/// Returns `true` for `+inf` and `-inf`.
#[inline]
pub fn is_inf<F: IeeeFloat>(v: F) -> bool {
    IEEE && exp_field(v) == F::EXP_MASK && mant_field(v).is_zero()
}

/// Returns `true` for zeros, subnormals and normals.
#[inline]
pub fn is_finite<F: IeeeFloat>(v: F) -> bool {
    IEEE && exp_field(v) != F::EXP_MASK
}

/// Returns `true` for normal numbers. Zeros are not normal.
#[inline]
pub fn is_normal<F: IeeeFloat>(v: F) -> bool {
    let exp = exp_field(v);
    IEEE && !exp.is_zero() && exp != F::EXP_MASK
}

/// Returns `true` for subnormal (denormal) numbers.
#[inline]
pub fn is_denormal<F: IeeeFloat>(v: F) -> bool {
    IEEE && exp_field(v).is_zero() && !mant_field(v).is_zero()
}

/// Returns `true` for `+0.0` and `-0.0`.
#[inline]
pub fn is_zero<F: IeeeFloat>(v: F) -> bool {
    IEEE && exp_field(v).is_zero() && mant_field(v).is_zero()
}

/// Returns the sign bit, including for zeros and NaNs.
#[inline]
pub fn sign_bit<F: IeeeFloat>(v: F) -> bool {
    IEEE && !(v.to_raw_bits() & F::SIGN_MASK).is_zero()
}

/// Classifies `v` by its bit pattern.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::float::classify::{classify, FloatClass};
/// assert_eq!(classify(0.0f32), FloatClass::Zero);
/// # #[cfg(not(feature = "non-ieee-float"))]
/// assert_eq!(classify(-0.0f32), FloatClass::NegativeZero);
/// assert_eq!(classify(f64::MIN_POSITIVE / 2.0), FloatClass::Subnormal);
/// assert_eq!(classify(f32::NAN), FloatClass::Nan);
/// ```
pub fn classify<F: IeeeFloat>(v: F) -> FloatClass {
    if is_nan(v) {
        FloatClass::Nan
    } else if is_inf(v) {
        FloatClass::Infinite
    } else if is_denormal(v) {
        FloatClass::Subnormal
    } else if is_normal(v) {
        FloatClass::Normal
    } else if sign_bit(v) {
        FloatClass::NegativeZero
    } else {
        FloatClass::Zero
    }
}

macro_rules! classify_suffix_fns {
    ($t:ident, $suffix:ident) => {
        paste::paste! {
            #[inline]
            pub fn [<is_nan_ $suffix>](v: $t) -> bool { is_nan(v) }
            #[inline]
            pub fn [<is_inf_ $suffix>](v: $t) -> bool { is_inf(v) }
            #[inline]
            pub fn [<is_finite_ $suffix>](v: $t) -> bool { is_finite(v) }
            #[inline]
            pub fn [<is_normal_ $suffix>](v: $t) -> bool { is_normal(v) }
            #[inline]
            pub fn [<is_denormal_ $suffix>](v: $t) -> bool { is_denormal(v) }
            #[inline]
            pub fn [<sign_bit_ $suffix>](v: $t) -> bool { sign_bit(v) }
        }
    };
}

classify_suffix_fns!(f32, f);
classify_suffix_fns!(f64, d);
