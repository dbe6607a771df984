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

//! Checked summation and product over slices and raw buffers.
//!
//! The fold runs left to right with the checked kernel operation; the first
//! failure stops it and the saturated intermediate becomes the result. An
//! empty sum is `0`, an empty product `1`.

use crate::error::{NumError, SaturateExt};
use crate::float::arith;
use crate::float::bits::IeeeFloat;
use crate::mem::buffer;
use crate::num::ops::checked_arithmetic::{CheckedAddVal, CheckedMulVal};
use tracing::trace;

/// Checked sum of `values`.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::math::aggregate::try_summation;
/// assert_eq!(try_summation(&[1u8, 2, 3]), Ok(6));
/// assert_eq!(try_summation(&[100i8, 100, -100]).unwrap_err().saturated(), 127);
/// ```
pub fn try_summation<T: CheckedAddVal>(values: &[T]) -> Result<T, NumError<T>> {
    values
        .iter()
        .try_fold(T::ZERO, |acc, &v| acc.checked_add_val(v))
        .inspect_err(|e| trace!(kind = %e.kind(), "summation stopped early"))
}

/// Checked product of `values`.
pub fn try_product<T: CheckedMulVal>(values: &[T]) -> Result<T, NumError<T>> {
    values
        .iter()
        .try_fold(T::PLUS_ONE, |acc, &v| acc.checked_mul_val(v))
        .inspect_err(|e| trace!(kind = %e.kind(), "product stopped early"))
}

/// Checked float sum of `values`. A NaN input or intermediate yields NaN;
/// overflow of finite terms yields `±MAX`.
pub fn try_summation_float<F: IeeeFloat>(values: &[F]) -> Result<F, NumError<F>> {
    values
        .iter()
        .try_fold(F::zero(), |acc, &v| arith::try_add(acc, v))
        .inspect_err(|e| trace!(kind = %e.kind(), "float summation stopped early"))
}

/// Checked float product of `values`.
pub fn try_product_float<F: IeeeFloat>(values: &[F]) -> Result<F, NumError<F>> {
    values
        .iter()
        .try_fold(F::one(), |acc, &v| arith::try_mul(acc, v))
        .inspect_err(|e| trace!(kind = %e.kind(), "float product stopped early"))
}

/// [`try_summation`] over a raw buffer. An invalid buffer yields `0`.
///
/// # Safety
///
/// See [`buffer`](crate::mem::buffer).
pub unsafe fn try_summation_raw<T: CheckedAddVal>(
    ptr: *const T,
    n: i32,
) -> Result<T, NumError<T>> {
    let values = unsafe { buffer(ptr, n) }.map_err(|kind| NumError::new(kind, T::ZERO))?;
    try_summation(values)
}

/// [`try_product`] over a raw buffer. An invalid buffer yields `0`.
///
/// # Safety
///
/// See [`buffer`](crate::mem::buffer).
pub unsafe fn try_product_raw<T: CheckedMulVal>(ptr: *const T, n: i32) -> Result<T, NumError<T>> {
    let values = unsafe { buffer(ptr, n) }.map_err(|kind| NumError::new(kind, T::ZERO))?;
    try_product(values)
}

/// [`try_summation_float`] over a raw buffer. An invalid buffer yields `0`.
///
/// # Safety
///
/// See [`buffer`](crate::mem::buffer).
pub unsafe fn try_summation_float_raw<F: IeeeFloat>(
    ptr: *const F,
    n: i32,
) -> Result<F, NumError<F>> {
    let values = unsafe { buffer(ptr, n) }.map_err(|kind| NumError::new(kind, F::zero()))?;
    try_summation_float(values)
}

/// [`try_product_float`] over a raw buffer. An invalid buffer yields `0`.
///
/// # Safety
///
/// See [`buffer`](crate::mem::buffer).
pub unsafe fn try_product_float_raw<F: IeeeFloat>(
    ptr: *const F,
    n: i32,
) -> Result<F, NumError<F>> {
    let values = unsafe { buffer(ptr, n) }.map_err(|kind| NumError::new(kind, F::zero()))?;
    try_product_float(values)
}

macro_rules! aggregate_int_suffix_fns {
    ($($t:ident)*) => {$(
        paste::paste! {
            #[doc = "Saturating sum of `" $t "` values."]
            #[inline]
            pub fn [<summation_ $t>](values: &[$t], err: Option<&mut bool>) -> $t {
                try_summation(values).saturate(err)
            }

            #[doc = "Saturating product of `" $t "` values."]
            #[inline]
            pub fn [<product_ $t>](values: &[$t], err: Option<&mut bool>) -> $t {
                try_product(values).saturate(err)
            }
        }
    )*};
}

macro_rules! aggregate_float_suffix_fns {
    ($t:ident, $suffix:ident) => {
        paste::paste! {
            #[doc = "Checked sum of `" $t "` values."]
            #[inline]
            pub fn [<summation_ $suffix>](values: &[$t], err: Option<&mut bool>) -> $t {
                try_summation_float(values).saturate(err)
            }

            #[doc = "Checked product of `" $t "` values."]
            #[inline]
            pub fn [<product_ $suffix>](values: &[$t], err: Option<&mut bool>) -> $t {
                try_product_float(values).saturate(err)
            }
        }
    };
}

aggregate_int_suffix_fns!(i8 i16 i32 i64 u8 u16 u32 u64);
aggregate_float_suffix_fns!(f32, f);
aggregate_float_suffix_fns!(f64, d);
