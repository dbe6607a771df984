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

//! Aggregates over caller buffers, extremes, clamping and alignment.
//!
//! ## Safety
//!
//! `err` may be null; otherwise it must be valid for writes of a `bool`. A
//! buffer `(ptr, n)` that passes validation (non-null, aligned, `n >= 0`, no
//! address wrap) must point to `n` initialised elements that stay unmodified
//! for the duration of the call.

use crate::sink;
use flightnum_core::error::SaturateExt;
use flightnum_core::math::{aggregate, align as rounding, bounds};
use tracing::trace;

macro_rules! ffi_buffer_fn {
    ($what:literal, $name:ident, $t:ident, $inner:path) => {
        #[doc = concat!($what, " of `n` `", stringify!($t), "` values.")]
        ///
        /// # Safety
        ///
        /// `ptr` must cover `n` elements if it passes validation; `err` must
        /// be null or valid for writes.
        #[no_mangle]
        pub unsafe extern "C" fn $name(ptr: *const $t, n: i32, err: *mut bool) -> $t {
            trace!(n, op = stringify!($name), "buffer call");
            unsafe { $inner(ptr, n) }.saturate(unsafe { sink(err) })
        }
    };
}

macro_rules! ffi_int_aggregates {
    ($($t:ident)*) => {$(
        paste::paste! {
            ffi_buffer_fn!("Saturating sum", [<fnum_summation_ $t>], $t, aggregate::try_summation_raw);
            ffi_buffer_fn!("Saturating product", [<fnum_product_ $t>], $t, aggregate::try_product_raw);
            ffi_buffer_fn!("Smallest", [<fnum_min_ $t>], $t, bounds::try_min_raw);
            ffi_buffer_fn!("Largest", [<fnum_max_ $t>], $t, bounds::try_max_raw);

            #[no_mangle]
            pub extern "C" fn [<fnum_clamp_ $t>](v: $t, b1: $t, b2: $t) -> $t {
                bounds::[<clamp_ $t>](v, b1, b2)
            }

            #[no_mangle]
            pub extern "C" fn [<fnum_in_range_ $t>](v: $t, b1: $t, b2: $t) -> bool {
                bounds::[<in_range_ $t>](v, b1, b2)
            }

            /// # Safety
            ///
            /// `err` must be null or valid for writes.
            #[no_mangle]
            pub unsafe extern "C" fn [<fnum_floor_to_ $t>](v: $t, align: $t, err: *mut bool) -> $t {
                rounding::[<floor_to_ $t>](v, align, unsafe { sink(err) })
            }

            /// # Safety
            ///
            /// `err` must be null or valid for writes.
            #[no_mangle]
            pub unsafe extern "C" fn [<fnum_ceil_to_ $t>](v: $t, align: $t, err: *mut bool) -> $t {
                rounding::[<ceil_to_ $t>](v, align, unsafe { sink(err) })
            }

            /// # Safety
            ///
            /// `err` must be null or valid for writes.
            #[no_mangle]
            pub unsafe extern "C" fn [<fnum_round_to_ $t>](v: $t, align: $t, err: *mut bool) -> $t {
                rounding::[<round_to_ $t>](v, align, unsafe { sink(err) })
            }
        }
    )*};
}

macro_rules! ffi_float_aggregates {
    ($t:ident, $suffix:ident) => {
        paste::paste! {
            ffi_buffer_fn!("Checked sum", [<fnum_summation_ $suffix>], $t, aggregate::try_summation_float_raw);
            ffi_buffer_fn!("Checked product", [<fnum_product_ $suffix>], $t, aggregate::try_product_float_raw);
            ffi_buffer_fn!("Smallest non-NaN", [<fnum_min_ $suffix>], $t, bounds::try_min_float_raw);
            ffi_buffer_fn!("Largest non-NaN", [<fnum_max_ $suffix>], $t, bounds::try_max_float_raw);

            /// # Safety
            ///
            /// `err` must be null or valid for writes.
            #[no_mangle]
            pub unsafe extern "C" fn [<fnum_clamp_ $suffix>](v: $t, b1: $t, b2: $t, err: *mut bool) -> $t {
                bounds::[<clamp_ $suffix>](v, b1, b2, unsafe { sink(err) })
            }

            /// # Safety
            ///
            /// `err` must be null or valid for writes.
            #[no_mangle]
            pub unsafe extern "C" fn [<fnum_in_range_ $suffix>](v: $t, b1: $t, b2: $t, err: *mut bool) -> bool {
                bounds::[<in_range_ $suffix>](v, b1, b2, unsafe { sink(err) })
            }
        }
    };
}

ffi_int_aggregates!(i8 i16 i32 i64 u8 u16 u32 u64);
ffi_float_aggregates!(f32, f);
ffi_float_aggregates!(f64, d);
