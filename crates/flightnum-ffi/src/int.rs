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

//! Integer arithmetic.
//!
//! ## Safety
//!
//! `err` may be null; otherwise it must be valid for writes of a `bool`.

use crate::sink;
use flightnum_core::num::ops::checked_arithmetic as checked;
use flightnum_core::num::ops::saturating_arithmetic as sat;

macro_rules! ffi_binary {
    ($op:ident, $t:ident, $a:ident, $b:ident) => {
        paste::paste! {
            #[doc = "Saturating `" $op "` on `" $t "`."]
            ///
            /// # Safety
            ///
            /// `err` must be null or valid for writes.
            #[no_mangle]
            pub unsafe extern "C" fn [<fnum_ $op _ $t>]($a: $t, $b: $t, err: *mut bool) -> $t {
                sat::[<$op _ $t>]($a, $b, unsafe { sink(err) })
            }
        }
    };
}

macro_rules! ffi_int_ops {
    ($($t:ident)*) => {$(
        ffi_binary!(add, $t, a, b);
        ffi_binary!(sub, $t, a, b);
        ffi_binary!(mul, $t, a, b);
        ffi_binary!(div, $t, n, d);
        ffi_binary!(rem, $t, n, d);

        paste::paste! {
            #[doc = "Left shift of a `" $t "`, saturating on lost bits."]
            ///
            /// # Safety
            ///
            /// `err` must be null or valid for writes.
            #[no_mangle]
            pub unsafe extern "C" fn [<fnum_lshift_ $t>](v: $t, k: i32, err: *mut bool) -> $t {
                sat::[<lshift_ $t>](v, k, unsafe { sink(err) })
            }

            #[doc = "Right shift of a `" $t "`."]
            ///
            /// # Safety
            ///
            /// `err` must be null or valid for writes.
            #[no_mangle]
            pub unsafe extern "C" fn [<fnum_rshift_ $t>](v: $t, k: i32, err: *mut bool) -> $t {
                sat::[<rshift_ $t>](v, k, unsafe { sink(err) })
            }

            #[no_mangle]
            pub extern "C" fn [<fnum_can_add_ $t>](a: $t, b: $t) -> bool {
                checked::[<can_add_ $t>](a, b)
            }

            #[no_mangle]
            pub extern "C" fn [<fnum_can_sub_ $t>](a: $t, b: $t) -> bool {
                checked::[<can_sub_ $t>](a, b)
            }

            #[no_mangle]
            pub extern "C" fn [<fnum_can_mul_ $t>](a: $t, b: $t) -> bool {
                checked::[<can_mul_ $t>](a, b)
            }

            #[no_mangle]
            pub extern "C" fn [<fnum_can_div_ $t>](n: $t, d: $t) -> bool {
                checked::[<can_div_ $t>](n, d)
            }

            #[no_mangle]
            pub extern "C" fn [<fnum_can_rem_ $t>](n: $t, d: $t) -> bool {
                checked::[<can_rem_ $t>](n, d)
            }

            #[no_mangle]
            pub extern "C" fn [<fnum_can_lshift_ $t>](v: $t, k: i32) -> bool {
                checked::[<can_lshift_ $t>](v, k)
            }

            #[no_mangle]
            pub extern "C" fn [<fnum_can_rshift_ $t>](v: $t, k: i32) -> bool {
                checked::[<can_rshift_ $t>](v, k)
            }
        }
    )*};
}

macro_rules! ffi_signed_ops {
    ($($t:ident)*) => {$(
        paste::paste! {
            #[doc = "Negation of a `" $t "`, saturating the representation minimum."]
            ///
            /// # Safety
            ///
            /// `err` must be null or valid for writes.
            #[no_mangle]
            pub unsafe extern "C" fn [<fnum_neg_ $t>](v: $t, err: *mut bool) -> $t {
                sat::[<neg_ $t>](v, unsafe { sink(err) })
            }

            #[doc = "Absolute value of a `" $t "`, saturating the representation minimum."]
            ///
            /// # Safety
            ///
            /// `err` must be null or valid for writes.
            #[no_mangle]
            pub unsafe extern "C" fn [<fnum_abs_ $t>](v: $t, err: *mut bool) -> $t {
                sat::[<abs_ $t>](v, unsafe { sink(err) })
            }

            #[no_mangle]
            pub extern "C" fn [<fnum_can_neg_ $t>](v: $t) -> bool {
                checked::[<can_neg_ $t>](v)
            }
        }
    )*};
}

ffi_int_ops!(i8 i16 i32 i64 u8 u16 u32 u64);
ffi_signed_ops!(i8 i16 i32 i64);
