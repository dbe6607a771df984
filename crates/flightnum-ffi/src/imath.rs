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

//! Integer powers, roots, logarithms, divisors, factorials and sign
//! transfer.
//!
//! ## Safety
//!
//! `err` may be null; otherwise it must be valid for writes of a `bool`.

use crate::sink;
use flightnum_core::math::imath;

macro_rules! ffi_count_op {
    ($op:ident, $t:ident, $count:ident, $what:literal) => {
        paste::paste! {
            #[doc = $what " of a `" $t "`."]
            ///
            /// # Safety
            ///
            /// `err` must be null or valid for writes.
            #[no_mangle]
            pub unsafe extern "C" fn [<fnum_ $op _ $t>](v: $t, $count: i32, err: *mut bool) -> $t {
                imath::[<$op _ $t>](v, $count, unsafe { sink(err) })
            }
        }
    };
}

macro_rules! ffi_imath_ops {
    ($($t:ident)*) => {$(
        ffi_count_op!(pow, $t, n, "Power");
        ffi_count_op!(root, $t, n, "Integer root");
        ffi_count_op!(log, $t, base, "Integer logarithm");

        paste::paste! {
            /// Greatest common divisor.
            ///
            /// # Safety
            ///
            /// `err` must be null or valid for writes.
            #[no_mangle]
            pub unsafe extern "C" fn [<fnum_gcd_ $t>](a: $t, b: $t, err: *mut bool) -> $t {
                imath::[<gcd_ $t>](a, b, unsafe { sink(err) })
            }

            /// Least common multiple.
            ///
            /// # Safety
            ///
            /// `err` must be null or valid for writes.
            #[no_mangle]
            pub unsafe extern "C" fn [<fnum_lcm_ $t>](a: $t, b: $t, err: *mut bool) -> $t {
                imath::[<lcm_ $t>](a, b, unsafe { sink(err) })
            }

            /// Factorial.
            ///
            /// # Safety
            ///
            /// `err` must be null or valid for writes.
            #[no_mangle]
            pub unsafe extern "C" fn [<fnum_fact_ $t>](v: $t, err: *mut bool) -> $t {
                imath::[<fact_ $t>](v, unsafe { sink(err) })
            }
        }
    )*};
}

macro_rules! ffi_apply_sign {
    ($($t:ident)*) => {$(
        paste::paste! {
            /// Magnitude of `mag` with the sign of `sign`.
            ///
            /// # Safety
            ///
            /// `err` must be null or valid for writes.
            #[no_mangle]
            pub unsafe extern "C" fn [<fnum_apply_sign_ $t>](mag: $t, sign: $t, err: *mut bool) -> $t {
                imath::[<apply_sign_ $t>](mag, sign, unsafe { sink(err) })
            }
        }
    )*};
}

ffi_imath_ops!(i8 i16 i32 i64 u8 u16 u32 u64);
ffi_apply_sign!(i8 i16 i32 i64);

/// Magnitude of `mag` with the sign bit of `sign`, on `float`.
///
/// # Safety
///
/// `err` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn fnum_apply_sign_f(mag: f32, sign: f32, err: *mut bool) -> f32 {
    imath::apply_sign_f(mag, sign, unsafe { sink(err) })
}

/// Magnitude of `mag` with the sign bit of `sign`, on `double`.
///
/// # Safety
///
/// `err` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn fnum_apply_sign_d(mag: f64, sign: f64, err: *mut bool) -> f64 {
    imath::apply_sign_d(mag, sign, unsafe { sink(err) })
}
