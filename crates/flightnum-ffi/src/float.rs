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

//! Floating-point helpers for `float` (`_f`) and `double` (`_d`).
//!
//! ## Safety
//!
//! `err` may be null; otherwise it must be valid for writes of a `bool`.

use crate::sink;
use flightnum_core::float::{arith, classify, inspect, value};

macro_rules! ffi_float_ops {
    ($t:ident, $suffix:ident, $ord:ident) => {
        paste::paste! {
            #[no_mangle]
            pub extern "C" fn [<fnum_is_nan_ $suffix>](v: $t) -> bool {
                classify::[<is_nan_ $suffix>](v)
            }

            #[no_mangle]
            pub extern "C" fn [<fnum_is_inf_ $suffix>](v: $t) -> bool {
                classify::[<is_inf_ $suffix>](v)
            }

            #[no_mangle]
            pub extern "C" fn [<fnum_is_finite_ $suffix>](v: $t) -> bool {
                classify::[<is_finite_ $suffix>](v)
            }

            #[no_mangle]
            pub extern "C" fn [<fnum_is_normal_ $suffix>](v: $t) -> bool {
                classify::[<is_normal_ $suffix>](v)
            }

            #[no_mangle]
            pub extern "C" fn [<fnum_is_denormal_ $suffix>](v: $t) -> bool {
                classify::[<is_denormal_ $suffix>](v)
            }

            #[no_mangle]
            pub extern "C" fn [<fnum_sign_bit_ $suffix>](v: $t) -> bool {
                classify::[<sign_bit_ $suffix>](v)
            }

            #[no_mangle]
            pub extern "C" fn [<fnum_nan_ $suffix>]() -> $t {
                value::[<nan_ $suffix>]()
            }

            #[no_mangle]
            pub extern "C" fn [<fnum_inf_ $suffix>]() -> $t {
                value::[<inf_ $suffix>]()
            }

            /// # Safety
            ///
            /// `err` must be null or valid for writes.
            #[no_mangle]
            pub unsafe extern "C" fn [<fnum_ulp_ $suffix>](v: $t, err: *mut bool) -> $t {
                value::[<ulp_ $suffix>](v, unsafe { sink(err) })
            }

            /// # Safety
            ///
            /// `err` must be null or valid for writes.
            #[no_mangle]
            pub unsafe extern "C" fn [<fnum_fexp_ $suffix>](v: $t, err: *mut bool) -> i32 {
                inspect::[<fexp_ $suffix>](v, unsafe { sink(err) })
            }

            /// # Safety
            ///
            /// `err` must be null or valid for writes.
            #[no_mangle]
            pub unsafe extern "C" fn [<fnum_mant_ $suffix>](v: $t, err: *mut bool) -> $t {
                inspect::[<mant_ $suffix>](v, unsafe { sink(err) })
            }

            /// # Safety
            ///
            /// `err` must be null or valid for writes.
            #[no_mangle]
            pub unsafe extern "C" fn [<fnum_max_ulp_ $suffix>](v: $t, err: *mut bool) -> $t {
                inspect::[<max_ulp_ $suffix>](v, unsafe { sink(err) })
            }

            /// # Safety
            ///
            /// `err` must be null or valid for writes.
            #[no_mangle]
            pub unsafe extern "C" fn [<fnum_min_ulp_ $suffix>](v: $t, err: *mut bool) -> $t {
                inspect::[<min_ulp_ $suffix>](v, unsafe { sink(err) })
            }

            /// # Safety
            ///
            /// `err` must be null or valid for writes.
            #[no_mangle]
            pub unsafe extern "C" fn [<fnum_to_ulp_ $suffix>](v: $t, err: *mut bool) -> $ord {
                inspect::[<to_ulp_ $suffix>](v, unsafe { sink(err) })
            }

            /// # Safety
            ///
            /// `err` must be null or valid for writes.
            #[no_mangle]
            pub unsafe extern "C" fn [<fnum_approx_eq_ $suffix>](a: $t, b: $t, err: *mut bool) -> bool {
                inspect::[<approx_eq_ $suffix>](a, b, unsafe { sink(err) })
            }

            /// # Safety
            ///
            /// `err` must be null or valid for writes.
            #[no_mangle]
            pub unsafe extern "C" fn [<fnum_neg_ $suffix>](v: $t, err: *mut bool) -> $t {
                arith::[<neg_ $suffix>](v, unsafe { sink(err) })
            }

            /// # Safety
            ///
            /// `err` must be null or valid for writes.
            #[no_mangle]
            pub unsafe extern "C" fn [<fnum_abs_ $suffix>](v: $t, err: *mut bool) -> $t {
                arith::[<abs_ $suffix>](v, unsafe { sink(err) })
            }

            /// # Safety
            ///
            /// `err` must be null or valid for writes.
            #[no_mangle]
            pub unsafe extern "C" fn [<fnum_add_ $suffix>](a: $t, b: $t, err: *mut bool) -> $t {
                arith::[<add_ $suffix>](a, b, unsafe { sink(err) })
            }

            /// # Safety
            ///
            /// `err` must be null or valid for writes.
            #[no_mangle]
            pub unsafe extern "C" fn [<fnum_sub_ $suffix>](a: $t, b: $t, err: *mut bool) -> $t {
                arith::[<sub_ $suffix>](a, b, unsafe { sink(err) })
            }

            /// # Safety
            ///
            /// `err` must be null or valid for writes.
            #[no_mangle]
            pub unsafe extern "C" fn [<fnum_mul_ $suffix>](a: $t, b: $t, err: *mut bool) -> $t {
                arith::[<mul_ $suffix>](a, b, unsafe { sink(err) })
            }

            /// # Safety
            ///
            /// `err` must be null or valid for writes.
            #[no_mangle]
            pub unsafe extern "C" fn [<fnum_div_ $suffix>](a: $t, b: $t, err: *mut bool) -> $t {
                arith::[<div_ $suffix>](a, b, unsafe { sink(err) })
            }
        }
    };
}

ffi_float_ops!(f32, f, i32);
ffi_float_ops!(f64, d, i64);

#[cfg(all(test, not(feature = "non-ieee-float")))]
mod tests {
    use super::*;
    use std::ptr::null_mut;

    #[test]
    fn test_classification() {
        assert!(fnum_is_nan_d(f64::NAN));
        assert!(fnum_is_inf_f(f32::NEG_INFINITY));
        assert!(fnum_is_denormal_d(f64::MIN_POSITIVE / 2.0));
        assert!(!fnum_is_normal_f(0.0));
        assert!(fnum_sign_bit_d(-0.0));
    }

    #[test]
    fn test_special_values() {
        assert!(fnum_nan_f().is_nan());
        assert_eq!(fnum_inf_d(), f64::INFINITY);
    }

    #[test]
    fn test_inspection() {
        let mut err = false;
        unsafe {
            assert_eq!(fnum_ulp_f(1.0, &mut err), f32::EPSILON);
            assert_eq!(fnum_fexp_d(8.0, &mut err), 3);
            assert_eq!(fnum_mant_d(12.0, &mut err), 1.5);
            assert_eq!(fnum_to_ulp_f(0.0, &mut err), 0);
            assert!(fnum_approx_eq_d(1.0, 1.0 + f64::EPSILON, &mut err));
        }
        assert!(!err);

        unsafe {
            assert_eq!(fnum_fexp_f(f32::INFINITY, &mut err), 0);
        }
        assert!(err);
    }

    #[test]
    fn test_arithmetic() {
        let mut err = false;
        unsafe {
            assert_eq!(fnum_add_d(0.5, 0.25, &mut err), 0.75);
            assert!(!err);
            assert_eq!(fnum_mul_f(f32::MAX, 2.0, &mut err), f32::MAX);
            assert!(err);
            assert_eq!(fnum_div_d(1.0, 0.0, null_mut()), 0.0);
        }
    }
}
