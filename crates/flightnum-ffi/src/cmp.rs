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

//! Mixed integer/float comparison.
//!
//! Operands are taken as `int64_t`, `uint64_t` or `double`; every narrower C
//! integer and `float` converts to one of them losslessly. Names follow
//! `fnum_cmp_<op>_<lhs>_<rhs>`.
//!
//! ## Safety
//!
//! `err` may be null; otherwise it must be valid for writes of a `bool`.

use crate::sink;
use flightnum_core::num::cmp;

macro_rules! ffi_cmp {
    ($a:ident, $b:ident; $($op:ident)*) => {
        paste::paste! {$(
            #[doc = "Exact `" $op "` of a `" $a "` and a `" $b "`. NaN raises `err`."]
            ///
            /// # Safety
            ///
            /// `err` must be null or valid for writes.
            #[no_mangle]
            pub unsafe extern "C" fn [<fnum_cmp_ $op _ $a _ $b>](a: $a, b: $b, err: *mut bool) -> bool {
                cmp::[<cmp_ $op>](a, b, unsafe { sink(err) })
            }
        )*}
    };
}

macro_rules! ffi_cmp_pairs {
    ($(($a:ident, $b:ident))*) => {$(
        ffi_cmp!($a, $b; eq ne lt gt le ge);
    )*};
}

ffi_cmp_pairs!(
    (i64, i64) (i64, u64) (i64, f64)
    (u64, i64) (u64, u64) (u64, f64)
    (f64, i64) (f64, u64) (f64, f64)
);
