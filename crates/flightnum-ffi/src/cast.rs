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

//! Integer conversions.
//!
//! ## Safety
//!
//! `err` may be null; otherwise it must be valid for writes of a `bool`.

use crate::sink;
use flightnum_core::num::ops::cast;

macro_rules! ffi_cast {
    ($dst:ident: $($src:ident)*) => {
        paste::paste! {$(
            #[doc = "Converts `" $src "` to `" $dst "`, saturating out-of-range values."]
            ///
            /// # Safety
            ///
            /// `err` must be null or valid for writes.
            #[no_mangle]
            pub unsafe extern "C" fn [<fnum_cast_ $dst _from_ $src>](v: $src, err: *mut bool) -> $dst {
                cast::[<cast_ $dst _from_ $src>](v, unsafe { sink(err) })
            }
        )*}
    };
}

ffi_cast!(i8: i16 i32 i64 u8 u16 u32 u64);
ffi_cast!(i16: i8 i32 i64 u8 u16 u32 u64);
ffi_cast!(i32: i8 i16 i64 u8 u16 u32 u64);
ffi_cast!(i64: i8 i16 i32 u8 u16 u32 u64);
ffi_cast!(u8: i8 i16 i32 i64 u16 u32 u64);
ffi_cast!(u16: i8 i16 i32 i64 u8 u32 u64);
ffi_cast!(u32: i8 i16 i32 i64 u8 u16 u64);
ffi_cast!(u64: i8 i16 i32 i64 u8 u16 u32);
