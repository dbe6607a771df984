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

//! # Flightnum FFI
//!
//! **C-compatible bindings for the flightnum numeric kernel.**
//!
//! Every saturating operation of `flightnum-core` is exported as
//! `fnum_<op>_<suffix>` with the C calling convention. Integer suffixes are
//! `i8 i16 i32 i64 u8 u16 u32 u64`; float suffixes are `f` (`float`) and `d`
//! (`double`).
//!
//! ## Error flag
//!
//! Fallible functions take a trailing `bool *err`. It may be `NULL`. On
//! failure the function writes `true` through it; it never writes `false`, so
//! one flag can collect the failures of a whole computation.
//!
//! ## Buffers
//!
//! Aggregate functions take a `(const T *ptr, int32_t n)` pair. A null
//! pointer, a negative length or a range that wraps the address space is
//! reported through `err` rather than dereferenced. Unlike handle-based
//! bindings, nothing here panics on caller input.
//!
//! ## Modules
//!
//! - `int`: integer arithmetic, shifts and `can_*` predicates.
//! - `cast`: conversions between every pair of integer types.
//! - `float`: classification, special values, ULP inspection and checked
//!   float arithmetic.
//! - `cmp`: mixed integer/float comparison.
//! - `imath`: powers, roots, logarithms, divisors, factorials and sign
//!   transfer.
//! - `aggregate`: sums, products, extremes, clamping and alignment.
//! - `env`: the build environment as a C struct.

pub mod aggregate;
pub mod cast;
pub mod cmp;
pub mod env;
pub mod float;
pub mod imath;
pub mod int;

/// Borrows the caller's error flag.
///
/// # Safety
///
/// `err` must be null or valid for writes of a `bool`.
#[inline(always)]
pub(crate) unsafe fn sink<'a>(err: *mut bool) -> Option<&'a mut bool> {
    unsafe { err.as_mut() }
}
