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

//! # Floating-Point Kernel
//!
//! IEEE-754 bit-pattern classification, special values, ULP inspection and
//! checked arithmetic for `f32` (suffix `_f`) and `f64` (suffix `_d`).
//!
//! ## Submodules
//!
//! - `bits`: the [`bits::IeeeFloat`] layout template (storage type and field
//!   masks).
//! - `classify`: `is_nan`, `is_inf`, `is_finite`, `is_normal`, `is_denormal`,
//!   `sign_bit` and [`classify::classify`].
//! - `value`: `nan`, `inf` and `ulp`.
//! - `inspect`: `fexp`, `mant`, `max_ulp`, `min_ulp`, `to_ulp` and tolerance
//!   equality.
//! - `arith`: checked `neg`, `abs`, `add`, `sub`, `mul` and `div`.
//!
//! ## Non-IEEE hosts
//!
//! With the `non-ieee-float` feature every classification predicate returns
//! `false` and `nan()`/`inf()` return the largest finite value.

pub mod arith;
pub mod bits;
pub mod classify;
pub mod inspect;
pub mod value;
