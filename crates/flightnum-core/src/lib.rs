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

//! # Flightnum Core
//!
//! Saturating, representation-aware numeric primitives for flight software.
//! Every fallible operation exists in two forms: a `try_*` function returning
//! `Result<T, NumError<T>>`, and a type-suffixed function (`add_i8`,
//! `cast_u16_from_i64`, `ulp_d`, ...) that always returns a usable value and
//! records failure in an optional, sticky `err` flag.
//!
//! ## Modules
//!
//! - `env`: Host description (word size, endianness, signed and float
//!   representation) resolved at build time, and the [`env::SignRepr`] marker
//!   types the integer kernel is generic over.
//! - `error`: [`error::ErrorKind`], [`error::NumError`] carrying the saturated
//!   fallback, and the [`error::SaturateExt`] bridge to the `err` flag.
//! - `num`: Exact-width integer traits, associated constants (`MinusOne`,
//!   `Zero`, `PlusOne`), the checked kernel, by-value checked and saturating
//!   arithmetic traits, casts across all integer pairs, and mixed
//!   integer/float comparison.
//! - `float`: IEEE-754 layout, classification, special values, ULP inspection
//!   and checked float arithmetic.
//! - `math`: Summation and product, `min`/`max`/`clamp`/`in_range`, and
//!   rounding to an alignment.
//! - `mem`: Validation of raw `(pointer, length)` buffers.
//!
//! ## Error flag
//!
//! The `err: Option<&mut bool>` sink is only ever set to `true`. A caller may
//! pass one flag through a whole sequence of operations and test it once at
//! the end.
//!
//! ```rust
//! use flightnum_core::num::ops::saturating_arithmetic::{add_i8, mul_u16};
//!
//! let mut err = false;
//! let a = add_i8(100, 20, Some(&mut err));
//! let b = mul_u16(300, 300, Some(&mut err));
//! assert_eq!((a, b), (120, u16::MAX));
//! assert!(err);
//! ```

pub mod env;
pub mod error;
pub mod float;
pub mod math;
pub mod mem;
pub mod num;
