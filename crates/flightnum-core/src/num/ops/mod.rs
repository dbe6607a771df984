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

//! # Checked Integer Operations
//!
//! ## Submodules
//!
//! - `kernel`: the operations, generic over the signed representation.
//! - `checked_arithmetic`: `checked_*_val` traits and `can_*` predicates on
//!   the host representation.
//! - `saturating_arithmetic`: sink-based `saturating_*_val` traits and the
//!   suffix-named functions (`add_i8`, `div_u32`, ...).
//! - `cast`: bound-checked conversions (`cast_<dst>_from_<src>`).

pub mod cast;
pub mod checked_arithmetic;
pub mod kernel;
pub mod saturating_arithmetic;
