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

//! The build environment as a C struct.

use flightnum_core::env::{Endianness, Environment, FloatRepr, SignedRepr, ENVIRONMENT};

/// C view of [`Environment`]. Enumerations are encoded as small integers:
///
/// - `big_endian`: `0` little, `1` big.
/// - `signed_repr`: `0` two's-complement, `1` one's-complement,
///   `2` sign-magnitude.
/// - `ieee_float`: `1` if floats are IEEE-754.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FfiEnvironment {
    pub word_bits: u32,
    pub big_endian: u8,
    pub signed_repr: u8,
    pub ieee_float: u8,
}

impl From<Environment> for FfiEnvironment {
    fn from(env: Environment) -> Self {
        Self {
            word_bits: env.word_bits,
            big_endian: u8::from(env.endianness == Endianness::Big),
            signed_repr: match env.signed_repr {
                SignedRepr::TwosComplement => 0,
                SignedRepr::OnesComplement => 1,
                SignedRepr::SignMagnitude => 2,
            },
            ieee_float: u8::from(env.float_repr == FloatRepr::Ieee754),
        }
    }
}

/// Returns the environment facts the library was built with.
#[no_mangle]
pub extern "C" fn fnum_environment() -> FfiEnvironment {
    FfiEnvironment::from(ENVIRONMENT)
}
