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

//! # Environment Facts
//!
//! Compile-time description of the host the kernel is built for: machine word
//! width, byte order, signed-integer representation and float representation.
//!
//! Word width and byte order come from the target configuration (see the
//! crate's `build.rs`); the signed and float representations are selected with
//! the `ones-complement`, `sign-magnitude` and `non-ieee-float` features.
//! Missing facts fall back to 32-bit, little-endian, two's-complement, IEEE-754.
//!
//! The signed representation is additionally available at the type level via
//! the [`SignRepr`] marker types, so the arithmetic kernel can be monomorphised
//! over a representation and dead arms fold away at compile time.

/// Byte order of the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    Little,
    Big,
}

/// Encoding of negative integers on the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignedRepr {
    /// `|MIN| = MAX + 1`; negating `MIN` is not representable.
    TwosComplement,
    /// Symmetric range `[-MAX, MAX]`, distinct negative zero.
    OnesComplement,
    /// Symmetric range `[-MAX, MAX]`, sign bit plus magnitude.
    SignMagnitude,
}

/// Encoding of floating-point values on the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatRepr {
    Ieee754,
    Other,
}

/// The complete set of environment facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Environment {
    pub word_bits: u32,
    pub endianness: Endianness,
    pub signed_repr: SignedRepr,
    pub float_repr: FloatRepr,
}

mod sign_repr {
    pub trait Sealed {}
}

/// Type-level signed representation.
///
/// This trait is sealed; it is implemented by [`TwosComplement`],
/// [`OnesComplement`] and [`SignMagnitude`] only.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::env::{OnesComplement, SignRepr, SignedRepr};
/// assert_eq!(OnesComplement::KIND, SignedRepr::OnesComplement);
/// ```
pub trait SignRepr:
    sign_repr::Sealed + Copy + Default + std::fmt::Debug + Send + Sync + 'static
{
    /// The representation this marker stands for.
    const KIND: SignedRepr;
}

/// Marker for two's-complement hosts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TwosComplement;

/// Marker for one's-complement hosts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OnesComplement;

/// Marker for sign-magnitude hosts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SignMagnitude;

macro_rules! impl_sign_repr {
    ($t:ty, $kind:expr) => {
        impl sign_repr::Sealed for $t {}
        impl SignRepr for $t {
            const KIND: SignedRepr = $kind;
        }
    };
}

impl_sign_repr!(TwosComplement, SignedRepr::TwosComplement);
impl_sign_repr!(OnesComplement, SignedRepr::OnesComplement);
impl_sign_repr!(SignMagnitude, SignedRepr::SignMagnitude);

/// The representation marker of the build host.
#[cfg(feature = "ones-complement")]
pub type HostRepr = OnesComplement;

/// The representation marker of the build host.
#[cfg(all(feature = "sign-magnitude", not(feature = "ones-complement")))]
pub type HostRepr = SignMagnitude;

/// The representation marker of the build host.
#[cfg(not(any(feature = "ones-complement", feature = "sign-magnitude")))]
pub type HostRepr = TwosComplement;

/// Machine word width in bits.
pub const WORD_BITS: u32 = if cfg!(flightnum_word_bits = "16") {
    16
} else if cfg!(flightnum_word_bits = "64") {
    64
} else {
    32
};

/// Host byte order.
pub const ENDIANNESS: Endianness = if cfg!(flightnum_big_endian) {
    Endianness::Big
} else {
    Endianness::Little
};

/// Host signed-integer representation.
pub const SIGNED_REPR: SignedRepr = HostRepr::KIND;

/// Host float representation.
pub const FLOAT_REPR: FloatRepr = if cfg!(feature = "non-ieee-float") {
    FloatRepr::Other
} else {
    FloatRepr::Ieee754
};

/// All environment facts in one record.
pub const ENVIRONMENT: Environment = Environment {
    word_bits: WORD_BITS,
    endianness: ENDIANNESS,
    signed_repr: SIGNED_REPR,
    float_repr: FLOAT_REPR,
};

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Environment(word_bits: {}, endianness: {:?}, signed_repr: {:?}, float_repr: {:?})",
            self.word_bits, self.endianness, self.signed_repr, self.float_repr
        )
    }
}
