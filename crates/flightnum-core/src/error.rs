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

//! # Error Signalling
//!
//! Every checked operation exists in two shapes:
//!
//! - `try_*` / `checked_*_val`: returns `Result<T, NumError<T>>`. The error
//!   carries the [`ErrorKind`] and the value the saturating form returns.
//! - suffix functions / `saturating_*_val`: return a plain `T` and report
//!   failure through an optional error sink (`Option<&mut bool>`).
//!
//! [`SaturateExt::saturate`] converts the first shape into the second. The sink
//! is written only on failure, at most once per call, and never cleared.

use thiserror::Error;

/// Reason a checked operation saturated or substituted a sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    #[error("result exceeds the maximum of the destination type")]
    Overflow,
    #[error("result is below the minimum of the destination type")]
    Underflow,
    #[error("division by zero")]
    DivisionByZero,
    #[error("negation of an unrepresentable minimum")]
    UnrepresentableNegation,
    #[error("negative shift count")]
    NegativeShift,
    #[error("set bits truncated by shift")]
    ShiftTruncation,
    #[error("invalid input")]
    InvalidInput,
    #[error("not a number")]
    NotANumber,
}

/// A failed checked operation together with its saturated fallback.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::error::{ErrorKind, NumError};
/// let e = NumError::new(ErrorKind::Overflow, 127i8);
/// assert_eq!(e.kind(), ErrorKind::Overflow);
/// assert_eq!(e.saturated(), 127);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("{kind} (saturated to {saturated:?})")]
pub struct NumError<T> {
    kind: ErrorKind,
    saturated: T,
}

impl<T> NumError<T> {
    #[inline(always)]
    pub const fn new(kind: ErrorKind, saturated: T) -> Self {
        Self { kind, saturated }
    }

    /// Returns why the operation failed.
    #[inline(always)]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the value the saturating form of the operation yields.
    #[inline(always)]
    pub fn saturated(self) -> T {
        self.saturated
    }

    /// Maps the saturated fallback, keeping the kind.
    #[inline(always)]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> NumError<U> {
        NumError::new(self.kind, f(self.saturated))
    }
}

/// Sets the error sink, if one was supplied.
#[inline(always)]
pub fn raise(sink: Option<&mut bool>) {
    if let Some(flag) = sink {
        *flag = true;
    }
}

/// Conversion from the `Result` shape to the two-channel saturating shape.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::error::{ErrorKind, NumError, SaturateExt};
/// let mut err = false;
/// let r: Result<u8, NumError<u8>> = Err(NumError::new(ErrorKind::DivisionByZero, 0));
/// assert_eq!(r.saturate(Some(&mut err)), 0);
/// assert!(err);
///
/// let ok: Result<u8, NumError<u8>> = Ok(7);
/// assert_eq!(ok.saturate(None), 7);
/// ```
pub trait SaturateExt<T> {
    /// Returns the value or the saturated fallback, raising `sink` on failure.
    fn saturate(self, sink: Option<&mut bool>) -> T;
}

impl<T> SaturateExt<T> for Result<T, NumError<T>> {
    #[inline(always)]
    fn saturate(self, sink: Option<&mut bool>) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                raise(sink);
                e.saturated
            }
        }
    }
}
