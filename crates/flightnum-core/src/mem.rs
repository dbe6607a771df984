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

//! Raw buffer validation.
//!
//! The aggregate functions accept caller-provided `(pointer, length)` pairs at
//! the C boundary. [`buffer`] checks such a pair before it becomes a slice:
//! the pointer must be non-null and aligned, the length non-negative, and the
//! byte range must not wrap pointer-sized arithmetic.

use crate::error::ErrorKind;
use crate::num::types::{Size, UIntPtr};
use tracing::debug;

/// Validates `(ptr, n)` and borrows it as a slice of `n` elements.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidInput`] if `ptr` is null or misaligned, `n` is
/// negative, `n * size_of::<T>()` overflows or exceeds `isize::MAX`, or the
/// end address overflows [`UIntPtr`].
///
/// # Safety
///
/// If validation succeeds, `ptr` must point to `n` initialised values of `T`
/// that stay valid and unmodified for `'a`.
///
/// # Examples
///
/// ```rust
/// # use flightnum_core::mem::buffer;
/// let data = [1u16, 2, 3];
/// let view = unsafe { buffer(data.as_ptr(), 3) };
/// assert_eq!(view, Ok(&data[..]));
/// assert!(unsafe { buffer(std::ptr::null::<u16>(), 3) }.is_err());
/// ```
pub unsafe fn buffer<'a, T>(ptr: *const T, n: i32) -> Result<&'a [T], ErrorKind> {
    if ptr.is_null() {
        debug!("rejected null buffer");
        return Err(ErrorKind::InvalidInput);
    }
    if n < 0 {
        debug!(n, "rejected negative buffer length");
        return Err(ErrorKind::InvalidInput);
    }

    let start = ptr as UIntPtr;
    if start % std::mem::align_of::<T>() != 0 {
        debug!(start, align = std::mem::align_of::<T>(), "rejected misaligned buffer");
        return Err(ErrorKind::InvalidInput);
    }

    let len = n as Size;
    let bytes = match len.checked_mul(std::mem::size_of::<T>()) {
        Some(bytes) if bytes <= isize::MAX as Size => bytes,
        _ => {
            debug!(n, "rejected buffer size overflow");
            return Err(ErrorKind::InvalidInput);
        }
    };
    if start.checked_add(bytes).is_none() {
        debug!(start, bytes, "rejected buffer wrapping the address space");
        return Err(ErrorKind::InvalidInput);
    }

    // SAFETY: non-null, aligned, in-bounds of the address space; the caller
    // guarantees the memory is initialised and live for 'a.
    Ok(unsafe { std::slice::from_raw_parts(ptr, len) })
}
