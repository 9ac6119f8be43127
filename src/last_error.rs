// agl-shim/src/last_error.rs
//
//! The process-wide last-error cell behind `aglGetError()`.
//!
//! AGL keeps a single error value for the whole process. Stubs that model a failure overwrite it,
//! `aglGetError()` reads it and puts it back to `NoError`, and `aglResetLibrary()` clears it.
//!
//! The cell is atomic, so every store and every read-and-clear is indivisible, but nothing orders
//! calls made from different threads. A thread may see a code another thread recorded. Since every
//! call fails anyway, any code it sees still means "the last calls failed".

use crate::error::ErrorCode;
use crate::types::GLenum;

use std::sync::atomic::{AtomicU32, Ordering};

static LAST_ERROR: AtomicU32 = AtomicU32::new(ErrorCode::NoError as GLenum);

/// Records `code` as the most recent error.
#[inline]
pub fn set(code: ErrorCode) {
    LAST_ERROR.store(code.to_raw(), Ordering::Relaxed);
}

/// Returns the most recent error and resets the cell to `NoError`.
#[inline]
pub fn take() -> ErrorCode {
    from_cell(LAST_ERROR.swap(ErrorCode::NoError.to_raw(), Ordering::Relaxed))
}

/// Returns the most recent error without clearing it.
#[inline]
pub fn peek() -> ErrorCode {
    from_cell(LAST_ERROR.load(Ordering::Relaxed))
}

/// Resets the cell to `NoError`.
#[inline]
pub fn reset() {
    set(ErrorCode::NoError);
}

/// Records `code` and hands back `sentinel`, the value the failing stub returns.
#[inline]
pub(crate) fn fail<T>(code: ErrorCode, sentinel: T) -> T {
    set(code);
    sentinel
}

// Only `set` writes the cell, and it only stores values of `ErrorCode`.
fn from_cell(raw: GLenum) -> ErrorCode {
    ErrorCode::from_raw(raw).unwrap_or_default()
}
