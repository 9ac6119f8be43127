// agl-shim/src/types.rs
//
//! The scalar and handle types of the AGL C API.
//!
//! Every AGL object is an opaque pointer. No object is ever created, so every handle this library
//! hands out is null.

use std::os::raw::c_void;
use std::ptr;

pub use crate::gl::types::{GLboolean, GLenum, GLint, GLubyte, GLuint};

/// The `GLboolean` every failing stub returns.
pub const GL_FALSE: GLboolean = crate::gl::FALSE;

/// A pixel format object.
pub type AGLPixelFormat = *mut c_void;
/// A rendering context.
pub type AGLContext = *mut c_void;
/// A QuickDraw graphics device (`GDHandle`).
pub type AGLDevice = *mut c_void;
/// A QuickDraw drawable (`CGrafPtr`).
pub type AGLDrawable = *mut c_void;
/// A renderer information object.
pub type AGLRendererInfo = *mut c_void;
/// A pixel buffer.
pub type AGLPbuffer = *mut c_void;

/// A Core Graphics display ID.
pub type CGDirectDisplayID = u32;
/// A Carbon window.
pub type WindowRef = *mut c_void;
/// A Carbon HIView.
pub type HIViewRef = *mut c_void;

#[cfg(macos)]
pub use cgl::{CGLContextObj, CGLPixelFormatObj};

/// A Core OpenGL context.
#[cfg(not(macos))]
pub type CGLContextObj = *mut c_void;
/// A Core OpenGL pixel format.
#[cfg(not(macos))]
pub type CGLPixelFormatObj = *mut c_void;

/// Stores `value` through a caller-supplied out-parameter, unless it is null.
///
/// # Safety
///
/// `slot` must be null or valid for a write of `T`.
#[inline]
pub(crate) unsafe fn write_out<T>(slot: *mut T, value: T) {
    if !slot.is_null() {
        ptr::write(slot, value);
    }
}

/// Zeroes the first `count` elements of a caller-supplied `GLint` array, unless it is null.
///
/// # Safety
///
/// `slots` must be null or valid for writes of `count` `GLint`s.
#[inline]
pub(crate) unsafe fn zero_out_ints(slots: *mut GLint, count: usize) {
    if !slots.is_null() {
        ptr::write_bytes(slots, 0, count);
    }
}
