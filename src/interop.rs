// agl-shim/src/interop.rs
//
//! Access to the Core OpenGL objects underneath AGL objects.
//!
//! Real AGL contexts wrap CGL contexts. These never do, so both accessors hand back null.

use crate::error::ErrorCode;
use crate::last_error;
use crate::library::note_call;
use crate::types::{self, AGLContext, AGLPixelFormat, CGLContextObj, CGLPixelFormatObj};
use crate::types::{GLboolean, GL_FALSE};

use std::ptr;

/// Stores null through `cgl_ctx` and records `BadContext`.
///
/// # Safety
///
/// `cgl_ctx` must be null or valid for a write.
#[no_mangle]
pub unsafe extern "C" fn aglGetCGLContext(
    _ctx: AGLContext,
    cgl_ctx: *mut CGLContextObj,
) -> GLboolean {
    note_call("aglGetCGLContext");
    types::write_out(cgl_ctx, ptr::null_mut());
    last_error::fail(ErrorCode::BadContext, GL_FALSE)
}

/// Stores null through `cgl_pix` and records `BadPixelFormat`.
///
/// # Safety
///
/// `cgl_pix` must be null or valid for a write.
#[no_mangle]
pub unsafe extern "C" fn aglGetCGLPixelFormat(
    _pix: AGLPixelFormat,
    cgl_pix: *mut CGLPixelFormatObj,
) -> GLboolean {
    note_call("aglGetCGLPixelFormat");
    types::write_out(cgl_pix, ptr::null_mut());
    last_error::fail(ErrorCode::BadPixelFormat, GL_FALSE)
}
