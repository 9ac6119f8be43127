// agl-shim/src/context.rs
//
//! Rendering contexts.
//!
//! Context creation always fails, so every `AGLContext` a caller holds is null. Operations on a
//! context record `BadContext`; queries of the current context find none.

use crate::error::ErrorCode;
use crate::last_error;
use crate::library::note_call;
use crate::types::{AGLContext, AGLPixelFormat, GLboolean, GLint, GLuint, GL_FALSE};

use std::ptr;

/// Fails to create a context, returning null and recording `BadContext`.
#[no_mangle]
pub extern "C" fn aglCreateContext(_pix: AGLPixelFormat, _share: AGLContext) -> AGLContext {
    note_call("aglCreateContext");
    last_error::fail(ErrorCode::BadContext, ptr::null_mut())
}

#[no_mangle]
pub extern "C" fn aglDestroyContext(_ctx: AGLContext) -> GLboolean {
    note_call("aglDestroyContext");
    last_error::fail(ErrorCode::BadContext, GL_FALSE)
}

/// Fails to copy the state selected by `mask` from `src` to `dst`.
#[no_mangle]
pub extern "C" fn aglCopyContext(_src: AGLContext, _dst: AGLContext, _mask: GLuint) -> GLboolean {
    note_call("aglCopyContext");
    last_error::fail(ErrorCode::BadContext, GL_FALSE)
}

#[no_mangle]
pub extern "C" fn aglUpdateContext(_ctx: AGLContext) -> GLboolean {
    note_call("aglUpdateContext");
    last_error::fail(ErrorCode::BadContext, GL_FALSE)
}

#[no_mangle]
pub extern "C" fn aglSetCurrentContext(_ctx: AGLContext) -> GLboolean {
    note_call("aglSetCurrentContext");
    last_error::fail(ErrorCode::BadContext, GL_FALSE)
}

/// No context is ever current. Leaves the error cell alone.
#[no_mangle]
pub extern "C" fn aglGetCurrentContext() -> AGLContext {
    note_call("aglGetCurrentContext");
    ptr::null_mut()
}

/// Fails to build display lists for a bitmap font.
#[no_mangle]
pub extern "C" fn aglUseFont(
    _ctx: AGLContext,
    _font_id: GLint,
    _face: GLint,
    _size: GLint,
    _first: GLint,
    _count: GLint,
    _base: GLint,
) -> GLboolean {
    note_call("aglUseFont");
    last_error::fail(ErrorCode::BadContext, GL_FALSE)
}

#[no_mangle]
pub extern "C" fn aglSwapBuffers(_ctx: AGLContext) {
    note_call("aglSwapBuffers");
}
