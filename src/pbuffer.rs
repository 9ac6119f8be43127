// agl-shim/src/pbuffer.rs
//
//! Pixel buffers.

use crate::error::ErrorCode;
use crate::last_error;
use crate::library::note_call;
use crate::types::{self, AGLContext, AGLPbuffer, GLboolean, GLenum, GLint, GL_FALSE};

use libc::c_long;
use std::ptr;

/// Fails to allocate a pixel buffer, storing null through `pbuffer` and recording `BadAlloc`.
///
/// # Safety
///
/// `pbuffer` must be null or valid for a write.
#[no_mangle]
pub unsafe extern "C" fn aglCreatePBuffer(
    _width: GLint,
    _height: GLint,
    _target: GLenum,
    _internal_format: GLenum,
    _max_level: c_long,
    pbuffer: *mut AGLPbuffer,
) -> GLboolean {
    note_call("aglCreatePBuffer");
    types::write_out(pbuffer, ptr::null_mut());
    last_error::fail(ErrorCode::BadAlloc, GL_FALSE)
}

#[no_mangle]
pub extern "C" fn aglDestroyPBuffer(_pbuffer: AGLPbuffer) -> GLboolean {
    note_call("aglDestroyPBuffer");
    GL_FALSE
}

/// Describes an empty pixel buffer, recording `BadContext`.
///
/// # Safety
///
/// Each out-parameter must be null or valid for a write.
#[no_mangle]
pub unsafe extern "C" fn aglDescribePBuffer(
    _pbuffer: AGLPbuffer,
    width: *mut GLint,
    height: *mut GLint,
    target: *mut GLenum,
    internal_format: *mut GLenum,
    max_level: *mut GLint,
) -> GLboolean {
    note_call("aglDescribePBuffer");
    types::write_out(width, 0);
    types::write_out(height, 0);
    types::write_out(target, 0);
    types::write_out(internal_format, 0);
    types::write_out(max_level, 0);
    last_error::fail(ErrorCode::BadContext, GL_FALSE)
}

/// Fails to bind `pbuffer` as the source of the current texture.
#[no_mangle]
pub extern "C" fn aglTexImagePBuffer(
    _ctx: AGLContext,
    _pbuffer: AGLPbuffer,
    _source: GLint,
) -> GLboolean {
    note_call("aglTexImagePBuffer");
    last_error::fail(ErrorCode::BadContext, GL_FALSE)
}

/// Fails to make `pbuffer` the drawable of `ctx`.
#[no_mangle]
pub extern "C" fn aglSetPBuffer(
    _ctx: AGLContext,
    _pbuffer: AGLPbuffer,
    _face: GLint,
    _level: GLint,
    _screen: GLint,
) -> GLboolean {
    note_call("aglSetPBuffer");
    last_error::fail(ErrorCode::BadContext, GL_FALSE)
}

/// Reports that `ctx` has no pixel buffer attached, recording `BadContext`.
///
/// # Safety
///
/// Each out-parameter must be null or valid for a write.
#[no_mangle]
pub unsafe extern "C" fn aglGetPBuffer(
    _ctx: AGLContext,
    pbuffer: *mut AGLPbuffer,
    face: *mut GLint,
    level: *mut GLint,
    screen: *mut GLint,
) -> GLboolean {
    note_call("aglGetPBuffer");
    types::write_out(pbuffer, ptr::null_mut());
    types::write_out(face, 0);
    types::write_out(level, 0);
    types::write_out(screen, 0);
    last_error::fail(ErrorCode::BadContext, GL_FALSE)
}
