// agl-shim/src/drawable.rs
//
//! Attaching contexts to drawables: windows, views, full-screen and off-screen buffers, and
//! virtual screens.

use crate::error::ErrorCode;
use crate::last_error;
use crate::library::note_call;
use crate::types::{self, AGLContext, AGLDrawable, GLboolean, GLenum, GLint, HIViewRef};
use crate::types::{WindowRef, GL_FALSE};

use std::os::raw::c_void;
use std::ptr;

#[no_mangle]
pub extern "C" fn aglSetDrawable(_ctx: AGLContext, _draw: AGLDrawable) -> GLboolean {
    note_call("aglSetDrawable");
    last_error::fail(ErrorCode::BadContext, GL_FALSE)
}

/// No context has a drawable. Leaves the error cell alone.
#[no_mangle]
pub extern "C" fn aglGetDrawable(_ctx: AGLContext) -> AGLDrawable {
    note_call("aglGetDrawable");
    ptr::null_mut()
}

/// Fails to switch to full-screen mode, recording `BadFullScreen`.
#[no_mangle]
pub extern "C" fn aglSetFullScreen(
    _ctx: AGLContext,
    _width: GLint,
    _height: GLint,
    _freq: GLint,
    _device: GLint,
) -> GLboolean {
    note_call("aglSetFullScreen");
    last_error::fail(ErrorCode::BadFullScreen, GL_FALSE)
}

/// Fails to attach the caller's pixel memory as an off-screen drawable, recording `BadOffScreen`.
///
/// `baseaddr` is never read or written.
#[no_mangle]
pub extern "C" fn aglSetOffScreen(
    _ctx: AGLContext,
    _width: GLint,
    _height: GLint,
    _rowbytes: GLint,
    _baseaddr: *mut c_void,
) -> GLboolean {
    note_call("aglSetOffScreen");
    last_error::fail(ErrorCode::BadOffScreen, GL_FALSE)
}

/// Reports an empty off-screen drawable, recording `BadContext`.
///
/// # Safety
///
/// Each out-parameter must be null or valid for a write.
#[no_mangle]
pub unsafe extern "C" fn aglGetOffScreen(
    _ctx: AGLContext,
    width: *mut GLint,
    height: *mut GLint,
    rowbytes: *mut GLint,
    baseaddr: *mut *mut c_void,
) -> GLboolean {
    note_call("aglGetOffScreen");
    types::write_out(width, 0);
    types::write_out(height, 0);
    types::write_out(rowbytes, 0);
    types::write_out(baseaddr, ptr::null_mut());
    last_error::fail(ErrorCode::BadContext, GL_FALSE)
}

#[no_mangle]
pub extern "C" fn aglSetVirtualScreen(_ctx: AGLContext, _screen: GLint) -> GLboolean {
    note_call("aglSetVirtualScreen");
    last_error::fail(ErrorCode::BadContext, GL_FALSE)
}

/// Always virtual screen 0. Leaves the error cell alone.
#[no_mangle]
pub extern "C" fn aglGetVirtualScreen(_ctx: AGLContext) -> GLint {
    note_call("aglGetVirtualScreen");
    0
}

#[no_mangle]
pub extern "C" fn aglSetWindowRef(_ctx: AGLContext, _window: WindowRef) -> GLboolean {
    note_call("aglSetWindowRef");
    last_error::fail(ErrorCode::BadContext, GL_FALSE)
}

#[no_mangle]
pub extern "C" fn aglGetWindowRef(_ctx: AGLContext) -> WindowRef {
    note_call("aglGetWindowRef");
    ptr::null_mut()
}

#[no_mangle]
pub extern "C" fn aglSetHIViewRef(_ctx: AGLContext, _hiview: HIViewRef) -> GLboolean {
    note_call("aglSetHIViewRef");
    last_error::fail(ErrorCode::BadContext, GL_FALSE)
}

#[no_mangle]
pub extern "C" fn aglGetHIViewRef(_ctx: AGLContext) -> HIViewRef {
    note_call("aglGetHIViewRef");
    ptr::null_mut()
}

/// Fails to bind the drawable of `surface_ctx` as a texture. AGL gives this no return value, so
/// the failure is only visible through `aglGetError()` as `BadContext`.
#[no_mangle]
pub extern "C" fn aglSurfaceTexture(
    _ctx: AGLContext,
    _target: GLenum,
    _internalformat: GLenum,
    _surface_ctx: AGLContext,
) {
    note_call("aglSurfaceTexture");
    last_error::set(ErrorCode::BadContext);
}
