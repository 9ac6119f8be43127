// agl-shim/src/option.rs
//
//! Per-context options: `aglEnable()`, `aglDisable()`, `aglIsEnabled()` and the integer
//! parameters behind `aglSetInteger()` and `aglGetInteger()`.

use crate::error::ErrorCode;
use crate::last_error;
use crate::library::note_call;
use crate::types::{self, AGLContext, GLboolean, GLenum, GLint, GL_FALSE};

/// Enable or set the swap rectangle. Four integers: x, y, width, height.
pub const AGL_SWAP_RECT: GLenum = 200;
/// Enable or set the buffer rectangle. Four integers: x, y, width, height.
pub const AGL_BUFFER_RECT: GLenum = 202;
/// Enable or disable the swap async limit.
pub const AGL_SWAP_LIMIT: GLenum = 203;
/// Enable or disable colormap tracking.
pub const AGL_COLORMAP_TRACKING: GLenum = 210;
/// Set a colormap entry. Four integers: index, red, green, blue.
pub const AGL_COLORMAP_ENTRY: GLenum = 212;
/// Enable or disable all rasterization.
pub const AGL_RASTERIZATION: GLenum = 220;
/// Number of vertical retraces to wait between swaps. Zero disables syncing.
pub const AGL_SWAP_INTERVAL: GLenum = 222;
/// Validate state for multi-screen functionality.
pub const AGL_STATE_VALIDATION: GLenum = 230;
/// Buffer name shared between contexts.
pub const AGL_BUFFER_NAME: GLenum = 231;
/// Order the current context in front of all other contexts.
pub const AGL_ORDER_CONTEXT_TO_FRONT: GLenum = 232;
/// ID of the drawable surface for the context. Get only.
pub const AGL_CONTEXT_SURFACE_ID: GLenum = 233;
/// Display IDs of all displays touched by the context. Get only.
pub const AGL_CONTEXT_DISPLAY_ID: GLenum = 234;
/// Position of the surface relative to its window: 1 above, -1 below.
pub const AGL_SURFACE_ORDER: GLenum = 235;
/// Opacity of the surface: 1 opaque, 0 non-opaque.
pub const AGL_SURFACE_OPACITY: GLenum = 236;
/// Enable or set the drawable clipping region.
pub const AGL_CLIP_REGION: GLenum = 254;
/// Capture only a single display for full-screen mode.
pub const AGL_FS_CAPTURE_SINGLE: GLenum = 255;
/// Width and height of the surface backing store. Two integers.
pub const AGL_SURFACE_BACKING_SIZE: GLenum = 304;
/// Enable or disable the surface backing size override.
pub const AGL_ENABLE_SURFACE_BACKING_SIZE: GLenum = 305;
/// Flag the surface as a candidate for deletion.
pub const AGL_SURFACE_VOLATILE: GLenum = 306;

/// The number of `GLint`s `aglGetInteger()` writes for `pname`.
///
/// Options AGL doesn't document as multi-valued take one.
pub fn param_count(pname: GLenum) -> usize {
    match pname {
        AGL_SWAP_RECT | AGL_BUFFER_RECT | AGL_COLORMAP_ENTRY => 4,
        AGL_SURFACE_BACKING_SIZE => 2,
        _ => 1,
    }
}

#[no_mangle]
pub extern "C" fn aglEnable(_ctx: AGLContext, _pname: GLenum) -> GLboolean {
    note_call("aglEnable");
    last_error::fail(ErrorCode::BadContext, GL_FALSE)
}

#[no_mangle]
pub extern "C" fn aglDisable(_ctx: AGLContext, _pname: GLenum) -> GLboolean {
    note_call("aglDisable");
    last_error::fail(ErrorCode::BadContext, GL_FALSE)
}

/// Nothing is ever enabled. Leaves the error cell alone.
#[no_mangle]
pub extern "C" fn aglIsEnabled(_ctx: AGLContext, _pname: GLenum) -> GLboolean {
    note_call("aglIsEnabled");
    GL_FALSE
}

/// Fails to set `pname`. `params` is never read.
#[no_mangle]
pub extern "C" fn aglSetInteger(
    _ctx: AGLContext,
    _pname: GLenum,
    _params: *const GLint,
) -> GLboolean {
    note_call("aglSetInteger");
    last_error::fail(ErrorCode::BadContext, GL_FALSE)
}

/// Fails to read `pname`, zeroing as many `params` as the option defines and recording
/// `BadContext`.
///
/// # Safety
///
/// `params` must be null or valid for writes of `param_count(pname)` `GLint`s.
#[no_mangle]
pub unsafe extern "C" fn aglGetInteger(
    _ctx: AGLContext,
    pname: GLenum,
    params: *mut GLint,
) -> GLboolean {
    note_call("aglGetInteger");
    types::zero_out_ints(params, param_count(pname));
    last_error::fail(ErrorCode::BadContext, GL_FALSE)
}
