// agl-shim/src/renderer.rs
//
//! Renderer information queries.

use crate::error::ErrorCode;
use crate::last_error;
use crate::library::note_call;
use crate::types::{self, AGLDevice, AGLRendererInfo, CGDirectDisplayID, GLboolean, GLint};
use crate::types::GL_FALSE;

use std::ptr;

/// Fails to enumerate the renderers of the given devices, recording `BadContext`.
#[no_mangle]
pub extern "C" fn aglQueryRendererInfo(_gdevs: *const AGLDevice, _ndev: GLint) -> AGLRendererInfo {
    note_call("aglQueryRendererInfo");
    last_error::fail(ErrorCode::BadContext, ptr::null_mut())
}

/// Fails to enumerate the renderers of the given displays, recording `BadContext`.
#[no_mangle]
pub extern "C" fn aglQueryRendererInfoForCGDirectDisplayIDs(
    _dsp_ids: *const CGDirectDisplayID,
    _ndev: GLint,
) -> AGLRendererInfo {
    note_call("aglQueryRendererInfoForCGDirectDisplayIDs");
    last_error::fail(ErrorCode::BadContext, ptr::null_mut())
}

#[no_mangle]
pub extern "C" fn aglDestroyRendererInfo(_rend: AGLRendererInfo) {
    note_call("aglDestroyRendererInfo");
}

#[no_mangle]
pub extern "C" fn aglNextRendererInfo(_rend: AGLRendererInfo) -> AGLRendererInfo {
    note_call("aglNextRendererInfo");
    ptr::null_mut()
}

/// Fails to read the renderer property `prop`, zeroing `value` and recording `BadRendererInfo`.
///
/// # Safety
///
/// `value` must be null or valid for a write.
#[no_mangle]
pub unsafe extern "C" fn aglDescribeRenderer(
    _rend: AGLRendererInfo,
    _prop: GLint,
    value: *mut GLint,
) -> GLboolean {
    note_call("aglDescribeRenderer");
    types::write_out(value, 0);
    last_error::fail(ErrorCode::BadRendererInfo, GL_FALSE)
}
