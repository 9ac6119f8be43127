// agl-shim/src/pixel_format.rs
//
//! Pixel format selection.
//!
//! No renderer exists, so no attribute list can ever be satisfied.

use crate::error::ErrorCode;
use crate::last_error;
use crate::library::note_call;
use crate::types::{self, AGLDevice, AGLPixelFormat, CGDirectDisplayID, GLboolean, GLint};
use crate::types::GL_FALSE;

use std::ptr;

/// Fails to choose a pixel format matching `attribs` on the given devices.
///
/// Returns null and records `BadContext`.
#[no_mangle]
pub extern "C" fn aglChoosePixelFormat(
    _gdevs: *const AGLDevice,
    _ndev: GLint,
    _attribs: *const GLint,
) -> AGLPixelFormat {
    note_call("aglChoosePixelFormat");
    last_error::fail(ErrorCode::BadContext, ptr::null_mut())
}

/// Fails to create a pixel format from `attribs`.
///
/// Returns null and records `BadContext`, like `aglChoosePixelFormat()`.
#[no_mangle]
pub extern "C" fn aglCreatePixelFormat(_attribs: *const GLint) -> AGLPixelFormat {
    note_call("aglCreatePixelFormat");
    last_error::fail(ErrorCode::BadContext, ptr::null_mut())
}

#[no_mangle]
pub extern "C" fn aglDestroyPixelFormat(_pix: AGLPixelFormat) {
    note_call("aglDestroyPixelFormat");
}

/// There is never a next pixel format.
#[no_mangle]
pub extern "C" fn aglNextPixelFormat(_pix: AGLPixelFormat) -> AGLPixelFormat {
    note_call("aglNextPixelFormat");
    ptr::null_mut()
}

/// Fails to describe `pix`, zeroing `value` and recording `BadPixelFormat`.
///
/// # Safety
///
/// `value` must be null or valid for a write.
#[no_mangle]
pub unsafe extern "C" fn aglDescribePixelFormat(
    _pix: AGLPixelFormat,
    _attrib: GLint,
    value: *mut GLint,
) -> GLboolean {
    note_call("aglDescribePixelFormat");
    types::write_out(value, 0);
    last_error::fail(ErrorCode::BadPixelFormat, GL_FALSE)
}

/// Reports that `pix` supports no devices.
///
/// # Safety
///
/// `ndevs` must be null or valid for a write.
#[no_mangle]
pub unsafe extern "C" fn aglDevicesOfPixelFormat(
    _pix: AGLPixelFormat,
    ndevs: *mut GLint,
) -> *mut AGLDevice {
    note_call("aglDevicesOfPixelFormat");
    types::write_out(ndevs, 0);
    ptr::null_mut()
}

/// Reports that `pix` supports no displays.
///
/// # Safety
///
/// `ndisplays` must be null or valid for a write.
#[no_mangle]
pub unsafe extern "C" fn aglDisplaysOfPixelFormat(
    _pix: AGLPixelFormat,
    ndisplays: *mut GLint,
) -> *mut CGDirectDisplayID {
    note_call("aglDisplaysOfPixelFormat");
    types::write_out(ndisplays, 0);
    ptr::null_mut()
}
