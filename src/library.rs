// agl-shim/src/library.rs
//
//! Library-wide entry points: error reporting, version, configuration and reset.

use crate::error::ErrorCode;
use crate::last_error;
use crate::types::{self, GLboolean, GLenum, GLint, GLubyte, GLuint, GL_FALSE};

use std::sync::Once;

static WARN_UNAVAILABLE: Once = Once::new();

/// Logs a call into one of the AGL entry points.
///
/// The first call in the process also warns that AGL is gone, since the host application probably
/// doesn't know yet.
pub(crate) fn note_call(symbol: &str) {
    WARN_UNAVAILABLE.call_once(|| {
        warn!(
            "agl: {}() called, but AGL is not available on this system; every AGL call will fail",
            symbol
        )
    });
    trace!("agl: {}()", symbol);
}

/// Returns the most recent AGL error and clears it.
#[no_mangle]
pub extern "C" fn aglGetError() -> GLenum {
    note_call("aglGetError");
    last_error::take().to_raw()
}

/// Returns a static, NUL-terminated description of `code`.
///
/// Values that aren't AGL error codes get "Unknown error". The result is never null.
#[no_mangle]
pub extern "C" fn aglErrorString(code: GLenum) -> *const GLubyte {
    note_call("aglErrorString");
    ErrorCode::describe_raw(code).as_ptr() as *const GLubyte
}

/// Reports the AGL version as 0.0, since there is no AGL implementation behind this library.
///
/// # Safety
///
/// `major` and `minor` must each be null or valid for a write.
#[no_mangle]
pub unsafe extern "C" fn aglGetVersion(major: *mut GLint, minor: *mut GLint) {
    note_call("aglGetVersion");
    types::write_out(major, 0);
    types::write_out(minor, 0);
}

/// Accepts and ignores a global option.
#[no_mangle]
pub extern "C" fn aglConfigure(_pname: GLenum, _param: GLuint) -> GLboolean {
    note_call("aglConfigure");
    GL_FALSE
}

/// Resets the library, which here just clears the last error.
#[no_mangle]
pub extern "C" fn aglResetLibrary() {
    note_call("aglResetLibrary");
    last_error::reset();
}
