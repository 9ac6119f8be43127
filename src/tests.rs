// agl-shim/src/tests.rs
//
//! Unit tests.
//!
//! Everything that touches the process-wide error cell runs under `#[serial]`.

use crate::context::*;
use crate::drawable::*;
use crate::error::UNKNOWN_ERROR;
use crate::interop::*;
use crate::library::*;
use crate::option::*;
use crate::pbuffer::*;
use crate::pixel_format::*;
use crate::renderer::*;
use crate::types::{AGLDevice, AGLPbuffer, CGDirectDisplayID, CGLContextObj, CGLPixelFormatObj};
use crate::types::{GLboolean, GLenum, GLint, GL_FALSE};
use crate::{last_error, ErrorCode};

use serial_test::serial;
use std::ffi::CStr;
use std::os::raw::c_void;
use std::ptr;

// Arbitrary garbage that out-parameters start with, so a missed write shows up.
const POISON: GLint = 0x5a5a_5a5a;

fn poisoned_ptr<T>() -> *mut T {
    0x1000 as *mut T
}

fn error_string(code: GLenum) -> &'static str {
    unsafe { CStr::from_ptr(aglErrorString(code) as *const _).to_str().unwrap() }
}

fn assert_error(expected: ErrorCode) {
    assert_eq!(aglGetError(), expected.to_raw());
}

#[test]
fn test_error_code_values() {
    assert_eq!(ErrorCode::ALL.len(), 19);
    assert_eq!(ErrorCode::NoError.to_raw(), 0);
    for (index, code) in ErrorCode::ALL[1..].iter().enumerate() {
        assert_eq!(code.to_raw(), 10000 + index as GLenum);
    }
    assert_eq!(ErrorCode::BadContext.to_raw(), 10004);
    assert_eq!(ErrorCode::BadAlloc.to_raw(), 10016);
    assert_eq!(ErrorCode::BadConnection.to_raw(), 10017);
}

#[test]
fn test_error_code_from_raw() {
    for &code in ErrorCode::ALL {
        assert_eq!(ErrorCode::from_raw(code.to_raw()), Some(code));
    }
    for &raw in &[1, 9999, 10018, 99999, 123456, GLenum::MAX] {
        assert_eq!(ErrorCode::from_raw(raw), None);
    }
}

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::BadContext.to_string(), "Bad context");
    assert_eq!(ErrorCode::BadGraphicsDevice.to_string(), "Bad graphics device");
    assert_eq!(ErrorCode::default(), ErrorCode::NoError);
    for &code in ErrorCode::ALL {
        assert_eq!(code.as_c_str().to_str().unwrap(), code.as_str());
        assert_eq!(format!("{}", code), code.as_str());
    }
    assert_eq!(format!("{}", ErrorCode::BadAlloc), "Bad alloc");
}

#[test]
fn test_error_string_covers_every_code() {
    let expected = [
        "No error",
        "Bad attribute",
        "Bad property",
        "Bad pixel format",
        "Bad renderer info",
        "Bad context",
        "Bad drawable",
        "Bad graphics device",
        "Bad state",
        "Bad value",
        "Bad match",
        "Bad enum",
        "Bad offscreen",
        "Bad fullscreen",
        "Bad window",
        "Bad pointer",
        "Bad module",
        "Bad alloc",
        "Bad connection",
    ];
    for (code, description) in ErrorCode::ALL.iter().zip(expected.iter()) {
        assert_eq!(error_string(code.to_raw()), *description);
    }
}

#[test]
fn test_error_string_unknown_codes() {
    assert_eq!(UNKNOWN_ERROR.to_str().unwrap(), "Unknown error");
    for &raw in &[1, 9999, 10018, 99999, 123456, -1i32 as GLenum] {
        assert!(!aglErrorString(raw).is_null());
        assert_eq!(error_string(raw), "Unknown error");
    }
    assert_eq!(error_string(ErrorCode::BadContext.to_raw()), "Bad context");
}

#[test]
#[serial]
fn test_get_error_reads_and_clears() {
    aglResetLibrary();
    assert_error(ErrorCode::NoError);

    last_error::set(ErrorCode::BadValue);
    assert_eq!(last_error::peek(), ErrorCode::BadValue);
    assert_error(ErrorCode::BadValue);
    assert_error(ErrorCode::NoError);
    assert_error(ErrorCode::NoError);
}

#[test]
#[serial]
fn test_last_error_keeps_most_recent_code() {
    aglResetLibrary();
    assert_eq!(aglSetFullScreen(ptr::null_mut(), 640, 480, 60, 0), GL_FALSE);
    assert!(aglCreatePixelFormat(ptr::null()).is_null());
    assert_error(ErrorCode::BadContext);
    assert_error(ErrorCode::NoError);
}

#[test]
#[serial]
fn test_reset_library_clears_error() {
    for &code in ErrorCode::ALL {
        last_error::set(code);
        aglResetLibrary();
        assert_error(ErrorCode::NoError);
    }
}

#[test]
#[serial]
fn test_create_context_scenario() {
    aglResetLibrary();
    let context = aglCreateContext(ptr::null_mut(), ptr::null_mut());
    assert!(context.is_null());
    assert_error(ErrorCode::BadContext);
    assert_error(ErrorCode::NoError);
}

#[test]
#[serial]
fn test_object_creation_fails() {
    aglResetLibrary();

    let attribs: [GLint; 3] = [4, 5, 0];
    assert!(aglChoosePixelFormat(ptr::null(), 0, attribs.as_ptr()).is_null());
    assert_error(ErrorCode::BadContext);

    assert!(aglCreatePixelFormat(attribs.as_ptr()).is_null());
    assert_error(ErrorCode::BadContext);

    assert!(aglQueryRendererInfo(ptr::null(), 0).is_null());
    assert_error(ErrorCode::BadContext);

    let displays: [CGDirectDisplayID; 1] = [1];
    assert!(aglQueryRendererInfoForCGDirectDisplayIDs(displays.as_ptr(), 1).is_null());
    assert_error(ErrorCode::BadContext);

    assert!(aglCreateContext(ptr::null_mut(), ptr::null_mut()).is_null());
    assert_error(ErrorCode::BadContext);

    let mut pbuffer: AGLPbuffer = poisoned_ptr();
    unsafe {
        assert_eq!(aglCreatePBuffer(64, 64, 0x0DE1, 0x1908, 0, &mut pbuffer), GL_FALSE);
    }
    assert!(pbuffer.is_null());
    assert_error(ErrorCode::BadAlloc);
}

#[test]
#[serial]
fn test_destruction() {
    aglResetLibrary();
    aglDestroyPixelFormat(ptr::null_mut());
    aglDestroyRendererInfo(ptr::null_mut());
    assert_eq!(aglDestroyPBuffer(ptr::null_mut()), GL_FALSE);
    assert_error(ErrorCode::NoError);

    assert_eq!(aglDestroyContext(ptr::null_mut()), GL_FALSE);
    assert_error(ErrorCode::BadContext);
}

fn assert_fails(name: &str, result: GLboolean, expected: ErrorCode) {
    assert_eq!(result, GL_FALSE, "{} should fail", name);
    assert_eq!(aglGetError(), expected.to_raw(), "{} recorded the wrong error", name);
}

#[test]
#[serial]
fn test_state_mutation_fails() {
    let null = ptr::null_mut();
    let params: [GLint; 4] = [0, 0, 100, 100];
    aglResetLibrary();

    assert_fails("aglCopyContext", aglCopyContext(null, null, !0), ErrorCode::BadContext);
    assert_fails("aglUpdateContext", aglUpdateContext(null), ErrorCode::BadContext);
    assert_fails("aglSetCurrentContext", aglSetCurrentContext(null), ErrorCode::BadContext);
    assert_fails("aglSetDrawable", aglSetDrawable(null, null), ErrorCode::BadContext);
    assert_fails(
        "aglSetFullScreen",
        aglSetFullScreen(null, 1024, 768, 60, 0),
        ErrorCode::BadFullScreen,
    );
    assert_fails(
        "aglSetOffScreen",
        aglSetOffScreen(null, 16, 16, 64, null),
        ErrorCode::BadOffScreen,
    );
    assert_fails("aglSetVirtualScreen", aglSetVirtualScreen(null, 1), ErrorCode::BadContext);
    assert_fails("aglSetWindowRef", aglSetWindowRef(null, null), ErrorCode::BadContext);
    assert_fails("aglSetHIViewRef", aglSetHIViewRef(null, null), ErrorCode::BadContext);
    assert_fails("aglEnable", aglEnable(null, AGL_SWAP_RECT), ErrorCode::BadContext);
    assert_fails("aglDisable", aglDisable(null, AGL_SWAP_RECT), ErrorCode::BadContext);
    assert_fails(
        "aglSetInteger",
        aglSetInteger(null, AGL_SWAP_RECT, params.as_ptr()),
        ErrorCode::BadContext,
    );
    assert_fails("aglUseFont", aglUseFont(null, 0, 0, 12, 32, 96, 1), ErrorCode::BadContext);
    assert_fails(
        "aglTexImagePBuffer",
        aglTexImagePBuffer(null, null, 0x0404),
        ErrorCode::BadContext,
    );
    assert_fails("aglSetPBuffer", aglSetPBuffer(null, null, 0, 0, 0), ErrorCode::BadContext);

    aglSurfaceTexture(null, 0x0DE1, 0x1908, null);
    assert_error(ErrorCode::BadContext);
}

#[test]
#[serial]
fn test_pure_queries_leave_error_alone() {
    let null = ptr::null_mut();
    last_error::set(ErrorCode::BadWindow);

    assert!(aglGetCurrentContext().is_null());
    assert!(aglGetDrawable(null).is_null());
    assert_eq!(aglGetVirtualScreen(null), 0);
    assert!(aglGetWindowRef(null).is_null());
    assert!(aglGetHIViewRef(null).is_null());
    assert_eq!(aglIsEnabled(null, AGL_SWAP_INTERVAL), GL_FALSE);
    assert!(aglNextPixelFormat(null).is_null());
    assert!(aglNextRendererInfo(null).is_null());
    assert_eq!(aglConfigure(0, 0), GL_FALSE);
    aglSwapBuffers(null);
    assert!(!aglErrorString(ErrorCode::BadWindow.to_raw()).is_null());

    assert_error(ErrorCode::BadWindow);
    assert_error(ErrorCode::NoError);
}

#[test]
#[serial]
fn test_describe_writes_out_params() {
    aglResetLibrary();

    let mut value = POISON;
    unsafe {
        assert_eq!(aglDescribePixelFormat(ptr::null_mut(), 8, &mut value), GL_FALSE);
    }
    assert_eq!(value, 0);
    assert_error(ErrorCode::BadPixelFormat);

    let mut value = POISON;
    unsafe {
        assert_eq!(aglDescribeRenderer(ptr::null_mut(), 1, &mut value), GL_FALSE);
    }
    assert_eq!(value, 0);
    assert_error(ErrorCode::BadRendererInfo);

    let mut ndevs = POISON;
    let devices: *mut AGLDevice = unsafe { aglDevicesOfPixelFormat(ptr::null_mut(), &mut ndevs) };
    assert!(devices.is_null());
    assert_eq!(ndevs, 0);

    let mut ndisplays = POISON;
    let displays = unsafe { aglDisplaysOfPixelFormat(ptr::null_mut(), &mut ndisplays) };
    assert!(displays.is_null());
    assert_eq!(ndisplays, 0);
    assert_error(ErrorCode::NoError);
}

#[test]
#[serial]
fn test_get_off_screen_writes_out_params() {
    aglResetLibrary();
    let (mut width, mut height, mut rowbytes) = (POISON, POISON, POISON);
    let mut baseaddr: *mut c_void = poisoned_ptr();
    unsafe {
        assert_eq!(
            aglGetOffScreen(ptr::null_mut(), &mut width, &mut height, &mut rowbytes, &mut baseaddr),
            GL_FALSE
        );
    }
    assert_eq!((width, height, rowbytes), (0, 0, 0));
    assert!(baseaddr.is_null());
    assert_error(ErrorCode::BadContext);
}

#[test]
#[serial]
fn test_pbuffer_queries_write_out_params() {
    aglResetLibrary();
    let (mut width, mut height, mut max_level) = (POISON, POISON, POISON);
    let (mut target, mut internal_format) = (POISON as GLenum, POISON as GLenum);
    unsafe {
        assert_eq!(
            aglDescribePBuffer(
                ptr::null_mut(),
                &mut width,
                &mut height,
                &mut target,
                &mut internal_format,
                &mut max_level,
            ),
            GL_FALSE
        );
    }
    assert_eq!((width, height, target, internal_format, max_level), (0, 0, 0, 0, 0));
    assert_error(ErrorCode::BadContext);

    let mut pbuffer: AGLPbuffer = poisoned_ptr();
    let (mut face, mut level, mut screen) = (POISON, POISON, POISON);
    unsafe {
        assert_eq!(
            aglGetPBuffer(ptr::null_mut(), &mut pbuffer, &mut face, &mut level, &mut screen),
            GL_FALSE
        );
    }
    assert!(pbuffer.is_null());
    assert_eq!((face, level, screen), (0, 0, 0));
    assert_error(ErrorCode::BadContext);
}

#[test]
#[serial]
fn test_get_integer_zeroes_option_width() {
    aglResetLibrary();

    let mut rect = [POISON; 5];
    unsafe {
        assert_eq!(aglGetInteger(ptr::null_mut(), AGL_SWAP_RECT, rect.as_mut_ptr()), GL_FALSE);
    }
    assert_eq!(rect, [0, 0, 0, 0, POISON]);
    assert_error(ErrorCode::BadContext);

    let mut size = [POISON; 3];
    unsafe {
        aglGetInteger(ptr::null_mut(), AGL_SURFACE_BACKING_SIZE, size.as_mut_ptr());
    }
    assert_eq!(size, [0, 0, POISON]);

    let mut interval = [POISON; 2];
    unsafe {
        aglGetInteger(ptr::null_mut(), AGL_SWAP_INTERVAL, interval.as_mut_ptr());
    }
    assert_eq!(interval, [0, POISON]);
    assert_error(ErrorCode::BadContext);
}

#[test]
fn test_param_count() {
    assert_eq!(param_count(AGL_SWAP_RECT), 4);
    assert_eq!(param_count(AGL_BUFFER_RECT), 4);
    assert_eq!(param_count(AGL_COLORMAP_ENTRY), 4);
    assert_eq!(param_count(AGL_SURFACE_BACKING_SIZE), 2);
    assert_eq!(param_count(AGL_SWAP_INTERVAL), 1);
    assert_eq!(param_count(AGL_SURFACE_OPACITY), 1);
    assert_eq!(param_count(0xFFFF), 1);
}

#[test]
#[serial]
fn test_cgl_interop_yields_null() {
    aglResetLibrary();

    let mut cgl_context: CGLContextObj = poisoned_ptr();
    unsafe {
        assert_eq!(aglGetCGLContext(ptr::null_mut(), &mut cgl_context), GL_FALSE);
    }
    assert!(cgl_context.is_null());
    assert_error(ErrorCode::BadContext);

    let mut cgl_pixel_format: CGLPixelFormatObj = poisoned_ptr();
    unsafe {
        assert_eq!(aglGetCGLPixelFormat(ptr::null_mut(), &mut cgl_pixel_format), GL_FALSE);
    }
    assert!(cgl_pixel_format.is_null());
    assert_error(ErrorCode::BadPixelFormat);
}

#[test]
fn test_get_version_reports_zero() {
    let (mut major, mut minor) = (POISON, POISON);
    unsafe {
        aglGetVersion(&mut major, &mut minor);
    }
    assert_eq!((major, minor), (0, 0));
}

// Every out-parameter may be null.
#[test]
#[serial]
fn test_null_out_params() {
    unsafe {
        aglGetVersion(ptr::null_mut(), ptr::null_mut());
        assert_eq!(aglDescribePixelFormat(ptr::null_mut(), 0, ptr::null_mut()), GL_FALSE);
        assert!(aglDevicesOfPixelFormat(ptr::null_mut(), ptr::null_mut()).is_null());
        assert!(aglDisplaysOfPixelFormat(ptr::null_mut(), ptr::null_mut()).is_null());
        assert_eq!(aglDescribeRenderer(ptr::null_mut(), 0, ptr::null_mut()), GL_FALSE);
        assert_eq!(
            aglGetOffScreen(
                ptr::null_mut(),
                ptr::null_mut(),
                ptr::null_mut(),
                ptr::null_mut(),
                ptr::null_mut(),
            ),
            GL_FALSE
        );
        assert_eq!(aglGetInteger(ptr::null_mut(), AGL_SWAP_RECT, ptr::null_mut()), GL_FALSE);
        assert_eq!(aglCreatePBuffer(0, 0, 0, 0, 0, ptr::null_mut()), GL_FALSE);
        assert_eq!(
            aglDescribePBuffer(
                ptr::null_mut(),
                ptr::null_mut(),
                ptr::null_mut(),
                ptr::null_mut(),
                ptr::null_mut(),
                ptr::null_mut(),
            ),
            GL_FALSE
        );
        assert_eq!(
            aglGetPBuffer(
                ptr::null_mut(),
                ptr::null_mut(),
                ptr::null_mut(),
                ptr::null_mut(),
                ptr::null_mut(),
            ),
            GL_FALSE
        );
        assert_eq!(aglGetCGLContext(ptr::null_mut(), ptr::null_mut()), GL_FALSE);
        assert_eq!(aglGetCGLPixelFormat(ptr::null_mut(), ptr::null_mut()), GL_FALSE);
    }
    aglResetLibrary();
}
