// agl-shim/src/macros.rs
//
//! Internal macros.

/// Turns a string literal into a `&'static CStr`.
macro_rules! c_str {
    ($string:literal) => {
        // A literal with a NUL appended has exactly one NUL, at the end.
        unsafe { ::std::ffi::CStr::from_bytes_with_nul_unchecked(concat!($string, "\0").as_bytes()) }
    };
}
