// agl-shim/src/error.rs
//
//! The error codes AGL reports through `aglGetError()`.

use crate::types::GLenum;

use std::error::Error;
use std::ffi::CStr;
use std::fmt::{self, Display, Formatter};

/// The string `aglErrorString()` returns for a value that isn't an AGL error code.
pub const UNKNOWN_ERROR: &CStr = c_str!("Unknown error");

macro_rules! error_codes {
    ($($(#[$attr:meta])* $name:ident = $raw:literal => $description:literal,)*) => {
        /// Errors that AGL records in its last-error cell.
        ///
        /// The discriminants are the raw `GLenum` values from `agl.h`, so `code as GLenum` is what
        /// a C caller sees.
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        #[repr(u32)]
        pub enum ErrorCode {
            $($(#[$attr])* $name = $raw,)*
        }

        impl ErrorCode {
            /// Every error code, `NoError` first.
            pub const ALL: &'static [ErrorCode] = &[$(ErrorCode::$name,)*];

            /// Converts a raw AGL error value, returning `None` for values AGL doesn't define.
            pub fn from_raw(raw: GLenum) -> Option<ErrorCode> {
                match raw {
                    $($raw => Some(ErrorCode::$name),)*
                    _ => None,
                }
            }

            /// The human-readable description `aglErrorString()` returns for this code.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(ErrorCode::$name => $description,)*
                }
            }

            /// Like `as_str()`, but NUL-terminated so it can be handed to C.
            pub fn as_c_str(self) -> &'static CStr {
                match self {
                    $(ErrorCode::$name => c_str!($description),)*
                }
            }
        }
    };
}

error_codes! {
    /// No error has been recorded since the last query.
    #[default]
    NoError = 0 => "No error",
    /// Invalid pixel format attribute.
    BadAttribute = 10000 => "Bad attribute",
    /// Invalid renderer property.
    BadProperty = 10001 => "Bad property",
    /// Invalid pixel format.
    BadPixelFormat = 10002 => "Bad pixel format",
    /// Invalid renderer info.
    BadRendererInfo = 10003 => "Bad renderer info",
    /// Invalid context.
    BadContext = 10004 => "Bad context",
    /// Invalid drawable.
    BadDrawable = 10005 => "Bad drawable",
    /// Invalid graphics device.
    BadGraphicsDevice = 10006 => "Bad graphics device",
    /// Invalid context state.
    BadState = 10007 => "Bad state",
    /// Invalid numerical value.
    BadValue = 10008 => "Bad value",
    /// Invalid share context.
    BadMatch = 10009 => "Bad match",
    /// Invalid enumerant.
    BadEnum = 10010 => "Bad enum",
    /// Invalid off-screen drawable.
    BadOffScreen = 10011 => "Bad offscreen",
    /// Invalid full-screen drawable.
    BadFullScreen = 10012 => "Bad fullscreen",
    /// Invalid window.
    BadWindow = 10013 => "Bad window",
    /// Invalid pointer.
    BadPointer = 10014 => "Bad pointer",
    /// Invalid code module.
    BadModule = 10015 => "Bad module",
    /// Memory allocation failure.
    BadAlloc = 10016 => "Bad alloc",
    /// Invalid Core Graphics connection.
    BadConnection = 10017 => "Bad connection",
}

impl ErrorCode {
    /// The raw `GLenum` value of this code.
    #[inline]
    pub fn to_raw(self) -> GLenum {
        self as GLenum
    }

    /// The string `aglErrorString()` returns for an arbitrary raw value.
    pub fn describe_raw(raw: GLenum) -> &'static CStr {
        match ErrorCode::from_raw(raw) {
            Some(code) => code.as_c_str(),
            None => UNKNOWN_ERROR,
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl Error for ErrorCode {}
