// agl-shim/src/lib.rs
//
//! A stand-in for Apple's AGL framework, which was removed from macOS.
//!
//! Legacy applications that link against `AGL.framework` crash at launch when the dynamic linker
//! can't resolve its symbols. This crate builds a library that exports every AGL entry point with
//! its original C signature. None of them do any work: each one returns the failure value the AGL
//! headers document (a null handle, `GL_FALSE`, or zero) and, where AGL would, records an error
//! code that `aglGetError()` later reports. Applications that check their return values take
//! their "OpenGL unavailable" paths instead of crashing.
//!
//! The only state is a single process-wide last-error cell; see the [`last_error`] module.

#![allow(non_snake_case)]

#[macro_use]
extern crate log;

#[macro_use]
mod macros;

pub mod error;
pub use crate::error::ErrorCode;

pub mod last_error;

pub mod types;
pub use crate::types::{AGLContext, AGLDevice, AGLDrawable, AGLPbuffer, AGLPixelFormat};
pub use crate::types::{AGLRendererInfo, GLboolean, GLenum, GLint, GLubyte, GLuint};

pub mod context;
pub mod drawable;
pub mod interop;
pub mod library;
pub mod option;
pub mod pbuffer;
pub mod pixel_format;
pub mod renderer;

#[allow(dead_code, clippy::all)]
mod gl {
    include!(concat!(env!("OUT_DIR"), "/gl_bindings.rs"));
}

#[cfg(test)]
mod tests;
