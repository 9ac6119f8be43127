// agl-shim/build.rs
//
//! The `agl-shim` build script.

use cfg_aliases::cfg_aliases;
use gl_generator::{Api, Fallbacks, Profile, Registry, StructGenerator};
use std::env;
use std::fs::File;
use std::path::PathBuf;

// Where legacy binaries expect to find the framework binary.
const AGL_INSTALL_NAME: &str = "/System/Library/Frameworks/AGL.framework/Versions/A/AGL";
const AGL_DYLIB_VERSION: &str = "1.0.0";

fn main() {
    // Setup aliases for #[cfg] checks
    cfg_aliases! {
        // Platforms
        macos: { target_os = "macos" },
    }

    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap();
    let dest = PathBuf::from(&env::var("OUT_DIR").unwrap());

    // Give the dylib the identity of the framework it replaces so the dynamic linker accepts it
    // in place of `AGL.framework`.
    if target_os == "macos" && env::var_os("CARGO_FEATURE_FRAMEWORK_INSTALL_NAME").is_some() {
        println!("cargo:rustc-cdylib-link-arg=-Wl,-install_name,{}", AGL_INSTALL_NAME);
        println!(
            "cargo:rustc-cdylib-link-arg=-Wl,-compatibility_version,{}",
            AGL_DYLIB_VERSION
        );
        println!("cargo:rustc-cdylib-link-arg=-Wl,-current_version,{}", AGL_DYLIB_VERSION);
    }

    // Generate GL bindings. AGL predates core profiles, so take the 2.1 compatibility types.
    let mut file = File::create(&dest.join("gl_bindings.rs")).unwrap();
    let registry = Registry::new(Api::Gl, (2, 1), Profile::Compatibility, Fallbacks::All, []);
    registry.write_bindings(StructGenerator, &mut file).unwrap();
}
