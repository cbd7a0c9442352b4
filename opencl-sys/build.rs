#[path = "src/library.rs"]
mod library;

use library::{library_in, Library};
use std::env;
use std::path::{Path, PathBuf};

const OPENCL_LIB_DIR: &str = "OPENCL_LIB_DIR";

const DEFAULT_SEARCH_DIRS: &[&str] = &[
    "/usr/lib/x86_64-linux-gnu",
    "/usr/lib/aarch64-linux-gnu",
    "/usr/lib64",
    "/usr/lib",
    "/usr/local/lib",
    "/opt/rocm/lib",
    "/usr/local/cuda/lib64",
];

fn find_library() -> Option<Library> {
    if let Some(dir) = env::var_os(OPENCL_LIB_DIR).map(PathBuf::from) {
        if let Some(library) = library_in(&dir) {
            return Some(library);
        }
        println!(
            "cargo:warning={OPENCL_LIB_DIR}={} does not contain the OpenCL ICD loader",
            dir.display()
        );
    }

    DEFAULT_SEARCH_DIRS
        .iter()
        .find_map(|dir| library_in(Path::new(dir)))
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/library.rs");
    println!("cargo:rerun-if-env-changed={OPENCL_LIB_DIR}");
    println!("cargo:rustc-check-cfg=cfg(opencl_linked)");

    // macOS always ships the framework
    if env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("macos") {
        println!("cargo:rustc-link-lib=framework=OpenCL");
        println!("cargo:rustc-cfg=opencl_linked");
        return;
    }

    match find_library() {
        Some(library) => {
            // Tell cargo to look for shared libraries in the specified directory
            println!("cargo:rustc-link-search=native={}", library.dir.display());

            // Tell cargo to tell rustc to link the system shared library.
            println!("cargo:rustc-link-lib={}", library.link_lib_arg());
            println!("cargo:rustc-cfg=opencl_linked");
        }
        None => {
            println!(
                "cargo:warning=OpenCL ICD loader not found (set {OPENCL_LIB_DIR}), every platform query will report CL_PLATFORM_NOT_FOUND_KHR"
            );
        }
    }
}
