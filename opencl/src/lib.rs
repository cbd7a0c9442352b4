//! # opencl
//!
//! Query OpenCL platforms and devices.
//!
//! https://registry.khronos.org/OpenCL/specs/3.0-unified/html/OpenCL_API.html
//!

pub mod error;

pub mod unsafe_wrapper;
pub mod wrapper;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// re-export
pub use opencl_sys;
pub use utilities;
