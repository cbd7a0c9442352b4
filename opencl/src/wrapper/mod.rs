//! # Opencl safe wrapper
//!
//! Platform and device handles, typed info values and the [`runtime::ClRuntime`]
//! query interface.
//!

pub mod info;
pub mod platform;
pub mod runtime;
