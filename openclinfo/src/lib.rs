//! # openclinfo
//!
//! Lists every OpenCL platform and its devices with a fixed set of
//! attributes, as plain text.
//!

pub mod attribute;
pub mod config;
pub mod error;
pub mod report;
