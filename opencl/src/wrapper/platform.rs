//! # Opencl platform, devices handles
//!
//! Platform
//!
//! An installed OpenCL implementation (ICD), returned by clGetPlatformIDs.
//!
//! Devices
//!
//! A compute device exposed by a platform, returned by clGetDeviceIDs.
//!
//! Both are plain copies of the handle: the OpenCL runtime owns the
//! platform and device objects, nothing is retained or released here.
//!

use opencl_sys::bindings::{cl_device_id, cl_platform_id};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Platform {
    platform_id: cl_platform_id,
}

impl Platform {
    /// # Safety
    ///
    /// `platform_id` must come from clGetPlatformIDs, unless the handle is only
    /// ever passed to a [`ClRuntime`](crate::wrapper::runtime::ClRuntime) that
    /// does not call into OpenCL.
    pub unsafe fn from_cl_platform_id(platform_id: cl_platform_id) -> Self {
        Self { platform_id }
    }

    pub fn get_cl_platform_id(&self) -> cl_platform_id {
        self.platform_id
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Device {
    device_id: cl_device_id,
}

impl Device {
    /// # Safety
    ///
    /// `device_id` must come from clGetDeviceIDs, unless the handle is only
    /// ever passed to a [`ClRuntime`](crate::wrapper::runtime::ClRuntime) that
    /// does not call into OpenCL.
    pub unsafe fn from_cl_device_id(device_id: cl_device_id) -> Self {
        Self { device_id }
    }

    pub fn get_cl_device_id(&self) -> cl_device_id {
        self.device_id
    }
}
