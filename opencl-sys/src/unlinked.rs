//! Entry points compiled when `build.rs` could not locate the ICD loader.
//!
//! They answer like a loader with no installed platform: every call returns
//! `CL_PLATFORM_NOT_FOUND_KHR` and zeroes the count outputs.

use crate::bindings::{
    cl_device_id, cl_device_info, cl_device_type, cl_int, cl_platform_id, cl_platform_info,
    cl_uint, CL_PLATFORM_NOT_FOUND_KHR,
};
use std::os::raw::c_void;

pub unsafe extern "C" fn clGetPlatformIDs(
    _num_entries: cl_uint,
    _platforms: *mut cl_platform_id,
    num_platforms: *mut cl_uint,
) -> cl_int {
    if !num_platforms.is_null() {
        *num_platforms = 0;
    }
    CL_PLATFORM_NOT_FOUND_KHR
}

pub unsafe extern "C" fn clGetPlatformInfo(
    _platform: cl_platform_id,
    _param_name: cl_platform_info,
    _param_value_size: usize,
    _param_value: *mut c_void,
    param_value_size_ret: *mut usize,
) -> cl_int {
    if !param_value_size_ret.is_null() {
        *param_value_size_ret = 0;
    }
    CL_PLATFORM_NOT_FOUND_KHR
}

pub unsafe extern "C" fn clGetDeviceIDs(
    _platform: cl_platform_id,
    _device_type: cl_device_type,
    _num_entries: cl_uint,
    _devices: *mut cl_device_id,
    num_devices: *mut cl_uint,
) -> cl_int {
    if !num_devices.is_null() {
        *num_devices = 0;
    }
    CL_PLATFORM_NOT_FOUND_KHR
}

pub unsafe extern "C" fn clGetDeviceInfo(
    _device: cl_device_id,
    _param_name: cl_device_info,
    _param_value_size: usize,
    _param_value: *mut c_void,
    param_value_size_ret: *mut usize,
) -> cl_int {
    if !param_value_size_ret.is_null() {
        *param_value_size_ret = 0;
    }
    CL_PLATFORM_NOT_FOUND_KHR
}
