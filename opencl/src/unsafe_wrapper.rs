//! # opencl unsafe wrapper
//! This is a small unsafe wrapper around OpenCL FFI bindings:
//!
//! * convert OpenCL C API functions into Rust functions that return a rust Result.
//! ```rust no_run
//! use opencl_sys::bindings::{clGetPlatformIDs, cl_uint};
//! use opencl::error::OclResult;
//! use opencl::unsafe_wrapper::cl_get_platform_ids_count;
//!
//! // from
//! let mut num_platforms: cl_uint = 0;
//! let ret = unsafe { clGetPlatformIDs(0, std::ptr::null_mut(), &mut num_platforms) };
//!
//! // to
//! let result: OclResult<cl_uint> = cl_get_platform_ids_count();
//! ```
//!
//! * shorten the call of certain OpenCL C API functions, performing the count query,
//!   the allocation and the data query within the same function.
//! ```rust no_run
//! use opencl_sys::bindings::{cl_device_id, cl_device_type, cl_platform_id, CL_DEVICE_TYPE_ALL};
//! use opencl::error::OclResult;
//! use opencl::unsafe_wrapper::{cl_get_device_ids, cl_get_platform_ids};
//!
//! // get all platforms
//! let platforms: Vec<cl_platform_id> = cl_get_platform_ids().unwrap();
//!
//! unsafe {
//!     let result_devices: OclResult<Vec<cl_device_id>> =
//!         cl_get_device_ids(platforms[0], CL_DEVICE_TYPE_ALL as cl_device_type);
//! }
//! ```

use crate::error::{cl_check, OclError, OclResult, CL_WRAPPER_ENUMERATION_UNSTABLE};
use opencl_sys::bindings::{
    clGetDeviceIDs, clGetDeviceInfo, clGetPlatformIDs, clGetPlatformInfo, cl_device_id,
    cl_device_info, cl_device_type, cl_platform_id, cl_platform_info, cl_uint,
};
use std::ffi::c_void;
use std::ptr;
use tracing::{debug, warn};

/// How many times an enumeration is repeated when the runtime reports more
/// entries on the data query than on the count query.
pub const MAX_ENUMERATION_ATTEMPTS: usize = 4;

/// param_value pointer for a clGet*Info call, null for a size query
fn param_value_ptr(param_value: &mut [u8]) -> *mut c_void {
    if param_value.is_empty() {
        ptr::null_mut()
    } else {
        param_value.as_mut_ptr() as *mut c_void
    }
}

/// ...
///
/// https://registry.khronos.org/OpenCL/specs/3.0-unified/html/OpenCL_API.html#_querying_platform_info
pub fn cl_get_platform_ids_count() -> OclResult<cl_uint> {
    let mut num_platforms = 0;

    let ret = unsafe { clGetPlatformIDs(0, ptr::null_mut(), &mut num_platforms) };
    debug!(ret, num_platforms, "clGetPlatformIDs (count)");
    cl_check(ret)?;

    Ok(num_platforms)
}

/// Count query, then a data query into a buffer of that many entries.
///
/// `count` returns the number of entries. `data` fills the buffer it is given
/// and returns the number of entries the runtime reported. A reported number
/// above the buffer length means the list grew in between: the pair of queries
/// is repeated, at most [`MAX_ENUMERATION_ATTEMPTS`] times.
fn enumerate<T, C, D>(null: T, mut count: C, mut data: D) -> OclResult<Vec<T>>
where
    T: Clone,
    C: FnMut() -> OclResult<cl_uint>,
    D: FnMut(&mut [T]) -> OclResult<cl_uint>,
{
    for _ in 0..MAX_ENUMERATION_ATTEMPTS {
        let num_entries = count()?;

        if num_entries == 0 {
            return Ok(vec![]);
        }

        let mut entries = vec![null.clone(); num_entries as usize];
        let num_reported = data(&mut entries)?;

        if num_reported > num_entries {
            warn!(
                num_entries,
                num_reported, "number of entries changed between queries, retrying"
            );
            continue;
        }

        entries.truncate(num_reported as usize);
        return Ok(entries);
    }

    Err(OclError::Wrapper(CL_WRAPPER_ENUMERATION_UNSTABLE))
}

/// All available platforms, the list is sized to the count reported by the runtime.
///
/// https://registry.khronos.org/OpenCL/specs/3.0-unified/html/OpenCL_API.html#_querying_platform_info
pub fn cl_get_platform_ids() -> OclResult<Vec<cl_platform_id>> {
    enumerate(ptr::null_mut(), cl_get_platform_ids_count, |platforms| {
        let num_entries = platforms.len() as cl_uint;
        let mut num_platforms = 0;

        let ret =
            unsafe { clGetPlatformIDs(num_entries, platforms.as_mut_ptr(), &mut num_platforms) };
        debug!(ret, num_entries, num_platforms, "clGetPlatformIDs");
        cl_check(ret)?;

        Ok(num_platforms)
    })
}

/// Bytes written (or required, when `param_value` is empty) by clGetPlatformInfo.
///
/// https://registry.khronos.org/OpenCL/specs/3.0-unified/html/OpenCL_API.html#_querying_platform_info
///
/// # Safety
///
/// `platform_id` must be a handle returned by clGetPlatformIDs.
pub unsafe fn cl_get_platform_info(
    platform_id: cl_platform_id,
    param_name: cl_platform_info,
    param_value: &mut [u8],
) -> OclResult<usize> {
    let mut param_value_size_ret = 0;

    let ret = clGetPlatformInfo(
        platform_id,
        param_name,
        param_value.len(),
        param_value_ptr(param_value),
        &mut param_value_size_ret,
    );
    debug!(
        ret,
        param_name,
        param_value_size = param_value.len(),
        param_value_size_ret,
        "clGetPlatformInfo"
    );
    cl_check(ret)?;

    Ok(param_value_size_ret)
}

/// ...
///
/// https://registry.khronos.org/OpenCL/specs/3.0-unified/html/OpenCL_API.html#platform-querying-devices
///
/// # Safety
///
/// `platform_id` must be a handle returned by clGetPlatformIDs.
pub unsafe fn cl_get_device_count(
    platform_id: cl_platform_id,
    device_type: cl_device_type,
) -> OclResult<cl_uint> {
    let mut num_devices = 0;

    let ret = clGetDeviceIDs(
        platform_id,
        device_type,
        0,
        ptr::null_mut(),
        &mut num_devices,
    );
    debug!(ret, device_type, num_devices, "clGetDeviceIDs (count)");
    cl_check(ret)?;

    Ok(num_devices)
}

/// All devices of `device_type` (a CL_DEVICE_TYPE_* bitfield) in a platform.
///
/// https://registry.khronos.org/OpenCL/specs/3.0-unified/html/OpenCL_API.html#platform-querying-devices
///
/// # Safety
///
/// `platform_id` must be a handle returned by clGetPlatformIDs.
pub unsafe fn cl_get_device_ids(
    platform_id: cl_platform_id,
    device_type: cl_device_type,
) -> OclResult<Vec<cl_device_id>> {
    enumerate(
        ptr::null_mut(),
        || cl_get_device_count(platform_id, device_type),
        |devices| {
            let num_entries = devices.len() as cl_uint;
            let mut num_devices = 0;

            let ret = clGetDeviceIDs(
                platform_id,
                device_type,
                num_entries,
                devices.as_mut_ptr(),
                &mut num_devices,
            );
            debug!(ret, device_type, num_entries, num_devices, "clGetDeviceIDs");
            cl_check(ret)?;

            Ok(num_devices)
        },
    )
}

/// Bytes written (or required, when `param_value` is empty) by clGetDeviceInfo.
///
/// https://registry.khronos.org/OpenCL/specs/3.0-unified/html/OpenCL_API.html#platform-querying-devices
///
/// # Safety
///
/// `device` must be a handle returned by clGetDeviceIDs.
pub unsafe fn cl_get_device_info(
    device: cl_device_id,
    param_name: cl_device_info,
    param_value: &mut [u8],
) -> OclResult<usize> {
    let mut param_value_size_ret = 0;

    let ret = clGetDeviceInfo(
        device,
        param_name,
        param_value.len(),
        param_value_ptr(param_value),
        &mut param_value_size_ret,
    );
    debug!(
        ret,
        param_name,
        param_value_size = param_value.len(),
        param_value_size_ret,
        "clGetDeviceInfo"
    );
    cl_check(ret)?;

    Ok(param_value_size_ret)
}
