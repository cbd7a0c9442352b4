//! # Opencl runtime
//!
//! [`ClRuntime`] is the boundary between the query logic and the OpenCL
//! library: four operations mirroring clGetPlatformIDs, clGetDeviceIDs,
//! clGetPlatformInfo and clGetDeviceInfo. Strings and fixed-size values are
//! read on top of the raw info queries by the provided methods.
//!
//! [`OpenclRuntime`] is the implementation backed by the ICD loader.
//!

use crate::error::{OclError, OclResult, CL_WRAPPER_INFO_SIZE_MISMATCH};
use crate::unsafe_wrapper::{
    cl_get_device_ids, cl_get_device_info, cl_get_platform_ids, cl_get_platform_info,
};
use crate::wrapper::info::InfoValue;
use crate::wrapper::platform::{Device, Platform};
use opencl_sys::bindings::{cl_device_info, cl_device_type, cl_platform_info};
use std::mem;
use utilities::helper_functions::buf_u8_to_string;

pub trait ClRuntime {
    /// all available platforms
    fn platforms(&self) -> OclResult<Vec<Platform>>;

    /// devices of a platform matching `device_type` (CL_DEVICE_TYPE_* bitfield)
    fn devices(&self, platform: Platform, device_type: cl_device_type) -> OclResult<Vec<Device>>;

    /// Copies the value of `param_name` into `param_value` and returns its size in bytes.
    /// An empty `param_value` only queries the size.
    fn platform_info(
        &self,
        platform: Platform,
        param_name: cl_platform_info,
        param_value: &mut [u8],
    ) -> OclResult<usize>;

    /// Same contract as [`ClRuntime::platform_info`].
    fn device_info(
        &self,
        device: Device,
        param_name: cl_device_info,
        param_value: &mut [u8],
    ) -> OclResult<usize>;

    fn platform_info_string(
        &self,
        platform: Platform,
        param_name: cl_platform_info,
    ) -> OclResult<String> {
        read_info_string(|param_value| self.platform_info(platform, param_name, param_value))
    }

    fn device_info_string(&self, device: Device, param_name: cl_device_info) -> OclResult<String> {
        read_info_string(|param_value| self.device_info(device, param_name, param_value))
    }

    /// fetch exactly `size_of::<T>()` bytes
    fn device_info_value<T: InfoValue>(
        &self,
        device: Device,
        param_name: cl_device_info,
    ) -> OclResult<T> {
        let mut param_value = vec![0u8; mem::size_of::<T>()];
        let size = self.device_info(device, param_name, &mut param_value)?;

        if size != param_value.len() {
            return Err(OclError::Wrapper(CL_WRAPPER_INFO_SIZE_MISMATCH));
        }

        T::from_info_bytes(&param_value).ok_or(OclError::Wrapper(CL_WRAPPER_INFO_SIZE_MISMATCH))
    }
}

/// size query, then a query with a buffer of exactly that size
fn read_info_string<F>(mut query: F) -> OclResult<String>
where
    F: FnMut(&mut [u8]) -> OclResult<usize>,
{
    let size = query(&mut [])?;
    if size == 0 {
        return Ok(String::new());
    }

    let mut param_value = vec![0u8; size];
    let written = query(&mut param_value)?;

    Ok(buf_u8_to_string(&param_value[..written.min(size)]))
}

/// ClRuntime backed by the OpenCL ICD loader.
#[derive(Debug, Default, Clone, Copy)]
pub struct OpenclRuntime;

impl ClRuntime for OpenclRuntime {
    fn platforms(&self) -> OclResult<Vec<Platform>> {
        let platform_ids = cl_get_platform_ids()?;

        // SAFETY: every id was just returned by clGetPlatformIDs.
        let platforms = platform_ids
            .into_iter()
            .map(|platform_id| unsafe { Platform::from_cl_platform_id(platform_id) })
            .collect();

        Ok(platforms)
    }

    fn devices(&self, platform: Platform, device_type: cl_device_type) -> OclResult<Vec<Device>> {
        // SAFETY: a Platform handed to this runtime holds an id returned by
        // clGetPlatformIDs (Platform::from_cl_platform_id contract).
        let device_ids = unsafe { cl_get_device_ids(platform.get_cl_platform_id(), device_type)? };

        // SAFETY: every id was just returned by clGetDeviceIDs.
        let devices = device_ids
            .into_iter()
            .map(|device_id| unsafe { Device::from_cl_device_id(device_id) })
            .collect();

        Ok(devices)
    }

    fn platform_info(
        &self,
        platform: Platform,
        param_name: cl_platform_info,
        param_value: &mut [u8],
    ) -> OclResult<usize> {
        // SAFETY: see devices, the buffer length is passed as param_value_size.
        unsafe { cl_get_platform_info(platform.get_cl_platform_id(), param_name, param_value) }
    }

    fn device_info(
        &self,
        device: Device,
        param_name: cl_device_info,
        param_value: &mut [u8],
    ) -> OclResult<usize> {
        // SAFETY: a Device handed to this runtime holds an id returned by
        // clGetDeviceIDs, the buffer length is passed as param_value_size.
        unsafe { cl_get_device_info(device.get_cl_device_id(), param_name, param_value) }
    }
}
