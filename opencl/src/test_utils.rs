//! In-memory [`ClRuntime`] for tests.
//!
//! Info values are stored as the raw bytes OpenCL would return (strings NUL
//! terminated, scalars in host byte order) and are served with the same
//! rules as clGet*Info: an empty buffer queries the size, a buffer that is too
//! small fails with CL_INVALID_VALUE.
//!
//! ```rust
//! use opencl::test_utils::{FakeDevice, FakePlatform, FakeRuntime};
//! use opencl::wrapper::runtime::ClRuntime;
//!
//! let runtime = FakeRuntime::new()
//!     .with_platform(FakePlatform::new("AMD Accelerated Parallel Processing")
//!         .with_device(FakeDevice::gpu("gfx1032")));
//!
//! assert_eq!(runtime.platforms().unwrap().len(), 1);
//! ```

use crate::error::{OclError, OclResult};
use crate::wrapper::platform::{Device, Platform};
use crate::wrapper::runtime::ClRuntime;
use opencl_sys::bindings::{
    cl_bool, cl_device_id, cl_device_info, cl_device_mem_cache_type, cl_device_type, cl_int,
    cl_platform_id, cl_platform_info, cl_uint, cl_ulong, CL_DEVICE_BUILT_IN_KERNELS,
    CL_DEVICE_COMPILER_AVAILABLE, CL_DEVICE_ENDIAN_LITTLE, CL_DEVICE_EXTENSIONS,
    CL_DEVICE_GLOBAL_MEM_CACHE_SIZE, CL_DEVICE_GLOBAL_MEM_CACHE_TYPE, CL_DEVICE_IMAGE_SUPPORT,
    CL_DEVICE_NAME, CL_DEVICE_NOT_FOUND, CL_DEVICE_OPENCL_C_VERSION, CL_DEVICE_PROFILE,
    CL_DEVICE_TYPE, CL_DEVICE_TYPE_CPU, CL_DEVICE_TYPE_DEFAULT, CL_DEVICE_TYPE_GPU,
    CL_DEVICE_VENDOR, CL_DEVICE_VERSION, CL_DRIVER_VERSION, CL_INVALID_DEVICE,
    CL_INVALID_PLATFORM, CL_INVALID_VALUE, CL_PLATFORM_EXTENSIONS, CL_PLATFORM_NAME,
    CL_PLATFORM_PROFILE, CL_PLATFORM_VENDOR, CL_PLATFORM_VERSION, CL_READ_WRITE_CACHE, CL_TRUE,
};
use std::cell::Cell;
use std::collections::HashMap;

/// device handles carry the platform index in the high bits
const DEVICE_INDEX_BITS: usize = 16;

type InfoMap = HashMap<cl_uint, Result<Vec<u8>, cl_int>>;

fn string_value(value: &str) -> Vec<u8> {
    let mut bytes = value.as_bytes().to_vec();
    bytes.push(0);
    bytes
}

fn read_info(info: &InfoMap, param_name: cl_uint, param_value: &mut [u8]) -> OclResult<usize> {
    let value = match info.get(&param_name) {
        Some(Ok(value)) => value,
        Some(Err(code)) => return Err(OclError::Code(*code)),
        None => return Err(OclError::Code(CL_INVALID_VALUE)),
    };

    if param_value.is_empty() {
        return Ok(value.len());
    }

    if param_value.len() < value.len() {
        return Err(OclError::Code(CL_INVALID_VALUE));
    }

    param_value[..value.len()].copy_from_slice(value);
    Ok(value.len())
}

#[derive(Debug, Clone, Default)]
pub struct FakeDevice {
    info: InfoMap,
}

impl FakeDevice {
    /// a device with no attribute set
    pub fn empty() -> Self {
        Self::default()
    }

    /// a GPU answering every attribute the report asks for
    pub fn gpu(name: &str) -> Self {
        Self::empty()
            .with_string(CL_DEVICE_BUILT_IN_KERNELS, "")
            .with_string(CL_DEVICE_EXTENSIONS, "cl_khr_fp64 cl_khr_global_int32_base_atomics")
            .with_string(CL_DEVICE_NAME, name)
            .with_string(CL_DEVICE_OPENCL_C_VERSION, "OpenCL C 2.0")
            .with_string(CL_DEVICE_PROFILE, "FULL_PROFILE")
            .with_string(CL_DEVICE_VENDOR, "Fake Vendor")
            .with_string(CL_DEVICE_VERSION, "OpenCL 2.0")
            .with_string(CL_DRIVER_VERSION, "1.0.0")
            .with_ulong(
                CL_DEVICE_TYPE,
                (CL_DEVICE_TYPE_GPU | CL_DEVICE_TYPE_DEFAULT) as cl_device_type,
            )
            .with_uint(CL_DEVICE_COMPILER_AVAILABLE, CL_TRUE as cl_bool)
            .with_uint(CL_DEVICE_ENDIAN_LITTLE, CL_TRUE as cl_bool)
            .with_ulong(CL_DEVICE_GLOBAL_MEM_CACHE_SIZE, 16384)
            .with_uint(
                CL_DEVICE_GLOBAL_MEM_CACHE_TYPE,
                CL_READ_WRITE_CACHE as cl_device_mem_cache_type,
            )
            .with_uint(CL_DEVICE_IMAGE_SUPPORT, CL_TRUE as cl_bool)
    }

    /// same as [`FakeDevice::gpu`] with CL_DEVICE_TYPE_CPU
    pub fn cpu(name: &str) -> Self {
        Self::gpu(name).with_ulong(CL_DEVICE_TYPE, CL_DEVICE_TYPE_CPU as cl_device_type)
    }

    pub fn with_string(mut self, param_name: cl_device_info, value: &str) -> Self {
        self.info.insert(param_name, Ok(string_value(value)));
        self
    }

    pub fn with_uint(mut self, param_name: cl_device_info, value: cl_uint) -> Self {
        self.info.insert(param_name, Ok(value.to_ne_bytes().to_vec()));
        self
    }

    pub fn with_ulong(mut self, param_name: cl_device_info, value: cl_ulong) -> Self {
        self.info.insert(param_name, Ok(value.to_ne_bytes().to_vec()));
        self
    }

    pub fn with_bytes(mut self, param_name: cl_device_info, value: &[u8]) -> Self {
        self.info.insert(param_name, Ok(value.to_vec()));
        self
    }

    /// clGetDeviceInfo(param_name) fails with `code`
    pub fn with_info_error(mut self, param_name: cl_device_info, code: cl_int) -> Self {
        self.info.insert(param_name, Err(code));
        self
    }

    fn device_type(&self) -> cl_device_type {
        match self.info.get(&CL_DEVICE_TYPE) {
            Some(Ok(bytes)) => bytes
                .as_slice()
                .try_into()
                .map(cl_device_type::from_ne_bytes)
                .unwrap_or(0),
            _ => 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FakePlatform {
    info: InfoMap,
    devices: Result<Vec<FakeDevice>, cl_int>,
}

impl FakePlatform {
    /// a platform answering the five platform string attributes, without devices
    pub fn new(name: &str) -> Self {
        let mut info = InfoMap::new();
        info.insert(CL_PLATFORM_PROFILE, Ok(string_value("FULL_PROFILE")));
        info.insert(CL_PLATFORM_VERSION, Ok(string_value("OpenCL 2.1 AMD-APP")));
        info.insert(CL_PLATFORM_NAME, Ok(string_value(name)));
        info.insert(CL_PLATFORM_VENDOR, Ok(string_value("Fake Vendor")));
        info.insert(
            CL_PLATFORM_EXTENSIONS,
            Ok(string_value("cl_khr_icd cl_amd_event_callback")),
        );

        Self {
            info,
            devices: Ok(vec![]),
        }
    }

    pub fn with_string(mut self, param_name: cl_platform_info, value: &str) -> Self {
        self.info.insert(param_name, Ok(string_value(value)));
        self
    }

    /// clGetPlatformInfo(param_name) fails with `code`
    pub fn with_info_error(mut self, param_name: cl_platform_info, code: cl_int) -> Self {
        self.info.insert(param_name, Err(code));
        self
    }

    pub fn with_device(mut self, device: FakeDevice) -> Self {
        if let Ok(devices) = self.devices.as_mut() {
            devices.push(device);
        }
        self
    }

    /// clGetDeviceIDs fails with `code`
    pub fn with_device_error(mut self, code: cl_int) -> Self {
        self.devices = Err(code);
        self
    }
}

#[derive(Debug, Clone)]
pub struct FakeRuntime {
    platforms: Result<Vec<FakePlatform>, cl_int>,
    device_enumerations: Cell<usize>,
    device_queries: Cell<usize>,
}

impl Default for FakeRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeRuntime {
    /// no platform installed
    pub fn new() -> Self {
        Self {
            platforms: Ok(vec![]),
            device_enumerations: Cell::new(0),
            device_queries: Cell::new(0),
        }
    }

    /// clGetPlatformIDs fails with `code`
    pub fn failing(code: cl_int) -> Self {
        Self {
            platforms: Err(code),
            device_enumerations: Cell::new(0),
            device_queries: Cell::new(0),
        }
    }

    pub fn with_platform(mut self, platform: FakePlatform) -> Self {
        if let Ok(platforms) = self.platforms.as_mut() {
            platforms.push(platform);
        }
        self
    }

    /// number of clGetDeviceIDs calls served so far
    pub fn device_enumerations(&self) -> usize {
        self.device_enumerations.get()
    }

    /// number of clGetDeviceInfo calls served so far
    pub fn device_queries(&self) -> usize {
        self.device_queries.get()
    }

    fn platform(&self, platform: Platform) -> OclResult<&FakePlatform> {
        let index = (platform.get_cl_platform_id() as usize).wrapping_sub(1);

        self.platforms
            .as_ref()
            .ok()
            .and_then(|platforms| platforms.get(index))
            .ok_or(OclError::Code(CL_INVALID_PLATFORM))
    }

    fn device(&self, device: Device) -> OclResult<&FakeDevice> {
        let raw = device.get_cl_device_id() as usize;
        let platform_index = (raw >> DEVICE_INDEX_BITS).wrapping_sub(1);
        let device_index = (raw & ((1 << DEVICE_INDEX_BITS) - 1)).wrapping_sub(1);

        self.platforms
            .as_ref()
            .ok()
            .and_then(|platforms| platforms.get(platform_index))
            .and_then(|platform| platform.devices.as_ref().ok())
            .and_then(|devices| devices.get(device_index))
            .ok_or(OclError::Code(CL_INVALID_DEVICE))
    }
}

impl ClRuntime for FakeRuntime {
    fn platforms(&self) -> OclResult<Vec<Platform>> {
        let platforms = self.platforms.as_ref().map_err(|&code| OclError::Code(code))?;

        // SAFETY: fake handles never reach the OpenCL library.
        let handles = (1..=platforms.len())
            .map(|id| unsafe { Platform::from_cl_platform_id(id as cl_platform_id) })
            .collect();

        Ok(handles)
    }

    fn devices(&self, platform: Platform, device_type: cl_device_type) -> OclResult<Vec<Device>> {
        self.device_enumerations.set(self.device_enumerations.get() + 1);
        let platform_id = platform.get_cl_platform_id() as usize;
        let fake_platform = self.platform(platform)?;
        let devices = fake_platform
            .devices
            .as_ref()
            .map_err(|&code| OclError::Code(code))?;

        // SAFETY: fake handles never reach the OpenCL library.
        let handles: Vec<Device> = devices
            .iter()
            .enumerate()
            .filter(|(_, device)| device.device_type() & device_type != 0)
            .map(|(index, _)| {
                let id = (platform_id << DEVICE_INDEX_BITS) | (index + 1);
                unsafe { Device::from_cl_device_id(id as cl_device_id) }
            })
            .collect();

        if handles.is_empty() {
            return Err(OclError::Code(CL_DEVICE_NOT_FOUND));
        }

        Ok(handles)
    }

    fn platform_info(
        &self,
        platform: Platform,
        param_name: cl_platform_info,
        param_value: &mut [u8],
    ) -> OclResult<usize> {
        read_info(&self.platform(platform)?.info, param_name, param_value)
    }

    fn device_info(
        &self,
        device: Device,
        param_name: cl_device_info,
        param_value: &mut [u8],
    ) -> OclResult<usize> {
        self.device_queries.set(self.device_queries.get() + 1);
        read_info(&self.device(device)?.info, param_name, param_value)
    }
}
