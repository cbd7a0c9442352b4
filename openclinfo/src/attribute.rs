//! # Attribute tables
//!
//! Which attributes are queried, in which order, and how each value is
//! turned into text.
//!

use opencl::error::OclResult;
use opencl::opencl_sys::bindings::{
    cl_bool, cl_device_info, cl_device_mem_cache_type, cl_device_type, cl_platform_info, cl_uint,
    cl_ulong, CL_DEVICE_BUILT_IN_KERNELS, CL_DEVICE_COMPILER_AVAILABLE, CL_DEVICE_ENDIAN_LITTLE,
    CL_DEVICE_EXTENSIONS, CL_DEVICE_GLOBAL_MEM_CACHE_SIZE, CL_DEVICE_GLOBAL_MEM_CACHE_TYPE,
    CL_DEVICE_IMAGE_SUPPORT, CL_DEVICE_NAME, CL_DEVICE_OPENCL_C_VERSION, CL_DEVICE_PROFILE,
    CL_DEVICE_TYPE, CL_DEVICE_TYPE_ACCELERATOR, CL_DEVICE_TYPE_CPU, CL_DEVICE_TYPE_DEFAULT,
    CL_DEVICE_TYPE_GPU, CL_DEVICE_VENDOR, CL_DEVICE_VERSION, CL_DRIVER_VERSION, CL_NONE,
    CL_PLATFORM_EXTENSIONS, CL_PLATFORM_NAME, CL_PLATFORM_PROFILE, CL_PLATFORM_VENDOR,
    CL_PLATFORM_VERSION, CL_READ_ONLY_CACHE, CL_READ_WRITE_CACHE,
};
use opencl::wrapper::platform::Device;
use opencl::wrapper::runtime::ClRuntime;

/// A string attribute and the label it is printed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringAttribute {
    pub param_name: cl_uint,
    pub label: &'static str,
}

impl StringAttribute {
    const fn new(param_name: cl_uint, label: &'static str) -> Self {
        Self { param_name, label }
    }
}

pub const PLATFORM_ATTRIBUTES: &[StringAttribute] = &[
    StringAttribute::new(CL_PLATFORM_PROFILE as cl_platform_info, "profile"),
    StringAttribute::new(CL_PLATFORM_VERSION as cl_platform_info, "version"),
    StringAttribute::new(CL_PLATFORM_NAME as cl_platform_info, "name"),
    StringAttribute::new(CL_PLATFORM_VENDOR as cl_platform_info, "vendor"),
    StringAttribute::new(CL_PLATFORM_EXTENSIONS as cl_platform_info, "extensions"),
];

pub const DEVICE_ATTRIBUTES: &[StringAttribute] = &[
    StringAttribute::new(CL_DEVICE_BUILT_IN_KERNELS as cl_device_info, "built-in kernels"),
    StringAttribute::new(CL_DEVICE_EXTENSIONS as cl_device_info, "extensions"),
    StringAttribute::new(CL_DEVICE_NAME as cl_device_info, "device name"),
    StringAttribute::new(CL_DEVICE_OPENCL_C_VERSION as cl_device_info, "opencl c version"),
    StringAttribute::new(CL_DEVICE_PROFILE as cl_device_info, "profile"),
    StringAttribute::new(CL_DEVICE_VENDOR as cl_device_info, "vendor"),
    StringAttribute::new(CL_DEVICE_VERSION as cl_device_info, "version"),
    StringAttribute::new(CL_DRIVER_VERSION as cl_device_info, "driver version"),
];

/// Value type fetched for a typed attribute, paired with its formatter.
#[derive(Debug, Clone, Copy)]
pub enum TypedFormat {
    /// cl_uint sized values (cl_bool, cl_device_mem_cache_type)
    Uint(fn(cl_uint) -> String),
    /// cl_ulong sized values (cl_device_type, sizes in bytes)
    Ulong(fn(cl_ulong) -> String),
}

#[derive(Debug, Clone, Copy)]
pub struct TypedAttribute {
    pub param_name: cl_device_info,
    pub label: &'static str,
    pub format: TypedFormat,
}

impl TypedAttribute {
    const fn new(param_name: cl_device_info, label: &'static str, format: TypedFormat) -> Self {
        Self {
            param_name,
            label,
            format,
        }
    }

    /// fetch the value of this attribute and format it
    pub fn fetch_and_format<R: ClRuntime>(&self, runtime: &R, device: Device) -> OclResult<String> {
        match self.format {
            TypedFormat::Uint(f) => runtime
                .device_info_value::<cl_uint>(device, self.param_name)
                .map(f),
            TypedFormat::Ulong(f) => runtime
                .device_info_value::<cl_ulong>(device, self.param_name)
                .map(f),
        }
    }
}

pub const DEVICE_TYPED_ATTRIBUTES: &[TypedAttribute] = &[
    TypedAttribute::new(
        CL_DEVICE_TYPE as cl_device_info,
        "type",
        TypedFormat::Ulong(device_type_to_string),
    ),
    TypedAttribute::new(
        CL_DEVICE_COMPILER_AVAILABLE as cl_device_info,
        "compiler available",
        TypedFormat::Uint(bool_to_string),
    ),
    TypedAttribute::new(
        CL_DEVICE_ENDIAN_LITTLE as cl_device_info,
        "little endian",
        TypedFormat::Uint(bool_to_string),
    ),
    TypedAttribute::new(
        CL_DEVICE_GLOBAL_MEM_CACHE_SIZE as cl_device_info,
        "global cache in bytes",
        TypedFormat::Ulong(size_to_string),
    ),
    TypedAttribute::new(
        CL_DEVICE_GLOBAL_MEM_CACHE_TYPE as cl_device_info,
        "global cache type",
        TypedFormat::Uint(device_mem_cache_type_to_string),
    ),
    TypedAttribute::new(
        CL_DEVICE_IMAGE_SUPPORT as cl_device_info,
        "image support",
        TypedFormat::Uint(bool_to_string),
    ),
];

const DEVICE_TYPE_NAMES: &[(u32, &str)] = &[
    (CL_DEVICE_TYPE_CPU, "cpu"),
    (CL_DEVICE_TYPE_GPU, "gpu"),
    (CL_DEVICE_TYPE_ACCELERATOR, "accelerator"),
    (CL_DEVICE_TYPE_DEFAULT, "default"),
];

/// names of the cpu, gpu, accelerator and default bits, space separated
pub fn device_type_to_string(device_type: cl_device_type) -> String {
    DEVICE_TYPE_NAMES
        .iter()
        .filter(|(bit, _)| device_type & *bit as cl_device_type != 0)
        .map(|(_, name)| *name)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn bool_to_string(value: cl_bool) -> String {
    let text = if value != 0 { "true" } else { "false" };
    text.to_string()
}

pub fn size_to_string(value: cl_ulong) -> String {
    value.to_string()
}

pub fn device_mem_cache_type_to_string(value: cl_device_mem_cache_type) -> String {
    let text = match value {
        CL_NONE => "none",
        CL_READ_ONLY_CACHE => "read only",
        CL_READ_WRITE_CACHE => "read write",
        _ => "FAIL",
    };
    text.to_string()
}
