use opencl::opencl_sys::bindings::{cl_device_type, CL_DEVICE_TYPE_ALL};

/// printed before every platform
pub const PLATFORM_SEPARATOR: &str = "======================";

/// printed after the device count of a platform
pub const DEVICE_SEPARATOR: &str = "--------------------";

/// devices of every type are listed
pub const DEVICE_TYPE_FILTER: cl_device_type = CL_DEVICE_TYPE_ALL as cl_device_type;

/// tracing filter when RUST_LOG is not set, logs go to stderr
pub const DEFAULT_LOG_FILTER: &str = "warn";
