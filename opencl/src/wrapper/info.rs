//! Fixed-size values returned by clGetPlatformInfo / clGetDeviceInfo.

use opencl_sys::bindings::{cl_uint, cl_ulong};

/// A scalar info value decoded from exactly `size_of::<Self>()` bytes in
/// host byte order.
pub trait InfoValue: Copy + Sized {
    fn from_info_bytes(bytes: &[u8]) -> Option<Self>;
}

macro_rules! impl_info_value {
    ($($t:ty),*) => {
        $(
            impl InfoValue for $t {
                fn from_info_bytes(bytes: &[u8]) -> Option<Self> {
                    bytes.try_into().ok().map(<$t>::from_ne_bytes)
                }
            }
        )*
    };
}

// cl_bool, cl_device_type, cl_device_mem_cache_type are aliases of these
impl_info_value!(cl_uint, cl_ulong);

#[cfg(test)]
mod tests {
    use super::*;
    use opencl_sys::bindings::{cl_bool, cl_device_type, CL_DEVICE_TYPE_GPU, CL_TRUE};

    #[test]
    fn test_from_info_bytes() {
        let v = cl_bool::from_info_bytes(&CL_TRUE.to_ne_bytes());
        assert_eq!(v, Some(CL_TRUE));

        let v = cl_device_type::from_info_bytes(&(CL_DEVICE_TYPE_GPU as u64).to_ne_bytes());
        assert_eq!(v, Some(CL_DEVICE_TYPE_GPU as cl_device_type));

        let v = cl_ulong::from_info_bytes(&65536u64.to_ne_bytes());
        assert_eq!(v, Some(65536));
    }

    #[test]
    fn test_from_info_bytes_wrong_size() {
        assert_eq!(cl_bool::from_info_bytes(&[1, 0]), None);
        assert_eq!(cl_ulong::from_info_bytes(&[0; 4]), None);
        assert_eq!(cl_uint::from_info_bytes(&[]), None);
    }
}
