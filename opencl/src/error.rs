//! # opencl error
//!
//! Every OpenCL call returns a `cl_int` status, `CL_SUCCESS` or a negative
//! error code. Codes produced by the wrapper itself start at -100 so they do
//! not collide with the ones defined by the OpenCL headers.
//!

use io::Error as IoError;
use opencl_sys::bindings::{cl_int, CL_SUCCESS};
use std::io;
use thiserror::Error;

// opencl wrapper errors

/// a fixed-size info value returned a different number of bytes
pub const CL_WRAPPER_INFO_SIZE_MISMATCH: cl_int = -100;

/// the number of platforms or devices kept growing between the count query and the data query
pub const CL_WRAPPER_ENUMERATION_UNSTABLE: cl_int = -101;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OclError {
    // opencl error code
    #[error("opencl error code: {0}")]
    Code(cl_int),
    // opencl wrapper error code
    #[error("opencl wrapper error code: {0}")]
    Wrapper(cl_int),
}

impl OclError {
    /// raw status, as it is shown in the diagnostics
    pub fn code(&self) -> cl_int {
        match *self {
            OclError::Code(code) | OclError::Wrapper(code) => code,
        }
    }
}

pub type OclResult<T> = Result<T, OclError>;

// CL_CHECK | HIP_ASSERT
pub fn cl_check(status: cl_int) -> OclResult<()> {
    if CL_SUCCESS as cl_int == status {
        Ok(())
    } else {
        Err(OclError::Code(status))
    }
}

impl From<OclError> for IoError {
    fn from(e: OclError) -> Self {
        Self::new(io::ErrorKind::Other, e)
    }
}
