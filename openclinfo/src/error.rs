use opencl::error::OclError;
use std::io;
use std::process::ExitCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to get platforms: {0}")]
    PlatformEnumeration(#[source] OclError),

    #[error("failed to write the report: {0}")]
    Io(#[from] io::Error),
}

impl ReportError {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            ReportError::PlatformEnumeration(_) => ExitStatus::PlatformEnumeration,
            ReportError::Io(_) => ExitStatus::Io,
        }
    }
}

/// Process exit status, lower non-zero values are the more severe failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum ExitStatus {
    Success = 0,
    PlatformEnumeration = 1,
    DeviceEnumeration = 2,
    IncompleteReport = 3,
    Io = 4,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
