//! # Report
//!
//! Walks every platform and every device of each platform, writing the
//! attributes of [`crate::attribute`] to `out` and the failed queries to `err`.
//!
//! ```text
//! Found 1 platforms.
//! ======================
//! Platform #0:
//! profile: FULL_PROFILE
//! ...
//! number of devices: 1
//! --------------------
//! Device #0
//! built-in kernels:
//! ...
//! type: gpu
//! ...
//! ```
//!

use crate::attribute::{
    StringAttribute, TypedAttribute, DEVICE_ATTRIBUTES, DEVICE_TYPED_ATTRIBUTES,
    PLATFORM_ATTRIBUTES,
};
use crate::config::{DEVICE_SEPARATOR, DEVICE_TYPE_FILTER, PLATFORM_SEPARATOR};
use crate::error::{ExitStatus, ReportError};
use opencl::error::{OclError, OclResult};
use opencl::opencl_sys::bindings::{cl_uint, CL_DEVICE_NOT_FOUND};
use opencl::wrapper::platform::{Device, Platform};
use opencl::wrapper::runtime::ClRuntime;
use std::io::{self, Write};
use tracing::{debug, info};

/// What a finished report found and which queries failed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub platforms: usize,
    pub devices: usize,
    pub device_enumeration_failures: usize,
    pub attribute_failures: usize,
}

impl ReportSummary {
    pub fn exit_status(&self) -> ExitStatus {
        if self.device_enumeration_failures > 0 {
            ExitStatus::DeviceEnumeration
        } else if self.attribute_failures > 0 {
            ExitStatus::IncompleteReport
        } else {
            ExitStatus::Success
        }
    }
}

pub struct Reporter<'a, R, O, E> {
    runtime: &'a R,
    out: O,
    err: E,
    summary: ReportSummary,
}

impl<'a, R, O, E> Reporter<'a, R, O, E>
where
    R: ClRuntime,
    O: Write,
    E: Write,
{
    pub fn new(runtime: &'a R, out: O, err: E) -> Self {
        Self {
            runtime,
            out,
            err,
            summary: ReportSummary::default(),
        }
    }

    /// Write the whole report. Only a failed platform enumeration or a failed
    /// write stops it, every other failure is written to `err` and counted.
    pub fn run(mut self) -> Result<ReportSummary, ReportError> {
        let platforms = match self.runtime.platforms() {
            Ok(platforms) => platforms,
            Err(e) => {
                writeln!(self.err, "Failed to get platform: {}", e.code())?;
                return Err(ReportError::PlatformEnumeration(e));
            }
        };

        writeln!(self.out, "Found {} platforms.", platforms.len())?;

        for (index, platform) in platforms.into_iter().enumerate() {
            self.describe_platform(index, platform)?;
            self.describe_devices(platform)?;
        }

        self.out.flush()?;
        self.err.flush()?;

        info!(
            platforms = self.summary.platforms,
            devices = self.summary.devices,
            device_enumeration_failures = self.summary.device_enumeration_failures,
            attribute_failures = self.summary.attribute_failures,
            "report written"
        );

        Ok(self.summary)
    }

    fn describe_platform(&mut self, index: usize, platform: Platform) -> io::Result<()> {
        debug!(index, ?platform, "describe platform");
        self.summary.platforms += 1;

        writeln!(self.out, "{PLATFORM_SEPARATOR}")?;
        writeln!(self.out, "Platform #{index}:")?;

        for attribute in PLATFORM_ATTRIBUTES {
            let value = self
                .runtime
                .platform_info_string(platform, attribute.param_name);
            self.print_string_attribute(attribute, value)?;
        }

        Ok(())
    }

    fn describe_devices(&mut self, platform: Platform) -> io::Result<()> {
        let devices = match self.runtime.devices(platform, DEVICE_TYPE_FILTER) {
            Ok(devices) => devices,
            Err(OclError::Code(CL_DEVICE_NOT_FOUND)) => vec![],
            Err(e) => {
                self.summary.device_enumeration_failures += 1;
                return writeln!(self.err, "Failed to get device: {}", e.code());
            }
        };

        writeln!(self.out, "number of devices: {}", devices.len())?;
        writeln!(self.out, "{DEVICE_SEPARATOR}")?;

        for (index, device) in devices.into_iter().enumerate() {
            self.describe_device(index, device)?;
        }

        Ok(())
    }

    fn describe_device(&mut self, index: usize, device: Device) -> io::Result<()> {
        debug!(index, ?device, "describe device");
        self.summary.devices += 1;

        writeln!(self.out, "Device #{index}")?;

        for attribute in DEVICE_ATTRIBUTES {
            let value = self.runtime.device_info_string(device, attribute.param_name);
            self.print_string_attribute(attribute, value)?;
        }

        for attribute in DEVICE_TYPED_ATTRIBUTES {
            self.print_typed_attribute(attribute, device)?;
        }

        Ok(())
    }

    fn print_string_attribute(
        &mut self,
        attribute: &StringAttribute,
        value: OclResult<String>,
    ) -> io::Result<()> {
        match value {
            Ok(value) => writeln!(self.out, "{}: {}", attribute.label, value),
            Err(e) => self.report_info_error(attribute.param_name, e),
        }
    }

    fn print_typed_attribute(
        &mut self,
        attribute: &TypedAttribute,
        device: Device,
    ) -> io::Result<()> {
        match attribute.fetch_and_format(self.runtime, device) {
            Ok(value) => writeln!(self.out, "{}: {}", attribute.label, value),
            Err(e) => self.report_info_error(attribute.param_name, e),
        }
    }

    fn report_info_error(&mut self, param_name: cl_uint, e: OclError) -> io::Result<()> {
        debug!(param_name, error = %e, "info query failed");
        self.summary.attribute_failures += 1;

        writeln!(self.err, "Failed to get info {}: {}", param_name, e.code())
    }
}

/// [`Reporter::run`] in one call
pub fn write_report<R, O, E>(runtime: &R, out: O, err: E) -> Result<ReportSummary, ReportError>
where
    R: ClRuntime,
    O: Write,
    E: Write,
{
    Reporter::new(runtime, out, err).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opencl::opencl_sys::bindings::{
        cl_device_type, CL_DEVICE_BUILT_IN_KERNELS, CL_DEVICE_COMPILER_AVAILABLE,
        CL_DEVICE_GLOBAL_MEM_CACHE_TYPE, CL_DEVICE_NAME, CL_DEVICE_TYPE,
        CL_DEVICE_TYPE_ACCELERATOR, CL_DEVICE_TYPE_CPU, CL_INVALID_VALUE, CL_OUT_OF_RESOURCES,
        CL_PLATFORM_EXTENSIONS, CL_PLATFORM_NOT_FOUND_KHR,
    };
    use opencl::test_utils::{FakeDevice, FakePlatform, FakeRuntime};

    type ReportOutput = (Result<ReportSummary, ReportError>, String, String);

    fn report(runtime: &FakeRuntime) -> ReportOutput {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = write_report(runtime, &mut out, &mut err);

        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    fn lines(s: &str) -> Vec<&str> {
        s.lines().collect()
    }

    #[test]
    fn test_report_single_gpu() {
        let runtime = FakeRuntime::new().with_platform(
            FakePlatform::new("AMD Accelerated Parallel Processing")
                .with_device(FakeDevice::gpu("gfx1032")),
        );

        let (result, out, err) = report(&runtime);

        let expected = [
            "Found 1 platforms.",
            "======================",
            "Platform #0:",
            "profile: FULL_PROFILE",
            "version: OpenCL 2.1 AMD-APP",
            "name: AMD Accelerated Parallel Processing",
            "vendor: Fake Vendor",
            "extensions: cl_khr_icd cl_amd_event_callback",
            "number of devices: 1",
            "--------------------",
            "Device #0",
            "built-in kernels: ",
            "extensions: cl_khr_fp64 cl_khr_global_int32_base_atomics",
            "device name: gfx1032",
            "opencl c version: OpenCL C 2.0",
            "profile: FULL_PROFILE",
            "vendor: Fake Vendor",
            "version: OpenCL 2.0",
            "driver version: 1.0.0",
            "type: gpu default",
            "compiler available: true",
            "little endian: true",
            "global cache in bytes: 16384",
            "global cache type: read write",
            "image support: true",
        ];

        assert_eq!(lines(&out), expected);
        assert_eq!(err, "");

        let summary = result.unwrap();
        assert_eq!(
            summary,
            ReportSummary {
                platforms: 1,
                devices: 1,
                device_enumeration_failures: 0,
                attribute_failures: 0,
            }
        );
        assert_eq!(summary.exit_status(), ExitStatus::Success);
    }

    #[test]
    fn test_report_platform_headers() {
        for n in 0..5 {
            let runtime = (0..n).fold(FakeRuntime::new(), |runtime, i| {
                runtime.with_platform(FakePlatform::new(&format!("platform {i}")))
            });

            let (result, out, err) = report(&runtime);
            let out = lines(&out);

            assert_eq!(out[0], format!("Found {n} platforms."));

            let headers: Vec<usize> = out
                .iter()
                .enumerate()
                .filter(|(_, line)| line.starts_with("Platform #"))
                .map(|(i, _)| i)
                .collect();
            assert_eq!(headers.len(), n);

            for (i, header) in headers.into_iter().enumerate() {
                assert_eq!(out[header - 1], PLATFORM_SEPARATOR);
                assert_eq!(out[header], format!("Platform #{i}:"));

                let labels: Vec<&str> = out[header + 1..header + 6]
                    .iter()
                    .map(|line| line.split(": ").next().unwrap())
                    .collect();
                assert_eq!(labels, ["profile", "version", "name", "vendor", "extensions"]);
                assert_eq!(out[header + 3], format!("name: platform {i}"));

                // no device: CL_DEVICE_NOT_FOUND
                assert_eq!(out[header + 6], "number of devices: 0");
                assert_eq!(out[header + 7], DEVICE_SEPARATOR);
            }

            assert_eq!(err, "");
            assert_eq!(result.unwrap().platforms, n);
        }
    }

    #[test]
    fn test_report_device_index() {
        let runtime = FakeRuntime::new()
            .with_platform(FakePlatform::new("a").with_device(FakeDevice::gpu("a0")))
            .with_platform(
                FakePlatform::new("b")
                    .with_device(FakeDevice::cpu("b0"))
                    .with_device(FakeDevice::gpu("b1")),
            );

        let (result, out, _) = report(&runtime);

        let devices: Vec<&str> = out
            .lines()
            .filter(|line| line.starts_with("Device #") || line.starts_with("device name: "))
            .collect();
        assert_eq!(
            devices,
            [
                "Device #0",
                "device name: a0",
                "Device #0",
                "device name: b0",
                "Device #1",
                "device name: b1",
            ]
        );

        assert!(out.contains("number of devices: 2\n"));
        assert!(out.contains("type: cpu\n"));
        assert_eq!(result.unwrap().devices, 3);
    }

    #[test]
    fn test_report_device_type() {
        let cpu_accelerator = (CL_DEVICE_TYPE_CPU | CL_DEVICE_TYPE_ACCELERATOR) as cl_device_type;
        let runtime = FakeRuntime::new().with_platform(
            FakePlatform::new("a")
                .with_device(FakeDevice::gpu("a0").with_ulong(CL_DEVICE_TYPE, cpu_accelerator)),
        );

        let (_, out, _) = report(&runtime);
        assert!(out.contains("\ntype: cpu accelerator\n"));
    }

    #[test]
    fn test_report_typed_attribute_error() {
        let runtime = FakeRuntime::new().with_platform(
            FakePlatform::new("a").with_device(
                FakeDevice::gpu("a0")
                    .with_info_error(CL_DEVICE_COMPILER_AVAILABLE, CL_INVALID_VALUE)
                    .with_uint(CL_DEVICE_GLOBAL_MEM_CACHE_TYPE, 42),
            ),
        );

        let (result, out, err) = report(&runtime);

        assert!(!out.contains("compiler available"));
        assert!(out.contains("\ntype: gpu default\nlittle endian: true\n"));
        assert!(out.contains("\nglobal cache type: FAIL\n"));
        assert_eq!(err, "Failed to get info 4136: -30\n");

        let summary = result.unwrap();
        assert_eq!(summary.attribute_failures, 1);
        assert_eq!(summary.exit_status(), ExitStatus::IncompleteReport);
    }

    #[test]
    fn test_report_typed_attribute_size_mismatch() {
        // cl_bool answered with 8 bytes
        let runtime = FakeRuntime::new().with_platform(
            FakePlatform::new("a").with_device(
                FakeDevice::gpu("a0")
                    .with_bytes(CL_DEVICE_COMPILER_AVAILABLE, &[1, 0, 0, 0, 0, 0, 0, 0]),
            ),
        );

        let (_, out, err) = report(&runtime);

        assert!(!out.contains("compiler available"));
        assert_eq!(err, "Failed to get info 4136: -30\n");
    }

    #[test]
    fn test_report_string_attribute_error() {
        let runtime = FakeRuntime::new().with_platform(
            FakePlatform::new("a")
                .with_info_error(CL_PLATFORM_EXTENSIONS, CL_OUT_OF_RESOURCES)
                .with_device(
                    FakeDevice::gpu("a0")
                        .with_info_error(CL_DEVICE_BUILT_IN_KERNELS, CL_INVALID_VALUE),
                ),
        );

        let (result, out, err) = report(&runtime);

        assert!(out.contains("vendor: Fake Vendor\nnumber of devices: 1\n"));
        assert!(out.contains("Device #0\nextensions: "));
        assert!(!out.contains("built-in kernels"));
        assert_eq!(
            lines(&err),
            ["Failed to get info 2308: -5", "Failed to get info 4159: -30"]
        );
        assert_eq!(result.unwrap().attribute_failures, 2);
    }

    #[test]
    fn test_report_platform_error() {
        let runtime = FakeRuntime::failing(CL_PLATFORM_NOT_FOUND_KHR);

        let (result, out, err) = report(&runtime);

        assert_eq!(out, "");
        assert_eq!(err, "Failed to get platform: -1001\n");
        assert_eq!(runtime.device_enumerations(), 0);
        assert_eq!(runtime.device_queries(), 0);

        let e = result.unwrap_err();
        assert!(matches!(
            e,
            ReportError::PlatformEnumeration(OclError::Code(CL_PLATFORM_NOT_FOUND_KHR))
        ));
        assert_eq!(e.exit_status(), ExitStatus::PlatformEnumeration);
    }

    #[test]
    fn test_report_device_error() {
        let runtime = FakeRuntime::new()
            .with_platform(FakePlatform::new("a").with_device_error(CL_OUT_OF_RESOURCES))
            .with_platform(FakePlatform::new("b").with_device(FakeDevice::gpu("b0")));

        let (result, out, err) = report(&runtime);

        assert_eq!(err, "Failed to get device: -5\n");

        // the next platform is still described
        assert!(out.contains("Platform #1:\n"));
        assert!(out.contains("device name: b0\n"));
        assert_eq!(out.matches("number of devices").count(), 1);
        assert_eq!(runtime.device_enumerations(), 2);

        let summary = result.unwrap();
        assert_eq!(summary.device_enumeration_failures, 1);
        assert_eq!(summary.devices, 1);
        assert_eq!(summary.exit_status(), ExitStatus::DeviceEnumeration);
    }

    #[test]
    fn test_report_without_platforms() {
        let (result, out, err) = report(&FakeRuntime::new());

        assert_eq!(out, "Found 0 platforms.\n");
        assert_eq!(err, "");
        assert_eq!(result.unwrap().exit_status(), ExitStatus::Success);
    }

    #[test]
    fn test_report_device_name_with_nul_padding() {
        let runtime = FakeRuntime::new().with_platform(
            FakePlatform::new("a")
                .with_device(FakeDevice::gpu("a0").with_bytes(CL_DEVICE_NAME, b"gfx90c\0\0\0\0")),
        );

        let (_, out, _) = report(&runtime);
        assert!(out.contains("\ndevice name: gfx90c\n"));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_report_io_error() {
        let runtime = FakeRuntime::new().with_platform(FakePlatform::new("a"));
        let mut err = Vec::new();

        let result = write_report(&runtime, BrokenPipe, &mut err);

        let e = result.unwrap_err();
        assert!(matches!(
            &e,
            ReportError::Io(io_err) if io_err.kind() == io::ErrorKind::BrokenPipe
        ));
        assert_eq!(e.exit_status(), ExitStatus::Io);
    }

    #[test]
    fn test_summary_exit_status_priority() {
        let summary = ReportSummary {
            platforms: 2,
            devices: 1,
            device_enumeration_failures: 1,
            attribute_failures: 3,
        };
        assert_eq!(summary.exit_status(), ExitStatus::DeviceEnumeration);

        let summary = ReportSummary {
            device_enumeration_failures: 0,
            ..summary
        };
        assert_eq!(summary.exit_status(), ExitStatus::IncompleteReport);

        assert_eq!(ReportSummary::default().exit_status(), ExitStatus::Success);
    }
}
