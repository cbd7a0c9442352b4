use opencl::opencl_sys::bindings::{cl_device_type, CL_DEVICE_NAME, CL_DEVICE_TYPE_GPU};
use opencl::wrapper::runtime::{ClRuntime, OpenclRuntime};
use std::io::{self, Write};

/// print the name of every gpu device, errors go to `err`
fn print_gpu_names<R, O, E>(runtime: &R, mut out: O, mut err: E) -> io::Result<()>
where
    R: ClRuntime,
    O: Write,
    E: Write,
{
    let platforms = match runtime.platforms() {
        Ok(platforms) => platforms,
        Err(e) => return writeln!(err, "Failed to get platform: {}", e.code()),
    };

    for platform in platforms {
        let devices = runtime
            .devices(platform, CL_DEVICE_TYPE_GPU as cl_device_type)
            .unwrap_or_default();

        for device in devices {
            match runtime.device_info_string(device, CL_DEVICE_NAME) {
                Ok(name) => writeln!(out, "{name}")?,
                Err(e) => writeln!(err, "Failed to get info {CL_DEVICE_NAME}: {}", e.code())?,
            }
        }
    }

    Ok(())
}

fn main() -> io::Result<()> {
    print_gpu_names(&OpenclRuntime, io::stdout().lock(), io::stderr().lock())
}
