use opencl::wrapper::runtime::OpenclRuntime;
use openclinfo::config::DEFAULT_LOG_FILTER;
use openclinfo::error::ReportError;
use openclinfo::report::write_report;
use std::io;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // stdout only carries the report
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let runtime = OpenclRuntime;
    let result = write_report(&runtime, io::stdout().lock(), io::stderr().lock());

    match result {
        Ok(summary) => summary.exit_status().into(),
        Err(e) => {
            // platform failures are already part of the report on stderr
            if let ReportError::Io(_) = e {
                error!("{e}");
            }
            e.exit_status().into()
        }
    }
}
