//! randpi: estimate Pi from a random byte stream on stdin.
//!
//! Pipe an entropy source in and read the four-line report:
//!
//! ```text
//! openssl rand 100000000 | randpi
//! ```
//!
//! stdout carries exactly the report lines; diagnostics go to stderr, with
//! verbosity controlled by `RUST_LOG`.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use randpi_core::{pipeline, Error, RunConfig};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = RunConfig::default();

    let stdin = io::stdin();
    if stdin.is_terminal() {
        warn!("stdin is a terminal; expecting a piped byte stream (try: openssl rand 1000000 | randpi)");
    }

    let summary = match pipeline::run(stdin.lock(), &config) {
        Ok(summary) => summary,
        Err(e) => {
            error!("pipeline failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(e) = &summary.read_error {
        warn!("stream ended early on read failure: {e}; reporting pairs processed so far");
    }
    info!(
        integers = summary.metrics.integers_completed,
        trailing_digits_discarded = summary.metrics.trailing_digits_discarded,
        unpaired_integer_discarded = summary.metrics.unpaired_integer_discarded,
        "assembly complete"
    );

    let stdout = io::stdout();
    match pipeline::write_report(&mut stdout.lock(), &summary, &config) {
        Ok(_) => {
            if summary.read_error.is_some() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(Error::Estimate(e)) => {
            // Counts were already reported; the estimate alone is undefined.
            error!("{e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("failed to write report: {e}");
            ExitCode::FAILURE
        }
    }
}
