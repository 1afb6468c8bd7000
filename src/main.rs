//! resumen CLI - tabular cleaning and summary reports.

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::process::ExitCode;

fn main() -> ExitCode {
    resumen::cli::run()
}
