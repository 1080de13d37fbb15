//! validate-zip - checks that every entry of a ZIP archive matches its
//! recorded CRC-32.

mod cli;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use env_logger::Env;
use validate_zip_core::validate;

use output::EXIT_FAILURE;
use output::Reporter;

fn main() -> ExitCode {
    // Diagnostics go to stderr and stay off unless RUST_LOG asks for them.
    env_logger::Builder::from_env(Env::default().default_filter_or("off")).init();

    match run() {
        Ok(status) => ExitCode::from(status),
        Err(err) => {
            // Stdout is unusable here, so stderr is the only place left to report.
            eprintln!("Error: {err:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run() -> Result<u8> {
    let reporter = Reporter::stdout();

    let Some(args) = cli::Cli::try_from_args(std::env::args_os()) else {
        reporter.usage()?;
        return Ok(EXIT_FAILURE);
    };

    let outcome = validate(&args.zipfile);
    log::debug!("{}: {outcome:?}", args.zipfile.display());

    reporter.outcome(&outcome)?;
    Ok(output::exit_status(&outcome))
}
