//! CLI argument parsing using clap.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Usage line printed for any malformed invocation.
pub const USAGE: &str = "Usage: validate-zip.py <zipfile>";

#[derive(Debug, Parser)]
#[command(name = "validate-zip")]
#[command(about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Path to the ZIP archive
    #[arg(value_name = "zipfile")]
    pub zipfile: PathBuf,
}

impl Cli {
    /// Parses arguments, returning `None` unless exactly one path was given.
    ///
    /// Only the argument count decides; the single argument is always a
    /// path, even if it looks like a flag or is `--`.
    pub fn try_from_args<I, T>(args: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let [program, path] = <[OsString; 2]>::try_from(args)
            .inspect_err(|args| {
                log::debug!("expected one argument, got {}", args.len().saturating_sub(1));
            })
            .ok()?;

        Self::try_parse_from([program, OsString::from("--"), path])
            .inspect_err(|e| log::debug!("argument parsing failed: {e}"))
            .ok()
    }
}
