//! Plain-text output for validation results.
//!
//! Consumers match these lines exactly, so nothing is styled.

use anyhow::Context;
use anyhow::Result;
use console::Term;
use validate_zip_core::ValidationOutcome;

use crate::cli::USAGE;

/// Exit status for a successful validation.
pub const EXIT_OK: u8 = 0;

/// Exit status for every kind of failure.
pub const EXIT_FAILURE: u8 = 1;

/// Renders the single status line for an outcome.
pub fn render(outcome: &ValidationOutcome) -> String {
    match outcome {
        ValidationOutcome::Valid => "OK".to_string(),
        ValidationOutcome::Corrupt(entry) => format!("Error in: {entry}"),
        ValidationOutcome::OpenFailure(message) => format!("Error: {message}"),
    }
}

/// Maps an outcome to the process exit status.
pub fn exit_status(outcome: &ValidationOutcome) -> u8 {
    if outcome.is_valid() {
        EXIT_OK
    } else {
        EXIT_FAILURE
    }
}

/// Writes status lines to stdout.
pub struct Reporter {
    term: Term,
}

impl Reporter {
    pub fn stdout() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    pub fn usage(&self) -> Result<()> {
        self.write(USAGE)
    }

    pub fn outcome(&self, outcome: &ValidationOutcome) -> Result<()> {
        self.write(&render(outcome))
    }

    fn write(&self, line: &str) -> Result<()> {
        self.term
            .write_line(line)
            .context("failed to write to standard output")
    }
}
