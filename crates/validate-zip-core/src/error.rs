//! Error types for archive validation.
//!
//! A corrupt entry is not an error: it is reported in
//! [`IntegrityReport`](crate::IntegrityReport). Errors here mean the check
//! itself could not be carried out.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ValidationError`.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Errors that stop an integrity check.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The archive file could not be opened or read.
    #[error("cannot open {}: {source}", path.display())]
    Open {
        /// Path that was passed to the validator.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The file is not a ZIP archive, or its central directory is unreadable.
    #[error("not a zip file: {0}")]
    InvalidArchive(String),

    /// An entry could not be checked for a reason other than corruption,
    /// e.g. it is encrypted or uses an unsupported compression method.
    #[error("cannot check {entry}: {reason}")]
    Unexpected {
        /// Name of the entry being checked.
        entry: String,
        /// Description supplied by the archive reader.
        reason: String,
    },

    /// I/O failure on the underlying reader while moving between entries.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ValidationError {
    /// Returns `true` if the archive could not be opened at all.
    #[must_use]
    pub fn is_open_error(&self) -> bool {
        matches!(self, Self::Open { .. } | Self::InvalidArchive(_))
    }
}
