//! Integrity checking for ZIP archives.
//!
//! `validate-zip-core` opens a ZIP archive, reads every entry through the
//! `zip` crate's decompressor and lets it compare each entry's CRC-32 with
//! the value recorded in the archive. The result is either a single
//! [`ValidationOutcome`] or, for callers that want more detail, an
//! [`IntegrityReport`].
//!
//! # Examples
//!
//! ```no_run
//! use validate_zip_core::ValidationOutcome;
//! use validate_zip_core::validate;
//!
//! match validate("archive.zip") {
//!     ValidationOutcome::Valid => println!("archive is intact"),
//!     ValidationOutcome::Corrupt(name) => println!("corrupt entry: {name}"),
//!     ValidationOutcome::OpenFailure(message) => println!("failed: {message}"),
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod integrity;
pub mod outcome;

#[doc(hidden)]
pub mod test_utils;

pub use config::CheckMode;
pub use config::ValidatorConfig;
pub use error::Result;
pub use error::ValidationError;
pub use integrity::CorruptEntry;
pub use integrity::IntegrityReport;
pub use integrity::check_archive;
pub use integrity::check_reader;
pub use outcome::ValidationOutcome;
pub use outcome::validate;
pub use outcome::validate_with_config;
