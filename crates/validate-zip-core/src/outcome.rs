//! Three-way validation outcome.

use std::path::Path;

use crate::IntegrityReport;
use crate::Result;
use crate::ValidatorConfig;
use crate::check_archive;

/// Outcome of validating one archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Every entry passed its integrity check.
    Valid,
    /// The named entry failed its integrity check.
    Corrupt(String),
    /// The archive could not be opened or checked; carries the description.
    OpenFailure(String),
}

impl ValidationOutcome {
    /// Collapses a check result into an outcome.
    ///
    /// Every error becomes [`ValidationOutcome::OpenFailure`], including
    /// failures that happen after the archive was opened.
    #[must_use]
    pub fn from_report(result: Result<IntegrityReport>) -> Self {
        match result {
            Ok(report) => report
                .first_corrupt()
                .map_or(Self::Valid, |entry| Self::Corrupt(entry.name.clone())),
            Err(err) => Self::OpenFailure(err.to_string()),
        }
    }

    /// Returns `true` for [`ValidationOutcome::Valid`].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Validates the archive at `archive_path` with the default configuration.
///
/// # Examples
///
/// ```no_run
/// use validate_zip_core::validate;
///
/// let outcome = validate("archive.zip");
/// assert!(outcome.is_valid());
/// ```
pub fn validate<P: AsRef<Path>>(archive_path: P) -> ValidationOutcome {
    validate_with_config(archive_path, &ValidatorConfig::default())
}

/// Validates the archive at `archive_path`.
pub fn validate_with_config<P: AsRef<Path>>(
    archive_path: P,
    config: &ValidatorConfig,
) -> ValidationOutcome {
    ValidationOutcome::from_report(check_archive(archive_path, config))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::CorruptEntry;
    use crate::ValidationError;
    use crate::test_utils::corrupt_first_entry;
    use crate::test_utils::create_test_zip;
    use crate::test_utils::set_first_entry_method;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_from_report_valid() {
        let outcome = ValidationOutcome::from_report(Ok(IntegrityReport::default()));
        assert_eq!(outcome, ValidationOutcome::Valid);
        assert!(outcome.is_valid());
    }

    #[test]
    fn test_from_report_uses_first_corrupt_entry() {
        let report = IntegrityReport {
            entries_checked: 3,
            bytes_checked: 10,
            corrupt_entries: vec![
                CorruptEntry {
                    name: "b.txt".to_string(),
                    reason: "Invalid checksum".to_string(),
                },
                CorruptEntry {
                    name: "c.txt".to_string(),
                    reason: "Invalid checksum".to_string(),
                },
            ],
        };
        assert_eq!(
            ValidationOutcome::from_report(Ok(report)),
            ValidationOutcome::Corrupt("b.txt".to_string())
        );
    }

    #[test]
    fn test_from_report_unexpected_error_is_open_failure() {
        let err = ValidationError::Unexpected {
            entry: "locked.txt".to_string(),
            reason: "Password required to decrypt file".to_string(),
        };
        let outcome = ValidationOutcome::from_report(Err(err));
        assert!(matches!(outcome, ValidationOutcome::OpenFailure(msg) if msg.contains("locked.txt")));
    }

    #[test]
    fn test_validate_scenarios() {
        let temp = TempDir::new().unwrap();

        let good = temp.path().join("good.zip");
        fs::write(&good, create_test_zip(&[("note.txt", "a small note")])).unwrap();
        assert_eq!(validate(&good), ValidationOutcome::Valid);

        let mut damaged = create_test_zip(&[("note.txt", "a small note")]);
        corrupt_first_entry(&mut damaged, 5);
        let bad = temp.path().join("bad.zip");
        fs::write(&bad, damaged).unwrap();
        assert_eq!(
            validate(&bad),
            ValidationOutcome::Corrupt("note.txt".to_string())
        );

        let text = temp.path().join("plain.txt");
        fs::write(&text, "just some text\n").unwrap();
        assert!(matches!(
            validate(&text),
            ValidationOutcome::OpenFailure(msg) if msg.starts_with("not a zip file")
        ));

        let missing = temp.path().join("missing.zip");
        assert!(matches!(
            validate(&missing),
            ValidationOutcome::OpenFailure(msg) if msg.contains("missing.zip")
        ));
    }

    #[test]
    fn test_validate_unsupported_method_is_open_failure() {
        let temp = TempDir::new().unwrap();
        let mut data = create_test_zip(&[("m.txt", "unknown method")]);
        set_first_entry_method(&mut data, 95);
        let path = temp.path().join("method.zip");
        fs::write(&path, data).unwrap();

        assert!(matches!(
            validate(&path),
            ValidationOutcome::OpenFailure(msg) if msg.starts_with("cannot check m.txt")
        ));
    }

    #[test]
    fn test_validate_directory_is_open_failure() {
        let temp = TempDir::new().unwrap();
        assert!(matches!(
            validate(temp.path()),
            ValidationOutcome::OpenFailure(_)
        ));
    }
}
