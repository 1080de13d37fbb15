//! Whole-archive CRC-32 verification.

use std::fs::File;
use std::io;
use std::io::BufReader;
use std::io::Read;
use std::io::Seek;
use std::path::Path;

use log::debug;
use log::warn;
use zip::ZipArchive;
use zip::result::ZipError;

use crate::CheckMode;
use crate::Result;
use crate::ValidationError;
use crate::ValidatorConfig;

/// An entry whose stored data failed verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorruptEntry {
    /// Entry name as recorded in the central directory.
    pub name: String,

    /// What the archive reader reported for this entry.
    pub reason: String,
}

/// Result of checking the entries of one archive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    /// Number of entries that were opened and read.
    pub entries_checked: usize,

    /// Decompressed bytes read from entries that passed.
    pub bytes_checked: u64,

    /// Entries that failed verification, in archive order.
    pub corrupt_entries: Vec<CorruptEntry>,
}

impl IntegrityReport {
    /// Returns the first corrupt entry, if any.
    #[must_use]
    pub fn first_corrupt(&self) -> Option<&CorruptEntry> {
        self.corrupt_entries.first()
    }

    /// Returns `true` if no entry failed verification.
    #[must_use]
    pub fn is_intact(&self) -> bool {
        self.corrupt_entries.is_empty()
    }
}

/// Checks every entry of the ZIP archive at `archive_path`.
///
/// The file handle is held only for the duration of this call.
///
/// # Errors
///
/// Returns [`ValidationError::Open`] if the file cannot be opened or read,
/// [`ValidationError::InvalidArchive`] if it is not a ZIP archive, and
/// [`ValidationError::Unexpected`] if an entry cannot be checked for a
/// reason other than corruption. Corrupt entries are reported in
/// [`IntegrityReport::corrupt_entries`], not as errors.
///
/// # Examples
///
/// ```no_run
/// use validate_zip_core::ValidatorConfig;
/// use validate_zip_core::check_archive;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = check_archive("archive.zip", &ValidatorConfig::default())?;
/// match report.first_corrupt() {
///     Some(entry) => println!("{} is corrupt: {}", entry.name, entry.reason),
///     None => println!("{} entries OK", report.entries_checked),
/// }
/// # Ok(())
/// # }
/// ```
pub fn check_archive<P: AsRef<Path>>(
    archive_path: P,
    config: &ValidatorConfig,
) -> Result<IntegrityReport> {
    let archive_path = archive_path.as_ref();
    let open_failed = |source| ValidationError::Open {
        path: archive_path.to_path_buf(),
        source,
    };

    let file = File::open(archive_path).map_err(open_failed)?;
    debug!("checking {}", archive_path.display());

    let archive = open_archive(BufReader::new(file)).map_err(|e| match e {
        ValidationError::Io(source) => open_failed(source),
        other => other,
    })?;
    check_entries(archive, config)
}

/// Checks every entry of a ZIP archive held by `reader`.
///
/// # Errors
///
/// Same as [`check_archive`], except that I/O failures on `reader` are
/// reported as [`ValidationError::Io`].
pub fn check_reader<R: Read + Seek>(
    reader: R,
    config: &ValidatorConfig,
) -> Result<IntegrityReport> {
    let archive = open_archive(reader)?;
    check_entries(archive, config)
}

fn open_archive<R: Read + Seek>(reader: R) -> Result<ZipArchive<R>> {
    ZipArchive::new(reader).map_err(|e| match e {
        ZipError::Io(io_err) => ValidationError::Io(io_err),
        other => ValidationError::InvalidArchive(other.to_string()),
    })
}

fn check_entries<R: Read + Seek>(
    mut archive: ZipArchive<R>,
    config: &ValidatorConfig,
) -> Result<IntegrityReport> {
    let mut report = IntegrityReport::default();
    let mut buffer = vec![0u8; config.effective_buffer_size()];

    for index in 0..archive.len() {
        let name = archive
            .name_for_index(index)
            .map_or_else(|| format!("#{index}"), str::to_owned);

        match check_entry(&mut archive, index, &name, &mut buffer) {
            Ok(bytes) => {
                debug!("{name}: {bytes} bytes OK");
                report.bytes_checked += bytes;
            }
            Err(EntryFailure::Corrupt(reason)) => {
                warn!("{name}: {reason}");
                report.corrupt_entries.push(CorruptEntry { name, reason });
            }
            Err(EntryFailure::Unexpected(err)) => return Err(err),
        }
        report.entries_checked += 1;

        if config.mode == CheckMode::FirstFailure && !report.is_intact() {
            break;
        }
    }

    Ok(report)
}

enum EntryFailure {
    Corrupt(String),
    Unexpected(ValidationError),
}

/// Reads one entry to its end, letting the archive reader verify its CRC-32.
fn check_entry<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    index: usize,
    name: &str,
    buffer: &mut [u8],
) -> std::result::Result<u64, EntryFailure> {
    let mut entry = archive
        .by_index(index)
        .map_err(|e| classify_entry_error(e, name))?;

    let mut total: u64 = 0;
    loop {
        match entry.read(buffer) {
            Ok(0) => return Ok(total),
            Ok(n) => total += n as u64,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            // Checksum mismatches and broken compressed streams both surface here.
            Err(e) => return Err(EntryFailure::Corrupt(e.to_string())),
        }
    }
}

fn classify_entry_error(err: ZipError, name: &str) -> EntryFailure {
    match err {
        ZipError::InvalidArchive(_) => EntryFailure::Corrupt(err.to_string()),
        ZipError::Io(io_err) => EntryFailure::Unexpected(ValidationError::Io(io_err)),
        other => EntryFailure::Unexpected(ValidationError::Unexpected {
            entry: name.to_owned(),
            reason: other.to_string(),
        }),
    }
}
