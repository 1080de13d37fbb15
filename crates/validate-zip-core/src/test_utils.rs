//! Test utilities for building and damaging ZIP archives in memory.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::io::Cursor;
use std::io::Write;

use zip::CompressionMethod;
use zip::write::SimpleFileOptions;
use zip::write::ZipWriter;

/// Size of the fixed part of a local file header.
const LOCAL_HEADER_LEN: usize = 30;

/// Signature that opens each central directory file header.
const CENTRAL_HEADER_SIGNATURE: [u8; 4] = [0x50, 0x4b, 0x01, 0x02];

/// Creates an in-memory ZIP archive from `(path, text)` entries, stored
/// uncompressed.
///
/// # Examples
///
/// ```
/// use validate_zip_core::test_utils::create_test_zip;
///
/// let zip_data = create_test_zip(&[("file.txt", "hello"), ("dir/nested.txt", "world")]);
/// assert!(!zip_data.is_empty());
/// ```
#[must_use]
pub fn create_test_zip(entries: &[(&str, &str)]) -> Vec<u8> {
    let entries: Vec<(&str, &[u8])> = entries
        .iter()
        .map(|(path, text)| (*path, text.as_bytes()))
        .collect();
    create_test_zip_with_method(&entries, CompressionMethod::Stored)
}

/// Creates an in-memory ZIP archive using the given compression method for
/// every entry.
#[must_use]
pub fn create_test_zip_with_method(
    entries: &[(&str, &[u8])],
    method: CompressionMethod,
) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    let options = SimpleFileOptions::default()
        .compression_method(method)
        .unix_permissions(0o644);

    for &(path, data) in entries {
        zip.start_file(path, options).unwrap();
        zip.write_all(data).unwrap();
    }

    zip.finish().unwrap().into_inner()
}

/// Returns the offset of the first entry's data, read from the local file
/// header at the start of the archive.
#[must_use]
pub fn first_entry_data_offset(archive: &[u8]) -> usize {
    let name_len = usize::from(u16::from_le_bytes([archive[26], archive[27]]));
    let extra_len = usize::from(u16::from_le_bytes([archive[28], archive[29]]));
    LOCAL_HEADER_LEN + name_len + extra_len
}

/// Flips every bit of the byte at `offset` within the first entry's data.
///
/// `offset` must be smaller than the first entry's compressed size.
pub fn corrupt_first_entry(archive: &mut [u8], offset: usize) {
    let at = first_entry_data_offset(archive) + offset;
    archive[at] ^= 0xFF;
}

/// Rewrites the compression method id of the first entry in both its
/// local header and its central directory header.
pub fn set_first_entry_method(archive: &mut [u8], method_id: u16) {
    let id = method_id.to_le_bytes();
    archive[8..10].copy_from_slice(&id);

    let central = archive
        .windows(CENTRAL_HEADER_SIGNATURE.len())
        .position(|w| w == CENTRAL_HEADER_SIGNATURE)
        .unwrap();
    archive[central + 10..central + 12].copy_from_slice(&id);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_entry_data_offset_points_at_content() {
        let data = create_test_zip(&[("hello.txt", "hello world")]);
        let start = first_entry_data_offset(&data);
        assert_eq!(&data[start..start + 11], b"hello world");
    }

    #[test]
    fn test_corrupt_first_entry_changes_one_byte() {
        let original = create_test_zip(&[("hello.txt", "hello world")]);
        let mut damaged = original.clone();
        corrupt_first_entry(&mut damaged, 4);

        let differing = original
            .iter()
            .zip(&damaged)
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(differing, 1);
    }

    #[test]
    fn test_set_first_entry_method_patches_both_headers() {
        let mut data = create_test_zip(&[("m.txt", "method")]);
        set_first_entry_method(&mut data, 95);

        assert_eq!(u16::from_le_bytes([data[8], data[9]]), 95);
        let central = data
            .windows(4)
            .position(|w| w == CENTRAL_HEADER_SIGNATURE)
            .unwrap();
        assert_eq!(
            u16::from_le_bytes([data[central + 10], data[central + 11]]),
            95
        );
    }
}
