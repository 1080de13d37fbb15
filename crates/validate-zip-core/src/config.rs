//! Validator configuration.

/// How far the integrity check goes once a corrupt entry is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckMode {
    /// Stop at the first corrupt entry.
    #[default]
    FirstFailure,
    /// Check every entry and collect all corrupt ones.
    AllEntries,
}

/// Settings for an integrity check.
///
/// # Examples
///
/// ```
/// use validate_zip_core::CheckMode;
/// use validate_zip_core::ValidatorConfig;
///
/// let config = ValidatorConfig {
///     mode: CheckMode::AllEntries,
///     ..Default::default()
/// };
/// assert_eq!(config.buffer_size, 1024 * 1024);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Size of the chunk used to read decompressed entry data, in bytes.
    pub buffer_size: usize,

    /// Whether to stop at the first corrupt entry.
    pub mode: CheckMode,
}

impl ValidatorConfig {
    /// Default read chunk size (1 MiB).
    pub const DEFAULT_BUFFER_SIZE: usize = 1024 * 1024;

    /// Returns the chunk size actually used for reads (never zero).
    #[must_use]
    pub fn effective_buffer_size(&self) -> usize {
        self.buffer_size.max(1)
    }
}

impl Default for ValidatorConfig {
    /// Default values:
    /// - `buffer_size`: 1 MiB
    /// - `mode`: [`CheckMode::FirstFailure`]
    fn default() -> Self {
        Self {
            buffer_size: Self::DEFAULT_BUFFER_SIZE,
            mode: CheckMode::FirstFailure,
        }
    }
}
