//! Configuration for zip archive creation.

use crate::ArchiveError;
use crate::Result;
use std::path::PathBuf;

/// Default deflate level, balanced between speed and size.
pub const DEFAULT_COMPRESSION_LEVEL: u8 = 6;

/// Configuration for a zip creation run.
///
/// # Examples
///
/// ```
/// use jampzip_core::creation::CreationConfig;
///
/// let config = CreationConfig::new("backup", ".")
///     .with_password(true)
///     .with_compression_level(9);
///
/// assert!(config.use_password);
/// assert_eq!(config.compression_level, Some(9));
/// ```
#[derive(Debug, Clone)]
pub struct CreationConfig {
    /// Archive to create. `.zip` is appended when missing.
    pub target: PathBuf,

    /// Directory whose contents are archived.
    pub source_dir: PathBuf,

    /// Ask for a password and encrypt every file with AES-256.
    ///
    /// Default: `false`.
    pub use_password: bool,

    /// Deflate level (1-9), or 0 to store entries uncompressed.
    ///
    /// Default: `Some(6)`.
    pub compression_level: Option<u8>,
}

impl CreationConfig {
    /// Creates a configuration archiving `source_dir` into `target`.
    pub fn new(target: impl Into<PathBuf>, source_dir: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            source_dir: source_dir.into(),
            use_password: false,
            compression_level: Some(DEFAULT_COMPRESSION_LEVEL),
        }
    }

    /// Sets whether to encrypt entries with a prompted password.
    #[must_use]
    pub fn with_password(mut self, use_password: bool) -> Self {
        self.use_password = use_password;
        self
    }

    /// Sets the compression level. 0 stores entries without compression.
    ///
    /// # Panics
    ///
    /// Panics if the compression level is not in the range 0-9.
    /// Use `validate()` for non-panicking validation.
    #[must_use]
    pub fn with_compression_level(mut self, level: u8) -> Self {
        assert!(level <= 9, "compression level must be 0-9");
        self.compression_level = Some(level);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the compression level is set but not in range
    /// 0-9.
    pub fn validate(&self) -> Result<()> {
        if let Some(level) = self.compression_level
            && level > 9
        {
            return Err(ArchiveError::LibraryOperation(format!(
                "invalid compression level {level}, expected 0-9"
            )));
        }
        Ok(())
    }
}
