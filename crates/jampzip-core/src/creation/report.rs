//! Archive creation operation reporting.

use std::path::PathBuf;
use std::time::Duration;

/// Report of an archive creation operation.
///
/// # Examples
///
/// ```
/// use jampzip_core::creation::CreationReport;
///
/// let mut report = CreationReport::default();
/// report.files_added = 10;
/// report.bytes_written = 1024;
/// report.bytes_compressed = 512;
///
/// assert_eq!(report.compression_ratio(), 2.0);
/// assert_eq!(report.compression_percentage(), 50.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CreationReport {
    /// Path of the archive that was written.
    pub output_path: PathBuf,

    /// Number of files added to the archive.
    pub files_added: usize,

    /// Number of empty-directory markers added to the archive.
    pub directories_added: usize,

    /// Number of entries skipped because their type is not archivable.
    pub entries_skipped: usize,

    /// Whether file entries were encrypted.
    pub encrypted: bool,

    /// Total bytes read from source files (uncompressed).
    pub bytes_written: u64,

    /// Size of the finished archive.
    pub bytes_compressed: u64,

    /// Duration of the creation operation.
    pub duration: Duration,

    /// Warnings generated during creation.
    pub warnings: Vec<String>,
}

impl CreationReport {
    /// Creates a new empty creation report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a warning message to the report.
    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    /// Returns whether any warnings were generated.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Returns the compression ratio (uncompressed / compressed).
    ///
    /// Returns 0.0 if either size is 0.
    #[must_use]
    pub fn compression_ratio(&self) -> f64 {
        if self.bytes_compressed == 0 || self.bytes_written == 0 {
            return 0.0;
        }
        self.bytes_written as f64 / self.bytes_compressed as f64
    }

    /// Returns the compression percentage (space saved).
    ///
    /// Returns 0.0 if `bytes_written` is 0 or the archive is larger than its
    /// contents.
    #[must_use]
    pub fn compression_percentage(&self) -> f64 {
        if self.bytes_written == 0 {
            return 0.0;
        }
        if self.bytes_compressed == 0 {
            return 100.0;
        }
        let saved = self.bytes_written.saturating_sub(self.bytes_compressed);
        (saved as f64 / self.bytes_written as f64) * 100.0
    }

    /// Returns total number of entries written to the archive.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.files_added + self.directories_added
    }
}
