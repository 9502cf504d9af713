//! Extraction operation reporting.

use crate::formats::ArchiveType;
use std::path::PathBuf;
use std::time::Duration;

/// Post-extraction status of a zip archive.
///
/// Anything other than `NoError` means some entries may not have been
/// written, and the source archive must not be deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ZipStatus {
    /// Every entry was extracted.
    #[default]
    NoError,
    /// These entries could not be extracted, with the reason for each.
    EntriesFailed(Vec<String>),
}

impl ZipStatus {
    /// Returns `true` for `NoError`.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::NoError)
    }
}

impl std::fmt::Display for ZipStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoError => f.write_str("No error"),
            Self::EntriesFailed(failures) => {
                write!(f, "{} entries failed: {}", failures.len(), failures.join("; "))
            }
        }
    }
}

/// Report of an archive extraction operation.
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    /// Detected archive format.
    pub format: ArchiveType,

    /// Absolute path of the extracted archive.
    pub source: PathBuf,

    /// File or directory that was written.
    pub target: PathBuf,

    /// Number of files written.
    pub files_extracted: usize,

    /// Number of directories created.
    pub directories_created: usize,

    /// Total bytes written to disk.
    pub bytes_written: u64,

    /// Duration of the extraction operation.
    pub duration: Duration,

    /// Entry-level status. Always `NoError` for non-zip formats.
    pub zip_status: ZipStatus,

    /// Whether the source archive was removed afterwards.
    pub source_deleted: bool,

    /// Warnings generated during extraction.
    pub warnings: Vec<String>,
}

impl ExtractionReport {
    /// Creates an empty report for extracting `source` into `target`.
    #[must_use]
    pub fn new(format: ArchiveType, source: PathBuf, target: PathBuf) -> Self {
        Self {
            format,
            source,
            target,
            files_extracted: 0,
            directories_created: 0,
            bytes_written: 0,
            duration: Duration::ZERO,
            zip_status: ZipStatus::NoError,
            source_deleted: false,
            warnings: Vec::new(),
        }
    }

    /// Adds a warning message to the report.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Returns whether any warnings were generated.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Returns `true` if extraction succeeded without qualification, which
    /// is the condition for deleting the source.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.zip_status.is_ok()
    }

    /// Returns total number of items written.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.files_extracted + self.directories_created
    }
}
