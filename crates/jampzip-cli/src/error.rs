//! Error conversion utilities for CLI.
//!
//! Converts jampzip-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use jampzip_core::ArchiveError;
use std::path::Path;

/// Converts `ArchiveError` to user-friendly anyhow error with context
///
/// Precondition failures are reported with a note that nothing was written.
pub fn convert_archive_error(err: ArchiveError, archive: &Path) -> anyhow::Error {
    let subject = err.path().unwrap_or(archive).display().to_string();
    let detail = err.context().unwrap_or_default().to_string();
    let untouched = if err.is_precondition_failure() {
        "\nNothing was written."
    } else {
        ""
    };

    match err {
        ArchiveError::AlreadyExists { .. } => {
            anyhow!(
                "File already exists: {subject}{untouched}\n\
                 HINT: Existing files are never overwritten. Remove it or choose another name."
            )
        }
        ArchiveError::NotFound { .. } => {
            anyhow!(
                "Unable to read file: {subject}{untouched}\n\
                 HINT: Check that the path exists and is readable."
            )
        }
        ArchiveError::UnsupportedFormat { .. } => {
            anyhow!(
                "Archive format not supported: {subject}{untouched}\n\
                 HINT: Supported formats: .tar.gz, .tar.bz2, .gz, .zip"
            )
        }
        ArchiveError::DestinationNotEmpty { .. } => {
            anyhow!(
                "Directory already exists and is not empty: {subject}{untouched}\n\
                 HINT: Move or empty the directory, then extract again."
            )
        }
        ArchiveError::MissingDependency { .. } => {
            anyhow!(
                "Cannot extract '{subject}': {detail} support is not available{untouched}\n\
                 HINT: Build jampzip with the default features (gzip, bzip2) enabled."
            )
        }
        ArchiveError::LibraryOperation(_) => {
            anyhow!(
                "Archive operation failed for '{subject}': {detail}\n\
                 HINT: The archive may be corrupted. For encrypted zip archives, use --password."
            )
        }
        ArchiveError::Io(io_err) => {
            anyhow!("I/O error while processing '{subject}': {io_err}")
        }
    }
}

/// Adds context to a generic error about archive operations
pub fn add_archive_context<T>(
    result: Result<T, ArchiveError>,
    archive: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_archive_error(e, archive))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_convert_destination_not_empty() {
        let err = ArchiveError::DestinationNotEmpty {
            path: PathBuf::from("photos"),
        };
        let msg = format!("{:?}", convert_archive_error(err, Path::new("photos.zip")));
        assert!(msg.contains("not empty"));
        assert!(msg.contains("photos"));
        assert!(msg.contains("Nothing was written."));
        assert!(msg.contains("HINT"));
    }

    #[test]
    fn test_convert_unsupported_format() {
        let err = ArchiveError::UnsupportedFormat {
            path: PathBuf::from("data.rar"),
        };
        let msg = format!("{:?}", convert_archive_error(err, Path::new("data.rar")));
        assert!(msg.contains("data.rar"));
        assert!(msg.contains(".tar.bz2"));
    }

    #[test]
    fn test_convert_missing_dependency() {
        let err = ArchiveError::MissingDependency { capability: "bzip2" };
        let msg = format!("{:?}", convert_archive_error(err, Path::new("a.tar.bz2")));
        assert!(msg.contains("bzip2 support"));
        assert!(msg.contains("a.tar.bz2"));
    }

    #[test]
    fn test_convert_library_operation() {
        let err = ArchiveError::LibraryOperation("invalid password".into());
        let msg = format!("{:?}", convert_archive_error(err, Path::new("vault.zip")));
        assert!(msg.contains("invalid password"));
        assert!(msg.contains("--password"));
        assert!(!msg.contains("Nothing was written."));
    }

    #[test]
    fn test_convert_io_error() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let msg = format!(
            "{:?}",
            convert_archive_error(ArchiveError::Io(io_err), Path::new("a.gz"))
        );
        assert!(msg.contains("I/O error"));
    }
}
