//! Error types for archive creation and extraction.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ArchiveError`.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Errors that can occur while creating or extracting an archive.
///
/// Every variant is fatal to the current invocation. Non-fatal conditions
/// (skipped entries, partially failed zip extraction) are reported as
/// warnings on the operation's report instead.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// The file that would be written already exists.
    #[error("file already exists: {path}")]
    AlreadyExists {
        /// The existing path.
        path: PathBuf,
    },

    /// The input archive or source directory does not exist or is not
    /// readable.
    #[error("unable to read file: {path}")]
    NotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// The archive suffix is not one of `.tar.gz`, `.tar.bz2`, `.gz`, `.zip`.
    #[error("unsupported archive format: {path}")]
    UnsupportedFormat {
        /// The rejected archive path.
        path: PathBuf,
    },

    /// The extraction directory exists and already has entries.
    #[error("directory already exists and is not empty: {path}")]
    DestinationNotEmpty {
        /// The target directory.
        path: PathBuf,
    },

    /// The codec needed for this format was not compiled in.
    #[error("missing {capability} support, required to extract this archive")]
    MissingDependency {
        /// Name of the missing codec capability (`zlib`, `bzip2`).
        capability: &'static str,
    },

    /// The underlying archive library reported a failure (corrupt archive,
    /// bad password, ...).
    #[error("archive operation failed: {0}")]
    LibraryOperation(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ArchiveError {
    /// Returns `true` if the error was raised by a check performed before
    /// any file was written.
    ///
    /// # Examples
    ///
    /// ```
    /// use jampzip_core::ArchiveError;
    /// use std::path::PathBuf;
    ///
    /// let err = ArchiveError::AlreadyExists {
    ///     path: PathBuf::from("out.zip"),
    /// };
    /// assert!(err.is_precondition_failure());
    ///
    /// let err = ArchiveError::LibraryOperation("invalid password".into());
    /// assert!(!err.is_precondition_failure());
    /// ```
    #[must_use]
    pub const fn is_precondition_failure(&self) -> bool {
        matches!(
            self,
            Self::AlreadyExists { .. }
                | Self::NotFound { .. }
                | Self::UnsupportedFormat { .. }
                | Self::DestinationNotEmpty { .. }
                | Self::MissingDependency { .. }
        )
    }

    /// Returns the path the error refers to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::AlreadyExists { path }
            | Self::NotFound { path }
            | Self::UnsupportedFormat { path }
            | Self::DestinationNotEmpty { path } => Some(path),
            _ => None,
        }
    }

    /// Returns a context string for this error, if available.
    ///
    /// # Examples
    ///
    /// ```
    /// use jampzip_core::ArchiveError;
    ///
    /// let err = ArchiveError::LibraryOperation("bad header".to_string());
    /// assert_eq!(err.context(), Some("bad header"));
    ///
    /// let err = ArchiveError::MissingDependency { capability: "bzip2" };
    /// assert_eq!(err.context(), Some("bzip2"));
    /// ```
    #[must_use]
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::LibraryOperation(msg) => Some(msg),
            Self::MissingDependency { capability } => Some(capability),
            _ => None,
        }
    }
}

impl From<zip::result::ZipError> for ArchiveError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(io_err) => Self::Io(io_err),
            other => Self::LibraryOperation(other.to_string()),
        }
    }
}

impl From<walkdir::Error> for ArchiveError {
    fn from(err: walkdir::Error) -> Self {
        let message = err.to_string();
        err.into_io_error().map_or_else(
            || Self::Io(std::io::Error::other(format!("walkdir error: {message}"))),
            Self::Io,
        )
    }
}
