//! Archive format detection and extraction target derivation.

use std::path::Path;
use std::path::PathBuf;

use crate::ArchiveError;
use crate::Result;
use crate::formats::compression::CompressionCodec;

/// Supported input formats for extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveType {
    /// Gzip-compressed tar archive, unpacked into a directory.
    TarGz,
    /// Bzip2-compressed tar archive. Only the inner tarball is produced.
    TarBz2,
    /// Single gzip-compressed file.
    Gz,
    /// ZIP archive, extracted into a directory.
    Zip,
}

impl ArchiveType {
    /// Formats in detection order. Multi-part suffixes come before the
    /// shorter suffixes they end with.
    pub const DETECTION_ORDER: [Self; 4] = [Self::TarGz, Self::TarBz2, Self::Gz, Self::Zip];

    /// Returns the file name suffix this format is recognized by.
    ///
    /// # Examples
    ///
    /// ```
    /// use jampzip_core::formats::detect::ArchiveType;
    ///
    /// assert_eq!(ArchiveType::TarGz.suffix(), ".tar.gz");
    /// assert_eq!(ArchiveType::Zip.suffix(), ".zip");
    /// ```
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::TarGz => ".tar.gz",
            Self::TarBz2 => ".tar.bz2",
            Self::Gz => ".gz",
            Self::Zip => ".zip",
        }
    }

    /// Returns `true` if extraction produces a directory rather than a
    /// single file.
    #[must_use]
    pub const fn produces_directory(self) -> bool {
        matches!(self, Self::TarGz | Self::Zip)
    }

    /// Returns the codec that must be available to extract this format.
    ///
    /// ZIP archives are handled entirely by the zip library and need none.
    #[must_use]
    pub const fn required_codec(self) -> Option<CompressionCodec> {
        match self {
            Self::TarGz | Self::Gz => Some(CompressionCodec::Gzip),
            Self::TarBz2 => Some(CompressionCodec::Bzip2),
            Self::Zip => None,
        }
    }

    /// Returns a notice to show the user before extracting, if any.
    #[must_use]
    pub const fn notice(self) -> Option<&'static str> {
        match self {
            Self::TarBz2 => Some("Note: for now, only a tarball is extractable from .tar.bz2 files."),
            _ => None,
        }
    }

    /// Derives the extraction target for `archive` by stripping this
    /// format's suffix.
    ///
    /// For `.tar.bz2` the target keeps a `.tar` ending, since only the
    /// inner tarball is written.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedFormat` if the file name does not carry this
    /// suffix, is not valid UTF-8, or consists of the suffix alone.
    ///
    /// # Examples
    ///
    /// ```
    /// use jampzip_core::formats::detect::ArchiveType;
    /// use std::path::{Path, PathBuf};
    ///
    /// let target = ArchiveType::TarBz2.target_for(Path::new("/tmp/archive.tar.bz2"))?;
    /// assert_eq!(target, PathBuf::from("/tmp/archive.tar"));
    /// # Ok::<(), jampzip_core::ArchiveError>(())
    /// ```
    pub fn target_for(self, archive: &Path) -> Result<PathBuf> {
        let unsupported = || ArchiveError::UnsupportedFormat {
            path: archive.to_path_buf(),
        };

        let name = archive
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(unsupported)?;

        if !has_suffix(name, self.suffix()) {
            return Err(unsupported());
        }

        let stem = &name[..name.len() - self.suffix().len()];
        if stem.is_empty() {
            return Err(unsupported());
        }

        let target_name = match self {
            Self::TarBz2 => format!("{stem}.tar"),
            _ => stem.to_string(),
        };

        Ok(archive.with_file_name(target_name))
    }
}

impl std::fmt::Display for ArchiveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.suffix()[1..])
    }
}

/// Detects the archive type from a file path's suffix.
///
/// Suffixes are matched case-insensitively in [`ArchiveType::DETECTION_ORDER`],
/// so `backup.tar.gz` is a `TarGz`, never a `Gz`.
///
/// # Errors
///
/// Returns `UnsupportedFormat` if no known suffix matches.
///
/// # Examples
///
/// ```
/// use jampzip_core::formats::detect::{ArchiveType, detect_format};
/// use std::path::Path;
///
/// assert_eq!(detect_format(Path::new("site.tar.gz"))?, ArchiveType::TarGz);
/// assert_eq!(detect_format(Path::new("notes.txt.gz"))?, ArchiveType::Gz);
/// assert!(detect_format(Path::new("archive.rar")).is_err());
/// # Ok::<(), jampzip_core::ArchiveError>(())
/// ```
pub fn detect_format(path: &Path) -> Result<ArchiveType> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .ok_or_else(|| ArchiveError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

    ArchiveType::DETECTION_ORDER
        .into_iter()
        .find(|format| has_suffix(&name, format.suffix()))
        .ok_or_else(|| ArchiveError::UnsupportedFormat {
            path: path.to_path_buf(),
        })
}

fn has_suffix(name: &str, suffix: &str) -> bool {
    name.len() >= suffix.len()
        && name.is_char_boundary(name.len() - suffix.len())
        && name[name.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}
