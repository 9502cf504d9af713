//! ZIP archive writing.
//!
//! [`ZipEntryWriter`] is the [`WalkVisitor`] that turns walked entries into
//! zip entries: files are deflated (and AES-256 encrypted when a password is
//! set), empty directories become `name/` markers, and unsupported entries
//! are skipped with a warning.

use crate::Result;
use crate::creation::report::CreationReport;
use crate::creation::walker::WalkVisitor;
use std::fs::File;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use zip::AesMode;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::FileOptions;
use zip::write::SimpleFileOptions;

/// Builds the base entry options for a compression level.
///
/// `Some(0)` stores entries uncompressed; any other level deflates.
#[must_use]
pub fn base_options(compression_level: Option<u8>) -> SimpleFileOptions {
    if compression_level == Some(0) {
        SimpleFileOptions::default().compression_method(CompressionMethod::Stored)
    } else {
        let level = compression_level.unwrap_or(super::config::DEFAULT_COMPRESSION_LEVEL);
        SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(i64::from(level)))
    }
}

/// Writes walked entries into a zip container.
///
/// # Examples
///
/// ```no_run
/// use jampzip_core::creation::walker::TreeWalker;
/// use jampzip_core::creation::zip::ZipEntryWriter;
/// use std::fs::File;
/// use std::path::Path;
///
/// let file = File::create("out.zip")?;
/// let mut writer = ZipEntryWriter::new(file, Some(6), None);
/// TreeWalker::new(Path::new("src")).walk(&mut writer)?;
/// let (_file, report) = writer.finish()?;
/// println!("{} files", report.files_added);
/// # Ok::<(), jampzip_core::ArchiveError>(())
/// ```
pub struct ZipEntryWriter<'k, W: Write + Seek> {
    zip: ZipWriter<W>,
    dir_options: SimpleFileOptions,
    file_options: FileOptions<'k, ()>,
    report: CreationReport,
}

impl<'k, W: Write + Seek> ZipEntryWriter<'k, W> {
    /// Creates a writer over `writer`.
    ///
    /// With a `password`, every file entry is encrypted with AES-256.
    /// Directory markers carry no data and are never encrypted.
    pub fn new(writer: W, compression_level: Option<u8>, password: Option<&'k str>) -> Self {
        let dir_options = base_options(compression_level);
        let file_options: FileOptions<'k, ()> = match password {
            Some(password) => dir_options.with_aes_encryption(AesMode::Aes256, password),
            None => dir_options,
        };

        let report = CreationReport {
            encrypted: password.is_some(),
            ..CreationReport::default()
        };

        Self {
            zip: ZipWriter::new(writer),
            dir_options,
            file_options,
            report,
        }
    }

    /// Returns the report accumulated so far.
    #[must_use]
    pub fn report(&self) -> &CreationReport {
        &self.report
    }

    /// Writes the central directory and returns the underlying writer
    /// together with the report.
    ///
    /// # Errors
    ///
    /// Returns an error if the archive cannot be finalized.
    pub fn finish(self) -> Result<(W, CreationReport)> {
        let writer = self.zip.finish()?;
        Ok((writer, self.report))
    }
}

impl<W: Write + Seek> WalkVisitor for ZipEntryWriter<'_, W> {
    fn visit_file(&mut self, path: &Path, archive_name: &str) -> Result<()> {
        let mut file = File::open(path)?;

        #[cfg(unix)]
        let options = {
            use std::os::unix::fs::PermissionsExt;
            let mode = file.metadata()?.permissions().mode();
            self.file_options.unix_permissions(mode)
        };
        #[cfg(not(unix))]
        let options = self.file_options;

        self.zip.start_file(archive_name, options)?;
        let copied = std::io::copy(&mut file, &mut self.zip)?;

        self.report.files_added += 1;
        self.report.bytes_written += copied;
        Ok(())
    }

    fn visit_empty_dir(&mut self, _path: &Path, archive_name: &str) -> Result<()> {
        self.zip
            .add_directory(format!("{archive_name}/"), self.dir_options)?;
        self.report.directories_added += 1;
        Ok(())
    }

    fn visit_unsupported(&mut self, path: &Path) -> Result<()> {
        self.report.entries_skipped += 1;
        self.report
            .add_warning(format!("Skipped unsupported entry: {}", path.display()));
        Ok(())
    }
}
