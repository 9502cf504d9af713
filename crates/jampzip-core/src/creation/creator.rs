//! Zip creation orchestration.

use crate::ArchiveError;
use crate::Result;
use crate::creation::config::CreationConfig;
use crate::creation::report::CreationReport;
use crate::creation::walker::TreeWalker;
use crate::creation::zip::ZipEntryWriter;
use crate::io::PartialOutput;
use crate::secret::SecretPrompt;
use crate::secret::read_password;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

/// Prompt shown when asking for the encryption password.
pub const CREATE_PASSWORD_PROMPT: &str = "Enter a password: ";

/// Returns `name` with a `.zip` extension, appending one if it is missing.
///
/// # Examples
///
/// ```
/// use jampzip_core::creation::normalize_zip_name;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(normalize_zip_name(Path::new("output")), PathBuf::from("output.zip"));
/// assert_eq!(normalize_zip_name(Path::new("output.zip")), PathBuf::from("output.zip"));
/// assert_eq!(normalize_zip_name(Path::new("v1.2")), PathBuf::from("v1.2.zip"));
/// ```
#[must_use]
pub fn normalize_zip_name(name: &Path) -> PathBuf {
    if name.as_os_str().to_string_lossy().ends_with(".zip") {
        name.to_path_buf()
    } else {
        let mut normalized = name.as_os_str().to_owned();
        normalized.push(".zip");
        PathBuf::from(normalized)
    }
}

/// Creates a zip archive of a directory tree.
///
/// # Examples
///
/// ```no_run
/// use jampzip_core::creation::{ArchiveCreator, CreationConfig};
/// use jampzip_core::secret::NoSecret;
///
/// let creator = ArchiveCreator::new(CreationConfig::new("backup", "."));
/// let report = creator.create(&mut NoSecret)?;
/// println!("Zip file created: {}", report.output_path.display());
/// # Ok::<(), jampzip_core::ArchiveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ArchiveCreator {
    config: CreationConfig,
}

impl ArchiveCreator {
    /// Creates a new creator with the given configuration.
    #[must_use]
    pub fn new(config: CreationConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &CreationConfig {
        &self.config
    }

    /// Returns the archive path this creator will write.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        normalize_zip_name(&self.config.target)
    }

    /// Writes the archive.
    ///
    /// `prompt` is asked for a password only when the configuration
    /// requests encryption, and before anything is written.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The output file already exists (`AlreadyExists`)
    /// - The source directory does not exist (`NotFound`)
    /// - The password cannot be read or is empty
    /// - Any I/O or zip error occurs while writing; the partial archive is
    ///   removed in that case
    pub fn create(&self, prompt: &mut dyn SecretPrompt) -> Result<CreationReport> {
        let start = Instant::now();
        self.config.validate()?;

        let output = self.output_path();
        if output.symlink_metadata().is_ok() {
            return Err(ArchiveError::AlreadyExists { path: output });
        }

        let source = self.resolve_source()?;

        let password = if self.config.use_password {
            Some(read_password(prompt, CREATE_PASSWORD_PROMPT)?)
        } else {
            None
        };

        let (guard, file) = PartialOutput::create_new(&output)?;
        let excluded = output.canonicalize()?;

        let mut writer =
            ZipEntryWriter::new(file, self.config.compression_level, password.as_deref());
        TreeWalker::new(&source)
            .with_excluded(excluded)
            .walk(&mut writer)?;
        let (file, mut report) = writer.finish()?;

        report.bytes_compressed = file.metadata()?.len();
        report.output_path = guard.commit(&file)?;
        report.duration = start.elapsed();

        Ok(report)
    }

    fn resolve_source(&self) -> Result<PathBuf> {
        let not_found = || ArchiveError::NotFound {
            path: self.config.source_dir.clone(),
        };

        let source = self
            .config
            .source_dir
            .canonicalize()
            .map_err(|_| not_found())?;
        if !source.is_dir() {
            return Err(not_found());
        }
        Ok(source)
    }
}
