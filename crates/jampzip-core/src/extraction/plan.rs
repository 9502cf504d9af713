//! Extraction planning and execution.
//!
//! [`ExtractionPlan::prepare`] runs every precondition check without
//! touching the filesystem, so a caller can announce source and target
//! before anything is written. [`ExtractionPlan::execute`] then performs
//! the extraction and the optional source deletion.

use crate::ArchiveError;
use crate::Result;
use crate::formats::ArchiveType;
use crate::formats::Capabilities;
use crate::formats::detect_format;
use crate::report::ExtractionReport;
use crate::secret::SecretPrompt;
use crate::secret::read_password;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

use super::stream;
use super::tar;
use super::zip;

/// Prompt shown when asking for a zip archive's password.
pub const EXTRACT_PASSWORD_PROMPT: &str = "Enter password: ";

/// Warning added when deletion was requested but the extraction was partial.
pub const SOURCE_KEPT_WARNING: &str = "Source archive kept because extraction was incomplete.";

/// Options for [`ExtractionPlan::execute`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Prompt for a password. Only zip archives use it.
    pub use_password: bool,

    /// Delete the source archive after a clean extraction.
    pub delete_source: bool,
}

/// A validated extraction: format, absolute source and target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionPlan {
    format: ArchiveType,
    source: PathBuf,
    target: PathBuf,
}

impl ExtractionPlan {
    /// Validates `archive` for extraction.
    ///
    /// Checks run in order: format detection, source existence, target
    /// derivation, destination state, codec availability.
    ///
    /// # Errors
    ///
    /// - `UnsupportedFormat` if the name has no recognized suffix
    /// - `NotFound` if the archive is not an existing regular file
    /// - `AlreadyExists` if the target exists (or is not a directory, for
    ///   directory formats)
    /// - `DestinationNotEmpty` if the target directory has entries
    /// - `MissingDependency` if the required codec is unavailable
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use jampzip_core::extraction::ExtractionPlan;
    /// use jampzip_core::formats::Capabilities;
    /// use std::path::Path;
    ///
    /// let plan = ExtractionPlan::prepare(Path::new("bundle.tar.gz"), &Capabilities::detect())?;
    /// println!("Extracting {} to {}", plan.source().display(), plan.target().display());
    /// # Ok::<(), jampzip_core::ArchiveError>(())
    /// ```
    pub fn prepare(archive: &Path, capabilities: &Capabilities) -> Result<Self> {
        let format = detect_format(archive)?;
        let source = resolve_source(archive)?;
        let target = format.target_for(&source)?;
        check_target(format, &target)?;
        if let Some(codec) = format.required_codec() {
            capabilities.require(codec)?;
        }

        Ok(Self {
            format,
            source,
            target,
        })
    }

    /// Returns the detected format.
    #[must_use]
    pub const fn format(&self) -> ArchiveType {
        self.format
    }

    /// Returns the absolute archive path.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Returns the file or directory extraction will create.
    #[must_use]
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Runs the extraction.
    ///
    /// `prompt` is asked for a password only for zip archives with
    /// `use_password` set. The source is deleted only if requested and the
    /// report is clean.
    ///
    /// # Errors
    ///
    /// Returns `LibraryOperation` for corrupt archives, failed decryption
    /// or an empty password, and `Io` for filesystem failures or a prompt
    /// that cannot be read.
    pub fn execute(
        &self,
        options: &ExtractOptions,
        prompt: &mut dyn SecretPrompt,
    ) -> Result<ExtractionReport> {
        let start = Instant::now();
        let mut report =
            ExtractionReport::new(self.format, self.source.clone(), self.target.clone());
        if let Some(notice) = self.format.notice() {
            report.add_warning(notice);
        }

        match self.format {
            ArchiveType::TarGz => tar::extract_tar_gz(&self.source, &self.target, &mut report)?,
            ArchiveType::TarBz2 => {
                stream::extract_tar_bz2(&self.source, &self.target, &mut report)?;
            }
            ArchiveType::Gz => stream::extract_gz(&self.source, &self.target, &mut report)?,
            ArchiveType::Zip => {
                let password = if options.use_password {
                    Some(read_password(prompt, EXTRACT_PASSWORD_PROMPT)?)
                } else {
                    None
                };
                zip::extract_zip(&self.source, &self.target, password.as_deref(), &mut report)?;
            }
        }

        if options.delete_source {
            if report.is_clean() {
                fs::remove_file(&self.source)?;
                report.source_deleted = true;
            } else {
                report.add_warning(SOURCE_KEPT_WARNING);
            }
        }

        report.duration = start.elapsed();
        Ok(report)
    }
}

/// Makes `archive` absolute without resolving a symlink in its final
/// component, so the name used for detection stays the one given.
fn resolve_source(archive: &Path) -> Result<PathBuf> {
    let not_found = || ArchiveError::NotFound {
        path: archive.to_path_buf(),
    };

    let file_name = archive.file_name().ok_or_else(not_found)?;
    let parent = match archive.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let source = parent
        .canonicalize()
        .map_err(|_| not_found())?
        .join(file_name);

    if source.is_file() {
        Ok(source)
    } else {
        Err(not_found())
    }
}

/// A symlink at the target is never followed and always counts as existing.
fn check_target(format: ArchiveType, target: &Path) -> Result<()> {
    let metadata = match fs::symlink_metadata(target) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e.into()),
    };

    if !format.produces_directory() || !metadata.is_dir() {
        return Err(ArchiveError::AlreadyExists {
            path: target.to_path_buf(),
        });
    }

    if fs::read_dir(target)?.next().is_some() {
        return Err(ArchiveError::DestinationNotEmpty {
            path: target.to_path_buf(),
        });
    }
    Ok(())
}
