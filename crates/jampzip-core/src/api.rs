//! High-level public API for archive creation and extraction.

use std::path::Path;

use crate::Result;
use crate::creation::ArchiveCreator;
use crate::creation::CreationConfig;
use crate::creation::CreationReport;
use crate::extraction::ExtractOptions;
use crate::extraction::ExtractionPlan;
use crate::formats::Capabilities;
use crate::report::ExtractionReport;
use crate::secret::SecretPrompt;

/// Creates a zip archive of `source_dir`.
///
/// `output_path` gets a `.zip` extension appended unless it already ends in
/// one. With `use_password`, `prompt` is asked for the password and every
/// file is encrypted with AES-256.
///
/// # Errors
///
/// Returns an error if:
/// - The output archive already exists
/// - The source directory does not exist
/// - The password cannot be read or is empty
/// - I/O operations fail
///
/// # Examples
///
/// ```no_run
/// use jampzip_core::create_zip;
/// use jampzip_core::secret::NoSecret;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = create_zip("backup", ".", false, &mut NoSecret)?;
/// println!("Zip file created: {}", report.output_path.display());
/// # Ok(())
/// # }
/// ```
pub fn create_zip<P: AsRef<Path>, Q: AsRef<Path>>(
    output_path: P,
    source_dir: Q,
    use_password: bool,
    prompt: &mut dyn SecretPrompt,
) -> Result<CreationReport> {
    let config = CreationConfig::new(output_path.as_ref(), source_dir.as_ref())
        .with_password(use_password);
    ArchiveCreator::new(config).create(prompt)
}

/// Extracts an archive next to itself.
///
/// The format is detected from the file name, and the target is the name
/// with the archive suffix removed. Uses the codecs compiled into this
/// build.
///
/// # Errors
///
/// Returns an error if any precondition of [`ExtractionPlan::prepare`]
/// fails, or if extraction itself fails.
///
/// # Examples
///
/// ```no_run
/// use jampzip_core::extract_archive;
/// use jampzip_core::extraction::ExtractOptions;
/// use jampzip_core::secret::NoSecret;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = extract_archive("bundle.tar.gz", &ExtractOptions::default(), &mut NoSecret)?;
/// println!("Extracted {} files", report.files_extracted);
/// # Ok(())
/// # }
/// ```
pub fn extract_archive<P: AsRef<Path>>(
    archive_path: P,
    options: &ExtractOptions,
    prompt: &mut dyn SecretPrompt,
) -> Result<ExtractionReport> {
    ExtractionPlan::prepare(archive_path.as_ref(), &Capabilities::detect())?
        .execute(options, prompt)
}
