//! ZIP extraction with per-entry failure tracking.
//!
//! Entries are extracted independently. An entry that cannot be decrypted
//! fails the whole extraction once the remaining entries are done; any
//! other failing entry only degrades the result to
//! [`ZipStatus::EntriesFailed`].

use crate::ArchiveError;
use crate::Result;
use crate::report::ExtractionReport;
use crate::report::ZipStatus;
use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::io::Seek;
use std::path::Path;
use zip::ZipArchive;
use zip::result::ZipError;

/// Warning attached to a report whose zip status is not `NoError`.
pub const PARTIAL_EXTRACTION_WARNING: &str =
    "Extraction may not have worked for some or all items.";

enum EntryFailure {
    /// The entry is encrypted and the password is absent or wrong.
    Locked(String),
    /// Anything else: unsafe path, corrupt data, write failure.
    Failed(String),
}

/// Extracts every entry of the zip archive at `source` below `target`.
///
/// `target` is created if missing. With `password`, encrypted entries are
/// decrypted with it; unencrypted entries are read as-is.
///
/// # Errors
///
/// Returns `LibraryOperation` if the archive cannot be opened, or if any
/// encrypted entry could not be decrypted. Other per-entry failures are
/// recorded in `report.zip_status` instead.
pub fn extract_zip(
    source: &Path,
    target: &Path,
    password: Option<&str>,
    report: &mut ExtractionReport,
) -> Result<()> {
    let file = File::open(source).map_err(|e| {
        ArchiveError::LibraryOperation(format!("unable to open {}: {e}", source.display()))
    })?;
    let mut archive = ZipArchive::new(BufReader::new(file))
        .map_err(|e| ArchiveError::LibraryOperation(format!("invalid zip archive: {e}")))?;

    fs::create_dir_all(target)?;

    let mut locked = Vec::new();
    let mut failed = Vec::new();
    for index in 0..archive.len() {
        match extract_entry(&mut archive, index, target, password, report) {
            Ok(()) => {}
            Err(EntryFailure::Locked(reason)) => locked.push(reason),
            Err(EntryFailure::Failed(reason)) => failed.push(reason),
        }
    }

    if !locked.is_empty() {
        let hint = if password.is_some() {
            "wrong password"
        } else {
            "password required"
        };
        return Err(ArchiveError::LibraryOperation(format!(
            "unable to decrypt {} entries ({hint}): {}",
            locked.len(),
            locked.join(", ")
        )));
    }

    if !failed.is_empty() {
        report.zip_status = ZipStatus::EntriesFailed(failed);
        report.add_warning(report.zip_status.to_string());
        report.add_warning(PARTIAL_EXTRACTION_WARNING);
    }

    Ok(())
}

fn extract_entry<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    index: usize,
    target: &Path,
    password: Option<&str>,
    report: &mut ExtractionReport,
) -> std::result::Result<(), EntryFailure> {
    let (name, encrypted) = {
        let raw = archive
            .by_index_raw(index)
            .map_err(|e| EntryFailure::Failed(format!("entry #{index}: {e}")))?;
        (raw.name().to_string(), raw.encrypted())
    };

    let mut entry = match (encrypted, password) {
        (true, None) => return Err(EntryFailure::Locked(name)),
        (true, Some(password)) => archive
            .by_index_decrypt(index, password.as_bytes())
            .map_err(|e| match e {
                ZipError::InvalidPassword => EntryFailure::Locked(name.clone()),
                other => EntryFailure::Failed(format!("{name}: {other}")),
            })?,
        (false, _) => archive
            .by_index(index)
            .map_err(|e| EntryFailure::Failed(format!("{name}: {e}")))?,
    };

    let relative = entry
        .enclosed_name()
        .ok_or_else(|| EntryFailure::Failed(format!("{name}: unsafe path")))?;
    let out_path = target.join(relative);
    let io_failure = |e: std::io::Error| EntryFailure::Failed(format!("{name}: {e}"));

    if entry.is_dir() {
        fs::create_dir_all(&out_path).map_err(io_failure)?;
        report.directories_created += 1;
        return Ok(());
    }

    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent).map_err(io_failure)?;
    }

    let mut out = File::create(&out_path).map_err(io_failure)?;
    let written = match std::io::copy(&mut entry, &mut out) {
        Ok(written) => written,
        Err(e) => {
            drop(out);
            let _ = fs::remove_file(&out_path);
            return Err(io_failure(e));
        }
    };

    #[cfg(unix)]
    if let Some(mode) = entry.unix_mode() {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&out_path, fs::Permissions::from_mode(mode & 0o777))
            .map_err(io_failure)?;
    }

    report.files_extracted += 1;
    report.bytes_written += written;
    Ok(())
}
