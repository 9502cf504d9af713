//! Compressed tarball unpacking.

use crate::Result;
use crate::report::ExtractionReport;
use std::path::Path;

/// Unpacks a `.tar.gz` archive into `target`.
///
/// `target` must be absent or an empty directory. The tarball is unpacked
/// in one pass. Entries that would land outside `target` are skipped by
/// the tar reader. Counts in `report` are taken from the resulting tree.
///
/// # Errors
///
/// Returns `LibraryOperation` if the archive is corrupt or cannot be
/// unpacked. Whatever was unpacked before the failure is removed again,
/// leaving `target` as it was.
#[cfg(feature = "gzip")]
pub fn extract_tar_gz(source: &Path, target: &Path, report: &mut ExtractionReport) -> Result<()> {
    use crate::ArchiveError;
    use flate2::read::GzDecoder;
    use std::fs::File;
    use std::io::BufReader;

    let file = File::open(source).map_err(|e| {
        ArchiveError::LibraryOperation(format!("unable to open {}: {e}", source.display()))
    })?;
    let existed = target.is_dir();
    let mut archive = tar::Archive::new(GzDecoder::new(BufReader::new(file)));
    archive.set_preserve_permissions(true);
    if let Err(e) = archive.unpack(target) {
        discard_unpacked(target, existed);
        return Err(ArchiveError::LibraryOperation(format!(
            "unable to unpack {}: {e}",
            source.display()
        )));
    }

    tally(target, report)
}

/// Restores `target` after a failed unpack: removed if it was created,
/// emptied if it was an existing empty directory.
#[cfg(feature = "gzip")]
fn discard_unpacked(target: &Path, existed: bool) {
    use std::fs;

    if !existed {
        let _ = fs::remove_dir_all(target);
        return;
    }

    let Ok(children) = fs::read_dir(target) else {
        return;
    };
    for child in children.flatten() {
        let path = child.path();
        let _ = match child.file_type() {
            Ok(file_type) if file_type.is_dir() => fs::remove_dir_all(&path),
            _ => fs::remove_file(&path),
        };
    }
}

/// Gzip support was not compiled in.
#[cfg(not(feature = "gzip"))]
pub fn extract_tar_gz(
    _source: &Path,
    _target: &Path,
    _report: &mut ExtractionReport,
) -> Result<()> {
    Err(crate::ArchiveError::MissingDependency { capability: "zlib" })
}

#[cfg(feature = "gzip")]
fn tally(target: &Path, report: &mut ExtractionReport) -> Result<()> {
    for entry in walkdir::WalkDir::new(target).min_depth(1) {
        let entry = entry?;
        let file_type = entry.file_type();
        if file_type.is_dir() {
            report.directories_created += 1;
        } else {
            report.files_extracted += 1;
            if file_type.is_file() {
                report.bytes_written += entry.metadata()?.len();
            }
        }
    }
    Ok(())
}
