//! Output files that are removed unless the operation completes.

use crate::ArchiveError;
use crate::Result;
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;

/// Guard over a newly created output file that deletes it on drop unless
/// committed.
///
/// Every error path between creating an output file and finishing it simply
/// returns early; dropping the guard removes the half-written file. The
/// handle is returned separately so it can be moved into a writer; bind it
/// after the guard so it is closed first.
///
/// # Examples
///
/// ```no_run
/// use jampzip_core::io::PartialOutput;
/// use std::io::Write;
/// use std::path::Path;
///
/// let (output, mut file) = PartialOutput::create_new(Path::new("notes.txt"))?;
/// file.write_all(b"done")?;
/// output.commit(&file)?;
/// # Ok::<(), jampzip_core::ArchiveError>(())
/// ```
#[derive(Debug)]
pub struct PartialOutput {
    path: PathBuf,
    armed: bool,
}

impl PartialOutput {
    /// Creates `path`, failing if anything already exists there.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExists` if the path is taken, `Io` for other
    /// failures.
    pub fn create_new(path: &Path) -> Result<(Self, File)> {
        let file = File::create_new(path).map_err(|e| {
            if e.kind() == ErrorKind::AlreadyExists {
                ArchiveError::AlreadyExists {
                    path: path.to_path_buf(),
                }
            } else {
                ArchiveError::Io(e)
            }
        })?;

        let guard = Self {
            path: path.to_path_buf(),
            armed: true,
        };
        Ok((guard, file))
    }

    /// Returns the path being written.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Syncs `file` to disk and keeps it.
    ///
    /// # Errors
    ///
    /// Returns an error if syncing fails; the file is removed in that case.
    pub fn commit(mut self, file: &File) -> Result<PathBuf> {
        file.sync_all()?;
        self.armed = false;
        Ok(std::mem::take(&mut self.path))
    }
}

impl Drop for PartialOutput {
    fn drop(&mut self) {
        if self.armed {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_dropped_output_is_removed() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("partial.bin");

        {
            let (_output, mut file) = PartialOutput::create_new(&path).unwrap();
            file.write_all(b"half").unwrap();
            assert!(path.exists());
        }

        assert!(!path.exists());
    }

    #[test]
    fn test_committed_output_is_kept() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("done.bin");

        let (output, mut file) = PartialOutput::create_new(&path).unwrap();
        file.write_all(b"complete").unwrap();
        let kept = output.commit(&file).unwrap();

        assert_eq!(kept, path);
        assert_eq!(std::fs::read(&path).unwrap(), b"complete");
    }

    #[test]
    fn test_existing_file_rejected_and_untouched() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("existing.txt");
        std::fs::write(&path, "original").unwrap();

        let err = PartialOutput::create_new(&path).unwrap_err();

        assert!(matches!(err, ArchiveError::AlreadyExists { .. }));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_early_return_removes_output() {
        fn failing_step(path: &Path) -> Result<()> {
            let (_output, mut file) = PartialOutput::create_new(path)?;
            file.write_all(b"partial")?;
            Err(ArchiveError::LibraryOperation("stream failed".into()))
        }

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.tar");

        assert!(failing_step(&path).is_err());
        assert!(!path.exists());
    }
}
