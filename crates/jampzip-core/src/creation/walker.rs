//! Depth-first directory traversal for archive creation.
//!
//! The walker classifies every entry below a root directory and hands it to
//! a [`WalkVisitor`]. Regular files and empty directories become archive
//! entries; non-empty directories are only descended into; anything else
//! (symlinks, devices, sockets, fifos) is reported as unsupported.

use crate::ArchiveError;
use crate::Result;
use std::fs;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Classification of a visited entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file.
    File,
    /// Directory with no visitable children.
    EmptyDir,
    /// Any other filesystem object. Never followed, never archived.
    Unsupported,
}

/// An entry found below the walk root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    /// Full filesystem path to the entry.
    pub path: PathBuf,

    /// Path relative to the walk root, `/`-separated.
    pub archive_name: String,

    /// What the entry is.
    pub kind: EntryKind,
}

/// Per-entry callbacks driven by [`TreeWalker::walk`].
pub trait WalkVisitor {
    /// Called for each regular file.
    fn visit_file(&mut self, path: &Path, archive_name: &str) -> Result<()>;

    /// Called for each directory that has no visitable children.
    fn visit_empty_dir(&mut self, path: &Path, archive_name: &str) -> Result<()>;

    /// Called for entries that are neither files nor directories.
    ///
    /// Implementations should record a warning and return `Ok(())`; the
    /// walk continues either way.
    fn visit_unsupported(&mut self, path: &Path) -> Result<()>;
}

/// Walks a directory tree depth-first in file-name order.
///
/// # Examples
///
/// ```no_run
/// use jampzip_core::creation::walker::TreeWalker;
/// use std::path::Path;
///
/// let walker = TreeWalker::new(Path::new("./project"));
/// for entry in walker.entries() {
///     let entry = entry?;
///     println!("{:?} {}", entry.kind, entry.archive_name);
/// }
/// # Ok::<(), jampzip_core::ArchiveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TreeWalker<'a> {
    root: &'a Path,
    excluded: Vec<PathBuf>,
}

impl<'a> TreeWalker<'a> {
    /// Creates a walker rooted at `root`. The root itself is not visited.
    #[must_use]
    pub fn new(root: &'a Path) -> Self {
        Self {
            root,
            excluded: Vec::new(),
        }
    }

    /// Skips `path` silently, as if it did not exist.
    ///
    /// Used to keep the archive being written out of its own contents.
    #[must_use]
    pub fn with_excluded(mut self, path: impl Into<PathBuf>) -> Self {
        self.excluded.push(path.into());
        self
    }

    /// Returns an iterator over classified entries.
    ///
    /// # Errors
    ///
    /// Entries may error if a directory cannot be read or a path below the
    /// root is not valid UTF-8.
    pub fn entries(&self) -> impl Iterator<Item = Result<WalkEntry>> + '_ {
        WalkDir::new(self.root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| !self.is_excluded(entry.path()))
            .filter_map(move |entry| match entry {
                Ok(entry) => self.classify(&entry).transpose(),
                Err(e) => Some(Err(ArchiveError::from(e))),
            })
    }

    /// Drives `visitor` over every entry.
    ///
    /// # Errors
    ///
    /// Stops at the first traversal or visitor error.
    pub fn walk(&self, visitor: &mut dyn WalkVisitor) -> Result<()> {
        for entry in self.entries() {
            let entry = entry?;
            match entry.kind {
                EntryKind::File => visitor.visit_file(&entry.path, &entry.archive_name)?,
                EntryKind::EmptyDir => visitor.visit_empty_dir(&entry.path, &entry.archive_name)?,
                EntryKind::Unsupported => visitor.visit_unsupported(&entry.path)?,
            }
        }
        Ok(())
    }

    /// Returns `Ok(None)` for non-empty directories, which are descended
    /// into but not reported.
    fn classify(&self, entry: &walkdir::DirEntry) -> Result<Option<WalkEntry>> {
        let file_type = entry.file_type();
        let path = entry.path();

        let kind = if file_type.is_file() {
            EntryKind::File
        } else if file_type.is_dir() {
            if self.has_visitable_children(path)? {
                return Ok(None);
            }
            EntryKind::EmptyDir
        } else {
            EntryKind::Unsupported
        };

        Ok(Some(WalkEntry {
            path: path.to_path_buf(),
            archive_name: archive_name(path, self.root)?,
            kind,
        }))
    }

    /// Only files and directories count; a directory holding nothing but
    /// unsupported entries still gets a marker.
    fn has_visitable_children(&self, dir: &Path) -> Result<bool> {
        for child in fs::read_dir(dir)? {
            let child = child?;
            let file_type = child.file_type()?;
            if (file_type.is_file() || file_type.is_dir()) && !self.is_excluded(&child.path()) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.excluded.iter().any(|excluded| excluded == path)
    }
}

/// Computes the `/`-separated name of `path` relative to `root`.
///
/// ZIP requires forward slashes regardless of platform, so components are
/// joined explicitly rather than relying on the host separator.
///
/// # Errors
///
/// Returns an error if `path` is not below `root` or is not valid UTF-8.
pub fn archive_name(path: &Path, root: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).map_err(|_| {
        ArchiveError::Io(std::io::Error::other(format!(
            "{} is not inside {}",
            path.display(),
            root.display()
        )))
    })?;

    let mut parts = Vec::new();
    for component in relative.components() {
        if let Component::Normal(part) = component {
            let part = part.to_str().ok_or_else(|| {
                ArchiveError::Io(std::io::Error::other(format!(
                    "path is not valid UTF-8: {}",
                    path.display()
                )))
            })?;
            parts.push(part);
        }
    }

    Ok(parts.join("/"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn collect(walker: &TreeWalker<'_>) -> Vec<(String, EntryKind)> {
        walker
            .entries()
            .map(|e| {
                let e = e.unwrap();
                (e.archive_name, e.kind)
            })
            .collect()
    }

    #[test]
    fn test_walker_files_and_nested_dirs() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("b.txt"), "b").unwrap();
        fs::write(root.join("a.txt"), "a").unwrap();
        fs::create_dir_all(root.join("sub/deeper")).unwrap();
        fs::write(root.join("sub/deeper/c.txt"), "c").unwrap();

        let entries = collect(&TreeWalker::new(root));

        assert_eq!(
            entries,
            vec![
                ("a.txt".to_string(), EntryKind::File),
                ("b.txt".to_string(), EntryKind::File),
                ("sub/deeper/c.txt".to_string(), EntryKind::File),
            ]
        );
    }

    #[test]
    fn test_walker_empty_dirs_reported() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("empty")).unwrap();
        fs::create_dir_all(root.join("outer/inner_empty")).unwrap();

        let entries = collect(&TreeWalker::new(root));

        assert_eq!(
            entries,
            vec![
                ("empty".to_string(), EntryKind::EmptyDir),
                ("outer/inner_empty".to_string(), EntryKind::EmptyDir),
            ]
        );
    }

    #[test]
    fn test_walker_empty_root_yields_nothing() {
        let temp = TempDir::new().unwrap();
        assert!(collect(&TreeWalker::new(temp.path())).is_empty());
    }

    #[test]
    fn test_walker_excluded_path() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("keep.txt"), "keep").unwrap();
        fs::write(root.join("out.zip"), "partial").unwrap();
        fs::create_dir(root.join("only_archive")).unwrap();
        fs::write(root.join("only_archive/inner.zip"), "partial").unwrap();

        let walker = TreeWalker::new(root)
            .with_excluded(root.join("out.zip"))
            .with_excluded(root.join("only_archive/inner.zip"));
        let entries = collect(&walker);

        assert_eq!(
            entries,
            vec![
                ("keep.txt".to_string(), EntryKind::File),
                ("only_archive".to_string(), EntryKind::EmptyDir),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_walker_symlink_unsupported() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("target.txt"), "t").unwrap();
        std::os::unix::fs::symlink(root.join("target.txt"), root.join("link")).unwrap();

        let entries = collect(&TreeWalker::new(root));

        assert!(entries.contains(&("link".to_string(), EntryKind::Unsupported)));
        assert!(entries.contains(&("target.txt".to_string(), EntryKind::File)));
    }

    #[cfg(unix)]
    #[test]
    fn test_walker_does_not_follow_dir_symlink() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir(root.join("real")).unwrap();
        fs::write(root.join("real/file.txt"), "x").unwrap();
        std::os::unix::fs::symlink(root.join("real"), root.join("alias")).unwrap();

        let entries = collect(&TreeWalker::new(root));

        assert!(entries.contains(&("alias".to_string(), EntryKind::Unsupported)));
        assert!(!entries.iter().any(|(name, _)| name.starts_with("alias/")));
    }

    #[cfg(unix)]
    #[test]
    fn test_walker_dir_with_only_symlinks_is_empty() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("real.txt"), "r").unwrap();
        fs::create_dir(root.join("links")).unwrap();
        std::os::unix::fs::symlink(root.join("real.txt"), root.join("links/l")).unwrap();

        let entries = collect(&TreeWalker::new(root));

        assert_eq!(
            entries,
            vec![
                ("links".to_string(), EntryKind::EmptyDir),
                ("links/l".to_string(), EntryKind::Unsupported),
                ("real.txt".to_string(), EntryKind::File),
            ]
        );
    }

    #[test]
    fn test_walk_dispatches_to_visitor() {
        #[derive(Default)]
        struct Recorder {
            files: Vec<String>,
            empty_dirs: Vec<String>,
            unsupported: usize,
        }

        impl WalkVisitor for Recorder {
            fn visit_file(&mut self, _path: &Path, archive_name: &str) -> Result<()> {
                self.files.push(archive_name.to_string());
                Ok(())
            }

            fn visit_empty_dir(&mut self, _path: &Path, archive_name: &str) -> Result<()> {
                self.empty_dirs.push(archive_name.to_string());
                Ok(())
            }

            fn visit_unsupported(&mut self, _path: &Path) -> Result<()> {
                self.unsupported += 1;
                Ok(())
            }
        }

        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("file.txt"), "x").unwrap();
        fs::create_dir(root.join("nothing")).unwrap();

        let mut recorder = Recorder::default();
        TreeWalker::new(root).walk(&mut recorder).unwrap();

        assert_eq!(recorder.files, vec!["file.txt"]);
        assert_eq!(recorder.empty_dirs, vec!["nothing"]);
        assert_eq!(recorder.unsupported, 0);
    }

    #[test]
    fn test_archive_name_uses_forward_slashes() {
        let root = Path::new("/data/src");
        let path = root.join("a").join("b").join("c.txt");
        assert_eq!(archive_name(&path, root).unwrap(), "a/b/c.txt");
    }

    #[test]
    fn test_archive_name_outside_root() {
        assert!(archive_name(Path::new("/etc/passwd"), Path::new("/data")).is_err());
    }

    #[test]
    fn test_walker_missing_root_errors() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");
        let walker = TreeWalker::new(&missing);
        let results: Vec<_> = walker.entries().collect();
        assert_eq!(results.len(), 1);
        assert!(results[0].is_err());
    }
}
