//! Zip archive creation.
//!
//! Walks a source directory depth-first and writes every regular file and
//! every empty directory into a new zip archive, optionally encrypting the
//! files with AES-256.

pub mod config;
pub mod creator;
pub mod report;
pub mod walker;
pub mod zip;

// Re-exports for public API
pub use config::CreationConfig;
pub use creator::ArchiveCreator;
pub use creator::normalize_zip_name;
pub use report::CreationReport;
pub use walker::EntryKind;
pub use walker::TreeWalker;
pub use walker::WalkEntry;
pub use walker::WalkVisitor;
