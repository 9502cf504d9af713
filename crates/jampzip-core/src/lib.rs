//! Zip creation and multi-format archive extraction.
//!
//! `jampzip-core` creates zip archives from a directory tree (optionally
//! AES-256 encrypted) and extracts `.tar.gz`, `.tar.bz2`, `.gz` and `.zip`
//! archives next to themselves, deriving the target name from the archive
//! name.
//!
//! # Examples
//!
//! ```no_run
//! use jampzip_core::extract_archive;
//! use jampzip_core::extraction::ExtractOptions;
//! use jampzip_core::secret::NoSecret;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let options = ExtractOptions {
//!     use_password: false,
//!     delete_source: true,
//! };
//! let report = extract_archive("release.tar.gz", &options, &mut NoSecret)?;
//! println!("Extracted into {}", report.target.display());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod creation;
pub mod error;
pub mod extraction;
pub mod formats;
pub mod io;
pub mod report;
pub mod secret;

// Re-export main API types
pub use api::create_zip;
pub use api::extract_archive;
pub use creation::ArchiveCreator;
pub use creation::CreationConfig;
pub use creation::CreationReport;
pub use error::ArchiveError;
pub use error::Result;
pub use extraction::ExtractOptions;
pub use extraction::ExtractionPlan;
pub use formats::ArchiveType;
pub use formats::Capabilities;
pub use report::ExtractionReport;
pub use report::ZipStatus;
pub use secret::NoSecret;
pub use secret::SecretPrompt;
pub use secret::StaticSecret;
