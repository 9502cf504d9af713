//! Archive format detection and codec capabilities.

pub mod compression;
pub mod detect;

// Re-export main types for convenience
pub use compression::Capabilities;
pub use compression::CompressionCodec;
pub use detect::ArchiveType;
pub use detect::detect_format;
