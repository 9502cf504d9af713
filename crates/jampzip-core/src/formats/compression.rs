//! Compression codec support for stream and tarball formats.
//!
//! Codecs are compiled in through the `gzip` and `bzip2` cargo features.
//! [`Capabilities`] records which of them this build can use, and is passed
//! to extraction explicitly so a caller (or a test) can restrict it further.

use crate::ArchiveError;
use crate::Result;

/// Compression codec wrapping a stream or tarball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompressionCodec {
    /// Gzip compression (deflate algorithm, zlib-compatible).
    Gzip,

    /// Bzip2 compression (Burrows-Wheeler algorithm).
    Bzip2,
}

impl CompressionCodec {
    /// Returns a human-readable name for this codec.
    ///
    /// # Examples
    ///
    /// ```
    /// use jampzip_core::formats::compression::CompressionCodec;
    ///
    /// assert_eq!(CompressionCodec::Gzip.name(), "gzip");
    /// assert_eq!(CompressionCodec::Bzip2.name(), "bzip2");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gzip => "gzip",
            Self::Bzip2 => "bzip2",
        }
    }

    /// Returns the name of the library capability this codec relies on,
    /// as reported in `MissingDependency` errors.
    #[must_use]
    pub const fn capability(self) -> &'static str {
        match self {
            Self::Gzip => "zlib",
            Self::Bzip2 => "bzip2",
        }
    }
}

/// Set of codecs available to the extractor.
///
/// # Examples
///
/// ```
/// use jampzip_core::formats::compression::{Capabilities, CompressionCodec};
///
/// let caps = Capabilities::none().with_codec(CompressionCodec::Gzip);
/// assert!(caps.supports(CompressionCodec::Gzip));
/// assert!(!caps.supports(CompressionCodec::Bzip2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    gzip: bool,
    bzip2: bool,
}

impl Capabilities {
    /// Returns the codecs compiled into this build.
    #[must_use]
    pub const fn detect() -> Self {
        Self {
            gzip: cfg!(feature = "gzip"),
            bzip2: cfg!(feature = "bzip2"),
        }
    }

    /// Returns a capability set with no codecs.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            gzip: false,
            bzip2: false,
        }
    }

    /// Adds `codec` to the set.
    ///
    /// Enabling a codec that was not compiled in makes extraction fail later
    /// with `MissingDependency` anyway.
    #[must_use]
    pub const fn with_codec(mut self, codec: CompressionCodec) -> Self {
        match codec {
            CompressionCodec::Gzip => self.gzip = true,
            CompressionCodec::Bzip2 => self.bzip2 = true,
        }
        self
    }

    /// Removes `codec` from the set.
    #[must_use]
    pub const fn without_codec(mut self, codec: CompressionCodec) -> Self {
        match codec {
            CompressionCodec::Gzip => self.gzip = false,
            CompressionCodec::Bzip2 => self.bzip2 = false,
        }
        self
    }

    /// Returns `true` if `codec` is available.
    #[must_use]
    pub const fn supports(self, codec: CompressionCodec) -> bool {
        match codec {
            CompressionCodec::Gzip => self.gzip,
            CompressionCodec::Bzip2 => self.bzip2,
        }
    }

    /// Fails with `MissingDependency` unless `codec` is available.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::MissingDependency` naming the codec's
    /// capability.
    pub fn require(self, codec: CompressionCodec) -> Result<()> {
        if self.supports(codec) {
            Ok(())
        } else {
            Err(ArchiveError::MissingDependency {
                capability: codec.capability(),
            })
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::detect()
    }
}
