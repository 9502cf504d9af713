//! Single-stream decompression into one output file.
//!
//! Used for plain `.gz` files and, for now, `.tar.bz2` archives, where only
//! the inner tarball is written.

use crate::ArchiveError;
use crate::Result;
use crate::io::PartialOutput;
use crate::io::copy_chunked;
use crate::report::ExtractionReport;
use std::fs::File;
use std::io::BufReader;
use std::io::ErrorKind;
use std::io::Read;
use std::path::Path;

/// Decompresses `source` into a new file at `target`.
///
/// The output file is created before the input stream is opened, and is
/// removed again if opening or decoding the stream fails.
fn decompress_to_file<D, F>(source: &Path, target: &Path, open_decoder: F) -> Result<u64>
where
    D: Read,
    F: FnOnce(BufReader<File>) -> D,
{
    let (output, mut file) = PartialOutput::create_new(target)?;

    let input = File::open(source).map_err(|e| {
        ArchiveError::LibraryOperation(format!("unable to read {}: {e}", source.display()))
    })?;
    let mut decoder = open_decoder(BufReader::new(input));

    let written = copy_chunked(&mut decoder, &mut file).map_err(|e| match e.kind() {
        ErrorKind::InvalidData | ErrorKind::InvalidInput | ErrorKind::UnexpectedEof => {
            ArchiveError::LibraryOperation(format!("unable to read {}: {e}", source.display()))
        }
        _ => ArchiveError::Io(std::io::Error::new(
            e.kind(),
            format!("unable to write {}: {e}", output.path().display()),
        )),
    })?;

    output.commit(&file)?;
    Ok(written)
}

/// Decompresses a gzip file, including multi-member streams.
#[cfg(feature = "gzip")]
pub fn extract_gz(source: &Path, target: &Path, report: &mut ExtractionReport) -> Result<()> {
    let written = decompress_to_file(source, target, flate2::read::MultiGzDecoder::new)?;
    report.files_extracted += 1;
    report.bytes_written += written;
    Ok(())
}

/// Gzip support was not compiled in.
#[cfg(not(feature = "gzip"))]
pub fn extract_gz(_source: &Path, _target: &Path, _report: &mut ExtractionReport) -> Result<()> {
    Err(ArchiveError::MissingDependency { capability: "zlib" })
}

/// Decompresses a `.tar.bz2` archive into its inner tarball.
#[cfg(feature = "bzip2")]
pub fn extract_tar_bz2(
    source: &Path,
    target: &Path,
    report: &mut ExtractionReport,
) -> Result<()> {
    let written = decompress_to_file(source, target, bzip2::read::MultiBzDecoder::new)?;
    report.files_extracted += 1;
    report.bytes_written += written;
    Ok(())
}

/// Bzip2 support was not compiled in.
#[cfg(not(feature = "bzip2"))]
pub fn extract_tar_bz2(
    _source: &Path,
    _target: &Path,
    _report: &mut ExtractionReport,
) -> Result<()> {
    Err(ArchiveError::MissingDependency {
        capability: "bzip2",
    })
}
