//! Fixed-size chunked copying for stream decompression.

use std::io::ErrorKind;
use std::io::Read;
use std::io::Write;
use std::io::{self};

/// Chunk size used when streaming a decompressed payload to disk.
pub const STREAM_CHUNK_SIZE: usize = 4096;

/// Copies `reader` into `writer` in [`STREAM_CHUNK_SIZE`] chunks until
/// end-of-stream, returning the number of bytes copied.
///
/// Decompressor errors surface as soon as the offending chunk is read.
///
/// # Errors
///
/// Returns the first read or write error, except `Interrupted`, which is
/// retried.
///
/// # Examples
///
/// ```
/// use jampzip_core::io::copy_chunked;
///
/// let mut input: &[u8] = b"hello world";
/// let mut output = Vec::new();
/// assert_eq!(copy_chunked(&mut input, &mut output)?, 11);
/// assert_eq!(output, b"hello world");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn copy_chunked<R: Read + ?Sized, W: Write + ?Sized>(
    reader: &mut R,
    writer: &mut W,
) -> io::Result<u64> {
    let mut buffer = [0u8; STREAM_CHUNK_SIZE];
    let mut total = 0u64;

    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        writer.write_all(&buffer[..read])?;
        total += read as u64;
    }

    writer.flush()?;
    Ok(total)
}
