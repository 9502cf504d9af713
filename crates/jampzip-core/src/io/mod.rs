//! I/O utilities shared by creation and extraction.

pub mod copy;
pub mod partial;

// Re-export main types for convenience
pub use copy::STREAM_CHUNK_SIZE;
pub use copy::copy_chunked;
pub use partial::PartialOutput;
