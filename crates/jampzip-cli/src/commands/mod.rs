//! Subcommand implementations.

pub mod completion;
pub mod unzip;
pub mod zip;
