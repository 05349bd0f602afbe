#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`IoError`] variants for file access and TGA encoding/decoding
/// failures.
pub mod error;

/// TGA image encoding and decoding.
///
/// Read and write the uncompressed 24-bit truecolor TGA subset with the
/// legacy 18-byte header and bottom-left origin.
pub mod tga;

pub use crate::error::IoError;
