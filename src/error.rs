//! Conversion errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Usage: markdown2html <input_file> <output_file>")]
    InvalidArgumentCount { found: usize },

    #[error("Missing {}", .path.display())]
    MissingInputFile { path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    InputReadFailure { path: PathBuf, source: io::Error },

    #[error("{} is too large: {len} bytes, the limit is {limit}", .path.display())]
    InputTooLarge { path: PathBuf, len: u64, limit: u64 },

    #[error("Failed to write {}: {source}", .path.display())]
    OutputWriteFailure { path: PathBuf, source: io::Error },
}

impl ConvertError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }
}
