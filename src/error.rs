//! Error types for cache building and word filtering

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the cache builder and the filter engine
#[derive(Error, Debug)]
pub enum WordError {
    /// The system dictionary file could not be found.
    #[error("dictionary words file not found: {0:?}")]
    SourceNotFound(PathBuf),

    /// A position mask does not have the same length as a scanned word.
    #[error("unexpected word length: {word}:{word_len} != {mask}:{mask_len}")]
    LengthMismatch {
        word: String,
        word_len: usize,
        mask: String,
        mask_len: usize,
    },

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WordError>;
