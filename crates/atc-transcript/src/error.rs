//! Error types for transcript rendering.

use thiserror::Error;

/// Anything that can go wrong while writing output.
#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type TranscriptResult<T> = Result<T, TranscriptError>;
