//! Error types for glyphfeat-extract

use thiserror::Error;

/// Errors that can occur during feature extraction
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] glyphfeat_core::Error),

    /// Invalid extractor configuration
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Sequence too short for the balance-point search
    #[error("sequence too short for balance search: length {len}, minimum {min}")]
    SequenceTooShort { len: usize, min: usize },
}

/// Result type for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;
