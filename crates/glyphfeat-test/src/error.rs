//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building test fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Ascii-art grid contains a character other than '.', ' ', or '#'
    #[error("invalid fixture character {character:?} at line {line}")]
    InvalidFixtureChar { character: char, line: usize },

    /// Ascii-art grid is empty or has ragged lines
    #[error("invalid fixture shape: {0}")]
    InvalidFixtureShape(String),

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] glyphfeat_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
