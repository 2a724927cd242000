//! Error types for glyphfeat-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Glyphfeat-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid grid dimensions
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Data length does not match the declared dimensions
    #[error("data size mismatch: expected {expected} values, got {actual}")]
    DataSizeMismatch { expected: usize, actual: usize },

    /// Pixel value outside the binary domain {0, 1}
    #[error("invalid pixel value {value} at ({x}, {y}); expected 0 or 1")]
    InvalidPixelValue { x: u32, y: u32, value: u8 },

    /// Rectangle extends beyond the grid bounds
    #[error(
        "rectangle ({x}, {y}) {rect_width}x{rect_height} exceeds grid {grid_width}x{grid_height}"
    )]
    RectOutOfBounds {
        x: u32,
        y: u32,
        rect_width: u32,
        rect_height: u32,
        grid_width: u32,
        grid_height: u32,
    },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for glyphfeat-core operations
pub type Result<T> = std::result::Result<T, Error>;
