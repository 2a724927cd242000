//! Glyphfeat Core - Basic data structures for glyph feature extraction
//!
//! This crate provides the fundamental data structures used throughout
//! the glyphfeat feature-extraction library:
//!
//! - [`BinaryGrid`] - Binary pixel grid representing a glyph
//! - [`Rect`] - Rectangular region of a grid
//! - [`FeatureVector`] - Numeric feature array for a single grid
//! - [`FeatureMatrix`] - Ordered collection of feature vectors
//!
//! A dataset is simply an ordered `&[BinaryGrid]`; extraction preserves
//! dataset order 1:1 in the output matrix.

pub mod error;
pub mod featvec;
pub mod grid;
pub mod matrix;
pub mod rect;

pub use error::{Error, Result};
pub use featvec::FeatureVector;
pub use grid::BinaryGrid;
pub use matrix::FeatureMatrix;
pub use rect::Rect;
