//! Glyphfeat - Glyph feature extraction for Rust
//!
//! Converts binary pixel grids representing character glyphs into
//! fixed-length numeric feature vectors for downstream classifiers.
//!
//! # Overview
//!
//! Four extractor families are provided, all implementing the
//! [`Extractor`] capability:
//!
//! - Projections: cumulative directional pixel counts
//! - Subdivisions: recursive balance-point quadrant splitting
//! - Zones: fixed-cell pixel densities, optionally weighted
//! - Adaptive zones: per-cell best-of-window density search
//!
//! Grids are produced upstream (an external normalization step resizes and
//! binarizes source images); feature matrices are handed downstream to a
//! classifier along with a caller-supplied label sequence.
//!
//! # Example
//!
//! ```
//! use glyphfeat::{BinaryGrid, Extractor, ZonesExtractor};
//!
//! let glyph = BinaryGrid::from_rows(&[&[1, 1], &[1, 1]]).unwrap();
//! let extractor = ZonesExtractor::new(2).unwrap();
//! let features = extractor.transform(&[glyph]).unwrap();
//! assert_eq!(features.get(0).unwrap().as_slice(), &[4.0]);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use glyphfeat_core::*;

// Re-export the extraction surface
pub use glyphfeat_extract::{
    AdaptiveZonesExtractor, ExtractError, ExtractResult, Extractor, ProjectionsExtractor,
    SubdivisionsExtractor, ZonesExtractor, balance,
};
