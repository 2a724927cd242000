//! glyphfeat-extract - Feature extraction for binary glyph grids
//!
//! This crate turns binary pixel grids into fixed-length numeric feature
//! vectors for downstream classification. Four extractor families are
//! provided:
//!
//! - [`ProjectionsExtractor`]: cumulative directional pixel counts at
//!   nested boundaries
//! - [`SubdivisionsExtractor`]: recursive quadrant splitting guided by a
//!   balance-point search
//! - [`ZonesExtractor`]: fixed-cell pixel densities, optionally weighted
//! - [`AdaptiveZonesExtractor`]: per-cell best-of-window density search
//!
//! All four implement the [`Extractor`] capability, and all are pure:
//! configuration is fixed at construction, input grids are never mutated,
//! and repeat transforms are bit-identical.
//!
//! # Quick Start
//!
//! ```
//! use glyphfeat_core::BinaryGrid;
//! use glyphfeat_extract::{Extractor, SubdivisionsExtractor};
//!
//! let glyph = BinaryGrid::new(32, 32).unwrap();
//! let extractor = SubdivisionsExtractor::new(2);
//! let features = extractor.transform(&[glyph]).unwrap();
//! assert_eq!(features.uniform_len(), Some(32));
//! ```

pub mod balance;
mod error;
mod extractor;
mod projections;
mod subdivisions;
mod zones;

pub use error::{ExtractError, ExtractResult};
pub use extractor::Extractor;
pub use projections::ProjectionsExtractor;
pub use subdivisions::SubdivisionsExtractor;
pub use zones::{AdaptiveZonesExtractor, ZonesExtractor};

// Re-export core for convenience
pub use glyphfeat_core;
