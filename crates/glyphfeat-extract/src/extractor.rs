//! Extractor - The feature extraction capability
//!
//! Every extractor turns an ordered dataset of binary grids into a
//! [`FeatureMatrix`] with one row per grid, in dataset order. The trait
//! mirrors the fit/transform shape common to feature pipelines:
//!
//! - [`Extractor::fit`] prepares corpus statistics. None of the shipped
//!   extractors are stateful beyond their configuration, so the default
//!   implementation is a no-op; the hook exists for future extractors
//!   that need a pass over the corpus before transforming it.
//! - [`Extractor::transform`] is a pure function of configuration and
//!   input. It never mutates the input grids, and repeat calls on the
//!   same dataset produce bit-identical matrices.

use glyphfeat_core::{BinaryGrid, FeatureMatrix};

use crate::error::ExtractResult;

/// Feature extraction capability
///
/// # Examples
///
/// ```
/// use glyphfeat_core::BinaryGrid;
/// use glyphfeat_extract::{Extractor, ProjectionsExtractor};
///
/// let grid = BinaryGrid::from_rows(&[&[1, 0], &[0, 1]]).unwrap();
/// let extractor = ProjectionsExtractor::new(1).unwrap();
/// let matrix = extractor.transform(&[grid]).unwrap();
/// assert_eq!(matrix.len(), 1);
/// assert_eq!(matrix.get(0).unwrap().as_slice(), &[2.0, 2.0]);
/// ```
pub trait Extractor {
    /// Prepare corpus statistics from the dataset.
    ///
    /// Default implementation is a no-op.
    fn fit(&mut self, dataset: &[BinaryGrid]) -> ExtractResult<()> {
        let _ = dataset;
        Ok(())
    }

    /// Extract one feature vector per grid, preserving dataset order.
    ///
    /// An empty dataset yields an empty matrix; all vectors from a single
    /// call have identical length, fixed by the extractor configuration.
    fn transform(&self, dataset: &[BinaryGrid]) -> ExtractResult<FeatureMatrix>;

    /// Fit to the dataset, then transform it.
    fn fit_transform(&mut self, dataset: &[BinaryGrid]) -> ExtractResult<FeatureMatrix> {
        self.fit(dataset)?;
        self.transform(dataset)
    }
}
