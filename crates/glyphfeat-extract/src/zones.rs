//! Zone extractors
//!
//! Grid-partition pixel-density features. [`ZonesExtractor`] sums pixels
//! per fixed cell, optionally boosting pixels in the top band of the grid;
//! [`AdaptiveZonesExtractor`] additionally searches a window of shifted
//! cell positions and keeps the densest one.
//!
//! # References
//!
//! Adaptive zoning features:
//! <http://users.iit.demokritos.gr/~bgat/ICDAR2011_AdaptZoning.pdf>

use glyphfeat_core::{BinaryGrid, FeatureMatrix, FeatureVector, Rect};

use crate::error::{ExtractError, ExtractResult};
use crate::extractor::Extractor;

/// Zone pixel-density extractor
///
/// Iterates non-overlapping `Z x Z` cells in row-major order
/// (`height / Z` by `width / Z` cells, remainder rows/columns at the far
/// edges dropped) and emits the pixel sum of each cell.
///
/// When weighted, every set pixel whose absolute row index falls below
/// `height / (Z * 4)` contributes an extra `weight` on top of its count.
/// The band threshold is derived from the grid height and zone size, not
/// from the pixel's position within its cell, so only cells touching the
/// top band are affected.
#[derive(Debug, Clone)]
pub struct ZonesExtractor {
    zones: u32,
    weighted: bool,
    weight: f32,
}

impl ZonesExtractor {
    /// Create an unweighted zones extractor with `Z x Z` cells.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::InvalidConfig`] if `zones` is 0.
    pub fn new(zones: u32) -> ExtractResult<Self> {
        if zones == 0 {
            return Err(ExtractError::InvalidConfig(
                "zones must be positive".to_string(),
            ));
        }
        Ok(ZonesExtractor {
            zones,
            weighted: false,
            weight: 1.0,
        })
    }

    /// Create a weighted zones extractor.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::InvalidConfig`] if `zones` is 0 or
    /// `weight < 1.0`.
    pub fn weighted(zones: u32, weight: f32) -> ExtractResult<Self> {
        if weight < 1.0 {
            return Err(ExtractError::InvalidConfig(format!(
                "weight must be >= 1.0, got {weight}"
            )));
        }
        let mut extractor = Self::new(zones)?;
        extractor.weighted = true;
        extractor.weight = weight;
        Ok(extractor)
    }

    /// Zone cell size.
    pub fn zones(&self) -> u32 {
        self.zones
    }

    /// Output vector length for a given grid size.
    pub fn feature_len(&self, width: u32, height: u32) -> usize {
        ((height / self.zones) as usize) * ((width / self.zones) as usize)
    }

    fn transform_grid(&self, grid: &BinaryGrid) -> FeatureVector {
        let z = self.zones;
        let cells_y = grid.height() / z;
        let cells_x = grid.width() / z;
        // weighting band: absolute row index threshold
        let band = grid.height() / (z * 4);

        let mut features = FeatureVector::with_capacity((cells_y as usize) * (cells_x as usize));
        for i in 0..cells_y {
            for j in 0..cells_x {
                let mut value = 0.0f32;
                for y in i * z..(i + 1) * z {
                    let row = grid.row(y);
                    for x in j * z..(j + 1) * z {
                        let v = row[x as usize];
                        value += f32::from(v);
                        if self.weighted && y < band && v == 1 {
                            value += self.weight;
                        }
                    }
                }
                features.push(value);
            }
        }
        features
    }
}

impl Extractor for ZonesExtractor {
    fn transform(&self, dataset: &[BinaryGrid]) -> ExtractResult<FeatureMatrix> {
        let mut matrix = FeatureMatrix::with_capacity(dataset.len());
        for grid in dataset {
            matrix.push(self.transform_grid(grid));
        }
        Ok(matrix)
    }
}

/// Adaptive zone pixel-density extractor
///
/// Same cell enumeration as [`ZonesExtractor`], but each cell's value is
/// the best of `(2R + 1)^2` candidate windows obtained by shifting the
/// cell bounds by every offset in `[-R, R] x [-R, R]`. A shift that would
/// push the window's rows outside `[0, height - 1]` is canceled on the row
/// axis only, independently of the column axis (and vice versa), so some
/// candidates degenerate to the unshifted window; they still participate
/// in the maximum.
#[derive(Debug, Clone)]
pub struct AdaptiveZonesExtractor {
    zones: u32,
    adj_range: u32,
}

impl AdaptiveZonesExtractor {
    /// Create an adaptive zones extractor.
    ///
    /// `adj_range` 0 is valid: the search degenerates to the single
    /// unshifted window and the output equals the unweighted
    /// [`ZonesExtractor`] output.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::InvalidConfig`] if `zones` is 0.
    pub fn new(zones: u32, adj_range: u32) -> ExtractResult<Self> {
        if zones == 0 {
            return Err(ExtractError::InvalidConfig(
                "zones must be positive".to_string(),
            ));
        }
        Ok(AdaptiveZonesExtractor { zones, adj_range })
    }

    /// Zone cell size.
    pub fn zones(&self) -> u32 {
        self.zones
    }

    /// Half-width of the shift search window.
    pub fn adj_range(&self) -> u32 {
        self.adj_range
    }

    /// Output vector length for a given grid size.
    pub fn feature_len(&self, width: u32, height: u32) -> usize {
        ((height / self.zones) as usize) * ((width / self.zones) as usize)
    }

    /// Clamp one axis of a candidate window.
    ///
    /// If the shifted bounds `[from, to)` leave `[0, dim - 1]`, the shift
    /// is canceled on this axis; the other axis is handled separately.
    fn clamp_axis(from: i64, to: i64, offset: i64, dim: i64) -> (i64, i64) {
        if from < 0 || to > dim - 1 {
            (from - offset, to - offset)
        } else {
            (from, to)
        }
    }

    fn transform_grid(&self, grid: &BinaryGrid) -> ExtractResult<FeatureVector> {
        let z = i64::from(self.zones);
        let r = i64::from(self.adj_range);
        let height = i64::from(grid.height());
        let width = i64::from(grid.width());
        let cells_y = grid.height() / self.zones;
        let cells_x = grid.width() / self.zones;

        let mut features = FeatureVector::with_capacity((cells_y as usize) * (cells_x as usize));
        for i in 0..i64::from(cells_y) {
            for j in 0..i64::from(cells_x) {
                let mut best = 0u64;
                for row_off in -r..=r {
                    for col_off in -r..=r {
                        let (from_y, to_y) =
                            Self::clamp_axis(i * z + row_off, (i + 1) * z + row_off, row_off, height);
                        let (from_x, to_x) =
                            Self::clamp_axis(j * z + col_off, (j + 1) * z + col_off, col_off, width);

                        // after clamping the window lies within the grid
                        let window = Rect::new(
                            from_x as u32,
                            from_y as u32,
                            (to_x - from_x) as u32,
                            (to_y - from_y) as u32,
                        )?;
                        best = best.max(grid.count_in_rect(&window));
                    }
                }
                features.push(best as f32);
            }
        }
        Ok(features)
    }
}

impl Extractor for AdaptiveZonesExtractor {
    fn transform(&self, dataset: &[BinaryGrid]) -> ExtractResult<FeatureMatrix> {
        let mut matrix = FeatureMatrix::with_capacity(dataset.len());
        for grid in dataset {
            matrix.push(self.transform_grid(grid)?);
        }
        Ok(matrix)
    }
}
