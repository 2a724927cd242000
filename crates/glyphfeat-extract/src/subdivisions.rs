//! Subdivisions extractor
//!
//! Recursive quadrant splitting guided by a balance-point search. At each
//! level the grid is split at the column and row that best balance the
//! pixel mass, and the four quadrants are recursed into. The leaves record
//! the local split coordinates, giving a fixed-length encoding of the
//! glyph's mass distribution.
//!
//! # References
//!
//! Subdivision features for handwritten character recognition:
//! <http://users.iit.demokritos.gr/~bgat/PRHandRec2010.pdf>

use glyphfeat_core::{BinaryGrid, FeatureMatrix, FeatureVector, Rect};

use crate::balance::{find_balance_point, upsample_density};
use crate::error::ExtractResult;
use crate::extractor::Extractor;

/// Minimum grid extent that can still be split.
///
/// Below this on either axis the subtree is truncated and padded with
/// zero pairs.
const MIN_SPLIT_DIM: u32 = 3;

/// Result of splitting a grid at its balance point
#[derive(Debug)]
struct Split {
    /// Split column in half-resolution pixel coordinates
    x0: u32,
    /// Split row in half-resolution pixel coordinates
    y0: u32,
    /// The four quadrants: left-up, right-up, left-down, right-down
    quads: [BinaryGrid; 4],
}

/// Recursive subdivision feature extractor
///
/// Configuration is a single `granularity` G fixing the output length to
/// exactly `2 * 4^G` per grid regardless of content: every node of the
/// depth-G quad tree contributes `4^remaining` leaf pairs, whether it is
/// realized or truncated.
///
/// # Examples
///
/// ```
/// use glyphfeat_core::BinaryGrid;
/// use glyphfeat_extract::{Extractor, SubdivisionsExtractor};
///
/// let grid = BinaryGrid::new(32, 32).unwrap();
/// let extractor = SubdivisionsExtractor::new(2);
/// let matrix = extractor.transform(&[grid]).unwrap();
/// assert_eq!(matrix.get(0).unwrap().len(), 2 * 4usize.pow(2));
/// ```
#[derive(Debug, Clone)]
pub struct SubdivisionsExtractor {
    granularity: u32,
}

impl SubdivisionsExtractor {
    /// Create a subdivisions extractor with the given recursion depth.
    pub fn new(granularity: u32) -> Self {
        SubdivisionsExtractor { granularity }
    }

    /// Recursion depth bound.
    pub fn granularity(&self) -> u32 {
        self.granularity
    }

    /// Fixed output vector length: `2 * 4^granularity`.
    pub fn feature_len(&self) -> usize {
        2 * 4usize.pow(self.granularity)
    }

    /// Find the vertical split coordinate in doubled resolution.
    ///
    /// The per-column density is upsampled to twice the width so the
    /// balance point can land between two pixel columns; the returned
    /// coordinate is the balance index plus one.
    fn find_vertical_point(grid: &BinaryGrid) -> ExtractResult<usize> {
        let v1 = upsample_density(&grid.count_by_column());
        Ok(find_balance_point(&v1)? + 1)
    }

    /// Find the horizontal split coordinate in doubled resolution.
    fn find_horizontal_point(grid: &BinaryGrid) -> ExtractResult<usize> {
        let v1 = upsample_density(&grid.count_by_row());
        Ok(find_balance_point(&v1)? + 1)
    }

    /// Split a grid into four quadrants at its balance point.
    ///
    /// The doubled-resolution coordinates `xq`/`yq` map to pixel
    /// coordinates `x0 = xq / 2`, `y0 = yq / 2`. Parity decides the
    /// overlap: an even split value starts the far side one pixel early,
    /// duplicating that column/row into both neighboring quadrants; an odd
    /// value splits cleanly at `x0`/`y0`.
    ///
    /// Requires `width >= 3` and `height >= 3`.
    fn split(grid: &BinaryGrid) -> ExtractResult<Split> {
        let width = grid.width();
        let height = grid.height();

        let xq = Self::find_vertical_point(grid)?;
        let x0 = (xq / 2) as u32;
        let yq = Self::find_horizontal_point(grid)?;
        let y0 = (yq / 2) as u32;

        // balance indices are interior, so 1 <= x0 <= width - 1 and the
        // even-parity backstep never underflows
        let right_x = if xq % 2 == 0 { x0 - 1 } else { x0 };
        let down_y = if yq % 2 == 0 { y0 - 1 } else { y0 };

        let left_up = grid.clip(&Rect::new(0, 0, x0, y0)?)?;
        let right_up = grid.clip(&Rect::new(right_x, 0, width - right_x, y0)?)?;
        let left_down = grid.clip(&Rect::new(0, down_y, x0, height - down_y)?)?;
        let right_down = grid.clip(&Rect::new(right_x, down_y, width - right_x, height - down_y)?)?;

        Ok(Split {
            x0,
            y0,
            quads: [left_up, right_up, left_down, right_down],
        })
    }

    /// Recursive subdivision with an explicit accumulator.
    ///
    /// Appends exactly `2 * 4^granularity` values for the subtree rooted at
    /// `grid`: truncated subtrees pad with zero pairs, leaves append the
    /// local split coordinates. Quadrant order is fixed (left-up, right-up,
    /// left-down, right-down) and part of the feature layout.
    fn rec_sub_div(
        &self,
        grid: &BinaryGrid,
        granularity: u32,
        features: &mut FeatureVector,
    ) -> ExtractResult<()> {
        if grid.height() < MIN_SPLIT_DIM || grid.width() < MIN_SPLIT_DIM {
            for _ in 0..4usize.pow(granularity) {
                features.push(0.0);
                features.push(0.0);
            }
            return Ok(());
        }

        let split = Self::split(grid)?;

        if granularity > 0 {
            for quad in &split.quads {
                self.rec_sub_div(quad, granularity - 1, features)?;
            }
        } else {
            features.push(split.x0 as f32);
            features.push(split.y0 as f32);
        }
        Ok(())
    }
}

impl Extractor for SubdivisionsExtractor {
    fn transform(&self, dataset: &[BinaryGrid]) -> ExtractResult<FeatureMatrix> {
        let mut matrix = FeatureMatrix::with_capacity(dataset.len());
        for grid in dataset {
            let mut features = FeatureVector::with_capacity(self.feature_len());
            self.rec_sub_div(grid, self.granularity, &mut features)?;
            matrix.push(features);
        }
        Ok(matrix)
    }
}
