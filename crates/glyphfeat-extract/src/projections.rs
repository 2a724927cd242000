//! Projections extractor
//!
//! Cumulative directional pixel counts at nested boundaries. For each of
//! `P` projection levels the extractor counts the pixels in a growing
//! horizontal band and in a growing vertical band, producing a vector of
//! `2 * P` counts per grid.

use glyphfeat_core::{BinaryGrid, FeatureMatrix, FeatureVector};

use crate::error::{ExtractError, ExtractResult};
use crate::extractor::Extractor;

/// Cumulative projection feature extractor
///
/// For `k = 1..=P` the boundary is `b_k = k * height / P` (integer floor).
/// The horizontal count at level `k` sums all pixels in rows `[0, b_k)`;
/// the vertical count sums all pixels in columns `[0, b_k)`. Both counts
/// reuse the row-derived boundary: on square grids (the normal case after
/// upstream normalization) this projects along both axes symmetrically,
/// and on non-square grids the column range is clamped to the grid width.
///
/// Output layout per grid: `[h_1, v_1, h_2, v_2, ..., h_P, v_P]`.
#[derive(Debug, Clone)]
pub struct ProjectionsExtractor {
    projections: u32,
}

impl ProjectionsExtractor {
    /// Create a projections extractor.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::InvalidConfig`] if `projections` is 0.
    pub fn new(projections: u32) -> ExtractResult<Self> {
        if projections == 0 {
            return Err(ExtractError::InvalidConfig(
                "projections must be positive".to_string(),
            ));
        }
        Ok(ProjectionsExtractor { projections })
    }

    /// Number of projection levels.
    pub fn projections(&self) -> u32 {
        self.projections
    }

    /// Fixed output vector length: two counts per level.
    pub fn feature_len(&self) -> usize {
        2 * self.projections as usize
    }

    fn transform_grid(&self, grid: &BinaryGrid) -> FeatureVector {
        let height = u64::from(grid.height());
        let row_counts = grid.count_by_row();
        let col_counts = grid.count_by_column();

        let mut features = FeatureVector::with_capacity(self.feature_len());
        for k in 1..=u64::from(self.projections) {
            let boundary = (k * height / u64::from(self.projections)) as usize;

            let horizontal: u64 = row_counts[..boundary].iter().map(|&c| u64::from(c)).sum();
            let vertical: u64 = col_counts[..boundary.min(col_counts.len())]
                .iter()
                .map(|&c| u64::from(c))
                .sum();

            features.push(horizontal as f32);
            features.push(vertical as f32);
        }
        features
    }
}

impl Extractor for ProjectionsExtractor {
    fn transform(&self, dataset: &[BinaryGrid]) -> ExtractResult<FeatureMatrix> {
        let mut matrix = FeatureMatrix::with_capacity(dataset.len());
        for grid in dataset {
            matrix.push(self.transform_grid(grid));
        }
        Ok(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_projections() {
        assert!(ProjectionsExtractor::new(0).is_err());
    }

    #[test]
    fn test_single_projection_is_grid_total() {
        let grid = BinaryGrid::from_rows(&[&[1, 0, 1], &[0, 1, 0], &[1, 1, 1]]).unwrap();
        let extractor = ProjectionsExtractor::new(1).unwrap();
        let matrix = extractor.transform(std::slice::from_ref(&grid)).unwrap();

        let row = matrix.get(0).unwrap();
        assert_eq!(row.len(), 2);
        assert_eq!(row.as_slice(), &[6.0, 6.0]);
    }

    #[test]
    fn test_nested_boundaries() {
        // 4x4, top half solid
        let grid = BinaryGrid::from_rows(&[
            &[1, 1, 1, 1],
            &[1, 1, 1, 1],
            &[0, 0, 0, 0],
            &[0, 0, 0, 0],
        ])
        .unwrap();
        let extractor = ProjectionsExtractor::new(2).unwrap();
        let matrix = extractor.transform(std::slice::from_ref(&grid)).unwrap();

        // k=1: boundary 2 -> rows 0..2 hold 8 pixels, columns 0..2 hold 4
        // k=2: boundary 4 -> whole grid on both axes
        let row = matrix.get(0).unwrap();
        assert_eq!(row.as_slice(), &[8.0, 4.0, 8.0, 8.0]);
    }

    #[test]
    fn test_boundary_rounds_down() {
        // height 5, P=2: boundaries floor(5/2)=2 and 5
        let grid = BinaryGrid::from_rows(&[&[1; 5], &[1; 5], &[1; 5], &[1; 5], &[1; 5]]).unwrap();
        let extractor = ProjectionsExtractor::new(2).unwrap();
        let matrix = extractor.transform(std::slice::from_ref(&grid)).unwrap();

        let row = matrix.get(0).unwrap();
        assert_eq!(row.as_slice(), &[10.0, 10.0, 25.0, 25.0]);
    }

    #[test]
    fn test_tall_grid_clamps_vertical_range() {
        // 3 wide, 6 tall, P=3: boundaries 2, 4, 6. From k=2 on, the
        // row-derived boundary exceeds the width and the column range
        // saturates at the full grid total.
        let grid = BinaryGrid::from_rows(&[
            &[1, 0, 0],
            &[1, 1, 0],
            &[0, 0, 0],
            &[0, 1, 1],
            &[0, 0, 1],
            &[1, 1, 1],
        ])
        .unwrap();
        let extractor = ProjectionsExtractor::new(3).unwrap();
        let matrix = extractor.transform(std::slice::from_ref(&grid)).unwrap();

        // rows: [1, 2, 0, 2, 1, 3], columns: [3, 3, 3]
        let row = matrix.get(0).unwrap();
        assert_eq!(row.as_slice(), &[3.0, 6.0, 5.0, 9.0, 9.0, 9.0]);
    }

    #[test]
    fn test_empty_dataset() {
        let extractor = ProjectionsExtractor::new(3).unwrap();
        let matrix = extractor.transform(&[]).unwrap();
        assert!(matrix.is_empty());
    }
}
