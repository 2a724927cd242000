//! Projections extractor regression test.
//!
//! Checks the cumulative boundary arithmetic against hand-computed values
//! on a small glyph, the single-projection degenerate case, and layout
//! invariants on seeded random grids.

use glyphfeat_core::BinaryGrid;
use glyphfeat_extract::{Extractor, ProjectionsExtractor};
use glyphfeat_test::{RegParams, grid_from_ascii, random_grid};

#[test]
fn projections_reg() {
    let mut rp = RegParams::new("projections");

    // ------------------------------------------------------------------
    // Test 1: single projection equals the full-grid totals
    // ------------------------------------------------------------------
    let grid = grid_from_ascii(&[".#.", "###", ".#."]).unwrap();
    let extractor = ProjectionsExtractor::new(1).unwrap();
    let matrix = extractor.transform(std::slice::from_ref(&grid)).unwrap();
    let total = grid.count_pixels() as f32;
    rp.compare_vector(&[total, total], matrix.get(0).unwrap());

    // ------------------------------------------------------------------
    // Test 2: hand-computed nested boundaries on a T glyph
    // ------------------------------------------------------------------
    // rows: [6, 6, 2, 2, 2, 2], columns: [2, 2, 6, 6, 2, 2]
    // P=3 -> boundaries 2, 4, 6
    let glyph = grid_from_ascii(&[
        "######",
        "######",
        "..##..",
        "..##..",
        "..##..",
        "..##..",
    ])
    .unwrap();
    let extractor = ProjectionsExtractor::new(3).unwrap();
    let matrix = extractor.transform(std::slice::from_ref(&glyph)).unwrap();
    rp.compare_vector(
        &[12.0, 4.0, 16.0, 16.0, 20.0, 20.0],
        matrix.get(0).unwrap(),
    );

    // ------------------------------------------------------------------
    // Test 3: vector length is 2P independent of grid content
    // ------------------------------------------------------------------
    let grids = [
        random_grid(24, 24, 0.3, 11).unwrap(),
        random_grid(24, 24, 0.8, 12).unwrap(),
        BinaryGrid::new(24, 24).unwrap(),
    ];
    for p in [1u32, 4, 7] {
        let extractor = ProjectionsExtractor::new(p).unwrap();
        let matrix = extractor.transform(&grids).unwrap();
        rp.compare_values(grids.len() as f64, matrix.len() as f64, 0.0);
        rp.compare_values(2.0 * f64::from(p), matrix.uniform_len().unwrap() as f64, 0.0);
    }

    // ------------------------------------------------------------------
    // Test 4: the last projection always reaches the full totals
    // ------------------------------------------------------------------
    let grid = random_grid(17, 17, 0.5, 13).unwrap();
    let extractor = ProjectionsExtractor::new(5).unwrap();
    let matrix = extractor.transform(std::slice::from_ref(&grid)).unwrap();
    let row = matrix.get(0).unwrap();
    let total = grid.count_pixels() as f64;
    rp.compare_values(total, f64::from(row.get(8).unwrap()), 0.0);
    rp.compare_values(total, f64::from(row.get(9).unwrap()), 0.0);

    assert!(rp.cleanup());
}
