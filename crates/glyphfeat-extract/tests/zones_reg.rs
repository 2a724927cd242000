//! Zone extractors regression test.
//!
//! Pins the plain and weighted zone sums, the remainder-dropping cell
//! enumeration, and the adaptive search's degenerate and boundary cases.

use glyphfeat_extract::{AdaptiveZonesExtractor, Extractor, ZonesExtractor};
use glyphfeat_test::{RegParams, grid_from_ascii, random_grid};

#[test]
fn zones_reg() {
    let mut rp = RegParams::new("zones");

    // ------------------------------------------------------------------
    // Test 1: 4x4 all ones, Z=2 -> four cells of 4
    // ------------------------------------------------------------------
    let solid = grid_from_ascii(&["####", "####", "####", "####"]).unwrap();
    let extractor = ZonesExtractor::new(2).unwrap();
    let matrix = extractor.transform(std::slice::from_ref(&solid)).unwrap();
    rp.compare_vector(&[4.0, 4.0, 4.0, 4.0], matrix.get(0).unwrap());

    // ------------------------------------------------------------------
    // Test 2: row-major cell order
    // ------------------------------------------------------------------
    let corners = grid_from_ascii(&[
        "#...",
        "....",
        "....",
        "..##",
    ])
    .unwrap();
    let matrix = extractor.transform(std::slice::from_ref(&corners)).unwrap();
    rp.compare_vector(&[1.0, 0.0, 0.0, 2.0], matrix.get(0).unwrap());

    // ------------------------------------------------------------------
    // Test 3: remainder rows/columns are dropped, not padded
    // ------------------------------------------------------------------
    let grid = random_grid(7, 7, 0.6, 31).unwrap();
    let extractor = ZonesExtractor::new(3).unwrap();
    let matrix = extractor.transform(std::slice::from_ref(&grid)).unwrap();
    rp.compare_values(
        extractor.feature_len(7, 7) as f64,
        matrix.uniform_len().unwrap() as f64,
        0.0,
    );
    rp.compare_values(4.0, matrix.uniform_len().unwrap() as f64, 0.0);

    // undersized grid: zero cells on both axes
    let tiny = grid_from_ascii(&["##", "##"]).unwrap();
    let extractor = ZonesExtractor::new(3).unwrap();
    let matrix = extractor.transform(std::slice::from_ref(&tiny)).unwrap();
    rp.compare_values(0.0, matrix.get(0).unwrap().len() as f64, 0.0);

    // ------------------------------------------------------------------
    // Test 4: weighted top band
    // ------------------------------------------------------------------
    // height 8, Z=2: band threshold 8 / (2*4) = 1, so exactly the pixels
    // of row 0 get the extra weight
    let glyph = grid_from_ascii(&[
        "########",
        "........",
        "........",
        "........",
        "........",
        "........",
        "........",
        "########",
    ])
    .unwrap();
    let extractor = ZonesExtractor::weighted(2, 1.25).unwrap();
    let matrix = extractor.transform(std::slice::from_ref(&glyph)).unwrap();
    rp.compare_vector(
        &[
            4.5, 4.5, 4.5, 4.5, // top cells: 2 pixels + 2 * 1.25
            0.0, 0.0, 0.0, 0.0,
            0.0, 0.0, 0.0, 0.0,
            2.0, 2.0, 2.0, 2.0, // bottom cells: plain counts
        ],
        matrix.get(0).unwrap(),
    );

    // ------------------------------------------------------------------
    // Test 5: adaptive search with R=0 equals unweighted zones
    // ------------------------------------------------------------------
    let zones = ZonesExtractor::new(3).unwrap();
    let adaptive = AdaptiveZonesExtractor::new(3, 0).unwrap();
    let dataset = [
        random_grid(18, 18, 0.2, 41).unwrap(),
        random_grid(18, 18, 0.7, 42).unwrap(),
    ];
    rp.compare_matrices(
        &zones.transform(&dataset).unwrap(),
        &adaptive.transform(&dataset).unwrap(),
    );

    // ------------------------------------------------------------------
    // Test 6: adaptive search finds off-cell mass
    // ------------------------------------------------------------------
    let block = grid_from_ascii(&[
        "....",
        ".##.",
        ".##.",
        "....",
    ])
    .unwrap();
    let adaptive = AdaptiveZonesExtractor::new(2, 1).unwrap();
    let matrix = adaptive.transform(std::slice::from_ref(&block)).unwrap();
    rp.compare_vector(&[4.0, 4.0, 4.0, 4.0], matrix.get(0).unwrap());

    // and never less than the unshifted window
    let zones = ZonesExtractor::new(2).unwrap();
    let grid = random_grid(12, 12, 0.5, 43).unwrap();
    let plain = zones.transform(std::slice::from_ref(&grid)).unwrap();
    let best = AdaptiveZonesExtractor::new(2, 2)
        .unwrap()
        .transform(std::slice::from_ref(&grid))
        .unwrap();
    for (p, b) in plain.get(0).unwrap().iter().zip(best.get(0).unwrap().iter()) {
        if b < p {
            rp.compare_values(f64::from(p), f64::from(b), 0.0);
        }
    }

    assert!(rp.cleanup());
}
