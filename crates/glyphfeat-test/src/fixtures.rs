//! Grid fixtures for tests
//!
//! Builders for small deterministic grids (ascii art) and larger
//! pseudo-random grids with a fixed seed, so regression values stay
//! stable across runs.

use glyphfeat_core::BinaryGrid;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::error::{TestError, TestResult};

/// Build a grid from ascii art.
///
/// `#` is a set pixel; `.` and space are clear. Lines must be non-empty
/// and of equal length.
///
/// # Examples
///
/// ```
/// use glyphfeat_test::grid_from_ascii;
///
/// let grid = grid_from_ascii(&[
///     ".#.",
///     "###",
///     ".#.",
/// ]).unwrap();
/// assert_eq!(grid.count_pixels(), 5);
/// ```
pub fn grid_from_ascii(lines: &[&str]) -> TestResult<BinaryGrid> {
    let height = lines.len() as u32;
    let width = lines.first().map_or(0, |l| l.chars().count()) as u32;
    if width == 0 || height == 0 {
        return Err(TestError::InvalidFixtureShape(format!(
            "{width}x{height} fixture"
        )));
    }

    let mut grid = BinaryGrid::new(width, height)?;
    for (y, line) in lines.iter().enumerate() {
        let mut x = 0u32;
        for character in line.chars() {
            match character {
                '#' => grid.set_pixel(x, y as u32, 1)?,
                '.' | ' ' => {}
                other => {
                    return Err(TestError::InvalidFixtureChar {
                        character: other,
                        line: y,
                    });
                }
            }
            x += 1;
        }
        if x != width {
            return Err(TestError::InvalidFixtureShape(format!(
                "line {y} has {x} columns, expected {width}"
            )));
        }
    }
    Ok(grid)
}

/// Build a pseudo-random binary grid.
///
/// Each pixel is set with probability `density`. The generator is seeded,
/// so the same arguments always produce the same grid.
pub fn random_grid(width: u32, height: u32, density: f64, seed: u64) -> TestResult<BinaryGrid> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = BinaryGrid::new(width, height)?;
    for y in 0..height {
        for x in 0..width {
            if rng.random_bool(density) {
                grid.set_pixel(x, y, 1)?;
            }
        }
    }
    Ok(grid)
}
