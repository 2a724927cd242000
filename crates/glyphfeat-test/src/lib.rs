//! glyphfeat-test - Regression test framework for glyphfeat
//!
//! Provides a small regression-test harness and grid fixtures used by the
//! integration tests of the other crates:
//!
//! - [`RegParams`] accumulates value/vector/matrix comparisons and reports
//!   them at cleanup
//! - [`grid_from_ascii`] builds small deterministic grids from ascii art
//! - [`random_grid`] builds seeded pseudo-random grids
//!
//! # Usage
//!
//! ```
//! use glyphfeat_test::{RegParams, grid_from_ascii};
//!
//! let mut rp = RegParams::new("example");
//! let grid = grid_from_ascii(&["##", "##"]).unwrap();
//! rp.compare_values(4.0, grid.count_pixels() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: set to "display" to report failures without failing

mod error;
mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use fixtures::{grid_from_ascii, random_grid};
pub use params::{RegParams, RegTestMode};
