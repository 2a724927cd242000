//! Grid clipping
//!
//! Extraction of rectangular sub-grids. The recursive subdivision extractor
//! clips a grid into quadrants at every level, so clipping is a copying
//! operation that yields an independent `BinaryGrid`.

use super::BinaryGrid;
use crate::error::{Error, Result};
use crate::rect::Rect;

impl BinaryGrid {
    /// Copy a rectangular region into a new grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RectOutOfBounds`] if the rectangle does not lie
    /// entirely within the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use glyphfeat_core::{BinaryGrid, Rect};
    ///
    /// let grid = BinaryGrid::from_rows(&[&[1, 0, 0], &[0, 1, 0], &[0, 0, 1]]).unwrap();
    /// let sub = grid.clip(&Rect::new(1, 1, 2, 2).unwrap()).unwrap();
    /// assert_eq!(sub.width(), 2);
    /// assert_eq!(sub.get_pixel(0, 0), Some(1));
    /// ```
    pub fn clip(&self, rect: &Rect) -> Result<BinaryGrid> {
        if !rect.fits_within(self.width(), self.height()) {
            return Err(Error::RectOutOfBounds {
                x: rect.x,
                y: rect.y,
                rect_width: rect.width,
                rect_height: rect.height,
                grid_width: self.width(),
                grid_height: self.height(),
            });
        }

        let mut data = Vec::with_capacity(rect.area() as usize);
        for y in rect.y..rect.bottom() {
            data.extend_from_slice(&self.row(y)[rect.x as usize..rect.right() as usize]);
        }
        BinaryGrid::from_data(rect.width, rect.height, data)
    }
}
