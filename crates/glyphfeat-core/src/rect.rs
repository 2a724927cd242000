//! Rect - Rectangular region of a grid
//!
//! A `Rect` names a sub-rectangle of a [`BinaryGrid`](crate::BinaryGrid) in
//! grid coordinates: `x`/`y` are the left/top corner, `width`/`height` the
//! extent. Used for clipping and windowed pixel counting.

use crate::error::{Error, Result};

/// Rectangular region: left/top corner plus extent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left edge (column index of the first column inside the rect)
    pub x: u32,
    /// Top edge (row index of the first row inside the rect)
    pub y: u32,
    /// Width in columns
    pub width: u32,
    /// Height in rows
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width` or `height` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use glyphfeat_core::Rect;
    ///
    /// let rect = Rect::new(2, 3, 10, 20).unwrap();
    /// assert_eq!(rect.right(), 12);
    /// assert_eq!(rect.bottom(), 23);
    /// ```
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Rect {
            x,
            y,
            width,
            height,
        })
    }

    /// Column index one past the right edge.
    #[inline]
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Row index one past the bottom edge.
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Number of cells covered by the rectangle.
    #[inline]
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Check whether `self` lies entirely within a `grid_width x grid_height`
    /// grid anchored at the origin.
    pub fn fits_within(&self, grid_width: u32, grid_height: u32) -> bool {
        self.right() <= grid_width && self.bottom() <= grid_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_creation() {
        let rect = Rect::new(1, 2, 3, 4).unwrap();
        assert_eq!(rect.x, 1);
        assert_eq!(rect.y, 2);
        assert_eq!(rect.right(), 4);
        assert_eq!(rect.bottom(), 6);
        assert_eq!(rect.area(), 12);
    }

    #[test]
    fn test_rect_zero_extent_rejected() {
        assert!(Rect::new(0, 0, 0, 5).is_err());
        assert!(Rect::new(0, 0, 5, 0).is_err());
    }

    #[test]
    fn test_fits_within() {
        let rect = Rect::new(2, 2, 4, 4).unwrap();
        assert!(rect.fits_within(6, 6));
        assert!(!rect.fits_within(5, 6));
        assert!(!rect.fits_within(6, 5));
    }
}
