//! BinaryGrid - The binary pixel container
//!
//! `BinaryGrid` is the fundamental input type for feature extraction: a
//! `height x width` row-major grid of pixel values restricted to {0, 1},
//! typically produced by resizing and thresholding a source glyph image
//! upstream of this crate.
//!
//! # Memory layout
//!
//! Data is stored in row-major order with no padding. The pixel at
//! `(x, y)` (column `x`, row `y`) is at index `y * width + x`.
//!
//! # Ownership model
//!
//! Grids are immutable inputs as far as extraction is concerned: every
//! extractor reads them through `&BinaryGrid` and never mutates. Mutation
//! (`set_pixel`) exists for construction and tests only.

mod clip;
mod statistics;

use crate::error::{Error, Result};

/// Binary pixel grid
///
/// A 2D array of `u8` values restricted to {0, 1}. One byte per pixel,
/// row-major, no padding.
///
/// # Examples
///
/// ```
/// use glyphfeat_core::BinaryGrid;
///
/// // Create an empty 16x16 grid and set one pixel
/// let mut grid = BinaryGrid::new(16, 16).unwrap();
/// grid.set_pixel(3, 5, 1).unwrap();
/// assert_eq!(grid.get_pixel(3, 5), Some(1));
/// assert_eq!(grid.count_pixels(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryGrid {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Pixel data (row-major, one byte per pixel)
    data: Vec<u8>,
}

impl BinaryGrid {
    /// Create a new grid with all pixels set to zero.
    ///
    /// # Arguments
    ///
    /// * `width` - Width in pixels (must be > 0)
    /// * `height` - Height in pixels (must be > 0)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width` or `height` is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = (width as usize) * (height as usize);
        Ok(BinaryGrid {
            width,
            height,
            data: vec![0u8; size],
        })
    }

    /// Create a grid from existing row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width` or `height` is 0,
    /// [`Error::DataSizeMismatch`] if `data.len() != width * height`, or
    /// [`Error::InvalidPixelValue`] if any value is outside {0, 1}.
    ///
    /// # Examples
    ///
    /// ```
    /// use glyphfeat_core::BinaryGrid;
    ///
    /// let grid = BinaryGrid::from_data(2, 2, vec![1, 0, 0, 1]).unwrap();
    /// assert_eq!(grid.count_pixels(), 2);
    /// ```
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(Error::DataSizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        for (i, &value) in data.iter().enumerate() {
            if value > 1 {
                return Err(Error::InvalidPixelValue {
                    x: (i % width as usize) as u32,
                    y: (i / width as usize) as u32,
                    value,
                });
            }
        }

        Ok(BinaryGrid {
            width,
            height,
            data,
        })
    }

    /// Create a grid from a slice of equal-length rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `rows` is empty or the first
    /// row is empty, [`Error::DataSizeMismatch`] if row lengths differ, or
    /// [`Error::InvalidPixelValue`] for values outside {0, 1}.
    pub fn from_rows(rows: &[&[u8]]) -> Result<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.len()) as u32;
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let mut data = Vec::with_capacity((width as usize) * (height as usize));
        for row in rows {
            if row.len() != width as usize {
                return Err(Error::DataSizeMismatch {
                    expected: width as usize,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Self::from_data(width, height, data)
    }

    /// Get the grid width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the grid height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get a pixel value, or `None` if `(x, y)` is out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y as usize) * (self.width as usize) + (x as usize)])
    }

    /// Set a pixel value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `(x, y)` is outside the grid
    /// and [`Error::InvalidPixelValue`] if `value` is not 0 or 1.
    pub fn set_pixel(&mut self, x: u32, y: u32, value: u8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: (y as usize) * (self.width as usize) + (x as usize),
                len: self.data.len(),
            });
        }
        if value > 1 {
            return Err(Error::InvalidPixelValue { x, y, value });
        }
        self.data[(y as usize) * (self.width as usize) + (x as usize)] = value;
        Ok(())
    }

    /// Get raw access to the pixel data (row-major).
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get a single row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let start = (y as usize) * (self.width as usize);
        &self.data[start..start + self.width as usize]
    }
}
