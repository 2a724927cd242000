//! Grid statistics operations
//!
//! Pixel counting over the whole grid, per row/column, and within a
//! rectangular window. These are the primitives the extractors build their
//! projection, density, and balance computations from.

use super::BinaryGrid;
use crate::rect::Rect;

impl BinaryGrid {
    /// Count the ON pixels in the whole grid.
    pub fn count_pixels(&self) -> u64 {
        self.data().iter().map(|&v| u64::from(v)).sum()
    }

    /// Count the ON pixels in each row.
    ///
    /// Returns one count per row, top to bottom.
    pub fn count_by_row(&self) -> Vec<u32> {
        (0..self.height())
            .map(|y| self.row(y).iter().map(|&v| u32::from(v)).sum())
            .collect()
    }

    /// Count the ON pixels in each column.
    ///
    /// Returns one count per column, left to right.
    pub fn count_by_column(&self) -> Vec<u32> {
        let mut counts = vec![0u32; self.width() as usize];
        for y in 0..self.height() {
            for (count, &v) in counts.iter_mut().zip(self.row(y)) {
                *count += u32::from(v);
            }
        }
        counts
    }

    /// Count the ON pixels inside a rectangular window.
    ///
    /// The window is clipped to the grid bounds; the part outside the grid
    /// contributes nothing.
    pub fn count_in_rect(&self, rect: &Rect) -> u64 {
        let y_end = rect.bottom().min(self.height());
        let x_end = rect.right().min(self.width());
        if rect.y >= y_end || rect.x >= x_end {
            return 0;
        }

        let mut count = 0u64;
        for y in rect.y..y_end {
            count += self.row(y)[rect.x as usize..x_end as usize]
                .iter()
                .map(|&v| u64::from(v))
                .sum::<u64>();
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(size: u32) -> BinaryGrid {
        let mut grid = BinaryGrid::new(size, size).unwrap();
        for y in 0..size {
            for x in 0..size {
                if (x + y) % 2 == 0 {
                    grid.set_pixel(x, y, 1).unwrap();
                }
            }
        }
        grid
    }

    #[test]
    fn test_count_pixels() {
        let grid = checker(4);
        assert_eq!(grid.count_pixels(), 8);
        assert_eq!(BinaryGrid::new(5, 5).unwrap().count_pixels(), 0);
    }

    #[test]
    fn test_count_by_row_and_column() {
        let grid = BinaryGrid::from_rows(&[&[1, 1, 0], &[0, 0, 0], &[1, 0, 1]]).unwrap();
        assert_eq!(grid.count_by_row(), vec![2, 0, 2]);
        assert_eq!(grid.count_by_column(), vec![2, 1, 1]);
    }

    #[test]
    fn test_count_in_rect() {
        let grid = checker(4);
        let rect = Rect::new(0, 0, 2, 2).unwrap();
        assert_eq!(grid.count_in_rect(&rect), 2);

        // full grid
        let rect = Rect::new(0, 0, 4, 4).unwrap();
        assert_eq!(grid.count_in_rect(&rect), 8);
    }

    #[test]
    fn test_count_in_rect_clipped() {
        let grid = checker(4);
        // hangs off the right/bottom edge; only the in-grid part counts
        let rect = Rect::new(3, 3, 4, 4).unwrap();
        assert_eq!(grid.count_in_rect(&rect), grid.get_pixel(3, 3).unwrap() as u64);

        // entirely outside
        let rect = Rect::new(10, 10, 2, 2).unwrap();
        assert_eq!(grid.count_in_rect(&rect), 0);
    }
}
