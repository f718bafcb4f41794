use crate::error::{BenchError, Result};

/// Owned row-major 2D grid: one contiguous buffer plus a row stride.
///
/// Bounds and lifetime are enforced by the type; every cell access either
/// lands inside the buffer or fails with [`BenchError::IndexOutOfRange`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Grid<T> {
    /// Build a grid by evaluating `f(row, col)` for every cell
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(f(row, col));
            }
        }
        Self { cells, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Bounds-checked cell read
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        if row >= self.rows || col >= self.cols {
            return Err(self.out_of_range(row, col));
        }
        Ok(self.cells[row * self.cols + col])
    }

    /// Borrow one full row as a slice
    #[inline]
    pub fn row(&self, row: usize) -> Result<&[T]> {
        if row >= self.rows {
            return Err(self.out_of_range(row, 0));
        }
        let start = row * self.cols;
        Ok(&self.cells[start..start + self.cols])
    }

    fn out_of_range(&self, row: usize, col: usize) -> BenchError {
        BenchError::IndexOutOfRange {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        }
    }
}
