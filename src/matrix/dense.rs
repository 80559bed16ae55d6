//! Owned dense-matrix storage.
//!
//! `Matrix` owns a contiguous row-major `Vec<f64>` together with its row and
//! column extents. Construction and reshaping validate the extents; element
//! access is available both checked (`get`/`set`) and panicking
//! (`Index`/`IndexMut`).

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::MatError;

/// Dense row-major matrix of `f64` values.
///
/// The buffer always holds exactly `rows * cols` elements and is owned
/// exclusively by this instance: `clone` duplicates it, moving transfers it.
#[derive(Clone, Debug)]
pub struct Matrix {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) data: Vec<f64>,
}

impl Matrix {
    /// Create a zero-initialized `rows x cols` matrix.
    ///
    /// # Errors
    /// Returns `MatError::InvalidShape` if either extent is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MatError> {
        if rows == 0 || cols == 0 {
            return Err(MatError::InvalidShape(rows, cols));
        }
        Ok(Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        })
    }

    /// Create a `rows x cols` matrix with element (i, j) set to `f(i, j)`.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(usize, usize) -> f64,
    ) -> Result<Self, MatError> {
        let mut out = Self::new(rows, cols)?;
        for i in 0..rows {
            for j in 0..cols {
                out.data[i * cols + j] = f(i, j);
            }
        }
        Ok(out)
    }

    /// Create a matrix from nested rows.
    ///
    /// # Errors
    /// Returns `MatError::InvalidShape` if the input is empty, the first row
    /// is empty, or the rows are ragged.
    pub fn from_rows(rows: &[&[f64]]) -> Result<Self, MatError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.len());
        let mut out = Self::new(nrows, ncols)?;
        for (i, row) in rows.iter().enumerate() {
            if row.len() != ncols {
                return Err(MatError::InvalidShape(nrows, row.len()));
            }
            out.row_mut(i).copy_from_slice(row);
        }
        Ok(out)
    }

    /// Create the `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Self, MatError> {
        Self::from_fn(n, n, |i, j| if i == j { 1.0 } else { 0.0 })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True when `rows == cols`.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Checked element read.
    ///
    /// # Errors
    /// Returns `MatError::IndexOutOfRange` for indices outside
    /// `[0, rows) x [0, cols)`.
    pub fn get(&self, i: usize, j: usize) -> Result<f64, MatError> {
        if i >= self.rows || j >= self.cols {
            return Err(MatError::IndexOutOfRange(i, j, self.rows, self.cols));
        }
        Ok(self.data[i * self.cols + j])
    }

    /// Checked element write.
    ///
    /// # Errors
    /// Returns `MatError::IndexOutOfRange` for indices outside
    /// `[0, rows) x [0, cols)`.
    pub fn set(&mut self, i: usize, j: usize, value: f64) -> Result<(), MatError> {
        if i >= self.rows || j >= self.cols {
            return Err(MatError::IndexOutOfRange(i, j, self.rows, self.cols));
        }
        self.data[i * self.cols + j] = value;
        Ok(())
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> &[f64] {
        let idx = i * self.cols;
        &self.data[idx..idx + self.cols]
    }

    /// Row `i` as a mutable slice.
    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        let idx = i * self.cols;
        &mut self.data[idx..idx + self.cols]
    }

    /// Change the number of rows.
    ///
    /// Entries in the overlap of the old and new shape keep their values;
    /// new entries are zero.
    pub fn set_rows(&mut self, rows: usize) -> Result<(), MatError> {
        self.reshape(rows, self.cols)
    }

    /// Change the number of columns.
    ///
    /// Entries in the overlap of the old and new shape keep their values;
    /// new entries are zero.
    pub fn set_cols(&mut self, cols: usize) -> Result<(), MatError> {
        self.reshape(self.rows, cols)
    }

    // The replacement buffer is fully built before the matrix is touched;
    // a rejected shape leaves it unchanged.
    fn reshape(&mut self, rows: usize, cols: usize) -> Result<(), MatError> {
        if rows == 0 || cols == 0 {
            return Err(MatError::InvalidShape(rows, cols));
        }
        let mut data = vec![0.0; rows * cols];
        for i in 0..rows.min(self.rows) {
            for j in 0..cols.min(self.cols) {
                data[i * cols + j] = self.data[i * self.cols + j];
            }
        }
        self.rows = rows;
        self.cols = cols;
        self.data = data;
        Ok(())
    }

    /// Swap rows `a` and `b` in place.
    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.data.split_at_mut(hi * self.cols);
        head[lo * self.cols..(lo + 1) * self.cols].swap_with_slice(&mut tail[..self.cols]);
    }
}

/// The default matrix is a single zero cell.
impl Default for Matrix {
    fn default() -> Self {
        Self {
            rows: 1,
            cols: 1,
            data: vec![0.0],
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    /// # Panics
    /// Panics if the index is outside `[0, rows) x [0, cols)`.
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i}, {j}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    /// # Panics
    /// Panics if the index is outside `[0, rows) x [0, cols)`.
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i}, {j}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.data[i * self.cols + j]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, v) in self.row(i).iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{v}")?;
            }
        }
        Ok(())
    }
}
