//! Structural transforms: transpose and minor extraction.

use crate::error::MatError;
use crate::matrix::Matrix;

impl Matrix {
    /// Transposed copy of `self`, with shape `cols x rows`.
    pub fn transpose(&self) -> Matrix {
        let mut out = Matrix {
            rows: self.cols,
            cols: self.rows,
            data: vec![0.0; self.data.len()],
        };
        for i in 0..self.rows {
            for j in 0..self.cols {
                out.data[j * out.cols + i] = self.data[i * self.cols + j];
            }
        }
        out
    }

    /// Copy of `self` with row `row_i` and column `col_j` deleted, preserving
    /// the relative order of the remaining rows and columns.
    ///
    /// # Errors
    /// Returns `MatError::IndexOutOfRange` for indices outside the matrix and
    /// `MatError::InvalidShape` when either extent is 1 (the reduced matrix
    /// would be empty).
    pub fn minor(&self, row_i: usize, col_j: usize) -> Result<Matrix, MatError> {
        if row_i >= self.rows || col_j >= self.cols {
            return Err(MatError::IndexOutOfRange(
                row_i, col_j, self.rows, self.cols,
            ));
        }
        if self.rows < 2 || self.cols < 2 {
            return Err(MatError::InvalidShape(self.rows - 1, self.cols - 1));
        }
        let mut out = Matrix::new(self.rows - 1, self.cols - 1)?;
        for i in 0..self.rows {
            if i == row_i {
                continue;
            }
            let di = if i < row_i { i } else { i - 1 };
            for j in 0..self.cols {
                if j == col_j {
                    continue;
                }
                let dj = if j < col_j { j } else { j - 1 };
                out.data[di * out.cols + dj] = self.data[i * self.cols + j];
            }
        }
        Ok(out)
    }
}
