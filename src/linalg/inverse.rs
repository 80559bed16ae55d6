//! Cofactor matrices and adjugate-based inversion.
//!
//! Each cofactor is the determinant of one minor with the checkerboard sign
//! applied; the inverse is the transposed cofactor matrix (the adjugate)
//! scaled by the reciprocal determinant. Every minor runs its own
//! elimination, the straightforward non-caching approach.

use crate::error::MatError;
use crate::matrix::Matrix;

impl Matrix {
    /// Matrix of cofactors: entry (i, j) is `(-1)^(i+j)` times the
    /// determinant of the minor with row i and column j deleted.
    ///
    /// # Errors
    /// Returns `MatError::NotSquare` for rectangular input and
    /// `MatError::InvalidShape` for a 1x1 matrix, which has no minors.
    pub fn calc_complements(&self) -> Result<Matrix, MatError> {
        if !self.is_square() {
            return Err(MatError::NotSquare(self.rows, self.cols));
        }
        if self.rows < 2 {
            return Err(MatError::InvalidShape(0, 0));
        }
        let mut out = Matrix::new(self.rows, self.cols)?;
        for i in 0..self.rows {
            for j in 0..self.cols {
                let minor_det = self.minor(i, j)?.determinant()?;
                let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
                out.data[i * out.cols + j] = sign * minor_det;
            }
        }
        Ok(out)
    }

    /// Inverse via the adjugate: the transposed cofactor matrix scaled by
    /// `1 / determinant`. A 1x1 matrix inverts to `[[1 / a]]`.
    ///
    /// # Errors
    /// Returns `MatError::NotSquare` for rectangular input and
    /// `MatError::SingularMatrix` when the determinant is zero.
    pub fn inverse_matrix(&self) -> Result<Matrix, MatError> {
        if !self.is_square() {
            return Err(MatError::NotSquare(self.rows, self.cols));
        }
        let det = self.determinant()?;
        if det == 0.0 {
            return Err(MatError::SingularMatrix);
        }
        if self.rows == 1 {
            return Matrix::from_rows(&[&[1.0 / det]]);
        }
        let mut adjugate = self.calc_complements()?.transpose();
        adjugate.mul_number(1.0 / det);
        Ok(adjugate)
    }
}
