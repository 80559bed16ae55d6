//! Determinant via Gaussian elimination with partial pivoting.
//!
//! The elimination runs on a disposable working copy; the input matrix is
//! never mutated. At every pivot column the largest-magnitude candidate row
//! is swapped into place, which bounds the growth of rounding error in fixed
//! (f64) precision, and each swap flips the sign of the accumulated
//! permutation. A pivot column with no usable entry short-circuits to a zero
//! determinant.
//!
//! # References
//! - Golub & Van Loan, Matrix Computations

use crate::config::DetOptions;
use crate::error::MatError;
use crate::matrix::Matrix;

impl Matrix {
    /// Determinant with the default exact-zero pivot policy.
    ///
    /// # Errors
    /// Returns `MatError::NotSquare` unless `rows == cols`.
    pub fn determinant(&self) -> Result<f64, MatError> {
        self.determinant_with(&DetOptions::default())
    }

    /// Determinant with an explicit pivot policy.
    ///
    /// Pivot magnitudes at or below `opts.pivot_tol` count as zero, making
    /// the whole pivot column unusable and the determinant zero.
    ///
    /// # Errors
    /// Returns `MatError::NotSquare` unless `rows == cols`.
    pub fn determinant_with(&self, opts: &DetOptions) -> Result<f64, MatError> {
        if !self.is_square() {
            return Err(MatError::NotSquare(self.rows, self.cols));
        }
        let n = self.rows;
        match n {
            1 => return Ok(self.data[0]),
            2 => return Ok(self.data[0] * self.data[3] - self.data[1] * self.data[2]),
            _ => {}
        }
        let mut w = self.clone();
        let mut sign = 1.0;
        for k in 0..n {
            sign *= w.pivot_rearrange(k);
            let pivot = w.data[k * n + k];
            if pivot.abs() <= opts.pivot_tol {
                return Ok(0.0);
            }
            for r in (k + 1)..n {
                let factor = w.data[r * n + k] / pivot;
                for j in k..n {
                    w.data[r * n + j] -= factor * w.data[k * n + j];
                }
            }
        }
        let diag_product: f64 = (0..n).map(|k| w.data[k * n + k]).product();
        Ok(sign * diag_product)
    }

    /// Swap the largest-magnitude candidate in column `k` into the pivot row.
    ///
    /// Scans rows `k..` of column `k`, swaps the winner into row `k` when it
    /// is not already there, and returns the sign contribution of the swap:
    /// `-1.0` for a transposition, `1.0` otherwise.
    fn pivot_rearrange(&mut self, k: usize) -> f64 {
        let n = self.rows;
        let mut best = k;
        for r in (k + 1)..n {
            if self.data[r * n + k].abs() > self.data[best * n + k].abs() {
                best = r;
            }
        }
        if best != k {
            self.swap_rows(k, best);
            -1.0
        } else {
            1.0
        }
    }
}
