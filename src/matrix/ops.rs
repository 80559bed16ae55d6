//! Elementwise and multiplicative operators for `Matrix`.
//!
//! The named methods (`sum_matrix`, `sub_matrix`, `mul_matrix`, `mul_number`,
//! `eq_matrix`) mutate the receiver and report incompatible shapes as
//! `MatError::ShapeMismatch`; shape validation always happens before the first
//! element is touched. The operator impls map 1:1 onto the named methods and
//! assert the same preconditions.

use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use crate::error::MatError;
use crate::matrix::Matrix;
use crate::utils::tolerance::{DEFAULT_TOL, approx_eq};

impl Matrix {
    fn same_shape(&self, other: &Matrix) -> Result<(), MatError> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatError::ShapeMismatch(
                self.rows, self.cols, other.rows, other.cols,
            ));
        }
        Ok(())
    }

    /// Add `other` into `self` elementwise.
    ///
    /// # Errors
    /// Returns `MatError::ShapeMismatch` unless the shapes are identical.
    pub fn sum_matrix(&mut self, other: &Matrix) -> Result<(), MatError> {
        self.same_shape(other)?;
        for (x, y) in self.data.iter_mut().zip(other.data.iter()) {
            *x += *y;
        }
        Ok(())
    }

    /// Subtract `other` from `self` elementwise.
    ///
    /// # Errors
    /// Returns `MatError::ShapeMismatch` unless the shapes are identical.
    pub fn sub_matrix(&mut self, other: &Matrix) -> Result<(), MatError> {
        self.same_shape(other)?;
        for (x, y) in self.data.iter_mut().zip(other.data.iter()) {
            *x -= *y;
        }
        Ok(())
    }

    /// Scale every element by `number`.
    pub fn mul_number(&mut self, number: f64) {
        for x in self.data.iter_mut() {
            *x *= number;
        }
    }

    /// Replace `self` with the product `self * other`.
    ///
    /// The receiver becomes a `self.rows x other.cols` matrix.
    ///
    /// # Errors
    /// Returns `MatError::ShapeMismatch` unless `self.cols == other.rows`.
    pub fn mul_matrix(&mut self, other: &Matrix) -> Result<(), MatError> {
        if self.cols != other.rows {
            return Err(MatError::ShapeMismatch(
                self.rows, self.cols, other.rows, other.cols,
            ));
        }
        let mut out = Matrix::new(self.rows, other.cols)?;
        for i in 0..self.rows {
            let lhs = self.row(i);
            for k in 0..self.cols {
                let aik = lhs[k];
                for j in 0..other.cols {
                    out.data[i * out.cols + j] += aik * other.data[k * other.cols + j];
                }
            }
        }
        *self = out;
        Ok(())
    }

    /// Elementwise equality within absolute tolerance `DEFAULT_TOL`.
    ///
    /// Matrices of different shapes compare unequal; never fails.
    pub fn eq_matrix(&self, other: &Matrix) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| approx_eq(*a, *b, DEFAULT_TOL))
    }
}

/// Tolerance comparison; see [`Matrix::eq_matrix`].
impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.eq_matrix(other)
    }
}

impl Add for &Matrix {
    type Output = Matrix;

    /// # Panics
    /// Panics if the shapes differ.
    fn add(self, rhs: &Matrix) -> Matrix {
        let mut out = self.clone();
        out.sum_matrix(rhs)
            .expect("matrix addition requires identical shapes");
        out
    }
}

impl Sub for &Matrix {
    type Output = Matrix;

    /// # Panics
    /// Panics if the shapes differ.
    fn sub(self, rhs: &Matrix) -> Matrix {
        let mut out = self.clone();
        out.sub_matrix(rhs)
            .expect("matrix subtraction requires identical shapes");
        out
    }
}

impl Mul for &Matrix {
    type Output = Matrix;

    /// # Panics
    /// Panics unless `self.cols() == rhs.rows()`.
    fn mul(self, rhs: &Matrix) -> Matrix {
        let mut out = self.clone();
        out.mul_matrix(rhs)
            .expect("matrix multiplication requires lhs.cols == rhs.rows");
        out
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, number: f64) -> Matrix {
        let mut out = self.clone();
        out.mul_number(number);
        out
    }
}

impl Mul<&Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, matrix: &Matrix) -> Matrix {
        matrix * self
    }
}

impl AddAssign<&Matrix> for Matrix {
    /// # Panics
    /// Panics if the shapes differ.
    fn add_assign(&mut self, rhs: &Matrix) {
        self.sum_matrix(rhs)
            .expect("matrix addition requires identical shapes");
    }
}

impl SubAssign<&Matrix> for Matrix {
    /// # Panics
    /// Panics if the shapes differ.
    fn sub_assign(&mut self, rhs: &Matrix) {
        self.sub_matrix(rhs)
            .expect("matrix subtraction requires identical shapes");
    }
}

impl MulAssign<&Matrix> for Matrix {
    /// # Panics
    /// Panics unless `self.cols() == rhs.rows()`.
    fn mul_assign(&mut self, rhs: &Matrix) {
        self.mul_matrix(rhs)
            .expect("matrix multiplication requires lhs.cols == rhs.rows");
    }
}

impl MulAssign<f64> for Matrix {
    fn mul_assign(&mut self, number: f64) {
        self.mul_number(number);
    }
}
