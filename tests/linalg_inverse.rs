//! End-to-end tests for the determinant and inverse kernels.
//!
//! These tests exercise the algebraic identities the direct kernels must
//! satisfy: unit determinant of the identity, multiplicativity of the
//! determinant, and round-tripping a matrix through its inverse.

use approx::assert_abs_diff_eq;
use denmat::{MatError, Matrix};
use rand::Rng;

/// Random diagonally dominant matrix, comfortably invertible.
fn random_invertible(n: usize) -> Matrix {
    let mut rng = rand::thread_rng();
    let mut a = Matrix::from_fn(n, n, |_, _| rng.r#gen()).unwrap();
    for i in 0..n {
        a[(i, i)] += n as f64;
    }
    a
}

#[test]
fn identity_has_unit_determinant() {
    for n in 1..=6 {
        assert_eq!(Matrix::identity(n).unwrap().determinant().unwrap(), 1.0);
    }
}

/// det(A * B) == det(A) * det(B) for random square matrices.
#[test]
fn determinant_is_multiplicative() {
    let a = random_invertible(4);
    let b = random_invertible(4);
    let det_product = (&a * &b).determinant().unwrap();
    let expected = a.determinant().unwrap() * b.determinant().unwrap();
    assert_abs_diff_eq!(det_product, expected, epsilon = 1e-8 * expected.abs());
}

/// A * A^-1 recovers the identity within the comparison tolerance.
#[test]
fn inverse_round_trip_random() {
    let a = random_invertible(5);
    let inv = a.inverse_matrix().unwrap();
    let product = &a * &inv;
    assert!(product.eq_matrix(&Matrix::identity(5).unwrap()));
}

/// (A^-1)^-1 recovers A.
#[test]
fn inverse_is_an_involution() {
    let a = random_invertible(4);
    let back = a.inverse_matrix().unwrap().inverse_matrix().unwrap();
    assert!(back.eq_matrix(&a));
}

/// The determinant of the inverse is the reciprocal determinant.
#[test]
fn inverse_determinant_is_reciprocal() {
    let a = random_invertible(4);
    let det = a.determinant().unwrap();
    let det_inv = a.inverse_matrix().unwrap().determinant().unwrap();
    assert_abs_diff_eq!(det_inv, 1.0 / det, epsilon = 1e-10);
}

/// A zero row makes the determinant zero and inversion fail.
#[test]
fn zero_row_is_singular() {
    let mut a = random_invertible(4);
    a.row_mut(2).fill(0.0);
    assert_eq!(a.determinant().unwrap(), 0.0);
    assert_eq!(a.inverse_matrix(), Err(MatError::SingularMatrix));
}

/// A zero column makes the determinant zero and inversion fail.
#[test]
fn zero_column_is_singular() {
    let mut a = random_invertible(4);
    for i in 0..4 {
        a[(i, 1)] = 0.0;
    }
    assert_eq!(a.determinant().unwrap(), 0.0);
    assert_eq!(a.inverse_matrix(), Err(MatError::SingularMatrix));
}
