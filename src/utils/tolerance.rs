//! Absolute-tolerance comparison for floating-point entries.

use num_traits::Float;

/// Comparison tolerance used by matrix equality.
pub const DEFAULT_TOL: f64 = 1e-7;

/// True when `a` and `b` differ by less than `tol` in absolute value.
pub fn approx_eq<T: Float>(a: T, b: T, tol: T) -> bool {
    (a - b).abs() < tol
}
