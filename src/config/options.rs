//! API options for the determinant engine.
//!
//! This module provides the `DetOptions` struct, which controls the pivot
//! policy of the elimination-based determinant. The default reproduces the
//! exact-zero behavior: a pivot column is treated as unusable only when its
//! remaining entries are all exactly zero.

/// Pivot policy for the determinant engine.
#[derive(Debug, Clone, Copy)]
pub struct DetOptions {
    /// Pivot magnitudes at or below this threshold count as zero.
    pub pivot_tol: f64,
}

impl Default for DetOptions {
    fn default() -> Self {
        Self { pivot_tol: 0.0 }
    }
}
