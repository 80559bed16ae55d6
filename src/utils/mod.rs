//! Shared numeric helpers.

pub mod tolerance;
pub use tolerance::{DEFAULT_TOL, approx_eq};
