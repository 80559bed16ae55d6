use thiserror::Error;

// Unified error type for denmat

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatError {
    #[error("invalid shape {0}x{1}: rows and cols must both be at least 1")]
    InvalidShape(usize, usize),
    #[error("shape mismatch: {0}x{1} is incompatible with {2}x{3}")]
    ShapeMismatch(usize, usize, usize, usize),
    #[error("matrix is not square ({0}x{1})")]
    NotSquare(usize, usize),
    #[error("singular matrix: determinant is zero")]
    SingularMatrix,
    #[error("index ({0}, {1}) out of range for a {2}x{3} matrix")]
    IndexOutOfRange(usize, usize, usize, usize),
}
