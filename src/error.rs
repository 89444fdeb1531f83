// src/error.rs
//! Error types shared by every module of the crate.

use thiserror::Error;

/// Result alias for linear algebra and simulation operations
pub type LinalgResult<T> = Result<T, LinalgError>;

/// Errors raised by matrix construction, algebra and the state layers built on it
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinalgError {
    /// Construction input is ragged or empty
    #[error("Invalid shape: {0}")]
    Shape(String),

    #[error("Shape mismatch in {op}: {}x{} vs {}x{}", .left.0, .left.1, .right.0, .right.1)]
    ShapeMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("Expected a column vector, got a {rows}x{cols} matrix")]
    NotColumnVector { rows: usize, cols: usize },

    #[error("Matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// An observable was built from an operator that is not Hermitian
    #[error("Invalid operator: {0}")]
    InvalidOperator(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
