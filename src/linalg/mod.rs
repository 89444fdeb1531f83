// src/linalg/mod.rs
//! Complex vector spaces
//!
//! Dense complex matrices and the operations between them that the classical and
//! quantum layers are built on.

pub mod matrix;
pub mod ops;
pub mod polar;

pub use matrix::ComplexMatrix;
pub use ops::{
    InnerProduct, distance, frobenius_inner_product, inner_product, matrix_product,
    tensor_product,
};
