// src/linalg/ops.rs
//! Binary operations on pairs of matrices: product, inner product, distance and the
//! tensor (Kronecker) product.

use ndarray::Array2;
use num_complex::Complex64;

use super::matrix::ComplexMatrix;
use crate::error::{LinalgError, LinalgResult};

/// An inner product on complex matrices
///
/// Any function or closure `Fn(&ComplexMatrix, &ComplexMatrix) -> LinalgResult<Complex64>`
/// is an inner product, so [`inner_product`] and [`frobenius_inner_product`] can be handed
/// to [`ComplexMatrix::norm`] directly.
pub trait InnerProduct {
    fn inner(&self, v1: &ComplexMatrix, v2: &ComplexMatrix) -> LinalgResult<Complex64>;
}

impl<F> InnerProduct for F
where
    F: Fn(&ComplexMatrix, &ComplexMatrix) -> LinalgResult<Complex64>,
{
    fn inner(&self, v1: &ComplexMatrix, v2: &ComplexMatrix) -> LinalgResult<Complex64> {
        self(v1, v2)
    }
}

/// Matrix product `v1 · v2`
pub fn matrix_product(v1: &ComplexMatrix, v2: &ComplexMatrix) -> LinalgResult<ComplexMatrix> {
    v1.matmul(v2)
}

/// Standard inner product of two column vectors, `⟨v1|v2⟩ = v1† · v2`
pub fn inner_product(v1: &ComplexMatrix, v2: &ComplexMatrix) -> LinalgResult<Complex64> {
    for v in [v1, v2] {
        if !v.is_column_vector() {
            return Err(LinalgError::NotColumnVector {
                rows: v.rows(),
                cols: v.cols(),
            });
        }
    }

    let product = matrix_product(&v1.adjoint(), v2)?;
    Ok(product.as_array()[[0, 0]])
}

/// Inner product on same-shape matrices, `Tr(a† · b)`
pub fn frobenius_inner_product(a: &ComplexMatrix, b: &ComplexMatrix) -> LinalgResult<Complex64> {
    if a.shape() != b.shape() {
        return Err(LinalgError::ShapeMismatch {
            op: "frobenius inner product",
            left: a.shape(),
            right: b.shape(),
        });
    }

    Ok(a.iter().zip(b.iter()).map(|(x, y)| x.conj() * y).sum())
}

/// Euclidean distance `‖v1 - v2‖` between two column vectors of the same shape
pub fn distance(v1: &ComplexMatrix, v2: &ComplexMatrix) -> LinalgResult<f64> {
    if v1.shape() != v2.shape() {
        return Err(LinalgError::ShapeMismatch {
            op: "distance",
            left: v1.shape(),
            right: v2.shape(),
        });
    }

    v1.subtract(v2)?.norm(inner_product)
}

/// Kronecker product; the result has shape `(rows1 * rows2, cols1 * cols2)`
pub fn tensor_product(v1: &ComplexMatrix, v2: &ComplexMatrix) -> ComplexMatrix {
    let (f_rows, f_cols) = v1.shape();
    let (g_rows, g_cols) = v2.shape();
    let f = v1.as_array();
    let g = v2.as_array();

    let mut result = Array2::zeros((f_rows * g_rows, f_cols * g_cols));

    for i in 0..f_rows {
        for j in 0..f_cols {
            for k in 0..g_rows {
                for l in 0..g_cols {
                    result[[i * g_rows + k, j * g_cols + l]] = f[[i, j]] * g[[k, l]];
                }
            }
        }
    }

    ComplexMatrix::wrap(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frobenius_matches_column_inner_product() {
        let v = ComplexMatrix::column_vector(vec![
            Complex64::new(1.0, 2.0),
            Complex64::new(-3.0, 0.5),
        ]).unwrap();
        let w = ComplexMatrix::column_vector(vec![
            Complex64::new(0.0, 1.0),
            Complex64::new(2.0, -2.0),
        ]).unwrap();

        let standard = inner_product(&v, &w).unwrap();
        let frobenius = frobenius_inner_product(&v, &w).unwrap();
        assert!((standard - frobenius).norm() < 1e-12);
    }

    #[test]
    fn test_tensor_product_shape() {
        let a = ComplexMatrix::zeros(2, 3).unwrap();
        let b = ComplexMatrix::zeros(4, 1).unwrap();
        assert_eq!(tensor_product(&a, &b).shape(), (8, 3));
    }
}
