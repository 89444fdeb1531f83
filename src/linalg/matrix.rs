// src/linalg/matrix.rs
//! Dense complex matrices
//!
//! `ComplexMatrix` represents both matrices and vectors (a vector is an `n x 1` matrix).
//! Every operation returns a new value; the backing array is never mutated after
//! construction.

use std::fmt::{self, Display};
use std::ops::Neg;

use ndarray::{Array1, Array2, Axis};
use num_complex::Complex64;

use super::ops::InnerProduct;
use crate::error::{LinalgError, LinalgResult};

/// A dense, immutable matrix of complex numbers with at least one row and one column
#[derive(Clone, Debug, PartialEq)]
pub struct ComplexMatrix {
    data: Array2<Complex64>,
}

impl ComplexMatrix {
    /// Create a matrix from rows of real or complex values
    ///
    /// Fails with [`LinalgError::Shape`] if there are no rows, no columns, or the rows
    /// have unequal lengths.
    pub fn new<T: Into<Complex64>>(rows: Vec<Vec<T>>) -> LinalgResult<Self> {
        let row_count = rows.len();
        let col_count = rows.first().map(Vec::len).unwrap_or(0);

        if row_count == 0 || col_count == 0 {
            return Err(LinalgError::Shape(format!(
                "matrix must have at least one row and one column, got {}x{}",
                row_count, col_count
            )));
        }

        let mut values = Vec::with_capacity(row_count * col_count);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != col_count {
                return Err(LinalgError::Shape(format!(
                    "row {} has {} entries, expected {}",
                    index, row.len(), col_count
                )));
            }
            values.extend(row.into_iter().map(Into::into));
        }

        let data = Array2::from_shape_vec((row_count, col_count), values)
            .map_err(|e| LinalgError::Shape(e.to_string()))?;

        Ok(ComplexMatrix { data })
    }

    /// Create a column vector `(n, 1)` from a flat list of values
    pub fn column_vector<T: Into<Complex64>>(values: Vec<T>) -> LinalgResult<Self> {
        if values.is_empty() {
            return Err(LinalgError::Shape("vector must have at least one entry".to_string()));
        }

        let column: Array1<Complex64> = values.into_iter().map(Into::into).collect();
        Ok(ComplexMatrix { data: column.insert_axis(Axis(1)) })
    }

    /// Wrap an existing array
    pub fn from_array(data: Array2<Complex64>) -> LinalgResult<Self> {
        let (rows, cols) = data.dim();
        if rows == 0 || cols == 0 {
            return Err(LinalgError::Shape(format!(
                "matrix must have at least one row and one column, got {}x{}",
                rows, cols
            )));
        }

        Ok(ComplexMatrix { data })
    }

    /// Lift a real array into the complex plane
    pub fn from_real(data: &Array2<f64>) -> LinalgResult<Self> {
        Self::from_array(data.mapv(|x| Complex64::new(x, 0.0)))
    }

    /// The all-zero matrix of the given shape; both dimensions must be positive
    pub fn zeros(rows: usize, cols: usize) -> LinalgResult<Self> {
        Self::from_array(Array2::zeros((rows, cols)))
    }

    /// The `n x n` identity, `n >= 1`
    pub fn identity(n: usize) -> LinalgResult<Self> {
        Self::from_array(eye(n))
    }

    pub(crate) fn wrap(data: Array2<Complex64>) -> Self {
        ComplexMatrix { data }
    }

    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    pub fn is_column_vector(&self) -> bool {
        self.cols() == 1
    }

    /// Element at `(row, col)`, or `None` when out of range
    pub fn get(&self, row: usize, col: usize) -> Option<Complex64> {
        self.data.get((row, col)).copied()
    }

    /// Get a reference to the backing array
    pub fn as_array(&self) -> &Array2<Complex64> {
        &self.data
    }

    /// Iterate over the elements in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &Complex64> {
        self.data.iter()
    }

    /// Reshape every element, in row-major order, into a single column
    pub fn as_column_vector(&self) -> Self {
        let column: Array1<Complex64> = self.data.iter().copied().collect();
        ComplexMatrix { data: column.insert_axis(Axis(1)) }
    }

    fn check_same_shape(&self, other: &Self, op: &'static str) -> LinalgResult<()> {
        if self.shape() != other.shape() {
            return Err(LinalgError::ShapeMismatch {
                op,
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }

    fn require_square(&self) -> LinalgResult<usize> {
        if !self.is_square() {
            return Err(LinalgError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(self.rows())
    }

    pub fn add(&self, other: &Self) -> LinalgResult<Self> {
        self.check_same_shape(other, "add")?;
        Ok(ComplexMatrix { data: &self.data + &other.data })
    }

    pub fn subtract(&self, other: &Self) -> LinalgResult<Self> {
        self.check_same_shape(other, "subtract")?;
        Ok(ComplexMatrix { data: &self.data - &other.data })
    }

    /// Hadamard (elementwise) product
    pub fn elementwise_multiply(&self, other: &Self) -> LinalgResult<Self> {
        self.check_same_shape(other, "elementwise multiply")?;
        Ok(ComplexMatrix { data: &self.data * &other.data })
    }

    /// Matrix product `self · other`
    pub fn matmul(&self, other: &Self) -> LinalgResult<Self> {
        if self.cols() != other.rows() {
            return Err(LinalgError::ShapeMismatch {
                op: "matrix product",
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(ComplexMatrix { data: self.data.dot(&other.data) })
    }

    pub fn scale(&self, factor: Complex64) -> Self {
        ComplexMatrix { data: self.data.mapv(|z| z * factor) }
    }

    pub fn negate(&self) -> Self {
        ComplexMatrix { data: self.data.mapv(|z| -z) }
    }

    pub fn transpose(&self) -> Self {
        ComplexMatrix { data: self.data.t().to_owned() }
    }

    pub fn conjugate(&self) -> Self {
        ComplexMatrix { data: self.data.mapv(|z| z.conj()) }
    }

    /// Conjugate transpose
    pub fn adjoint(&self) -> Self {
        self.conjugate().transpose()
    }

    /// Integer power by repeated squaring; `powi(0)` is the identity
    pub fn powi(&self, exponent: u32) -> LinalgResult<Self> {
        let n = self.require_square()?;

        let mut result = eye(n);
        let mut base = self.data.clone();
        let mut remaining = exponent;

        while remaining > 0 {
            if remaining & 1 == 1 {
                result = result.dot(&base);
            }
            remaining >>= 1;
            if remaining > 0 {
                base = base.dot(&base);
            }
        }

        Ok(ComplexMatrix { data: result })
    }

    /// Sum of the diagonal
    pub fn trace(&self) -> LinalgResult<Complex64> {
        self.require_square()?;
        Ok(self.data.diag().sum())
    }

    /// Elementwise squared modulus `|z|^2`
    pub fn modulus_squared(&self) -> Array2<f64> {
        self.data.mapv(|z| z.norm_sqr())
    }

    /// Exact Hermiticity test: `A† == A` element for element
    pub fn is_hermitian(&self) -> LinalgResult<bool> {
        self.is_hermitian_within(0.0)
    }

    /// Hermiticity test accepting elementwise deviations up to `epsilon`
    pub fn is_hermitian_within(&self, epsilon: f64) -> LinalgResult<bool> {
        self.require_square()?;
        let adjoint = self.adjoint();
        Ok(approx_equal(&self.data, &adjoint.data, epsilon))
    }

    /// Exact unitarity test: `U · U† == I` and `U† · U == I`
    pub fn is_unitary(&self) -> LinalgResult<bool> {
        self.is_unitary_within(0.0)
    }

    pub fn is_unitary_within(&self, epsilon: f64) -> LinalgResult<bool> {
        let n = self.require_square()?;
        let adjoint = self.adjoint();
        let identity = eye(n);

        let left = self.data.dot(&adjoint.data);
        let right = adjoint.data.dot(&self.data);

        Ok(approx_equal(&left, &identity, epsilon) && approx_equal(&right, &identity, epsilon))
    }

    /// Square root of `⟨self, self⟩` under the supplied inner product
    pub fn norm<P: InnerProduct>(&self, inner_product: P) -> LinalgResult<f64> {
        let value = inner_product.inner(self, self)?;
        Ok(value.re.max(0.0).sqrt())
    }
}

fn eye(n: usize) -> Array2<Complex64> {
    Array2::from_diag(&Array1::from_elem(n, Complex64::new(1.0, 0.0)))
}

fn approx_equal(a: &Array2<Complex64>, b: &Array2<Complex64>, epsilon: f64) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).norm() <= epsilon)
}

impl Neg for ComplexMatrix {
    type Output = ComplexMatrix;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Neg for &ComplexMatrix {
    type Output = ComplexMatrix;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Display for ComplexMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.data.rows().into_iter().enumerate() {
            if i > 0 {
                write!(f, ",\n ")?;
            }
            write!(f, "[")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", value)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
