// src/classical/system.rs
//! Discrete-time transition systems
//!
//! A `System` evolves a state vector by repeated application of a square transition
//! matrix: `x(n) = M^n · x(0)`. Columns of `M` describe where the mass (or amplitude)
//! of each state moves in one step.

use num_complex::Complex64;
use tracing::{debug, trace};

use crate::error::{LinalgError, LinalgResult};
use crate::linalg::ComplexMatrix;

/// A transition system over `n` discrete states
#[derive(Clone, Debug, PartialEq)]
pub struct System {
    matrix: ComplexMatrix,
    size: usize,
}

impl System {
    /// Create a system from a square transition matrix
    pub fn new(matrix: ComplexMatrix) -> LinalgResult<Self> {
        if !matrix.is_square() {
            return Err(LinalgError::NotSquare {
                rows: matrix.rows(),
                cols: matrix.cols(),
            });
        }

        let size = matrix.rows();
        debug!(size, "created transition system");

        Ok(System { matrix, size })
    }

    /// Create a system from rows of real transition weights
    pub fn from_real(rows: Vec<Vec<f64>>) -> LinalgResult<Self> {
        Self::new(ComplexMatrix::new(rows)?)
    }

    /// Number of states
    pub fn size(&self) -> usize {
        self.size
    }

    /// The transition matrix
    pub fn matrix(&self) -> &ComplexMatrix {
        &self.matrix
    }

    /// Apply the transition matrix once
    pub fn step(&self, state: &ComplexMatrix) -> LinalgResult<ComplexMatrix> {
        self.simulate(state, 1)
    }

    /// Evolve `initial` for `n_steps` steps, returning `M^n_steps · initial`
    ///
    /// `initial` may be given as a row or a column; it must hold one entry per state.
    /// Zero steps returns the initial vector unchanged.
    pub fn simulate(&self, initial: &ComplexMatrix, n_steps: u32) -> LinalgResult<ComplexMatrix> {
        let is_vector = initial.is_column_vector() || initial.rows() == 1;
        if !is_vector || initial.rows() * initial.cols() != self.size {
            return Err(LinalgError::ShapeMismatch {
                op: "simulate",
                left: self.matrix.shape(),
                right: initial.shape(),
            });
        }

        let initial = initial.as_column_vector();

        trace!(size = self.size, n_steps, "simulating transition system");

        let evolution = self.matrix.powi(n_steps)?;
        evolution.matmul(&initial)
    }

    /// True if every entry is a nonnegative real and every column sums to one
    pub fn is_column_stochastic(&self, epsilon: f64) -> bool {
        let entries = self.matrix.as_array();

        let nonnegative_real = entries.iter().all(|z| z.im.abs() <= epsilon && z.re >= -epsilon);
        nonnegative_real
            && entries
                .columns()
                .into_iter()
                .all(|column| sums_to_one(column.sum(), epsilon))
    }

    /// True if the matrix is column stochastic and every row also sums to one
    pub fn is_doubly_stochastic(&self, epsilon: f64) -> bool {
        self.is_column_stochastic(epsilon)
            && self
                .matrix
                .as_array()
                .rows()
                .into_iter()
                .all(|row| sums_to_one(row.sum(), epsilon))
    }
}

fn sums_to_one(sum: Complex64, epsilon: f64) -> bool {
    (sum - Complex64::new(1.0, 0.0)).norm() <= epsilon
}
