// src/quantum/observable.rs
//! Observables
//!
//! An observable pairs a Hermitian operator with the state it is measured in and
//! yields the expectation value and spread of that measurement.

use num_complex::Complex64;
use tracing::debug;

use super::ket::Ket;
use crate::config::NumericConfig;
use crate::error::{LinalgError, LinalgResult};
use crate::linalg::{ComplexMatrix, inner_product, matrix_product};

/// A Hermitian operator measured in a fixed state
#[derive(Clone, Debug)]
pub struct Observable {
    operator: ComplexMatrix,
    state: Ket,
}

impl Observable {
    /// Create an observable, requiring `operator` to equal its adjoint exactly
    pub fn new(operator: ComplexMatrix, state: &Ket) -> LinalgResult<Self> {
        Self::with_config(operator, state, &NumericConfig::default())
    }

    /// Create an observable, accepting Hermiticity within `config.hermitian_epsilon`
    pub fn with_config(
        operator: ComplexMatrix,
        state: &Ket,
        config: &NumericConfig,
    ) -> LinalgResult<Self> {
        if !operator.is_hermitian_within(config.hermitian_epsilon)? {
            return Err(LinalgError::InvalidOperator(
                "observable must be hermitian".to_string(),
            ));
        }

        if operator.cols() != state.dimension() {
            return Err(LinalgError::ShapeMismatch {
                op: "observable",
                left: operator.shape(),
                right: state.amplitudes().shape(),
            });
        }

        debug!(dimension = operator.rows(), "created observable");

        Ok(Observable {
            operator,
            state: Ket::new(state.amplitudes().as_column_vector())?,
        })
    }

    pub fn operator(&self) -> &ComplexMatrix {
        &self.operator
    }

    pub fn state(&self) -> &Ket {
        &self.state
    }

    /// Expectation value `⟨ψ|A|ψ⟩`
    ///
    /// The imaginary part is floating residue for a Hermitian operator and is dropped.
    pub fn mean(&self) -> LinalgResult<f64> {
        let applied = matrix_product(&self.operator, self.state.amplitudes())?;
        Ok(inner_product(&applied, self.state.amplitudes())?.re)
    }

    /// `⟨ψ|(ΔA)^2|ψ⟩` with `ΔA = A - ⟨A⟩ I`
    pub fn variance(&self) -> LinalgResult<f64> {
        let mean = self.mean()?;
        let shift = ComplexMatrix::identity(self.operator.rows())?.scale(Complex64::new(mean, 0.0));
        let delta = self.operator.subtract(&shift)?;

        let squared = matrix_product(&delta, &delta)?;
        let value = matrix_product(
            &matrix_product(&self.state.bra(), &squared)?,
            self.state.amplitudes(),
        )?;

        Ok(value.as_array()[[0, 0]].re)
    }

    pub fn standard_deviation(&self) -> LinalgResult<f64> {
        Ok(self.variance()?.max(0.0).sqrt())
    }
}
