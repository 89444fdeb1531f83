// src/quantum/ket.rs
//! Kets
//!
//! A ket is a column vector of complex amplitudes. Amplitudes are stored as given;
//! normalization happens when probabilities are read out.

use std::fmt::{self, Display};

use num_complex::Complex64;
use rand::Rng;

use crate::error::{LinalgError, LinalgResult};
use crate::linalg::{ComplexMatrix, inner_product, tensor_product};

/// A quantum state `|ψ⟩` over a finite set of basis states
#[derive(Clone, Debug, PartialEq)]
pub struct Ket {
    amplitudes: ComplexMatrix,
}

impl Ket {
    /// Create a ket from any matrix of amplitudes, reshaped to a column
    ///
    /// The all-zero vector is not a state and is rejected.
    pub fn new(amplitudes: ComplexMatrix) -> LinalgResult<Self> {
        let amplitudes = amplitudes.as_column_vector();

        if amplitudes.iter().all(|amp| amp.norm_sqr() == 0.0) {
            return Err(LinalgError::InvalidArgument(
                "ket needs at least one nonzero amplitude".to_string(),
            ));
        }

        Ok(Ket { amplitudes })
    }

    /// Create a ket from a flat list of amplitudes
    pub fn from_amplitudes<T: Into<Complex64>>(values: Vec<T>) -> LinalgResult<Self> {
        Self::new(ComplexMatrix::column_vector(values)?)
    }

    /// Number of basis states
    pub fn dimension(&self) -> usize {
        self.amplitudes.rows()
    }

    /// The amplitudes as an `(n, 1)` column
    pub fn amplitudes(&self) -> &ComplexMatrix {
        &self.amplitudes
    }

    pub fn amplitude(&self, index: usize) -> LinalgResult<Complex64> {
        self.amplitudes.get(index, 0).ok_or_else(|| {
            LinalgError::InvalidArgument(format!(
                "basis state {} out of range for a {}-dimensional ket",
                index,
                self.dimension()
            ))
        })
    }

    /// The bra `⟨ψ|`, a row vector
    pub fn bra(&self) -> ComplexMatrix {
        self.amplitudes.adjoint()
    }

    /// `‖ψ‖ = sqrt(⟨ψ|ψ⟩)`
    pub fn norm(&self) -> LinalgResult<f64> {
        self.amplitudes.norm(inner_product)
    }

    /// `|c_i|^2 / ‖ψ‖`
    ///
    /// Divides by the norm, not its square, so it equals the Born probability only for
    /// unit kets. See [`Ket::normalized_probability`].
    pub fn probability(&self, index: usize) -> LinalgResult<f64> {
        Ok(self.amplitude(index)?.norm_sqr() / self.norm()?)
    }

    /// Born probability `|c_i|^2 / ‖ψ‖^2` of observing basis state `index`
    pub fn normalized_probability(&self, index: usize) -> LinalgResult<f64> {
        let norm = self.norm()?;
        Ok(self.amplitude(index)?.norm_sqr() / (norm * norm))
    }

    /// `|⟨ψ|φ⟩| / (‖ψ‖ ‖φ‖)`
    pub fn transition_probability(&self, other: &Ket) -> LinalgResult<f64> {
        let overlap = inner_product(&self.amplitudes, &other.amplitudes)?;
        Ok(overlap.norm() / (self.norm()? * other.norm()?))
    }

    /// Joint state `|ψ⟩ ⊗ |φ⟩`
    pub fn tensor(&self, other: &Ket) -> Ket {
        Ket {
            amplitudes: tensor_product(&self.amplitudes, &other.amplitudes),
        }
    }

    /// Sample a basis state with the Born probabilities
    pub fn measure<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let weights: Vec<f64> = self.amplitudes.iter().map(|amp| amp.norm_sqr()).collect();
        let total: f64 = weights.iter().sum();

        let random_val = rng.gen::<f64>() * total;
        let mut cumulative = 0.0;
        for (index, weight) in weights.iter().enumerate() {
            cumulative += weight;
            if random_val < cumulative {
                return index;
            }
        }

        // Rounding can leave random_val just above the final cumulative sum
        weights.iter().rposition(|&w| w > 0.0).unwrap_or(0)
    }
}

impl Display for Ket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let threshold = 1e-10;
        let mut first = true;

        for (i, amp) in self.amplitudes.iter().enumerate() {
            if amp.norm_sqr() > threshold {
                if !first {
                    write!(f, " + ")?;
                }
                write!(f, "({:.6}{:+.6}i)|{}⟩", amp.re, amp.im, i)?;
                first = false;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_ket_is_rejected() {
        assert!(Ket::from_amplitudes(vec![0.0, 0.0]).is_err());
    }

    #[test]
    fn test_row_input_becomes_column() {
        let row = ComplexMatrix::new(vec![vec![1.0, 0.0, 0.0]]).unwrap();
        let ket = Ket::new(row).unwrap();
        assert_eq!(ket.amplitudes().shape(), (3, 1));
        assert_eq!(ket.dimension(), 3);
    }

    #[test]
    fn test_display_skips_empty_basis_states() {
        let ket = Ket::from_amplitudes(vec![1.0, 0.0, -1.0]).unwrap();
        assert_eq!(ket.to_string(), "(1.000000+0.000000i)|0⟩ + (-1.000000+0.000000i)|2⟩");
    }
}
