// src/config.rs
//! Numeric tolerances used by the predicates and the interference detector.

use serde::{Deserialize, Serialize};

/// Comparison tolerances
///
/// Hermiticity and unitarity default to exact comparison, so matrices built from exact
/// values pass or fail the same way a strict elementwise equality would.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumericConfig {
    /// Maximum |A - A†| per element still accepted as Hermitian
    pub hermitian_epsilon: f64,
    /// Maximum |U U† - I| per element still accepted as unitary
    pub unitary_epsilon: f64,
    /// Differences at or below this magnitude are zero before the interference ceiling
    pub interference_epsilon: f64,
    /// Tolerance on column/row sums for stochastic checks
    pub stochastic_epsilon: f64,
}

impl Default for NumericConfig {
    fn default() -> Self {
        Self {
            hermitian_epsilon: 0.0,
            unitary_epsilon: 0.0,
            interference_epsilon: 1e-9,
            stochastic_epsilon: 1e-9,
        }
    }
}

impl NumericConfig {
    /// Every comparison exact
    pub fn exact() -> Self {
        Self {
            hermitian_epsilon: 0.0,
            unitary_epsilon: 0.0,
            interference_epsilon: 0.0,
            stochastic_epsilon: 0.0,
        }
    }

    /// The same tolerance for every comparison
    pub fn with_epsilon(epsilon: f64) -> Self {
        Self {
            hermitian_epsilon: epsilon,
            unitary_epsilon: epsilon,
            interference_epsilon: epsilon,
            stochastic_epsilon: epsilon,
        }
    }
}
