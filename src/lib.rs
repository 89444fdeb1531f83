//! Complex Vector Space Simulation
//!
//! This crate provides dense complex matrices and the algebra between them, and builds
//! two simulation layers on top: classical transition systems (Markov chains and the
//! slit experiments) and quantum states with Hermitian observables.

pub mod error;
pub mod config;
pub mod linalg;
pub mod classical;
pub mod quantum;

// Create a prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{LinalgError, LinalgResult};
    pub use crate::config::NumericConfig;
    pub use crate::linalg::{
        ComplexMatrix, InnerProduct, distance, inner_product, matrix_product, tensor_product,
    };
    pub use crate::classical::{
        System, build_bullet_experiment, build_photon_experiment, detect_interference,
    };
    pub use crate::quantum::{Ket, Observable};
}

// Version and crate information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
