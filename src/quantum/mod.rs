// src/quantum/mod.rs
//! Quantum states and measurement
//!
//! Kets carry complex amplitudes; observables pair a Hermitian operator with a ket to
//! produce expectation values and variances.

pub mod ket;
pub mod observable;

pub use ket::Ket;
pub use observable::Observable;
