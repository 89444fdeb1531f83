// src/classical/mod.rs
//! Probabilistic systems
//!
//! Markov-style transition systems and the slit experiments built on them.

pub mod system;
pub mod experiment;

pub use system::System;
pub use experiment::{
    DEFAULT_INTERFERENCE_STEPS, InterferencePattern, SlitLayout, build_bullet_experiment,
    build_photon_experiment, detect_interference, detect_interference_with,
};
