// demos/double_slit.rs
//! Walk through the classical and quantum systems: a converging Markov chain, the bullet
//! and photon double-slit experiments, ket probabilities and an observable.

use std::collections::BTreeMap;

use num_complex::Complex64;

use cvsim::classical::{
    DEFAULT_INTERFERENCE_STEPS, System, build_bullet_experiment, build_photon_experiment,
    detect_interference,
};
use cvsim::error::LinalgResult;
use cvsim::linalg::ComplexMatrix;
use cvsim::quantum::{Ket, Observable};

fn main() -> LinalgResult<()> {
    println!("=== Three-state system ===");
    let system = System::from_real(vec![
        vec![0.5, 0.0, 0.5],
        vec![0.0, 0.5, 0.5],
        vec![0.5, 0.5, 0.0],
    ])?;
    let initial = ComplexMatrix::column_vector(vec![0.2, 0.6, 0.2])?;
    println!("after 100 steps:\n{}", system.simulate(&initial, 100)?);

    println!("\n=== Double slit ===");
    let third = 1.0 / 3.0;
    let mut weights = BTreeMap::new();
    weights.insert(1, vec![third, third, third, 0.0, 0.0]);
    weights.insert(2, vec![0.0, 0.0, third, third, third]);
    let bullet = build_bullet_experiment(2, 5, &weights)?;

    let s = 6.0_f64.sqrt();
    let zero = Complex64::new(0.0, 0.0);
    let fan = [
        Complex64::new(-1.0, 1.0) / s,
        Complex64::new(-1.0, -1.0) / s,
        Complex64::new(1.0, -1.0) / s,
    ];
    let mut amplitudes = BTreeMap::new();
    amplitudes.insert(1, vec![fan[0], fan[1], fan[2], zero, zero]);
    amplitudes.insert(2, vec![zero, zero, fan[0], fan[1], fan[2]]);
    let photon = build_photon_experiment(2, 5, &amplitudes)?;

    let mut source = vec![0.0; bullet.size()];
    source[0] = 1.0;
    let source = ComplexMatrix::column_vector(source)?;
    println!("bullets at the targets:\n{}", bullet.simulate(&source, 2)?);

    let pattern = detect_interference(&bullet, &photon, DEFAULT_INTERFERENCE_STEPS)?;
    println!("interference at {:?}", pattern.cells);

    println!("\n=== Kets ===");
    let ket = Ket::from_amplitudes(vec![Complex64::new(0.0, 1.0), Complex64::new(-1.0, 0.0)])?;
    let ket2 = Ket::from_amplitudes(vec![Complex64::new(1.0, 0.0), Complex64::new(0.0, -1.0)])?;
    println!("p(0) = {:.4}, p(1) = {:.4}", ket.probability(0)?, ket.probability(1)?);
    println!("transition = {:.4}", ket.transition_probability(&ket2)?);

    println!("\n=== Observable ===");
    let operator = ComplexMatrix::new(vec![
        vec![Complex64::new(1.0, 0.0), Complex64::new(0.0, -1.0)],
        vec![Complex64::new(0.0, 1.0), Complex64::new(2.0, 0.0)],
    ])?;
    let half = 2.0_f64.sqrt() / 2.0;
    let state = Ket::from_amplitudes(vec![Complex64::new(half, 0.0), Complex64::new(0.0, half)])?;
    let observable = Observable::new(operator, &state)?;
    println!("mean: {:.2}", observable.mean()?);
    println!("variance: {:.4}", observable.variance()?);

    Ok(())
}
