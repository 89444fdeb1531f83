// src/classical/experiment.rs
//! Slit experiments
//!
//! Both experiments share one graph: a source state feeds `slits` intermediate states,
//! and each slit feeds some of `targets` absorbing states. States are laid out as
//! `[source, slit_1..slit_s, target_1..target_t]`.
//!
//! The bullet experiment carries real probabilities; the photon experiment carries
//! complex amplitudes. Comparing `B^n` with `|P^n|^2` shows where the two predictions
//! disagree, which is where interference happens.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::RangeInclusive;

use ndarray::Array2;
use num_complex::Complex64;
use tracing::debug;

use super::system::System;
use crate::config::NumericConfig;
use crate::error::{LinalgError, LinalgResult};
use crate::linalg::ComplexMatrix;

/// Number of steps from the source to a target
pub const DEFAULT_INTERFERENCE_STEPS: u32 = 2;

/// State indices of a slit experiment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlitLayout {
    pub slits: usize,
    pub targets: usize,
}

impl SlitLayout {
    pub fn new(slits: usize, targets: usize) -> LinalgResult<Self> {
        if slits == 0 || targets == 0 {
            return Err(LinalgError::InvalidArgument(format!(
                "experiment needs at least one slit and one target, got {} slits and {} targets",
                slits, targets
            )));
        }
        Ok(SlitLayout { slits, targets })
    }

    /// Total number of states, `slits + targets + 1`
    pub fn size(&self) -> usize {
        self.slits + self.targets + 1
    }

    pub fn source(&self) -> usize {
        0
    }

    /// State indices of the slits, numbered from 1
    pub fn slit_states(&self) -> RangeInclusive<usize> {
        1..=self.slits
    }

    /// State indices of the targets
    pub fn target_states(&self) -> RangeInclusive<usize> {
        (self.slits + 1)..=(self.slits + self.targets)
    }

    /// State index of the `i`-th slit (0-based)
    pub fn slit(&self, i: usize) -> Option<usize> {
        (i < self.slits).then(|| 1 + i)
    }

    /// State index of the `j`-th target (0-based)
    pub fn target(&self, j: usize) -> Option<usize> {
        (j < self.targets).then(|| self.slits + 1 + j)
    }
}

fn build_topology<T>(
    layout: SlitLayout,
    source_to_slit: Complex64,
    slit_to_target: &BTreeMap<usize, Vec<T>>,
) -> LinalgResult<ComplexMatrix>
where
    T: Copy + Into<Complex64>,
{
    let n = layout.size();
    let mut matrix = Array2::<Complex64>::zeros((n, n));

    for slit in layout.slit_states() {
        matrix[[slit, layout.source()]] = source_to_slit;
    }

    for target in layout.target_states() {
        matrix[[target, target]] = Complex64::new(1.0, 0.0);
    }

    for (&slit, column) in slit_to_target {
        if !layout.slit_states().contains(&slit) {
            return Err(LinalgError::InvalidArgument(format!(
                "slit {} is outside 1..={}",
                slit, layout.slits
            )));
        }
        if column.len() != layout.targets {
            return Err(LinalgError::InvalidArgument(format!(
                "slit {} has {} target weights, expected {}",
                slit, column.len(), layout.targets
            )));
        }

        for (target, &value) in layout.target_states().zip(column.iter()) {
            matrix[[target, slit]] = value.into();
        }
    }

    ComplexMatrix::from_array(matrix)
}

/// Classical slit experiment
///
/// The source splits evenly, `1 / n_slits`, over the slits. `slit_to_target_weights` maps a
/// slit number (1-based) to its probabilities over the targets. Slits without an entry
/// lead nowhere. The weights are not checked to sum to one.
pub fn build_bullet_experiment(
    n_slits: usize,
    n_targets: usize,
    slit_to_target_weights: &BTreeMap<usize, Vec<f64>>,
) -> LinalgResult<System> {
    let layout = SlitLayout::new(n_slits, n_targets)?;
    let split = Complex64::new(1.0 / n_slits as f64, 0.0);

    debug!(n_slits, n_targets, "building bullet experiment");
    System::new(build_topology(layout, split, slit_to_target_weights)?)
}

/// Quantum slit experiment
///
/// The source splits with amplitude `1 / sqrt(n_slits)` per slit, so the split has unit
/// norm rather than unit sum.
pub fn build_photon_experiment(
    n_slits: usize,
    n_targets: usize,
    slit_to_target_amplitudes: &BTreeMap<usize, Vec<Complex64>>,
) -> LinalgResult<System> {
    let layout = SlitLayout::new(n_slits, n_targets)?;
    let split = Complex64::new(1.0 / (n_slits as f64).sqrt(), 0.0);

    debug!(n_slits, n_targets, "building photon experiment");
    System::new(build_topology(layout, split, slit_to_target_amplitudes)?)
}

/// Cells where classical and quantum predictions disagree
#[derive(Debug, Clone, PartialEq)]
pub struct InterferencePattern {
    /// `ceil(B^n - |P^n|^2)` per cell
    pub difference: Array2<i64>,
    /// `(row, col)` of every nonzero cell in `difference`
    pub cells: BTreeSet<(usize, usize)>,
}

impl InterferencePattern {
    pub fn has_interference(&self) -> bool {
        !self.cells.is_empty()
    }
}

/// Compare `n_steps` of the classical system with `n_steps` of the quantum system
///
/// Uses [`NumericConfig::default`], which treats differences of magnitude at most `1e-9`
/// as zero before taking the ceiling. Pass [`NumericConfig::exact`] to
/// [`detect_interference_with`] for the raw ceiling.
pub fn detect_interference(
    bullet: &System,
    photon: &System,
    n_steps: u32,
) -> LinalgResult<InterferencePattern> {
    detect_interference_with(bullet, photon, n_steps, &NumericConfig::default())
}

/// [`detect_interference`] with explicit tolerances
///
/// Differences with magnitude at most `config.interference_epsilon` count as zero, so
/// floating residue on cells where both predictions agree is not reported.
pub fn detect_interference_with(
    bullet: &System,
    photon: &System,
    n_steps: u32,
    config: &NumericConfig,
) -> LinalgResult<InterferencePattern> {
    if bullet.size() != photon.size() {
        return Err(LinalgError::ShapeMismatch {
            op: "detect interference",
            left: bullet.matrix().shape(),
            right: photon.matrix().shape(),
        });
    }

    let classical = bullet.matrix().powi(n_steps)?.as_array().mapv(|z| z.re);
    let quantum = photon.matrix().powi(n_steps)?.modulus_squared();

    let epsilon = config.interference_epsilon;
    let difference = (classical - quantum).mapv(|d| {
        if d.abs() <= epsilon {
            0
        } else {
            d.ceil() as i64
        }
    });

    let cells: BTreeSet<(usize, usize)> = difference
        .indexed_iter()
        .filter(|(_, value)| **value != 0)
        .map(|(index, _)| index)
        .collect();

    debug!(n_steps, cells = cells.len(), "compared bullet and photon experiments");

    Ok(InterferencePattern { difference, cells })
}
