use indicatif::ParallelProgressIterator;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    action::ActionIntegral, error::WkbError, potentials::potential::BoundPotential,
    quantization::LevelSolver, utility::linspace,
};

/// Successfully solved levels in quantum-number order.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct QuantizedLevels {
    pub ns: Vec<u32>,
    pub energies: Vec<f64>,
}

/// A level the solver could not deliver, with the failure that occurred.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LevelFailure {
    pub n: u32,
    pub error: WkbError,
}

/// Result of a full catalog run.
#[derive(Serialize, Debug, Clone, Default)]
pub struct LevelCatalog {
    pub levels: QuantizedLevels,
    pub failures: Vec<LevelFailure>,
}

/// Solves the levels `n = 0..n_levels` independently in parallel,
/// recording failed levels instead of aborting the run.
pub fn quantized_levels<P, S>(potential: &P, solver: &S, n_levels: u32) -> LevelCatalog
where
    P: BoundPotential + Sync,
    S: LevelSolver + Sync,
{
    let results: Vec<(u32, Result<f64, WkbError>)> = (0..n_levels)
        .into_par_iter()
        .map(|n| (n, solver.level_energy(potential, n)))
        .collect();

    let mut catalog = LevelCatalog::default();
    for (n, result) in results {
        match result {
            Ok(energy) => {
                catalog.levels.ns.push(n);
                catalog.levels.energies.push(energy);
            }
            Err(error) => catalog.failures.push(LevelFailure { n, error }),
        }
    }

    catalog
}

/// Diagnostic sweep of `(E, S(E))` samples across the valid energy range.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ActionSweep {
    pub energies: Vec<f64>,
    pub actions: Vec<f64>,
}

/// Sweeps the action over `samples` evenly spaced energies covering the
/// whole classically allowed range.
pub fn action_sweep<P, A>(potential: &P, integrator: &A, samples: usize) -> ActionSweep
where
    P: BoundPotential + Sync,
    A: ActionIntegral + Sync,
{
    let (e_min, e_max) = potential.energy_range();

    action_sweep_over(potential, integrator, &linspace(e_min, e_max, samples))
}

/// Sweeps the action over a caller-supplied energy grid, skipping points
/// whose evaluation fails.
pub fn action_sweep_over<P, A>(potential: &P, integrator: &A, energies: &[f64]) -> ActionSweep
where
    P: BoundPotential + Sync,
    A: ActionIntegral + Sync,
{
    let values: Vec<(f64, f64)> = energies
        .par_iter()
        .progress()
        .filter_map(|&energy| {
            integrator
                .action(potential, energy)
                .ok()
                .map(|action| (energy, action))
        })
        .collect();

    let mut sweep = ActionSweep::default();
    for (energy, action) in values {
        sweep.energies.push(energy);
        sweep.actions.push(action);
    }

    sweep
}
