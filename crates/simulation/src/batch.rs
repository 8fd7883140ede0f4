use log::{debug, info};
use rayon::prelude::*;
use thiserror::Error;
use tribody_core::{SolutionStep, SolverSettings, ThreeBodySystem};
use tribody_solvers::{Solver, transient};

/// One run to perform: which solver, on which system, over which grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    pub solver: Solver,
    pub settings: SolverSettings,
    pub system: ThreeBodySystem,
}

impl Preset {
    #[must_use]
    pub fn new(solver: Solver, settings: SolverSettings, system: ThreeBodySystem) -> Self {
        Self {
            solver,
            settings,
            system,
        }
    }
}

/// The trajectory produced by one preset, together with its inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// Human-readable solver name.
    pub solver_name: String,
    pub solver: Solver,
    pub system: ThreeBodySystem,
    pub settings: SolverSettings,
    /// Samples at `t_start + k·dt` for `k = 0..=N`.
    pub solution: Vec<SolutionStep>,
}

impl SimulationResult {
    /// Returns the sample at `t_start`.
    #[must_use]
    pub fn initial(&self) -> Option<&SolutionStep> {
        self.solution.first()
    }

    /// Returns the final sample.
    #[must_use]
    pub fn last(&self) -> Option<&SolutionStep> {
        self.solution.last()
    }

    /// Returns the sample times.
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.solution.iter().map(|s| s.t)
    }
}

/// A batch failed because one of its presets could not be run.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("preset {index} ({solver}) failed: {source}")]
pub struct BatchError {
    /// Position of the failing preset in the batch.
    pub index: usize,
    pub solver: Solver,
    #[source]
    pub source: transient::Error,
}

/// Runs a single preset to completion.
///
/// # Errors
///
/// Returns an error if the preset's settings are invalid.
pub fn run_simulation(preset: &Preset) -> Result<SimulationResult, transient::Error> {
    let solution = preset.solver.solve(&preset.settings, &preset.system)?;
    debug!(
        "{}: {} samples, final t = {}",
        preset.solver,
        solution.history.len(),
        solution.last().map_or(preset.settings.t_start, |s| s.t),
    );

    Ok(SimulationResult {
        solver_name: preset.solver.name().to_owned(),
        solver: preset.solver,
        system: preset.system.clone(),
        settings: preset.settings,
        solution: solution.into_history(),
    })
}

/// Runs every preset on the rayon thread pool and returns their results in
/// input order.
///
/// Settings are validated for the whole batch before any run starts, so a
/// malformed preset aborts the batch without wasted work. If several presets
/// fail, the error names the one with the lowest index. No partial results are
/// returned.
///
/// # Errors
///
/// Returns a [`BatchError`] identifying the first failing preset.
pub fn run_simulations_in_parallel(
    presets: &[Preset],
) -> Result<Vec<SimulationResult>, BatchError> {
    for (index, preset) in presets.iter().enumerate() {
        preset.settings.validate().map_err(|e| BatchError {
            index,
            solver: preset.solver,
            source: e.into(),
        })?;
    }

    info!(
        "dispatching {} presets on {} threads",
        presets.len(),
        rayon::current_num_threads()
    );

    let outcomes: Vec<_> = presets
        .par_iter()
        .enumerate()
        .map(|(index, preset)| {
            run_simulation(preset).map_err(|source| BatchError {
                index,
                solver: preset.solver,
                source,
            })
        })
        .collect();

    let results = outcomes.into_iter().collect::<Result<Vec<_>, _>>()?;
    info!("completed {} presets", results.len());
    Ok(results)
}
