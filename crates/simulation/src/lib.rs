//! Side-by-side comparison of three-body integrators.
//!
//! A [`Preset`] pairs a [`Solver`] with settings and a system.
//! [`run_simulations_in_parallel`] runs a batch of presets on the rayon thread
//! pool and returns one [`SimulationResult`] per preset, in input order. The
//! [`metrics`] module turns results into scalar series such as energy drift,
//! and [`trajectories`] splits a result into per-body time series for
//! plotting.
//!
//! # Example
//!
//! ```
//! use tribody_simulation::{Preset, metrics, presets, run_simulations_in_parallel};
//! use tribody_core::SolverSettings;
//! use tribody_solvers::Solver;
//!
//! let orbit = presets::two_body_circular(1.0, 1.0e-3, 1.0, 1.0);
//! let settings = SolverSettings::new(0.0, orbit.period, orbit.period / 100.0, 1.0).unwrap();
//!
//! let batch: Vec<_> = [Solver::ForwardEuler, Solver::Leapfrog]
//!     .into_iter()
//!     .map(|solver| Preset::new(solver, settings, orbit.system.clone()))
//!     .collect();
//! let results = run_simulations_in_parallel(&batch).unwrap();
//!
//! let euler = metrics::energy_deviation(&results[0]).max().unwrap();
//! let leapfrog = metrics::energy_deviation(&results[1]).max().unwrap();
//! assert!(leapfrog < euler);
//! ```
//!
//! [`Solver`]: tribody_solvers::Solver

mod batch;
mod trajectory;

pub mod metrics;
pub mod presets;
pub mod scenario;

pub use batch::{BatchError, Preset, SimulationResult, run_simulation, run_simulations_in_parallel};
pub use metrics::MetricSeries;
pub use scenario::{Scenario, ScenarioError, load_scenario};
pub use trajectory::{Trajectory, trajectories};
