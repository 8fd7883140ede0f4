//! Compare the accuracy of every integrator on one system.
//!
//! # Usage
//!
//! ```text
//! cargo run --example compare
//! cargo run --example compare -- figure-eight
//! cargo run --example compare -- crates/simulation/scenarios/binary.toml
//! RUST_LOG=debug cargo run --example compare
//! ```
//!
//! # Modes
//!
//! - **sun-earth-moon** (default): one year in hourly steps. Reports the
//!   relative energy drift and the Earth–Moon distance range per solver.
//!
//! - **figure-eight**: two periods of the Chenciner–Montgomery orbit.
//!
//! - **<path>**: a scenario file (`.toml`, or YAML otherwise) naming its own
//!   solvers, settings, and bodies.

use std::error::Error;

use tribody_core::{SolverSettings, ThreeBodySystem};
use tribody_simulation::{
    Preset, Scenario, SimulationResult, load_scenario,
    metrics::{self, distance},
    presets, run_simulations_in_parallel,
};
use tribody_solvers::Solver;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mode = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sun-earth-moon".into());
    let (title, batch) = match mode.as_str() {
        "sun-earth-moon" => (
            "Sun–Earth–Moon, one year".to_owned(),
            every_solver(presets::sun_earth_moon_settings(), &presets::sun_earth_moon()),
        ),
        "figure-eight" => {
            let period = presets::FIGURE_EIGHT_PERIOD;
            let settings = SolverSettings::new(0.0, 2.0 * period, 0.01, 1.0)?;
            (
                "Figure-eight, two periods".to_owned(),
                every_solver(settings, &presets::figure_eight()),
            )
        }
        path => {
            let scenario: Scenario = load_scenario(path)?;
            (scenario.name.clone(), scenario.presets())
        }
    };

    let results = run_simulations_in_parallel(&batch)?;
    report(&title, &results);
    Ok(())
}

/// One preset per solver on the same system.
fn every_solver(settings: SolverSettings, system: &ThreeBodySystem) -> Vec<Preset> {
    Solver::ALL
        .into_iter()
        .map(|solver| Preset::new(solver, settings, system.clone()))
        .collect()
}

fn report(title: &str, results: &[SimulationResult]) {
    println!("{title}");
    println!(
        "{:<16} {:>8} {:>10} {:>14} {:>14} {:>14}",
        "solver", "steps", "forces", "max |ΔE/E0|", "min d(2,3)", "max d(2,3)"
    );

    for result in results {
        let drift = metrics::relative_deviation_series(result, metrics::total_energy);
        let d23 = metrics::metric_series(result, |step, _| distance(step, 1, 2));
        let (min, max) = d23
            .values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &d| {
                (lo.min(d), hi.max(d))
            });

        let steps = result.solution.len() - 1;
        println!(
            "{:<16} {:>8} {:>10} {:>14.3e} {:>14.6e} {:>14.6e}",
            result.solver_name,
            steps,
            steps * result.solver.force_evaluations(),
            drift.max().unwrap_or(f64::NAN),
            min,
            max,
        );
    }
}
