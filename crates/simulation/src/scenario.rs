//! Comparison scenarios read from TOML or YAML files.
//!
//! A scenario names the solvers to compare, one set of settings, and three
//! bodies. Vectors are written as `[x, y, z]` in SI units:
//!
//! ```toml
//! name = "binary"
//! solvers = ["rk4", "leapfrog"]
//!
//! [settings]
//! t_start = 0.0
//! t_end = 10.0
//! dt = 0.01
//! gravitational_constant = 1.0
//!
//! [[bodies]]
//! name = "a"
//! mass = 1.0
//! position = [-0.5, 0.0, 0.0]
//! velocity = [0.0, -0.5, 0.0]
//! # ... two more bodies
//! ```

use std::{fs::File, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tribody_core::{Body, SettingsError, SolverSettings, ThreeBodySystem};
use tribody_solvers::Solver;

use crate::Preset;

/// A set of solvers to compare on one system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub solvers: Vec<Solver>,
    pub settings: SolverSettings,
    pub bodies: [Body; 3],
}

/// Errors that can occur while loading a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid settings: {0}")]
    Settings(#[from] SettingsError),
    #[error("scenario `{0}` lists no solvers")]
    NoSolvers(String),
}

impl Scenario {
    /// Returns the bodies as a system.
    #[must_use]
    pub fn system(&self) -> ThreeBodySystem {
        ThreeBodySystem::from(self.bodies.clone())
    }

    /// Returns one preset per listed solver, in listed order.
    #[must_use]
    pub fn presets(&self) -> Vec<Preset> {
        let system = self.system();
        self.solvers
            .iter()
            .map(|&solver| Preset::new(solver, self.settings, system.clone()))
            .collect()
    }

    /// Parses a scenario from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is malformed or the scenario is invalid.
    pub fn from_toml(text: &str) -> Result<Self, ScenarioError> {
        let scenario: Self = toml::from_str(text)?;
        scenario.checked()
    }

    /// Parses a scenario from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is malformed or the scenario is invalid.
    pub fn from_yaml(text: &str) -> Result<Self, ScenarioError> {
        let scenario: Self = serde_yaml::from_str(text)?;
        scenario.checked()
    }

    fn checked(self) -> Result<Self, ScenarioError> {
        if self.solvers.is_empty() {
            return Err(ScenarioError::NoSolvers(self.name));
        }
        self.settings.validate()?;
        Ok(self)
    }
}

/// Loads a scenario from a `.toml` file, or from YAML for any other extension.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, lists no solvers, or
/// has invalid settings.
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<Scenario, ScenarioError> {
    let path = path.as_ref();
    if path.extension().is_some_and(|ext| ext == "toml") {
        let contents = std::fs::read_to_string(path)?;
        Scenario::from_toml(&contents)
    } else {
        let reader = File::open(path)?;
        let scenario: Scenario = serde_yaml::from_reader(reader)?;
        scenario.checked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML: &str = "
name: drift
solvers: [euler, verlet, rk4]
settings:
  t_start: 0.0
  t_end: 1.0
  dt: 0.25
  gravitational_constant: 1.0
bodies:
  - name: a
    mass: 0.0
    position: [0.0, 0.0, 0.0]
    velocity: [1.0, 0.0, 0.0]
  - name: b
    mass: 0.0
    position: [0.0, 1.0, 0.0]
    velocity: [0.0, 0.0, 0.0]
  - name: c
    mass: 0.0
    position: [0.0, 0.0, 1.0]
    velocity: [0.0, 0.0, 0.0]
";

    #[test]
    fn parses_yaml_with_solver_aliases() {
        let scenario = Scenario::from_yaml(YAML).unwrap();

        assert_eq!(scenario.name, "drift");
        assert_eq!(
            scenario.solvers,
            vec![Solver::ForwardEuler, Solver::VelocityVerlet, Solver::Rk4]
        );
        assert_eq!(scenario.settings.dt, 0.25);
        assert_eq!(scenario.system().names(), ["a", "b", "c"]);
    }

    #[test]
    fn presets_follow_solver_order() {
        let scenario = Scenario::from_yaml(YAML).unwrap();
        let presets = scenario.presets();

        let solvers: Vec<_> = presets.iter().map(|p| p.solver).collect();
        assert_eq!(solvers, scenario.solvers);
        assert!(presets.iter().all(|p| p.system == scenario.system()));
    }

    #[test]
    fn rejects_invalid_settings() {
        let text = YAML.replace("dt: 0.25", "dt: -1.0");
        assert!(matches!(
            Scenario::from_yaml(&text),
            Err(ScenarioError::Settings(SettingsError::NonPositiveStep(_)))
        ));
    }

    #[test]
    fn rejects_an_empty_solver_list() {
        let text = YAML.replace("[euler, verlet, rk4]", "[]");
        assert!(matches!(
            Scenario::from_yaml(&text),
            Err(ScenarioError::NoSolvers(name)) if name == "drift"
        ));
    }

    #[test]
    fn rejects_unknown_solvers() {
        let text = YAML.replace("verlet", "yoshida");
        assert!(matches!(Scenario::from_yaml(&text), Err(ScenarioError::Yaml(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            load_scenario("does/not/exist.yaml"),
            Err(ScenarioError::Io(_))
        ));
    }
}
