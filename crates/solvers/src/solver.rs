use std::{fmt, str::FromStr};

use thiserror::Error;
use tribody_core::{Observer, SolverSettings, ThreeBodySystem};

use crate::transient::{
    Action, Error, Event, Solution, euler, leapfrog, midpoint, rk4, verlet,
};

/// Identifies one of the fixed-step three-body integrators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Solver {
    #[cfg_attr(feature = "serde", serde(alias = "euler"))]
    ForwardEuler,
    Midpoint,
    Rk4,
    Leapfrog,
    #[cfg_attr(feature = "serde", serde(alias = "verlet"))]
    VelocityVerlet,
}

impl Solver {
    /// Every solver, in order of increasing sophistication.
    pub const ALL: [Solver; 5] = [
        Solver::ForwardEuler,
        Solver::Midpoint,
        Solver::Rk4,
        Solver::Leapfrog,
        Solver::VelocityVerlet,
    ];

    /// Returns the human-readable name of the method.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Solver::ForwardEuler => "Forward Euler",
            Solver::Midpoint => "Midpoint",
            Solver::Rk4 => "RK4",
            Solver::Leapfrog => "Leapfrog",
            Solver::VelocityVerlet => "Velocity Verlet",
        }
    }

    /// Returns the number of acceleration evaluations per step, amortized
    /// over a run for the methods that carry the previous acceleration.
    #[must_use]
    pub fn force_evaluations(self) -> usize {
        match self {
            Solver::ForwardEuler | Solver::Leapfrog | Solver::VelocityVerlet => 1,
            Solver::Midpoint => 2,
            Solver::Rk4 => 4,
        }
    }

    /// Returns `true` if the method preserves phase-space volume.
    #[must_use]
    pub fn is_symplectic(self) -> bool {
        matches!(self, Solver::Leapfrog | Solver::VelocityVerlet)
    }

    /// Integrates `system` with this method.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid.
    pub fn solve(
        self,
        settings: &SolverSettings,
        system: &ThreeBodySystem,
    ) -> Result<Solution, Error> {
        match self {
            Solver::ForwardEuler => euler::solve_unobserved(settings, system),
            Solver::Midpoint => midpoint::solve_unobserved(settings, system),
            Solver::Rk4 => rk4::solve_unobserved(settings, system),
            Solver::Leapfrog => leapfrog::solve_unobserved(settings, system),
            Solver::VelocityVerlet => verlet::solve_unobserved(settings, system),
        }
    }

    /// Integrates `system` with this method, reporting each step to `observer`.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid.
    pub fn solve_observed<Obs>(
        self,
        settings: &SolverSettings,
        system: &ThreeBodySystem,
        observer: Obs,
    ) -> Result<Solution, Error>
    where
        Obs: Observer<Event, Action>,
    {
        match self {
            Solver::ForwardEuler => euler::solve(settings, system, observer),
            Solver::Midpoint => midpoint::solve(settings, system, observer),
            Solver::Rk4 => rk4::solve(settings, system, observer),
            Solver::Leapfrog => leapfrog::solve(settings, system, observer),
            Solver::VelocityVerlet => verlet::solve(settings, system, observer),
        }
    }
}

impl fmt::Display for Solver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no known solver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown solver `{0}`")]
pub struct ParseSolverError(pub String);

impl FromStr for Solver {
    type Err = ParseSolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euler" | "forward_euler" => Ok(Solver::ForwardEuler),
            "midpoint" => Ok(Solver::Midpoint),
            "rk4" => Ok(Solver::Rk4),
            "leapfrog" => Ok(Solver::Leapfrog),
            "verlet" | "velocity_verlet" => Ok(Solver::VelocityVerlet),
            _ => Err(ParseSolverError(s.to_owned())),
        }
    }
}
