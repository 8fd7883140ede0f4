//! Fixed-step integrators for three-body systems.
//!
//! Every method shares the same driving loop ([`solve_with`]):
//!
//! 1. Validate the settings.
//! 2. Compute `N = floor((t_end - t_start) / dt)` and the gravitational
//!    parameters `μᵢ = mᵢ·G`.
//! 3. Emit the initial sample at `t_start`.
//! 4. Apply one [`Stepper::step`] `N` times, emitting the sample at
//!    `t_start + k·dt` after step `k`.
//!
//! The methods differ only in their stepper:
//!
//! | Module | Force evaluations per step | Persisted state |
//! |---|---|---|
//! | [`euler`] | 1 | none |
//! | [`midpoint`] | 2 | none |
//! | [`rk4`] | 4 | none |
//! | [`leapfrog`] | 1 | previous acceleration |
//! | [`verlet`] | 1 | previous acceleration |
//!
//! # Example
//!
//! ```
//! use tribody_core::{Body, SolverSettings, ThreeBodySystem};
//! use tribody_solvers::transient::leapfrog;
//!
//! let system = ThreeBodySystem::new(
//!     Body::new("star", 1.0, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
//!     Body::new("planet", 0.0, [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
//!     Body::new("dust", 0.0, [-5.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
//! );
//! let settings = SolverSettings::new(0.0, 1.0, 0.01, 1.0).unwrap();
//!
//! let solution = leapfrog::solve_unobserved(&settings, &system).unwrap();
//! assert_eq!(solution.history.len(), 101);
//! ```

mod action;
mod error;
mod event;
mod solution;
mod stepper;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};
pub use stepper::{State, Stepper, solve_with};

pub mod euler;
pub mod leapfrog;
pub mod midpoint;
pub mod rk4;
pub mod verlet;

#[cfg(test)]
pub(crate) mod test_fixtures;
