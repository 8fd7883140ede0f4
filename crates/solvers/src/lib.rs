//! Numerical integrators for the tribody framework.
//!
//! # Modules
//!
//! - [`transient`]: the five fixed-step three-body integrators and the
//!   driving loop they share
//! - [`ode`]: a generic classical RK4 for any [`StepIntegrable`] state
//!
//! [`Solver`] names the five methods and dispatches to their entry points.
//!
//! [`StepIntegrable`]: tribody_core::StepIntegrable

mod solver;

pub mod ode;
pub mod transient;

pub use solver::{ParseSolverError, Solver};
