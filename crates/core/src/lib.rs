//! Core types for the tribody framework.
//!
//! This crate defines the shared pieces that solvers, orchestration, and
//! metrics build on:
//!
//! - [`Vector3`]: a plain three-component vector with value semantics
//! - [`Body`] and [`ThreeBodySystem`]: the initial condition of a run
//! - [`SolverSettings`] and [`TimeSpan`]: the time grid and constants of a run
//! - [`SolutionStep`]: one sample of a solved trajectory
//! - [`gravity`]: the unrolled pairwise Newtonian acceleration law
//! - [`StepIntegrable`]: stepping a state by its derivative
//! - [`Observer`]: receives solver events and optionally returns control actions
//!
//! Quantities are plain `f64` values in SI units. The [`units`] module offers
//! unit-checked constructors built on [`uom`].
//!
//! # Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for the data model.

mod body;
mod observer;
mod settings;
mod solution;
mod step;
mod vector;

pub mod gravity;
pub mod units;

pub use body::{Body, ThreeBodySystem};
pub use observer::Observer;
pub use settings::{MAX_STEPS, SettingsError, SolverSettings, TimeSpan};
pub use solution::{SolutionStep, Triple};
pub use step::{DerivativeOf, StepIntegrable};
pub use vector::Vector3;

/// Newtonian gravitational constant (m³ kg⁻¹ s⁻², CODATA 2018).
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674_30e-11;
