//! Systems and settings shared by the integrator tests.

use std::f64::consts::PI;

use tribody_core::{Body, SolutionStep, SolverSettings, ThreeBodySystem};

/// Settings with `G = 1`.
pub(crate) fn settings(t_start: f64, t_end: f64, dt: f64) -> SolverSettings {
    SolverSettings::new(t_start, t_end, dt, 1.0).unwrap()
}

/// Three massive bodies on a line, at rest.
pub(crate) fn at_rest() -> ThreeBodySystem {
    ThreeBodySystem::new(
        Body::new("a", 1.0, [-1.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
        Body::new("b", 2.0, [0.0, 0.5, 0.0], [0.0, 0.0, 0.0]),
        Body::new("c", 3.0, [1.0, 0.0, 0.5], [0.0, 0.0, 0.0]),
    )
}

/// Three massless bodies drifting with constant velocities.
pub(crate) fn massless() -> ThreeBodySystem {
    ThreeBodySystem::new(
        Body::new("a", 0.0, [0.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
        Body::new("b", 0.0, [0.0, 1.0, 0.0], [0.0, -2.0, 0.0]),
        Body::new("c", 0.0, [0.0, 0.0, 1.0], [0.5, 0.5, 0.5]),
    )
}

/// A test particle on a circular orbit of radius 1 around a unit mass, with a
/// distant massless spectator. Returns the system and its period (`G = 1`).
pub(crate) fn circular_orbit() -> (ThreeBodySystem, f64) {
    let system = ThreeBodySystem::new(
        Body::new("star", 1.0, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
        Body::new("planet", 0.0, [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        Body::new("spectator", 0.0, [0.0, 0.0, 100.0], [0.0, 0.0, 0.0]),
    );
    (system, 2.0 * PI)
}

/// Distance between the star and the planet of [`circular_orbit`].
pub(crate) fn orbit_radius(sample: &SolutionStep) -> f64 {
    (sample.positions[1] - sample.positions[0]).norm()
}
