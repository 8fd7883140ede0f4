//! Pairwise Newtonian gravitation for exactly three bodies.
//!
//! The law is written out per body rather than as a generic N-body loop:
//!
//! ```text
//! a1 = μ2·(R2−R1)/|R2−R1|³ + μ3·(R3−R1)/|R3−R1|³
//! a2 = μ1·(R1−R2)/|R1−R2|³ + μ3·(R3−R2)/|R3−R2|³
//! a3 = μ1·(R1−R3)/|R1−R3|³ + μ2·(R2−R3)/|R2−R3|³
//! ```
//!
//! There is no softening. Coincident bodies divide by zero and the resulting
//! non-finite values propagate into the trajectory.

use crate::{ThreeBodySystem, Triple, Vector3};

/// Gravitational parameters `μᵢ = mᵢ·G` (m³/s²), computed once per run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravitationalParameters([f64; 3]);

impl GravitationalParameters {
    #[must_use]
    pub fn new(system: &ThreeBodySystem, gravitational_constant: f64) -> Self {
        Self(system.masses().map(|m| m * gravitational_constant))
    }

    /// Returns `[μ1, μ2, μ3]`.
    #[must_use]
    pub fn values(&self) -> &[f64; 3] {
        &self.0
    }

    /// Evaluates the acceleration law at `positions`.
    #[must_use]
    pub fn accelerations(&self, positions: &Triple<Vector3>) -> Triple<Vector3> {
        accelerations(positions, &self.0)
    }
}

/// Pull of a body with parameter `mu` located `r` away (`r` points toward it).
#[inline]
fn pull(mu: f64, r: Vector3) -> Vector3 {
    let d = r.norm();
    r * (mu / (d * d * d))
}

/// Computes the acceleration of each body from positions `[R1, R2, R3]` and
/// gravitational parameters `[μ1, μ2, μ3]`.
#[must_use]
pub fn accelerations(positions: &Triple<Vector3>, mu: &[f64; 3]) -> Triple<Vector3> {
    let [r1, r2, r3] = *positions;
    let [mu1, mu2, mu3] = *mu;

    [
        pull(mu2, r2 - r1) + pull(mu3, r3 - r1),
        pull(mu1, r1 - r2) + pull(mu3, r3 - r2),
        pull(mu1, r1 - r3) + pull(mu2, r2 - r3),
    ]
}
