#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{ThreeBodySystem, Vector3};

/// One value per body, in system order.
pub type Triple<T> = [T; 3];

/// One sample of a solved trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolutionStep {
    /// Time (s).
    pub t: f64,
    /// Positions (m), one per body.
    pub positions: Triple<Vector3>,
    /// Velocities (m/s), one per body.
    pub velocities: Triple<Vector3>,
}

impl SolutionStep {
    /// Creates the sample at `t` holding the initial condition of `system`.
    #[must_use]
    pub fn initial(t: f64, system: &ThreeBodySystem) -> Self {
        Self {
            t,
            positions: system.positions(),
            velocities: system.velocities(),
        }
    }

    /// Returns `true` if every position and velocity is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.positions
            .iter()
            .chain(&self.velocities)
            .all(|v| v.is_finite())
    }
}
