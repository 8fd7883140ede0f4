#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Triple, Vector3};

/// A point mass with an initial position and velocity.
///
/// A `Body` describes the initial condition of a run and is never mutated
/// while integrating.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Body {
    pub name: String,
    /// Mass (kg).
    pub mass: f64,
    /// Position (m).
    pub position: Vector3,
    /// Velocity (m/s).
    pub velocity: Vector3,
}

impl Body {
    /// Creates a body from plain SI values.
    pub fn new(
        name: impl Into<String>,
        mass: f64,
        position: impl Into<Vector3>,
        velocity: impl Into<Vector3>,
    ) -> Self {
        Self {
            name: name.into(),
            mass,
            position: position.into(),
            velocity: velocity.into(),
        }
    }
}

/// Exactly three bodies.
///
/// The order fixes which index each body occupies in every per-step triple
/// of positions and velocities.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ThreeBodySystem {
    bodies: [Body; 3],
}

impl ThreeBodySystem {
    /// Creates a system from three bodies in index order.
    #[must_use]
    pub fn new(first: Body, second: Body, third: Body) -> Self {
        Self {
            bodies: [first, second, third],
        }
    }

    /// Returns the bodies in index order.
    #[must_use]
    pub fn bodies(&self) -> &[Body; 3] {
        &self.bodies
    }

    /// Returns the body names in index order.
    #[must_use]
    pub fn names(&self) -> [&str; 3] {
        self.bodies.each_ref().map(|b| b.name.as_str())
    }

    #[must_use]
    pub fn masses(&self) -> Triple<f64> {
        self.bodies.each_ref().map(|b| b.mass)
    }

    #[must_use]
    pub fn positions(&self) -> Triple<Vector3> {
        self.bodies.each_ref().map(|b| b.position)
    }

    #[must_use]
    pub fn velocities(&self) -> Triple<Vector3> {
        self.bodies.each_ref().map(|b| b.velocity)
    }
}

impl From<[Body; 3]> for ThreeBodySystem {
    fn from(bodies: [Body; 3]) -> Self {
        Self { bodies }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system() -> ThreeBodySystem {
        ThreeBodySystem::new(
            Body::new("a", 1.0, [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            Body::new("b", 2.0, [1.0, 0.0, 0.0], [0.0, 2.0, 0.0]),
            Body::new("c", 3.0, [2.0, 0.0, 0.0], [0.0, 3.0, 0.0]),
        )
    }

    #[test]
    fn accessors_preserve_body_order() {
        let sys = system();

        assert_eq!(sys.names(), ["a", "b", "c"]);
        assert_eq!(sys.masses(), [1.0, 2.0, 3.0]);
        assert_eq!(sys.positions()[2], Vector3::new(2.0, 0.0, 0.0));
        assert_eq!(sys.velocities()[1], Vector3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn builds_from_array() {
        let sys = system();
        let rebuilt = ThreeBodySystem::from(sys.bodies().clone());
        assert_eq!(rebuilt, sys);
    }
}
