#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tribody_core::StepIntegrable;

/// Angles (rad) from the downward vertical and angular velocities (rad/s).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PendulumState {
    pub theta1: f64,
    pub theta2: f64,
    pub omega1: f64,
    pub omega2: f64,
}

impl PendulumState {
    #[must_use]
    pub const fn new(theta1: f64, theta2: f64, omega1: f64, omega2: f64) -> Self {
        Self {
            theta1,
            theta2,
            omega1,
            omega2,
        }
    }

    /// Both arms at rest at the given angles.
    #[must_use]
    pub const fn at_rest(theta1: f64, theta2: f64) -> Self {
        Self::new(theta1, theta2, 0.0, 0.0)
    }
}

/// Time derivative of a [`PendulumState`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PendulumRates {
    pub dtheta1: f64,
    pub dtheta2: f64,
    pub domega1: f64,
    pub domega2: f64,
}

impl StepIntegrable<f64> for PendulumState {
    type Derivative = PendulumRates;

    fn step(&self, rates: PendulumRates, dt: f64) -> Self {
        Self {
            theta1: self.theta1 + rates.dtheta1 * dt,
            theta2: self.theta2 + rates.dtheta2 * dt,
            omega1: self.omega1 + rates.domega1 * dt,
            omega2: self.omega2 + rates.domega2 * dt,
        }
    }
}
