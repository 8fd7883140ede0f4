#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tribody_core::Vector3;

use crate::{PendulumRates, PendulumState};

/// Errors that can occur when constructing a [`DoublePendulum`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum PendulumError {
    #[error("{name} must be positive and finite, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("g must be finite, got {0}")]
    NonFiniteGravity(f64),
}

/// Two point masses on massless rigid rods, the second hung from the first.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DoublePendulum {
    /// Upper bob mass (kg).
    pub m1: f64,
    /// Lower bob mass (kg).
    pub m2: f64,
    /// Upper rod length (m).
    pub l1: f64,
    /// Lower rod length (m).
    pub l2: f64,
    /// Gravitational acceleration (m/s²).
    pub g: f64,
}

impl DoublePendulum {
    /// Creates a validated pendulum.
    ///
    /// # Errors
    ///
    /// Returns an error if a mass or length is not positive and finite, or if
    /// `g` is not finite.
    pub fn new(m1: f64, m2: f64, l1: f64, l2: f64, g: f64) -> Result<Self, PendulumError> {
        for (name, value) in [("m1", m1), ("m2", m2), ("l1", l1), ("l2", l2)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(PendulumError::NonPositive { name, value });
            }
        }
        if !g.is_finite() {
            return Err(PendulumError::NonFiniteGravity(g));
        }
        Ok(Self { m1, m2, l1, l2, g })
    }

    /// Time derivative of `state` from the Lagrangian equations of motion.
    ///
    /// With `Δ = θ₁ − θ₂` and `D = 2m₁ + m₂ − m₂·cos 2Δ`:
    ///
    /// ```text
    /// ω₁' = (−g(2m₁+m₂)·sin θ₁ − m₂g·sin(θ₁−2θ₂) − 2m₂·sin Δ·(ω₂²l₂ + ω₁²l₁·cos Δ)) / (l₁D)
    /// ω₂' = 2·sin Δ·(ω₁²l₁(m₁+m₂) + g(m₁+m₂)·cos θ₁ + ω₂²l₂m₂·cos Δ) / (l₂D)
    /// ```
    #[must_use]
    pub fn derivative(&self, state: &PendulumState) -> PendulumRates {
        let Self { m1, m2, l1, l2, g } = *self;
        let PendulumState {
            theta1,
            theta2,
            omega1,
            omega2,
        } = *state;

        let delta = theta1 - theta2;
        let (sin_d, cos_d) = delta.sin_cos();
        let denominator = 2.0 * m1 + m2 - m2 * (2.0 * delta).cos();
        let w1_sq = omega1 * omega1;
        let w2_sq = omega2 * omega2;

        let domega1 = (-g * (2.0 * m1 + m2) * theta1.sin()
            - m2 * g * (theta1 - 2.0 * theta2).sin()
            - 2.0 * sin_d * m2 * (w2_sq * l2 + w1_sq * l1 * cos_d))
            / (l1 * denominator);
        let domega2 = 2.0
            * sin_d
            * (w1_sq * l1 * (m1 + m2) + g * (m1 + m2) * theta1.cos() + w2_sq * l2 * m2 * cos_d)
            / (l2 * denominator);

        PendulumRates {
            dtheta1: omega1,
            dtheta2: omega2,
            domega1,
            domega2,
        }
    }

    /// Kinetic plus potential energy, with zero potential at the pivot height.
    #[must_use]
    pub fn energy(&self, state: &PendulumState) -> f64 {
        let Self { m1, m2, l1, l2, g } = *self;
        let PendulumState {
            theta1,
            theta2,
            omega1,
            omega2,
        } = *state;

        let kinetic = 0.5 * m1 * (l1 * omega1).powi(2)
            + 0.5
                * m2
                * ((l1 * omega1).powi(2)
                    + (l2 * omega2).powi(2)
                    + 2.0 * l1 * l2 * omega1 * omega2 * (theta1 - theta2).cos());
        let potential = -(m1 + m2) * g * l1 * theta1.cos() - m2 * g * l2 * theta2.cos();

        kinetic + potential
    }

    /// Cartesian positions of the two bobs relative to the pivot, with `y`
    /// pointing up and `z = 0`.
    #[must_use]
    pub fn bob_positions(&self, state: &PendulumState) -> [Vector3; 2] {
        let upper = Vector3::new(
            self.l1 * state.theta1.sin(),
            -self.l1 * state.theta1.cos(),
            0.0,
        );
        let lower = upper
            + Vector3::new(
                self.l2 * state.theta2.sin(),
                -self.l2 * state.theta2.cos(),
                0.0,
            );
        [upper, lower]
    }
}
