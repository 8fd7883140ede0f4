//! Unit-checked constructors built on [`uom`].
//!
//! The data model stores plain SI `f64` values. These constructors accept
//! dimensioned quantities in any unit and convert once, at construction.
//!
//! ```
//! use tribody_core::{Body, SolverSettings};
//! use uom::si::f64::{Length, Mass, Time, Velocity};
//! use uom::si::{length::kilometer, mass::kilogram, time::day, velocity::kilometer_per_second};
//!
//! let earth = Body::from_quantities(
//!     "Earth",
//!     Mass::new::<kilogram>(5.9722e24),
//!     [
//!         Length::new::<kilometer>(149_597_870.7),
//!         Length::new::<kilometer>(0.0),
//!         Length::new::<kilometer>(0.0),
//!     ],
//!     [
//!         Velocity::new::<kilometer_per_second>(0.0),
//!         Velocity::new::<kilometer_per_second>(29.78),
//!         Velocity::new::<kilometer_per_second>(0.0),
//!     ],
//! );
//! assert!((earth.position.x - 1.495_978_707e11).abs() < 1.0);
//!
//! let settings = SolverSettings::from_quantities(
//!     Time::new::<day>(0.0),
//!     Time::new::<day>(1.0),
//!     Time::new::<day>(1.0 / 24.0),
//!     tribody_core::GRAVITATIONAL_CONSTANT,
//! )
//! .unwrap();
//! assert_eq!(settings.t_end, 86_400.0);
//! ```

use uom::si::{
    f64::{Length, Mass, Time, Velocity},
    length::meter,
    mass::kilogram,
    time::second,
    velocity::meter_per_second,
};

use crate::{Body, SettingsError, SolverSettings, TimeSpan, Vector3};

/// Converts a dimensioned position to metres.
#[must_use]
pub fn position_si(position: [Length; 3]) -> Vector3 {
    position.map(|c| c.get::<meter>()).into()
}

/// Converts a dimensioned velocity to metres per second.
#[must_use]
pub fn velocity_si(velocity: [Velocity; 3]) -> Vector3 {
    velocity.map(|c| c.get::<meter_per_second>()).into()
}

impl Body {
    /// Creates a body from dimensioned quantities.
    pub fn from_quantities(
        name: impl Into<String>,
        mass: Mass,
        position: [Length; 3],
        velocity: [Velocity; 3],
    ) -> Self {
        Self::new(
            name,
            mass.get::<kilogram>(),
            position_si(position),
            velocity_si(velocity),
        )
    }
}

impl TimeSpan {
    /// Creates a validated time span from dimensioned times.
    ///
    /// # Errors
    ///
    /// See [`TimeSpan::new`].
    pub fn from_quantities(t_start: Time, t_end: Time, dt: Time) -> Result<Self, SettingsError> {
        Self::new(
            t_start.get::<second>(),
            t_end.get::<second>(),
            dt.get::<second>(),
        )
    }
}

impl SolverSettings {
    /// Creates validated settings from dimensioned times.
    ///
    /// The gravitational constant is given in m³ kg⁻¹ s⁻².
    ///
    /// # Errors
    ///
    /// See [`SolverSettings::new`].
    pub fn from_quantities(
        t_start: Time,
        t_end: Time,
        dt: Time,
        gravitational_constant: f64,
    ) -> Result<Self, SettingsError> {
        Self::new(
            t_start.get::<second>(),
            t_end.get::<second>(),
            dt.get::<second>(),
            gravitational_constant,
        )
    }
}
