//! Ready-made systems for comparing integrators.

use std::f64::consts::PI;

use tribody_core::{Body, GRAVITATIONAL_CONSTANT, SolverSettings, ThreeBodySystem, Vector3};
use uom::si::{
    f64::{Length, Mass, Time, Velocity},
    length::kilometer,
    mass::kilogram,
    time::{day, hour, second},
    velocity::kilometer_per_second,
};

/// Sun, Earth, and Moon in SI units.
///
/// The Sun starts at rest at the origin. Earth is placed at 1 AU on the x axis
/// with its mean orbital speed along y, and the Moon 384 400 km beyond Earth
/// with Earth's speed plus its own mean orbital speed.
#[must_use]
pub fn sun_earth_moon() -> ThreeBodySystem {
    let km = |value: f64| Length::new::<kilometer>(value);
    let km_s = |value: f64| Velocity::new::<kilometer_per_second>(value);

    let earth_orbit = 149_600_000.0;
    let moon_orbit = 384_400.0;
    let earth_speed = 29.78;
    let moon_speed = 1.022;

    ThreeBodySystem::new(
        Body::from_quantities(
            "Sun",
            Mass::new::<kilogram>(1.988_47e30),
            [km(0.0), km(0.0), km(0.0)],
            [km_s(0.0), km_s(0.0), km_s(0.0)],
        ),
        Body::from_quantities(
            "Earth",
            Mass::new::<kilogram>(5.9722e24),
            [km(earth_orbit), km(0.0), km(0.0)],
            [km_s(0.0), km_s(earth_speed), km_s(0.0)],
        ),
        Body::from_quantities(
            "Moon",
            Mass::new::<kilogram>(7.342e22),
            [km(earth_orbit + moon_orbit), km(0.0), km(0.0)],
            [km_s(0.0), km_s(earth_speed + moon_speed), km_s(0.0)],
        ),
    )
}

/// One Julian year in hourly steps with the SI gravitational constant.
#[must_use]
pub fn sun_earth_moon_settings() -> SolverSettings {
    SolverSettings {
        t_start: 0.0,
        t_end: Time::new::<day>(365.25).get::<second>(),
        dt: Time::new::<hour>(1.0).get::<second>(),
        gravitational_constant: GRAVITATIONAL_CONSTANT,
    }
}

/// Period of [`figure_eight`] in its dimensionless units.
pub const FIGURE_EIGHT_PERIOD: f64 = 6.325_913_985;

/// The Chenciner–Montgomery figure-eight orbit.
///
/// Three unit masses chase each other along a single figure-eight curve with
/// `G = 1` and zero total momentum.
#[must_use]
pub fn figure_eight() -> ThreeBodySystem {
    let r = Vector3::new(0.970_004_36, -0.243_087_53, 0.0);
    let v = Vector3::new(-0.932_407_37, -0.864_731_46, 0.0);

    ThreeBodySystem::new(
        Body::new("a", 1.0, r, -v * 0.5),
        Body::new("b", 1.0, -r, -v * 0.5),
        Body::new("c", 1.0, Vector3::ZERO, v),
    )
}

/// A two-body circular orbit and its period.
#[derive(Debug, Clone, PartialEq)]
pub struct CircularOrbit {
    pub system: ThreeBodySystem,
    pub period: f64,
}

/// Places two bodies on circular orbits about their barycenter.
///
/// The central body starts on the negative x axis and the orbiter on the
/// positive x axis, both moving in the xy plane. A massless third body sits far
/// above the plane, where it neither feels nor exerts any force.
#[must_use]
pub fn two_body_circular(
    central_mass: f64,
    orbiter_mass: f64,
    separation: f64,
    gravitational_constant: f64,
) -> CircularOrbit {
    let total_mass = central_mass + orbiter_mass;
    let mu = gravitational_constant * total_mass;
    let relative_speed = (mu / separation).sqrt();

    let central_share = orbiter_mass / total_mass;
    let orbiter_share = central_mass / total_mass;

    let system = ThreeBodySystem::new(
        Body::new(
            "central",
            central_mass,
            [-central_share * separation, 0.0, 0.0],
            [0.0, -central_share * relative_speed, 0.0],
        ),
        Body::new(
            "orbiter",
            orbiter_mass,
            [orbiter_share * separation, 0.0, 0.0],
            [0.0, orbiter_share * relative_speed, 0.0],
        ),
        Body::new(
            "observer",
            0.0,
            [0.0, 0.0, 1.0e3 * separation],
            [0.0, 0.0, 0.0],
        ),
    );

    CircularOrbit {
        system,
        period: 2.0 * PI * (separation.powi(3) / mu).sqrt(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn sun_earth_moon_is_in_si_units() {
        let system = sun_earth_moon();
        let [sun, earth, moon] = system.bodies();

        assert_eq!(system.names(), ["Sun", "Earth", "Moon"]);
        assert_eq!(sun.position, Vector3::ZERO);
        assert_relative_eq!(earth.position.x, 1.496e11, max_relative = 1e-12);
        assert_relative_eq!(moon.position.x - earth.position.x, 3.844e8, max_relative = 1e-9);
        assert_relative_eq!(earth.velocity.y, 29_780.0, max_relative = 1e-12);
        assert_relative_eq!(moon.velocity.y, 30_802.0, max_relative = 1e-12);
    }

    #[test]
    fn sun_earth_moon_settings_span_a_year_of_hours() {
        let settings = sun_earth_moon_settings();

        assert!(settings.validate().is_ok());
        assert_eq!(settings.dt, 3600.0);
        assert_eq!(settings.steps(), 8766);
    }

    #[test]
    fn figure_eight_has_zero_momentum() {
        let system = figure_eight();
        let momentum = system
            .bodies()
            .iter()
            .fold(Vector3::ZERO, |p, b| p + b.velocity * b.mass);

        assert_relative_eq!(momentum.norm(), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn circular_orbit_is_centered_on_the_barycenter() {
        let orbit = two_body_circular(3.0, 1.0, 2.0, 1.0);
        let [central, orbiter, observer] = orbit.system.bodies();

        let barycenter = central.position * central.mass + orbiter.position * orbiter.mass;
        let momentum = central.velocity * central.mass + orbiter.velocity * orbiter.mass;
        assert_relative_eq!(barycenter.norm(), 0.0, epsilon = 1e-15);
        assert_relative_eq!(momentum.norm(), 0.0, epsilon = 1e-15);
        assert_relative_eq!((orbiter.position - central.position).norm(), 2.0);
        assert_eq!(observer.mass, 0.0);

        // T = 2π·sqrt(d³ / (G·M)) = 2π·sqrt(8 / 4)
        assert_relative_eq!(orbit.period, 2.0 * PI * 2.0_f64.sqrt());
    }
}
