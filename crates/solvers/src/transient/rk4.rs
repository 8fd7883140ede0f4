//! Classical fourth-order Runge–Kutta integration.
//!
//! RK4 on the combined state `(R, V)` with derivative `(V, A(R))`:
//!
//! ```text
//! k1 = (V,            A(R))
//! k2 = (V + k1ᵥ·dt/2, A(R + k1ᵣ·dt/2))
//! k3 = (V + k2ᵥ·dt/2, A(R + k2ᵣ·dt/2))
//! k4 = (V + k3ᵥ·dt,   A(R + k3ᵣ·dt))
//! (R', V') = (R, V) + (k1 + 2·k2 + 2·k3 + k4)/6 · dt
//! ```
//!
//! Four force evaluations per step and no state carried between steps.

use tribody_core::{
    Observer, SolverSettings, StepIntegrable, ThreeBodySystem, Triple, Vector3,
    gravity::GravitationalParameters,
};

use super::{Action, Error, Event, Solution, State, Stepper, solve_with};

/// Classical RK4 stepper.
#[derive(Debug, Clone, Copy)]
pub struct Rk4 {
    params: GravitationalParameters,
}

/// Returns `(k1 + 2·k2 + 2·k3 + k4) / 6` for each body.
fn weighted(
    k1: &Triple<Vector3>,
    k2: &Triple<Vector3>,
    k3: &Triple<Vector3>,
    k4: &Triple<Vector3>,
) -> Triple<Vector3> {
    std::array::from_fn(|i| (k1[i] + k2[i] * 2.0 + k3[i] * 2.0 + k4[i]) / 6.0)
}

impl Stepper for Rk4 {
    const NAME: &'static str = "RK4";

    fn start(params: GravitationalParameters, _initial: &State) -> Self {
        Self { params }
    }

    fn step(&mut self, state: &State, dt: f64) -> State {
        let half_dt = 0.5 * dt;
        let (r, v) = (&state.positions, &state.velocities);

        let k1_r = *v;
        let k1_v = self.params.accelerations(r);

        let k2_r = v.step(k1_v, half_dt);
        let k2_v = self.params.accelerations(&r.step(k1_r, half_dt));

        let k3_r = v.step(k2_v, half_dt);
        let k3_v = self.params.accelerations(&r.step(k2_r, half_dt));

        let k4_r = v.step(k3_v, dt);
        let k4_v = self.params.accelerations(&r.step(k3_r, dt));

        State {
            positions: r.step(weighted(&k1_r, &k2_r, &k3_r, &k4_r), dt),
            velocities: v.step(weighted(&k1_v, &k2_v, &k3_v, &k4_v), dt),
        }
    }
}

/// Integrates a three-body system using classical RK4.
///
/// # Errors
///
/// Returns an error if the settings are invalid.
pub fn solve<Obs>(
    settings: &SolverSettings,
    system: &ThreeBodySystem,
    observer: Obs,
) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    solve_with::<Rk4, _>(settings, system, observer)
}

/// Integrates a three-body system using classical RK4 without observation.
///
/// # Errors
///
/// Returns an error if the settings are invalid.
pub fn solve_unobserved(
    settings: &SolverSettings,
    system: &ThreeBodySystem,
) -> Result<Solution, Error> {
    solve(settings, system, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::transient::test_fixtures::{circular_orbit, massless, orbit_radius, settings};

    #[test]
    fn weights_sum_to_one() {
        let k = [Vector3::new(1.0, 2.0, 3.0); 3];
        assert_eq!(weighted(&k, &k, &k, &k), k);
    }

    #[test]
    fn massless_bodies_drift_exactly() {
        let system = massless();
        let solution = solve_unobserved(&settings(0.0, 1.0, 0.25), &system).unwrap();
        let last = solution.last().unwrap();

        for i in 0..3 {
            let expected = system.positions()[i] + system.velocities()[i];
            assert_relative_eq!((last.positions[i] - expected).norm(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn returns_to_start_after_one_period() {
        let (system, period) = circular_orbit();
        let dt = period / 200.0;
        let solution = solve_unobserved(&settings(0.0, period + 0.5 * dt, dt), &system).unwrap();
        let last = solution.last().unwrap();

        assert_eq!(solution.steps, 200);
        assert_relative_eq!(last.t, period, max_relative = 1e-12);
        assert_relative_eq!(
            (last.positions[1] - system.positions()[1]).norm(),
            0.0,
            epsilon = 1e-6
        );
        assert_relative_eq!(orbit_radius(last), 1.0, max_relative = 1e-7);
    }
}
