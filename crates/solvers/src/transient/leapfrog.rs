//! Kick-drift-kick leapfrog integration.
//!
//! ```text
//! V_mid  = V + a_prev·dt/2
//! R'     = R + V_mid·dt
//! a_new  = A(R')
//! V'     = V_mid + a_new·dt/2
//! a_prev ← a_new
//! ```
//!
//! The acceleration at the end of a step is reused at the start of the next,
//! so each step costs a single force evaluation. `a_prev` is seeded from the
//! initial positions when the run starts. The method is symplectic: energy
//! error stays bounded instead of drifting.

use tribody_core::{
    Observer, SolverSettings, StepIntegrable, ThreeBodySystem, Triple, Vector3,
    gravity::GravitationalParameters,
};

use super::{Action, Error, Event, Solution, State, Stepper, solve_with};

/// Leapfrog stepper carrying the previous step's acceleration.
#[derive(Debug, Clone, Copy)]
pub struct Leapfrog {
    params: GravitationalParameters,
    a_prev: Triple<Vector3>,
}

impl Stepper for Leapfrog {
    const NAME: &'static str = "Leapfrog";

    fn start(params: GravitationalParameters, initial: &State) -> Self {
        Self {
            params,
            a_prev: params.accelerations(&initial.positions),
        }
    }

    fn step(&mut self, state: &State, dt: f64) -> State {
        let half_dt = 0.5 * dt;

        let v_mid = state.velocities.step(self.a_prev, half_dt);
        let positions = state.positions.step(v_mid, dt);
        let a_new = self.params.accelerations(&positions);
        let velocities = v_mid.step(a_new, half_dt);

        self.a_prev = a_new;
        State {
            positions,
            velocities,
        }
    }
}

/// Integrates a three-body system using kick-drift-kick leapfrog.
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
    solve_with::<Leapfrog, _>(settings, system, observer)
}

/// Integrates a three-body system using kick-drift-kick leapfrog without
/// observation.
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

    use crate::transient::test_fixtures::{at_rest, circular_orbit, orbit_radius, settings};

    #[test]
    fn start_seeds_the_initial_acceleration() {
        let system = at_rest();
        let params = GravitationalParameters::new(&system, 1.0);
        let initial = State {
            positions: system.positions(),
            velocities: system.velocities(),
        };

        let stepper = Leapfrog::start(params, &initial);

        assert_eq!(stepper.a_prev, params.accelerations(&system.positions()));
    }

    #[test]
    fn step_updates_the_stored_acceleration() {
        let system = at_rest();
        let params = GravitationalParameters::new(&system, 1.0);
        let initial = State {
            positions: system.positions(),
            velocities: system.velocities(),
        };
        let mut stepper = Leapfrog::start(params, &initial);

        let next = stepper.step(&initial, 0.01);

        assert_eq!(stepper.a_prev, params.accelerations(&next.positions));
    }

    #[test]
    fn repeated_runs_are_identical() {
        let (system, period) = circular_orbit();
        let settings = settings(0.0, period, period / 100.0);

        let first = solve_unobserved(&settings, &system).unwrap();
        let second = solve_unobserved(&settings, &system).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn holds_a_circular_orbit_for_one_period() {
        let (system, period) = circular_orbit();
        let dt = period / 1000.0;
        let solution = solve_unobserved(&settings(0.0, period + 0.5 * dt, dt), &system).unwrap();

        for sample in &solution.history {
            assert_relative_eq!(orbit_radius(sample), 1.0, max_relative = 1e-3);
        }
    }
}
