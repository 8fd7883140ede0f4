//! Velocity Verlet integration.
//!
//! ```text
//! R'     = R + V·dt + a_prev·dt²/2
//! a_new  = A(R')
//! V'     = V + (a_prev + a_new)/2·dt
//! a_prev ← a_new
//! ```
//!
//! Like leapfrog, one force evaluation per step with the previous
//! acceleration carried across steps, and symplectic.

use tribody_core::{
    Observer, SolverSettings, StepIntegrable, ThreeBodySystem, Triple, Vector3,
    gravity::GravitationalParameters,
};

use super::{Action, Error, Event, Solution, State, Stepper, solve_with};

/// Velocity Verlet stepper carrying the previous step's acceleration.
#[derive(Debug, Clone, Copy)]
pub struct VelocityVerlet {
    params: GravitationalParameters,
    a_prev: Triple<Vector3>,
}

impl Stepper for VelocityVerlet {
    const NAME: &'static str = "Velocity Verlet";

    fn start(params: GravitationalParameters, initial: &State) -> Self {
        Self {
            params,
            a_prev: params.accelerations(&initial.positions),
        }
    }

    fn step(&mut self, state: &State, dt: f64) -> State {
        let positions = state
            .positions
            .step(state.velocities, dt)
            .step(self.a_prev, 0.5 * dt * dt);
        let a_new = self.params.accelerations(&positions);
        let a_avg: Triple<Vector3> = std::array::from_fn(|i| (self.a_prev[i] + a_new[i]) * 0.5);
        let velocities = state.velocities.step(a_avg, dt);

        self.a_prev = a_new;
        State {
            positions,
            velocities,
        }
    }
}

/// Integrates a three-body system using velocity Verlet.
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
    solve_with::<VelocityVerlet, _>(settings, system, observer)
}

/// Integrates a three-body system using velocity Verlet without observation.
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
