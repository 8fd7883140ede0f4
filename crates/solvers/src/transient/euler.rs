//! Forward Euler integration.
//!
//! ```text
//! a  = A(R)
//! R' = R + V·dt
//! V' = V + a·dt
//! ```
//!
//! One force evaluation per step; first order and not symplectic, so energy
//! drifts steadily even for a circular orbit.

use tribody_core::{
    Observer, SolverSettings, StepIntegrable, ThreeBodySystem, gravity::GravitationalParameters,
};

use super::{Action, Error, Event, Solution, State, Stepper, solve_with};

/// Forward Euler stepper.
#[derive(Debug, Clone, Copy)]
pub struct ForwardEuler {
    params: GravitationalParameters,
}

impl Stepper for ForwardEuler {
    const NAME: &'static str = "Forward Euler";

    fn start(params: GravitationalParameters, _initial: &State) -> Self {
        Self { params }
    }

    fn step(&mut self, state: &State, dt: f64) -> State {
        let a = self.params.accelerations(&state.positions);
        State {
            positions: state.positions.step(state.velocities, dt),
            velocities: state.velocities.step(a, dt),
        }
    }
}

/// Integrates a three-body system using forward Euler.
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
    solve_with::<ForwardEuler, _>(settings, system, observer)
}

/// Integrates a three-body system using forward Euler without observation.
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
