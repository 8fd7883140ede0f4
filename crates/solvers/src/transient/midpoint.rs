//! Explicit midpoint integration.
//!
//! ```text
//! a     = A(R)
//! R_mid = R + V·dt/2
//! V_mid = V + a·dt/2
//! a_mid = A(R_mid)
//! R'    = R + V_mid·dt
//! V'    = V + a_mid·dt
//! ```
//!
//! Two force evaluations per step, second order.

use tribody_core::{
    Observer, SolverSettings, StepIntegrable, ThreeBodySystem, gravity::GravitationalParameters,
};

use super::{Action, Error, Event, Solution, State, Stepper, solve_with};

/// Explicit midpoint stepper.
#[derive(Debug, Clone, Copy)]
pub struct Midpoint {
    params: GravitationalParameters,
}

impl Stepper for Midpoint {
    const NAME: &'static str = "Midpoint";

    fn start(params: GravitationalParameters, _initial: &State) -> Self {
        Self { params }
    }

    fn step(&mut self, state: &State, dt: f64) -> State {
        let half_dt = 0.5 * dt;

        let a = self.params.accelerations(&state.positions);
        let r_mid = state.positions.step(state.velocities, half_dt);
        let v_mid = state.velocities.step(a, half_dt);
        let a_mid = self.params.accelerations(&r_mid);

        State {
            positions: state.positions.step(v_mid, dt),
            velocities: state.velocities.step(a_mid, dt),
        }
    }
}

/// Integrates a three-body system using the explicit midpoint method.
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
    solve_with::<Midpoint, _>(settings, system, observer)
}

/// Integrates a three-body system using the explicit midpoint method without
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
