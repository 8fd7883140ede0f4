use log::{debug, warn};
use tribody_core::{
    Observer, SolutionStep, SolverSettings, ThreeBodySystem, Triple, Vector3,
    gravity::GravitationalParameters,
};

use super::{Action, Error, Event, Solution, Status};

/// Positions and velocities of all three bodies at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub positions: Triple<Vector3>,
    pub velocities: Triple<Vector3>,
}

impl State {
    /// Returns the sample of this state at time `t`.
    #[must_use]
    pub fn at(self, t: f64) -> SolutionStep {
        SolutionStep {
            t,
            positions: self.positions,
            velocities: self.velocities,
        }
    }
}

impl From<&SolutionStep> for State {
    fn from(sample: &SolutionStep) -> Self {
        Self {
            positions: sample.positions,
            velocities: sample.velocities,
        }
    }
}

/// A single-step integration rule.
///
/// A stepper is created fresh for every run by [`Stepper::start`] and owned
/// by that run's loop, so any state it carries between steps (such as the
/// previous acceleration) is never shared between runs.
pub trait Stepper {
    /// Human-readable method name used in logs.
    const NAME: &'static str;

    /// Creates the stepper for a run starting at `initial`.
    fn start(params: GravitationalParameters, initial: &State) -> Self;

    /// Advances `state` by `dt`.
    fn step(&mut self, state: &State, dt: f64) -> State;
}

/// Integrates a three-body system with the stepper `S`.
///
/// # Algorithm
///
/// 1. Validate `settings`.
/// 2. Emit the initial sample at `t_start` as step 0.
/// 3. For each step `k` in `1..=N`:
///    - Advance the state by `dt` with the stepper.
///    - Record the sample at `t_start + k·dt`.
///    - Emit an [`Event`] to the observer.
///    - If the observer returns [`Action::StopEarly`], terminate.
///
/// # Errors
///
/// Returns [`Error::Settings`] before any step is taken if the settings are
/// invalid.
pub fn solve_with<S, Obs>(
    settings: &SolverSettings,
    system: &ThreeBodySystem,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    S: Stepper,
    Obs: Observer<Event, Action>,
{
    settings.validate()?;

    let steps = settings.steps();
    let params = GravitationalParameters::new(system, settings.gravitational_constant);
    debug!(
        "{}: integrating {steps} steps of dt = {} from t = {}",
        S::NAME,
        settings.dt,
        settings.t_start
    );

    let initial = SolutionStep::initial(settings.t_start, system);
    let mut state = State::from(&initial);
    let mut stepper = S::start(params, &state);

    let mut history = Vec::with_capacity(settings.sample_capacity());
    history.push(initial);

    let event = Event {
        step: 0,
        sample: initial,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(finish::<S>(Status::StoppedByObserver, history, 0));
    }

    for step in 1..=steps {
        state = stepper.step(&state, settings.dt);
        let sample = state.at(settings.time_at(step));
        history.push(sample);

        let event = Event { step, sample };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!("{}: stopped by observer after {step} steps", S::NAME);
            return Ok(finish::<S>(Status::StoppedByObserver, history, step));
        }
    }

    debug!("{}: completed {steps} steps", S::NAME);
    Ok(finish::<S>(Status::Complete, history, steps))
}

/// Builds the solution, warning if any sample is non-finite.
fn finish<S: Stepper>(status: Status, history: Vec<SolutionStep>, steps: usize) -> Solution {
    if let Some(bad) = first_non_finite(&history) {
        warn!(
            "{}: non-finite values from step {bad} on; check for coincident bodies",
            S::NAME
        );
    }
    Solution {
        status,
        history,
        steps,
    }
}

fn first_non_finite(history: &[SolutionStep]) -> Option<usize> {
    history.iter().position(|s| !s.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    use tribody_core::{Body, SettingsError};

    use crate::transient::test_fixtures::{at_rest, settings};

    /// Drifts every body with its velocity and never evaluates forces.
    struct Drift;

    impl Stepper for Drift {
        const NAME: &'static str = "drift";

        fn start(_params: GravitationalParameters, _initial: &State) -> Self {
            Drift
        }

        fn step(&mut self, state: &State, dt: f64) -> State {
            State {
                positions: std::array::from_fn(|i| {
                    state.positions[i] + state.velocities[i] * dt
                }),
                velocities: state.velocities,
            }
        }
    }

    #[test]
    fn samples_land_on_the_time_grid() {
        let settings = settings(1.0, 2.0, 0.25);
        let solution = solve_with::<Drift, _>(&settings, &at_rest(), ()).unwrap();

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 4);
        let times: Vec<f64> = solution.history.iter().map(|s| s.t).collect();
        assert_eq!(times, vec![1.0, 1.25, 1.5, 1.75, 2.0]);
    }

    #[test]
    fn invalid_settings_are_rejected_before_stepping() {
        let mut calls = 0;
        let settings = SolverSettings {
            t_start: 0.0,
            t_end: 1.0,
            dt: 0.0,
            gravitational_constant: 1.0,
        };

        let result = solve_with::<Drift, _>(&settings, &at_rest(), |_: &Event| {
            calls += 1;
            None
        });

        assert!(matches!(result, Err(Error::Settings(_))));
        assert_eq!(calls, 0);
    }

    #[test]
    fn oversized_settings_are_rejected_before_stepping() {
        let mut calls = 0;
        let settings = SolverSettings {
            t_start: 0.0,
            t_end: 1e300,
            dt: 1e-300,
            gravitational_constant: 1.0,
        };

        let result = solve_with::<Drift, _>(&settings, &at_rest(), |_: &Event| {
            calls += 1;
            None
        });

        assert!(matches!(
            result,
            Err(Error::Settings(SettingsError::TooManySteps(_)))
        ));
        assert_eq!(calls, 0);
    }

    #[test]
    fn long_runs_can_be_stopped_early() {
        // A billion steps is allowed but must not be reserved up front.
        let settings = settings(0.0, 1e9, 1.0);
        let observer = |event: &Event| (event.step >= 2).then_some(Action::StopEarly);

        let solution = solve_with::<Drift, _>(&settings, &at_rest(), observer).unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.history.len(), 3);
    }

    #[test]
    fn non_finite_samples_are_found_in_runs_stopped_early() {
        let settings = settings(0.0, 1.0, 0.25);
        let coincident = ThreeBodySystem::new(
            Body::new("a", 1.0, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
            Body::new("b", 1.0, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
            Body::new("c", 0.0, [5.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
        );
        let observer = |event: &Event| (event.step >= 2).then_some(Action::StopEarly);

        let solution = crate::transient::euler::solve(&settings, &coincident, observer).unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.history.len(), 3);
        assert_eq!(first_non_finite(&solution.history), Some(1));

        let clean = solve_with::<Drift, _>(&settings, &at_rest(), ()).unwrap();
        assert_eq!(first_non_finite(&clean.history), None);
    }

    #[test]
    fn observer_can_stop_early() {
        let settings = settings(0.0, 10.0, 0.1);
        let observer = |event: &Event| (event.step >= 5).then_some(Action::StopEarly);

        let solution = solve_with::<Drift, _>(&settings, &at_rest(), observer).unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 5);
        assert_eq!(solution.history.len(), 6);
    }

    #[test]
    fn observer_can_stop_before_the_first_step() {
        let settings = settings(0.0, 1.0, 0.1);
        let solution =
            solve_with::<Drift, _>(&settings, &at_rest(), |_: &Event| Some(Action::StopEarly))
                .unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 0);
        assert_eq!(solution.history.len(), 1);
    }

    #[test]
    fn step_numbers_start_at_zero() {
        let mut seen = Vec::new();
        solve_with::<Drift, _>(&settings(0.0, 1.0, 0.25), &at_rest(), |event: &Event| {
            seen.push(event.step);
            None
        })
        .unwrap();

        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    }
}
