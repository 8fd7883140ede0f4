//! Classical RK4 for any [`StepIntegrable`] state.
//!
//! The weighted combination `(k1 + 2·k2 + 2·k3 + k4)/6 · dt` is formed by
//! chaining steps from the current state:
//!
//! ```text
//! state.step(k1, dt/6).step(k2, dt/3).step(k3, dt/3).step(k4, dt/6)
//! ```
//!
//! which equals the usual update whenever stepping is linear in the
//! derivative.

use tribody_core::{DerivativeOf, SettingsError, StepIntegrable, TimeSpan};

/// A state sampled at time `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<S> {
    pub t: f64,
    pub state: S,
}

/// Advances `state` by one RK4 step of size `dt`.
///
/// `derivative` evaluates the time derivative of a state; it is called four
/// times.
pub fn rk4_step<S, F>(state: &S, dt: f64, derivative: F) -> S
where
    S: StepIntegrable<f64>,
    DerivativeOf<S, f64>: Clone,
    F: Fn(&S) -> DerivativeOf<S, f64>,
{
    let half_dt = 0.5 * dt;

    let k1 = derivative(state);
    let k2 = derivative(&state.step(k1.clone(), half_dt));
    let k3 = derivative(&state.step(k2.clone(), half_dt));
    let k4 = derivative(&state.step(k3.clone(), dt));

    state
        .step(k1, dt / 6.0)
        .step(k2, dt / 3.0)
        .step(k3, dt / 3.0)
        .step(k4, dt / 6.0)
}

/// Integrates `initial` over `span` with fixed RK4 steps.
///
/// Returns `span.steps() + 1` samples, starting with `initial` at `t_start`.
///
/// # Errors
///
/// Returns an error if the span is invalid.
pub fn integrate<S, F>(
    span: &TimeSpan,
    initial: S,
    derivative: F,
) -> Result<Vec<Sample<S>>, SettingsError>
where
    S: StepIntegrable<f64> + Clone,
    DerivativeOf<S, f64>: Clone,
    F: Fn(&S) -> DerivativeOf<S, f64>,
{
    span.validate()?;

    let steps = span.steps();
    let mut samples = Vec::with_capacity(span.sample_capacity());
    let mut state = initial;
    samples.push(Sample {
        t: span.t_start,
        state: state.clone(),
    });

    for k in 1..=steps {
        state = rk4_step(&state, span.dt, &derivative);
        samples.push(Sample {
            t: span.time_at(k),
            state: state.clone(),
        });
    }

    Ok(samples)
}
