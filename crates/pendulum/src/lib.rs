//! A double pendulum integrated with fixed-step RK4.
//!
//! [`DoublePendulum`] holds the physical parameters and evaluates the
//! equations of motion for a [`PendulumState`]. [`simulate`] integrates them
//! over a [`TimeSpan`] with [`tribody_solvers::ode`], using the same
//! truncating step count as the three-body solvers.
//!
//! # Example
//!
//! ```
//! use tribody_core::TimeSpan;
//! use tribody_pendulum::{DoublePendulum, PendulumState, simulate};
//!
//! let pendulum = DoublePendulum::new(1.0, 1.0, 1.0, 1.0, 9.81).unwrap();
//! let span = TimeSpan::new(0.0, 5.0, 0.001).unwrap();
//!
//! let samples = simulate(&pendulum, PendulumState::at_rest(2.0, 2.5), &span).unwrap();
//!
//! let e0 = pendulum.energy(&samples[0].state);
//! let e1 = pendulum.energy(&samples.last().unwrap().state);
//! assert!((e1 - e0).abs() < 1e-6);
//! ```

mod pendulum;
mod state;

use log::debug;
use tribody_core::{SettingsError, TimeSpan};
use tribody_solvers::ode;

pub use pendulum::{DoublePendulum, PendulumError};
pub use state::{PendulumRates, PendulumState};

/// A pendulum state at time `t`.
pub type PendulumSample = ode::Sample<PendulumState>;

/// Integrates `pendulum` from `initial` over `span` with RK4.
///
/// Returns `span.steps() + 1` samples, the first being `initial` at
/// `span.t_start`.
///
/// # Errors
///
/// Returns an error if the span is invalid.
pub fn simulate(
    pendulum: &DoublePendulum,
    initial: PendulumState,
    span: &TimeSpan,
) -> Result<Vec<PendulumSample>, SettingsError> {
    let samples = ode::integrate(span, initial, |state| pendulum.derivative(state))?;
    debug!(
        "double pendulum: {} samples from t = {} to t = {}",
        samples.len(),
        span.t_start,
        samples.last().map_or(span.t_start, |s| s.t),
    );
    Ok(samples)
}
