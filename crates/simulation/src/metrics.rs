//! Scalar metrics over solved trajectories.
//!
//! A metric is a function of one [`SolutionStep`] and the constants of its
//! run. [`metric_series`] maps it over a [`SimulationResult`];
//! [`deviation_series`] reports how far it wanders from its initial value,
//! which for a conserved quantity measures the integrator's drift.
//!
//! Non-finite samples are not filtered: a run through a close encounter shows
//! up here as diverging energy or distance.

use tribody_core::{SolutionStep, ThreeBodySystem};

use crate::SimulationResult;

/// Per-run constants a metric may need.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunConstants {
    /// Masses (kg), in system order.
    pub masses: [f64; 3],
    /// Gravitational constant (m³ kg⁻¹ s⁻²).
    pub gravitational_constant: f64,
}

impl RunConstants {
    #[must_use]
    pub fn new(system: &ThreeBodySystem, gravitational_constant: f64) -> Self {
        Self {
            masses: system.masses(),
            gravitational_constant,
        }
    }
}

impl From<&SimulationResult> for RunConstants {
    fn from(result: &SimulationResult) -> Self {
        Self::new(&result.system, result.settings.gravitational_constant)
    }
}

/// Body index pairs in `i < j` order.
const PAIRS: [(usize, usize); 3] = [(0, 1), (0, 2), (1, 2)];

/// Total kinetic energy, `Σ ½·mᵢ·|vᵢ|²`.
#[must_use]
pub fn kinetic_energy(step: &SolutionStep, constants: &RunConstants) -> f64 {
    step.velocities
        .iter()
        .zip(constants.masses)
        .map(|(v, m)| 0.5 * m * v.norm_squared())
        .sum()
}

/// Gravitational potential energy, `−Σ_{i<j} G·mᵢ·mⱼ/|rᵢ−rⱼ|`.
#[must_use]
pub fn potential_energy(step: &SolutionStep, constants: &RunConstants) -> f64 {
    let m = constants.masses;
    -PAIRS
        .iter()
        .map(|&(i, j)| {
            constants.gravitational_constant * m[i] * m[j] / distance(step, i, j)
        })
        .sum::<f64>()
}

/// Kinetic plus potential energy.
#[must_use]
pub fn total_energy(step: &SolutionStep, constants: &RunConstants) -> f64 {
    kinetic_energy(step, constants) + potential_energy(step, constants)
}

/// Distance between bodies `i` and `j`.
///
/// # Panics
///
/// Panics if `i` or `j` is not a body index (`0..3`).
#[must_use]
pub fn distance(step: &SolutionStep, i: usize, j: usize) -> f64 {
    (step.positions[i] - step.positions[j]).norm()
}

/// A scalar metric sampled at each step of a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricSeries {
    pub times: Vec<f64>,
    pub values: Vec<f64>,
}

impl MetricSeries {
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the final value.
    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Returns the largest value, or NaN if any value is NaN.
    #[must_use]
    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(|a, b| {
            if a.is_nan() || b.is_nan() {
                f64::NAN
            } else {
                a.max(b)
            }
        })
    }

    /// Iterates over `(t, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.values.iter().copied())
    }
}

/// Evaluates `metric` at every step of `result`.
pub fn metric_series<F>(result: &SimulationResult, metric: F) -> MetricSeries
where
    F: Fn(&SolutionStep, &RunConstants) -> f64,
{
    let constants = RunConstants::from(result);
    let (times, values) = result
        .solution
        .iter()
        .map(|step| (step.t, metric(step, &constants)))
        .unzip();
    MetricSeries { times, values }
}

/// Evaluates `|metric(step) − metric(step₀)|` at every step of `result`.
///
/// The first value is always zero.
pub fn deviation_series<F>(result: &SimulationResult, metric: F) -> MetricSeries
where
    F: Fn(&SolutionStep, &RunConstants) -> f64,
{
    let mut series = metric_series(result, metric);
    if let Some(&initial) = series.values.first() {
        for value in &mut series.values {
            *value = (*value - initial).abs();
        }
    }
    series
}

/// Like [`deviation_series`], divided by `|metric(step₀)|`.
///
/// Values are infinite or NaN when the initial value is zero.
pub fn relative_deviation_series<F>(result: &SimulationResult, metric: F) -> MetricSeries
where
    F: Fn(&SolutionStep, &RunConstants) -> f64,
{
    let mut series = metric_series(result, metric);
    if let Some(&initial) = series.values.first() {
        let scale = initial.abs();
        for value in &mut series.values {
            *value = (*value - initial).abs() / scale;
        }
    }
    series
}

/// Drift of the total energy from its initial value.
#[must_use]
pub fn energy_deviation(result: &SimulationResult) -> MetricSeries {
    deviation_series(result, total_energy)
}

/// Drift of the distance between bodies `i` and `j` from its initial value.
#[must_use]
pub fn distance_deviation(result: &SimulationResult, i: usize, j: usize) -> MetricSeries {
    deviation_series(result, |step, _| distance(step, i, j))
}
