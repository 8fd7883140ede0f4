#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest number of steps a single run may take.
pub const MAX_STEPS: usize = u32::MAX as usize;

/// Upper bound on the samples reserved up front for a run's history.
const PREALLOCATED_SAMPLES: usize = 1 << 16;

/// Errors that can occur when validating settings.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SettingsError {
    #[error("dt must be positive, got {0}")]
    NonPositiveStep(f64),

    #[error("t_end ({t_end}) must not precede t_start ({t_start})")]
    EndBeforeStart { t_start: f64, t_end: f64 },

    #[error("{0} must be finite")]
    NonFinite(&'static str),

    #[error("(t_end - t_start) / dt = {0} exceeds the limit of {max} steps", max = MAX_STEPS)]
    TooManySteps(f64),
}

/// A fixed-step time grid.
///
/// The grid has `steps() + 1` samples at `t_start + k * dt`. The number of
/// steps is truncated, so the last sample may fall strictly before `t_end`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeSpan {
    /// Start time (s).
    pub t_start: f64,
    /// End time (s).
    pub t_end: f64,
    /// Step size (s).
    pub dt: f64,
}

impl TimeSpan {
    /// Creates a validated time span.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is non-finite, `dt` is not positive,
    /// `t_end` precedes `t_start`, or the span needs more than [`MAX_STEPS`]
    /// steps.
    pub fn new(t_start: f64, t_end: f64, dt: f64) -> Result<Self, SettingsError> {
        let span = Self { t_start, t_end, dt };
        span.validate()?;
        Ok(span)
    }

    /// Checks the span without consuming it.
    ///
    /// # Errors
    ///
    /// See [`TimeSpan::new`].
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.t_start.is_finite() {
            return Err(SettingsError::NonFinite("t_start"));
        }
        if !self.t_end.is_finite() {
            return Err(SettingsError::NonFinite("t_end"));
        }
        if self.dt.is_nan() || self.dt <= 0.0 {
            return Err(SettingsError::NonPositiveStep(self.dt));
        }
        if !self.dt.is_finite() {
            return Err(SettingsError::NonFinite("dt"));
        }
        if self.t_end < self.t_start {
            return Err(SettingsError::EndBeforeStart {
                t_start: self.t_start,
                t_end: self.t_end,
            });
        }
        let ratio = (self.t_end - self.t_start) / self.dt;
        if !(ratio.is_finite() && ratio.floor() <= f64::from(u32::MAX)) {
            return Err(SettingsError::TooManySteps(ratio));
        }
        Ok(())
    }

    /// Returns the number of integration steps, `floor((t_end - t_start) / dt)`.
    ///
    /// Only meaningful for a validated span.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn steps(&self) -> usize {
        ((self.t_end - self.t_start) / self.dt).floor() as usize
    }

    /// Returns how many samples to reserve for a run over this span.
    ///
    /// This is `steps() + 1`, capped so a long run grows its history as it
    /// goes instead of reserving everything up front.
    #[must_use]
    pub fn sample_capacity(&self) -> usize {
        self.steps().saturating_add(1).min(PREALLOCATED_SAMPLES)
    }

    /// Returns the time of sample `k`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn time_at(&self, k: usize) -> f64 {
        self.t_start + k as f64 * self.dt
    }
}

/// Settings for a single three-body run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverSettings {
    /// Start time (s).
    pub t_start: f64,
    /// End time (s).
    pub t_end: f64,
    /// Step size (s).
    pub dt: f64,
    /// Gravitational constant (m³ kg⁻¹ s⁻²).
    pub gravitational_constant: f64,
}

impl SolverSettings {
    /// Creates validated settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the time grid is invalid or the gravitational
    /// constant is non-finite.
    pub fn new(
        t_start: f64,
        t_end: f64,
        dt: f64,
        gravitational_constant: f64,
    ) -> Result<Self, SettingsError> {
        let settings = Self {
            t_start,
            t_end,
            dt,
            gravitational_constant,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Checks the settings without consuming them.
    ///
    /// Solvers call this before taking any step.
    ///
    /// # Errors
    ///
    /// See [`SolverSettings::new`].
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.span().validate()?;
        if !self.gravitational_constant.is_finite() {
            return Err(SettingsError::NonFinite("gravitational_constant"));
        }
        Ok(())
    }

    /// Returns the time grid of these settings.
    #[must_use]
    pub fn span(&self) -> TimeSpan {
        TimeSpan {
            t_start: self.t_start,
            t_end: self.t_end,
            dt: self.dt,
        }
    }

    /// Returns the number of integration steps.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.span().steps()
    }

    /// Returns how many samples to reserve for a run.
    #[must_use]
    pub fn sample_capacity(&self) -> usize {
        self.span().sample_capacity()
    }

    /// Returns the time of sample `k`.
    #[must_use]
    pub fn time_at(&self, k: usize) -> f64 {
        self.span().time_at(k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_settings_pass() {
        let settings = SolverSettings::new(0.0, 10.0, 0.5, 1.0).unwrap();
        assert_eq!(settings.steps(), 20);
        assert_eq!(settings.time_at(0), 0.0);
        assert_eq!(settings.time_at(3), 1.5);
    }

    #[test]
    fn step_count_truncates() {
        let span = TimeSpan::new(1.0, 2.0, 0.375).unwrap();
        assert_eq!(span.steps(), 2);
        assert!(span.time_at(span.steps()) < span.t_end);
    }

    #[test]
    fn degenerate_spans_have_no_steps() {
        assert_eq!(TimeSpan::new(3.0, 3.0, 0.1).unwrap().steps(), 0);
        assert_eq!(TimeSpan::new(0.0, 1.0, 4.0).unwrap().steps(), 0);
    }

    #[test]
    fn rejects_non_positive_step() {
        assert_eq!(
            SolverSettings::new(0.0, 1.0, 0.0, 1.0),
            Err(SettingsError::NonPositiveStep(0.0))
        );
        assert_eq!(
            TimeSpan::new(0.0, 1.0, -0.1),
            Err(SettingsError::NonPositiveStep(-0.1))
        );
        assert!(matches!(
            TimeSpan::new(0.0, 1.0, f64::NAN),
            Err(SettingsError::NonPositiveStep(_))
        ));
    }

    #[test]
    fn rejects_end_before_start() {
        assert_eq!(
            TimeSpan::new(2.0, 1.0, 0.1),
            Err(SettingsError::EndBeforeStart {
                t_start: 2.0,
                t_end: 1.0
            })
        );
    }

    #[test]
    fn rejects_non_finite_values() {
        assert_eq!(
            TimeSpan::new(0.0, f64::INFINITY, 0.1),
            Err(SettingsError::NonFinite("t_end"))
        );
        assert_eq!(
            TimeSpan::new(0.0, 1.0, f64::INFINITY),
            Err(SettingsError::NonFinite("dt"))
        );
        assert_eq!(
            SolverSettings::new(0.0, 1.0, 0.1, f64::NAN),
            Err(SettingsError::NonFinite("gravitational_constant"))
        );
    }

    #[test]
    fn rejects_spans_with_too_many_steps() {
        assert!(matches!(
            SolverSettings::new(0.0, 1e300, 1e-300, 1.0),
            Err(SettingsError::TooManySteps(_))
        ));
        assert_eq!(
            TimeSpan::new(-1e308, 1e308, 1.0),
            Err(SettingsError::TooManySteps(f64::INFINITY))
        );
        assert!(matches!(
            TimeSpan::new(0.0, MAX_STEPS as f64 + 1.0, 1.0),
            Err(SettingsError::TooManySteps(_))
        ));
    }

    #[test]
    fn longest_allowed_span_is_accepted() {
        let span = TimeSpan::new(0.0, MAX_STEPS as f64, 1.0).unwrap();
        assert_eq!(span.steps(), MAX_STEPS);
        assert_eq!(span.sample_capacity(), PREALLOCATED_SAMPLES);
    }

    #[test]
    fn sample_capacity_covers_short_runs() {
        let span = TimeSpan::new(0.0, 1.0, 0.25).unwrap();
        assert_eq!(span.sample_capacity(), 5);
    }

    #[test]
    fn public_fields_can_hold_invalid_values() {
        let settings = SolverSettings {
            t_start: 0.0,
            t_end: 1.0,
            dt: -1.0,
            gravitational_constant: 1.0,
        };
        assert!(settings.validate().is_err());
    }
}
