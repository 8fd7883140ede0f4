use tribody_core::SolutionStep;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all steps of the time grid.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a three-body integration.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// Samples from each step, starting with the initial condition.
    pub history: Vec<SolutionStep>,

    /// Number of integration steps completed.
    pub steps: usize,
}

impl Solution {
    /// Returns the final sample.
    #[must_use]
    pub fn last(&self) -> Option<&SolutionStep> {
        self.history.last()
    }

    /// Consumes the solution and returns its samples.
    #[must_use]
    pub fn into_history(self) -> Vec<SolutionStep> {
        self.history
    }
}
