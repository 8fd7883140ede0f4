use tribody_core::SolutionStep;

/// Event emitted by a three-body solver for each sample.
///
/// Step 0 is the initial condition. Steps 1..=N follow each integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The step number (0 for the initial condition).
    pub step: usize,

    /// The sample produced at this step.
    pub sample: SolutionStep,
}
