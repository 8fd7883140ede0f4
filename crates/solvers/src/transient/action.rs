/// Control actions an observer can return to a three-body solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop integrating and return the samples produced so far.
    StopEarly,
}
