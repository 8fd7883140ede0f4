use tribody_core::Vector3;

use crate::SimulationResult;

/// The time series of one body's state, for plotting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    pub name: String,
    pub times: Vec<f64>,
    pub positions: Vec<Vector3>,
    pub velocities: Vec<Vector3>,
}

impl Trajectory {
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// Splits a run into one trajectory per body, in system order.
#[must_use]
pub fn trajectories(result: &SimulationResult) -> [Trajectory; 3] {
    let names = result.system.names();
    let times: Vec<f64> = result.times().collect();

    std::array::from_fn(|i| Trajectory {
        name: names[i].to_owned(),
        times: times.clone(),
        positions: result.solution.iter().map(|s| s.positions[i]).collect(),
        velocities: result.solution.iter().map(|s| s.velocities[i]).collect(),
    })
}
