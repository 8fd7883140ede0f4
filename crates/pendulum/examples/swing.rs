//! Print the path of a double pendulum released from rest.
//!
//! # Usage
//!
//! ```text
//! cargo run --example swing
//! cargo run --example swing -- 2.0 2.5
//! ```
//!
//! The optional arguments are the initial angles (rad) of the upper and lower
//! arms. Positions of both bobs and the energy drift are printed every tenth of
//! a second for ten seconds.

use std::error::Error;

use tribody_core::TimeSpan;
use tribody_pendulum::{DoublePendulum, PendulumState, simulate};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let angles: Vec<f64> = std::env::args()
        .skip(1)
        .map(|arg| arg.parse::<f64>())
        .collect::<Result<_, _>>()?;
    let (theta1, theta2) = match angles.as_slice() {
        [] => (std::f64::consts::FRAC_PI_2, std::f64::consts::FRAC_PI_2),
        [theta1, theta2] => (*theta1, *theta2),
        _ => {
            eprintln!("Usage: swing [theta1 theta2]");
            std::process::exit(1);
        }
    };

    let pendulum = DoublePendulum::new(1.0, 1.0, 1.0, 1.0, 9.81)?;
    let span = TimeSpan::new(0.0, 10.0, 0.001)?;
    let samples = simulate(&pendulum, PendulumState::at_rest(theta1, theta2), &span)?;

    let e0 = pendulum.energy(&samples[0].state);
    println!(
        "{:>6} {:>9} {:>9} {:>9} {:>9} {:>10}",
        "t", "x1", "y1", "x2", "y2", "ΔE"
    );
    for sample in samples.iter().step_by(100) {
        let [upper, lower] = pendulum.bob_positions(&sample.state);
        println!(
            "{:>6.2} {:>9.4} {:>9.4} {:>9.4} {:>9.4} {:>10.2e}",
            sample.t,
            upper.x,
            upper.y,
            lower.x,
            lower.y,
            pendulum.energy(&sample.state) - e0,
        );
    }

    Ok(())
}
