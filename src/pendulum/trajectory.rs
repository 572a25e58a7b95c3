use more_asserts::assert_gt;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::core::ode_solvers::rk4_method_step;

use super::damped_pendulum::{damped_pendulum_dynamics, DampedPendulumParams};

/// A single point on the angle-versus-time trajectory.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: f64,
    pub theta: f64,
}

impl From<Sample> for (f64, f64) {
    fn from(sample: Sample) -> (f64, f64) {
        (sample.time, sample.theta)
    }
}

/**
 * Lazily integrates the damped pendulum, yielding one `Sample` per time step.
 *
 * Each call to `next` records the current state and then advances it by a
 * single RK4 step, so the first sample is always the initial condition. The
 * sequence is finite, with `floor(max_time / time_step)` samples. Clone the
 * iterator (or build a new one from the same params) to restart it.
 */
#[derive(Debug, Clone)]
pub struct Trajectory {
    params: DampedPendulumParams,
    state: Vector2<f64>,
    index: usize,
    sample_count: usize,
}

impl Trajectory {
    pub fn new(params: &DampedPendulumParams) -> Trajectory {
        assert_gt!(params.time_step, 0.0);
        assert!(params.max_time.is_finite(), "max_time must be finite");
        Trajectory {
            params: params.clone(),
            state: params.initial_state(),
            index: 0,
            sample_count: params.sample_count(),
        }
    }
}

impl Iterator for Trajectory {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        if self.index >= self.sample_count {
            return None;
        }
        let dt = self.params.time_step;
        let time = (self.index as f64) * dt;
        let sample = Sample {
            time,
            theta: self.state[0],
        };
        let params = &self.params;
        self.state = rk4_method_step(dt, time, self.state, &|t: f64, x: Vector2<f64>| {
            damped_pendulum_dynamics(params, t, x)
        });
        self.index += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sample_count - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Trajectory {}

/// Indices of the interior local maxima of theta, in time order.
pub fn peak_indices(samples: &[Sample]) -> Vec<usize> {
    samples
        .windows(3)
        .enumerate()
        .filter(|(_, w)| w[0].theta < w[1].theta && w[1].theta >= w[2].theta)
        .map(|(i, _)| i + 1)
        .collect()
}
