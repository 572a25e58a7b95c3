use std::io::Write;
use std::path::Path;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::core::{
    file_io::{serialize_to_json, FilePrefix},
    line_plot::{render_line_plot, LinePlotSpecification, RenderError},
    stopwatch::Stopwatch,
};

use super::trajectory::{peak_indices, Sample, Trajectory};

/// Physical constants and integration settings for a single pendulum run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DampedPendulumParams {
    pub gravity: f64,       // m/s^2
    pub length: f64,        // m
    pub damping: f64,       // 1/s, linear drag on the angular rate
    pub initial_angle: f64, // rad
    pub initial_rate: f64,  // rad/s
    pub time_step: f64,     // s
    pub max_time: f64,      // s
}

impl Default for DampedPendulumParams {
    fn default() -> Self {
        DampedPendulumParams {
            gravity: 9.81,
            length: 1.0,
            damping: 0.5,
            initial_angle: std::f64::consts::PI / 4.0,
            initial_rate: 0.0,
            time_step: 0.01,
            max_time: 10.0,
        }
    }
}

impl DampedPendulumParams {
    pub fn initial_state(&self) -> Vector2<f64> {
        Vector2::new(self.initial_angle, self.initial_rate)
    }

    /// Number of samples in the trajectory: `floor(max_time / time_step)`.
    pub fn sample_count(&self) -> usize {
        let count = (self.max_time / self.time_step).floor();
        if count > 0.0 {
            count as usize
        } else {
            0
        }
    }
}

/// d(theta)/dt
pub fn angular_velocity_derivative(omega: f64) -> f64 {
    omega
}

/// d(omega)/dt
pub fn angular_acceleration_derivative(
    params: &DampedPendulumParams,
    theta: f64,
    omega: f64,
) -> f64 {
    -params.damping * omega - (params.gravity / params.length) * theta.sin()
}

/**
 * Computes the system dynamics of the damped (but undriven) pendulum, in the
 * form expected by the ODE solvers. The system is autonomous, so time is ignored.
 */
pub fn damped_pendulum_dynamics(
    params: &DampedPendulumParams,
    _t: f64,
    x: Vector2<f64>,
) -> Vector2<f64> {
    let q = x[0]; // angle
    let v = x[1]; // rate
    Vector2::new(
        angular_velocity_derivative(v),
        angular_acceleration_derivative(params, q, v),
    )
}

/// Everything needed to reproduce a rendered image; written next to it as JSON.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct DampedPendulumRender {
    pub params: DampedPendulumParams,
    pub plot: LinePlotSpecification,
}

/// Simulates the pendulum and renders theta vs time to `path`, with no other output files.
pub fn render_trajectory_image(
    render: &DampedPendulumRender,
    path: &Path,
) -> Result<(), RenderError> {
    let points: Vec<(f64, f64)> = Trajectory::new(&render.params)
        .map(<(f64, f64)>::from)
        .collect();
    render_line_plot(&points, &render.plot, path)?;
    println!("INFO:  Wrote image file to: {}", path.display());
    Ok(())
}

/**
 * Simulates the pendulum and renders theta vs time to `<prefix>.png`.
 * Once the image is written, also writes the parameters (`.json`) and timing
 * diagnostics (`_diagnostics.txt`); nothing is written if rendering fails.
 */
pub fn render_damped_pendulum(
    render: &DampedPendulumRender,
    file_prefix: &FilePrefix,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut stopwatch = Stopwatch::new("Damped Pendulum Stopwatch".to_owned());

    let samples: Vec<Sample> = Trajectory::new(&render.params).collect();
    stopwatch.record_split("simulation".to_owned());

    let points: Vec<(f64, f64)> = samples.iter().copied().map(<(f64, f64)>::from).collect();
    let image_path = file_prefix.with_suffix(".png");
    render_line_plot(&points, &render.plot, &image_path)?;
    println!("INFO:  Wrote image file to: {}", image_path.display());
    stopwatch.record_split("render_png".to_owned());

    serialize_to_json(&file_prefix.with_suffix(".json"), render)?;
    stopwatch.record_split("write_json".to_owned());

    let mut diagnostics_file = file_prefix.create_file_with_suffix("_diagnostics.txt")?;
    stopwatch.display(&mut diagnostics_file)?;
    display_trajectory_summary(&samples, &mut diagnostics_file)?;
    diagnostics_file.flush()?;

    Ok(())
}

/// Writes the sample count, final sample, and the sequence of oscillation peaks.
pub fn display_trajectory_summary<W: Write>(
    samples: &[Sample],
    writer: &mut W,
) -> std::io::Result<()> {
    writeln!(writer, "Trajectory: {} samples", samples.len())?;
    if let Some(last) = samples.last() {
        writeln!(writer, "  final: t = {:.4}, theta = {:.6}", last.time, last.theta)?;
    }
    for idx in peak_indices(samples) {
        let peak = samples[idx];
        writeln!(writer, "  peak: t = {:.4}, theta = {:.6}", peak.time, peak.theta)?;
    }
    Ok(())
}
