#[cfg(test)]
pub mod dynamical_systems;
pub mod file_io;
pub mod line_plot;
pub mod ode_solvers;
pub mod stopwatch;
