use clap::{Args, Parser, Subcommand};

/// Simulates a damped pendulum with RK4 and plots its angle over time.
///
/// With no subcommand, writes `pendulum.png` to the working directory.
#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct DampedPendulumArgs {
    #[command(subcommand)]
    pub command: Option<CommandsEnum>,
}

#[derive(Debug, Subcommand)]
pub enum CommandsEnum {
    /// Render into `out/damped_pendulum/`, along with the parameters and diagnostics.
    Render(RenderOptions),
}

#[derive(Debug, Args, Default)]
pub struct RenderOptions {
    /// Write into a date-time stamped sub-directory.
    #[clap(long, short)]
    pub date_time_out: bool,
}
