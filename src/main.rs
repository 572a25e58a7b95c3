use clap::Parser;
use damped_pendulum::cli::{
    args::{CommandsEnum, DampedPendulumArgs},
    render::{render_default_image, render_to_output_directory},
};

fn main() {
    let args: DampedPendulumArgs = DampedPendulumArgs::parse();

    let result = match &args.command {
        Some(CommandsEnum::Render(options)) => render_to_output_directory(options).map(|_| ()),
        None => render_default_image(),
    };

    if let Err(err) = result {
        panic!("ERROR:  Unable to render the damped pendulum: {}", err);
    }
}
