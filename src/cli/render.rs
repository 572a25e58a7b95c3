use std::path::Path;

use crate::core::file_io::{build_output_path_with_date_time, maybe_date_time_string, FilePrefix};
use crate::pendulum::damped_pendulum::{
    render_damped_pendulum, render_trajectory_image, DampedPendulumRender,
};

use super::args::RenderOptions;

pub const DEFAULT_IMAGE_PATH: &str = "pendulum.png";
const PROJECT_DIRECTORY: &str = "damped_pendulum";
const FILE_BASE: &str = "pendulum";

/// Default run: a single image in the working directory.
pub fn render_default_image() -> Result<(), Box<dyn std::error::Error>> {
    render_trajectory_image(&DampedPendulumRender::default(), Path::new(DEFAULT_IMAGE_PATH))?;
    Ok(())
}

/// Full run: image, parameters, and diagnostics under `out/damped_pendulum/`.
pub fn render_to_output_directory(
    options: &RenderOptions,
) -> Result<FilePrefix, Box<dyn std::error::Error>> {
    let file_prefix = FilePrefix {
        directory_path: build_output_path_with_date_time(
            PROJECT_DIRECTORY,
            &maybe_date_time_string(options.date_time_out),
        )?,
        file_base: FILE_BASE.to_owned(),
    };
    render_damped_pendulum(&DampedPendulumRender::default(), &file_prefix)?;
    Ok(file_prefix)
}
