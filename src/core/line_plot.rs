//! Renders an ordered sequence of (x, y) points as a single-series line plot.

use std::path::Path;

use plotters::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum RenderError {
    #[error("cannot draw a line through an empty point sequence")]
    EmptySeries,
    #[error("point {index} is not finite: ({x}, {y})")]
    NonFinitePoint { index: usize, x: f64, y: f64 },
    #[error("image resolution must be non-zero, got {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },
    #[error("data bounds cannot be represented as a chart range: x {x:?}, y {y:?}")]
    UnrepresentableBounds {
        x: std::ops::Range<f64>,
        y: std::ops::Range<f64>,
    },
    #[error("plotting backend failed: {0}")]
    Backend(String),
}

/// Labels, size, and colors for a line plot.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LinePlotSpecification {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub resolution: nalgebra::Vector2<u32>,
    pub line_color_rgb: [u8; 3],
    pub background_color_rgb: [u8; 3],
}

impl Default for LinePlotSpecification {
    fn default() -> Self {
        LinePlotSpecification {
            title: "Damped Pendelum".to_owned(),
            x_label: "Time (s)".to_owned(),
            y_label: "Theta (radians)".to_owned(),
            // 8 inch square at 96 dpi
            resolution: nalgebra::Vector2::new(768, 768),
            line_color_rgb: [30, 90, 200],
            background_color_rgb: [255, 255, 255],
        }
    }
}

/// Axis-aligned bounds of the data, as `(x_range, y_range)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotBounds {
    pub x: std::ops::Range<f64>,
    pub y: std::ops::Range<f64>,
}

impl PlotBounds {
    /**
     * Tight x bounds and slightly padded y bounds. A degenerate (zero-width)
     * axis is widened so that the chart still has a drawable coordinate range.
     */
    pub fn from_points(points: &[(f64, f64)]) -> Result<PlotBounds, RenderError> {
        if points.is_empty() {
            return Err(RenderError::EmptySeries);
        }
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for (index, &(x, y)) in points.iter().enumerate() {
            if !x.is_finite() || !y.is_finite() {
                return Err(RenderError::NonFinitePoint { index, x, y });
            }
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }

        let (x_min, x_max) = widen_if_degenerate(x_min, x_max);
        let y_pad = 0.05 * y_max - 0.05 * y_min;
        let (y_min, y_max) = if y_pad > 0.0 {
            (y_min - y_pad, y_max + y_pad)
        } else {
            widen_if_degenerate(y_min, y_max)
        };

        let bounds = PlotBounds {
            x: x_min..x_max,
            y: y_min..y_max,
        };
        if is_drawable_range(&bounds.x) && is_drawable_range(&bounds.y) {
            Ok(bounds)
        } else {
            Err(RenderError::UnrepresentableBounds {
                x: bounds.x,
                y: bounds.y,
            })
        }
    }
}

fn widen_if_degenerate(low: f64, upp: f64) -> (f64, f64) {
    if upp > low {
        (low, upp)
    } else {
        let half_width = 0.5_f64.max(0.05 * low.abs());
        (low - half_width, upp + half_width)
    }
}

// The plotting backend does not terminate on ranges with an infinite span.
fn is_drawable_range(range: &std::ops::Range<f64>) -> bool {
    range.start.is_finite()
        && range.end.is_finite()
        && range.end > range.start
        && (range.end - range.start).is_finite()
}

fn backend_error<E: std::fmt::Display>(err: E) -> RenderError {
    RenderError::Backend(err.to_string())
}

/**
 * Draws `points` as one line series, with title and axis labels, and saves the result
 * as an image at `path` (format is taken from the extension). Empty or non-finite
 * input, and data whose span overflows `f64`, is rejected before anything is written.
 */
pub fn render_line_plot(
    points: &[(f64, f64)],
    spec: &LinePlotSpecification,
    path: &Path,
) -> Result<(), RenderError> {
    let (width, height) = (spec.resolution[0], spec.resolution[1]);
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidResolution { width, height });
    }
    let bounds = PlotBounds::from_points(points)?;

    let [r, g, b] = spec.background_color_rgb;
    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&RGBColor(r, g, b)).map_err(backend_error)?;

    let font_scale = (width.min(height) as f64 / 768.0).max(0.25);
    let font_size = |base: f64| (base * font_scale).round() as u32;

    let mut chart = ChartBuilder::on(&root)
        .margin(font_size(20.0))
        .caption(&spec.title, ("sans-serif", font_size(32.0)))
        .x_label_area_size(font_size(60.0))
        .y_label_area_size(font_size(80.0))
        .build_cartesian_2d(bounds.x, bounds.y)
        .map_err(backend_error)?;

    chart
        .configure_mesh()
        .x_desc(spec.x_label.clone())
        .y_desc(spec.y_label.clone())
        .axis_desc_style(("sans-serif", font_size(22.0)))
        .label_style(("sans-serif", font_size(16.0)))
        .x_label_formatter(&|v| format!("{:.1}", v))
        .y_label_formatter(&|v| format!("{:.2}", v))
        .draw()
        .map_err(backend_error)?;

    let [r, g, b] = spec.line_color_rgb;
    chart
        .draw_series(LineSeries::new(
            points.iter().copied(),
            RGBColor(r, g, b).stroke_width(2),
        ))
        .map_err(backend_error)?;

    root.present().map_err(backend_error)?;
    Ok(())
}
