// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

//! Plot the orientation of a frame relative to the base frame.
//!
//! The base frame is drawn with thick lines, the rotated frame with thin
//! lines. Axis 1 is red, axis 2 is blue and axis 3 is green in both frames.

use std::path::Path;

use jointframe_core::nalgebra::Vector3;
use jointframe_core::RotationMatrix;
use plotters::coord::Shift;
use plotters::prelude::*;

pub type PlotResult<T = ()> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

const AXIS_COLORS: [RGBColor; 3] = [RED, BLUE, GREEN];
const AXIS_LABELS: [&str; 3] = ["X Direction", "Y Direction", "Z Direction"];

const BASE_STROKE_WIDTH: u32 = 3;
const FRAME_STROKE_WIDTH: u32 = 1;

/// Half the edge length of the plotted cube.
const AXIS_EXTENT: f64 = 1.2;

#[derive(Clone, Debug, PartialEq)]
pub struct PlotOptions {
    /// Figure title.
    pub title: String,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// View rotation about the vertical axis in radians.
    pub yaw: f64,
    /// View elevation in radians.
    pub pitch: f64,
    /// Projection scale.
    pub scale: f64,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            title: "Robotic Joint Orientation".to_string(),
            width: 800,
            height: 600,
            yaw: 0.5,
            pitch: 0.3,
            scale: 0.9,
        }
    }
}

/// Render the orientation plot of `matrix` to an SVG file.
pub fn orientation_svg(matrix: &RotationMatrix, path: &Path, options: &PlotOptions) -> PlotResult {
    let root = SVGBackend::new(path, (options.width, options.height)).into_drawing_area();
    draw_orientation(&root, matrix, options)?;

    log::debug!("Orientation plot written to {}", path.display());

    Ok(())
}

/// Render the orientation plot of `matrix` to an SVG document in memory.
pub fn orientation_svg_string(matrix: &RotationMatrix, options: &PlotOptions) -> PlotResult<String> {
    let mut buffer = String::new();

    {
        let root =
            SVGBackend::with_string(&mut buffer, (options.width, options.height)).into_drawing_area();
        draw_orientation(&root, matrix, options)?;
    }

    Ok(buffer)
}

/// Map a vector onto chart coordinates.
///
/// The chart has its second coordinate pointing up, the robot has Z up.
#[inline]
fn chart_point(vector: &Vector3<f64>) -> (f64, f64, f64) {
    (vector.x, vector.z, vector.y)
}

fn segment(vector: &Vector3<f64>) -> Vec<(f64, f64, f64)> {
    vec![(0.0, 0.0, 0.0), chart_point(vector)]
}

fn draw_orientation<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    matrix: &RotationMatrix,
    options: &PlotOptions,
) -> PlotResult
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .caption(&options.title, ("sans-serif", 24))
        .margin(20)
        .build_cartesian_3d(
            -AXIS_EXTENT..AXIS_EXTENT,
            -AXIS_EXTENT..AXIS_EXTENT,
            -AXIS_EXTENT..AXIS_EXTENT,
        )?;

    chart.with_projection(|mut pb| {
        pb.yaw = options.yaw;
        pb.pitch = options.pitch;
        pb.scale = options.scale;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.15))
        .max_light_lines(3)
        .draw()?;

    let frame_axes = matrix.axes();

    for (index, (color, label)) in AXIS_COLORS.into_iter().zip(AXIS_LABELS).enumerate() {
        let base_axis = Vector3::ith(index, 1.0);
        let frame_axis = frame_axes[index];

        chart
            .draw_series(LineSeries::new(
                segment(&base_axis),
                color.stroke_width(BASE_STROKE_WIDTH),
            ))?
            .label(format!("Base {}", label))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(BASE_STROKE_WIDTH))
            });

        chart
            .draw_series(LineSeries::new(
                segment(&frame_axis),
                color.stroke_width(FRAME_STROKE_WIDTH),
            ))?
            .label(format!("Frame {}", label))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(FRAME_STROKE_WIDTH))
            });

        chart.draw_series(std::iter::once(Text::new(
            label,
            chart_point(&(base_axis * 1.1)),
            ("sans-serif", 14),
        )))?;
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()?;

    Ok(())
}
