//! Draws a composed [`Figure`] to a PNG file with plotters.

use std::path::Path;

use plotters::prelude::*;

use crate::chart::layout::{Figure, Panel};
use crate::error::Result;

/// Matplotlib-like palette for multi-series panels.
fn color_palette(n: usize) -> Vec<RGBColor> {
    let base_colors = [
        RGBColor(31, 119, 180),  // Blue
        RGBColor(255, 127, 14),  // Orange
        RGBColor(44, 160, 44),   // Green
        RGBColor(214, 39, 40),   // Red
        RGBColor(148, 103, 189), // Purple
        RGBColor(140, 86, 75),   // Brown
        RGBColor(227, 119, 194), // Pink
        RGBColor(127, 127, 127), // Gray
    ];

    (0..n).map(|i| base_colors[i % base_colors.len()]).collect()
}

/// Data bounds of a panel with a margin, so lines do not hug the frame.
fn axis_bounds(panel: &Panel) -> (std::ops::Range<f32>, std::ops::Range<f32>) {
    let points = panel
        .series
        .iter()
        .flat_map(|s| s.points.iter())
        .chain(panel.marker.iter());

    let mut x_max = f32::NEG_INFINITY;
    let mut y_min = f32::INFINITY;
    let mut y_max = f32::NEG_INFINITY;
    for &(x, y) in points {
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    if !x_max.is_finite() {
        return (0.0..1.0, 0.0..1.0);
    }

    let y_pad = ((y_max - y_min) * 0.05).max(0.01);
    (0.0..x_max + 1.0, y_min - y_pad..y_max + y_pad)
}

/// Render `figure` into a `width` x `height` PNG at `path`.
///
/// Panels are laid out with `split_evenly` over the figure's row/column
/// shape. Legend panels cycle through the palette; single-series panels are
/// drawn in plain blue, and a marker point becomes a red circle.
pub fn render(figure: &Figure, path: &Path, figsize: (u32, u32)) -> Result<()> {
    let (width, height) = figsize;
    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;

    let areas = root.split_evenly((figure.rows, figure.cols));

    for (panel, area) in figure.panels.iter().zip(areas.iter()) {
        draw_panel(panel, area)?;
    }

    root.present()?;
    Ok(())
}

fn draw_panel(
    panel: &Panel,
    area: &DrawingArea<BitMapBackend<'_>, plotters::coord::Shift>,
) -> Result<()> {
    let (x_range, y_range) = axis_bounds(panel);

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc(panel.x_label.as_str())
        .y_desc(panel.y_label.as_str())
        .draw()?;

    if panel.legend {
        let colors = color_palette(panel.series.len());
        for (series, &color) in panel.series.iter().zip(colors.iter()) {
            chart
                .draw_series(LineSeries::new(series.points.iter().copied(), &color))?
                .label(series.label.clone())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    } else {
        for series in &panel.series {
            chart.draw_series(LineSeries::new(series.points.iter().copied(), &BLUE))?;
        }
    }

    if let Some(point) = panel.marker {
        chart.draw_series(std::iter::once(Circle::new(point, 4, RED.filled())))?;
    }

    Ok(())
}
