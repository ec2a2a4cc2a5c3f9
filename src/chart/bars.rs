//! Horizontal bar chart of how many mobs each weakness combination covers

use crate::analysis::combinations::CombinationCount;
use crate::chart::palette::dark_palette;
use crate::chart::{ChartStyle, IconPlacement, Plot, RenderContext, combination_chart_path, finish};
use crate::io::configuration::{
    BAR_ICON_SIZE, BAR_LOGO_OFFSET, BAR_THICKNESS, BAR_TICK_STEP, ICON_GAP, MIN_BAR_AXIS_SPAN,
};
use crate::io::error::{Result, chart_error};
use crate::io::image::canvas_from_rgb;
use plotters::prelude::{
    BLACK, BindKeyPoints, BitMapBackend, ChartBuilder, Color, IntoDrawingArea, PathElement,
    Rectangle,
};
use std::path::PathBuf;
use tracing::debug;

const CHART: &str = "combination";

/// Caption of a combination chart
pub fn combination_title(category: &str, region: &str) -> String {
    format!(
        "How many ({category}) mobs from {region} have at least one weakness from this weaknesses combination?"
    )
}

/// Upper bound of the count axis
pub fn count_axis_span(results: &[CombinationCount]) -> usize {
    let highest = results.iter().map(|result| result.mobs).max().unwrap_or(0);
    (highest + BAR_TICK_STEP).max(MIN_BAR_AXIS_SPAN)
}

/// Plot one bar per combination, bottom to top in result order
///
/// Y tick labels are left empty; the returned plot lists the icons that label
/// each bar, laid out right to left from the axis.
///
/// # Errors
///
/// Returns an error if the plotting backend fails
pub fn plot_combination_bars(
    results: &[CombinationCount],
    category: &str,
    region: &str,
    style: &ChartStyle,
) -> Result<Plot> {
    let (width, height) = style.canvas;
    let mut buffer = vec![0u8; width as usize * height as usize * 3];

    let x_max = count_axis_span(results) as i32;
    let rows = results.len();
    let widest = results
        .iter()
        .map(|result| result.elements.len())
        .max()
        .unwrap_or(0) as u32;
    let icon_area = widest * (BAR_ICON_SIZE + ICON_GAP) + ICON_GAP + 2 * style.label_size;
    let colors = dark_palette(style.ramp_start, style.ramp_end, rows);
    let half = BAR_THICKNESS / 2.0;

    let icons = {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&style.background)
            .map_err(|e| chart_error(CHART, &e))?;

        let mut builder = ChartBuilder::on(&root);
        builder
            .margin(style.margin)
            .x_label_area_size(3 * style.label_size)
            .y_label_area_size(icon_area);
        if style.draw_text {
            builder.caption(
                combination_title(category, region),
                (style.font_family, style.caption_size),
            );
        }
        let ticks: Vec<i32> = (0..=x_max).step_by(BAR_TICK_STEP).collect();
        let y_range = -0.5..(rows.max(1) as f64 - 0.5);
        let (y_low, y_high) = (y_range.start, y_range.end);
        let mut chart = builder
            .build_cartesian_2d((0..x_max).with_key_points(ticks), y_range)
            .map_err(|e| chart_error(CHART, &e))?;

        if style.draw_text {
            // Bars are labelled by icons rather than tick text
            let blank = |_: &f64| String::new();
            chart
                .configure_mesh()
                .disable_y_mesh()
                .y_labels(rows.max(1))
                .y_label_formatter(&blank)
                .x_desc("Number of mobs")
                .y_desc("Weakness")
                .label_style((style.font_family, style.label_size))
                .axis_desc_style((style.font_family, style.label_size))
                .draw()
                .map_err(|e| chart_error(CHART, &e))?;
        } else {
            // The mesh always lays out tick text, so only the axes are drawn
            chart
                .draw_series([
                    PathElement::new(vec![(0, y_low), (x_max, y_low)], BLACK.stroke_width(1)),
                    PathElement::new(vec![(0, y_low), (0, y_high)], BLACK.stroke_width(1)),
                ])
                .map_err(|e| chart_error(CHART, &e))?;
        }

        chart
            .draw_series(results.iter().zip(&colors).enumerate().map(
                |(row, (result, color))| {
                    let y = row as f64;
                    Rectangle::new(
                        [(0, y - half), (result.mobs as i32, y + half)],
                        color.filled(),
                    )
                },
            ))
            .map_err(|e| chart_error(CHART, &e))?;

        let mut icons = Vec::new();
        for (row, result) in results.iter().enumerate() {
            let (axis_x, center_y) = chart.backend_coord(&(0, row as f64));
            for (slot, &element) in result.elements.iter().enumerate() {
                let shift = ICON_GAP + BAR_ICON_SIZE / 2 + slot as u32 * (BAR_ICON_SIZE + ICON_GAP);
                icons.push(IconPlacement {
                    element,
                    center: (axis_x - shift as i32, center_y),
                    size: BAR_ICON_SIZE,
                });
            }
        }

        root.present().map_err(|e| chart_error(CHART, &e))?;
        icons
    };

    Ok(Plot {
        canvas: canvas_from_rgb(width, height, buffer)?,
        icons,
        logo_offset: BAR_LOGO_OFFSET,
    })
}

/// Render a combination chart for one run and write it under the output
/// directory
///
/// # Errors
///
/// Returns an error if plotting fails, an asset is missing, or the file
/// cannot be written
pub fn render_combination_chart(
    results: &[CombinationCount],
    size: usize,
    category: &str,
    region: &str,
    ctx: &RenderContext<'_>,
) -> Result<PathBuf> {
    let path = combination_chart_path(ctx.output_dir, size, category, region);
    let plot = plot_combination_bars(results, category, region, ctx.style)?;
    finish(plot, ctx.assets, region, &path)?;
    debug!(path = %path.display(), size, "combination chart rendered");
    Ok(path)
}
