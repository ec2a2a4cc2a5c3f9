//! Heatmap of the weakness co-occurrence matrix

use crate::analysis::overlap::max_overlap;
use crate::bestiary::element::{ELEMENT_COUNT, Element};
use crate::chart::palette::ramp;
use crate::chart::{ChartStyle, IconPlacement, Plot, RenderContext, finish, overlap_chart_path};
use crate::io::configuration::{HEATMAP_ICON_SIZE, HEATMAP_LOGO_OFFSET, ICON_GAP};
use crate::io::error::{Result, chart_error};
use crate::io::image::canvas_from_rgb;
use ndarray::Array2;
use plotters::prelude::{
    BitMapBackend, ChartBuilder, Color, IntoDrawingArea, IntoFont, LabelAreaPosition, Rectangle,
    Text, WHITE,
};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::PathBuf;
use tracing::debug;

const CHART: &str = "overlap";

/// Caption of an overlap heatmap
pub fn overlap_title(category: &str, region: &str) -> String {
    format!("How many ({category}) mobs from {region} have these two weaknesses?")
}

/// Plot the matrix as a grid of cells, row 0 at the top
///
/// Each cell is colored on the style's ramp relative to the largest value and
/// annotated with its count. Icons label rows on the left edge and columns on
/// the top edge.
///
/// # Errors
///
/// Returns an error if the plotting backend fails
pub fn plot_overlap_heatmap(
    matrix: &Array2<usize>,
    category: &str,
    region: &str,
    style: &ChartStyle,
) -> Result<Plot> {
    let (width, height) = style.canvas;
    let mut buffer = vec![0u8; width as usize * height as usize * 3];

    let side = ELEMENT_COUNT as f64;
    let peak = max_overlap(matrix);
    let icon_area = HEATMAP_ICON_SIZE + 2 * ICON_GAP;
    let annotation = (style.font_family, style.label_size)
        .into_font()
        .color(&WHITE)
        .pos(Pos::new(HPos::Center, VPos::Center));

    let icons = {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&style.background)
            .map_err(|e| chart_error(CHART, &e))?;

        let mut builder = ChartBuilder::on(&root);
        builder
            .margin(style.margin)
            .set_label_area_size(LabelAreaPosition::Left, icon_area)
            .set_label_area_size(LabelAreaPosition::Top, icon_area);
        if style.draw_text {
            builder.caption(
                overlap_title(category, region),
                (style.font_family, style.caption_size),
            );
        }
        let mut chart = builder
            .build_cartesian_2d(0.0..side, 0.0..side)
            .map_err(|e| chart_error(CHART, &e))?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(0)
            .y_labels(0)
            .draw()
            .map_err(|e| chart_error(CHART, &e))?;

        let cells = matrix.indexed_iter().map(|((row, col), &count)| {
            let t = if peak == 0 {
                0.0
            } else {
                count as f64 / peak as f64
            };
            let top = side - row as f64;
            let left = col as f64;
            Rectangle::new(
                [(left, top - 1.0), (left + 1.0, top)],
                ramp(style.ramp_start, style.ramp_end, t).filled(),
            )
        });
        chart
            .draw_series(cells)
            .map_err(|e| chart_error(CHART, &e))?;

        if style.draw_text {
            let labels = matrix.indexed_iter().map(|((row, col), &count)| {
                Text::new(
                    count.to_string(),
                    (col as f64 + 0.5, side - row as f64 - 0.5),
                    annotation.clone(),
                )
            });
            chart
                .draw_series(labels)
                .map_err(|e| chart_error(CHART, &e))?;
        }

        let offset = (ICON_GAP + HEATMAP_ICON_SIZE / 2) as i32;
        let mut icons = Vec::with_capacity(2 * ELEMENT_COUNT);
        for (index, element) in Element::ALL.into_iter().enumerate() {
            let middle = index as f64 + 0.5;
            let (row_x, row_y) = chart.backend_coord(&(0.0, side - middle));
            icons.push(IconPlacement {
                element,
                center: (row_x - offset, row_y),
                size: HEATMAP_ICON_SIZE,
            });
            let (col_x, col_y) = chart.backend_coord(&(middle, side));
            icons.push(IconPlacement {
                element,
                center: (col_x, col_y - offset),
                size: HEATMAP_ICON_SIZE,
            });
        }

        root.present().map_err(|e| chart_error(CHART, &e))?;
        icons
    };

    Ok(Plot {
        canvas: canvas_from_rgb(width, height, buffer)?,
        icons,
        logo_offset: HEATMAP_LOGO_OFFSET,
    })
}

/// Render the overlap heatmap for one run and write it under the output
/// directory
///
/// # Errors
///
/// Returns an error if plotting fails, an asset is missing, or the file
/// cannot be written
pub fn render_overlap_chart(
    matrix: &Array2<usize>,
    category: &str,
    region: &str,
    ctx: &RenderContext<'_>,
) -> Result<PathBuf> {
    let path = overlap_chart_path(ctx.output_dir, category, region);
    let plot = plot_overlap_heatmap(matrix, category, region, ctx.style)?;
    finish(plot, ctx.assets, region, &path)?;
    debug!(path = %path.display(), "overlap chart rendered");
    Ok(path)
}
