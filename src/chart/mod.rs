//! Chart rendering: plots are drawn into memory, decorated with icons and a
//! region logo, then written once

/// Horizontal bar chart of combination coverage
pub mod bars;
/// Heatmap of the co-occurrence matrix
pub mod heatmap;
/// Color ramp used by both charts
pub mod palette;

use crate::bestiary::element::Element;
use crate::io::configuration::{CANVAS_HEIGHT, CANVAS_WIDTH, LOGO_WIDTH};
use crate::io::error::{Result, WeakmapError, chart_error};
use crate::io::image::{AssetStore, paste_bottom_right, paste_centered, save_png};
use image::RgbaImage;
use plotters::style::{FontStyle, RGBColor, WHITE, register_font};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Look shared by every chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    /// Canvas size in pixels
    pub canvas: (u32, u32),
    /// Canvas background
    pub background: RGBColor,
    /// Low end of the bar/cell color ramp
    pub ramp_start: RGBColor,
    /// High end of the bar/cell color ramp
    pub ramp_end: RGBColor,
    /// Font family for captions and labels
    pub font_family: &'static str,
    /// Caption font size
    pub caption_size: u32,
    /// Axis label and annotation font size
    pub label_size: u32,
    /// Outer margin around the plot
    pub margin: u32,
    /// Draw captions, tick labels and cell annotations
    ///
    /// Requires a font registered under `font_family`, see
    /// [`register_chart_font`].
    pub draw_text: bool,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            canvas: (CANVAS_WIDTH, CANVAS_HEIGHT),
            background: WHITE,
            ramp_start: palette::RAMP_START,
            ramp_end: palette::RAMP_END,
            font_family: "sans-serif",
            caption_size: 40,
            label_size: 28,
            margin: 30,
            draw_text: false,
        }
    }
}

/// Where an element icon goes on the rendered plot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconPlacement {
    /// Element whose icon is drawn
    pub element: Element,
    /// Pixel the icon is centred on
    pub center: (i32, i32),
    /// Side of the square icon in pixels
    pub size: u32,
}

/// A plotted chart before decoration
#[derive(Debug, Clone)]
pub struct Plot {
    /// Rasterised plot
    pub canvas: RgbaImage,
    /// Icons to paste over the plot
    pub icons: Vec<IconPlacement>,
    /// Logo distance from the right and bottom edges
    pub logo_offset: (u32, u32),
}

/// Shared inputs of the two chart entry points
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// Icon and logo source
    pub assets: &'a AssetStore,
    /// Directory receiving the PNG files
    pub output_dir: &'a Path,
    /// Chart look
    pub style: &'a ChartStyle,
}

/// Register a TrueType/OpenType font file as the `family` used by the charts
///
/// The font bytes stay alive for the rest of the process.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a usable font
pub fn register_chart_font(path: &Path, family: &str) -> Result<()> {
    let bytes = std::fs::read(path).map_err(|e| WeakmapError::FileSystem {
        path: path.to_path_buf(),
        operation: "read font",
        source: e,
    })?;
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    // The registration error carries no detail worth reporting
    if register_font(family, FontStyle::Normal, bytes).is_err() {
        return Err(chart_error("font", &"not a TrueType/OpenType font"));
    }
    debug!(path = %path.display(), family, "chart font registered");
    Ok(())
}

/// Output path of a combination chart
pub fn combination_chart_path(
    output_dir: &Path,
    size: usize,
    category: &str,
    region: &str,
) -> PathBuf {
    output_dir.join(format!(
        "mobs_per_weakness_{size}-{category}_from_{region}.png"
    ))
}

/// Output path of an overlap heatmap
pub fn overlap_chart_path(output_dir: &Path, category: &str, region: &str) -> PathBuf {
    output_dir.join(format!("weaknesses_overlap-{category}_from_{region}.png"))
}

/// Paste the icons and the region logo onto a plot
///
/// # Errors
///
/// Returns an error if an icon or the logo cannot be loaded
pub fn decorate(plot: Plot, assets: &AssetStore, region: &str) -> Result<RgbaImage> {
    let Plot {
        mut canvas,
        icons,
        logo_offset,
    } = plot;

    let mut loaded: HashMap<(Element, u32), RgbaImage> = HashMap::new();
    for placement in &icons {
        let icon = match loaded.entry((placement.element, placement.size)) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                entry.insert(assets.load_icon(placement.element, placement.size)?)
            }
        };
        paste_centered(&mut canvas, icon, placement.center);
    }

    let logo = assets.load_logo(region, LOGO_WIDTH)?;
    paste_bottom_right(&mut canvas, &logo, logo_offset);

    Ok(canvas)
}

/// Decorate a plot and write it to `path`
///
/// # Errors
///
/// Returns an error if an asset is missing or the file cannot be written
pub fn finish(plot: Plot, assets: &AssetStore, region: &str, path: &Path) -> Result<()> {
    let canvas = decorate(plot, assets, region)?;
    save_png(&canvas, path)
}
