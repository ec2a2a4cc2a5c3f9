//! Default paths, batch parameters and chart geometry

use crate::bestiary::modes::{CategoryMode, RegionMode};
use crate::io::error::{Result, invalid_parameter};
use std::ops::RangeInclusive;

// Input and output locations
/// Default mob dataset path
pub const DEFAULT_MOB_FILE: &str = "mobs.json";
/// Default zone dataset path
pub const DEFAULT_ZONE_FILE: &str = "zones.json";
/// Default directory holding element icons and region logos
pub const DEFAULT_ASSET_DIR: &str = "assets";
/// Default file extension of icon and logo assets
pub const DEFAULT_ASSET_EXTENSION: &str = "webp";
/// Font file looked up in the asset directory when no font is given
pub const DEFAULT_FONT_FILE: &str = "font.ttf";
/// Default directory receiving the rendered charts
pub const DEFAULT_OUTPUT_DIR: &str = "charts";

// Batch parameters
/// Smallest combination size charted per run
pub const MIN_COMBINATION_SIZE: usize = 2;
/// Largest combination size charted per run
pub const MAX_COMBINATION_SIZE: usize = 3;

// Chart geometry, 12x8 inches at 200 dpi
/// Rendered chart width in pixels
pub const CANVAS_WIDTH: u32 = 2400;
/// Rendered chart height in pixels
pub const CANVAS_HEIGHT: u32 = 1600;

/// Side of the element icons next to each bar
pub const BAR_ICON_SIZE: u32 = 36;
/// Side of the element icons along the heatmap edges
pub const HEATMAP_ICON_SIZE: u32 = 64;
/// Gap between an icon and the axis it labels, and between neighbouring icons
pub const ICON_GAP: u32 = 8;

/// Bar chart x axis always spans at least this many mobs
pub const MIN_BAR_AXIS_SPAN: usize = 60;
/// Distance between x axis ticks of the bar chart
pub const BAR_TICK_STEP: usize = 2;
/// Fraction of a row occupied by its bar
pub const BAR_THICKNESS: f64 = 0.8;

// Region logo overlay
/// Width the region logo is resized to
pub const LOGO_WIDTH: u32 = 400;
/// Logo distance from the right and bottom edges on bar charts
pub const BAR_LOGO_OFFSET: (u32, u32) = (25, 150);
/// Logo distance from the right and bottom edges on heatmaps
pub const HEATMAP_LOGO_OFFSET: (u32, u32) = (25, 25);

// Progress bar display settings
/// Width of the batch progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// The mode tables and combination sizes a batch iterates over
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchPlan {
    /// Category modes, iterated in the outer loop
    pub category_modes: Vec<CategoryMode>,
    /// Region modes, iterated in the inner loop
    pub region_modes: Vec<RegionMode>,
    /// Combination sizes charted for every run
    pub combination_sizes: RangeInclusive<usize>,
}

impl Default for BatchPlan {
    fn default() -> Self {
        Self {
            category_modes: CategoryMode::defaults(),
            region_modes: RegionMode::defaults(),
            combination_sizes: MIN_COMBINATION_SIZE..=MAX_COMBINATION_SIZE,
        }
    }
}

impl BatchPlan {
    /// Keep only the named category mode and/or region mode
    ///
    /// # Errors
    ///
    /// Returns an error if a name does not match any mode of the plan
    pub fn restrict(mut self, category: Option<&str>, region: Option<&str>) -> Result<Self> {
        if let Some(name) = category {
            self.category_modes.retain(|mode| mode.name == name);
            if self.category_modes.is_empty() {
                return Err(invalid_parameter(
                    "category",
                    &name,
                    &"not one of the configured category modes",
                ));
            }
        }

        if let Some(name) = region {
            self.region_modes.retain(|mode| mode.name == name);
            if self.region_modes.is_empty() {
                return Err(invalid_parameter(
                    "region",
                    &name,
                    &"not one of the configured region modes",
                ));
            }
        }

        Ok(self)
    }

    /// Every (category mode, region mode) pair, category modes outermost
    pub fn runs(&self) -> impl Iterator<Item = (&CategoryMode, &RegionMode)> {
        self.category_modes.iter().flat_map(move |category| {
            self.region_modes
                .iter()
                .map(move |region| (category, region))
        })
    }

    /// Number of runs in the batch
    pub fn run_count(&self) -> usize {
        self.category_modes.len() * self.region_modes.len()
    }
}
