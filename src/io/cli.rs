//! Command-line interface and the batch driver over every (category, region) run

use crate::analysis::combinations::count_per_combination;
use crate::analysis::overlap::weakness_overlap;
use crate::analysis::summary::RunSummary;
use crate::bestiary::dataset::get_mobs;
use crate::bestiary::modes::{CategoryMode, RegionMode};
use crate::chart::bars::render_combination_chart;
use crate::chart::heatmap::render_overlap_chart;
use crate::chart::{ChartStyle, RenderContext, register_chart_font};
use crate::io::configuration::{
    BatchPlan, DEFAULT_ASSET_DIR, DEFAULT_ASSET_EXTENSION, DEFAULT_FONT_FILE, DEFAULT_MOB_FILE,
    DEFAULT_OUTPUT_DIR, DEFAULT_ZONE_FILE,
};
use crate::io::error::Result;
use crate::io::image::AssetStore;
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "weakmap")]
#[command(
    author,
    version,
    about = "Chart how many bestiary mobs share elemental weaknesses"
)]
/// Command-line arguments for the weakness chart batch
pub struct Cli {
    /// Mob dataset (JSON map of mob name to Type, Zones and Weaknesses)
    #[arg(long, value_name = "FILE", default_value = DEFAULT_MOB_FILE)]
    pub mobs: PathBuf,

    /// Zone dataset (JSON map of region name to zone names)
    #[arg(long, value_name = "FILE", default_value = DEFAULT_ZONE_FILE)]
    pub zones: PathBuf,

    /// Directory holding element icons and region logos
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_ASSET_DIR)]
    pub assets: PathBuf,

    /// File extension of the icon and logo assets
    #[arg(short = 'e', long, default_value = DEFAULT_ASSET_EXTENSION)]
    pub asset_extension: String,

    /// Font for chart captions and labels [default: font.ttf in the asset directory]
    #[arg(short, long, value_name = "FILE")]
    pub font: Option<PathBuf>,

    /// Directory receiving the rendered charts
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Only run this category mode (all, normal, elite)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Only run this region mode
    #[arg(short, long)]
    pub region: Option<String>,

    /// Print the summaries without rendering charts
    #[arg(short, long)]
    pub summary_only: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check if charts should be rendered
    pub const fn should_render(&self) -> bool {
        !self.summary_only
    }

    /// Font file used for chart text
    pub fn font_path(&self) -> PathBuf {
        self.font
            .clone()
            .unwrap_or_else(|| self.assets.join(DEFAULT_FONT_FILE))
    }
}

/// Drives every run of a batch plan: load, aggregate, render, summarise
pub struct BatchProcessor {
    cli: Cli,
    plan: BatchPlan,
    style: ChartStyle,
}

impl BatchProcessor {
    /// Create a processor over the default mode tables, narrowed by the
    /// `--category`/`--region` selectors
    ///
    /// # Errors
    ///
    /// Returns an error if a selector names an unknown mode, or an explicitly
    /// given font cannot be read or registered
    pub fn new(cli: Cli) -> Result<Self> {
        let plan = BatchPlan::default().restrict(cli.category.as_deref(), cli.region.as_deref())?;
        let mut style = ChartStyle::default();
        if cli.should_render() {
            style.draw_text = Self::load_font(&cli, style.font_family)?;
        }
        Ok(Self { cli, plan, style })
    }

    /// Create a processor over an explicit plan
    pub fn with_plan(cli: Cli, plan: BatchPlan) -> Self {
        Self {
            cli,
            plan,
            style: ChartStyle::default(),
        }
    }

    /// Register the chart font; an absent default font only disables text
    fn load_font(cli: &Cli, family: &str) -> Result<bool> {
        let path = cli.font_path();
        if cli.font.is_none() && !path.exists() {
            warn!(
                path = %path.display(),
                "no chart font found, rendering charts without text"
            );
            return Ok(false);
        }
        register_chart_font(&path, family)?;
        Ok(true)
    }

    /// The plan this processor runs
    pub const fn plan(&self) -> &BatchPlan {
        &self.plan
    }

    /// Run every (category mode, region mode) pair in order
    ///
    /// Each run's summary is printed as soon as the run finishes. The first
    /// failing run aborts the batch.
    ///
    /// # Errors
    ///
    /// Returns an error if a dataset cannot be loaded, a region is unknown,
    /// an asset is missing or a chart cannot be written
    pub fn process(&self) -> Result<Vec<RunSummary>> {
        let runs = self.plan.run_count();
        let progress = if self.cli.should_show_progress() {
            ProgressManager::new(runs)
        } else {
            ProgressManager::hidden(runs)
        };

        let start_time = Instant::now();
        let mut summaries = Vec::with_capacity(runs);
        for (category, region) in self.plan.runs() {
            progress.start_run(&category.name, &region.name);
            let summary = self.process_run(category, region)?;
            progress.println(&summary.to_string());
            progress.complete_run();
            summaries.push(summary);
        }
        progress.finish();

        info!(
            runs = summaries.len(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "batch complete"
        );
        Ok(summaries)
    }

    fn process_run(&self, category: &CategoryMode, region: &RegionMode) -> Result<RunSummary> {
        let mobs = get_mobs(
            &self.cli.mobs,
            &self.cli.zones,
            &category.categories,
            &region.regions,
        )?;
        info!(
            category = %category.name,
            region = %region.name,
            mobs = mobs.len(),
            "mob set loaded"
        );

        if self.cli.should_render() {
            let assets = AssetStore::new(self.cli.assets.clone(), &self.cli.asset_extension);
            let ctx = RenderContext {
                assets: &assets,
                output_dir: &self.cli.output,
                style: &self.style,
            };

            for size in self.plan.combination_sizes.clone() {
                let results = count_per_combination(&mobs, size, size);
                render_combination_chart(&results, size, &category.name, &region.name, &ctx)?;
            }

            let matrix = weakness_overlap(&mobs);
            render_overlap_chart(&matrix, &category.name, &region.name, &ctx)?;
        }

        Ok(RunSummary::new(&mobs, &category.name, &region.name))
    }
}
