//! Progress display over the (category mode, region mode) runs of a batch

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static RUN_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template =
        format!("[{{elapsed_precise}}] Runs: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}");
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar counting finished runs
///
/// Text printed while the bar is visible goes through [`ProgressManager::println`]
/// so the bar is redrawn below it.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress bar for `runs` runs
    pub fn new(runs: usize) -> Self {
        let bar = ProgressBar::new(runs as u64);
        bar.set_style(RUN_STYLE.clone());
        Self { bar }
    }

    /// Create a manager that tracks runs without drawing
    pub fn hidden(runs: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(runs as u64);
        Self { bar }
    }

    /// Show which run is in progress
    pub fn start_run(&self, category: &str, region: &str) {
        self.bar.set_message(format!("{category} / {region}"));
    }

    /// Count a finished run
    pub fn complete_run(&self) {
        self.bar.inc(1);
    }

    /// Number of runs completed so far
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Print a block of text above the bar
    // Summary blocks are the tool's stdout output
    #[allow(clippy::print_stdout)]
    pub fn println(&self, text: &str) {
        self.bar.suspend(|| println!("{text}"));
    }

    /// Stop the bar and leave it on screen
    ///
    /// The position is kept as is, so [`ProgressManager::completed`] still
    /// reports the runs that actually finished.
    pub fn finish(&self) {
        self.bar.abandon_with_message("All runs processed");
    }
}
