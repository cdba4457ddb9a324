//! Terminal progress for the loading, matching and placement stages

use crate::io::configuration::SPINNER_TICK_MS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

static PLACEMENT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.green} [{elapsed_precise}] Placed {pos} tiles ({per_sec})")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Coordinates progress display for one mosaic run
///
/// A spinner names the stage currently running; once tiles start landing on
/// the canvas a second line counts placements.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    stage_bar: Option<ProgressBar>,
    placement_bar: Option<ProgressBar>,
    placements: u64,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager with nothing displayed yet
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            stage_bar: None,
            placement_bar: None,
            placements: 0,
        }
    }

    /// Show `message` as the running stage, replacing the previous one
    pub fn start_stage(&mut self, message: &str) {
        if let Some(bar) = self.stage_bar.take() {
            bar.finish_and_clear();
        }
        let bar = self.multi_progress.add(ProgressBar::new_spinner());
        bar.set_style(STAGE_STYLE.clone());
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        self.stage_bar = Some(bar);
    }

    /// Count one tile placed on the canvas
    pub fn record_placement(&mut self) {
        let multi_progress = &self.multi_progress;
        let bar = self.placement_bar.get_or_insert_with(|| {
            let bar = multi_progress.add(ProgressBar::new_spinner());
            bar.set_style(PLACEMENT_STYLE.clone());
            bar
        });
        bar.inc(1);
        self.placements += 1;
    }

    /// Number of placements recorded so far
    pub const fn placements(&self) -> u64 {
        self.placements
    }

    /// Clean up all progress displays
    pub fn finish(&mut self) {
        if let Some(bar) = self.stage_bar.take() {
            bar.finish_and_clear();
        }
        if let Some(bar) = self.placement_bar.take() {
            bar.finish_and_clear();
        }
        let _ = self.multi_progress.clear();
    }
}
