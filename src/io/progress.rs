//! Multi-image progress tracking with automatic batching for large sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Coordinates progress display for batch assembly
///
/// Shows one placement bar per image for small batches and adds a single
/// batch bar once the image count exceeds the individual bar limit. Only the
/// most recent images keep a visible bar.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    image_bars: Vec<ProgressBar>,
    /// Stores (`filename`, `placed`, `total`) for rolling window display
    image_states: Vec<(String, usize, usize)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PLACEMENT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.green/white}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Images: [{bar:40.green/white}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            image_bars: Vec::new(),
            image_states: Vec::new(),
        }
    }

    /// Initialize progress bars based on image count
    pub fn initialize(&mut self, image_count: usize) {
        if image_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(image_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..image_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let pb = ProgressBar::new(0);
            pb.set_style(PLACEMENT_STYLE.clone());
            self.image_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Configure progress for a new image with `total` patches to place
    pub fn start_image(&mut self, index: usize, path: &Path, total: usize) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.image_states.len() {
            self.image_states.resize(index + 1, (String::new(), 0, 0));
        }
        if let Some(state) = self.image_states.get_mut(index) {
            *state = (display_name, 0, total);
        }
        self.update_bars();
    }

    /// Report the number of patches placed so far
    pub fn update_placements(&mut self, index: usize, placed: usize) {
        if let Some(state) = self.image_states.get_mut(index) {
            state.1 = placed;
        }
        self.update_bars();
    }

    /// Mark an image as assembled and advance the batch bar
    pub fn complete_image(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.image_states.get_mut(index) {
            state.0 = format!("✓ {}", state.0);
            state.1 = state.2;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All images assembled");
        }
        let _ = self.multi_progress.clear();
    }

    /// Number of per-image bars allocated
    pub fn bar_count(&self) -> usize {
        self.image_bars.len()
    }

    /// Whether a batch bar is shown
    pub const fn has_batch_bar(&self) -> bool {
        self.batch_bar.is_some()
    }

    /// Recorded (`placed`, `total`) for an image
    pub fn image_progress(&self, index: usize) -> Option<(usize, usize)> {
        self.image_states
            .get(index)
            .map(|(_, placed, total)| (*placed, *total))
    }

    fn update_bars(&self) {
        let active: Vec<&(String, usize, usize)> = self
            .image_states
            .iter()
            .filter(|(name, _, _)| !name.is_empty())
            .collect();

        let start = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start..).unwrap_or(&[]);

        for (bar, (name, placed, total)) in self.image_bars.iter().zip(visible.iter().copied()) {
            bar.set_length(*total as u64);
            bar.set_position(*placed as u64);
            let total_width = total.to_string().len();
            bar.set_message(format!("{placed:>total_width$}/{total}"));
            bar.set_prefix(name.clone());
        }

        for bar in self.image_bars.iter().skip(visible.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_message(String::new());
            bar.set_prefix(String::new());
        }
    }
}
