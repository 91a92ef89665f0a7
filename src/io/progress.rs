//! Batch progress display for banner generation runs

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Banners: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar covering a batch of banners
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress bar sized for `total` banners
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(BATCH_STYLE.clone());
        Self { bar }
    }

    /// Mark one banner as finished, showing its output file name
    pub fn complete_banner(&self, file_name: &str) {
        self.bar.set_message(file_name.to_string());
        self.bar.inc(1);
    }

    /// Finish and clear the display
    pub fn finish(&self) {
        self.bar.finish_with_message("All banners generated");
    }
}

#[cfg(test)]
mod tests {
    use super::ProgressManager;

    #[test]
    fn tracks_batch_completion() {
        let progress = ProgressManager::new(3);
        progress.complete_banner("banner_000.png");
        progress.complete_banner("banner_001.png");
        assert_eq!(progress.bar.position(), 2);
        progress.finish();
    }
}
