//! Progress reporting for batch pattern generation

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Combinations: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar over the combinations of one batch run
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create a progress manager; `quiet` suppresses all output
    pub fn new(quiet: bool) -> Self {
        Self {
            bar: (!quiet).then(ProgressBar::hidden),
        }
    }

    /// Begin tracking a batch of `total` combinations
    pub fn start(&mut self, total: usize) {
        if let Some(bar) = &self.bar {
            bar.set_length(total as u64);
            bar.set_style(BATCH_STYLE.clone());
            bar.set_draw_target(indicatif::ProgressDrawTarget::stderr());
            bar.enable_steady_tick(Duration::from_millis(100));
        }
    }

    /// Record one processed combination with a short status message
    pub fn advance(&self, message: impl Into<String>) {
        if let Some(bar) = &self.bar {
            bar.set_message(message.into());
            bar.inc(1);
        }
    }

    /// Finish the batch, leaving a summary line
    pub fn finish(&self, summary: impl Into<String>) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message(summary.into());
        }
    }
}
