//! Progress display for multi-level generation runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Tracks accepted levels and the attempts each one needed
pub struct ProgressManager {
    bar: ProgressBar,
    level_count: usize,
}

impl ProgressManager {
    /// Create a progress bar for `level_count` levels
    pub fn new(level_count: usize) -> Self {
        Self::with_bar(ProgressBar::new(level_count as u64), level_count)
    }

    /// Create a progress manager that draws nothing
    pub fn hidden(level_count: usize) -> Self {
        Self::with_bar(ProgressBar::hidden(), level_count)
    }

    fn with_bar(bar: ProgressBar, level_count: usize) -> Self {
        bar.set_length(level_count as u64);
        bar.set_style(Self::level_style());
        Self { bar, level_count }
    }

    /// Announce the level now being generated
    pub fn start_level(&self, level: usize) {
        let width = self.level_count.to_string().len();
        self.bar
            .set_message(format!("level {:>width$}/{}", level + 1, self.level_count));
    }

    /// Mark a level as accepted
    pub fn complete_level(&self, level: usize, attempts: usize, elapsed: Duration) {
        self.bar.inc(1);
        self.bar.set_message(format!(
            "level {} accepted after {attempts} attempts in {:.1?}",
            level + 1,
            elapsed
        ));
    }

    /// Levels accepted so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Finish the display
    pub fn finish(&self) {
        self.bar.finish_with_message("All levels generated");
    }

    fn level_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template(&format!(
                "[{{elapsed_precise}}] Levels: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
            ))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏ ")
    }
}
