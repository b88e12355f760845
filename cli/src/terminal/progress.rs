use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use pinsweep_core::progress::ProgressSink;

/// Renders probe completions as an indicatif bar with the most recently
/// tried PIN alongside the count.
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    pub fn new(total: usize, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(total as u64)
        };

        let style = ProgressStyle::with_template(
            "{spinner:.blue} {bar:40.green/white} {pos}/{len} PIN: {msg:.yellow} [{elapsed_precise} ETA {eta}]",
        )
        .unwrap()
        .tick_strings(&["▁▁▁▁▁", "▁▂▂▂▁", "▁▄▂▄▁", "▂▄▆▄▂", "▄▆█▆▄", "▂▄▆▄▂", "▁▄▂▄▁", "▁▂▂▂▁"]);

        bar.set_style(style);
        bar.set_message("----");
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    pub fn finish_and_clear(&self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressSink for ProgressReporter {
    fn report(&self, candidate: &str, completed: usize, _total: usize) {
        self.bar.set_position(completed as u64);
        self.bar.set_message(candidate.to_string());
    }
}
