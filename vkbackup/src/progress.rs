use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};

pub trait ProgressSink {
    /// `current` items out of `total` are done.
    fn report(&mut self, current: usize, total: usize);
}

/// Discards progress updates.
#[derive(Debug, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&mut self, _current: usize, _total: usize) {}
}

/// Renders a terminal progress bar. Stays hidden when disabled or when
/// stderr is not a TTY.
pub struct TerminalProgress {
    bar: ProgressBar,
}

impl TerminalProgress {
    pub fn new(enabled: bool) -> Self {
        if !enabled || !std::io::stderr().is_terminal() {
            return Self {
                bar: ProgressBar::hidden(),
            };
        }
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::with_template("Progress: [{bar:40.cyan/blue}] {pos}/{len} {percent}%")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▉-"),
        );
        Self { bar }
    }
}

impl ProgressSink for TerminalProgress {
    fn report(&mut self, current: usize, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(current as u64);
        if current >= total {
            self.bar.finish();
        }
    }
}

impl Drop for TerminalProgress {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.abandon();
        }
    }
}
