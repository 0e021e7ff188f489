//! Progress display for long log scans, built on indicatif.

use indicatif::{ProgressBar as IndicatifBar, ProgressStyle};

/// Progress bar shown on stderr while a log file is scanned
pub struct ProgressBar {
    bar: IndicatifBar,
}

impl ProgressBar {
    /// Create a bar measuring `total` bytes
    pub fn new(total: usize, label: &str) -> Self {
        let bar = IndicatifBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{msg} [{bar:40.cyan/blue}] {percent:>3}% ({bytes}/{total_bytes}) {eta}")
        {
            bar.set_style(style.progress_chars("█░"));
        }
        bar.set_message(label.to_string());

        Self { bar }
    }

    /// Create a spinner for inputs of unknown size (compressed files)
    pub fn new_spinner(label: &str) -> Self {
        let bar = IndicatifBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{msg} {spinner} {pos} lines")
        {
            bar.set_style(style);
        }
        bar.set_message(label.to_string());

        Self { bar }
    }

    pub fn update(&self, current: usize) {
        self.bar.set_position(current as u64);
    }

    pub fn finish_with_message(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }
}
