use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::ui;

/// Stderr progress for long backend sweeps. Every method is a no-op when
/// progress is turned off (`--progress off`, `--quiet`, or no terminal).
pub struct Progress {
    bar: Option<ProgressBar>,
}

fn bar_template(columns: Option<usize>) -> &'static str {
    match columns {
        Some(cols) if cols >= 110 => "{bar:40.green/white} {pos}/{len} {wide_msg}",
        Some(cols) if cols >= 80 => "{wide_bar:.green/white} {pos}/{len} {msg}",
        _ => "{wide_bar:.green/white} {percent}% {msg}",
    }
}

impl Progress {
    const fn off() -> Self {
        Self { bar: None }
    }

    /// Indeterminate indicator for a single round trip.
    #[must_use]
    pub fn spinner(message: &str) -> Self {
        if !ui::prefs().progress {
            return Self::off();
        }
        let style = ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        let bar = ProgressBar::new_spinner()
            .with_style(style)
            .with_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(120));
        Self { bar: Some(bar) }
    }

    /// Counted bar. Pass 0 when the total is only known once the sweep starts.
    #[must_use]
    pub fn bar(total: u64, message: &str) -> Self {
        let prefs = ui::prefs();
        if !prefs.progress {
            return Self::off();
        }
        let style = ProgressStyle::with_template(bar_template(prefs.term_width))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        let bar = ProgressBar::new(total)
            .with_style(style)
            .with_message(message.to_string());
        Self { bar: Some(bar) }
    }

    fn with(&self, f: impl FnOnce(&ProgressBar)) {
        if let Some(bar) = &self.bar {
            f(bar);
        }
    }

    pub fn set_length(&self, total: u64) {
        self.with(|bar| bar.set_length(total));
    }

    pub fn set_message(&self, message: &str) {
        self.with(|bar| bar.set_message(message.to_string()));
    }

    pub fn inc(&self, delta: u64) {
        self.with(|bar| bar.inc(delta));
    }

    pub fn finish_ok(&self, message: &str) {
        self.with(|bar| bar.finish_with_message(message.to_string()));
    }

    pub fn finish_clear(&self) {
        self.with(ProgressBar::finish_and_clear);
    }

    pub fn finish_err(&self, message: &str) {
        self.with(|bar| bar.abandon_with_message(message.to_string()));
    }
}
