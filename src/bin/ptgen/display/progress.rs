use std::io::{self, Write};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

const TICK_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Numbered steps drawn on stderr. Every call is a no-op when not interactive.
pub struct Progress {
    interactive: bool,
    total: u8,
    started: u8,
    clock: Instant,
    current: Option<Step>,
}

struct Step {
    label: &'static str,
    clock: Instant,
    spinner: ProgressBar,
}

impl Progress {
    pub fn new(interactive: bool, total: u8) -> Self {
        Self {
            interactive,
            total,
            started: 0,
            clock: Instant::now(),
            current: None,
        }
    }

    /// Starts a spinner for the next step.
    pub fn begin(&mut self, label: &'static str) {
        if !self.interactive {
            return;
        }
        self.clear();
        self.started += 1;

        let spinner = ProgressBar::new_spinner()
            .with_style(spinner_style())
            .with_message(format!("[{}/{}] {label}...", self.started, self.total));
        spinner.enable_steady_tick(Duration::from_millis(80));

        self.current = Some(Step {
            label,
            clock: Instant::now(),
            spinner,
        });
    }

    /// Replaces the spinner with a check mark, the step time and one line per detail.
    pub fn end(&mut self, details: &[String]) {
        let Some(step) = self.current.take() else {
            return;
        };
        step.spinner.finish_and_clear();

        let mut stderr = io::stderr().lock();
        let _ = writeln!(
            stderr,
            "  \x1b[32m✓\x1b[0m {:<44} {:>6.3}s",
            step.label,
            step.clock.elapsed().as_secs_f64()
        );
        for detail in details {
            let _ = writeln!(stderr, "      \x1b[2m·\x1b[0m {detail}");
        }
    }

    pub fn finish(mut self) {
        if !self.interactive {
            return;
        }
        self.clear();

        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr);
        let _ = writeln!(
            stderr,
            "  \x1b[32m✓\x1b[0m Done: {} of {} steps in {:.3}s",
            self.started,
            self.total,
            self.clock.elapsed().as_secs_f64()
        );
        let _ = writeln!(stderr);
    }

    fn clear(&mut self) {
        if let Some(step) = self.current.take() {
            step.spinner.finish_and_clear();
        }
    }
}

impl Drop for Progress {
    fn drop(&mut self) {
        self.clear();
    }
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .template("  {spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars(TICK_CHARS)
}
