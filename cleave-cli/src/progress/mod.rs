//! Progress reporting module
//!
//! Two independent channels: an `indicatif` bar over input files, and
//! rate-limited debug log messages while lines stream through.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Progress reporter for file processing
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize progress bar for file processing
    pub fn init_files(&mut self, total_files: u64) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total_files);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}")
        {
            pb.set_style(style.progress_chars("##-"));
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Update progress for a completed file
    pub fn file_completed(&self, filename: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Cleaved: {}", filename));
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Complete");
        }
    }
}

/// Emits "so far" debug messages at most once per interval
#[derive(Debug)]
pub struct ProgressLog {
    interval: Duration,
    last: Option<Instant>,
}

impl ProgressLog {
    /// Create a log that reports every `interval`
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// Note progress; logs when the interval has elapsed
    ///
    /// Returns `true` if a message was logged.
    pub fn tick(&mut self, count: u64) -> bool {
        if !log::log_enabled!(log::Level::Debug) {
            return false;
        }
        self.tick_at(Instant::now(), count)
    }

    fn tick_at(&mut self, now: Instant, count: u64) -> bool {
        match self.last {
            None => {
                log::debug!("Now cleaving documents.");
                self.last = Some(now);
                true
            }
            Some(last) if now > last + self.interval => {
                log::debug!("Cleaved {} documents, so far.", count);
                self.last = Some(now);
                true
            }
            Some(_) => false,
        }
    }

    /// Forget the last message so the next tick starts over
    pub fn reset(&mut self) {
        self.last = None;
    }
}
