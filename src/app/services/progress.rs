//! Progress reporting for conversion pipelines
//!
//! Strategies report integer percentages through a [`ProgressSink`] after each
//! fixed stage. Sinks know nothing about threads: a closure, a progress bar,
//! or nothing at all can be plugged in, and the caller decides where the
//! conversion runs.

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

/// Receiver of percentage updates in `0..=100`
pub trait ProgressSink {
    fn report(&mut self, percent: u8);
}

impl<F: FnMut(u8)> ProgressSink for F {
    fn report(&mut self, percent: u8) {
        self(percent)
    }
}

/// Sink that discards every update
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&mut self, _percent: u8) {}
}

/// Sink that drives an `indicatif` bar with a length of 100
#[derive(Debug, Clone)]
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    pub fn new(bar: ProgressBar) -> Self {
        Self { bar }
    }

    pub fn bar(&self) -> &ProgressBar {
        &self.bar
    }
}

impl ProgressSink for BarProgress {
    fn report(&mut self, percent: u8) {
        self.bar.set_position(u64::from(percent));
    }
}

/// Create the per-file percentage bar used by the CLI
pub fn create_conversion_bar(message: &str) -> ProgressBar {
    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>3}% | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏  "),
    );
    pb.set_message(message.to_string());
    pb
}

/// Percentage reached after `stage` of `total` stages, rounded to nearest
pub fn stage_percent(stage: u32, total: u32) -> u8 {
    if total == 0 {
        return 100;
    }
    let stage = stage.min(total);
    ((stage * 100 + total / 2) / total) as u8
}

/// Tracks stage boundaries of one conversion and forwards percentages
pub struct StageTracker<'a> {
    total: u32,
    completed: u32,
    last_reported: u8,
    sink: &'a mut dyn ProgressSink,
}

impl<'a> StageTracker<'a> {
    pub fn new(total: u32, sink: &'a mut dyn ProgressSink) -> Self {
        Self {
            total,
            completed: 0,
            last_reported: 0,
            sink,
        }
    }

    /// Mark the next stage as done and report progress
    pub fn complete_stage(&mut self, name: &str) {
        self.completed = (self.completed + 1).min(self.total);
        debug!("Stage {}/{} complete: {}", self.completed, self.total, name);
        self.emit(stage_percent(self.completed, self.total));
    }

    /// Mark every remaining stage as done and report 100
    pub fn finish(&mut self) {
        self.completed = self.total;
        self.emit(100);
    }

    pub fn completed(&self) -> u32 {
        self.completed
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    fn emit(&mut self, percent: u8) {
        let percent = percent.max(self.last_reported);
        self.last_reported = percent;
        self.sink.report(percent);
    }
}
