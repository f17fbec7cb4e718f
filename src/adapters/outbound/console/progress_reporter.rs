use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;
use std::path::Path;

const PROGRESS_TEMPLATE: &str =
    "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) - {msg}";

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Keeps stdout free for the report. Uses an indicatif progress bar while
/// descriptors are being read.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
        }
    }

    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut slot = self.progress_bar.borrow_mut();
        if let Some(pb) = slot.as_ref() {
            return pb.clone();
        }

        let pb = ProgressBar::new(total as u64);
        match ProgressStyle::default_bar().template(PROGRESS_TEMPLATE) {
            Ok(style) => pb.set_style(style.progress_chars("=>-")),
            Err(_) => pb.set_style(ProgressStyle::default_bar()),
        }
        *slot = Some(pb.clone());
        pb
    }

    fn finish_progress_bar(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_progress(&self, current: usize, total: usize, descriptor: Option<&Path>) {
        let pb = self.get_or_create_progress_bar(total);
        pb.set_position(current as u64);
        if let Some(path) = descriptor {
            pb.set_message(path.display().to_string());
        }
    }

    fn report_skipped(&self, descriptor: &Path, reason: &str) {
        let pb = self.progress_bar.borrow();
        let line = format!(
            "⚠️  Skipped {}: {}",
            descriptor.display(),
            reason.lines().next().unwrap_or(reason)
        );
        match pb.as_ref() {
            Some(pb) => pb.println(line.yellow().to_string()),
            None => eprintln!("{}", line.yellow()),
        }
    }

    fn report_completion(&self, message: &str) {
        self.finish_progress_bar();
        eprintln!("{}", message.green());
    }
}
